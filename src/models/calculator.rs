//! Shipping cost calculator models
//!
//! Box sizes are entered as `L-W-H` or `LxWxH` in centimetres. The cost is the
//! volume of a single box multiplied by a flat unit rate.

/// Reasons a calculator input is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorInputError {
    #[error("box count must be a whole number, got '{0}'")]
    InvalidBoxCount(String),

    #[error("expected three dimensions, got {0}")]
    WrongDimensionCount(usize),

    #[error("dimension '{0}' is not a whole number")]
    InvalidDimension(String),

    #[error("box volume is too large")]
    Overflow,
}

/// Box size in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxDimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl BoxDimensions {
    /// Volume in cubic centimetres
    pub fn volume(&self) -> Option<u64> {
        u64::from(self.length)
            .checked_mul(u64::from(self.width))?
            .checked_mul(u64::from(self.height))
    }
}

impl std::fmt::Display for BoxDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// Input collected by the calculator before a quote is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorInput {
    pub box_count: u64,
    pub dimensions: BoxDimensions,
}

/// Computed shipping estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub dimensions: BoxDimensions,
    pub volume_cm3: u64,
    pub cost: u64,
}

impl CalculatorInput {
    /// Price the input at `unit_rate` per cubic centimetre.
    ///
    /// The box count is carried along but does not affect the price.
    pub fn quote(&self, unit_rate: u64) -> Result<Quote, CalculatorInputError> {
        let volume_cm3 = self.dimensions.volume().ok_or(CalculatorInputError::Overflow)?;
        let cost = volume_cm3.checked_mul(unit_rate).ok_or(CalculatorInputError::Overflow)?;

        Ok(Quote {
            dimensions: self.dimensions,
            volume_cm3,
            cost,
        })
    }
}

/// Parse a box count: ASCII digits only, no sign, no whitespace
pub fn parse_box_count(text: &str) -> Result<u64, CalculatorInputError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(CalculatorInputError::InvalidBoxCount(text.to_string()));
    }

    text.parse::<u64>()
        .map_err(|_| CalculatorInputError::InvalidBoxCount(text.to_string()))
}

// Latin x plus the Cyrillic х that Russian keyboards produce
fn is_separator(c: char) -> bool {
    matches!(c, '-' | 'x' | 'х')
}

/// Parse `L-W-H` or `LxWxH`, case-insensitive, whitespace around numbers allowed
pub fn parse_dimensions(text: &str) -> Result<BoxDimensions, CalculatorInputError> {
    let lowered = text.to_lowercase();
    let parts: Vec<&str> = lowered.split(is_separator).collect();

    if parts.len() != 3 {
        return Err(CalculatorInputError::WrongDimensionCount(parts.len()));
    }

    let mut values = [0u32; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let trimmed = part.trim();
        *slot = trimmed
            .parse::<u32>()
            .map_err(|_| CalculatorInputError::InvalidDimension(trimmed.to_string()))?;
    }

    let [length, width, height] = values;
    Ok(BoxDimensions { length, width, height })
}
