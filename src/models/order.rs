//! Shipping order models

use chrono::{DateTime, Utc};

/// Marketplaces the service delivers to
pub const MARKETPLACES: [&str; 2] = ["Ozon", "Wildberries"];

/// Lowest order number handed out to customers
pub const MIN_ORDER_NUMBER: u16 = 1000;

/// Highest order number handed out to customers
pub const MAX_ORDER_NUMBER: u16 = 9999;

/// Order fields in the sequence the wizard asks for them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Marketplace,
    Warehouse,
    Date,
    Address,
    Distance,
    Boxes,
    Sender,
    Phone,
}

impl OrderField {
    /// All fields in entry order
    pub const ALL: [OrderField; 8] = [
        OrderField::Marketplace,
        OrderField::Warehouse,
        OrderField::Date,
        OrderField::Address,
        OrderField::Distance,
        OrderField::Boxes,
        OrderField::Sender,
        OrderField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Marketplace => "marketplace",
            OrderField::Warehouse => "warehouse",
            OrderField::Date => "date",
            OrderField::Address => "address",
            OrderField::Distance => "distance",
            OrderField::Boxes => "boxes",
            OrderField::Sender => "sender",
            OrderField::Phone => "phone",
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order being filled in by the wizard.
///
/// Every field holds the raw text the customer typed; nothing is parsed or
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub marketplace: Option<String>,
    pub warehouse: Option<String>,
    pub date: Option<String>,
    pub address: Option<String>,
    pub distance: Option<String>,
    pub boxes: Option<String>,
    pub sender: Option<String>,
    pub phone: Option<String>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text into a field
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            OrderField::Marketplace => self.marketplace = value,
            OrderField::Warehouse => self.warehouse = value,
            OrderField::Date => self.date = value,
            OrderField::Address => self.address = value,
            OrderField::Distance => self.distance = value,
            OrderField::Boxes => self.boxes = value,
            OrderField::Sender => self.sender = value,
            OrderField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        let value = match field {
            OrderField::Marketplace => &self.marketplace,
            OrderField::Warehouse => &self.warehouse,
            OrderField::Date => &self.date,
            OrderField::Address => &self.address,
            OrderField::Distance => &self.distance,
            OrderField::Boxes => &self.boxes,
            OrderField::Sender => &self.sender,
            OrderField::Phone => &self.phone,
        };
        value.as_deref()
    }

    /// True once all eight fields hold non-empty text
    pub fn is_complete(&self) -> bool {
        OrderField::ALL
            .iter()
            .all(|field| self.get(*field).map_or(false, |value| !value.is_empty()))
    }

    /// Fields still missing or empty, in entry order
    pub fn missing_fields(&self) -> Vec<OrderField> {
        OrderField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).map_or(true, str::is_empty))
            .collect()
    }

    /// Field values in entry order, empty strings for unset fields
    pub fn values(&self) -> [&str; 8] {
        OrderField::ALL.map(|field| self.get(field).unwrap_or(""))
    }
}

/// Confirmed order handed over to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub number: u16,
    /// Telegram username of the customer, without the leading `@`
    pub client: Option<String>,
    pub order: Order,
    pub submitted_at: DateTime<Utc>,
}

/// Draw a pseudo-random order number in `MIN_ORDER_NUMBER..=MAX_ORDER_NUMBER`.
///
/// Numbers are not checked for collisions.
pub fn generate_order_number() -> u16 {
    use rand::Rng;
    rand::thread_rng().gen_range(MIN_ORDER_NUMBER..=MAX_ORDER_NUMBER)
}
