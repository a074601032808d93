//! Inbound and outbound messages of the dialogue engine

/// Text message received from a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingText {
    /// Chat the message came from; also the session key
    pub user_id: i64,
    /// Telegram username of the sender, without the leading `@`
    pub username: Option<String>,
    pub text: String,
}

impl IncomingText {
    pub fn new(user_id: i64, text: impl Into<String>) -> Self {
        Self {
            user_id,
            username: None,
            text: text.into(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

/// Reply keyboard attached to an outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Leave whatever keyboard the user currently sees
    Unchanged,
    /// Show a reply keyboard with these rows of button captions
    Buttons(Vec<Vec<String>>),
    /// Hide the reply keyboard
    Remove,
}

impl Keyboard {
    pub fn rows<R, B>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = B>,
        B: Into<String>,
    {
        Keyboard::Buttons(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// Message the engine wants delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: Keyboard::Unchanged,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn remove_keyboard(self) -> Self {
        self.with_keyboard(Keyboard::Remove)
    }
}
