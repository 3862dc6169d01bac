use crate::model::{HexKey, Identifier, Notification, Theme};

pub mod copy;
pub mod generate;
pub mod theme;

/// Structured outcome of a single user action. Each action raises at most
/// one notification; values are set only by the command that produced them.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub identifier: Option<Identifier>,
    pub hex_key: Option<HexKey>,
    pub theme: Option<Theme>,
    pub notification: Option<Notification>,
}

impl CmdResult {
    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn with_hex_key(mut self, hex_key: HexKey) -> Self {
        self.hex_key = Some(hex_key);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }
}
