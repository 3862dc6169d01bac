use crate::error::KeymintError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A UUID-v4-shaped identifier: 36 characters of lowercase hex and hyphens in
/// the layout `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`, with the version nibble
/// fixed to `4` and the variant nibble in `{8, 9, a, b}`.
///
/// Drawn from a non-cryptographic random source; the shape is guaranteed,
/// unpredictability is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 64-character lowercase hexadecimal key with no structure beyond alphabet
/// and length. Same non-cryptographic caveat as [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexKey(String);

impl HexKey {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persisted binary appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = KeymintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(KeymintError::Prefs(format!("Unknown theme: {}", other))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// How long a success notification stays visible.
pub const SUCCESS_DURATION_MS: i64 = 2000;
/// Error notifications linger longer, matching common toast defaults.
pub const ERROR_DURATION_MS: i64 = 4000;

/// An ephemeral user-facing message. Expiry is explicit: the holder decides
/// when "now" is and calls [`Notification::is_expired`] (or
/// [`Session::clear_expired`]) rather than relying on a UI toolkit's toast
/// timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub raised_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
            raised_at: Utc::now(),
            duration_ms: SUCCESS_DURATION_MS,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
            raised_at: Utc::now(),
            duration_ms: ERROR_DURATION_MS,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.raised_at) >= Duration::milliseconds(self.duration_ms)
    }
}

/// Per-invocation state. Everything here is in-memory only and discarded at
/// process exit; only the theme survives, via the preference store.
#[derive(Debug)]
pub struct Session {
    pub identifier: Option<Identifier>,
    pub hex_key: Option<HexKey>,
    pub theme: Theme,
    pub notification: Option<Notification>,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            identifier: None,
            hex_key: None,
            theme,
            notification: None,
        }
    }

    /// Drop the active notification once its display window has elapsed.
    pub fn clear_expired(&mut self, now: DateTime<Utc>) {
        if let Some(n) = &self.notification {
            if n.is_expired(now) {
                self.notification = None;
            }
        }
    }
}
