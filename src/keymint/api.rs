//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all keymint operations, regardless of the UI
//! driving it.
//!
//! ## Role and Responsibilities
//!
//! - **Owns the session**: last generated values, current theme, active
//!   notification
//! - **Owns the collaborators**: preference store and clipboard, injected
//!   at construction
//! - **Enforces the copy affordance**: copying is refused until the
//!   corresponding value has been generated this session
//! - **Dispatches** to the appropriate command function
//!
//! ## What the API Does NOT Do
//!
//! - **Presentation concerns**: it returns data structures, never strings
//!   styled for a terminal
//! - **I/O**: no stdout, stderr, or process exit
//!
//! ## Generic Over Collaborators
//!
//! `KeymintApi<S: PrefStore, C: Clipboard>`:
//! - Production: `KeymintApi<FilePrefs, SystemClipboard>`
//! - Testing: `KeymintApi<MemoryPrefs, …doubles…>`
//!
//! This keeps every state transition testable without a filesystem or a
//! real clipboard.

use crate::ambient::AmbientScheme;
use crate::clipboard::Clipboard;
use crate::commands::{self, CmdResult};
use crate::error::{KeymintError, Result};
use crate::model::{Session, Theme};
use crate::store::PrefStore;
use chrono::{DateTime, Utc};

/// The main API facade for keymint operations.
pub struct KeymintApi<S: PrefStore, C: Clipboard> {
    session: Session,
    prefs: S,
    clipboard: C,
}

impl<S: PrefStore, C: Clipboard> KeymintApi<S, C> {
    /// Build an API with the initial theme resolved from the preference
    /// store, falling back to the ambient host hint.
    pub fn new<A: AmbientScheme>(prefs: S, clipboard: C, ambient: &A) -> Self {
        let theme = commands::theme::resolve(&prefs, ambient);
        Self {
            session: Session::new(theme),
            prefs,
            clipboard,
        }
    }

    /// Generate a fresh UUID-v4-shaped identifier. Always succeeds and
    /// overwrites any previous identifier.
    pub fn generate_identifier(&mut self) -> CmdResult {
        commands::generate::run_identifier(&mut self.session, &mut rand::thread_rng())
    }

    /// Generate a fresh 64-character hex key. Always succeeds and overwrites
    /// any previous key.
    pub fn generate_hex_key(&mut self) -> CmdResult {
        commands::generate::run_hex_key(&mut self.session, &mut rand::thread_rng())
    }

    /// Whether the copy affordance for the identifier should be offered.
    pub fn can_copy_identifier(&self) -> bool {
        self.session.identifier.is_some()
    }

    /// Whether the copy affordance for the hex key should be offered.
    pub fn can_copy_hex_key(&self) -> bool {
        self.session.hex_key.is_some()
    }

    /// Copy the current identifier to the clipboard. Refused with
    /// [`KeymintError::NothingToCopy`] before the first generation; after
    /// that, clipboard failure surfaces as an error notification, not an
    /// `Err`.
    pub fn copy_identifier(&mut self) -> Result<CmdResult> {
        let value = self
            .session
            .identifier
            .clone()
            .ok_or_else(|| KeymintError::NothingToCopy("UUID".to_string()))?;
        Ok(commands::copy::run(
            &mut self.clipboard,
            &mut self.session,
            value.as_str(),
            "UUID",
        ))
    }

    /// Copy the current hex key to the clipboard. Same contract as
    /// [`KeymintApi::copy_identifier`].
    pub fn copy_hex_key(&mut self) -> Result<CmdResult> {
        let value = self
            .session
            .hex_key
            .clone()
            .ok_or_else(|| KeymintError::NothingToCopy("Hex Key".to_string()))?;
        Ok(commands::copy::run(
            &mut self.clipboard,
            &mut self.session,
            value.as_str(),
            "Hex Key",
        ))
    }

    /// Flip the theme and persist it. Never fails; see
    /// [`commands::theme::toggle`].
    pub fn toggle_theme(&mut self) -> CmdResult {
        commands::theme::toggle(&mut self.session, &mut self.prefs)
    }

    pub fn theme(&self) -> Theme {
        self.session.theme
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drop the active notification once its display window has elapsed.
    pub fn clear_expired(&mut self, now: DateTime<Utc>) {
        self.session.clear_expired(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::FixedScheme;
    use crate::model::NotificationKind;
    use crate::store::memory::MemoryPrefs;
    use chrono::Duration;

    #[derive(Default)]
    struct OkClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for OkClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn copy(&mut self, _text: &str) -> Result<()> {
            Err(KeymintError::Clipboard("denied".to_string()))
        }
    }

    fn api() -> KeymintApi<MemoryPrefs, OkClipboard> {
        KeymintApi::new(
            MemoryPrefs::new(),
            OkClipboard::default(),
            &FixedScheme(false),
        )
    }

    #[test]
    fn copy_is_refused_before_any_generation() {
        let mut api = api();
        assert!(!api.can_copy_identifier());
        assert!(!api.can_copy_hex_key());
        assert!(matches!(
            api.copy_identifier(),
            Err(KeymintError::NothingToCopy(_))
        ));
        assert!(matches!(
            api.copy_hex_key(),
            Err(KeymintError::NothingToCopy(_))
        ));
    }

    #[test]
    fn generation_enables_the_matching_copy_affordance() {
        let mut api = api();
        api.generate_identifier();
        assert!(api.can_copy_identifier());
        assert!(!api.can_copy_hex_key());
    }

    #[test]
    fn copy_sends_the_generated_value_to_the_clipboard() {
        let mut api = api();
        let generated = api.generate_identifier().identifier.unwrap();

        let result = api.copy_identifier().unwrap();

        let n = result.notification.unwrap();
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.text, "UUID copied!");
        assert_eq!(api.clipboard.copied, vec![generated.as_str().to_string()]);
    }

    #[test]
    fn denied_clipboard_surfaces_as_error_notification() {
        let mut api = KeymintApi::new(MemoryPrefs::new(), DeniedClipboard, &FixedScheme(false));
        api.generate_hex_key();

        let result = api.copy_hex_key().unwrap();

        let n = result.notification.unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.text, "Failed to copy");
    }

    #[test]
    fn initial_theme_follows_the_ambient_hint() {
        let dark = KeymintApi::new(
            MemoryPrefs::new(),
            OkClipboard::default(),
            &FixedScheme(true),
        );
        assert_eq!(dark.theme(), Theme::Dark);
        assert_eq!(api().theme(), Theme::Light);
    }

    #[test]
    fn toggle_theme_flips_the_session_theme() {
        let mut api = api();
        let result = api.toggle_theme();
        assert_eq!(result.theme, Some(Theme::Dark));
        assert_eq!(api.theme(), Theme::Dark);
    }

    #[test]
    fn clear_expired_removes_stale_notifications() {
        let mut api = api();
        api.generate_identifier();
        let raised_at = api.session().notification.as_ref().unwrap().raised_at;

        api.clear_expired(raised_at + Duration::milliseconds(100));
        assert!(api.session().notification.is_some());

        api.clear_expired(raised_at + Duration::milliseconds(2000));
        assert!(api.session().notification.is_none());
    }
}
