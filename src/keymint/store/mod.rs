//! # Preference Storage
//!
//! The only durable state keymint keeps is the theme preference, stored
//! behind the [`PrefStore`] trait as a flat string-to-string map.
//!
//! ## Implementations
//!
//! - [`fs::FilePrefs`]: production storage, a `prefs.json` file under the
//!   platform data directory
//! - [`memory::MemoryPrefs`]: in-memory storage for tests
//!
//! Callers may treat a failed write as a silent no-op: theme toggling keeps
//! working in-session even when the preference cannot be persisted.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract key-value preference store.
pub trait PrefStore {
    /// Read a preference, `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
