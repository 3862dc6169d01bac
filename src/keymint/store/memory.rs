use super::PrefStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory preference store for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_unset_key() {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("theme").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut prefs = MemoryPrefs::new();
        prefs.set("theme", "dark").unwrap();
        prefs.set("theme", "light").unwrap();
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("light"));
    }
}
