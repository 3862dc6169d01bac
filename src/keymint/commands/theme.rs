use crate::ambient::AmbientScheme;
use crate::commands::CmdResult;
use crate::model::{Session, Theme};
use crate::store::PrefStore;

/// The single key the preference store holds.
pub const THEME_KEY: &str = "theme";

/// Resolve the initial theme: persisted preference first, ambient host hint
/// second. An unreadable or unrecognized persisted value falls through to
/// the ambient hint.
pub fn resolve<S: PrefStore, A: AmbientScheme>(prefs: &S, ambient: &A) -> Theme {
    if let Ok(Some(saved)) = prefs.get(THEME_KEY) {
        if let Ok(theme) = saved.parse() {
            return theme;
        }
    }
    if ambient.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Flip the theme and persist the new value. The toggle itself never fails:
/// a failed persist leaves the stored preference stale, but the session
/// theme still takes effect.
pub fn toggle<S: PrefStore>(session: &mut Session, prefs: &mut S) -> CmdResult {
    let next = session.theme.toggled();
    session.theme = next;
    let _ = prefs.set(THEME_KEY, next.as_str());
    CmdResult::default().with_theme(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::FixedScheme;
    use crate::error::{KeymintError, Result};
    use crate::store::memory::MemoryPrefs;

    struct BrokenPrefs;

    impl PrefStore for BrokenPrefs {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(KeymintError::Prefs("disk on fire".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(KeymintError::Prefs("disk on fire".to_string()))
        }
    }

    #[test]
    fn persisted_preference_wins_over_ambient() {
        let mut prefs = MemoryPrefs::new();
        prefs.set(THEME_KEY, "light").unwrap();
        assert_eq!(resolve(&prefs, &FixedScheme(true)), Theme::Light);
    }

    #[test]
    fn ambient_dark_is_used_without_a_persisted_value() {
        let prefs = MemoryPrefs::new();
        assert_eq!(resolve(&prefs, &FixedScheme(true)), Theme::Dark);
        assert_eq!(resolve(&prefs, &FixedScheme(false)), Theme::Light);
    }

    #[test]
    fn unrecognized_persisted_value_falls_back_to_ambient() {
        let mut prefs = MemoryPrefs::new();
        prefs.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(resolve(&prefs, &FixedScheme(true)), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists_immediately() {
        let mut prefs = MemoryPrefs::new();
        let mut session = Session::new(Theme::Light);

        let result = toggle(&mut session, &mut prefs);

        assert_eq!(result.theme, Some(Theme::Dark));
        assert_eq!(session.theme, Theme::Dark);
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_round_trips_through_reinitialization() {
        let mut prefs = MemoryPrefs::new();
        let initial = resolve(&prefs, &FixedScheme(false));
        let mut session = Session::new(initial);

        toggle(&mut session, &mut prefs);
        assert_eq!(resolve(&prefs, &FixedScheme(false)), initial.toggled());

        toggle(&mut session, &mut prefs);
        assert_eq!(resolve(&prefs, &FixedScheme(false)), initial);
    }

    #[test]
    fn toggle_survives_a_broken_store() {
        let mut prefs = BrokenPrefs;
        let mut session = Session::new(Theme::Light);

        let result = toggle(&mut session, &mut prefs);

        assert_eq!(result.theme, Some(Theme::Dark));
        assert_eq!(session.theme, Theme::Dark);
    }
}
