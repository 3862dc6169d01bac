//! Host color-scheme hint, the terminal analogue of a browser's
//! `prefers-color-scheme` media query. Consulted only when no persisted
//! theme preference exists.

/// Read-only "does the host prefer dark presentation" query.
pub trait AmbientScheme {
    fn prefers_dark(&self) -> bool;
}

/// Queries the `COLORFGBG` convention some terminal emulators export
/// (`"<fg>;<bg>"`, background color index last). Absent or unparseable
/// values mean "no dark preference".
pub struct SystemScheme;

impl AmbientScheme for SystemScheme {
    fn prefers_dark(&self) -> bool {
        std::env::var("COLORFGBG")
            .map(|v| colorfgbg_is_dark(&v))
            .unwrap_or(false)
    }
}

/// Fixed answer, for tests and for callers that already know the host
/// preference.
pub struct FixedScheme(pub bool);

impl AmbientScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

// ANSI background indexes 0-6 and 8 are the dark half of the palette.
fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}
