use log::Level;

use crate::i18n::Locale;

/// Fraction of a section's box that has to be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Locale used for `/` and for any path that does not name a known locale.
pub const DEFAULT_LOCALE: Locale = Locale::En;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
