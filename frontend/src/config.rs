use log::Level;

pub const BRAND_NAME: &str = "JJML Property";
pub const LOCATION: &str = "Los Angeles, CA";
pub const CONTACT_EMAIL: &str = "contact@jjmlproperty.com";

/// localStorage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Attribute set on `<html>` for the static stylesheet to key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Fraction of a region that must be inside the (expanded) viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Viewport expansion applied on all sides when testing for intersection.
pub const REVEAL_ROOT_MARGIN: &str = "50px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
