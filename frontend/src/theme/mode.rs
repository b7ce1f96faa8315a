use std::fmt;

/// Light/dark display preference for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interprets a persisted value. Only the exact string `"dark"` selects
    /// dark mode; anything else, including a missing value, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Tooltip for the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to Dark Mode",
            ThemeMode::Dark => "Switch to Light Mode",
        }
    }

    // Moon while light, sun while dark.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "\u{263E}",
            ThemeMode::Dark => "\u{2600}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn only_exact_dark_selects_dark() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        for stored in [None, Some(""), Some("DARK"), Some("light"), Some(" dark"), Some("dark\n")] {
            assert_eq!(ThemeMode::from_stored(stored), ThemeMode::Light, "{:?}", stored);
        }
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn label_and_icon_follow_mode() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Switch to Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Switch to Light Mode");
        assert_ne!(ThemeMode::Light.toggle_icon(), ThemeMode::Dark.toggle_icon());
    }

    #[test]
    fn stored_string_round_trips() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_stored(Some(mode.as_str())), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(dark in any::<bool>()) {
            let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
            prop_assert_eq!(mode.toggled().toggled(), mode);
        }

        #[test]
        fn arbitrary_strings_other_than_dark_are_light(s in "\\PC*") {
            prop_assume!(s != "dark");
            prop_assert_eq!(ThemeMode::from_stored(Some(&s)), ThemeMode::Light);
        }
    }
}
