use super::mode::ThemeMode;

const SOFT_COPPER: &str = "#c49b8d";
const FONT_FAMILY: &str = "\"Outfit\", sans-serif";

/// Style values derived from the active mode. Holds no state of its own;
/// always rebuilt from a `ThemeMode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub primary: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub hover_shadow: &'static str,
    pub input_background: &'static str,
    pub font_family: &'static str,
}

impl ThemeConfig {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemeConfig {
                mode,
                primary: SOFT_COPPER,
                surface: "rgba(253, 251, 247, 0.95)",
                text_primary: "#292524",
                text_secondary: "#57534e",
                hover_shadow: "0 4px 15px rgba(196, 155, 141, 0.3)",
                input_background: "rgba(0, 0, 0, 0.03)",
                font_family: FONT_FAMILY,
            },
            ThemeMode::Dark => ThemeConfig {
                mode,
                primary: SOFT_COPPER,
                surface: "rgba(28, 25, 23, 0.85)",
                text_primary: "#fafaf9",
                text_secondary: "#78716c",
                hover_shadow: "0 4px 15px rgba(196, 155, 141, 0.2)",
                input_background: "rgba(255, 255, 255, 0.05)",
                font_family: FONT_FAMILY,
            },
        }
    }

    /// Renders the config as custom properties on `:root`. Section styles
    /// only ever reference these variables.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  color-scheme: {scheme};\n  --color-primary: {primary};\n  --color-surface: {surface};\n  --color-text: {text};\n  --color-text-secondary: {secondary};\n  --shadow-hover: {shadow};\n  --color-input: {input};\n  --font-family: {font};\n}}\n",
            scheme = self.mode,
            primary = self.primary,
            surface = self.surface,
            text = self.text_primary,
            secondary = self.text_secondary,
            shadow = self.hover_shadow,
            input = self.input_background,
            font = self.font_family,
        )
    }
}
