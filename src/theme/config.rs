//! Theme configuration: storage key, DOM attribute, palette tags, colors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same config feeds the pre-hydration bootstrap script and the runtime
//! controller, so both agree on the key they read and the tags they write.

use crate::theme::mode::EffectiveTheme;
use crate::util::color::{luminance, parse_hex_rgb};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "themeMode";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_LIGHT_PALETTE: &str = "pastel";
pub const DEFAULT_DARK_PALETTE: &str = "night";
pub const DEFAULT_LIGHT_THEME_COLOR: &str = "#ffffff";
pub const DEFAULT_DARK_THEME_COLOR: &str = "#1a1a1a";
pub const DEFAULT_DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} contains unsupported characters: {value:?}")]
    InvalidTag { field: &'static str, value: String },
    #[error("light and dark palettes share the tag {0:?}")]
    DuplicatePalette(String),
    #[error("{field} is not a #rgb or #rrggbb color: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("dark theme color {dark} is not darker than light theme color {light}")]
    InvertedColors { light: String, dark: String },
    #[error("media query contains markup: {0:?}")]
    InvalidMediaQuery(String),
}

/// Names and values shared by every theme call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// localStorage key holding the `ThemeMode` tag.
    pub storage_key: String,
    /// Attribute on `<html>` carrying the palette tag.
    pub attribute: String,
    pub light_palette: String,
    pub dark_palette: String,
    /// `<meta name="theme-color">` value per palette.
    pub light_theme_color: String,
    pub dark_theme_color: String,
    pub dark_media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            light_palette: DEFAULT_LIGHT_PALETTE.to_owned(),
            dark_palette: DEFAULT_DARK_PALETTE.to_owned(),
            light_theme_color: DEFAULT_LIGHT_THEME_COLOR.to_owned(),
            dark_theme_color: DEFAULT_DARK_THEME_COLOR.to_owned(),
            dark_media_query: DEFAULT_DARK_MEDIA_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Palette tag written to the root attribute.
    pub fn palette(&self, theme: EffectiveTheme) -> &str {
        match theme {
            EffectiveTheme::LightPalette => &self.light_palette,
            EffectiveTheme::DarkPalette => &self.dark_palette,
        }
    }

    /// Browser chrome color for the palette.
    pub fn theme_color(&self, theme: EffectiveTheme) -> &str {
        match theme {
            EffectiveTheme::LightPalette => &self.light_theme_color,
            EffectiveTheme::DarkPalette => &self.dark_theme_color,
        }
    }

    /// Check every field. Tags end up inside an inline `<script>` and a CSS
    /// attribute selector, so they are restricted to `[A-Za-z0-9_-]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tag("storage_key", &self.storage_key)?;
        validate_tag("attribute", &self.attribute)?;
        validate_tag("light_palette", &self.light_palette)?;
        validate_tag("dark_palette", &self.dark_palette)?;
        if self.light_palette == self.dark_palette {
            return Err(ConfigError::DuplicatePalette(self.light_palette.clone()));
        }

        let light = parse_color("light_theme_color", &self.light_theme_color)?;
        let dark = parse_color("dark_theme_color", &self.dark_theme_color)?;
        if luminance(dark) >= luminance(light) {
            return Err(ConfigError::InvertedColors {
                light: self.light_theme_color.clone(),
                dark: self.dark_theme_color.clone(),
            });
        }

        let query = self.dark_media_query.trim();
        if query.is_empty() {
            return Err(ConfigError::Empty { field: "dark_media_query" });
        }
        if query.contains('<') {
            return Err(ConfigError::InvalidMediaQuery(self.dark_media_query.clone()));
        }
        Ok(())
    }

    /// Validated copy of `self`, or the default config when invalid.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("invalid theme config ({e}); using defaults");
                Self::default()
            }
        }
    }
}

fn validate_tag(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty { field });
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::InvalidTag { field, value: value.to_owned() });
    }
    Ok(())
}

fn parse_color(field: &'static str, value: &str) -> Result<(u8, u8, u8), ConfigError> {
    parse_hex_rgb(value).ok_or_else(|| ConfigError::InvalidColor { field, value: value.to_owned() })
}
