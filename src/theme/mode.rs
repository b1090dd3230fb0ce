//! Theme mode and effective palette types.
//!
//! DESIGN
//! ======
//! `ThemeMode` is the user's persisted preference; `EffectiveTheme` is the
//! palette actually painted. `resolve` is the single decision function shared
//! by the controller and the pre-hydration bootstrap script.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// User-facing theme preference. Serializes as its persisted tag, which the
/// bootstrap table also uses as JSON object keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ThemeMode {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
    /// Follow the operating system's color-scheme preference.
    #[default]
    #[serde(rename = "system")]
    Automatic,
}

impl ThemeMode {
    /// All modes in cycle order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Automatic];

    /// Persisted tag for this mode.
    pub fn as_tag(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Automatic => "system",
        }
    }

    /// Parse a persisted tag. Unknown tags yield `None`.
    pub fn from_tag(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_tag() == raw)
    }

    /// Normalize a raw stored value: absent or unknown tags become `Automatic`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::debug!("{e}; using {}", Self::default());
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Next mode in the fixed `Light -> Dark -> Automatic` cycle.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Automatic,
            ThemeMode::Automatic => ThemeMode::Light,
        }
    }

    /// Whether the effective palette depends on the system preference.
    pub fn follows_system(self) -> bool {
        self == ThemeMode::Automatic
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Error returned when parsing an unknown theme mode tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownThemeMode(s.to_owned()))
    }
}

/// Resolved palette applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    LightPalette,
    DarkPalette,
}

impl EffectiveTheme {
    pub fn is_dark(self) -> bool {
        self == EffectiveTheme::DarkPalette
    }
}

/// Decide the palette for a mode given the current system preference.
pub fn resolve(mode: ThemeMode, prefers_dark: bool) -> EffectiveTheme {
    match mode {
        ThemeMode::Light => EffectiveTheme::LightPalette,
        ThemeMode::Dark => EffectiveTheme::DarkPalette,
        ThemeMode::Automatic if prefers_dark => EffectiveTheme::DarkPalette,
        ThemeMode::Automatic => EffectiveTheme::LightPalette,
    }
}

/// Decide the palette straight from a raw stored value.
pub fn resolve_stored(raw: Option<&str>, prefers_dark: bool) -> EffectiveTheme {
    resolve(ThemeMode::from_stored(raw), prefers_dark)
}
