use super::*;

// =============================================================
// ThemeMode tags
// =============================================================

#[test]
fn tags_round_trip_through_from_tag() {
    for mode in ThemeMode::ALL {
        assert_eq!(ThemeMode::from_tag(mode.as_tag()), Some(mode));
    }
}

#[test]
fn automatic_is_persisted_as_system() {
    assert_eq!(ThemeMode::Automatic.as_tag(), "system");
    assert_eq!(ThemeMode::Automatic.to_string(), "system");
}

#[test]
fn from_tag_is_case_sensitive() {
    assert_eq!(ThemeMode::from_tag("Dark"), None);
    assert_eq!(ThemeMode::from_tag(" dark"), None);
}

#[test]
fn from_stored_defaults_absent_and_unknown_to_automatic() {
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::Automatic);
    assert_eq!(ThemeMode::from_stored(Some("blue")), ThemeMode::Automatic);
    assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Automatic);
    assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
}

#[test]
fn from_str_reports_unknown_tag() {
    let err = "night".parse::<ThemeMode>().unwrap_err();
    assert_eq!(err, UnknownThemeMode("night".to_owned()));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
}

#[test]
fn serde_uses_persisted_tags() {
    let json = serde_json::to_string(&ThemeMode::Automatic).unwrap();
    assert_eq!(json, "\"system\"");
    let keys: std::collections::BTreeMap<ThemeMode, u8> = ThemeMode::ALL.into_iter().zip(0..).collect();
    assert_eq!(serde_json::to_string(&keys).unwrap(), r#"{"light":0,"dark":1,"system":2}"#);
}

// =============================================================
// Cycle
// =============================================================

#[test]
fn next_follows_light_dark_system_order() {
    assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.next(), ThemeMode::Automatic);
    assert_eq!(ThemeMode::Automatic.next(), ThemeMode::Light);
}

#[test]
fn three_steps_close_the_cycle() {
    for mode in ThemeMode::ALL {
        assert_eq!(mode.next().next().next(), mode);
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_covers_every_mode_and_preference() {
    for prefers_dark in [false, true] {
        assert_eq!(resolve(ThemeMode::Light, prefers_dark), EffectiveTheme::LightPalette);
        assert_eq!(resolve(ThemeMode::Dark, prefers_dark), EffectiveTheme::DarkPalette);
    }
    assert_eq!(resolve(ThemeMode::Automatic, true), EffectiveTheme::DarkPalette);
    assert_eq!(resolve(ThemeMode::Automatic, false), EffectiveTheme::LightPalette);
}

#[test]
fn resolve_stored_treats_garbage_as_system() {
    assert_eq!(resolve_stored(Some("blue"), true), EffectiveTheme::DarkPalette);
    assert_eq!(resolve_stored(None, false), EffectiveTheme::LightPalette);
    assert_eq!(resolve_stored(Some("light"), true), EffectiveTheme::LightPalette);
}
