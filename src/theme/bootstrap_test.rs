use super::*;

/// Mirror of `SCRIPT_BODY`'s lookup. `stored` is `None` both when nothing is
/// stored and when `localStorage` throws; `prefers_dark` is `None` when
/// `matchMedia` throws.
fn script_palette<'a>(table: &'a BootstrapTable, stored: Option<&str>, prefers_dark: Option<bool>) -> &'a str {
    let fixed = stored
        .and_then(ThemeMode::from_tag)
        .and_then(|mode| table.fixed.get(&mode));
    match (fixed, prefers_dark) {
        (Some(palette), _) => palette,
        (None, Some(true)) => &table.system.dark,
        (None, Some(false)) => &table.system.light,
        (None, None) => &table.fallback,
    }
}

// =============================================================
// Table
// =============================================================

#[test]
fn table_for_default_config() {
    let table = BootstrapTable::new(&ThemeConfig::default());
    assert_eq!(table.key, "themeMode");
    assert_eq!(table.attribute, "data-theme");
    assert_eq!(table.fixed.len(), 2);
    assert_eq!(table.fixed.get(&ThemeMode::Light).map(String::as_str), Some("pastel"));
    assert_eq!(table.fixed.get(&ThemeMode::Dark).map(String::as_str), Some("night"));
    assert!(!table.fixed.contains_key(&ThemeMode::Automatic));
    assert_eq!(table.system, SystemPalettes { dark: "night".to_owned(), light: "pastel".to_owned() });
    assert_eq!(table.fallback, "pastel");
}

#[test]
fn lookup_agrees_with_controller_decision() {
    let config = ThemeConfig::default();
    let table = BootstrapTable::new(&config);
    let stored = [None, Some("light"), Some("dark"), Some("system"), Some("blue"), Some(""), Some("constructor")];
    for raw in stored {
        for prefers_dark in [false, true] {
            assert_eq!(
                script_palette(&table, raw, Some(prefers_dark)),
                config.palette(resolve_stored(raw, prefers_dark)),
                "raw={raw:?} prefers_dark={prefers_dark}"
            );
        }
    }
}

#[test]
fn colors_cover_both_palettes() {
    let config = ThemeConfig::default();
    let table = BootstrapTable::new(&config);
    for theme in [EffectiveTheme::LightPalette, EffectiveTheme::DarkPalette] {
        assert_eq!(
            table.colors.get(config.palette(theme)).map(String::as_str),
            Some(config.theme_color(theme))
        );
    }
}

#[test]
fn custom_palettes_flow_into_table() {
    let config = ThemeConfig {
        light_palette: "latte".to_owned(),
        dark_palette: "mocha".to_owned(),
        ..ThemeConfig::default()
    };
    let table = BootstrapTable::new(&config);
    assert_eq!(script_palette(&table, Some("dark"), Some(false)), "mocha");
    assert_eq!(script_palette(&table, None, Some(false)), "latte");
    assert_eq!(table.fallback, "latte");
    assert!(table.colors.contains_key("mocha"));
}

// =============================================================
// Failure paths
// =============================================================

#[test]
fn unreadable_storage_follows_system_preference() {
    let config = ThemeConfig::default();
    let table = BootstrapTable::new(&config);
    for prefers_dark in [false, true] {
        assert_eq!(
            script_palette(&table, None, Some(prefers_dark)),
            config.palette(resolve_stored(None, prefers_dark)),
            "prefers_dark={prefers_dark}"
        );
    }
    assert_eq!(script_palette(&table, None, Some(true)), "night");
}

#[test]
fn media_query_failure_matches_controller_without_preference() {
    let config = ThemeConfig::default();
    let table = BootstrapTable::new(&config);
    for raw in [None, Some("system"), Some("blue")] {
        assert_eq!(script_palette(&table, raw, None), config.palette(resolve_stored(raw, false)), "raw={raw:?}");
    }
    assert_eq!(script_palette(&table, Some("dark"), None), "night");
}

// =============================================================
// Script
// =============================================================

#[test]
fn inline_script_embeds_table_as_json() {
    let script = inline_script(&ThemeConfig::default()).unwrap();
    assert!(script.starts_with("(function(t){"));
    assert!(script.ends_with("});"));
    assert!(script.contains(r#""key":"themeMode""#));
    assert!(script.contains(r#""fixed":{"light":"pastel","dark":"night"}"#));
    assert!(script.contains(r#""query":"(prefers-color-scheme: dark)""#));
    assert!(script.contains(r##""colors":{"night":"#1a1a1a","pastel":"#ffffff"}"##));
    assert!(script.contains("hasOwnProperty"));
}

#[test]
fn inline_script_guards_only_the_storage_read() {
    let script = inline_script(&ThemeConfig::default()).unwrap();
    assert!(script.contains("var m=null;try{m=localStorage.getItem(t.key);}catch(e){}"));
    assert!(script.contains("catch(e){p=t.fallback;}"));
    assert_eq!(script.matches("t.fallback").count(), 1);
}

#[test]
fn inline_script_updates_theme_color() {
    let script = inline_script(&ThemeConfig::default()).unwrap();
    assert!(script.contains("meta[name=theme-color]"));
    assert!(script.contains("setAttribute('content',t.colors[p])"));
}

#[test]
fn inline_script_escapes_markup() {
    let config = ThemeConfig { dark_media_query: "</script><b>".to_owned(), ..ThemeConfig::default() };
    let script = inline_script(&config).unwrap();
    assert!(!script.contains('<'));
    assert!(script.contains("\\u003c/script>"));
}
