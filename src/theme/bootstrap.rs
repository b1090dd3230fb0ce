//! Pre-hydration theme bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle loads after first paint, so the `<head>` carries a small
//! inline script that sets the palette attribute and `theme-color` before
//! anything renders. The script does no deciding of its own: it looks the
//! answer up in a table produced here by evaluating `resolve` for every mode
//! and both OS preference values, so it cannot drift from the controller.
//!
//! Only the storage read is guarded separately. A throwing `localStorage`
//! reads as "nothing stored", exactly as the controller treats a failed read.
//! `fallback` is reserved for `matchMedia` failing, where the controller also
//! sees "prefers light".

use std::collections::BTreeMap;

use serde::Serialize;

use crate::theme::config::ThemeConfig;
use crate::theme::mode::{EffectiveTheme, ThemeMode, resolve, resolve_stored};

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

/// Palette decisions for the inline script, keyed by stored tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapTable {
    pub key: String,
    pub attribute: String,
    pub query: String,
    /// Modes whose palette does not depend on the OS preference.
    pub fixed: BTreeMap<ThemeMode, String>,
    /// Palettes for everything else: `system`, absent, unknown, or unreadable.
    pub system: SystemPalettes,
    /// Palette applied when the OS preference cannot be queried.
    pub fallback: String,
    /// `theme-color` meta content per palette tag.
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemPalettes {
    pub dark: String,
    pub light: String,
}

impl BootstrapTable {
    pub fn new(config: &ThemeConfig) -> Self {
        let palette = |theme: EffectiveTheme| config.palette(theme).to_owned();

        let fixed = ThemeMode::ALL
            .into_iter()
            .filter(|&mode| resolve(mode, true) == resolve(mode, false))
            .map(|mode| (mode, palette(resolve(mode, false))))
            .collect();
        let colors = [EffectiveTheme::LightPalette, EffectiveTheme::DarkPalette]
            .into_iter()
            .map(|theme| (palette(theme), config.theme_color(theme).to_owned()))
            .collect();

        Self {
            key: config.storage_key.clone(),
            attribute: config.attribute.clone(),
            query: config.dark_media_query.clone(),
            fixed,
            system: SystemPalettes {
                dark: palette(resolve_stored(None, true)),
                light: palette(resolve_stored(None, false)),
            },
            fallback: palette(resolve_stored(None, false)),
            colors,
        }
    }
}

const SCRIPT_BODY: &str = "var d=document.documentElement,h=Object.prototype.hasOwnProperty;\
function a(p){d.setAttribute(t.attribute,p);\
var c=document.querySelector('meta[name=theme-color]');\
if(c&&h.call(t.colors,p)){c.setAttribute('content',t.colors[p]);}}\
var m=null;try{m=localStorage.getItem(t.key);}catch(e){}\
var p=m!==null&&h.call(t.fixed,m)?t.fixed[m]:null;\
if(p===null){try{p=window.matchMedia(t.query).matches?t.system.dark:t.system.light;}catch(e){p=t.fallback;}}\
try{a(p);}catch(e){}";

/// Inline `<script>` source applying the palette before first paint.
pub fn inline_script(config: &ThemeConfig) -> Result<String, serde_json::Error> {
    let table = serde_json::to_string(&BootstrapTable::new(config))?;
    // Keep `</script>` and friends out of the inline JSON.
    let table = table.replace('<', "\\u003c");
    Ok(format!("(function(t){{{SCRIPT_BODY}}})({table});"))
}
