//! Applies the resolved palette to the document.
//!
//! Sets the palette tag on the `<html>` element and keeps a single
//! `<meta name="theme-color">` in sync so mobile browser chrome follows the
//! page. Requires a browser environment; SSR and native builds no-op.

use std::rc::Rc;

use crate::theme::config::ThemeConfig;
use crate::theme::mode::EffectiveTheme;

#[cfg(test)]
#[path = "document_theme_test.rs"]
mod document_theme_test;

/// Destination for the resolved palette. Applying the same value twice must
/// not produce a visible change.
pub trait ThemeSink {
    fn apply(&self, theme: EffectiveTheme);
}

impl<T: ThemeSink + ?Sized> ThemeSink for Rc<T> {
    fn apply(&self, theme: EffectiveTheme) {
        (**self).apply(theme);
    }
}

impl<A: ThemeSink, B: ThemeSink> ThemeSink for (A, B) {
    fn apply(&self, theme: EffectiveTheme) {
        self.0.apply(theme);
        self.1.apply(theme);
    }
}

/// Root-attribute and `theme-color` sink.
#[derive(Debug, Clone)]
pub struct DocumentThemeSink {
    config: ThemeConfig,
}

impl DocumentThemeSink {
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

impl ThemeSink for DocumentThemeSink {
    fn apply(&self, theme: EffectiveTheme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(root) = doc.document_element() {
                let tag = self.config.palette(theme);
                if root.get_attribute(&self.config.attribute).as_deref() != Some(tag) {
                    let _ = root.set_attribute(&self.config.attribute, tag);
                }
            }
            sync_theme_color(&doc, self.config.theme_color(theme));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Leave exactly one `theme-color` meta carrying `color`.
#[cfg(feature = "hydrate")]
fn sync_theme_color(doc: &web_sys::Document, color: &str) {
    use wasm_bindgen::JsCast;

    let metas = doc.query_selector_all("meta[name=\"theme-color\"]").ok();
    let mut kept: Option<web_sys::Element> = None;
    if let Some(metas) = metas {
        for i in 0..metas.length() {
            let Some(el) = metas.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if kept.is_none() {
                kept = Some(el);
            } else {
                // Media-scoped duplicates would override the live value.
                el.remove();
            }
        }
    }

    let meta = match kept {
        Some(el) => el,
        None => {
            let Ok(el) = doc.create_element("meta") else {
                return;
            };
            let _ = el.set_attribute("name", "theme-color");
            if let Some(head) = doc.head() {
                let _ = head.append_child(&el);
            }
            el
        }
    };
    let _ = meta.remove_attribute("media");
    if meta.get_attribute("content").as_deref() != Some(color) {
        let _ = meta.set_attribute("content", color);
    }
}
