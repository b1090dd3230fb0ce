//! Reactive theme context shared by every theme control on the page.
//!
//! DESIGN
//! ======
//! One `ThemeController` is created per app mount and kept in a local
//! `StoredValue`. Its mode and resolved palette are mirrored into signals so
//! any number of views (header button, radio group, swap checkbox) render
//! from the same state and route changes through `advance`/`set_mode`.
//!
//! TRADE-OFFS
//! ==========
//! The controller is initialized in an effect, i.e. after hydration. The
//! palette attribute is already correct by then because the inline bootstrap
//! script in the shell ran before first paint; deferring only the mode
//! signal keeps server and client markup identical.

use leptos::prelude::*;

use crate::theme::config::ThemeConfig;
use crate::theme::controller::ThemeController;
use crate::theme::mode::{EffectiveTheme, ThemeMode};
use crate::util::document_theme::{DocumentThemeSink, ThemeSink};
use crate::util::media_query::MediaQueryPreference;
use crate::util::storage::BrowserStorage;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Controller wired to `localStorage`, `matchMedia`, and the document.
pub type BrowserThemeController =
    ThemeController<BrowserStorage, MediaQueryPreference, (DocumentThemeSink, PaletteSignal)>;

/// Sink mirroring the applied palette into a signal for views.
#[derive(Clone, Copy, Debug)]
pub struct PaletteSignal(RwSignal<Option<EffectiveTheme>>);

impl ThemeSink for PaletteSignal {
    fn apply(&self, theme: EffectiveTheme) {
        if self.0.get_untracked() != Some(theme) {
            self.0.set(Some(theme));
        }
    }
}

/// Copyable handle provided through Leptos context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<Option<ThemeMode>>,
    palette: RwSignal<Option<EffectiveTheme>>,
    controller: StoredValue<BrowserThemeController, LocalStorage>,
}

impl ThemeContext {
    /// Build the controller. Invalid configs fall back to the defaults.
    pub fn new(config: ThemeConfig) -> Self {
        let config = config.or_default();
        let palette = RwSignal::new(None);
        let controller = ThemeController::new(
            config.storage_key.clone(),
            BrowserStorage,
            MediaQueryPreference::new(config.dark_media_query.clone()),
            (DocumentThemeSink::new(config), PaletteSignal(palette)),
        );
        Self {
            mode: RwSignal::new(None),
            palette,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Current mode; `None` until initialized. Tracked.
    pub fn mode(&self) -> Option<ThemeMode> {
        self.mode.get()
    }

    /// Last applied palette; `None` until initialized. Tracked.
    pub fn palette(&self) -> Option<EffectiveTheme> {
        self.palette.get()
    }

    pub fn is_listening(&self) -> bool {
        self.controller
            .try_with_value(ThemeController::is_listening)
            .unwrap_or(false)
    }

    pub fn initialize(&self) {
        let mode = self.controller.try_update_value(ThemeController::initialize);
        self.mode.set(mode);
    }

    pub fn advance(&self) -> Option<ThemeMode> {
        let mode = self.controller.try_update_value(ThemeController::advance).flatten();
        self.publish(mode)
    }

    pub fn set_mode(&self, mode: ThemeMode) -> Option<ThemeMode> {
        let mode = self
            .controller
            .try_update_value(|c| c.set_mode(mode))
            .flatten();
        self.publish(mode)
    }

    /// Drop the OS preference listener; safe after the owner is disposed.
    pub fn release(&self) {
        let _ = self.controller.try_update_value(ThemeController::release);
    }

    fn publish(&self, mode: Option<ThemeMode>) -> Option<ThemeMode> {
        if mode.is_some() {
            self.mode.set(mode);
        }
        mode
    }
}

/// Create the page's theme context, initialize it on the client, and release
/// its listener on unmount.
pub fn provide_theme_context(config: ThemeConfig) -> ThemeContext {
    let ctx = ThemeContext::new(config);
    provide_context(ctx);

    Effect::new(move || ctx.initialize());
    on_cleanup(move || ctx.release());

    ctx
}

/// Fetch the theme context provided by `App`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
