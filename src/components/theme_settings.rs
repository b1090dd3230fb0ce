//! Appearance panel combining the explicit-set theme controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits alongside the header button on the same page, so three independent
//! controls stay in agreement through the shared context.

use leptos::prelude::*;

use crate::components::theme_toggle::{ThemeRadioGroup, ThemeSwapToggle, mode_label};
use crate::state::theme::use_theme;
use crate::theme::mode::EffectiveTheme;

#[component]
pub fn ThemeSettings() -> impl IntoView {
    let theme = use_theme();

    let summary = move || match (theme.mode(), theme.palette()) {
        (Some(mode), Some(palette)) => {
            let shade = match palette {
                EffectiveTheme::LightPalette => "light",
                EffectiveTheme::DarkPalette => "dark",
            };
            format!("{} mode, {shade} palette", mode_label(mode))
        }
        _ => String::new(),
    };

    view! {
        <section class="theme-settings">
            <h2 class="theme-settings__title">"Appearance"</h2>
            <ThemeRadioGroup/>
            <ThemeSwapToggle/>
            <p class="theme-settings__summary">{summary}</p>
        </section>
    }
}
