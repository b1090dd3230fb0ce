//! Theme controls: cycling header button, mode radio group, and swap toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three are views over the single `ThemeContext`. They render from its
//! signals and call `advance`/`set_mode`; none of them touches the document
//! palette attribute directly.

use leptos::prelude::*;

use crate::state::theme::use_theme;
use crate::theme::mode::{EffectiveTheme, ThemeMode};

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

const SUN_PATH: &str = "M5.64,17l-.71.71a1,1,0,0,0,0,1.41,1,1,0,0,0,1.41,0l.71-.71A1,1,0,0,0,5.64,17ZM5,12a1,1,0,0,0-1-1H3a1,1,0,0,0,0,2H4A1,1,0,0,0,5,12Zm7-7a1,1,0,0,0,1-1V3a1,1,0,0,0-2,0V4A1,1,0,0,0,12,5ZM5.64,7.05a1,1,0,0,0,.7.29,1,1,0,0,0,.71-.29,1,1,0,0,0,0-1.41l-.71-.71A1,1,0,0,0,4.93,6.34Zm12,.29a1,1,0,0,0,.7-.29l.71-.71a1,1,0,1,0-1.41-1.41L17,5.64a1,1,0,0,0,0,1.41A1,1,0,0,0,17.66,7.34ZM21,11H20a1,1,0,0,0,0,2h1a1,1,0,0,0,0-2Zm-9,8a1,1,0,0,0-1,1v1a1,1,0,0,0,2,0V20A1,1,0,0,0,12,19ZM18.36,17A1,1,0,0,0,17,18.36l.71.71a1,1,0,0,0,1.41,0,1,1,0,0,0,0-1.41ZM12,6.5A5.5,5.5,0,1,0,17.5,12,5.51,5.51,0,0,0,12,6.5Zm0,9A3.5,3.5,0,1,1,15.5,12,3.5,3.5,0,0,1,12,15.5Z";
const MOON_PATH: &str = "M21.64,13a1,1,0,0,0-1.05-.14,8.05,8.05,0,0,1-3.37.73A8.15,8.15,0,0,1,9.08,5.49a8.59,8.59,0,0,1,.25-2A1,1,0,0,0,8,2.36,10.14,10.14,0,1,0,22,14.05,1,1,0,0,0,21.64,13Zm-9.5,6.69A8.14,8.14,0,0,1,7.08,5.22v.27A10.15,10.15,0,0,0,17.22,15.63a9.79,9.79,0,0,0,2.1-.22A8.11,8.11,0,0,1,12.14,19.73Z";
const MONITOR_PATH: &str = "M20,3H4C2.897,3,2,3.897,2,5v11c0,1.103,0.897,2,2,2h7v2H8v2h8v-2h-3v-2h7c1.103,0,2-0.897,2-2V5C22,3.897,21.103,3,20,3z M20,16H4V5h16V16z";

/// Icon path for a mode: sun, moon, or monitor.
pub fn mode_icon_path(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => SUN_PATH,
        ThemeMode::Dark => MOON_PATH,
        ThemeMode::Automatic => MONITOR_PATH,
    }
}

/// Human label for a mode.
pub fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::Automatic => "System",
    }
}

/// Button tooltip naming the current mode and the one a click switches to.
pub fn cycle_title(mode: Option<ThemeMode>) -> String {
    match mode {
        Some(mode) => format!("Theme: {} (switch to {})", mode_label(mode), mode_label(mode.next())),
        None => "Change theme".to_owned(),
    }
}

#[component]
fn ModeIcon(mode: ThemeMode) -> impl IntoView {
    view! {
        <svg
            class="theme-toggle__icon"
            data-mode=mode.as_tag()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path d=mode_icon_path(mode)></path>
        </svg>
    }
}

/// Header button cycling Light -> Dark -> System.
///
/// Renders an empty placeholder until the controller has a mode so the
/// server-rendered markup matches the first client render.
#[component]
pub fn ThemeCycleButton() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn btn-ghost theme-toggle"
            aria-label="Change theme"
            title=move || cycle_title(theme.mode())
            on:click=move |_| {
                theme.advance();
            }
        >
            {move || match theme.mode() {
                Some(mode) => view! { <ModeIcon mode=mode/> }.into_any(),
                None => view! { <span class="theme-toggle__placeholder"></span> }.into_any(),
            }}
        </button>
    }
}

/// One radio per mode; selecting a radio sets that mode explicitly.
#[component]
pub fn ThemeRadioGroup() -> impl IntoView {
    let theme = use_theme();

    view! {
        <fieldset class="theme-radios">
            <legend>"Theme"</legend>
            {ThemeMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <label class="theme-radios__option">
                            <input
                                type="radio"
                                name="theme-mode"
                                value=mode.as_tag()
                                prop:checked=move || theme.mode() == Some(mode)
                                on:change=move |_| {
                                    theme.set_mode(mode);
                                }
                            />
                            <span>{mode_label(mode)}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
    }
}

/// Sun/moon swap checkbox reflecting the applied palette.
///
/// Checking forces Dark, unchecking forces Light; the System mode is only
/// reachable through the other controls.
#[component]
pub fn ThemeSwapToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <label class="swap swap-rotate btn btn-ghost theme-swap">
            <input
                type="checkbox"
                aria-label="Dark palette"
                prop:checked=move || theme.palette().is_some_and(EffectiveTheme::is_dark)
                on:change=move |ev| {
                    let mode = if event_target_checked(&ev) { ThemeMode::Dark } else { ThemeMode::Light };
                    theme.set_mode(mode);
                }
            />
            <svg class="swap-off" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true">
                <path d=SUN_PATH></path>
            </svg>
            <svg class="swap-on" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true">
                <path d=MOON_PATH></path>
            </svg>
        </label>
    }
}
