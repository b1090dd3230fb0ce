//! Sticky site header with the brand link and the theme cycle button.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeCycleButton;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="navbar site-header">
            <div class="navbar-start">
                <a href="/" class="btn btn-ghost site-header__brand">
                    "DevNest Blog"
                </a>
            </div>
            <div class="navbar-end">
                <ThemeCycleButton/>
            </div>
        </header>
    }
}
