//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::{site_header::SiteHeader, theme_settings::ThemeSettings};
use crate::state::theme::provide_theme_context;
use crate::theme::bootstrap::inline_script;
use crate::theme::config::ThemeConfig;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Validated theme settings shared by the shell's bootstrap script and the app.
pub fn site_theme_config() -> ThemeConfig {
    ThemeConfig::default().or_default()
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// The theme bootstrap script runs before the stylesheet paints and before
/// the WASM bundle loads, so the first frame already uses the right palette.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = site_theme_config();
    let bootstrap = match inline_script(&config) {
        Ok(script) => script,
        Err(e) => {
            log::warn!("theme bootstrap script not rendered: {e}");
            String::new()
        }
    };

    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content=config.light_theme_color.clone()/>
                <script inner_html=bootstrap></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page's single theme controller; every theme control below reads
/// it from context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme_context(site_theme_config());

    view! {
        <Title text="DevNest | Frontend development blog"/>
        <SiteHeader/>
        <main id="main" class="site-main">
            <ThemeSettings/>
        </main>
    }
}
