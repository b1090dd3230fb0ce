//! Theme mode model, decision function, controller, and bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain Rust with no reactive or browser dependencies.
//! Browser adapters live in `crate::util`; the Leptos binding lives in
//! `crate::state::theme`.

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod mode;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use mode::{EffectiveTheme, ThemeMode, resolve};
