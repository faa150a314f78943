//! Shared UI crate for Riskscope. Most cross-platform logic and views live here.

use dioxus::prelude::{asset, manganis, Asset};

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet; platform shells link or embed it from here.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
