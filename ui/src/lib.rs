//! Shared UI crate for Pulsegrid. Most cross-platform logic and views live here.

pub mod activity;
pub mod core;
pub mod i18n;
pub mod reports;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
