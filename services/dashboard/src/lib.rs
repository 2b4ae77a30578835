//! AdIntel Dashboard - Leptos frontend
//!
//! One view per dashboard screen. Every view fetches through the shared
//! [`api::client`] on mount and on user action, and falls back to an empty
//! state when a request fails.

pub mod api;
pub mod app;
pub mod components;
pub mod context;
pub mod format;

pub use app::App;

/// Browser entry point
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
