//! Horizon Dashboard
//!
//! Static analytics dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. The page is
//! composed once by `horizon::DashboardPage::compose` from an injected
//! dataset; components only project the composed fragments into the DOM.
//! The only client state is the checkbox of each task item.

use leptos::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

pub use app::App;

/// Mount the dashboard with the built-in dataset to the document body
pub fn mount() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> });
}
