//! Assetboard Dashboard
//!
//! Browser dashboard for registering and verifying digital assets, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Owner view listing assets with approval status and minting
//! - User view with asset cards, add/details and verification modals
//! - Token lookup by URL
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Views drive the shared `assetboard` dashboard workflows and
//! mirror their state into signals; requests go out through `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
