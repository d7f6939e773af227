//! TrafficWatch Dashboard
//!
//! City traffic monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live traffic feed, polled every five seconds
//! - Congestion, incident, speed and signal summary cards
//! - Sections for routes, signals, parking, incidents and analytics
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads the TrafficWatch API over HTTP.

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
