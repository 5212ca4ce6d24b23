//! Shared Dioxus components and JS interop for the ocean flow apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the MapLibre map and D3.js chart
//!   functions in `assets/js/*.js`, called via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `fetch`: browser-side HTTP for the subset API
//! - `components`: Reusable RSX components (selectors, slider, containers)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
