//! Shared Dioxus components and D3.js bridge for emissions chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `fetch`: startup CSV download over the browser fetch API
//! - `state`: Reactive AppState with Dioxus Signals
//! - `payload`: JSON shapes consumed by the D3 chart scripts
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod payload;
pub mod state;
