//! Shared Dioxus components and chart bridge for the groundwater forecast
//! dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js charts and the Leaflet well map via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, tables, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
