//! Shared Dioxus components and Plotly.js bridge for the Gapminder dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Plotly.js via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, fed by `gm_engine::handle`
//! - `components`: The six dashboard controls plus chart containers

pub mod js_bridge;
pub mod state;
pub mod components;
