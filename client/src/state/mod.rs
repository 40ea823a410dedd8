//! Client-side reactive state.
//!
//! State structs are plain data; components wrap them in `RwSignal` and share
//! them through Leptos context.

pub mod theme;
pub mod ui;
