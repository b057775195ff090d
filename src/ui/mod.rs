//! UI module - contains UI rendering components
//!
//! Widgets shared by the page renderer in `app`.

pub mod components;
