//! UI module - contains UI rendering components
//!
//! Widgets here know nothing about the substitution model; the app module
//! feeds them plain letters and collects their responses.

pub mod components;
pub mod layout;
