//! Reusable iced widgets for the Lector reading view

pub mod components;
pub mod style;

pub use components::*;
