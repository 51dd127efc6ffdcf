//! UI components.

pub mod backdrop;
pub mod reveal;
