//! Library entry for Huescope exposing core logic for integration tests.

pub mod analyze;
pub mod args;
pub mod color;
pub mod theme;
pub mod ui;
