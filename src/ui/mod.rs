//! User interface and presentation
//!
//! Presenters format battle state for the terminal, keeping text out of
//! the combat logic.

pub mod presenters;
