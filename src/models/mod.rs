//! Domain models
//!
//! Vessels, dice and the geometry they live in. Models hold state and
//! small local logic; cross-vessel operations live in `services`.

pub mod constants;
pub mod die;
pub mod errors;
pub mod pointer;
pub mod position;
pub mod tween;
pub mod vessel;
