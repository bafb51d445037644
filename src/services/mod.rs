//! Game services
//!
//! Operations over the models: damage resolution, deferred actions,
//! turn handoff, visual collaborators and the terminal match loop.

pub mod combat;
pub mod effects;
pub mod game;
pub mod gunnery;
pub mod scheduler;
pub mod stage;
pub mod turns;
