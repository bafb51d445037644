//! Broadside battle engine
//!
//! Two vessels trade cannon fire. Each carries a pool of dice; a hit
//! lands on one die, chosen automatically or by the player, and a die
//! that drops to zero is thrown overboard. A vessel with no dice left
//! has lost.
//!
//! # Overview
//!
//! Every hit is split in two: the visual cue fires at once, and the state
//! change waits on a virtual-time scheduler until the effect has landed.
//! Turn ownership lives outside the engine in a
//! [`TurnCoordinator`](services::turns::TurnCoordinator); the engine hands
//! off the turn once per resolved exchange.
//!
//! # Modules
//!
//! - [`game_engine`] - Battle session, frame loop and game-over logic
//! - [`models`] - Dice, vessels, geometry and tweening
//! - [`services`] - Damage resolution, scheduler, turn handoff, effects
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Text presentation
//! - [`cli`] / [`config`] / [`telemetry`] - Binary plumbing
//!
//! # Example
//!
//! ```rust
//! use broadside::models::constants::Helm;
//! use broadside::services::effects::CueLog;
//! use broadside::services::turns::TurnOrder;
//! use broadside::Battle;
//!
//! let log = CueLog::new();
//! let mut battle = Battle::new(7, TurnOrder::default(), Box::new(log.clone()), Box::new(log));
//! let gull = battle.add_vessel("Gull", 400.0, Helm::Player).unwrap();
//! let cutlass = battle.add_vessel("Cutlass", 1400.0, Helm::Auto).unwrap();
//! battle.pair(gull, cutlass).unwrap();
//! battle.add_dice(gull, 4).unwrap();
//! battle.add_dice(cutlass, 2).unwrap();
//!
//! battle.shoot(gull, 3).unwrap();
//! battle.settle(16);
//! assert!(battle.vessel(cutlass).unwrap().is_dead());
//! ```

pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{Battle, BattleState, Outcome};
pub use models::errors::{BattleError, GameResult};
