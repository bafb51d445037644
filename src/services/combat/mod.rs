//! Combat system
//!
//! Damage resolution on a vessel's dice: automatic target selection,
//! the player pick cycle, and firing the cannon. Each operation runs its
//! visual cue now and defers the state change through the [`Stage`]
//! scheduler.
//!
//! [`Stage`]: crate::services::stage::Stage

mod damage;
mod pick;
mod volley;

pub use damage::select_target;
