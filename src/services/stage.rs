//! Shared battle context handed to vessel operations.

use crate::models::die::DieId;
use crate::models::vessel::VesselId;

use super::effects::{Camera, ImpactSpawner};
use super::scheduler::Scheduler;
use super::turns::{ExchangeId, TurnCoordinator, TurnGate};

/// A state change waiting for its visual cue to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Apply `amount` to a die once the impact effect lands.
    Impact { vessel: VesselId, die: DieId, amount: i32 },
    /// Pass the turn for a resolved exchange.
    Handoff { exchange: ExchangeId },
    /// Crew drops the firing pose.
    ResetPose { vessel: VesselId },
}

/// Everything a vessel reaches outside itself: the clock, the camera,
/// the impact spawner and the turn gate.
pub struct Stage<T> {
    pub scheduler: Scheduler<Deferred>,
    pub camera: Box<dyn Camera>,
    pub impacts: Box<dyn ImpactSpawner>,
    pub turns: TurnGate<T>,
}

impl<T: TurnCoordinator> Stage<T> {
    pub fn new(coordinator: T, camera: Box<dyn Camera>, impacts: Box<dyn ImpactSpawner>) -> Self {
        Stage {
            scheduler: Scheduler::new(),
            camera,
            impacts,
            turns: TurnGate::new(coordinator),
        }
    }
}

impl<T> Stage<T> {
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn defer(&mut self, delay_ms: u64, action: Deferred) {
        tracing::trace!(?action, delay_ms, "deferred");
        self.scheduler.schedule(delay_ms, action);
    }
}
