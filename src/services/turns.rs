//! Turn handoff
//!
//! Whose turn it is lives outside the battle, in a [`TurnCoordinator`].
//! The battle only reports that an exchange has been resolved, through a
//! [`TurnGate`] that lets each exchange hand off at most once.

use std::collections::BTreeSet;

use crate::models::vessel::VesselId;

pub trait TurnCoordinator {
    /// Pass initiative to the other side.
    fn advance_turn(&mut self);
}

/// Alternates between two vessels and counts completed turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    active: VesselId,
    turns: u32,
}

impl TurnOrder {
    pub fn new(first: VesselId) -> Self {
        TurnOrder {
            active: first,
            turns: 0,
        }
    }

    pub fn active(&self) -> VesselId {
        self.active
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::new(VesselId(0))
    }
}

impl TurnCoordinator for TurnOrder {
    fn advance_turn(&mut self) {
        self.active = self.active.other();
        self.turns += 1;
    }
}

/// Sequence number of an exchange: one shot, or one pick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExchangeId(pub u64);

/// Forwards at most one handoff per exchange to the coordinator.
///
/// Several exchanges may be open at once, e.g. both vessels firing before
/// either shot has landed. Each one hands off exactly once.
pub struct TurnGate<T> {
    coordinator: T,
    latest: ExchangeId,
    open: BTreeSet<ExchangeId>,
}

impl<T: TurnCoordinator> TurnGate<T> {
    pub fn new(coordinator: T) -> Self {
        TurnGate {
            coordinator,
            latest: ExchangeId(0),
            open: BTreeSet::new(),
        }
    }

    pub fn coordinator(&self) -> &T {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut T {
        &mut self.coordinator
    }

    /// The most recently opened exchange.
    pub fn current(&self) -> ExchangeId {
        self.latest
    }

    /// Whether `exchange` still owes a handoff.
    pub fn is_open(&self, exchange: ExchangeId) -> bool {
        self.open.contains(&exchange)
    }

    /// Exchanges opened and not yet handed off.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn begin_exchange(&mut self) -> ExchangeId {
        self.latest = ExchangeId(self.latest.0 + 1);
        self.open.insert(self.latest);
        self.latest
    }

    /// Returns true if the coordinator was called.
    pub fn hand_off(&mut self, exchange: ExchangeId) -> bool {
        if !self.open.remove(&exchange) {
            tracing::debug!(?exchange, "exchange already handed off or never opened");
            return false;
        }
        tracing::debug!(?exchange, still_open = self.open.len(), "turn handoff");
        self.coordinator.advance_turn();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order_alternates() {
        let mut order = TurnOrder::new(VesselId(0));
        order.advance_turn();
        assert_eq!(order.active(), VesselId(1));
        order.advance_turn();
        assert_eq!(order.active(), VesselId(0));
        assert_eq!(order.turns(), 2);
    }

    #[test]
    fn hands_off_once_per_exchange() {
        let mut gate = TurnGate::new(TurnOrder::default());
        let exchange = gate.begin_exchange();

        assert!(gate.hand_off(exchange));
        assert!(!gate.hand_off(exchange));
        assert_eq!(gate.coordinator().turns(), 1);
    }

    #[test]
    fn interleaved_exchanges_each_hand_off() {
        let mut gate = TurnGate::new(TurnOrder::default());
        let first = gate.begin_exchange();
        let second = gate.begin_exchange();
        assert_eq!(gate.open_count(), 2);

        assert!(gate.hand_off(first));
        assert!(gate.is_open(second));
        assert!(gate.hand_off(second));
        assert!(!gate.hand_off(first));
        assert_eq!(gate.coordinator().turns(), 2);
        assert_eq!(gate.open_count(), 0);
    }

    #[test]
    fn nothing_is_open_before_first_exchange() {
        let mut gate = TurnGate::new(TurnOrder::default());
        assert_eq!(gate.open_count(), 0);
        assert!(!gate.hand_off(gate.current()));
        assert!(!gate.hand_off(ExchangeId(7)));
        assert_eq!(gate.coordinator().turns(), 0);
    }
}
