use crate::models::constants::IMPACT_DELAY_MS;
use crate::models::die::DieId;
use crate::models::vessel::Vessel;
use crate::services::stage::{Deferred, Stage};
use crate::services::turns::TurnCoordinator;

impl Vessel {
    /// Let the player choose which die takes `dmg`.
    ///
    /// A miss (`dmg <= 0`) passes the turn straight away. Otherwise every
    /// die becomes pickable until one is chosen. A second call while a pick
    /// is pending replaces the amount and keeps the pending exchange.
    pub fn add_damage<T: TurnCoordinator>(&mut self, dmg: i32, stage: &mut Stage<T>) {
        if dmg <= 0 {
            tracing::debug!(vessel = self.name(), "bloodless exchange");
            let exchange = stage.turns.begin_exchange();
            stage.turns.hand_off(exchange);
            return;
        }

        if self.incoming > 0 {
            tracing::warn!(
                vessel = self.name(),
                pending = self.incoming,
                replacement = dmg,
                "pending damage overwritten"
            );
        }
        if self.pick_exchange.is_none() {
            self.pick_exchange = Some(stage.turns.begin_exchange());
        }
        self.incoming = dmg;
        for die in self.dice.iter_mut() {
            die.allow_pick(true);
        }
    }

    /// The die the player is pressing on, if a pick is pending.
    /// First match in pool order wins.
    pub fn pick_candidate(&self) -> Option<DieId> {
        if self.incoming <= 0 || !self.pointer().pressed {
            return None;
        }
        self.dice.iter().find(|d| d.is_hovering()).map(|d| d.id())
    }

    /// Close the pick cycle on `target`: same hit sequence as an automatic
    /// hit, then the turn passes once the impact has landed.
    pub fn resolve_pick<T>(&mut self, target: DieId, stage: &mut Stage<T>) {
        let amount = self.incoming;
        tracing::debug!(vessel = self.name(), ?target, amount, "die picked");
        self.hurt_dice(target, amount, stage);

        self.incoming = 0;
        for die in self.dice.iter_mut() {
            die.allow_pick(false);
        }

        if let Some(exchange) = self.pick_exchange.take() {
            stage.defer(IMPACT_DELAY_MS, Deferred::Handoff { exchange });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::constants::{Helm, IMPACT_DELAY_MS};
    use crate::models::die::DieState;
    use crate::models::pointer::PointerState;
    use crate::models::vessel::{Vessel, VesselId};
    use crate::services::effects::CueLog;
    use crate::services::stage::{Deferred, Stage};
    use crate::services::turns::TurnOrder;

    fn setup(values: &[i32]) -> (Vessel, Stage<TurnOrder>) {
        let log = CueLog::new();
        let stage = Stage::new(TurnOrder::default(), Box::new(log.clone()), Box::new(log));
        let mut vessel = Vessel::new(VesselId(0), "Brine", 400.0, Helm::Player, 5);
        for v in values {
            vessel.add_dice(*v);
        }
        (vessel, stage)
    }

    fn press_on(vessel: &mut Vessel, index: usize) {
        let pos = vessel.dice()[index].position();
        vessel.update(0, 0, &PointerState::pressed_at(pos.x, pos.y));
    }

    #[test]
    fn zero_damage_hands_off_immediately() {
        let (mut vessel, mut stage) = setup(&[3, 4]);
        vessel.add_damage(0, &mut stage);

        assert_eq!(stage.turns.coordinator().turns(), 1);
        assert_eq!(vessel.incoming_damage(), 0);
        assert!(vessel.dice().iter().all(|d| !d.is_pickable()));
        assert!(stage.scheduler.is_idle());
    }

    #[test]
    fn positive_damage_opens_pick() {
        let (mut vessel, mut stage) = setup(&[3, 4]);
        vessel.add_damage(3, &mut stage);

        assert_eq!(vessel.incoming_damage(), 3);
        assert!(vessel.awaiting_input());
        assert!(vessel.dice().iter().all(|d| d.is_pickable()));
        assert_eq!(stage.turns.coordinator().turns(), 0);
    }

    #[test]
    fn no_candidate_without_press() {
        let (mut vessel, mut stage) = setup(&[3, 4]);
        vessel.add_damage(3, &mut stage);
        let pos = vessel.dice()[0].position();
        vessel.update(0, 0, &PointerState::at(pos.x, pos.y));
        assert_eq!(vessel.pick_candidate(), None);
    }

    #[test]
    fn no_candidate_without_pending_damage() {
        let (mut vessel, _stage) = setup(&[3, 4]);
        press_on(&mut vessel, 0);
        assert_eq!(vessel.pick_candidate(), None);
    }

    #[test]
    fn resolve_pick_closes_cycle_and_defers_handoff() {
        let (mut vessel, mut stage) = setup(&[3, 4]);
        vessel.add_damage(2, &mut stage);
        press_on(&mut vessel, 1);

        let target = vessel.pick_candidate().expect("die under pointer");
        assert_eq!(target, vessel.dice()[1].id());
        vessel.resolve_pick(target, &mut stage);

        assert_eq!(vessel.incoming_damage(), 0);
        assert_eq!(vessel.dice()[1].state(), DieState::Marked);
        assert!(vessel.dice().iter().all(|d| !d.is_pickable()));
        assert_eq!(vessel.pick_candidate(), None);

        stage.scheduler.advance_to(IMPACT_DELAY_MS);
        let due: Vec<_> = std::iter::from_fn(|| stage.scheduler.pop_due()).collect();
        assert_eq!(due.len(), 2);
        assert!(matches!(due[0], Deferred::Impact { amount: 2, .. }));
        assert!(matches!(due[1], Deferred::Handoff { .. }));
    }

    #[test]
    fn overlapping_dice_resolve_first_in_pool_order() {
        let (mut vessel, mut stage) = setup(&[3, 4, 5]);
        let spot = vessel.dice()[0].position();
        vessel.dice[2].place(spot);
        vessel.add_damage(1, &mut stage);
        press_on(&mut vessel, 2);

        assert!(vessel.dice()[2].is_hovering());
        assert_eq!(vessel.pick_candidate(), Some(vessel.dice()[0].id()));
    }

    #[test]
    fn overwrite_keeps_single_exchange() {
        let (mut vessel, mut stage) = setup(&[3, 4]);
        vessel.add_damage(2, &mut stage);
        let first = stage.turns.current();
        vessel.add_damage(5, &mut stage);

        assert_eq!(vessel.incoming_damage(), 5);
        assert_eq!(stage.turns.current(), first);
    }
}
