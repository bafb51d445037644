//! Battle session
//!
//! Owns both vessels and the shared [`Stage`], wires opponents together,
//! drives the frame loop and decides when the battle is over.

use crate::models::constants::{Helm, IMPACT_DELAY_MS};
use crate::models::die::DieId;
use crate::models::errors::{BattleError, GameResult};
use crate::models::pointer::PointerState;
use crate::models::position::Vec2;
use crate::models::vessel::{Vessel, VesselId};
use crate::services::effects::{Camera, ImpactSpawner};
use crate::services::stage::{Deferred, Stage};
use crate::services::turns::{TurnCoordinator, TurnOrder};

/// Frames [`Battle::settle`] will run before giving up.
const MAX_SETTLE_FRAMES: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory { winner: VesselId },
    /// Both pools emptied.
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Playing,
    Over(Outcome),
}

/// Two vessels, one clock, one turn coordinator.
pub struct Battle<T: TurnCoordinator = TurnOrder> {
    vessels: Vec<Vessel>,
    stage: Stage<T>,
    state: BattleState,
    seed: u64,
    pointer: PointerState,
}

impl<T: TurnCoordinator> Battle<T> {
    /// Creates an empty battle. Vessel layout jitter is seeded from `seed`.
    pub fn new(
        seed: u64,
        coordinator: T,
        camera: Box<dyn Camera>,
        impacts: Box<dyn ImpactSpawner>,
    ) -> Self {
        Battle {
            vessels: Vec::with_capacity(2),
            stage: Stage::new(coordinator, camera, impacts),
            state: BattleState::Playing,
            seed,
            pointer: PointerState::default(),
        }
    }

    /// Add one side. A battle holds exactly two vessels.
    pub fn add_vessel(&mut self, name: &str, x: f64, helm: Helm) -> GameResult<VesselId> {
        if self.vessels.len() >= 2 {
            return Err(BattleError::InvalidArgument(format!(
                "cannot add {}: a battle holds two vessels",
                name
            )));
        }
        let id = VesselId(self.vessels.len());
        let seed = self.seed.wrapping_add(id.0 as u64);
        self.vessels.push(Vessel::new(id, name, x, helm, seed));
        Ok(id)
    }

    /// Make `a` and `b` each other's opponent.
    pub fn pair(&mut self, a: VesselId, b: VesselId) -> GameResult<()> {
        self.vessel(a)?;
        self.vessel(b)?;
        self.vessels[a.0].set_opponent(b);
        self.vessels[b.0].set_opponent(a);
        Ok(())
    }

    /// Check that both sides are present and wired before the first shot.
    pub fn start(&self) -> GameResult<()> {
        if self.vessels.len() != 2 {
            return Err(BattleError::InvalidArgument(format!(
                "a battle needs two vessels, found {}",
                self.vessels.len()
            )));
        }
        if let Some(v) = self.vessels.iter().find(|v| v.opponent().is_none()) {
            return Err(BattleError::Unpaired(v.name().to_string()));
        }
        tracing::info!(
            first = self.vessels[0].name(),
            second = self.vessels[1].name(),
            "battle started"
        );
        Ok(())
    }

    // ========== Accessor Methods ==========

    pub fn vessel(&self, id: VesselId) -> GameResult<&Vessel> {
        self.vessels.get(id.0).ok_or(BattleError::UnknownVessel(id.0))
    }

    pub fn vessel_mut(&mut self, id: VesselId) -> GameResult<&mut Vessel> {
        self.vessels.get_mut(id.0).ok_or(BattleError::UnknownVessel(id.0))
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn coordinator(&self) -> &T {
        self.stage.turns.coordinator()
    }

    pub fn coordinator_mut(&mut self) -> &mut T {
        self.stage.turns.coordinator_mut()
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.stage.now()
    }

    pub fn pending_actions(&self) -> usize {
        self.stage.scheduler.pending()
    }

    /// Nothing queued and nothing sliding into place.
    pub fn is_idle(&self) -> bool {
        self.stage.scheduler.is_idle() && !self.vessels.iter().any(Vessel::is_moving)
    }

    /// Screen coordinates of a die, under the current camera view.
    pub fn die_screen_position(&self, vessel: VesselId, die: DieId) -> GameResult<Vec2> {
        let v = self.vessel(vessel)?;
        let d = v.die(die).ok_or_else(|| {
            BattleError::InvalidArgument(format!("{} has no die {:?}", v.name(), die))
        })?;
        let view = self.stage.camera.view();
        Ok(view.local_to_screen(d.position(), v.position(), v.helm().direction()))
    }

    // ========== Operations ==========

    /// Add a die to `id`'s pool.
    pub fn add_dice(&mut self, id: VesselId, value: i32) -> GameResult<DieId> {
        Ok(self.vessel_mut(id)?.add_dice(value))
    }

    /// Automatic hit on `id`'s own pool.
    pub fn hurt(&mut self, id: VesselId, amount: i32) -> GameResult<()> {
        self.vessel(id)?;
        self.vessels[id.0].hurt(amount, &mut self.stage);
        Ok(())
    }

    /// Ask `id` to pick the die that absorbs `dmg`.
    pub fn add_damage(&mut self, id: VesselId, dmg: i32) -> GameResult<()> {
        self.vessel(id)?;
        self.vessels[id.0].add_damage(dmg, &mut self.stage);
        Ok(())
    }

    /// `id` fires `damage` at its opponent.
    ///
    /// The turn passes once the shot lands, unless the opponent is in the
    /// middle of a pick; that pick hands off the turn itself.
    pub fn shoot(&mut self, id: VesselId, damage: i32) -> GameResult<()> {
        self.vessel(id)?;
        self.vessels[id.0].shoot_anim(&mut self.stage);

        let opponent = self.vessels[id.0].opponent();
        let picking = match opponent {
            Some(o) if o.0 < self.vessels.len() => {
                let target = &mut self.vessels[o.0];
                target.hurt(damage, &mut self.stage);
                target.awaiting_input()
            }
            _ => {
                tracing::warn!(vessel = self.vessels[id.0].name(), "shot with no opponent wired");
                false
            }
        };

        if picking {
            tracing::debug!("opponent is picking; leaving handoff to the pick");
        } else {
            let exchange = self.stage.turns.begin_exchange();
            self.stage.defer(IMPACT_DELAY_MS, Deferred::Handoff { exchange });
        }
        Ok(())
    }

    // ========== Frame loop ==========

    /// One frame: fire due deferred actions, update both vessels with the
    /// pointer in their own frame, then resolve at most one pick.
    pub fn update(&mut self, tick: u64, pointer: PointerState) {
        let dt = tick.saturating_sub(self.stage.now());
        self.stage.scheduler.advance_to(tick);
        self.pointer = pointer;

        while let Some(action) = self.stage.scheduler.pop_due() {
            self.dispatch(action);
        }

        let view = self.stage.camera.view();
        for vessel in self.vessels.iter_mut() {
            let local = view.to_local(&pointer, vessel.position(), vessel.helm().direction());
            vessel.update(tick, dt, &local);
        }

        self.resolve_pick();
    }

    /// Advance `dt_ms` with the pointer released where it last was.
    pub fn advance(&mut self, dt_ms: u64) {
        let pointer = PointerState {
            pressed: false,
            ..self.pointer
        };
        self.update(self.now() + dt_ms, pointer);
    }

    /// Run frames of `frame_ms` until nothing is queued or moving.
    /// Returns the number of frames run.
    pub fn settle(&mut self, frame_ms: u64) -> u32 {
        let frame_ms = frame_ms.max(1);
        let mut frames = 0;
        while !self.is_idle() && frames < MAX_SETTLE_FRAMES {
            self.advance(frame_ms);
            frames += 1;
        }
        if frames == MAX_SETTLE_FRAMES {
            tracing::warn!(frames, "battle did not settle");
        }
        frames
    }

    fn dispatch(&mut self, action: Deferred) {
        match action {
            Deferred::Impact { vessel, die, amount } => match self.vessels.get_mut(vessel.0) {
                Some(v) => v.apply_impact(die, amount, &mut self.stage),
                None => tracing::warn!(?vessel, "impact for unknown vessel"),
            },
            Deferred::Handoff { exchange } => {
                self.stage.turns.hand_off(exchange);
            }
            Deferred::ResetPose { vessel } => {
                if let Some(v) = self.vessels.get_mut(vessel.0) {
                    v.pose(false);
                }
            }
        }
    }

    fn resolve_pick(&mut self) {
        let Some((index, die)) = self
            .vessels
            .iter()
            .enumerate()
            .find_map(|(i, v)| v.pick_candidate().map(|d| (i, d)))
        else {
            return;
        };

        match self.vessels[index].opponent() {
            Some(opponent) => {
                if let Some(shooter) = self.vessels.get_mut(opponent.0) {
                    shooter.shoot_anim(&mut self.stage);
                }
            }
            None => tracing::debug!(vessel = self.vessels[index].name(), "pick with no opponent"),
        }
        self.vessels[index].resolve_pick(die, &mut self.stage);
    }

    // ========== Game over ==========

    /// Checks whether either side has run out of dice.
    ///
    /// The first time an outcome is found the loser sinks and the winner
    /// sails off. Once decided, the outcome never changes.
    pub fn check_game_over(&mut self) -> Option<Outcome> {
        if let BattleState::Over(outcome) = self.state {
            return Some(outcome);
        }

        let dead: Vec<VesselId> = self
            .vessels
            .iter()
            .filter(|v| v.is_dead())
            .map(Vessel::id)
            .collect();

        let outcome = match dead.as_slice() {
            [] => return None,
            [loser] => Outcome::Victory {
                winner: loser.other(),
            },
            _ => Outcome::Draw,
        };

        for id in &dead {
            self.vessels[id.0].sink();
        }
        if let Outcome::Victory { winner } = outcome {
            if let Some(v) = self.vessels.get_mut(winner.0) {
                v.sail();
            }
        }

        tracing::info!(?outcome, "battle over");
        self.state = BattleState::Over(outcome);
        Some(outcome)
    }
}
