//! Vessel model
//!
//! One side of the battle: a hull carrying an ordered pool of dice.
//! Damage resolution lives in [`crate::services::combat`]; this module
//! holds the state, the per-frame update and the hull movement.

mod layout;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::constants::{
    Helm, RECOIL_DECAY, SAIL_DISTANCE, SAIL_MS, SINK_DEPTH, SINK_MS, STAGGER_DECAY, WATERLINE_Y,
};
use super::die::{Die, DieId};
use super::pointer::PointerState;
use super::position::Vec2;
use super::tween::{Ease, Tween};
use crate::io::OutputWriter;
use crate::services::effects::{CrewAnimation, IdleCrew, Projectile};
use crate::services::turns::ExchangeId;
use crate::ui::presenters::BattlePresenter;

pub use layout::slot_position;

/// Index of a vessel within its battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VesselId(pub usize);

impl VesselId {
    /// The other side of a two-vessel battle.
    pub fn other(&self) -> VesselId {
        VesselId(1 - self.0.min(1))
    }
}

pub struct Vessel {
    pub(crate) id: VesselId,
    name: String,
    helm: Helm,
    position: Vec2,
    hull_tween: Option<Tween>,
    pub(crate) dice: Vec<Die>,
    next_die: u32,
    opponent: Option<VesselId>,
    /// Damage waiting for the player to choose a die. 0 = no pick pending.
    pub(crate) incoming: i32,
    pub(crate) pick_exchange: Option<ExchangeId>,
    pub(crate) recoil: f64,
    pub(crate) stagger: f64,
    sway: f64,
    pointer: PointerState,
    pub(crate) crew: Box<dyn CrewAnimation>,
    pub(crate) ball: Option<Box<dyn Projectile>>,
    rng: StdRng,
}

impl Vessel {
    pub fn new(id: VesselId, name: impl Into<String>, x: f64, helm: Helm, seed: u64) -> Self {
        Vessel {
            id,
            name: name.into(),
            helm,
            position: Vec2::new(x, WATERLINE_Y),
            hull_tween: None,
            dice: Vec::new(),
            next_die: 0,
            opponent: None,
            incoming: 0,
            pick_exchange: None,
            recoil: 0.0,
            stagger: 0.0,
            sway: 0.0,
            pointer: PointerState::default(),
            crew: Box::new(IdleCrew),
            ball: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ========== Accessor Methods ==========

    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn helm(&self) -> Helm {
        self.helm
    }

    pub fn is_auto(&self) -> bool {
        self.helm == Helm::Auto
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice.iter().find(|d| d.id() == id)
    }

    /// Current die values in pool order.
    pub fn dice_values(&self) -> Vec<i32> {
        self.dice.iter().map(Die::value).collect()
    }

    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    pub fn is_dead(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn opponent(&self) -> Option<VesselId> {
        self.opponent
    }

    pub fn set_opponent(&mut self, other: VesselId) {
        self.opponent = Some(other);
    }

    pub fn incoming_damage(&self) -> i32 {
        self.incoming
    }

    /// True while a pick is pending.
    pub fn awaiting_input(&self) -> bool {
        self.incoming > 0
    }

    pub fn recoil(&self) -> f64 {
        self.recoil
    }

    pub fn stagger(&self) -> f64 {
        self.stagger
    }

    pub fn sway(&self) -> f64 {
        self.sway
    }

    pub fn set_crew(&mut self, crew: Box<dyn CrewAnimation>) {
        self.crew = crew;
    }

    pub fn set_ball(&mut self, ball: Box<dyn Projectile>) {
        self.ball = Some(ball);
    }

    pub fn pose(&mut self, active: bool) {
        self.crew.set_pose(active);
    }

    // ========== Dice pool ==========

    /// Add a die with the given value to the end of the pool and lay the
    /// pool out again. The new die starts in its slot; the others slide.
    pub fn add_dice(&mut self, value: i32) -> DieId {
        let id = DieId(self.next_die);
        self.next_die += 1;

        let mut die = Die::new(id, value);
        let slot = self.dice_pos(self.dice.len());
        die.place(slot);
        self.dice.push(die);
        self.reposition_dice();
        id
    }

    pub(crate) fn die_mut(&mut self, id: DieId) -> Option<&mut Die> {
        self.dice.iter_mut().find(|d| d.id() == id)
    }

    /// Evict a die from the pool. Returns false if it was not there.
    pub(crate) fn remove_die(&mut self, id: DieId) -> bool {
        let before = self.dice.len();
        self.dice.retain(|d| d.id() != id);
        self.dice.len() != before
    }

    // ========== Frame update ==========

    /// Advance one frame. `pointer` is already mapped into this vessel's frame.
    pub fn update(&mut self, tick: u64, dt_ms: u64, pointer: &PointerState) {
        self.sway = (tick as f64 * 0.005).sin();
        self.pointer = *pointer;

        for die in self.dice.iter_mut() {
            die.update(dt_ms, pointer);
        }

        if self.recoil > 0.0 {
            self.recoil = (self.recoil - RECOIL_DECAY).max(0.0);
        }
        if self.stagger > 0.0 {
            self.stagger = (self.stagger - STAGGER_DECAY).max(0.0);
        }

        if let Some(tween) = self.hull_tween.as_mut() {
            self.position = tween.advance(dt_ms);
            if tween.is_done() {
                self.hull_tween = None;
            }
        }
    }

    pub(crate) fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    // ========== Hull movement ==========

    /// Go down after losing the battle.
    pub fn sink(&mut self) {
        self.crew.hop_in_place();
        let target = self.position.offset(0.0, SINK_DEPTH);
        self.hull_tween = Some(Tween::new(self.position, target, SINK_MS, Ease::QuadIn));
    }

    /// Leave the scene after winning.
    pub fn sail(&mut self) {
        self.crew.hop_in_place();
        let target = self.position.offset(SAIL_DISTANCE, 0.0);
        self.hull_tween = Some(Tween::new(self.position, target, SAIL_MS, Ease::QuadInOut));
    }

    pub fn is_moving(&self) -> bool {
        self.hull_tween.is_some() || self.dice.iter().any(Die::is_moving)
    }

    pub fn render(&self, surface: &mut dyn OutputWriter) {
        BattlePresenter::show_vessel(self, surface);
    }
}
