use super::constants::{DIE_MOVE_MS, DIE_SIZE};
use super::pointer::PointerState;
use super::position::Vec2;
use super::tween::{Ease, Tween};

/// Stable handle for a die. Indices shift when dice are removed,
/// ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieState {
    Idle,
    /// Chosen as the target of an impact that has not landed yet.
    Marked,
    /// Took a hit and survived.
    Hurt,
    /// Value dropped to zero or below.
    Removed,
}

/// A single destructible unit of a vessel's cargo.
#[derive(Debug, Clone)]
pub struct Die {
    id: DieId,
    value: i32,
    state: DieState,
    pickable: bool,
    hovering: bool,
    position: Vec2,
    tween: Option<Tween>,
}

impl Die {
    pub fn new(id: DieId, value: i32) -> Self {
        Die {
            id,
            value,
            state: DieState::Idle,
            pickable: false,
            hovering: false,
            position: Vec2::default(),
            tween: None,
        }
    }

    pub fn id(&self) -> DieId {
        self.id
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn state(&self) -> DieState {
        self.state
    }

    pub fn is_pickable(&self) -> bool {
        self.pickable
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Where the die is heading, or where it is if it is not moving.
    pub fn destination(&self) -> Vec2 {
        self.tween.map_or(self.position, |t| t.target())
    }

    pub fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    pub fn mark(&mut self) {
        self.state = DieState::Marked;
    }

    /// Subtract `amount`. Returns true if the die is destroyed.
    pub fn hurt(&mut self, amount: i32) -> bool {
        self.value -= amount;
        if self.value <= 0 {
            self.value = 0;
            self.state = DieState::Removed;
            true
        } else {
            self.state = DieState::Hurt;
            false
        }
    }

    pub fn allow_pick(&mut self, enabled: bool) {
        self.pickable = enabled;
    }

    /// Whether the pointer seen on the last update lies over this die.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether a point in the vessel's frame lies within the render bounds.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = DIE_SIZE / 2.0;
        (point.x - self.position.x).abs() <= half && (point.y - self.position.y).abs() <= half
    }

    /// Snap to a position, dropping any move in progress.
    pub fn place(&mut self, position: Vec2) {
        self.position = position;
        self.tween = None;
    }

    /// Start sliding towards `target`. Progress happens in [`Die::update`].
    pub fn move_to(&mut self, target: Vec2) {
        self.tween = Some(Tween::new(self.position, target, DIE_MOVE_MS, Ease::QuadInOut));
    }

    /// Per-frame step. `pointer` is already in the vessel's frame.
    pub fn update(&mut self, dt_ms: u64, pointer: &PointerState) {
        if let Some(tween) = self.tween.as_mut() {
            self.position = tween.advance(dt_ms);
            if tween.is_done() {
                self.tween = None;
            }
        }
        self.hovering = self.contains(pointer.position());
    }
}
