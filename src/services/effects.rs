//! Visual collaborators
//!
//! Camera shake, impact pulses, projectiles and crew animation are drawn
//! elsewhere. The battle only tells them when to fire.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::pointer::CameraView;
use crate::models::position::Vec2;

pub trait Camera {
    fn shake(&mut self, magnitude: f64, duration: f64, intensity: f64);

    /// Current zoom and pan, for mapping the pointer into vessel frames.
    fn view(&self) -> CameraView {
        CameraView::default()
    }
}

pub trait ImpactSpawner {
    fn spawn(&mut self, x: f64, y: f64, size: f64);
}

/// The cannonball a vessel fires.
pub trait Projectile {
    fn launch(&mut self, origin: Vec2, velocity: f64);
}

/// The figure standing on deck.
pub trait CrewAnimation {
    fn hop_in_place(&mut self);
    fn set_pose(&mut self, active: bool);
}

/// One visual cue, as recorded by [`CueLog`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    Shake { magnitude: f64, duration: f64, intensity: f64 },
    Impact { x: f64, y: f64, size: f64 },
    Launch { origin: Vec2, velocity: f64 },
    Hop,
    Pose(bool),
}

/// Records every cue it receives. Clones share the same log, so one
/// instance can stand in for every collaborator at once.
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    cues: Rc<RefCell<Vec<Cue>>>,
    view: CameraView,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(view: CameraView) -> Self {
        CueLog {
            cues: Rc::default(),
            view,
        }
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.cues.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Cue> {
        self.cues.borrow_mut().drain(..).collect()
    }

    pub fn count(&self, pred: impl Fn(&Cue) -> bool) -> usize {
        self.cues.borrow().iter().filter(|c| pred(c)).count()
    }

    fn push(&self, cue: Cue) {
        tracing::trace!(?cue, "visual cue");
        self.cues.borrow_mut().push(cue);
    }
}

impl Camera for CueLog {
    fn shake(&mut self, magnitude: f64, duration: f64, intensity: f64) {
        self.push(Cue::Shake {
            magnitude,
            duration,
            intensity,
        });
    }

    fn view(&self) -> CameraView {
        self.view
    }
}

impl ImpactSpawner for CueLog {
    fn spawn(&mut self, x: f64, y: f64, size: f64) {
        self.push(Cue::Impact { x, y, size });
    }
}

impl Projectile for CueLog {
    fn launch(&mut self, origin: Vec2, velocity: f64) {
        self.push(Cue::Launch { origin, velocity });
    }
}

impl CrewAnimation for CueLog {
    fn hop_in_place(&mut self) {
        self.push(Cue::Hop);
    }

    fn set_pose(&mut self, active: bool) {
        self.push(Cue::Pose(active));
    }
}

/// Crew that does nothing, for vessels nobody is watching.
#[derive(Debug, Default)]
pub struct IdleCrew;

impl CrewAnimation for IdleCrew {
    fn hop_in_place(&mut self) {}

    fn set_pose(&mut self, _active: bool) {}
}
