/// Time for an impact effect to land. Gameplay state changes only after this
/// much time has passed since the matching visual cue.
pub const IMPACT_DELAY_MS: u64 = 500;
/// How long the crew holds the firing pose.
pub const POSE_RESET_MS: u64 = 300;
/// Duration of a die sliding to a new layout slot.
pub const DIE_MOVE_MS: u64 = 300;
pub const SINK_MS: u64 = 1000;
pub const SAIL_MS: u64 = 6000;
pub const SINK_DEPTH: f64 = 550.0;
pub const SAIL_DISTANCE: f64 = 2000.0;

/// Vessels float on this line.
pub const WATERLINE_Y: f64 = 550.0;

pub const DICE_PER_COLUMN: usize = 3;
pub const COLUMN_SPACING: f64 = 105.0;
pub const ROW_SPACING: f64 = 100.0;
pub const LAYOUT_ORIGIN_X: f64 = -180.0;
pub const LAYOUT_ORIGIN_Y: f64 = -240.0;
/// Horizontal jitter is drawn from `[0, LAYOUT_JITTER)` on every placement.
pub const LAYOUT_JITTER: f64 = 20.0;
pub const CARGO_COLUMN_WIDTH: f64 = 100.0;

/// Dice render as a square of this side, centred on their position.
pub const DIE_SIZE: f64 = 80.0;

pub const RECOIL_DECAY: f64 = 0.075;
pub const STAGGER_DECAY: f64 = 0.05;

/// Height of the deck line where shots land and leave.
pub const DECK_Y: f64 = 340.0;
pub const IMPACT_BACKSET: f64 = 50.0;
pub const MUZZLE_REACH: f64 = 300.0;
pub const PULSE_OFFSET_X: f64 = 40.0;
pub const IMPACT_PULSE_SIZE: f64 = 150.0;
pub const MUZZLE_PULSE_SIZE: f64 = 80.0;
pub const PROJECTILE_SPEED: f64 = 800.0;

/// (magnitude, duration in seconds, intensity)
pub const IMPACT_SHAKE: (f64, f64, f64) = (10.0, 0.15, 1.0);
pub const MUZZLE_SHAKE: (f64, f64, f64) = (5.0, 0.1, 1.0);

pub const DEFAULT_DICE_PER_VESSEL: usize = 6;
pub const DEFAULT_DIE_MAX: i32 = 6;
pub const DEFAULT_MAX_VOLLEY: i32 = 6;
pub const DEFAULT_FRAME_MS: u64 = 16;

pub const PLAYER_START_X: f64 = 400.0;
pub const OPPONENT_START_X: f64 = 1400.0;

/// Which way a vessel faces, and who steers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helm {
    /// Controlled by the person at the pointer. Faces right.
    Player,
    /// Controlled by a [`Gunner`](crate::services::gunnery::Gunner). Faces left.
    Auto,
}

impl Helm {
    /// +1 for the left-hand, right-facing player side, -1 otherwise.
    pub fn direction(&self) -> f64 {
        match self {
            Helm::Player => 1.0,
            Helm::Auto => -1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Helm::Player => "PLAYER",
            Helm::Auto => "AUTO",
        }
    }
}
