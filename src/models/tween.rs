//! Time-based interpolation between two points.

use super::position::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadIn,
    QuadInOut,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` onto the eased curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// An in-flight move from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    elapsed_ms: u64,
    duration_ms: u64,
    ease: Ease,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration_ms: u64, ease: Ease) -> Self {
        Tween {
            from,
            to,
            elapsed_ms: 0,
            duration_ms,
            ease,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Step forward and return the interpolated position.
    pub fn advance(&mut self, dt_ms: u64) -> Vec2 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.duration_ms);
        if self.is_done() {
            return self.to;
        }
        let t = self.elapsed_ms as f64 / self.duration_ms as f64;
        self.from.lerp(self.to, self.ease.apply(t))
    }
}
