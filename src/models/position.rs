use std::ops::{Add, Sub};

/// A point in screen space, or in a vessel's local frame.
/// X increases to the right, Y increases downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Shift by the given amounts.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Vec2 {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn lerp(self, to: Vec2, t: f64) -> Self {
        Vec2 {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
