use super::position::Vec2;

/// Pointer state supplied by the frame driver once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
}

impl PointerState {
    pub fn at(x: f64, y: f64) -> Self {
        PointerState { x, y, pressed: false }
    }

    pub fn pressed_at(x: f64, y: f64) -> Self {
        PointerState { x, y, pressed: true }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Zoom and pan of the camera, used to map raw pointer coordinates
/// into a vessel's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub zoom: f64,
    /// Horizontal scroll, in world units.
    pub shift: f64,
    /// Vertical pan, in world units.
    pub pan: f64,
}

impl Default for CameraView {
    fn default() -> Self {
        CameraView {
            zoom: 1.0,
            shift: 0.0,
            pan: 0.0,
        }
    }
}

impl CameraView {
    /// Raw screen coordinates to world coordinates.
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x / self.zoom + self.shift, screen.y / self.zoom - self.pan)
    }

    /// World coordinates back to raw screen coordinates.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            (world.x - self.shift) * self.zoom,
            (world.y + self.pan) * self.zoom,
        )
    }

    /// Map a pointer into the frame of a vessel anchored at `origin`.
    /// Vessels facing left are drawn mirrored, so their x axis is flipped.
    pub fn to_local(&self, pointer: &PointerState, origin: Vec2, direction: f64) -> PointerState {
        let world = self.to_world(pointer.position());
        let local = world - origin;
        PointerState {
            x: local.x * direction,
            y: local.y,
            pressed: pointer.pressed,
        }
    }

    /// Inverse of [`CameraView::to_local`].
    pub fn local_to_screen(&self, local: Vec2, origin: Vec2, direction: f64) -> Vec2 {
        let world = Vec2::new(local.x * direction, local.y) + origin;
        self.to_screen(world)
    }
}
