use crate::models::constants::{
    DECK_Y, MUZZLE_PULSE_SIZE, MUZZLE_REACH, MUZZLE_SHAKE, POSE_RESET_MS, PROJECTILE_SPEED,
    PULSE_OFFSET_X,
};
use crate::models::position::Vec2;
use crate::models::vessel::Vessel;
use crate::services::stage::{Deferred, Stage};

impl Vessel {
    /// Mouth of the cannon, in world space.
    pub fn muzzle(&self) -> Vec2 {
        let dir = self.helm().direction();
        Vec2::new(self.position().x + MUZZLE_REACH * dir, DECK_Y)
    }

    /// Fire the cannon: crew hop, recoil, ball away, muzzle flash.
    /// Purely visual; no damage is dealt here.
    pub fn shoot_anim<T>(&mut self, stage: &mut Stage<T>) {
        self.crew.hop_in_place();
        stage.defer(POSE_RESET_MS, Deferred::ResetPose { vessel: self.id() });
        self.recoil = 1.0;
        self.stagger = 1.0;

        let dir = self.helm().direction();
        let muzzle = self.muzzle();
        match self.ball.as_mut() {
            Some(ball) => ball.launch(muzzle, PROJECTILE_SPEED * dir),
            None => tracing::debug!(vessel = self.name(), "no ball wired; skipping launch"),
        }

        let (magnitude, duration, intensity) = MUZZLE_SHAKE;
        stage.camera.shake(magnitude, duration, intensity);
        stage
            .impacts
            .spawn(muzzle.x + PULSE_OFFSET_X, muzzle.y, MUZZLE_PULSE_SIZE);
    }
}
