//! Volley decisions for vessels nobody is steering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::vessel::Vessel;

/// Decides how hard an automated vessel hits. 0 is a miss.
pub trait Gunner {
    fn volley(&mut self, attacker: &Vessel, defender: &Vessel) -> i32;
}

/// Rolls damage uniformly in `0..=max`.
pub struct RandomGunner {
    rng: StdRng,
    max: i32,
}

impl RandomGunner {
    pub fn new(seed: u64, max: i32) -> Self {
        RandomGunner {
            rng: StdRng::seed_from_u64(seed),
            max: max.max(0),
        }
    }
}

impl Gunner for RandomGunner {
    fn volley(&mut self, _attacker: &Vessel, _defender: &Vessel) -> i32 {
        self.rng.gen_range(0..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::Helm;
    use crate::models::vessel::VesselId;

    #[test]
    fn volleys_stay_in_range_and_repeat_per_seed() {
        let a = Vessel::new(VesselId(0), "A", 400.0, Helm::Player, 0);
        let b = Vessel::new(VesselId(1), "B", 1400.0, Helm::Auto, 0);

        let mut first = RandomGunner::new(9, 6);
        let mut second = RandomGunner::new(9, 6);
        for _ in 0..100 {
            let shot = first.volley(&a, &b);
            assert!((0..=6).contains(&shot));
            assert_eq!(shot, second.volley(&a, &b));
        }
    }
}
