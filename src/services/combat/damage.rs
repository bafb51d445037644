use crate::models::constants::{
    DECK_Y, IMPACT_BACKSET, IMPACT_DELAY_MS, IMPACT_PULSE_SIZE, IMPACT_SHAKE, PULSE_OFFSET_X,
};
use crate::models::die::{Die, DieId};
use crate::models::position::Vec2;
use crate::models::vessel::Vessel;
use crate::services::stage::{Deferred, Stage};

/// Choose which die absorbs a hit of `amount`.
///
/// The first die that survives the hit is preferred. When every die would
/// be destroyed, the weakest one goes, with the earliest in pool order
/// winning ties.
pub fn select_target(dice: &[Die], amount: i32) -> Option<usize> {
    dice.iter().position(|d| d.value() > amount).or_else(|| {
        dice.iter()
            .enumerate()
            .min_by_key(|(i, d)| (d.value(), *i))
            .map(|(i, _)| i)
    })
}

impl Vessel {
    /// Where shots landing on this vessel burst.
    pub fn impact_point(&self) -> Vec2 {
        let dir = self.helm().direction();
        Vec2::new(
            self.position().x - IMPACT_BACKSET * dir + PULSE_OFFSET_X,
            DECK_Y,
        )
    }

    /// Pick a die automatically and start the hit sequence on it.
    /// An empty pool has nothing to hit, and nothing happens.
    pub fn hurt<T>(&mut self, amount: i32, stage: &mut Stage<T>) {
        let Some(index) = select_target(&self.dice, amount) else {
            tracing::debug!(vessel = self.name(), amount, "no dice left to hurt");
            return;
        };
        let target = self.dice[index].id();
        tracing::debug!(
            vessel = self.name(),
            amount,
            index,
            value = self.dice[index].value(),
            "auto target selected"
        );
        self.hurt_dice(target, amount, stage);
    }

    /// Mark `target` now and apply the damage once the impact lands.
    pub fn hurt_dice<T>(&mut self, target: DieId, amount: i32, stage: &mut Stage<T>) {
        let Some(die) = self.die_mut(target) else {
            tracing::debug!(?target, "hurt_dice on a die that is gone");
            return;
        };
        die.mark();
        stage.defer(
            IMPACT_DELAY_MS,
            Deferred::Impact {
                vessel: self.id(),
                die: target,
                amount,
            },
        );
    }

    /// Second half of [`Vessel::hurt_dice`], run by the scheduler.
    pub(crate) fn apply_impact<T>(&mut self, target: DieId, amount: i32, stage: &mut Stage<T>) {
        let (magnitude, duration, intensity) = IMPACT_SHAKE;
        stage.camera.shake(magnitude, duration, intensity);
        let burst = self.impact_point();
        stage.impacts.spawn(burst.x, burst.y, IMPACT_PULSE_SIZE);

        let outcome = self.die_mut(target).map(|die| (die.hurt(amount), die.value()));
        match outcome {
            Some((true, _)) => {
                self.remove_die(target);
                tracing::info!(
                    vessel = self.name(),
                    ?target,
                    remaining = self.dice_count(),
                    "die destroyed"
                );
                self.reposition_dice();
            }
            Some((false, value)) => {
                tracing::debug!(vessel = self.name(), ?target, value, "die hit");
            }
            None => tracing::debug!(vessel = self.name(), ?target, "impact on a die already gone"),
        }

        self.stagger = 1.0;
    }
}
