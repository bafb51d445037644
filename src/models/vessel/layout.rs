use rand::Rng;

use super::Vessel;
use crate::models::constants::{
    CARGO_COLUMN_WIDTH, COLUMN_SPACING, DICE_PER_COLUMN, LAYOUT_JITTER, LAYOUT_ORIGIN_X,
    LAYOUT_ORIGIN_Y, ROW_SPACING,
};
use crate::models::position::Vec2;

/// Slot for the die at pool index `index`, in the vessel's frame.
/// Columns grow towards the stern (negative x), rows stack upwards.
/// `jitter` is added to x.
pub fn slot_position(index: usize, jitter: f64) -> Vec2 {
    let column = (index / DICE_PER_COLUMN) as f64;
    let row = (index % DICE_PER_COLUMN) as f64;
    Vec2::new(
        -COLUMN_SPACING * column + LAYOUT_ORIGIN_X + jitter,
        -ROW_SPACING * row + LAYOUT_ORIGIN_Y,
    )
}

impl Vessel {
    /// Slot for pool index `index` with fresh jitter. Jitter is not kept;
    /// every call draws a new one.
    pub fn dice_pos(&mut self, index: usize) -> Vec2 {
        let jitter = self.rng.gen::<f64>() * LAYOUT_JITTER;
        slot_position(index, jitter)
    }

    /// Send every die to the slot for its current index.
    pub fn reposition_dice(&mut self) {
        let targets: Vec<Vec2> = (0..self.dice.len()).map(|i| self.dice_pos(i)).collect();
        for (die, target) in self.dice.iter_mut().zip(targets) {
            die.move_to(target);
        }
    }

    /// Extra hull length needed to carry every column of dice.
    pub fn cargo_width(&self) -> f64 {
        let columns = self.dice.len().saturating_sub(1) / DICE_PER_COLUMN;
        columns as f64 * CARGO_COLUMN_WIDTH
    }
}
