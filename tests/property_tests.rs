use proptest::prelude::*;
use broadside::models::constants::{Helm, LAYOUT_JITTER, OPPONENT_START_X, PLAYER_START_X};
use broadside::models::die::{Die, DieId};
use broadside::models::pointer::PointerState;
use broadside::models::vessel::{slot_position, VesselId};
use broadside::services::combat::select_target;
use broadside::services::effects::CueLog;
use broadside::services::turns::TurnOrder;
use broadside::Battle;

fn battle_with(values: &[i32], seed: u64) -> (Battle, VesselId, VesselId) {
    let log = CueLog::new();
    let mut battle = Battle::new(
        seed,
        TurnOrder::new(VesselId(0)),
        Box::new(log.clone()),
        Box::new(log),
    );
    let a = battle.add_vessel("Gull", PLAYER_START_X, Helm::Player).unwrap();
    let b = battle.add_vessel("Cutlass", OPPONENT_START_X, Helm::Auto).unwrap();
    battle.pair(a, b).unwrap();
    for v in values {
        battle.add_dice(a, *v).unwrap();
    }
    battle.add_dice(b, 6).unwrap();
    battle.settle(16);
    (battle, a, b)
}

proptest! {
    /// Property: the chosen die survives if any die can; otherwise it is
    /// the earliest of the weakest
    #[test]
    fn target_selection_rule(
        values in prop::collection::vec(1..=12i32, 0..10),
        amount in 0..15i32,
    ) {
        let dice: Vec<Die> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Die::new(DieId(i as u32), *v))
            .collect();

        let chosen = select_target(&dice, amount);

        if values.is_empty() {
            prop_assert_eq!(chosen, None);
            return Ok(());
        }
        let index = chosen.unwrap();
        match values.iter().position(|v| *v > amount) {
            Some(first) => prop_assert_eq!(index, first),
            None => {
                let min = *values.iter().min().unwrap();
                prop_assert_eq!(values[index], min);
                prop_assert!(values[..index].iter().all(|v| *v > min));
            }
        }
    }

    /// Property: hurting an empty pool schedules nothing
    #[test]
    fn empty_pool_hurt_is_inert(amount in -5..20i32, seed in any::<u64>()) {
        let (mut battle, a, _) = battle_with(&[], seed);

        battle.hurt(a, amount).unwrap();

        prop_assert_eq!(battle.pending_actions(), 0);
        prop_assert!(battle.vessel(a).unwrap().is_dead());
    }

    /// Property: one hit changes exactly one die, and the pool stays laid
    /// out in contiguous slots
    #[test]
    fn single_hit_touches_one_die(
        values in prop::collection::vec(1..=6i32, 1..8),
        amount in 1..10i32,
        seed in any::<u64>(),
    ) {
        let (mut battle, a, _) = battle_with(&values, seed);

        battle.hurt(a, amount).unwrap();
        battle.settle(16);

        let after = battle.vessel(a).unwrap().dice_values();
        let total_before: i32 = values.iter().sum();
        let total_after: i32 = after.iter().sum();
        let destroyed = after.len() < values.len();

        prop_assert!(values.len() - after.len() <= 1);
        if destroyed {
            prop_assert!(values.iter().all(|v| *v <= amount));
        } else {
            prop_assert_eq!(total_before - total_after, amount);
        }

        for (i, die) in battle.vessel(a).unwrap().dice().iter().enumerate() {
            let base = slot_position(i, 0.0);
            prop_assert!(die.position().x >= base.x - 1e-9);
            prop_assert!(die.position().x < base.x + LAYOUT_JITTER);
            prop_assert!((die.position().y - base.y).abs() < 1e-9);
        }
    }

    /// Property: a vessel is dead exactly when a separately tracked pool
    /// has run out, never earlier
    #[test]
    fn dead_only_when_model_pool_empties(
        values in prop::collection::vec(1..=6i32, 0..6),
        hits in prop::collection::vec(1..8i32, 0..10),
    ) {
        let (mut battle, a, _) = battle_with(&values, 5);
        let mut model = values.clone();

        for hit in hits {
            match model.iter().position(|v| *v > hit) {
                Some(i) => model[i] -= hit,
                None => {
                    if let Some(min) = model.iter().min().copied() {
                        let i = model.iter().position(|v| *v == min).unwrap();
                        model.remove(i);
                    }
                }
            }

            battle.hurt(a, hit).unwrap();
            battle.settle(16);
            let vessel = battle.vessel(a).unwrap();
            prop_assert_eq!(vessel.dice_values(), model.clone());
            prop_assert_eq!(vessel.is_dead(), model.is_empty());
        }
    }

    /// Property: recoil and stagger never go negative and never grow
    /// between shots
    #[test]
    fn visual_decay_is_monotone(frames in prop::collection::vec(1..100u64, 1..60)) {
        let (mut battle, a, b) = battle_with(&[4, 4], 9);
        battle.shoot(b, 2).unwrap();

        let mut recoil = battle.vessel(b).unwrap().recoil();
        let mut stagger = battle.vessel(a).unwrap().stagger();
        let mut landed = false;

        for dt in frames {
            battle.advance(dt);
            let next_recoil = battle.vessel(b).unwrap().recoil();
            let next_stagger = battle.vessel(a).unwrap().stagger();

            prop_assert!(next_recoil >= 0.0);
            prop_assert!(next_stagger >= 0.0);
            prop_assert!(next_recoil <= recoil);
            // The impact resets stagger to full once.
            if landed {
                prop_assert!(next_stagger <= stagger);
            }
            landed = landed || battle.pending_actions() == 0;

            recoil = next_recoil;
            stagger = next_stagger;
        }
    }

    /// Property: a pick cycle resolves one die and hands off once, however
    /// many presses follow
    #[test]
    fn pick_resolves_once(
        values in prop::collection::vec(1..=6i32, 1..7),
        dmg in 1..8i32,
        presses in 1..5usize,
    ) {
        let (mut battle, a, _) = battle_with(&values, 13);
        battle.add_damage(a, dmg).unwrap();

        let die = battle.vessel(a).unwrap().dice()[0].id();
        let screen = battle.die_screen_position(a, die).unwrap();
        for _ in 0..presses {
            let tick = battle.now() + 16;
            battle.update(tick, PointerState::pressed_at(screen.x, screen.y));
        }
        battle.settle(16);

        let after = battle.vessel(a).unwrap().dice_values();
        let mut expected = values.clone();
        if expected[0] <= dmg {
            expected.remove(0);
        } else {
            expected[0] -= dmg;
        }
        prop_assert_eq!(after, expected);
        prop_assert_eq!(battle.coordinator().turns(), 1);
        prop_assert!(!battle.vessel(a).unwrap().awaiting_input());
    }

    /// Property: a miss hands the turn over without touching the pool
    #[test]
    fn miss_passes_turn(
        values in prop::collection::vec(1..=6i32, 0..7),
        dmg in -5..=0i32,
    ) {
        let (mut battle, a, b) = battle_with(&values, 21);

        battle.add_damage(a, dmg).unwrap();

        prop_assert_eq!(battle.vessel(a).unwrap().dice_values(), values);
        prop_assert_eq!(battle.coordinator().turns(), 1);
        prop_assert_eq!(battle.coordinator().active(), b);
    }
}
