use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BattleConfig;
use crate::game_engine::{Battle, Outcome};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{Helm, OPPONENT_START_X, PLAYER_START_X};
use crate::models::errors::GameResult;
use crate::models::pointer::PointerState;
use crate::models::vessel::VesselId;
use crate::services::effects::CueLog;
use crate::services::gunnery::{Gunner, RandomGunner};
use crate::services::turns::TurnOrder;
use crate::ui::presenters::BattlePresenter;

/// A terminal match between the player's vessel and an automated one.
pub struct Game {
    battle: Battle<TurnOrder>,
    gunner: RandomGunner,
    frame_ms: u64,
    cues: CueLog,
    io: Box<dyn InputReader>,
    output: Box<dyn OutputWriter>,
}

impl Game {
    /// Set up both vessels with freshly rolled dice. With `auto`, the
    /// player's vessel is steered by the computer too.
    pub fn new(
        config: &BattleConfig,
        auto: bool,
        io: Box<dyn InputReader>,
        output: Box<dyn OutputWriter>,
    ) -> GameResult<Self> {
        let cues = CueLog::new();
        let mut battle = Battle::new(
            config.seed,
            TurnOrder::new(VesselId(0)),
            Box::new(cues.clone()),
            Box::new(cues.clone()),
        );

        let helm = if auto { Helm::Auto } else { Helm::Player };
        let player = battle.add_vessel("Gull", PLAYER_START_X, helm)?;
        let enemy = battle.add_vessel("Cutlass", OPPONENT_START_X, Helm::Auto)?;
        battle.pair(player, enemy)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        for id in [player, enemy] {
            for _ in 0..config.dice_per_vessel {
                battle.add_dice(id, rng.gen_range(1..=config.die_max))?;
            }
            let vessel = battle.vessel_mut(id)?;
            vessel.set_ball(Box::new(cues.clone()));
            vessel.set_crew(Box::new(cues.clone()));
        }
        battle.settle(config.frame_ms);

        Ok(Game {
            battle,
            gunner: RandomGunner::new(rng.gen(), config.max_volley),
            frame_ms: config.frame_ms,
            cues,
            io,
            output,
        })
    }

    pub fn battle(&self) -> &Battle<TurnOrder> {
        &self.battle
    }

    /// Play until one side is sunk or the player quits.
    /// Returns the outcome, or `None` if the player quit.
    pub fn run(&mut self) -> GameResult<Option<Outcome>> {
        self.battle.start()?;

        loop {
            BattlePresenter::show_board(self.battle.vessels(), self.output.as_mut());

            if let Some(outcome) = self.battle.check_game_over() {
                self.battle.settle(self.frame_ms);
                BattlePresenter::show_outcome(outcome, self.battle.vessels(), self.output.as_mut());
                return Ok(Some(outcome));
            }

            let attacker = self.battle.coordinator().active();
            if self.battle.vessel(attacker)?.is_auto() {
                self.exchange(attacker)?;
                continue;
            }

            let input = self.io.read_line("COMMAND")?;
            match input.trim() {
                "f" | "F" | "fire" | "FIRE" => self.exchange(attacker)?,
                "q" | "Q" => {
                    self.output.writeln("YOU STRIKE YOUR COLOURS.");
                    return Ok(None);
                }
                _ => BattlePresenter::show_command_menu(self.output.as_mut()),
            }
        }
    }

    /// One shot from `attacker`, resolved until the turn has passed.
    fn exchange(&mut self, attacker: VesselId) -> GameResult<()> {
        let defender = self
            .battle
            .vessel(attacker)?
            .opponent()
            .unwrap_or_else(|| attacker.other());
        let damage = self
            .gunner
            .volley(self.battle.vessel(attacker)?, self.battle.vessel(defender)?);
        BattlePresenter::show_volley(self.battle.vessel(attacker)?, damage, self.output.as_mut());

        if self.battle.vessel(defender)?.is_auto() {
            self.battle.shoot(attacker, damage)?;
        } else {
            self.battle.add_damage(defender, damage)?;
            while self.battle.vessel(defender)?.awaiting_input() {
                self.pick(defender)?;
            }
        }

        self.battle.settle(self.frame_ms);
        BattlePresenter::show_cues(&self.cues.drain(), self.output.as_mut());
        Ok(())
    }

    /// Ask which die takes the hit, then press the pointer on it.
    fn pick(&mut self, defender: VesselId) -> GameResult<()> {
        BattlePresenter::show_board(self.battle.vessels(), self.output.as_mut());
        BattlePresenter::show_incoming(self.battle.vessel(defender)?, self.output.as_mut());

        let input = self.io.read_line("DIE")?;
        let count = self.battle.vessel(defender)?.dice_count();
        let choice = match input.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => n,
            _ => {
                self.output
                    .writeln(&format!("PICK A DIE FROM 1 TO {}", count));
                return Ok(());
            }
        };

        let die = self.battle.vessel(defender)?.dice()[choice - 1].id();
        let screen = self.battle.die_screen_position(defender, die)?;
        let tick = self.battle.now() + self.frame_ms;
        self.battle
            .update(tick, PointerState::pressed_at(screen.x, screen.y));
        Ok(())
    }
}
