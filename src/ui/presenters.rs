use crate::game_engine::Outcome;
use crate::io::OutputWriter;
use crate::models::die::DieState;
use crate::models::vessel::Vessel;
use crate::services::effects::Cue;

pub struct BattlePresenter;

impl BattlePresenter {
    /// One line per vessel: name, helm, then every die in pool order.
    /// `*` marks a die about to take a hit, `?` a die that can be picked.
    pub fn show_vessel(vessel: &Vessel, output: &mut dyn OutputWriter) {
        output.write(&format!(
            "{:<12}{:<8}",
            vessel.name().to_uppercase(),
            vessel.helm().label()
        ));
        if vessel.is_dead() {
            output.writeln("SUNK");
            return;
        }
        for (i, die) in vessel.dice().iter().enumerate() {
            let flag = match die.state() {
                DieState::Marked => "*",
                _ if die.is_pickable() => "?",
                _ => " ",
            };
            output.write(&format!("{}:[{}]{} ", i + 1, die.value(), flag));
        }
        output.writeln("");
    }

    pub fn show_board(vessels: &[Vessel], output: &mut dyn OutputWriter) {
        output.writeln("");
        for vessel in vessels {
            vessel.render(output);
        }
    }

    /// Narrate the cues that matter to someone reading a terminal.
    pub fn show_cues(cues: &[Cue], output: &mut dyn OutputWriter) {
        for cue in cues {
            match cue {
                Cue::Launch { .. } => output.writeln("  BOOM! THE CANNON FIRES"),
                Cue::Impact { size, .. } if *size > 100.0 => output.writeln("  *** DIRECT HIT ***"),
                _ => {}
            }
        }
    }

    pub fn show_incoming(vessel: &Vessel, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "INCOMING! {} DAMAGE. CHOOSE A DIE TO TAKE THE HIT (1-{})",
            vessel.incoming_damage(),
            vessel.dice_count()
        ));
    }

    pub fn show_volley(attacker: &Vessel, damage: i32, output: &mut dyn OutputWriter) {
        if damage <= 0 {
            output.writeln(&format!("{} FIRES... AND MISSES", attacker.name().to_uppercase()));
        } else {
            output.writeln(&format!(
                "{} FIRES FOR {} DAMAGE",
                attacker.name().to_uppercase(),
                damage
            ));
        }
    }

    pub fn show_outcome(outcome: Outcome, vessels: &[Vessel], output: &mut dyn OutputWriter) {
        output.writeln("");
        match outcome {
            Outcome::Victory { winner } => {
                let name = vessels
                    .get(winner.0)
                    .map(|v| v.name().to_uppercase())
                    .unwrap_or_default();
                output.writeln(&format!("*** {} RULES THE WAVES ***", name));
            }
            Outcome::Draw => output.writeln("*** BOTH VESSELS GO DOWN TOGETHER ***"),
        }
    }

    pub fn show_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   F = FIRE THE CANNON");
        output.writeln("   Q = STRIKE YOUR COLOURS (QUIT)");
    }
}
