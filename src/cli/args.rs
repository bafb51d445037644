use crate::config::BattleConfig;
use crate::models::errors::{BattleError, GameResult};

pub const USAGE: &str = "\
Usage: broadside [OPTIONS]

Options:
  -s, --seed <INT>  Seed for the random number generator
  -d, --dice <INT>  Dice per vessel
  -a, --auto        Let the computer steer both vessels
  -h, --help        Print help";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub seed: Option<u64>,
    pub dice: Option<usize>,
    pub auto: bool,
    pub help: bool,
}

impl Args {
    /// Apply flags on top of environment configuration.
    pub fn apply(&self, config: &mut BattleConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(dice) = self.dice {
            config.dice_per_vessel = dice.max(1);
        }
    }
}

/// Parse arguments, not including the program name.
pub fn parse<I>(args: I) -> GameResult<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                let val = iter
                    .next()
                    .ok_or_else(|| BattleError::InvalidArgument("--seed requires a value".into()))?;
                parsed.seed = Some(val.parse::<u64>()?);
            }
            "--dice" | "-d" => {
                let val = iter
                    .next()
                    .ok_or_else(|| BattleError::InvalidArgument("--dice requires a value".into()))?;
                parsed.dice = Some(val.parse::<usize>()?);
            }
            "--auto" | "-a" => parsed.auto = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(BattleError::InvalidArgument(format!(
                    "unknown argument: {}",
                    other
                )))
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> GameResult<Args> {
        parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_all_flags() {
        let parsed = args(&["-s", "7", "--dice", "4", "--auto"]).unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.dice, Some(4));
        assert!(parsed.auto);
        assert!(!parsed.help);
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(matches!(
            args(&["--seed"]),
            Err(BattleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        assert!(matches!(
            args(&["--dice", "many"]),
            Err(BattleError::ParseError(_))
        ));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(args(&["--broadside"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let mut config = BattleConfig::default();
        args(&["--seed", "9", "--dice", "0"]).unwrap().apply(&mut config);
        assert_eq!(config.seed, 9);
        assert_eq!(config.dice_per_vessel, 1);
    }
}
