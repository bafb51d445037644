use std::process::ExitCode;

use broadside::cli::args;
use broadside::config::BattleConfig;
use broadside::io::TerminalIO;
use broadside::services::game::Game;
use broadside::{telemetry, GameResult};

fn main() -> ExitCode {
    telemetry::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> GameResult<()> {
    let args = args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    let mut config = BattleConfig::from_env();
    args.apply(&mut config);

    println!("*** BROADSIDE ***");
    println!();

    let mut game = Game::new(&config, args.auto, Box::new(TerminalIO), Box::new(TerminalIO))?;
    game.run()?;
    Ok(())
}
