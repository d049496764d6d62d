// Memento: game checkpoints

use colored::Colorize;
use design_patterns::memento::{Checkpoints, Game, Originator};
use design_patterns::{telemetry, Config, Result};
use std::path::PathBuf;
use std::process::ExitCode;

fn show(label: &str, game: &Game) {
    println!("{:<10} Level: {}, Score: {}", label, game.level(), game.score());
}

fn run(config: &Config) -> Result<()> {
    let mut game = Game::new();
    let mut checkpoints = Checkpoints::from_limit(config.history.limit);

    game.set("Level 1", 100);
    show("set", &game);
    checkpoints.add(game.save());

    game.set("Level 2", 200);
    show("set", &game);
    checkpoints.add(game.save());

    game.set("Level 3", 300);
    show("set", &game);

    println!();
    let last = checkpoints.len().saturating_sub(1);
    game.restore(checkpoints.get(last)?);
    show("restored", &game);

    game.restore(checkpoints.get(0)?);
    show("restored", &game);

    // Out of range is an error, not a panic.
    match checkpoints.get(checkpoints.len()) {
        Ok(snapshot) => game.restore(snapshot),
        Err(err) => println!("{} {}", "skipped:".yellow(), err),
    }
    Ok(())
}

fn main() -> ExitCode {
    telemetry::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Memento: Game Checkpoints".bold());
    println!("=========================\n");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
