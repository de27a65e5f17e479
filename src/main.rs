//! Snake Arena entry point
//!
//! Headless driver: plays one session through the mediator on a simulated
//! clock and prints the final scoreboard. Rendering and real keyboard input
//! belong to a host front end.

use snake_arena::{Action, ConfigError, Mediator, ModeKind, Settings};

/// Simulated frame length (~60 FPS)
const FRAME_MS: i64 = 16;

fn main() {
    env_logger::init();
    log::info!("Snake Arena (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(std::path::Path::new(&path)),
        None => Ok(Settings::default()),
    };

    if let Err(err) = settings.and_then(run) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(settings: Settings) -> Result<(), ConfigError> {
    let mut mediator = Mediator::new(settings)?;
    let mut ts = 0;

    mediator.enter(ts);
    // "new_game" is highlighted on start
    mediator.enter_pressed(ts);

    while mediator.current() == ModeKind::Game {
        ts += FRAME_MS;
        mediator.update(ts);
    }

    if let Some(snapshot) = mediator.menu().last_game() {
        println!("Game over after {ts} ms");
        for (i, snake) in snapshot.snakes.iter().enumerate() {
            println!("  snake {i}: {} points, length {}", snake.score, snake.body.len());
        }
        if let Some((leader, score)) = snapshot.leader() {
            println!("Leader: snake {leader} with {score} points");
        }
    }
    if let Some(top) = mediator.menu().high_scores().top_score() {
        println!("Best this session: {top}");
    }

    mediator.down_pressed(ts);
    match mediator.enter_pressed(ts) {
        Action::ExitApplication => log::info!("Exiting"),
        other => log::warn!("Expected exit, menu returned {:?}", other),
    }

    Ok(())
}
