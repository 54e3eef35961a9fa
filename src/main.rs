use std::time::{Duration, Instant};

use anyhow::Context;
use pacman_engine::config::GameConfig;
use pacman_engine::entity::EntityId;
use pacman_engine::game::events::TickOutcome;
use pacman_engine::game::Game;
use pacman_engine::highscore::JsonHighScores;
use pacman_engine::logging::setup_logging;
use pacman_engine::map::direction::Direction;
use pacman_engine::map::parser::RawMaze;
use rand::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Settings of the headless runner, read from the same `PACMAN_*` environment as the engine.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunnerSettings {
    /// Stop after this many ticks even if the game is not over.
    max_ticks: Option<u64>,
    highscore_path: String,
    /// Ticks between two random player inputs.
    input_every: u64,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            max_ticks: None,
            highscore_path: "highscore.json".into(),
            input_every: 6,
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = GameConfig::load().context("loading configuration")?;
    let settings: RunnerSettings = GameConfig::figment()
        .extract()
        .context("loading runner settings")?;

    let store = JsonHighScores::new(&settings.highscore_path);
    let raw = RawMaze::classic().context("parsing the classic board")?;
    let mut game = Game::new(raw, config.clone(), Box::new(store)).context("creating the game")?;

    let mut rng = match config.rng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
        None => SmallRng::from_os_rng(),
    };
    let loop_time = config.tick_interval();
    let input_every = settings.input_every.max(1);

    info!(
        interval_ms = config.tick_interval_ms,
        high_score = game.high_score(),
        "Starting game loop"
    );

    loop {
        let start = Instant::now();

        if game.ticks() % input_every == 0 {
            let direction = Direction::DIRECTIONS[rng.random_range(0..Direction::DIRECTIONS.len())];
            game.request_direction_change(EntityId::Pacman, direction);
        }

        let outcome = game.advance()?;
        for event in game.drain_events() {
            debug!(?event, "Game event");
        }

        match outcome {
            TickOutcome::GameOver => break,
            TickOutcome::Continue => {}
            other => info!(?other, score = game.score(), lives = game.lives(), "Step"),
        }

        if settings.max_ticks.is_some_and(|max| game.ticks() >= max) {
            info!(ticks = game.ticks(), "Tick limit reached");
            break;
        }

        let elapsed = start.elapsed();
        if elapsed < loop_time {
            let time = loop_time.saturating_sub(elapsed);
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - loop_time);
        }
    }

    let snapshot = game.snapshot();
    info!(
        score = snapshot.score,
        high_score = snapshot.high_score,
        level = snapshot.level,
        game_over = snapshot.game_over,
        "Session finished"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
