//! This module contains the main game logic and state.

use std::collections::VecDeque;

use smallvec::SmallVec;
use strum::IntoEnumIterator;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::entity::ghost::Wanderer;
use crate::entity::{EntityId, EntityRole, GhostType, SpawnRegion, Sprite};
use crate::error::{EntityError, GameError, GameResult};
use crate::highscore::HighScoreStore;
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::map::parser::RawMaze;
use crate::map::tile::Tile;

use self::events::{GameEvent, TickOutcome};
use self::feeding::FeedingWindow;
use self::snapshot::{GameSnapshot, SpriteSnapshot};

pub mod events;
pub mod feeding;
pub mod snapshot;

/// The `Game` struct is the main entry point of the engine.
///
/// It owns the maze, Pac-Man and the four ghosts, and advances all of them one cell per
/// [`Game::tick`]. A host calls `tick` (or [`Game::advance`], which also applies the
/// respawn and level policy) at a fixed period and reads the result back through the
/// getters or a [`GameSnapshot`].
pub struct Game {
    config: GameConfig,
    raw: RawMaze,
    maze: Maze,
    pacman: Sprite,
    ghosts: Vec<Sprite>,
    score: u32,
    high_score: u32,
    removed_dot: Option<Tile>,
    feeding: FeedingWindow,
    level: u32,
    ticks: u64,
    requests: VecDeque<(EntityId, Direction)>,
    wanderer: Wanderer,
    events: Vec<GameEvent>,
    store: Box<dyn HighScoreStore>,
}

impl Game {
    /// Builds a session on `raw`, loading the stored high score from `store`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, the maze cannot be built, or the store cannot
    /// be read.
    pub fn new(raw: RawMaze, config: GameConfig, store: Box<dyn HighScoreStore>) -> GameResult<Game> {
        config.validate()?;
        let maze = Maze::new(&raw)?;
        let high_score = store.load()?;

        let spawn = SpawnRegion::scan(&raw, maze.ghost_respawn());
        let pacman = Sprite::pacman(maze.pacman_respawn(), Direction::West, config.pacman_lives);
        let ghosts = GhostType::iter()
            .map(|ghost_type| Sprite::ghost(ghost_type, maze.ghost_respawn(), spawn))
            .collect();
        let wanderer = Wanderer::new(config.ghost_direction_change_interval_ms, config.rng_seed);

        info!(
            rows = maze.rows(),
            columns = maze.columns(),
            dots = maze.remaining_dots(),
            high_score,
            "Game created"
        );

        Ok(Game {
            config,
            raw,
            maze,
            pacman,
            ghosts,
            score: 0,
            high_score,
            removed_dot: None,
            feeding: FeedingWindow::default(),
            level: 1,
            ticks: 0,
            requests: VecDeque::new(),
            wanderer,
            events: Vec::new(),
            store,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Pending direction requests are applied first, then every sprite moves (Pac-Man first,
    /// then the ghosts in a fixed order), then pickups and predation are resolved. Ghost
    /// wandering requests produced during this tick only take effect on the next one.
    /// Once the game is over this does nothing.
    pub fn tick(&mut self) -> GameResult<()> {
        if self.is_game_over() {
            return Ok(());
        }

        self.ticks += 1;
        self.removed_dot = None;
        self.apply_requests();
        self.move_sprites()?;
        self.resolve_pickup()?;
        self.resolve_predation();
        self.schedule_wandering();

        trace!(tick = self.ticks, score = self.score, "Tick done");
        Ok(())
    }

    /// Runs one scheduler step: a tick, then the respawn, game over and level policy.
    ///
    /// An eaten Pac-Man sends every sprite home; otherwise eaten ghosts are sent home
    /// individually. At game over the high score is saved once. A cleared maze starts the
    /// next level.
    pub fn advance(&mut self) -> GameResult<TickOutcome> {
        if self.is_game_over() {
            return Ok(TickOutcome::GameOver);
        }

        self.tick()?;

        let mut outcome = TickOutcome::Continue;
        if self.pacman_has_been_eaten() {
            self.respawn();
            outcome = TickOutcome::PacmanRespawned;
        } else if self.ghost_has_been_eaten() {
            self.respawn_ghosts();
            outcome = TickOutcome::GhostsRespawned;
        }

        if self.is_game_over() {
            self.save_score()?;
            info!(score = self.score, level = self.level, "Game over");
            return Ok(TickOutcome::GameOver);
        }

        if self.level_succeeded() {
            self.next_level()?;
            return Ok(TickOutcome::LevelCompleted);
        }

        Ok(outcome)
    }

    /// Queues a direction change for `id`, applied at the start of the next tick.
    ///
    /// Legality is only checked when the sprite tries to move; an illegal request is kept
    /// pending until it becomes possible or the sprite respawns.
    pub fn request_direction_change(&mut self, id: EntityId, direction: Direction) {
        self.requests.push_back((id, direction));
    }

    /// Direction requests waiting for the next tick, oldest first.
    pub fn pending_requests(&self) -> impl Iterator<Item = &(EntityId, Direction)> {
        self.requests.iter()
    }

    pub fn pacman_has_been_eaten(&self) -> bool {
        self.pacman.is_dead()
    }

    pub fn ghost_has_been_eaten(&self) -> bool {
        self.ghosts.iter().any(Sprite::is_dead)
    }

    pub fn is_game_over(&self) -> bool {
        self.pacman.lives() == Some(0)
    }

    pub fn level_succeeded(&self) -> bool {
        self.maze.is_empty()
    }

    /// Sends every sprite back to its spawn. Pickups are left untouched.
    pub fn respawn(&mut self) {
        self.pacman.respawn();
        self.ghosts.iter_mut().for_each(Sprite::respawn);
        self.feeding = FeedingWindow::default();
        self.requests.clear();
        self.wanderer.reset();
        debug!(lives = self.lives(), "All sprites respawned");
    }

    /// Sends the eaten ghosts back home.
    pub fn respawn_ghosts(&mut self) {
        for ghost in self.ghosts.iter_mut().filter(|ghost| ghost.is_dead()) {
            ghost.respawn();
            debug!(ghost = %ghost.id(), "Ghost respawned");
        }
    }

    /// Rebuilds the maze from its starting topology and respawns everyone.
    ///
    /// Score and lives carry over.
    ///
    /// # Errors
    ///
    /// Returns `GameError::LevelNotFinished` while dots remain.
    pub fn next_level(&mut self) -> GameResult<()> {
        if !self.level_succeeded() {
            return Err(GameError::LevelNotFinished {
                remaining: self.maze.remaining_dots(),
            });
        }

        self.events.push(GameEvent::LevelCompleted { level: self.level });
        self.maze = Maze::new(&self.raw)?;
        self.removed_dot = None;
        self.respawn();
        self.level += 1;
        info!(level = self.level, score = self.score, "Next level");
        Ok(())
    }

    /// Writes the score to the store if it beats the high score. Returns whether it did.
    pub fn save_score(&mut self) -> GameResult<bool> {
        if self.score <= self.high_score {
            return Ok(false);
        }

        self.store.save(self.score)?;
        info!(previous = self.high_score, score = self.score, "New high score saved");
        self.high_score = self.score;
        Ok(true)
    }

    /// Takes the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level,
            score: self.score,
            high_score: self.high_score,
            lives: self.lives(),
            remaining_dots: self.maze.remaining_dots(),
            removed_dot: self.removed_dot,
            feeding: self.feeding.is_active(),
            game_over: self.is_game_over(),
            level_succeeded: self.level_succeeded(),
            pacman: SpriteSnapshot::from(&self.pacman),
            ghosts: self.ghosts.iter().map(SpriteSnapshot::from).collect(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn pacman(&self) -> &Sprite {
        &self.pacman
    }

    /// The ghosts, in movement order: Blinky, Pinky, Inky, Clyde.
    pub fn ghosts(&self) -> &[Sprite] {
        &self.ghosts
    }

    pub fn ghost(&self, ghost_type: GhostType) -> Option<&Sprite> {
        self.ghosts.iter().find(|ghost| ghost.ghost_type() == Some(ghost_type))
    }

    pub fn lives(&self) -> u8 {
        self.pacman.lives().unwrap_or(0)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The pickup consumed during the last tick, if any.
    pub fn removed_dot(&self) -> Option<&Tile> {
        self.removed_dot.as_ref()
    }

    pub fn is_feeding(&self) -> bool {
        self.feeding.is_active()
    }

    pub fn feeding(&self) -> &FeedingWindow {
        &self.feeding
    }

    pub fn ghost_multiplier(&self) -> u32 {
        self.feeding.multiplier()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Ticks run since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn sprite_mut(&mut self, id: EntityId) -> Option<&mut Sprite> {
        match id {
            EntityId::Pacman => Some(&mut self.pacman),
            EntityId::Ghost(ghost_type) => self.ghosts.iter_mut().find(|ghost| ghost.ghost_type() == Some(ghost_type)),
        }
    }

    fn apply_requests(&mut self) {
        while let Some((id, direction)) = self.requests.pop_front() {
            if let Some(sprite) = self.sprite_mut(id) {
                sprite.ask_to_change_direction(direction);
                trace!(sprite = %id, direction = direction.as_ref(), "Direction requested");
            }
        }
    }

    fn move_sprites(&mut self) -> Result<(), EntityError> {
        step_sprite(&mut self.pacman, &self.maze, &mut self.wanderer)?;
        for ghost in self.ghosts.iter_mut() {
            step_sprite(ghost, &self.maze, &mut self.wanderer)?;
        }
        Ok(())
    }

    fn resolve_pickup(&mut self) -> GameResult<()> {
        let position = self.pacman.position();
        if self.pacman.is_dead() || !self.maze.can_pick(position) {
            return Ok(());
        }

        let tile = self.maze.pick(position)?;
        let energizer = tile.is_energizer();
        let points = if energizer {
            self.config.energizer_score
        } else {
            self.config.dot_score
        };
        self.score = self.score.saturating_add(points);
        self.removed_dot = Some(tile);
        self.events.push(GameEvent::DotEaten {
            tile: position,
            energizer,
            points,
        });
        trace!(%position, points, remaining = self.maze.remaining_dots(), "Dot eaten");

        if energizer {
            self.feeding.start();
            self.ghosts.iter_mut().for_each(Sprite::become_eatable);
            self.events.push(GameEvent::FeedingStarted);
            debug!(ticks = self.config.feeding_ticks(), "Feeding window opened");
        }
        Ok(())
    }

    fn resolve_predation(&mut self) {
        if self.pacman.is_dead() {
            return;
        }

        let rule = self.config.collision_rule();
        let caught = self
            .ghosts
            .iter()
            .any(|ghost| !ghost.is_dead() && !ghost.is_eatable() && ghost.can_eat(&self.pacman, rule));

        if !self.feeding.is_active() {
            if caught {
                self.eat_pacman();
            }
            return;
        }

        if !self.feeding.is_running(self.ghosts.len(), self.config.feeding_ticks()) {
            self.end_feeding();
            return;
        }

        if caught {
            self.eat_pacman();
        }

        let pacman = &self.pacman;
        for ghost in self.ghosts.iter_mut() {
            if ghost.is_dead() || !pacman.can_eat(ghost, rule) {
                continue;
            }
            ghost.has_been_eaten();
            let points = self.feeding.award_ghost(self.config.ghost_score);
            self.score = self.score.saturating_add(points);
            if let Some(ghost_type) = ghost.ghost_type() {
                self.events.push(GameEvent::GhostEaten { ghost: ghost_type, points });
                debug!(ghost = %ghost.id(), points, "Ghost eaten");
            }
        }
        self.feeding.tick();

        if caught {
            self.end_feeding();
        }
    }

    fn eat_pacman(&mut self) {
        self.pacman.has_been_eaten();
        let lives_left = self.lives();
        self.events.push(GameEvent::PacmanEaten { lives_left });
        debug!(lives_left, "Pac-Man eaten");
    }

    fn end_feeding(&mut self) {
        self.feeding.end();
        self.ghosts.iter_mut().for_each(Sprite::become_uneatable);
        self.events.push(GameEvent::FeedingEnded);
        debug!(ghosts_eaten = self.feeding.ghosts_eaten(), "Feeding window closed");
    }

    fn schedule_wandering(&mut self) {
        let due = self.wanderer.advance(self.config.tick_interval_ms);
        for _ in 0..due {
            for ghost in self.ghosts.iter().filter(|ghost| !ghost.is_dead() && !ghost.in_spawn()) {
                let direction = self.wanderer.random_direction();
                self.requests.push_back((ghost.id(), direction));
            }
        }
    }
}

/// Moves one sprite by a cell if the maze allows it.
///
/// The pending request wins when its cell is walkable, then the current direction is tried.
/// A sprite that can do neither stops, and a stopped ghost immediately asks for one of the
/// directions still open around it.
fn step_sprite(sprite: &mut Sprite, maze: &Maze, wanderer: &mut Wanderer) -> Result<(), EntityError> {
    if sprite.is_dead() {
        return Ok(());
    }

    let size = maze.size();
    let current = sprite.position();

    if let Some(asked) = sprite.asked_direction() {
        if maze.can_walk_on(current, sprite.position_towards(asked, size)) {
            sprite.change_direction()?;
            sprite.move_forward(size);
            return Ok(());
        }
    }

    if maze.can_walk_on(current, sprite.position_towards(sprite.direction(), size)) {
        sprite.move_forward(size);
        return Ok(());
    }

    sprite.notify_is_blocked();

    if matches!(sprite.role(), EntityRole::Pursuer { .. }) {
        let blocked: SmallVec<[Direction; 4]> = Direction::DIRECTIONS
            .into_iter()
            .filter(|&direction| !maze.can_walk_on(current, sprite.position_towards(direction, size)))
            .collect();
        if let Some(direction) = wanderer.escape_direction(&blocked) {
            sprite.ask_to_change_direction(direction);
            trace!(sprite = %sprite.id(), direction = direction.as_ref(), "Blocked, turning");
        }
    }
    Ok(())
}
