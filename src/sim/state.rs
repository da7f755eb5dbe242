//! Session state: the ship, the entity groups, score and lives
//!
//! Everything the frame loop mutates lives in one [`Session`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityId, EntityKind};
use super::group::EntityGroup;
use super::image_info::ImageCatalog;
use super::spawner::{SpawnOutcome, rock_spawner};
use crate::consts::*;

/// Things that happened during a frame, for the audio layer to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ThrustStarted,
    ThrustStopped,
    MissileFired,
    Explosion { at: Vec2 },
    /// The ship was hit; carries the lives left
    LifeLost { lives: i32 },
    /// Splash screen clicked while not started
    GameStarted,
    /// Lives ran out and the session went back to the splash screen
    GameOver { score: u32 },
}

/// Complete simulation state for one run of the program
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the spawner RNG was created from
    pub seed: u64,
    pub score: u32,
    pub lives: i32,
    pub started: bool,
    /// Background debris scroll, advanced once per frame
    pub scroll_phase: f32,
    /// Frames simulated so far
    pub time_ticks: u64,
    pub ship: Entity,
    pub rocks: EntityGroup,
    pub missiles: EntityGroup,
    pub explosions: EntityGroup,
    pub catalog: ImageCatalog,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, ImageCatalog::default())
    }

    pub fn with_catalog(seed: u64, catalog: ImageCatalog) -> Self {
        let ship = Entity::ship(Vec2::new(WIDTH / 2.0, HEIGHT / 2.0), &catalog.ship);
        Self {
            seed,
            score: 0,
            lives: STARTING_LIVES,
            started: false,
            scroll_phase: SCROLL_PHASE_START,
            time_ticks: 0,
            ship,
            rocks: EntityGroup::new(),
            missiles: EntityGroup::new(),
            explosions: EntityGroup::new(),
            catalog,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_thrust(&mut self, on: bool) {
        if self.ship.set_thrust(on) {
            self.events.push(if on {
                GameEvent::ThrustStarted
            } else {
                GameEvent::ThrustStopped
            });
        }
    }

    /// Set the ship's turn rate (degrees per tick, positive is counter-clockwise)
    pub fn turn(&mut self, rate: f32) {
        self.ship.turn(rate);
    }

    /// Fire a missile from the ship's nose. The missile inherits the ship's
    /// velocity.
    pub fn shoot(&mut self) -> EntityId {
        let forward = self.ship.forward();
        let vel = self.ship.vel + forward * MISSILE_SPEED;
        let clearance = Vec2::splat(self.ship.radius + MISSILE_CLEARANCE);
        let pos = self.ship.pos + clearance + self.ship.size / 2.0 * forward;

        let missile = Entity::new(EntityKind::Missile, pos, vel, 0.0, 0.0, &self.catalog.missile);
        self.events.push(GameEvent::MissileFired);
        self.missiles.add(missile)
    }

    /// True when `pos` is strictly inside the centered splash image
    pub fn splash_contains(&self, pos: Vec2) -> bool {
        let center = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0);
        let half = self.catalog.splash.size / 2.0;
        let (min, max) = (center - half, center + half);
        min.x < pos.x && pos.x < max.x && min.y < pos.y && pos.y < max.y
    }

    /// Pointer click. Always resets score and lives; starts the game when
    /// not started and the click lands on the splash image. Returns whether
    /// the game started.
    pub fn click(&mut self, pos: Vec2) -> bool {
        self.lives = STARTING_LIVES;
        self.score = 0;
        if !self.started && self.splash_contains(pos) {
            self.started = true;
            self.events.push(GameEvent::GameStarted);
            log::info!("Game started (seed {})", self.seed);
            return true;
        }
        false
    }

    /// Back to the splash screen. Only the rocks are cleared.
    pub fn restart(&mut self) {
        if self.started {
            log::info!("Game over with score {}", self.score);
            self.events.push(GameEvent::GameOver { score: self.score });
        }
        self.started = false;
        self.rocks.clear();
    }

    /// One spawner interval. Does nothing until the game has started.
    pub fn spawn_rock(&mut self) -> Option<SpawnOutcome> {
        if !self.started {
            return None;
        }
        Some(rock_spawner(
            &mut self.rocks,
            &self.ship,
            self.score,
            &self.catalog.rock,
            &mut self.rng,
        ))
    }
}
