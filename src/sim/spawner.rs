//! Timer-driven rock spawning, scaled by score

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityId, EntityKind};
use super::group::EntityGroup;
use super::image_info::ImageInfo;
use crate::consts::*;
use crate::dist;

/// What a single spawn attempt did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnOutcome {
    Spawned(EntityId),
    /// Drawn position was within the safe distance of the ship; discarded
    TooClose { at: Vec2 },
    /// The rock group is already at capacity
    Full,
}

/// Speed range for new rocks: 1 below 10 points, 2 below 20, 4 after that
pub fn difficulty_band(score: u32) -> i32 {
    match score {
        0..10 => 1,
        10..20 => 2,
        _ => 4,
    }
}

/// Make one attempt at adding a rock. Velocity components come from
/// `[-band, band]`, spin from `[ROCK_SPIN_MIN, ROCK_SPIN_MAX]`, position from
/// anywhere on the field. A rock drawn too close to the ship is dropped, not
/// redrawn.
pub fn rock_spawner<R: Rng>(
    rocks: &mut EntityGroup,
    ship: &Entity,
    score: u32,
    info: &ImageInfo,
    rng: &mut R,
) -> SpawnOutcome {
    if rocks.len() >= MAX_ROCKS {
        return SpawnOutcome::Full;
    }

    let band = difficulty_band(score);
    let vel = Vec2::new(
        rng.random_range(-band..=band) as f32,
        rng.random_range(-band..=band) as f32,
    );
    let pos = Vec2::new(
        rng.random_range(0..WIDTH as i32) as f32,
        rng.random_range(0..HEIGHT as i32) as f32,
    );
    let spin = rng.random_range(ROCK_SPIN_MIN..=ROCK_SPIN_MAX) as f32;

    let rock = Entity::new(EntityKind::Rock, pos, vel, 0.0, spin, info);
    if dist(ship.pos, rock.pos) > SPAWN_SAFE_DISTANCE {
        let id = rocks.add(rock);
        log::debug!("Rock {} spawned at ({}, {}) band {}", id, pos.x, pos.y, band);
        SpawnOutcome::Spawned(id)
    } else {
        log::debug!("Rock spawn at ({}, {}) rejected, too close to ship", pos.x, pos.y);
        SpawnOutcome::TooClose { at: pos }
    }
}
