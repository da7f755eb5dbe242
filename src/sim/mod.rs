//! Entity simulation module
//!
//! All gameplay logic lives here. This module performs no I/O:
//! - One call to `tick` per frame
//! - Seeded RNG only (spawner)
//! - Groups iterate over id snapshots, so removals mid-pass are safe
//! - Sound and drawing are driven from the outside via `GameEvent`s and
//!   read-only access to the session

pub mod collision;
pub mod entity;
pub mod group;
pub mod image_info;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ExplosionSink, collide, group_collide, group_group_collide};
pub use entity::{Entity, EntityId, EntityKind, FrameStrip};
pub use group::EntityGroup;
pub use image_info::{ImageCatalog, ImageInfo, Lifespan};
pub use spawner::{SpawnOutcome, difficulty_band, rock_spawner};
pub use state::{GameEvent, Session};
pub use tick::{Command, TickInput, TickStatus, tick};
