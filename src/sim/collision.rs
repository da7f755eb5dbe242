//! Distance-based collision tests and group sweeps
//!
//! Two entities collide when their centers are closer than the sum of their
//! radii. Sweeps remove what they hit and leave an explosion behind.

use glam::Vec2;

use super::entity::{Entity, EntityKind, FrameStrip};
use super::group::EntityGroup;
use super::image_info::ImageInfo;
use super::state::GameEvent;
use crate::dist;

/// Destination for the explosions a sweep produces
pub struct ExplosionSink<'a> {
    pub effects: &'a mut EntityGroup,
    pub info: &'a ImageInfo,
    pub events: &'a mut Vec<GameEvent>,
}

impl ExplosionSink<'_> {
    /// Spawn a stationary, animated explosion with its top-left at `at`
    pub fn spawn(&mut self, at: Vec2) {
        let blast = Entity::new(EntityKind::Effect, at, Vec2::ZERO, 0.0, 0.0, self.info)
            .with_strip(FrameStrip::explosion());
        self.effects.add(blast);
        self.events.push(GameEvent::Explosion { at });
    }
}

/// True when the two entities overlap.
///
/// A distance exactly equal to the radius sum does not count.
pub fn collide(a: &Entity, b: &Entity) -> bool {
    dist(a.center, b.center) < a.radius + b.radius
}

/// Remove the first member of `group` that collides with `other` and spawn an
/// explosion where it was. At most one member is removed per call.
pub fn group_collide(group: &mut EntityGroup, other: &Entity, sink: &mut ExplosionSink) -> bool {
    for id in group.snapshot() {
        let Some(elem) = group.get(id) else {
            continue;
        };
        if collide(elem, other) {
            let at = elem.pos;
            log::debug!("{:?} {} hit at ({:.1}, {:.1})", elem.kind, id, at.x, at.y);
            sink.spawn(at);
            group.remove(id);
            return true;
        }
    }
    false
}

/// Each member of `first` that hits something in `second` destroys exactly
/// one member of `second` and is destroyed itself. Returns the number of
/// such pairs.
pub fn group_group_collide(
    first: &mut EntityGroup,
    second: &mut EntityGroup,
    sink: &mut ExplosionSink,
) -> u32 {
    let mut hits = 0;
    for id in first.snapshot() {
        let Some(elem) = first.get(id) else {
            continue;
        };
        if group_collide(second, elem, sink) {
            first.remove(id);
            hits += 1;
        }
    }
    hits
}
