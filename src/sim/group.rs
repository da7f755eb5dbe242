//! Same-kind entity collections
//!
//! Passes that remove entities iterate over a [`EntityGroup::snapshot`] of
//! ids and mutate the live group, never the other way round.

use super::entity::{Entity, EntityId};

/// An owned collection of entities, kept in id order
#[derive(Debug, Clone)]
pub struct EntityGroup {
    entities: Vec<Entity>,
    next_id: EntityId,
}

impl Default for EntityGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityGroup {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Take ownership of an entity and return the id it was given
    pub fn add(&mut self, mut entity: Entity) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        entity.id = id;
        self.entities.push(entity);
        id
    }

    /// Remove an entity. Removing an id that is already gone is a no-op.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Point-in-time list of member ids
    pub fn snapshot(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Update every member once and drop the ones that expired.
    /// Returns how many were dropped.
    pub fn update_all(&mut self) -> usize {
        let mut expired = Vec::new();
        for id in self.snapshot() {
            if let Some(entity) = self.get_mut(id) {
                if entity.update() {
                    expired.push(id);
                }
            }
        }
        for &id in &expired {
            self.remove(id);
        }
        expired.len()
    }
}
