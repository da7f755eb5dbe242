//! Entities and their per-tick movement on the wrap-around playfield

use glam::Vec2;

use super::image_info::{ImageInfo, Lifespan};
use crate::angle_to_vector;
use crate::consts::*;

/// Identifier unique within one group
pub type EntityId = u32;

/// The closed set of things that move on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The player's ship; damped, can thrust, never expires
    Ship { thrust: bool },
    Missile,
    Rock,
    /// Explosion; never collides
    Effect,
}

/// Looping cursor over an N-frame animation strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStrip {
    frame_count: usize,
    /// Draw calls each frame is held for
    frames_per_image: u32,
    looping: bool,
    frame: usize,
    held: u32,
}

impl FrameStrip {
    pub fn new(frame_count: usize, frames_per_image: u32, looping: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frames_per_image: frames_per_image.max(1),
            looping,
            frame: 0,
            held: 0,
        }
    }

    /// The 24-frame explosion strip, two draws per frame
    pub fn explosion() -> Self {
        Self::new(24, 2, true)
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Advance by one draw call and return the frame to draw.
    /// A non-looping strip holds its last frame.
    pub fn next_frame(&mut self) -> usize {
        if self.frame >= self.frame_count {
            if !self.looping {
                return self.frame_count - 1;
            }
            self.frame = 0;
        }
        let current = self.frame;
        self.held += 1;
        if self.held >= self.frames_per_image {
            self.held = 0;
            self.frame += 1;
        }
        current
    }
}

/// A moving object: kinematics, age and collision radius
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Assigned by the owning group
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left anchor (pixels)
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Orientation (degrees)
    pub angle: f32,
    /// Degrees per tick
    pub angle_vel: f32,
    /// Ticks survived
    pub age: u32,
    pub radius: f32,
    /// Image size, used for wrapping and the center
    pub size: Vec2,
    /// `pos + size / 2`; what collisions measure
    pub center: Vec2,
    pub lifespan: Lifespan,
    pub animated: bool,
    pub strip: Option<FrameStrip>,
}

impl Entity {
    pub fn new(
        kind: EntityKind,
        pos: Vec2,
        vel: Vec2,
        angle: f32,
        angle_vel: f32,
        info: &ImageInfo,
    ) -> Self {
        Self {
            id: 0,
            kind,
            pos,
            vel,
            angle,
            angle_vel,
            age: 0,
            radius: info.radius,
            size: info.size,
            center: pos + info.size / 2.0,
            lifespan: info.lifespan,
            animated: info.animated,
            strip: None,
        }
    }

    /// A stationary, coasting ship
    pub fn ship(pos: Vec2, info: &ImageInfo) -> Self {
        let mut ship = Self::new(
            EntityKind::Ship { thrust: false },
            pos,
            Vec2::ZERO,
            0.0,
            0.0,
            info,
        );
        ship.lifespan = Lifespan::Infinite;
        ship
    }

    /// Attach an animation cursor (only used when the image is animated)
    pub fn with_strip(mut self, strip: FrameStrip) -> Self {
        self.strip = Some(strip);
        self
    }

    pub fn is_thrusting(&self) -> bool {
        matches!(self.kind, EntityKind::Ship { thrust: true })
    }

    /// Set thrust; returns true if the state changed. Ignored for non-ships.
    pub fn set_thrust(&mut self, on: bool) -> bool {
        match &mut self.kind {
            EntityKind::Ship { thrust } if *thrust != on => {
                *thrust = on;
                true
            }
            _ => false,
        }
    }

    /// Set the turn rate in degrees per tick (0 stops turning)
    pub fn turn(&mut self, angle_vel: f32) {
        self.angle_vel = angle_vel;
    }

    /// Heading in screen space (Y grows downward)
    pub fn forward(&self) -> Vec2 {
        let v = angle_to_vector(self.angle.to_radians());
        Vec2::new(v.x, -v.y)
    }

    /// Advance the animation by one draw call, if this entity animates
    pub fn advance_animation(&mut self) -> Option<usize> {
        if !self.animated {
            return None;
        }
        self.strip.as_mut().map(FrameStrip::next_frame)
    }

    /// Advance one tick. Returns true when the entity has outlived its
    /// lifespan and must be removed from its group.
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.age = self.age.saturating_add(1);
        self.center = self.pos + self.size / 2.0;

        self.wrap();

        if let EntityKind::Ship { thrust } = self.kind {
            self.vel *= 1.0 - SHIP_DAMPING;
            if thrust {
                self.vel += self.forward() * SHIP_THRUST;
            }
        }

        self.angle += self.angle_vel;

        self.lifespan.is_expired(self.age)
    }

    /// Re-enter flush with the opposite edge once the trailing edge leaves.
    ///
    /// The top edge compares against the radius rather than zero; the four
    /// checks run in sequence, so a top wrap that lands past the bottom is
    /// folded straight back.
    fn wrap(&mut self) {
        let (w, h) = (self.size.x, self.size.y);
        let before = self.pos;

        if self.pos.y + h <= self.radius {
            self.pos.y = self.pos.y.rem_euclid(HEIGHT) + h;
        }
        if self.pos.y >= HEIGHT {
            self.pos.y = self.pos.y.rem_euclid(HEIGHT) - h;
        }

        if self.pos.x + w <= 0.0 {
            self.pos.x = self.pos.x.rem_euclid(WIDTH) + w;
        }
        if self.pos.x >= WIDTH {
            self.pos.x = self.pos.x.rem_euclid(WIDTH) - w;
        }

        if self.pos != before {
            self.center = self.pos + self.size / 2.0;
        }
    }
}
