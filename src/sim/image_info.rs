//! Per-asset metadata shared by every entity drawn with the same image

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How long an entity lives before it is removed from its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifespan {
    /// Expires once its age reaches this many ticks
    Ticks(u32),
    /// Never expires
    Infinite,
}

impl Lifespan {
    /// A zero or missing tick count means "never expires"
    pub fn from_ticks(ticks: Option<u32>) -> Self {
        match ticks {
            Some(t) if t > 0 => Lifespan::Ticks(t),
            _ => Lifespan::Infinite,
        }
    }

    /// True once `age` has reached the lifespan
    pub fn is_expired(&self, age: u32) -> bool {
        match *self {
            Lifespan::Ticks(limit) => age >= limit,
            Lifespan::Infinite => false,
        }
    }
}

/// Immutable image metadata (nominal geometry and collision radius)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Nominal center offset inside the image
    pub center: Vec2,
    /// Nominal image size (width, height)
    pub size: Vec2,
    /// Collision radius, never negative
    pub radius: f32,
    pub lifespan: Lifespan,
    /// Whether entities using this image play a frame strip
    pub animated: bool,
}

impl ImageInfo {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            radius: 0.0,
            lifespan: Lifespan::Infinite,
            animated: false,
        }
    }

    /// Set the collision radius (negative values clamp to zero)
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn with_lifespan(mut self, ticks: u32) -> Self {
        self.lifespan = Lifespan::from_ticks(Some(ticks));
        self
    }

    pub fn with_animation(mut self) -> Self {
        self.animated = true;
        self
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// The image metadata for every kind of thing the game draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCatalog {
    pub ship: ImageInfo,
    pub missile: ImageInfo,
    pub rock: ImageInfo,
    pub explosion: ImageInfo,
    pub splash: ImageInfo,
    pub debris: ImageInfo,
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self {
            ship: ImageInfo::new(Vec2::new(45.0, 45.0), Vec2::new(90.0, 90.0)).with_radius(35.0),
            missile: ImageInfo::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0))
                .with_radius(3.0)
                .with_lifespan(50),
            rock: ImageInfo::new(Vec2::new(45.0, 45.0), Vec2::new(90.0, 90.0)).with_radius(40.0),
            explosion: ImageInfo::new(Vec2::new(64.0, 64.0), Vec2::new(128.0, 128.0))
                .with_radius(17.0)
                .with_lifespan(24)
                .with_animation(),
            splash: ImageInfo::new(Vec2::new(200.0, 150.0), Vec2::new(400.0, 300.0)),
            debris: ImageInfo::new(Vec2::new(320.0, 240.0), Vec2::new(640.0, 480.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifespan_zero_is_infinite() {
        assert_eq!(Lifespan::from_ticks(Some(0)), Lifespan::Infinite);
        assert_eq!(Lifespan::from_ticks(None), Lifespan::Infinite);
        assert_eq!(Lifespan::from_ticks(Some(50)), Lifespan::Ticks(50));
    }

    #[test]
    fn test_lifespan_expiry() {
        let l = Lifespan::Ticks(3);
        assert!(!l.is_expired(2));
        assert!(l.is_expired(3));
        assert!(!Lifespan::Infinite.is_expired(u32::MAX));
    }

    #[test]
    fn test_negative_radius_clamped() {
        let info = ImageInfo::new(Vec2::ZERO, Vec2::ONE).with_radius(-4.0);
        assert_eq!(info.radius, 0.0);
    }

    #[test]
    fn test_catalog_explosion() {
        let catalog = ImageCatalog::default();
        assert!(catalog.explosion.animated);
        assert_eq!(catalog.explosion.lifespan, Lifespan::Ticks(24));
        assert_eq!(catalog.ship.lifespan, Lifespan::Infinite);
        assert_eq!(catalog.rock.radius, 40.0);
    }
}
