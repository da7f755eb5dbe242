//! Rendering contract
//!
//! Drawing itself belongs to the platform. This module names the images,
//! defines the calls a platform renderer must accept, and fixes the order in
//! which a frame is drawn.

pub mod frame;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use frame::{LogRenderer, draw_frame};

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visual {
    Background,
    Debris,
    /// Two-frame sheet: 0 coasting, 1 thrusting
    Ship,
    Missile,
    Rock,
    /// Animated strip
    Explosion,
    Splash,
}

impl Visual {
    pub const ALL: [Visual; 7] = [
        Visual::Background,
        Visual::Debris,
        Visual::Ship,
        Visual::Missile,
        Visual::Rock,
        Visual::Explosion,
        Visual::Splash,
    ];

    /// Manifest key for this image
    pub fn name(&self) -> &'static str {
        match self {
            Visual::Background => "background",
            Visual::Debris => "debris",
            Visual::Ship => "ship",
            Visual::Missile => "missile",
            Visual::Rock => "rock",
            Visual::Explosion => "explosion",
            Visual::Splash => "splash",
        }
    }
}

/// One image draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub visual: Visual,
    /// Top-left corner in screen pixels
    pub pos: Vec2,
    /// Rotation about the image center (degrees, counter-clockwise)
    pub angle: f32,
    /// Frame within a sheet or strip
    pub frame: usize,
}

impl Sprite {
    pub fn still(visual: Visual, pos: Vec2) -> Self {
        Self {
            visual,
            pos,
            angle: 0.0,
            frame: 0,
        }
    }
}

/// Platform drawing backend. Nothing persists between frames.
pub trait Renderer {
    fn begin_frame(&mut self) {}
    fn draw_sprite(&mut self, sprite: Sprite);
    fn draw_text(&mut self, text: &str, pos: Vec2);
    fn end_frame(&mut self) {}
}
