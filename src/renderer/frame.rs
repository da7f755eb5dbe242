//! Frame layering
//!
//! Back to front: background, two debris layers, ship, missiles, effects,
//! rocks, score, lives, splash (only before the game starts).

use glam::Vec2;

use super::{Renderer, Sprite, Visual};
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::{EntityGroup, Session};

const SCORE_POS: Vec2 = Vec2::new(0.0, 0.0);
const LIVES_POS: Vec2 = Vec2::new(620.0, 0.0);

/// Positions of the two scrolling debris layers for a scroll phase
pub fn debris_positions(scroll_phase: f32, debris_size: Vec2) -> [Vec2; 2] {
    let offset = (scroll_phase / 4.0) % WIDTH;
    let half = debris_size / 2.0;
    let y = HEIGHT / 2.0 - half.y;
    [
        Vec2::new(offset - WIDTH / 2.0 - half.x, y),
        Vec2::new(offset + WIDTH / 2.0 - half.x, y),
    ]
}

fn draw_group(renderer: &mut impl Renderer, group: &mut EntityGroup, visual: Visual) {
    for entity in group.iter_mut() {
        let frame = entity.advance_animation().unwrap_or(0);
        renderer.draw_sprite(Sprite {
            visual,
            pos: entity.pos,
            angle: entity.angle,
            frame,
        });
    }
}

/// Draw one frame. Animated entities advance one frame per call.
pub fn draw_frame(session: &mut Session, renderer: &mut impl Renderer) {
    renderer.begin_frame();

    renderer.draw_sprite(Sprite::still(Visual::Background, Vec2::ZERO));
    for pos in debris_positions(session.scroll_phase, session.catalog.debris.size) {
        renderer.draw_sprite(Sprite::still(Visual::Debris, pos));
    }

    renderer.draw_sprite(Sprite {
        visual: Visual::Ship,
        pos: session.ship.pos,
        angle: session.ship.angle,
        frame: usize::from(session.ship.is_thrusting()),
    });

    draw_group(renderer, &mut session.missiles, Visual::Missile);
    draw_group(renderer, &mut session.explosions, Visual::Explosion);
    draw_group(renderer, &mut session.rocks, Visual::Rock);

    renderer.draw_text(&format!("Score: {}", session.score), SCORE_POS);
    renderer.draw_text(&format!("Lives: {}", session.lives), LIVES_POS);

    if !session.started {
        let splash = session.catalog.splash.size;
        let pos = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0) - splash / 2.0;
        renderer.draw_sprite(Sprite::still(Visual::Splash, pos));
    }

    renderer.end_frame();
}

/// Renderer for headless runs: counts draws and logs the HUD
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub sprites_last_frame: usize,
    sprites: usize,
}

impl Renderer for LogRenderer {
    fn begin_frame(&mut self) {
        self.sprites = 0;
    }

    fn draw_sprite(&mut self, _sprite: Sprite) {
        self.sprites += 1;
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2) {
        log::trace!("hud: {}", text);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        self.sprites_last_frame = self.sprites;
    }
}
