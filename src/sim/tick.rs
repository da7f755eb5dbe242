//! One simulation frame
//!
//! Order: commands → ship update → ship vs rocks → missiles vs rocks →
//! group updates and expiry → game over check.

use glam::Vec2;

use super::collision::{ExplosionSink, group_collide, group_group_collide};
use super::state::{GameEvent, Session};
use crate::consts::*;

/// A discrete command, applied once when drained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TurnLeft,
    TurnRight,
    StopTurning,
    ThrustOn,
    ThrustOff,
    Fire,
    /// Pointer click at screen coordinates
    Click(Vec2),
    /// The spawner interval elapsed
    SpawnTimer,
    Quit,
}

/// Commands drained for a single frame, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Quit,
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) -> TickStatus {
    for command in &input.commands {
        match *command {
            Command::Quit => return TickStatus::Quit,
            Command::TurnLeft => session.turn(SHIP_TURN_RATE),
            Command::TurnRight => session.turn(-SHIP_TURN_RATE),
            Command::StopTurning => session.turn(0.0),
            Command::ThrustOn => session.set_thrust(true),
            Command::ThrustOff => session.set_thrust(false),
            Command::Fire => {
                session.shoot();
            }
            Command::Click(pos) => {
                session.click(pos);
            }
            Command::SpawnTimer => {
                session.spawn_rock();
            }
        }
    }

    session.time_ticks += 1;
    session.ship.update();

    let (ship_hit, destroyed) = {
        let Session {
            ship,
            rocks,
            missiles,
            explosions,
            catalog,
            events,
            ..
        } = session;
        let mut sink = ExplosionSink {
            effects: explosions,
            info: &catalog.explosion,
            events,
        };
        let ship_hit = group_collide(rocks, ship, &mut sink);
        let destroyed = group_group_collide(missiles, rocks, &mut sink);
        (ship_hit, destroyed)
    };

    if ship_hit {
        session.lives -= 1;
        session.events.push(GameEvent::LifeLost {
            lives: session.lives,
        });
        log::debug!("Ship hit, {} lives left", session.lives);
    }
    session.score += destroyed;

    session.scroll_phase += 1.0;

    session.missiles.update_all();
    session.explosions.update_all();
    session.rocks.update_all();

    if session.lives <= 0 {
        session.restart();
    }

    TickStatus::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Entity, EntityKind};

    fn started_session(seed: u64) -> Session {
        let mut session = Session::new(seed);
        tick(
            &mut session,
            &TickInput::new(vec![Command::Click(Vec2::new(400.0, 300.0))]),
        );
        session.drain_events();
        session
    }

    #[test]
    fn test_turn_commands() {
        let mut session = Session::new(1);
        tick(&mut session, &TickInput::new(vec![Command::TurnLeft]));
        assert_eq!(session.ship.angle, 5.0);
        tick(&mut session, &TickInput::new(vec![Command::TurnRight]));
        assert_eq!(session.ship.angle, 0.0);
        tick(&mut session, &TickInput::new(vec![Command::StopTurning]));
        tick(&mut session, &TickInput::default());
        assert_eq!(session.ship.angle, 0.0);
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut session = Session::new(1);
        let status = tick(
            &mut session,
            &TickInput::new(vec![Command::Quit, Command::Fire]),
        );
        assert_eq!(status, TickStatus::Quit);
        assert!(session.missiles.is_empty());
        assert_eq!(session.time_ticks, 0);
    }

    #[test]
    fn test_fire_adds_missile_and_event() {
        let mut session = Session::new(1);
        tick(&mut session, &TickInput::new(vec![Command::Fire]));
        assert_eq!(session.missiles.len(), 1);
        assert!(session.events().contains(&GameEvent::MissileFired));
    }

    #[test]
    fn test_spawn_timer_respects_started() {
        let mut session = Session::new(99);
        for _ in 0..20 {
            tick(&mut session, &TickInput::new(vec![Command::SpawnTimer]));
        }
        assert!(session.rocks.is_empty());

        let mut session = started_session(99);
        for _ in 0..20 {
            tick(&mut session, &TickInput::new(vec![Command::SpawnTimer]));
        }
        assert!(!session.rocks.is_empty());
        assert!(session.rocks.len() <= MAX_ROCKS);
    }

    #[test]
    fn test_ship_hit_costs_a_life_and_keeps_ship() {
        let mut session = started_session(1);
        let info = session.catalog.rock;
        session.rocks.add(Entity::new(
            EntityKind::Rock,
            Vec2::new(400.0, 300.0),
            Vec2::ZERO,
            0.0,
            0.0,
            &info,
        ));

        tick(&mut session, &TickInput::default());
        assert_eq!(session.lives, 2);
        assert!(session.rocks.is_empty());
        assert_eq!(session.explosions.len(), 1);
        assert_eq!(session.score, 0);
        assert!(session.events().contains(&GameEvent::LifeLost { lives: 2 }));
    }

    #[test]
    fn test_last_life_restarts() {
        let mut session = started_session(1);
        session.lives = 1;
        let info = session.catalog.rock;
        for x in [400.0, 100.0] {
            session.rocks.add(Entity::new(
                EntityKind::Rock,
                Vec2::new(x, 300.0),
                Vec2::ZERO,
                0.0,
                0.0,
                &info,
            ));
        }

        tick(&mut session, &TickInput::default());
        assert_eq!(session.lives, 0);
        assert!(!session.started);
        assert!(session.rocks.is_empty());
        assert!(
            session
                .events()
                .contains(&GameEvent::GameOver { score: 0 })
        );
    }

    #[test]
    fn test_exhausted_lives_restart_without_a_hit() {
        let mut session = started_session(1);
        session.lives = 0;
        let info = session.catalog.rock;
        session.rocks.add(Entity::new(
            EntityKind::Rock,
            Vec2::new(50.0, 50.0),
            Vec2::ZERO,
            0.0,
            0.0,
            &info,
        ));

        tick(&mut session, &TickInput::default());
        assert!(!session.started);
        assert!(session.rocks.is_empty());
        assert_eq!(session.lives, 0);
    }

    #[test]
    fn test_scroll_phase_advances() {
        let mut session = Session::new(1);
        tick(&mut session, &TickInput::default());
        tick(&mut session, &TickInput::default());
        assert_eq!(session.scroll_phase, SCROLL_PHASE_START + 2.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = started_session(4242);
        let mut b = started_session(4242);
        let inputs = [
            TickInput::new(vec![Command::SpawnTimer, Command::ThrustOn]),
            TickInput::new(vec![Command::TurnLeft, Command::Fire]),
            TickInput::new(vec![Command::SpawnTimer]),
            TickInput::default(),
        ];
        for _ in 0..30 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.rocks.snapshot(), b.rocks.snapshot());
        assert_eq!(a.score, b.score);
        assert_eq!(a.ship.pos, b.ship.pos);
    }
}
