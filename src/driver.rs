//! Frame loop
//!
//! Polls input, runs one simulation tick, forwards events to audio and
//! draws, at a fixed 60 Hz. The rock spawner is a separate wall-clock timer
//! whose firings are queued as [`Command::SpawnTimer`] alongside input.

use std::time::{Duration, Instant};

use crate::audio::{AudioManager, AudioSink};
use crate::consts::{SPAWN_INTERVAL_MS, TICK_RATE};
use crate::input::{InputSource, map_event};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{Command, Session, TickInput, TickStatus, tick};

/// Wall-clock length of one frame, rounded up so 60 frames cover a second
pub const FRAME: Duration =
    Duration::from_nanos((1_000_000_000 + TICK_RATE as u64 - 1) / TICK_RATE as u64);

/// Don't let a long stall turn into a burst of spawns
const MAX_SPAWN_CATCHUP: Duration = Duration::from_millis(5 * SPAWN_INTERVAL_MS);

/// Periodic timer fed with elapsed time
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    accumulator: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
        }
    }

    /// Add `dt` and return how many periods elapsed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator = (self.accumulator + dt).min(MAX_SPAWN_CATCHUP);
        let mut fired = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            fired += 1;
        }
        fired
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SPAWN_INTERVAL_MS))
    }
}

/// How the loop measures time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep to hold 60 Hz; the spawner follows the real clock
    RealTime,
    /// No sleeping; every frame counts as exactly one frame period
    Headless,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    FrameLimit,
}

pub struct GameLoop<I: InputSource, A: AudioSink, R: Renderer> {
    pub session: Session,
    pub input: I,
    pub audio: AudioManager<A>,
    pub renderer: R,
    pacing: Pacing,
    spawn_timer: SpawnTimer,
    frame: u64,
}

impl<I: InputSource, A: AudioSink, R: Renderer> GameLoop<I, A, R> {
    pub fn new(session: Session, input: I, audio: AudioManager<A>, renderer: R) -> Self {
        Self {
            session,
            input,
            audio,
            renderer,
            pacing: Pacing::RealTime,
            spawn_timer: SpawnTimer::default(),
            frame: 0,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame. `dt` is the time since the previous frame.
    pub fn step(&mut self, dt: Duration) -> TickStatus {
        self.frame += 1;

        let mut commands: Vec<Command> = self
            .input
            .poll(self.frame)
            .into_iter()
            .filter_map(map_event)
            .collect();
        for _ in 0..self.spawn_timer.advance(dt) {
            commands.push(Command::SpawnTimer);
        }

        let status = tick(&mut self.session, &TickInput::new(commands));
        for event in self.session.drain_events() {
            self.audio.handle(&event);
        }
        if status == TickStatus::Quit {
            return status;
        }

        draw_frame(&mut self.session, &mut self.renderer);
        status
    }

    /// Run until quit, or until `max_frames` frames when given
    pub fn run(&mut self, max_frames: Option<u64>) -> Exit {
        log::info!(
            "Frame loop starting ({:?}, seed {})",
            self.pacing,
            self.session.seed
        );
        let mut last = Instant::now();

        loop {
            if max_frames.is_some_and(|max| self.frame >= max) {
                log::info!("Frame limit reached after {} frames", self.frame);
                return Exit::FrameLimit;
            }

            let frame_start = Instant::now();
            let dt = match self.pacing {
                Pacing::RealTime => frame_start.duration_since(last),
                Pacing::Headless => FRAME,
            };
            last = frame_start;

            if self.step(dt) == TickStatus::Quit {
                log::info!("Quit after {} frames", self.frame);
                return Exit::Quit;
            }

            if self.pacing == Pacing::RealTime {
                let elapsed = frame_start.elapsed();
                if elapsed < FRAME {
                    std::thread::sleep(FRAME - elapsed);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogSink;
    use crate::input::{InputEvent, Key, ScriptedInput};
    use crate::renderer::LogRenderer;
    use crate::settings::Settings;
    use glam::Vec2;

    fn headless(script: ScriptedInput) -> GameLoop<ScriptedInput, LogSink, LogRenderer> {
        GameLoop::new(
            Session::new(42),
            script,
            AudioManager::new(LogSink, &Settings::default()),
            LogRenderer::default(),
        )
        .with_pacing(Pacing::Headless)
    }

    #[test]
    fn test_spawn_timer_fires_each_interval() {
        let mut timer = SpawnTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(60)), 0);
        assert_eq!(timer.advance(Duration::from_millis(60)), 1);
        assert_eq!(timer.advance(Duration::from_millis(250)), 2);
    }

    #[test]
    fn test_spawn_timer_caps_catchup() {
        let mut timer = SpawnTimer::default();
        assert_eq!(timer.advance(Duration::from_secs(60)), 5);
    }

    #[test]
    fn test_frame_limit() {
        let mut game = headless(ScriptedInput::new());
        assert_eq!(game.run(Some(10)), Exit::FrameLimit);
        assert_eq!(game.frame(), 10);
        assert_eq!(game.renderer.frames, 10);
        assert_eq!(game.session.time_ticks, 10);
    }

    #[test]
    fn test_escape_quits_without_ticking() {
        let script = ScriptedInput::new().at(3, InputEvent::KeyUp(Key::Escape));
        let mut game = headless(script);
        assert_eq!(game.run(Some(100)), Exit::Quit);
        assert_eq!(game.frame(), 3);
        assert_eq!(game.session.time_ticks, 2);
        assert_eq!(game.renderer.frames, 2);
    }

    #[test]
    fn test_rocks_spawn_once_started() {
        let script = ScriptedInput::new().at(1, InputEvent::PointerUp(Vec2::new(400.0, 300.0)));
        let mut game = headless(script);
        game.run(Some(TICK_RATE as u64 * 5));
        assert!(game.session.started);
        // A spawned rock either survives or has cost the ship a life
        assert!(!game.session.rocks.is_empty() || game.session.lives < 3);
    }

    #[test]
    fn test_no_rocks_before_start() {
        let mut game = headless(ScriptedInput::new());
        game.run(Some(TICK_RATE as u64 * 3));
        assert!(game.session.rocks.is_empty());
    }
}
