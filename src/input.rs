//! Device input mapped to simulation commands
//!
//! Edge-triggered: every event maps to at most one command, applied once.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Command;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Escape,
    Other,
}

/// A raw event from the window/device layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer button released at screen coordinates
    PointerUp(Vec2),
    WindowClosed,
}

/// Translate one device event. Fire and quit trigger on key release.
pub fn map_event(event: InputEvent) -> Option<Command> {
    match event {
        InputEvent::KeyDown(Key::Left) => Some(Command::TurnLeft),
        InputEvent::KeyDown(Key::Right) => Some(Command::TurnRight),
        InputEvent::KeyDown(Key::Up) => Some(Command::ThrustOn),
        InputEvent::KeyUp(Key::Left | Key::Right) => Some(Command::StopTurning),
        InputEvent::KeyUp(Key::Up) => Some(Command::ThrustOff),
        InputEvent::KeyUp(Key::Space) => Some(Command::Fire),
        InputEvent::KeyUp(Key::Escape) | InputEvent::WindowClosed => Some(Command::Quit),
        InputEvent::PointerUp(pos) => Some(Command::Click(pos)),
        _ => None,
    }
}

/// Anything that can hand the loop the events pending for a frame
pub trait InputSource {
    fn poll(&mut self, frame: u64) -> Vec<InputEvent>;
}

/// Replays a fixed frame → events script
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: HashMap<u64, Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for `frame`; events on the same frame keep their order
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.events.entry(frame).or_default().push(event);
        self
    }

    /// Tap a key: down on `frame`, up `held` frames later
    pub fn tap(self, frame: u64, key: Key, held: u64) -> Self {
        self.at(frame, InputEvent::KeyDown(key))
            .at(frame + held, InputEvent::KeyUp(key))
    }

    /// A short attract-mode script: start the game, then spin, thrust and
    /// fire periodically until `frames`
    pub fn demo(frames: u64) -> Self {
        let mut script = Self::new().at(1, InputEvent::PointerUp(Vec2::new(400.0, 300.0)));
        let mut frame = 30;
        while frame < frames {
            script = script
                .tap(frame, Key::Space, 1)
                .tap(frame + 5, Key::Left, 9);
            if (frame / 30) % 4 == 0 {
                script = script.tap(frame + 2, Key::Up, 20);
            }
            frame += 30;
        }
        script
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, frame: u64) -> Vec<InputEvent> {
        self.events.remove(&frame).unwrap_or_default()
    }
}
