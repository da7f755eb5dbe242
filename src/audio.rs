//! Event-driven audio
//!
//! The simulation never touches audio directly; the frame loop hands each
//! [`GameEvent`] to an [`AudioManager`], which turns it into fire-and-forget
//! calls on whatever [`AudioSink`] the platform provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound clips the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Engine loop while thrusting
    Thrust,
    /// Missile fired
    Missile,
    /// Something blew up
    Explosion,
    /// Background music
    Soundtrack,
}

impl Sound {
    pub const ALL: [Sound; 4] = [
        Sound::Thrust,
        Sound::Missile,
        Sound::Explosion,
        Sound::Soundtrack,
    ];

    /// Clip gain before user volume settings
    pub fn base_volume(&self) -> f32 {
        match self {
            Sound::Thrust => 0.05,
            Sound::Missile => 1.0,
            Sound::Explosion => 0.05,
            Sound::Soundtrack => 0.5,
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, Sound::Soundtrack)
    }

    /// Manifest key for this clip
    pub fn name(&self) -> &'static str {
        match self {
            Sound::Thrust => "thrust",
            Sound::Missile => "missile",
            Sound::Explosion => "explosion",
            Sound::Soundtrack => "soundtrack",
        }
    }
}

/// Platform playback. Calls must not block.
pub trait AudioSink {
    fn play(&mut self, sound: Sound, volume: f32);
    fn play_looped(&mut self, sound: Sound, volume: f32);
    fn stop(&mut self, sound: Sound);
}

/// Sink for headless runs: logs instead of playing
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, sound: Sound, volume: f32) {
        log::debug!("audio: play {:?} at {:.2}", sound, volume);
    }

    fn play_looped(&mut self, sound: Sound, volume: f32) {
        log::debug!("audio: loop {:?} at {:.2}", sound, volume);
    }

    fn stop(&mut self, sound: Sound) {
        log::debug!("audio: stop {:?}", sound);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: settings.muted,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_music_volume(settings.music_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn effective_volume(&self, sound: Sound) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if sound.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        sound.base_volume() * self.master_volume * channel
    }

    /// Restart a one-shot clip from the beginning
    fn retrigger(&mut self, sound: Sound) {
        let vol = self.effective_volume(sound);
        self.sink.stop(sound);
        if vol > 0.0 {
            self.sink.play(sound, vol);
        }
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ThrustStarted => {
                let vol = self.effective_volume(Sound::Thrust);
                if vol > 0.0 {
                    self.sink.play_looped(Sound::Thrust, vol);
                }
            }
            GameEvent::ThrustStopped => self.sink.stop(Sound::Thrust),
            GameEvent::MissileFired => self.retrigger(Sound::Missile),
            GameEvent::Explosion { .. } => self.retrigger(Sound::Explosion),
            GameEvent::GameStarted => {
                let vol = self.effective_volume(Sound::Soundtrack);
                self.sink.stop(Sound::Soundtrack);
                if vol > 0.0 {
                    self.sink.play_looped(Sound::Soundtrack, vol);
                }
            }
            GameEvent::LifeLost { .. } | GameEvent::GameOver { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play(Sound, f32),
        Loop(Sound, f32),
        Stop(Sound),
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Call>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, sound: Sound, volume: f32) {
            self.calls.push(Call::Play(sound, volume));
        }
        fn play_looped(&mut self, sound: Sound, volume: f32) {
            self.calls.push(Call::Loop(sound, volume));
        }
        fn stop(&mut self, sound: Sound) {
            self.calls.push(Call::Stop(sound));
        }
    }

    fn full_volume() -> Settings {
        Settings {
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_thrust_loops_and_stops() {
        let mut audio = AudioManager::new(RecordingSink::default(), &full_volume());
        audio.handle(&GameEvent::ThrustStarted);
        audio.handle(&GameEvent::ThrustStopped);
        assert_eq!(
            audio.sink().calls,
            vec![Call::Loop(Sound::Thrust, 0.05), Call::Stop(Sound::Thrust)]
        );
    }

    #[test]
    fn test_one_shots_restart() {
        let mut audio = AudioManager::new(RecordingSink::default(), &full_volume());
        audio.handle(&GameEvent::Explosion { at: Vec2::ZERO });
        audio.handle(&GameEvent::MissileFired);
        assert_eq!(
            audio.sink().calls,
            vec![
                Call::Stop(Sound::Explosion),
                Call::Play(Sound::Explosion, 0.05),
                Call::Stop(Sound::Missile),
                Call::Play(Sound::Missile, 1.0),
            ]
        );
    }

    #[test]
    fn test_soundtrack_uses_music_channel() {
        let settings = Settings {
            music_volume: 0.5,
            ..full_volume()
        };
        let mut audio = AudioManager::new(RecordingSink::default(), &settings);
        audio.handle(&GameEvent::GameStarted);
        assert_eq!(
            audio.sink().calls,
            vec![
                Call::Stop(Sound::Soundtrack),
                Call::Loop(Sound::Soundtrack, 0.25)
            ]
        );
    }

    #[test]
    fn test_muted_only_stops() {
        let mut audio = AudioManager::new(RecordingSink::default(), &full_volume());
        audio.set_muted(true);
        audio.handle(&GameEvent::MissileFired);
        audio.handle(&GameEvent::GameOver { score: 3 });
        assert_eq!(audio.sink().calls, vec![Call::Stop(Sound::Missile)]);
    }
}
