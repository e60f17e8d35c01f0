//! Sound requests
//!
//! The core never waits on audio. It asks the host's sink to play an effect
//! and moves on.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bunny was tapped and kicked upward
    Impulse,
}

/// Fire-and-forget audio output supplied by the host
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that drops every request (headless runs, tests)
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that remembers what was requested
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}
