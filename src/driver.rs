//! Host-facing frame loop
//!
//! The host owns scheduling (animation-frame callback, timer, test loop) and
//! forwards three things: frame timestamps, taps, and resizes. Everything is
//! synchronous and single-threaded; each call runs to completion before the
//! next one reads state.

use glam::Vec2;

use crate::assets::SpriteStatus;
use crate::audio::{AudioSink, SilentAudio, SoundEffect};
use crate::renderer::{DrawStats, RenderSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{FrameSample, SimState, Viewport, tick, trigger};

/// Turns host timestamps (seconds) into frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Delta since the previous call; 0 on the first frame or if time ran backwards
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) if now.is_finite() => (now - last).max(0.0) as f32,
            _ => 0.0,
        };
        if now.is_finite() {
            self.last = Some(now);
        }
        dt
    }
}

/// Owns the simulation and orchestrates one tick + draw per displayed frame
pub struct FrameDriver<A: AudioSink = SilentAudio> {
    pub state: SimState,
    clock: FrameClock,
    audio: A,
    last_sample: Option<FrameSample>,
    last_stats: DrawStats,
}

impl FrameDriver<SilentAudio> {
    pub fn silent(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
        Self::new(settings, width, height, seed, SilentAudio)
    }
}

impl<A: AudioSink> FrameDriver<A> {
    pub fn new(settings: Settings, width: f32, height: f32, seed: u64, audio: A) -> Self {
        Self {
            state: SimState::new(settings, Viewport::new(width, height), seed),
            clock: FrameClock::default(),
            audio,
            last_sample: None,
            last_stats: DrawStats::default(),
        }
    }

    /// Advance and draw one frame at host time `now` (seconds)
    pub fn frame(&mut self, now: f64, surface: &mut impl RenderSurface) -> FrameSample {
        let dt = self.clock.delta(now);
        self.step(dt, now, surface)
    }

    /// Advance and draw with an explicit dt (tests, fixed-rate hosts)
    pub fn step(&mut self, dt: f32, time: f64, surface: &mut impl RenderSurface) -> FrameSample {
        let sample = tick(&mut self.state, dt);
        self.last_stats = draw_frame(surface, &self.state, &sample, time);
        self.last_sample = Some(sample);
        sample
    }

    /// Tap at a screen position; true when it launched the body
    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        if trigger(&mut self.state, pos).is_some() {
            self.audio.play(SoundEffect::Impulse);
            true
        } else {
            false
        }
    }

    /// Canvas changed size; particle sets are rebuilt immediately
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Viewport::new(width, height));
    }

    /// Back to the floor, camera home
    pub fn reset(&mut self) {
        self.state.reset();
        log::info!("Simulation reset");
    }

    /// Sprite decoded; body takes the sprite's proportions
    pub fn sprite_loaded(&mut self, aspect: f32) {
        self.state.sprite = SpriteStatus::Ready { aspect };
        self.state.fit_body_to_sprite(aspect);
        log::info!("Sprite ready (aspect {:.3})", aspect);
    }

    /// Sprite failed for good; keep simulating with the fallback shape
    pub fn sprite_failed(&mut self, path: &str) {
        self.state.sprite = SpriteStatus::failed(path);
        log::warn!("Sprite failed to load: {}", path);
    }

    /// Altitude as of the last frame
    pub fn altitude(&self) -> f32 {
        self.last_sample.map(|s| s.altitude).unwrap_or(0.0)
    }

    pub fn last_sample(&self) -> Option<&FrameSample> {
        self.last_sample.as_ref()
    }

    pub fn last_stats(&self) -> DrawStats {
        self.last_stats
    }

    pub fn image_ready(&self) -> bool {
        self.state.sprite.image_ready()
    }

    pub fn image_error(&self) -> &str {
        self.state.sprite.image_error()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
