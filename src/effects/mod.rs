// Ambient weather effects
//
// One decorative particle overlay per weather mode. The renderer mounts the
// effect matching the current mode and swaps it when the mode changes.
// Randomized parameters are drawn once per mount; frames only evaluate
// particle positions for the elapsed time.

pub mod rain;
pub mod snow;
pub mod sun;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::theme::palette::Tint;
use crate::theme::Weather;

pub use rain::RainField;
pub use snow::SnowField;
pub use sun::SunGlow;

/// A single particle to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, 0.0 (left edge) ~ 1.0 (right edge)
    pub x: f32,
    /// Vertical position, 0.0 (top) ~ 1.0 (bottom)
    pub y: f32,
    /// Extra offset in terminal cells, applied after scaling
    pub offset: (i16, i16),
    pub glyph: &'static str,
    /// Composited onto the page background under the particle
    pub tint: Tint,
    /// Rows drawn above the particle with the same glyph (rain streaks)
    pub trail: u8,
}

/// Which overlay is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Snow,
    Sun,
    Rain,
    /// Ambient effects switched off
    None,
}

impl EffectKind {
    pub fn for_weather(weather: Weather) -> Self {
        match weather {
            Weather::Winter => EffectKind::Snow,
            Weather::Summer => EffectKind::Sun,
            Weather::Rain => EffectKind::Rain,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Snow => "snow",
            EffectKind::Sun => "sun",
            EffectKind::Rain => "rain",
            EffectKind::None => "none",
        }
    }
}

/// Mounted overlay with its generated parameters
#[derive(Debug, Clone, PartialEq)]
pub enum AmbientEffect {
    Snow(SnowField),
    Sun(SunGlow),
    Rain(RainField),
    None,
}

impl AmbientEffect {
    pub fn kind(&self) -> EffectKind {
        match self {
            AmbientEffect::Snow(_) => EffectKind::Snow,
            AmbientEffect::Sun(_) => EffectKind::Sun,
            AmbientEffect::Rain(_) => EffectKind::Rain,
            AmbientEffect::None => EffectKind::None,
        }
    }

    /// Particles at `elapsed` seconds after mount
    pub fn particles(&self, elapsed: f32, reduced: bool) -> Vec<Particle> {
        match self {
            AmbientEffect::Snow(field) => field.particles(elapsed, reduced),
            AmbientEffect::Sun(glow) => glow.particles(elapsed, reduced),
            AmbientEffect::Rain(field) => field.particles(elapsed, reduced),
            AmbientEffect::None => Vec::new(),
        }
    }
}

/// Mounts and unmounts the overlay that matches the weather mode
///
/// States: Snow, Sun, Rain, None. Every mode change moves to the matching
/// state; `None` is only reachable by disabling effects.
#[derive(Debug)]
pub struct AmbientEffectRenderer {
    effect: AmbientEffect,
    weather: Weather,
    enabled: bool,
    mounted_at: Instant,
    mount_count: u64,
    rng: StdRng,
}

impl AmbientEffectRenderer {
    /// Mount the effect for `weather`
    pub fn new(weather: Weather) -> Self {
        Self::with_rng(weather, StdRng::from_entropy())
    }

    /// Deterministic renderer for tests
    #[cfg(test)]
    pub fn seeded(weather: Weather, seed: u64) -> Self {
        Self::with_rng(weather, StdRng::seed_from_u64(seed))
    }

    fn with_rng(weather: Weather, rng: StdRng) -> Self {
        let mut renderer = Self {
            effect: AmbientEffect::None,
            weather,
            enabled: true,
            mounted_at: Instant::now(),
            mount_count: 0,
            rng,
        };
        renderer.mount();
        renderer
    }

    /// Follow a mode change
    ///
    /// Remounts only when the target overlay differs from the mounted one, so
    /// re-publishing the same mode does not restart the animation.
    pub fn sync(&mut self, weather: Weather) {
        self.weather = weather;
        if self.enabled && self.effect.kind() != EffectKind::for_weather(weather) {
            self.mount();
        }
    }

    /// Turn ambient effects on or off
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.mount();
        } else {
            self.unmount();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    /// Number of mounts since creation, including the initial one
    #[cfg(test)]
    pub fn mount_count(&self) -> u64 {
        self.mount_count
    }

    /// Particles for the current frame
    pub fn particles(&self, now: Instant, reduced: bool) -> Vec<Particle> {
        let elapsed = now.saturating_duration_since(self.mounted_at).as_secs_f32();
        self.effect.particles(elapsed, reduced)
    }

    fn mount(&mut self) {
        self.unmount();
        self.effect = match EffectKind::for_weather(self.weather) {
            EffectKind::Snow => AmbientEffect::Snow(SnowField::generate(&mut self.rng)),
            EffectKind::Sun => AmbientEffect::Sun(SunGlow::generate(&mut self.rng)),
            EffectKind::Rain => AmbientEffect::Rain(RainField::generate(&mut self.rng)),
            EffectKind::None => AmbientEffect::None,
        };
        self.mounted_at = Instant::now();
        self.mount_count += 1;
        info!(
            effect = self.effect.kind().label(),
            weather = %self.weather,
            mounts = self.mount_count,
            "Ambient effect mounted"
        );
    }

    fn unmount(&mut self) {
        let previous = std::mem::replace(&mut self.effect, AmbientEffect::None);
        if previous.kind() != EffectKind::None {
            info!(effect = previous.kind().label(), "Ambient effect unmounted");
        }
    }
}

/// Fractional progress through a looping animation
///
/// Returns `None` while the particle is still waiting out its start delay.
pub(crate) fn cycle_progress(elapsed: f32, delay: f32, duration: f32) -> Option<f32> {
    if elapsed < delay || duration <= 0.0 {
        return None;
    }
    Some(((elapsed - delay) % duration) / duration)
}
