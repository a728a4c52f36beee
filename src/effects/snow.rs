// Winter snowfall
//
// Slow, sparse flakes. Each flake falls straight down until its slide point,
// then drifts sideways by a quarter of the width while finishing the fall,
// fading in over the first 10% and out over the last 10% of the cycle.

use rand::Rng;

use super::{cycle_progress, Particle};
use crate::theme::palette::Tint;

/// Flakes generated per mount
pub const SNOWFLAKE_COUNT: usize = 60;

/// Flakes drawn per frame
pub const SNOWFLAKE_VISIBLE: usize = 30;

/// Flakes drawn when animation complexity is reduced
const SNOWFLAKE_REDUCED: usize = 15;

/// Horizontal drift after the slide point, as a fraction of the width
const SLIDE_DISTANCE: f32 = 0.25;

const SNOW_WHITE: (u8, u8, u8) = (255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    /// Horizontal start position, 0 ~ 100 (%)
    pub left: f32,
    /// Seconds per fall, 8 ~ 20
    pub duration: f32,
    /// Start delay in seconds, 0 ~ 5
    pub delay: f32,
    /// Nominal size, 3 ~ 7
    pub size: f32,
    /// Peak opacity, 0.2 ~ 0.5
    pub opacity: f32,
    pub slide: SlideDirection,
    /// Fall progress (%) where sideways drift starts, 30 ~ 80
    pub slide_start: f32,
}

impl Snowflake {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(8.0..20.0),
            delay: rng.gen_range(0.0..5.0),
            size: rng.gen_range(3.0..7.0),
            opacity: rng.gen_range(0.2..0.5),
            slide: if rng.gen_bool(0.5) {
                SlideDirection::Left
            } else {
                SlideDirection::Right
            },
            slide_start: rng.gen_range(30.0..80.0),
        }
    }

    /// Position and opacity at `elapsed` seconds, or `None` before the delay
    pub fn position(&self, elapsed: f32) -> Option<(f32, f32, f32)> {
        let progress = cycle_progress(elapsed, self.delay, self.duration)?;
        let slide_start = self.slide_start / 100.0;

        let drift = if progress > slide_start {
            let t = (progress - slide_start) / (1.0 - slide_start);
            match self.slide {
                SlideDirection::Left => -SLIDE_DISTANCE * t,
                SlideDirection::Right => SLIDE_DISTANCE * t,
            }
        } else {
            0.0
        };

        let opacity = if progress < 0.1 {
            self.opacity * progress / 0.1
        } else if progress > 0.9 {
            self.opacity * (1.0 - progress) / 0.1
        } else {
            self.opacity
        };

        Some((self.left / 100.0 + drift, progress, opacity))
    }

    fn glyph(&self) -> &'static str {
        if self.size < 4.5 {
            "·"
        } else if self.size < 6.0 {
            "•"
        } else {
            "❄"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnowField {
    pub flakes: Vec<Snowflake>,
}

impl SnowField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            flakes: (0..SNOWFLAKE_COUNT)
                .map(|_| Snowflake::generate(rng))
                .collect(),
        }
    }

    pub fn particles(&self, elapsed: f32, reduced: bool) -> Vec<Particle> {
        let visible = if reduced {
            SNOWFLAKE_REDUCED
        } else {
            SNOWFLAKE_VISIBLE
        };

        self.flakes
            .iter()
            .take(visible)
            .filter_map(|flake| {
                let (x, y, opacity) = flake.position(elapsed)?;
                if !(0.0..1.0).contains(&x) {
                    return None;
                }
                Some(Particle {
                    x,
                    y,
                    offset: (0, 0),
                    glyph: flake.glyph(),
                    // Terminal cells can't blur, so the flake is brighter than its opacity
                    tint: Tint::new(SNOW_WHITE, (0.35 + opacity).min(1.0)),
                    trail: 0,
                })
            })
            .collect()
    }
}
