// Rain streaks
//
// Dense, fast drops falling top to bottom. Drop length maps to a short trail
// of rows above the head.

use rand::Rng;

use super::{cycle_progress, Particle};
use crate::theme::palette::Tint;

pub const RAINDROP_COUNT: usize = 100;

const RAINDROP_REDUCED: usize = 35;

/// Pixels of drop length per terminal row of trail
const PIXELS_PER_ROW: f32 = 10.0;

/// blue-400 at 60% opacity
const RAIN_TINT: Tint = Tint::new((96, 165, 250), 0.6);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    /// Horizontal position, 0 ~ 100 (%)
    pub left: f32,
    /// Seconds per fall, 0.5 ~ 1.0
    pub duration: f32,
    /// Start delay in seconds, 0 ~ 2
    pub delay: f32,
    /// Streak length in pixels, 10 ~ 30
    pub length: f32,
}

impl Raindrop {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(0.5..1.0),
            delay: rng.gen_range(0.0..2.0),
            length: rng.gen_range(10.0..30.0),
        }
    }

    /// Rows of trail behind the head, 0 ~ 2
    pub fn trail_rows(&self) -> u8 {
        ((self.length / PIXELS_PER_ROW).round() as u8).saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainField {
    pub drops: Vec<Raindrop>,
}

impl RainField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            drops: (0..RAINDROP_COUNT).map(|_| Raindrop::generate(rng)).collect(),
        }
    }

    pub fn particles(&self, elapsed: f32, reduced: bool) -> Vec<Particle> {
        let visible = if reduced {
            RAINDROP_REDUCED
        } else {
            RAINDROP_COUNT
        };

        self.drops
            .iter()
            .take(visible)
            .filter_map(|drop| {
                let progress = cycle_progress(elapsed, drop.delay, drop.duration)?;
                Some(Particle {
                    x: drop.left / 100.0,
                    y: progress,
                    offset: (0, 0),
                    glyph: "│",
                    tint: RAIN_TINT,
                    trail: drop.trail_rows(),
                })
            })
            .collect()
    }
}
