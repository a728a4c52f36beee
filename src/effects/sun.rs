// Summer sun glow
//
// A pulsing sun in the top-right corner plus warm motes floating in place.

use std::f32::consts::TAU;

use rand::Rng;

use super::{cycle_progress, Particle};
use crate::theme::palette::Tint;

pub const SUN_PARTICLE_COUNT: usize = 20;

const SUN_PARTICLE_REDUCED: usize = 8;

/// Sun position in normalized space
const SUN_CENTER: (f32, f32) = (0.92, 0.12);

/// Seconds per sun pulse (animate-pulse-slow)
const SUN_PULSE_SECS: f32 = 4.0;

/// Vertical float amplitude as a fraction of the height
const FLOAT_AMPLITUDE: f32 = 0.02;

const YELLOW_400: (u8, u8, u8) = (250, 204, 21);
const ORANGE_400: (u8, u8, u8) = (251, 146, 60);

/// Corona cells around the sun, in (column, row) offsets
const CORONA: [(i16, i16); 8] = [
    (-2, 0),
    (2, 0),
    (0, -1),
    (0, 1),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    /// 0 ~ 100 (%)
    pub left: f32,
    /// 0 ~ 100 (%)
    pub top: f32,
    /// 4 ~ 12
    pub size: f32,
    /// 0 ~ 5 s
    pub delay: f32,
    /// Seconds per float cycle, 3 ~ 7
    pub duration: f32,
}

impl Mote {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(4.0..12.0),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(3.0..7.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunGlow {
    pub motes: Vec<Mote>,
}

impl SunGlow {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            motes: (0..SUN_PARTICLE_COUNT).map(|_| Mote::generate(rng)).collect(),
        }
    }

    /// Sun pulse intensity, 0.0 ~ 1.0
    pub fn pulse(elapsed: f32) -> f32 {
        0.5 + 0.5 * (elapsed / SUN_PULSE_SECS * TAU).sin()
    }

    pub fn particles(&self, elapsed: f32, reduced: bool) -> Vec<Particle> {
        let pulse = Self::pulse(elapsed);
        let mut particles = vec![Particle {
            x: SUN_CENTER.0,
            y: SUN_CENTER.1,
            offset: (0, 0),
            glyph: "☀",
            tint: Tint::new(YELLOW_400, 0.7 + 0.3 * pulse),
            trail: 0,
        }];

        // Second glow layer runs a second out of phase
        let outer = Self::pulse(elapsed + 1.0);
        if !reduced {
            particles.extend(CORONA.iter().map(|&offset| Particle {
                x: SUN_CENTER.0,
                y: SUN_CENTER.1,
                offset,
                glyph: if offset.1 == 0 { "─" } else { "·" },
                tint: Tint::new(ORANGE_400, 0.2 + 0.4 * outer),
                trail: 0,
            }));
        }

        let visible = if reduced {
            SUN_PARTICLE_REDUCED
        } else {
            SUN_PARTICLE_COUNT
        };
        particles.extend(self.motes.iter().take(visible).filter_map(|mote| {
            let phase = cycle_progress(elapsed, mote.delay, mote.duration)?;
            let lift = (phase * TAU).sin().max(0.0) * FLOAT_AMPLITUDE;
            Some(Particle {
                x: mote.left / 100.0,
                y: (mote.top / 100.0 - lift).max(0.0),
                offset: (0, 0),
                glyph: if mote.size > 8.0 { "✦" } else { "·" },
                tint: Tint::new(YELLOW_400, 0.25 + mote.size / 40.0),
                trail: 0,
            })
        }));

        particles
    }
}
