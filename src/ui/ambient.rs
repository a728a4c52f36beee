// Ambient overlay widget
//
// Draws the particles of the mounted weather effect on top of the page.
// Particles only land on blank cells so text stays readable.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::effects::Particle;
use crate::theme::palette::{rgb_of, Rgb, Tint};

pub struct AmbientOverlay<'a> {
    particles: &'a [Particle],
    /// Background assumed for cells without an RGB background
    fallback: Rgb,
}

impl<'a> AmbientOverlay<'a> {
    pub fn new(particles: &'a [Particle], fallback: Rgb) -> Self {
        Self {
            particles,
            fallback,
        }
    }
}

impl Widget for AmbientOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.width.saturating_sub(1) as f32;
        let max_y = area.height.saturating_sub(1) as f32;

        for particle in self.particles {
            let col = area.x as i32 + (particle.x * max_x).round() as i32 + particle.offset.0 as i32;
            let row = area.y as i32 + (particle.y * max_y).round() as i32 + particle.offset.1 as i32;

            self.plot(buf, area, col, row, particle.glyph, particle.tint, 1.0);

            let trail = particle.trail as i32;
            for step in 1..=trail {
                let falloff = 1.0 - step as f32 / (trail + 1) as f32;
                self.plot(buf, area, col, row - step, particle.glyph, particle.tint, falloff);
            }
        }
    }
}

impl AmbientOverlay<'_> {
    fn plot(&self, buf: &mut Buffer, area: Rect, col: i32, row: i32, glyph: &str, tint: Tint, factor: f32) {
        let (Ok(x), Ok(y)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            return;
        }
        let Some(cell) = buf.cell_mut((x, y)) else {
            return;
        };
        if cell.symbol() != " " {
            return;
        }
        let base = rgb_of(cell.bg, self.fallback);
        cell.set_symbol(glyph).set_fg(tint.over_scaled(base, factor));
    }
}
