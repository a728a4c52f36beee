// Backdrop rendering module
//
// Paints cell backgrounds only: the page gradient, the alternating section
// bands and the pointer-following glow. Everything drawn later keeps these
// backgrounds because no other widget sets a background color on page cells.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::app::page::active_section_at;
use crate::theme::palette::rgb_of;
use crate::theme::ThemePalette;

/// Glow radius in columns; rows use half of it (cells are ~2:1)
const GLOW_RADIUS: f32 = 14.0;

/// Vertical page gradient across `area`
pub fn paint_background(buf: &mut Buffer, area: Rect, palette: &ThemePalette) {
    let span = area.height.saturating_sub(1).max(1) as f32;
    for y in area.top()..area.bottom() {
        let color = palette.background.at((y - area.top()) as f32 / span);
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(color);
            }
        }
    }
}

/// Tint the rows of every other section with the section gradient
///
/// `scroll` is the document row shown on the first row of `area`.
pub fn paint_section_bands(
    buf: &mut Buffer,
    area: Rect,
    palette: &ThemePalette,
    section_starts: &[u16],
    total_rows: u16,
    scroll: u16,
) {
    for y in area.top()..area.bottom() {
        let doc_row = scroll.saturating_add(y - area.top());
        let Some(section) = active_section_at(section_starts, total_rows, doc_row) else {
            continue;
        };
        let index = section.index();
        if index % 2 == 0 {
            continue;
        }
        let start = section_starts[index];
        let end = section_starts.get(index + 1).copied().unwrap_or(total_rows);
        let ratio = (doc_row - start) as f32 / end.saturating_sub(start).max(1) as f32;
        let color = palette.section_background.at(ratio);
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(color);
            }
        }
    }
}

/// Radial glow around the pointer, three tint stops from the center out
pub fn paint_cursor_glow(buf: &mut Buffer, area: Rect, palette: &ThemePalette, pointer: (u16, u16)) {
    let (px, py) = pointer;
    if !(area.left()..area.right()).contains(&px) || !(area.top()..area.bottom()).contains(&py) {
        return;
    }

    let fallback = palette.background.stops[0];
    let rows = (GLOW_RADIUS / 2.0).ceil() as u16;
    let cols = GLOW_RADIUS.ceil() as u16;

    let top = py.saturating_sub(rows).max(area.top());
    let bottom = py.saturating_add(rows + 1).min(area.bottom());
    let left = px.saturating_sub(cols).max(area.left());
    let right = px.saturating_add(cols + 1).min(area.right());

    for y in top..bottom {
        for x in left..right {
            let dx = (x as f32 - px as f32) / GLOW_RADIUS;
            let dy = (y as f32 - py as f32) / (GLOW_RADIUS / 2.0);
            let distance = (dx * dx + dy * dy).sqrt();
            if distance >= 1.0 {
                continue;
            }
            let stop = ((distance * 3.0) as usize).min(2);
            let tint = palette.cursor_glow[stop];
            if let Some(cell) = buf.cell_mut((x, y)) {
                let base = rgb_of(cell.bg, fallback);
                cell.set_bg(tint.over_scaled(base, 1.0 - distance));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{palette_for, Weather};
    use ratatui::style::Color;

    fn brightness(color: Color) -> u32 {
        let (r, g, b) = rgb_of(color, (0, 0, 0));
        r as u32 + g as u32 + b as u32
    }

    #[test]
    fn test_background_follows_gradient() {
        let palette = palette_for(Weather::Summer);
        let area = Rect::new(0, 0, 10, 11);
        let mut buf = Buffer::empty(area);
        paint_background(&mut buf, area, palette);

        assert_eq!(buf[(0, 0)].bg, palette.background.at(0.0));
        assert_eq!(buf[(9, 5)].bg, palette.background.at(0.5));
        assert_eq!(buf[(3, 10)].bg, palette.background.at(1.0));
    }

    #[test]
    fn test_bands_only_on_odd_sections() {
        let palette = palette_for(Weather::Rain);
        let area = Rect::new(0, 0, 4, 20);
        let mut buf = Buffer::empty(area);
        paint_section_bands(&mut buf, area, palette, &[0, 10], 20, 0);

        // Home (index 0) untouched, About (index 1) banded
        assert_eq!(buf[(0, 5)].bg, Color::Reset);
        assert_eq!(buf[(0, 10)].bg, palette.section_background.at(0.0));
    }

    #[test]
    fn test_glow_brightens_around_pointer() {
        let palette = palette_for(Weather::Winter);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        paint_background(&mut buf, area, palette);
        let before = brightness(buf[(30, 10)].bg);

        paint_cursor_glow(&mut buf, area, palette, (30, 10));
        assert!(brightness(buf[(30, 10)].bg) > before);

        // Far corner is outside the radius
        assert_eq!(buf[(0, 0)].bg, palette.background.at(0.0));
    }

    #[test]
    fn test_glow_outside_area_is_ignored() {
        let palette = palette_for(Weather::Winter);
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        paint_cursor_glow(&mut buf, area, palette, (50, 50));
        assert_eq!(buf[(5, 2)].bg, Color::Reset);
    }
}
