// UI rendering module
//
// This module contains all UI rendering components for weatherfolio.
// The main draw() function orchestrates rendering of all UI panels.

mod ambient;
mod backdrop;
mod nav;
mod sections;
mod status_bar;
mod text;

use std::time::Instant;

use crate::app::AppState;
use crate::theme::ThemePalette;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use ambient::AmbientOverlay;
use backdrop::{paint_background, paint_cursor_glow, paint_section_bands};
use nav::{render_nav, render_selector_menu};
use sections::build_page;
use status_bar::render_status_bar;

/// Main UI drawing function
///
/// `palette` is read once per frame by the caller; every section derives its
/// colors and mode from it so no two sections can disagree.
pub fn draw(f: &mut Frame, app: &mut AppState, palette: &ThemePalette) {
    let weather = palette.weather;
    let size = f.area();

    // Main layout: nav bar, page, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Nav bar
            Constraint::Min(0),    // Page
            Constraint::Length(3), // Status bar
        ])
        .split(size);
    let page_area = chunks[1];

    // Lay the document out first so scrolling and the backdrop agree on it
    let layout = build_page(palette, &app.contact, app.pulse_phase, page_area.width);
    app.page.set_layout(
        layout.section_starts.clone(),
        layout.total_rows(),
        page_area.height,
    );

    let buf = f.buffer_mut();
    paint_background(buf, size, palette);
    paint_section_bands(
        buf,
        page_area,
        palette,
        &layout.section_starts,
        layout.total_rows(),
        app.page.scroll,
    );
    if app.settings.cursor_glow_enabled {
        if let Some(pointer) = app.mouse {
            paint_cursor_glow(buf, size, palette, pointer);
        }
    }

    f.render_widget(
        Paragraph::new(layout.lines).scroll((app.page.scroll, 0)),
        page_area,
    );

    let particles = app
        .ambient
        .borrow()
        .particles(Instant::now(), app.animation_reduced);
    f.render_widget(
        AmbientOverlay::new(&particles, palette.background.stops[1]),
        page_area,
    );

    render_nav(f, chunks[0], app, weather, palette);
    render_status_bar(f, chunks[2], app, weather, palette);
    render_selector_menu(f, app, weather, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Section;
    use crate::theme::{palette_for, Weather};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &mut AppState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let palette = app.palette().unwrap();
        terminal.draw(|f| draw(f, app, palette)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draw_smoke_all_modes() {
        for weather in Weather::ALL {
            let mut app = AppState::new().unwrap();
            app.choose_weather(weather).unwrap();
            let buffer = render(&mut app, 120, 40);
            let text = screen_text(&buffer);
            assert!(text.contains("Satyendra Pandey"));
            assert!(text.contains(weather.label()));
            assert!(!app.nav_hitboxes.is_empty());
            assert!(app.selector_hitbox.is_some());
        }
    }

    #[test]
    fn test_draw_records_page_layout() {
        let mut app = AppState::new().unwrap();
        render(&mut app, 120, 40);
        assert!(app.page.max_scroll() > 0);

        app.page.jump_to(Section::Skills);
        let text = screen_text(&render(&mut app, 120, 40));
        assert!(text.contains("Skills & Expertise"));
        assert_eq!(app.page.active, Section::Skills);
    }

    #[test]
    fn test_background_follows_weather() {
        let mut app = AppState::new().unwrap();
        let winter = render(&mut app, 80, 30);
        app.choose_weather(Weather::Summer).unwrap();
        let summer = render(&mut app, 80, 30);

        assert_eq!(winter[(0, 0)].bg, palette_for(Weather::Winter).background.at(0.0));
        assert_eq!(summer[(0, 0)].bg, palette_for(Weather::Summer).background.at(0.0));
    }

    #[test]
    fn test_selector_menu_lists_modes() {
        let mut app = AppState::new().unwrap();
        render(&mut app, 100, 30);
        app.toggle_selector().unwrap();
        let text = screen_text(&render(&mut app, 100, 30));
        for weather in Weather::ALL {
            assert!(text.contains(weather.label()), "{} missing", weather.label());
        }
        assert!(text.contains('✓'));
    }

    #[test]
    fn test_effects_off_draws_no_particles() {
        let mut app = AppState::new().unwrap();
        app.toggle_effects().unwrap();
        let buffer = render(&mut app, 100, 30);
        // Page rows only; the nav and status bar show the mode icon
        for y in 2..27 {
            for x in 0..100 {
                let symbol = buffer[(x, y)].symbol();
                assert!(!["·", "•", "❄"].contains(&symbol), "particle at {x},{y}");
            }
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = AppState::new().unwrap();
        render(&mut app, 10, 6);
        app.toggle_selector().unwrap();
        render(&mut app, 10, 6);
    }
}
