// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts and toggle indicators.

use std::time::Instant;

use crate::app::AppState;
use crate::theme::{ThemePalette, Weather, BODY_TEXT, MUTED_TEXT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::text::display_width;

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    weather: Weather,
    palette: &ThemePalette,
) {
    // Hints depend on what currently owns the keyboard
    let (enter_key, enter_hint) = if app.contact.editing {
        ("Tab:", "Next field | ")
    } else if app.selector.is_open() {
        ("Enter:", "Choose | ")
    } else {
        ("W:", "Weather | ")
    };

    // Calculate available width for hints (subtract borders and icon)
    let available_width = area.width.saturating_sub(4);

    // Define all hints with priority levels
    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
        color: Color,
    }

    let hints = [
        Hint {
            priority: 1,
            key: if app.contact.editing { "Esc:" } else { "Q:" },
            desc: if app.contact.editing { "Done " } else { "Quit " },
            color: Color::Red,
        },
        Hint {
            priority: 1,
            key: enter_key,
            desc: enter_hint,
            color: palette.accent,
        },
        Hint {
            priority: 1,
            key: "↑↓:",
            desc: "Scroll | ",
            color: palette.accent,
        },
        Hint {
            priority: 2,
            key: "←→:",
            desc: "Sections | ",
            color: palette.accent,
        },
        Hint {
            priority: 2,
            key: "C:",
            desc: "Contact | ",
            color: palette.accent,
        },
        Hint {
            priority: 2,
            key: "A:",
            desc: "Effects | ",
            color: palette.accent,
        },
        Hint {
            priority: 3,
            key: "+/-:",
            desc: "Speed | ",
            color: palette.accent,
        },
        Hint {
            priority: 3,
            key: "G:",
            desc: "Glow | ",
            color: palette.accent,
        },
    ];

    // Build status text, adding hints until we run out of space
    let mut spans = vec![Span::styled(
        format!(" {} ", weather.icon()),
        Style::default().fg(weather.icon_color()),
    )];

    let mut current_length = 4;

    // Process hints by priority
    for priority in 1..=3 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let hint_length = display_width(hint.key) + display_width(hint.desc);
            if current_length + hint_length <= available_width as usize {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(hint.desc, Style::default().fg(BODY_TEXT)));
                current_length += hint_length;
            }
        }
    }

    // Toggle indicators are always shown
    spans.push(Span::raw(" "));
    spans.extend(build_toggle_indicators(app, weather, palette, Instant::now()));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(palette.accent)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

fn on_off(label: &'static str, enabled: bool, palette: &ThemePalette) -> Vec<Span<'static>> {
    let (state, color) = if enabled {
        ("ON", palette.highlight)
    } else {
        ("OFF", MUTED_TEXT)
    };
    vec![
        Span::styled(label, Style::default().fg(MUTED_TEXT)),
        Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("] ", Style::default().fg(MUTED_TEXT)),
    ]
}

/// Build toggle status indicator spans for the status bar
///
/// Shows [A:ON/OFF] [G:ON/OFF], the mounted effect, the refresh interval
/// (bold for a moment after it changes) and a marker when particle counts
/// were reduced for speed.
pub fn build_toggle_indicators(
    app: &AppState,
    weather: Weather,
    palette: &ThemePalette,
    now: Instant,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    spans.extend(on_off("[A:", app.ambient.borrow().is_enabled(), palette));
    spans.extend(on_off("[G:", app.settings.cursor_glow_enabled, palette));

    let effect = app.ambient.borrow().kind();
    spans.push(Span::styled("[", Style::default().fg(MUTED_TEXT)));
    spans.push(Span::styled(
        format!("{} {}", weather.label(), effect.label()),
        Style::default().fg(weather.icon_color()),
    ));
    spans.push(Span::styled("] ", Style::default().fg(MUTED_TEXT)));

    let refresh_style = if app.refresh_config.recently_changed(now) {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BODY_TEXT)
    };
    spans.push(Span::styled(
        format!("[{}ms]", app.refresh_config.refresh_ms),
        refresh_style,
    ));

    if app.animation_reduced {
        spans.push(Span::styled(" [LOW FX]", Style::default().fg(Color::Yellow)));
    }

    spans
}
