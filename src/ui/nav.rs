// Navigation bar and weather selector
//
// Top bar with the monogram, one entry per section and the weather button.
// Records click targets on the app state as it lays them out.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::text::{display_width, gradient_spans};
use crate::app::{AppState, Section};
use crate::theme::{ThemePalette, Weather, BODY_TEXT, MUTED_TEXT};

const MONOGRAM: &str = "SP";

/// Columns between nav entries
const ITEM_GAP: u16 = 1;

/// Width of the open selector list
const MENU_WIDTH: u16 = 18;

fn selector_arrow(open: bool) -> &'static str {
    if open {
        "▴"
    } else {
        "▾"
    }
}

/// Label on the weather button
pub fn selector_label(weather: Weather, open: bool) -> String {
    format!(" {} {} {} ", weather.icon(), weather.label(), selector_arrow(open))
}

pub fn render_nav(f: &mut Frame, area: Rect, app: &mut AppState, weather: Weather, palette: &ThemePalette) {
    let scrolled = app.page.is_scrolled();
    let base = palette.background.stops[0];

    // Transparent at the top of the page, glass panel once scrolled
    let block = if scrolled {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.glass.over(base)))
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.nav_hitboxes.clear();
    app.selector_hitbox = None;
    if inner.is_empty() {
        return;
    }
    let row = Rect::new(inner.x, inner.y, inner.width, 1);

    // Weather button on the right
    let button_text = selector_label(weather, app.selector.is_open());
    let button_width = display_width(&button_text) as u16;
    let button = Rect::new(
        row.right().saturating_sub(button_width + 1).max(row.x),
        row.y,
        button_width.min(row.width),
        1,
    );
    let button_style = Style::default()
        .fg(BODY_TEXT)
        .bg(palette.highlight_bg.over(base));
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", weather.icon()),
                button_style.fg(weather.icon_color()),
            ),
            Span::styled(
                format!("{} {} ", weather.label(), selector_arrow(app.selector.is_open())),
                button_style,
            ),
        ])),
        button,
    );
    app.selector_hitbox = Some(button);

    // Monogram and section entries on the left
    let mut spans = vec![Span::raw(" ")];
    spans.extend(gradient_spans(MONOGRAM, &palette.text_gradient, app.pulse_phase, true));
    spans.push(Span::raw("   "));
    let mut x = row.x + 1 + display_width(MONOGRAM) as u16 + 3;
    let limit = button.x.saturating_sub(1);

    for section in Section::ALL {
        let label = format!(" {} ", section.label());
        let width = display_width(&label) as u16;
        if x + width > limit {
            break;
        }
        let style = if section == app.page.active {
            Style::default()
                .fg(palette.highlight)
                .bg(palette.highlight_bg.over(base))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" ".repeat(ITEM_GAP as usize)));
        app.nav_hitboxes.push((Rect::new(x, row.y, width, 1), section));
        x += width + ITEM_GAP;
    }

    let left = Rect::new(row.x, row.y, limit.saturating_sub(row.x), 1);
    f.render_widget(Paragraph::new(Line::from(spans)), left);
}

/// Dropdown under the weather button, drawn last so it sits on top
pub fn render_selector_menu(f: &mut Frame, app: &mut AppState, weather: Weather, palette: &ThemePalette) {
    app.menu_hitboxes.clear();
    let Some(button) = app.selector_hitbox else {
        return;
    };
    if !app.selector.is_open() {
        return;
    }

    let screen = f.area();
    let height = Weather::ALL.len() as u16 + 2;
    let width = MENU_WIDTH.min(screen.width);
    let x = button.right().saturating_sub(width).max(screen.x);
    let y = button.bottom() + 1;
    if y >= screen.bottom() {
        return;
    }
    let menu = Rect::new(x, y, width, height.min(screen.bottom() - y));

    let base = palette.background.stops[0];
    let panel = palette.glass.over(base);

    let lines: Vec<Line> = Weather::ALL
        .iter()
        .map(|&option| {
            let highlighted = option == app.selector.highlighted();
            let row_style = if highlighted {
                Style::default()
                    .fg(palette.highlight)
                    .bg(palette.highlight_bg.over(base))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BODY_TEXT)
            };
            let check = if option == weather { " ✓" } else { "  " };
            Line::from(vec![
                Span::styled(format!(" {} ", option.icon()), row_style.fg(option.icon_color())),
                Span::styled(format!("{:<8}", option.label()), row_style),
                Span::styled(check, row_style.fg(palette.accent)),
            ])
        })
        .collect();

    let rows = menu.height.saturating_sub(2);
    for (offset, &option) in Weather::ALL.iter().enumerate().take(rows as usize) {
        let row = Rect::new(menu.x + 1, menu.y + 1 + offset as u16, menu.width.saturating_sub(2), 1);
        app.menu_hitboxes.push((row, option));
    }

    f.render_widget(Clear, menu);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .style(Style::default().bg(panel)),
        ),
        menu,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_label() {
        assert_eq!(selector_label(Weather::Winter, false), " ❄ Winter ▾ ");
        assert_eq!(selector_label(Weather::Rain, true), " ☂ Rain ▴ ");
    }
}
