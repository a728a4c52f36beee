// Keyboard and mouse event handling
//
// This module contains the input handlers that process user input and
// update the application state accordingly.

use super::AppState;
use crate::app::contact::{FormError, FormField};
use crate::theme::{ScopeError, Weather};
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Handle keyboard events and update application state
///
/// Returns `Ok(true)` if the application should continue running,
/// `Ok(false)` if it should exit. A detached theme handle is an error.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - Quit the application (Esc closes the weather menu first)
/// - `w`, `W` - Open/close the weather menu
/// - `1`, `2`, `3` - Winter / Summer / Rain
/// - `Up`/`Down`, `k`/`j` - Scroll, or move through the open weather menu
/// - `Enter` - Confirm the highlighted weather
/// - `Left`/`Right`, `h`/`l` - Previous/next section
/// - `PageUp`, `PageDown`, `Home`, `End` - Scroll by page / to the ends
/// - `c`, `C` - Edit the contact form
/// - `+`, `=` - Decrease refresh rate
/// - `-`, `_` - Increase refresh rate
/// - `a`, `A` - Toggle ambient effects
/// - `g`, `G` - Toggle cursor glow
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> Result<bool, ScopeError> {
    if app.contact.editing {
        handle_form_key(app, key);
        return Ok(true);
    }

    if app.selector.is_open() {
        return handle_selector_key(app, key);
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            return Ok(false);
        }
        KeyCode::Char('w') | KeyCode::Char('W') => app.toggle_selector()?,
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(weather) = weather_for_digit(c) {
                app.choose_weather(weather)?;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.page.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.page.scroll_by(1),
        KeyCode::PageUp => app.page.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page.page_down(),
        KeyCode::Home => app.page.scroll_to_top(),
        KeyCode::End => app.page.scroll_to_bottom(),
        KeyCode::Left | KeyCode::Char('h') => app.page.previous_section(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.page.next_section(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.edit_contact_form(),
        // Refresh rate controls
        // + = slower refresh (increase interval)
        // - = faster refresh (decrease interval)
        KeyCode::Char('+') | KeyCode::Char('=') => app.decrease_refresh_rate(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.increase_refresh_rate(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.toggle_effects()?,
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.settings.cursor_glow_enabled = !app.settings.cursor_glow_enabled;
        }
        _ => {}
    }
    Ok(true)
}

fn handle_selector_key(app: &mut AppState, key: KeyCode) -> Result<bool, ScopeError> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
            return Ok(false);
        }
        KeyCode::Esc | KeyCode::Char('w') | KeyCode::Char('W') => app.selector.close(),
        KeyCode::Up | KeyCode::Char('k') => app.selector.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.selector.highlight_next(),
        KeyCode::Enter => {
            app.selector.confirm(&app.theme)?;
        }
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(weather) = weather_for_digit(c) {
                app.choose_weather(weather)?;
            }
        }
        _ => {}
    }
    Ok(true)
}

fn handle_form_key(app: &mut AppState, key: KeyCode) {
    let form = &mut app.contact;
    match key {
        KeyCode::Esc => form.stop_editing(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter if form.focus == FormField::Message => match form.submit(Instant::now()) {
            Ok(()) => {}
            // The button already reads "Sending..."; nothing to report
            Err(FormError::Busy) => tracing::debug!("Contact form already sending"),
            // Validation errors are recorded on the form for the renderer
            Err(e) => tracing::debug!(error = %e, "Contact form rejected"),
        },
        KeyCode::Enter => form.next_field(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
}

fn weather_for_digit(c: char) -> Option<Weather> {
    let idx = c.to_digit(10)? as usize;
    Weather::ALL.get(idx.checked_sub(1)?).copied()
}

/// Handle mouse events: wheel scrolls the page, movement feeds the cursor
/// glow, left click hits navigation and the weather button
pub fn handle_mouse_event(app: &mut AppState, event: MouseEvent) -> Result<(), ScopeError> {
    match event.kind {
        MouseEventKind::ScrollDown => app.page.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.page.scroll_by(-WHEEL_STEP),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.mouse = Some((event.column, event.row));
        }
        MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
            app.mouse = Some((event.column, event.row));
            app.click(event.column, event.row)?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Section;
    use crate::effects::EffectKind;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn app() -> AppState {
        let mut app = AppState::new().unwrap();
        app.page
            .set_layout(vec![0, 20, 40, 60, 80, 100, 120, 140, 160], 200, 30);
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();

        // Test 'q' key
        assert!(app.running);
        assert_eq!(handle_key_event(&mut app, KeyCode::Char('q')), Ok(false));
        assert!(!app.running);

        // Reset and test 'Q' key
        app.running = true;
        assert_eq!(handle_key_event(&mut app, KeyCode::Char('Q')), Ok(false));
        assert!(!app.running);

        // Reset and test Esc key
        app.running = true;
        assert_eq!(handle_key_event(&mut app, KeyCode::Esc), Ok(false));
        assert!(!app.running);
    }

    #[test]
    fn test_esc_closes_selector_before_quitting() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('w')).unwrap();
        assert!(app.selector.is_open());

        assert_eq!(handle_key_event(&mut app, KeyCode::Esc), Ok(true));
        assert!(!app.selector.is_open());
        assert!(app.running);
    }

    #[test]
    fn test_selector_navigation_and_confirm() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('w')).unwrap();
        handle_key_event(&mut app, KeyCode::Down).unwrap();
        handle_key_event(&mut app, KeyCode::Down).unwrap();
        assert_eq!(app.selector.highlighted(), Weather::Rain);

        // Arrow keys move the menu, not the page
        assert_eq!(app.page.scroll, 0);

        handle_key_event(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(app.weather(), Ok(Weather::Rain));
        assert_eq!(app.ambient.borrow().kind(), EffectKind::Rain);
        assert!(!app.selector.is_open());
    }

    #[test]
    fn test_digit_shortcuts() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('2')).unwrap();
        assert_eq!(app.weather(), Ok(Weather::Summer));
        handle_key_event(&mut app, KeyCode::Char('3')).unwrap();
        assert_eq!(app.weather(), Ok(Weather::Rain));
        handle_key_event(&mut app, KeyCode::Char('1')).unwrap();
        assert_eq!(app.weather(), Ok(Weather::Winter));
    }

    #[test]
    fn test_weather_for_digit() {
        assert_eq!(weather_for_digit('1'), Some(Weather::Winter));
        assert_eq!(weather_for_digit('3'), Some(Weather::Rain));
        assert_eq!(weather_for_digit('0'), None);
        assert_eq!(weather_for_digit('9'), None);
    }

    #[test]
    fn test_toggle_effects() {
        let mut app = app();

        // Default: effects enabled
        assert!(app.settings.effects_enabled);

        // Toggle off
        handle_key_event(&mut app, KeyCode::Char('a')).unwrap();
        assert!(!app.settings.effects_enabled);
        assert_eq!(app.ambient.borrow().kind(), EffectKind::None);

        // Toggle on
        handle_key_event(&mut app, KeyCode::Char('A')).unwrap();
        assert!(app.settings.effects_enabled);
    }

    #[test]
    fn test_toggle_cursor_glow() {
        let mut app = app();
        assert!(app.settings.cursor_glow_enabled);
        handle_key_event(&mut app, KeyCode::Char('g')).unwrap();
        assert!(!app.settings.cursor_glow_enabled);
    }

    #[test]
    fn test_refresh_rate_controls() {
        let mut app = app();
        let initial = app.refresh_config.refresh_ms;

        handle_key_event(&mut app, KeyCode::Char('+')).unwrap();
        assert!(app.refresh_config.refresh_ms > initial);

        handle_key_event(&mut app, KeyCode::Char('-')).unwrap();
        assert_eq!(app.refresh_config.refresh_ms, initial);
    }

    #[test]
    fn test_scroll_and_section_keys() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Down).unwrap();
        assert_eq!(app.page.scroll, 1);

        handle_key_event(&mut app, KeyCode::Right).unwrap();
        assert_eq!(app.page.active, Section::About);
        assert_eq!(app.page.scroll, 20);

        handle_key_event(&mut app, KeyCode::End).unwrap();
        assert_eq!(app.page.scroll, app.page.max_scroll());

        handle_key_event(&mut app, KeyCode::Home).unwrap();
        assert_eq!(app.page.scroll, 0);
        assert_eq!(app.page.active, Section::Home);
    }

    #[test]
    fn test_form_captures_keys() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('c')).unwrap();
        assert!(app.contact.editing);
        assert_eq!(app.page.active, Section::Contact);

        // 'q' is text while editing, not quit
        for c in "qa".chars() {
            handle_key_event(&mut app, KeyCode::Char(c)).unwrap();
        }
        assert!(app.running);
        assert_eq!(app.contact.name, "qa");
        assert!(app.settings.effects_enabled);

        handle_key_event(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(app.contact.focus, FormField::Email);

        handle_key_event(&mut app, KeyCode::Esc).unwrap();
        assert!(!app.contact.editing);
        assert!(app.running);
    }

    #[test]
    fn test_form_submit_on_message_enter() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('c')).unwrap();
        handle_key_event(&mut app, KeyCode::BackTab).unwrap();
        assert_eq!(app.contact.focus, FormField::Message);

        // Empty form: error recorded, nothing sent
        handle_key_event(&mut app, KeyCode::Enter).unwrap();
        assert!(app.contact.error.is_some());
        assert!(!app.contact.is_sending());
    }

    #[test]
    fn test_repeated_submit_while_sending_is_ignored() {
        let mut app = app();
        app.contact.name = "Ada".to_string();
        app.contact.email = "ada@example.com".to_string();
        app.contact.message = "Hello".to_string();
        handle_key_event(&mut app, KeyCode::Char('c')).unwrap();
        handle_key_event(&mut app, KeyCode::BackTab).unwrap();

        handle_key_event(&mut app, KeyCode::Enter).unwrap();
        assert!(app.contact.is_sending());

        handle_key_event(&mut app, KeyCode::Enter).unwrap();
        assert!(app.contact.is_sending());
        assert_eq!(app.contact.error, None);
        assert_eq!(app.contact.focus, FormField::Message);
    }

    #[test]
    fn test_mouse_wheel_and_move() {
        let mut app = app();
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0)).unwrap();
        assert_eq!(app.page.scroll, WHEEL_STEP as u16);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 0, 0)).unwrap();
        assert_eq!(app.page.scroll, 0);

        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 12, 7)).unwrap();
        assert_eq!(app.mouse, Some((12, 7)));
    }

    #[test]
    fn test_mouse_click_opens_selector() {
        let mut app = app();
        app.selector_hitbox = Some(ratatui::layout::Rect::new(50, 0, 10, 1));
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 55, 0),
        )
        .unwrap();
        assert!(app.selector.is_open());
    }
}
