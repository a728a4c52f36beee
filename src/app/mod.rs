// Application state management
//
// This module contains the main AppState struct and re-exports
// configuration types from the config submodule.

pub mod config;
pub mod contact;
pub mod event;
pub mod page;
pub mod selector;

// Re-export config types for convenience
pub use config::{DisplaySettings, RefreshConfig, Section};

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::effects::AmbientEffectRenderer;
use crate::theme::{ListenerId, ScopeError, ThemeHandle, ThemePalette, ThemeProvider, Weather};
use config::{FRAME_TIME_THRESHOLD_MS, SLOW_FRAME_COUNT_THRESHOLD};
use contact::ContactForm;
use page::PageState;
use selector::ModeSelector;

/// Tick interval for the title shimmer (100ms)
const TICK_INTERVAL_MS: u128 = 100;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Owner of the weather mode; everything else holds `theme`
    _provider: ThemeProvider,

    /// Handle given to every component that reads or writes the mode
    pub theme: ThemeHandle,

    /// Weather dropdown, the only writer of the mode
    pub selector: ModeSelector,

    /// Ambient overlay, kept in sync by a theme listener
    pub ambient: Rc<RefCell<AmbientEffectRenderer>>,

    /// Registration of the overlay listener while effects are on
    ambient_listener: Option<ListenerId>,

    /// Scroll offset and navigation highlight
    pub page: PageState,

    /// Local-only contact form
    pub contact: ContactForm,

    /// Effect toggles
    pub settings: DisplaySettings,

    /// Refresh interval configuration
    pub refresh_config: RefreshConfig,

    /// Last reported pointer position (column, row)
    pub mouse: Option<(u16, u16)>,

    /// Clickable navigation entries from the last render
    pub nav_hitboxes: Vec<(Rect, Section)>,

    /// Clickable weather button from the last render
    pub selector_hitbox: Option<Rect>,

    /// Rows of the open selector list from the last render
    pub menu_hitboxes: Vec<(Rect, Weather)>,

    /// Shimmer phase for gradient text (0.0 ~ 1.0)
    pub pulse_phase: f32,

    /// Last tick time for the shimmer
    last_tick: Instant,

    /// Counter for consecutive slow frames (frame time > 100ms)
    slow_frame_count: u32,

    /// Whether animation complexity has been auto-reduced due to performance
    /// When true, ambient effects draw fewer particles
    pub animation_reduced: bool,
}

impl AppState {
    /// Create the state with the default weather and wire the ambient
    /// overlay to mode changes
    pub fn new() -> Result<Self, ScopeError> {
        let now = Instant::now();
        let provider = ThemeProvider::new();
        let theme = provider.handle();

        let ambient = Rc::new(RefCell::new(AmbientEffectRenderer::new(theme.mode()?)));
        let ambient_listener = Some(subscribe_ambient(&theme, &ambient)?);

        Ok(Self {
            running: true,
            _provider: provider,
            theme,
            selector: ModeSelector::new(),
            ambient,
            ambient_listener,
            page: PageState::new(),
            contact: ContactForm::new(),
            settings: DisplaySettings::default(),
            refresh_config: RefreshConfig::new(),
            mouse: None,
            nav_hitboxes: Vec::new(),
            selector_hitbox: None,
            menu_hitboxes: Vec::new(),
            pulse_phase: 0.0,
            last_tick: now,
            slow_frame_count: 0,
            animation_reduced: false,
        })
    }

    /// Current weather mode
    #[cfg(test)]
    pub fn weather(&self) -> Result<Weather, ScopeError> {
        self.theme.mode()
    }

    /// Palette for this frame; read once and shared by every section
    pub fn palette(&self) -> Result<&'static ThemePalette, ScopeError> {
        self.theme.palette()
    }

    /// Update state on each loop iteration
    pub fn on_tick(&mut self) {
        let now = Instant::now();

        let elapsed_tick = now.duration_since(self.last_tick).as_millis();
        if elapsed_tick >= TICK_INTERVAL_MS {
            self.last_tick = now;
            self.pulse_phase += 0.02;
            if self.pulse_phase >= 1.0 {
                self.pulse_phase = 0.0;
            }
        }

        self.contact.on_tick(now);
    }

    /// Open or close the weather dropdown
    pub fn toggle_selector(&mut self) -> Result<(), ScopeError> {
        self.selector.toggle(&self.theme)
    }

    /// Pick a weather mode through the selector
    pub fn choose_weather(&mut self, weather: Weather) -> Result<bool, ScopeError> {
        self.selector.select(weather, &self.theme)
    }

    /// Toggle the ambient overlay
    ///
    /// A disabled overlay stops listening to mode changes; enabling it again
    /// catches up with the current mode before mounting.
    pub fn toggle_effects(&mut self) -> Result<(), ScopeError> {
        self.settings.effects_enabled = !self.settings.effects_enabled;

        if self.settings.effects_enabled {
            let weather = self.theme.mode()?;
            {
                let mut ambient = self.ambient.borrow_mut();
                ambient.sync(weather);
                ambient.set_enabled(true);
            }
            if self.ambient_listener.is_none() {
                self.ambient_listener = Some(subscribe_ambient(&self.theme, &self.ambient)?);
            }
        } else {
            if let Some(id) = self.ambient_listener.take() {
                self.theme.unsubscribe(id)?;
            }
            self.ambient.borrow_mut().set_enabled(false);
        }
        tracing::debug!(
            enabled = self.settings.effects_enabled,
            listeners = self.theme.listener_count()?,
            "Ambient effects toggled"
        );

        // Give full particle counts another chance after a manual toggle
        self.reset_animation_reduction();
        Ok(())
    }

    /// Start typing into the contact form
    pub fn edit_contact_form(&mut self) {
        self.page.jump_to(Section::Contact);
        self.contact.begin_editing();
    }

    /// Handle a click at (column, row)
    pub fn click(&mut self, column: u16, row: u16) -> Result<(), ScopeError> {
        let hit = |rect: &Rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        };

        if self.selector.is_open() {
            let option = self
                .menu_hitboxes
                .iter()
                .find(|(rect, _)| hit(rect))
                .map(|(_, weather)| *weather);
            if let Some(weather) = option {
                self.choose_weather(weather)?;
                return Ok(());
            }
        }
        if self.selector_hitbox.as_ref().is_some_and(hit) {
            return self.toggle_selector();
        }
        if let Some(section) = self
            .nav_hitboxes
            .iter()
            .find(|(rect, _)| hit(rect))
            .map(|(_, section)| *section)
        {
            self.selector.close();
            self.page.jump_to(section);
        }
        Ok(())
    }

    /// Increase refresh rate (decrease interval, clamp to minimum)
    pub fn increase_refresh_rate(&mut self) {
        let new_interval = self
            .refresh_config
            .refresh_ms
            .saturating_sub(config::REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.max(config::MIN_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }

    /// Decrease refresh rate (increase interval, clamp to maximum)
    pub fn decrease_refresh_rate(&mut self) {
        let new_interval = self
            .refresh_config
            .refresh_ms
            .saturating_add(config::REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.min(config::MAX_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }

    /// Update frame time tracking and auto-reduce animation complexity if needed
    ///
    /// `render_time` covers the draw call only, never the event poll wait. If it
    /// exceeds FRAME_TIME_THRESHOLD_MS for SLOW_FRAME_COUNT_THRESHOLD frames in
    /// a row, ambient effects switch to reduced particle counts.
    pub fn update_frame_time(&mut self, render_time: Duration) {
        let frame_time = render_time.as_millis();

        if frame_time > FRAME_TIME_THRESHOLD_MS {
            self.slow_frame_count += 1;

            if self.slow_frame_count >= SLOW_FRAME_COUNT_THRESHOLD && !self.animation_reduced {
                self.animation_reduced = true;
                tracing::warn!(
                    frame_time_ms = frame_time,
                    slow_frame_count = self.slow_frame_count,
                    "Auto-reducing ambient effect complexity due to slow frame times"
                );
            }
        } else if !self.animation_reduced {
            self.slow_frame_count = 0;
        }
    }

    /// Reset animation complexity reduction
    pub fn reset_animation_reduction(&mut self) {
        self.animation_reduced = false;
        self.slow_frame_count = 0;
    }
}

/// Keep the overlay on the effect of the current mode
fn subscribe_ambient(
    theme: &ThemeHandle,
    ambient: &Rc<RefCell<AmbientEffectRenderer>>,
) -> Result<ListenerId, ScopeError> {
    let sink = Rc::clone(ambient);
    theme.subscribe(move |weather, _| sink.borrow_mut().sync(weather))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectKind;
    use proptest::prelude::*;

    fn any_weather() -> impl Strategy<Value = Weather> {
        prop_oneof![
            Just(Weather::Winter),
            Just(Weather::Summer),
            Just(Weather::Rain),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// The overlay always matches the mode after any sequence of choices
        #[test]
        fn prop_ambient_tracks_weather(choices in proptest::collection::vec(any_weather(), 0..12)) {
            let mut app = AppState::new().unwrap();
            for weather in choices {
                app.choose_weather(weather).unwrap();
                prop_assert_eq!(app.ambient.borrow().kind(), EffectKind::for_weather(weather));
                prop_assert_eq!(app.palette().unwrap().weather, weather);
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let app = AppState::new().unwrap();
        assert!(app.running);
        assert_eq!(app.weather(), Ok(Weather::Winter));
        assert_eq!(app.ambient.borrow().kind(), EffectKind::Snow);
        assert!(!app.selector.is_open());
    }

    #[test]
    fn test_winter_to_summer_swaps_effect() {
        let mut app = AppState::new().unwrap();
        assert_eq!(app.choose_weather(Weather::Summer), Ok(true));
        assert_eq!(app.weather(), Ok(Weather::Summer));
        assert_eq!(app.ambient.borrow().kind(), EffectKind::Sun);
        assert_eq!(app.ambient.borrow().mount_count(), 2);
    }

    #[test]
    fn test_toggle_effects() {
        let mut app = AppState::new().unwrap();
        assert_eq!(app.theme.listener_count(), Ok(1));

        app.toggle_effects().unwrap();
        assert!(!app.settings.effects_enabled);
        assert_eq!(app.ambient.borrow().kind(), EffectKind::None);
        assert_eq!(app.theme.listener_count(), Ok(0));

        app.toggle_effects().unwrap();
        assert_eq!(app.ambient.borrow().kind(), EffectKind::Snow);
        assert_eq!(app.theme.listener_count(), Ok(1));
    }

    #[test]
    fn test_reenabled_effects_catch_up_with_mode() {
        let mut app = AppState::new().unwrap();
        app.toggle_effects().unwrap();
        app.choose_weather(Weather::Rain).unwrap();
        assert_eq!(app.ambient.borrow().kind(), EffectKind::None);

        app.toggle_effects().unwrap();
        assert_eq!(app.ambient.borrow().kind(), EffectKind::Rain);
        assert!(app.ambient.borrow().is_enabled());
    }

    #[test]
    fn test_refresh_rate_clamps() {
        let mut app = AppState::new().unwrap();
        for _ in 0..200 {
            app.increase_refresh_rate();
        }
        assert_eq!(app.refresh_config.refresh_ms, config::MIN_REFRESH_MS);
        for _ in 0..200 {
            app.decrease_refresh_rate();
        }
        assert_eq!(app.refresh_config.refresh_ms, config::MAX_REFRESH_MS);
        assert!(app.refresh_config.recently_changed(Instant::now()));
    }

    #[test]
    fn test_click_on_hitboxes() {
        let mut app = AppState::new().unwrap();
        app.page.set_layout(vec![0, 10, 20, 30, 40, 50, 60, 70, 80], 200, 20);
        app.nav_hitboxes = vec![(Rect::new(10, 1, 8, 1), Section::Skills)];
        app.selector_hitbox = Some(Rect::new(60, 1, 12, 1));

        app.click(12, 1).unwrap();
        assert_eq!(app.page.active, Section::Skills);
        assert_eq!(app.page.scroll, 20);

        app.click(65, 1).unwrap();
        assert!(app.selector.is_open());

        // Clicking empty space does nothing
        app.click(0, 10).unwrap();
        assert!(app.selector.is_open());

        app.menu_hitboxes = vec![
            (Rect::new(56, 3, 16, 1), Weather::Winter),
            (Rect::new(56, 4, 16, 1), Weather::Summer),
        ];
        app.click(60, 4).unwrap();
        assert_eq!(app.weather(), Ok(Weather::Summer));
        assert!(!app.selector.is_open());
    }

    #[test]
    fn test_edit_contact_form_jumps_to_contact() {
        let mut app = AppState::new().unwrap();
        app.edit_contact_form();
        assert!(app.contact.editing);
        assert_eq!(app.page.active, Section::Contact);
    }

    fn slow_frame() -> Duration {
        Duration::from_millis(FRAME_TIME_THRESHOLD_MS as u64 + 20)
    }

    #[test]
    fn test_consecutive_slow_frames_reduce_animation() {
        let mut app = AppState::new().unwrap();
        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD - 1 {
            app.update_frame_time(slow_frame());
        }
        assert!(!app.animation_reduced);

        app.update_frame_time(slow_frame());
        assert!(app.animation_reduced);

        // Once reduced, fast frames do not restore full counts on their own
        app.update_frame_time(Duration::from_millis(1));
        assert!(app.animation_reduced);
    }

    #[test]
    fn test_fast_frame_resets_slow_streak() {
        let mut app = AppState::new().unwrap();
        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD - 1 {
            app.update_frame_time(slow_frame());
        }
        app.update_frame_time(Duration::from_millis(5));
        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD - 1 {
            app.update_frame_time(slow_frame());
        }
        assert!(!app.animation_reduced);
    }

    #[test]
    fn test_slow_refresh_interval_is_not_a_slow_frame() {
        let mut app = AppState::new().unwrap();
        for _ in 0..200 {
            app.decrease_refresh_rate();
        }
        assert!(app.refresh_config.ui_interval().as_millis() > FRAME_TIME_THRESHOLD_MS);

        // Idle waits between frames are long, but every render is quick
        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD * 3 {
            app.update_frame_time(Duration::from_millis(3));
        }
        assert!(!app.animation_reduced);
    }

    #[test]
    fn test_toggle_effects_clears_reduction() {
        let mut app = AppState::new().unwrap();
        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD {
            app.update_frame_time(slow_frame());
        }
        assert!(app.animation_reduced);

        app.toggle_effects().unwrap();
        assert!(!app.animation_reduced);
        app.update_frame_time(slow_frame());
        assert!(!app.animation_reduced);
    }

    #[test]
    fn test_effects_toggle_persists_across_ticks() {
        let mut app = AppState::new().unwrap();
        app.toggle_effects().unwrap();
        for _ in 0..10 {
            app.on_tick();
        }
        assert!(!app.settings.effects_enabled);
        assert_eq!(app.ambient.borrow().kind(), EffectKind::None);
    }
}
