// Application configuration types
//
// This module contains configuration structs and enums for:
// - Page sections and navigation
// - Display settings (ambient effects)
// - Refresh intervals
// - Frame time thresholds

use std::time::{Duration, Instant};

// ============================================================================
// Constants
// ============================================================================

/// Minimum refresh interval in milliseconds
pub const MIN_REFRESH_MS: u64 = 16;

/// Maximum refresh interval in milliseconds
pub const MAX_REFRESH_MS: u64 = 1000;

/// Refresh interval adjustment step in milliseconds
pub const REFRESH_STEP: u64 = 16;

/// Default refresh interval (~30 fps, smooth enough for rain)
pub const DEFAULT_REFRESH_MS: u64 = 33;

/// Duration to highlight recently changed refresh intervals
pub const CHANGE_HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

/// Rows below the top of the viewport used to decide the active section
pub const NAV_PROBE_ROWS: u16 = 4;

/// Scroll offset after which the nav bar switches to its "scrolled" style
pub const NAV_SCROLLED_ROWS: u16 = 2;

/// Simulated contact form send time
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// How long the confirmation notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Frame time threshold for auto-reducing animation complexity (100ms)
/// If frame time consistently exceeds this, particle count is reduced
pub const FRAME_TIME_THRESHOLD_MS: u128 = 100;

/// Number of consecutive slow frames before triggering complexity reduction
pub const SLOW_FRAME_COUNT_THRESHOLD: u32 = 5;

/// Environment variable naming the log file (logging is off when unset)
pub const LOG_FILE_ENV: &str = "FOLIO_LOG";

/// Environment variable holding a tracing filter directive
pub const LOG_LEVEL_ENV: &str = "FOLIO_LOG_LEVEL";

// ============================================================================
// Enums
// ============================================================================

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Engineering,
    GitHub,
    Interests,
    Contact,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Engineering,
        Section::GitHub,
        Section::Interests,
        Section::Contact,
    ];

    /// Label in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Engineering => "Engineering",
            Section::GitHub => "GitHub",
            Section::Interests => "Interests",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let idx = (self.index() + 1).min(Section::ALL.len() - 1);
        Section::ALL[idx]
    }

    pub fn previous(self) -> Self {
        Section::ALL[self.index().saturating_sub(1)]
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Visual settings toggled from the keyboard
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    /// Draw the ambient weather overlay (toggle with 'a' key)
    pub effects_enabled: bool,

    /// Draw the pointer-following glow (needs mouse reporting)
    pub cursor_glow_enabled: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            effects_enabled: true,
            cursor_glow_enabled: true,
        }
    }
}

/// Configuration for the UI refresh interval
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Refresh interval in milliseconds
    pub refresh_ms: u64,

    /// Timestamp of last interval change (for visual feedback)
    pub last_change: Option<Instant>,
}

impl RefreshConfig {
    /// Create a new RefreshConfig with default values
    pub fn new() -> Self {
        Self {
            refresh_ms: DEFAULT_REFRESH_MS,
            last_change: None,
        }
    }

    /// Get UI refresh interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    /// Whether the interval changed within CHANGE_HIGHLIGHT_DURATION
    pub fn recently_changed(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|t| now.saturating_duration_since(t) < CHANGE_HIGHLIGHT_DURATION)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}
