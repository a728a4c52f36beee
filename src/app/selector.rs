// Weather selector
//
// The only writer of the weather mode. Shows the three modes as a dropdown
// and publishes the chosen one through the theme handle.

use crate::theme::{ScopeError, ThemeHandle, Weather};

/// Dropdown state for choosing the weather mode
#[derive(Debug, Clone, Default)]
pub struct ModeSelector {
    open: bool,
    /// Highlighted entry while the list is open (index into `Weather::ALL`)
    highlighted: usize,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Weather {
        Weather::ALL[self.highlighted % Weather::ALL.len()]
    }

    /// Open or close the list; opening highlights the active mode
    pub fn toggle(&mut self, handle: &ThemeHandle) -> Result<(), ScopeError> {
        if self.open {
            self.close();
        } else {
            self.highlighted = handle.mode()?.index();
            self.open = true;
        }
        Ok(())
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % Weather::ALL.len();
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = (self.highlighted + Weather::ALL.len() - 1) % Weather::ALL.len();
    }

    /// Choose `weather` and close the list
    ///
    /// Publishes exactly once when the choice differs from the active mode.
    /// Picking the active mode only closes the list. Returns whether the mode
    /// changed.
    pub fn select(&mut self, weather: Weather, handle: &ThemeHandle) -> Result<bool, ScopeError> {
        let current = handle.mode()?;
        self.close();
        if current == weather {
            return Ok(false);
        }
        handle.set_mode(weather)?;
        Ok(true)
    }

    /// Choose the highlighted entry
    pub fn confirm(&mut self, handle: &ThemeHandle) -> Result<bool, ScopeError> {
        let weather = self.highlighted();
        self.select(weather, handle)
    }
}
