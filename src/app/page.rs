// Page scroll and navigation state
//
// The portfolio is one tall document. The renderer reports where each section
// starts; this module tracks the scroll offset and derives which section the
// navigation bar highlights.

use super::config::{Section, NAV_PROBE_ROWS, NAV_SCROLLED_ROWS};

#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// First document row shown in the viewport
    pub scroll: u16,
    /// Document row where each section starts, in `Section::ALL` order
    section_starts: Vec<u16>,
    /// Total document height in rows
    total_rows: u16,
    /// Visible rows of the page area
    viewport_rows: u16,
    /// Highlighted navigation entry
    pub active: Section,
    /// Set by `jump_to` so a section that can't reach the top keeps the
    /// highlight until the user scrolls again
    pinned: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the document layout from the last render and re-derive the
    /// active section
    pub fn set_layout(&mut self, section_starts: Vec<u16>, total_rows: u16, viewport_rows: u16) {
        self.section_starts = section_starts;
        self.total_rows = total_rows;
        self.viewport_rows = viewport_rows;
        self.scroll = self.scroll.min(self.max_scroll());
        if !self.pinned {
            self.update_active();
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
        self.pinned = false;
        self.update_active();
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_rows.saturating_sub(2).max(1) as i32);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_rows.saturating_sub(2).max(1) as i32));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.pinned = false;
        self.update_active();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
        self.pinned = false;
        self.update_active();
    }

    /// Scroll so `section` starts at the top of the viewport
    pub fn jump_to(&mut self, section: Section) {
        if let Some(&start) = self.section_starts.get(section.index()) {
            self.scroll = start.min(self.max_scroll());
        }
        self.active = section;
        self.pinned = true;
    }

    pub fn next_section(&mut self) {
        self.jump_to(self.active.next());
    }

    pub fn previous_section(&mut self) {
        self.jump_to(self.active.previous());
    }

    /// Nav bar switches to its solid style once the page has scrolled
    pub fn is_scrolled(&self) -> bool {
        self.scroll > NAV_SCROLLED_ROWS
    }

    fn update_active(&mut self) {
        let probe = self.scroll.saturating_add(NAV_PROBE_ROWS);
        if let Some(section) = active_section_at(&self.section_starts, self.total_rows, probe) {
            self.active = section;
        }
    }
}

/// Section whose row span contains `probe`
///
/// Spans run from a section's start to the next section's start (the last
/// one to `total_rows`). Returns `None` when no span contains the probe.
pub fn active_section_at(section_starts: &[u16], total_rows: u16, probe: u16) -> Option<Section> {
    section_starts
        .iter()
        .enumerate()
        .find(|&(i, &start)| {
            let end = section_starts.get(i + 1).copied().unwrap_or(total_rows);
            start <= probe && probe < end
        })
        .and_then(|(i, _)| Section::ALL.get(i).copied())
}
