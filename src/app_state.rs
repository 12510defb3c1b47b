//! The single source of truth for everything the page shows.
//!
//! A TUI needs one state holder that can be interrogated and mutated as the
//! user moves around. Here that is the scroll offset with its derived active
//! section, plus the optional project overlay and the collapsible menu. Each
//! is an independent value owned by the one page-level view, and every
//! transition happens synchronously inside a key handler. The only coupling
//! between them is that activating navigation closes the menu.

use crate::content::Profile;
use crate::layout::Page;
use crate::section::SectionId;
use crate::tracker::{self, PROBE_OFFSET};

/// Bridges the embedded content, the laid-out document, and the view state.
pub struct AppState {
    /// The content being rendered; never mutated after startup.
    pub profile: Profile,
    /// The document laid out at the current width.
    pub page: Page,
    /// Width the page was last laid out at.
    page_width: usize,
    /// Card highlight the page was last laid out with.
    page_focus: usize,
    /// Top document row of the body viewport.
    pub scroll: usize,
    /// Row a smooth scroll is easing toward.
    scroll_target: Option<usize>,
    /// Rows the body viewport can show, recorded at draw time.
    pub viewport_rows: usize,
    /// Section currently in view, retained when the probe lands outside
    /// every section.
    pub active_section: SectionId,
    /// Open case-study overlay; `None` means no overlay is shown.
    pub selected_project: Option<usize>,
    /// Scroll offset inside the open overlay.
    pub overlay_scroll: u16,
    /// Whether the collapsible nav menu is showing.
    pub menu_open: bool,
    /// Highlighted entry while the menu is open.
    pub menu_index: usize,
    /// Project card the focus sits on.
    pub focused_card: usize,
    /// Rows moved per arrow-key scroll.
    pub scroll_step: usize,
    /// Whether navigation jumps ease over a few frames.
    pub smooth_scroll: bool,
}

impl AppState {
    #[must_use]
    /// Initialises the view on the first section with the page laid out at
    /// the given width.
    pub fn new(profile: Profile, width: usize) -> Self {
        let page = Page::build(&profile, width, 0);
        Self {
            profile,
            page,
            page_width: width,
            page_focus: 0,
            scroll: 0,
            scroll_target: None,
            viewport_rows: 0,
            active_section: SectionId::Hero,
            selected_project: None,
            overlay_scroll: 0,
            menu_open: false,
            menu_index: 0,
            focused_card: 0,
            scroll_step: 3,
            smooth_scroll: true,
        }
    }

    /// Re-lays the page out when the width or card highlight changed, and
    /// records the viewport height. Called once per draw, so the rebuild
    /// only happens on resize or focus moves.
    pub fn ensure_layout(&mut self, width: usize, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        if width != self.page_width || self.focused_card != self.page_focus {
            self.page = Page::build(&self.profile, width, self.focused_card);
            self.page_width = width;
            self.page_focus = self.focused_card;
        }
        self.scroll = self.scroll.min(self.max_scroll());
        self.sync_active_section();
    }

    #[must_use]
    /// Greatest top row that still fills the viewport.
    pub fn max_scroll(&self) -> usize {
        self.page.rows().saturating_sub(self.viewport_rows)
    }

    /// Recomputes the active section from the current scroll position,
    /// keeping the previous answer when the tracker has none.
    pub fn sync_active_section(&mut self) {
        if let Some(id) = tracker::active_section(self.scroll, PROBE_OFFSET, &self.page.map) {
            self.active_section = id;
        }
    }

    /// Scrolls up, cancelling any easing in flight.
    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_target = None;
        self.scroll = self.scroll.saturating_sub(rows);
        self.sync_active_section();
    }

    /// Scrolls down, cancelling any easing in flight.
    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_target = None;
        self.scroll = (self.scroll + rows).min(self.max_scroll());
        self.sync_active_section();
    }

    /// Scrolls up by one viewport.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_rows.max(1));
    }

    /// Scrolls down by one viewport.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_rows.max(1));
    }

    /// Jumps to the top of the document.
    pub fn jump_top(&mut self) {
        self.scroll_up(self.scroll);
    }

    /// Jumps to the bottom of the document.
    pub fn jump_end(&mut self) {
        self.scroll_down(self.max_scroll());
    }

    /// Scrolls so the section's first row tops the viewport.
    ///
    /// With smooth scrolling on this arms the easing; either way the landing
    /// row is the same. A section with no measured geometry is a silent
    /// no-op.
    pub fn scroll_to_section(&mut self, id: SectionId) {
        let Some(geometry) = self.page.map.geometry(id) else {
            return;
        };
        let target = geometry.top.min(self.max_scroll());
        if self.smooth_scroll && target != self.scroll {
            self.scroll_target = Some(target);
        } else {
            self.scroll = target;
            self.scroll_target = None;
            self.sync_active_section();
        }
    }

    #[must_use]
    /// Whether a smooth scroll still has rows to cover.
    pub fn animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Advances an easing scroll by one frame: a quarter of the remaining
    /// distance, at least one row, landing exactly on the target. The active
    /// section is re-derived on every step, as for any other scroll change.
    pub fn step_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        if target == self.scroll {
            self.scroll_target = None;
            return;
        }
        let step = (target.abs_diff(self.scroll) / 4).max(1);
        if target > self.scroll {
            self.scroll += step;
        } else {
            self.scroll -= step;
        }
        if self.scroll == target {
            self.scroll_target = None;
        }
        self.sync_active_section();
    }

    /// Opens the overlay on a project card.
    ///
    /// Indices only ever come from rendering the known card list, so an
    /// out-of-range index is a programming error rather than a runtime
    /// condition to handle.
    pub fn select_project(&mut self, index: usize) {
        debug_assert!(index < self.page.card_count, "card index out of range");
        self.selected_project = Some(index);
        self.overlay_scroll = 0;
    }

    /// Closes the overlay. State resets fully; nothing persists.
    pub fn dismiss_project(&mut self) {
        self.selected_project = None;
        self.overlay_scroll = 0;
    }

    /// Opens the overlay on whichever card holds the focus.
    pub fn open_focused_card(&mut self) {
        if self.page.card_count > 0 {
            self.select_project(self.focused_card);
        }
    }

    /// Moves the card focus forward, stopping at the last card.
    pub fn focus_next_card(&mut self) {
        if self.focused_card + 1 < self.page.card_count {
            self.focused_card += 1;
        }
    }

    /// Moves the card focus backward, stopping at the first card.
    pub fn focus_prev_card(&mut self) {
        self.focused_card = self.focused_card.saturating_sub(1);
    }

    /// Scrolls the open overlay up one row.
    pub fn overlay_scroll_up(&mut self) {
        self.overlay_scroll = self.overlay_scroll.saturating_sub(1);
    }

    /// Scrolls the open overlay down one row. The draw path clamps to the
    /// case-study length, which only it knows.
    pub fn overlay_scroll_down(&mut self) {
        self.overlay_scroll = self.overlay_scroll.saturating_add(1);
    }

    /// Toggles the collapsible menu; opening highlights the active section.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_index = SectionId::ALL
                .iter()
                .position(|id| *id == self.active_section)
                .unwrap_or(0);
        }
    }

    /// Closes the menu; closing an already-closed menu is a no-op.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Moves the menu highlight up, stopping at the first entry.
    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    /// Moves the menu highlight down, stopping at the last entry.
    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < SectionId::ALL.len() {
            self.menu_index += 1;
        }
    }

    /// Activates a navigation control: scrolls toward the section and closes
    /// the menu, open or not.
    pub fn activate_nav(&mut self, id: SectionId) {
        self.scroll_to_section(id);
        self.close_menu();
    }

    /// Activates the highlighted menu entry.
    pub fn activate_menu_entry(&mut self) {
        self.activate_nav(SectionId::ALL[self.menu_index]);
    }

    /// Jumps straight to a section, used for `--section` before the first
    /// draw has run.
    pub fn open_at(&mut self, id: SectionId) {
        if let Some(geometry) = self.page.map.geometry(id) {
            self.scroll = geometry.top;
            self.sync_active_section();
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
