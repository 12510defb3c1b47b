//! Scroll-driven derivation of the section currently in view.
//!
//! The active section is a pure function of (scroll position, measured
//! geometry): no hidden state, no side effects. The scroll handlers call
//! this on every change and keep their previous answer when nothing
//! matches, so the nav highlight never goes blank.

use crate::layout::PageMap;
use crate::section::SectionId;

/// Rows between the top of the body viewport and the activation probe.
///
/// The nav header sits above the document, so the section counted as active
/// is the one just under it rather than the one at the exact top edge. Same
/// compensation a fixed page banner needs, scaled to terminal rows.
pub const PROBE_OFFSET: usize = 3;

#[must_use]
/// First section, in page order, whose extent contains the probe position.
///
/// The probe position is `scroll + probe_offset`. Containment is
/// lower-inclusive and upper-exclusive, and the scan stops at the first
/// match, so adjacent sections resolve deterministically at their shared
/// boundary. Sections with no measured geometry are skipped; they can never
/// become active. Returns `None` when no section contains the probe (above
/// the first measured section, or past the end of the last), in which case
/// the caller retains its previous answer.
pub fn active_section(scroll: usize, probe_offset: usize, map: &PageMap) -> Option<SectionId> {
    let pos = scroll + probe_offset;
    SectionId::ALL
        .into_iter()
        .find(|id| map.geometry(*id).is_some_and(|g| g.contains(pos)))
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
