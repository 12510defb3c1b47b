use super::active_section;
use crate::layout::PageMap;
use crate::section::{SectionGeometry, SectionId};

fn hero_summary_map() -> PageMap {
    PageMap::from_entries(vec![
        (SectionId::Hero, SectionGeometry { top: 0, height: 800 }),
        (
            SectionId::Summary,
            SectionGeometry {
                top: 800,
                height: 800,
            },
        ),
    ])
}

#[test]
fn test_positions_inside_a_section_activate_it() {
    let map = hero_summary_map();

    assert_eq!(active_section(0, 100, &map), Some(SectionId::Hero));
    assert_eq!(active_section(400, 100, &map), Some(SectionId::Hero));
    assert_eq!(
        active_section(750, 100, &map),
        Some(SectionId::Summary),
        "probe 750 + 100 lands inside summary"
    );
}

#[test]
fn test_boundary_row_belongs_to_the_following_section() {
    let map = hero_summary_map();

    // Probe exactly at summary's lower bound: lower inclusive, so summary.
    assert_eq!(active_section(700, 100, &map), Some(SectionId::Summary));
    // One row earlier is still hero.
    assert_eq!(active_section(699, 100, &map), Some(SectionId::Hero));
}

#[test]
fn test_no_match_yields_none_for_the_caller_to_retain() {
    let map = hero_summary_map();

    // Upper bound exclusive: the row past summary's end matches nothing.
    assert_eq!(active_section(1500, 100, &map), None);
    assert_eq!(active_section(1499, 100, &map), Some(SectionId::Summary));
}

#[test]
fn test_unmeasured_sections_are_skipped() {
    let map = PageMap::from_entries(vec![(
        SectionId::Summary,
        SectionGeometry {
            top: 800,
            height: 100,
        },
    )]);

    assert_eq!(
        active_section(0, 100, &map),
        None,
        "hero was never laid out, so it cannot become active"
    );
    assert_eq!(active_section(750, 100, &map), Some(SectionId::Summary));
}

#[test]
fn test_first_match_wins_in_page_order() {
    // Overlapping extents cannot come out of a real layout; the scan order
    // still has to be deterministic if they ever do.
    let map = PageMap::from_entries(vec![
        (
            SectionId::Hero,
            SectionGeometry {
                top: 0,
                height: 1000,
            },
        ),
        (
            SectionId::Summary,
            SectionGeometry {
                top: 800,
                height: 800,
            },
        ),
    ]);

    assert_eq!(active_section(850, 0, &map), Some(SectionId::Hero));
}
