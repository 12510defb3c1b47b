use super::{case_study, wrap, Page};
use crate::content::Profile;
use crate::section::SectionId;

#[test]
fn test_all_seven_sections_measured_in_order() {
    let page = Page::build(&Profile::bundled(), 80, 0);
    let entries = page.map.entries();

    assert_eq!(entries.len(), SectionId::ALL.len());
    for (entry, expected) in entries.iter().zip(SectionId::ALL) {
        assert_eq!(entry.0, expected);
        assert!(entry.1.height > 0, "{expected:?} rendered no rows");
    }
}

#[test]
fn test_sections_are_adjacent_with_no_gaps() {
    let page = Page::build(&Profile::bundled(), 80, 0);
    let entries = page.map.entries();

    assert_eq!(entries[0].1.top, 0);
    for pair in entries.windows(2) {
        assert_eq!(
            pair[1].1.top,
            pair[0].1.end(),
            "{:?} must start exactly where {:?} ends",
            pair[1].0,
            pair[0].0
        );
    }
}

#[test]
fn test_footer_rows_belong_to_no_section() {
    let page = Page::build(&Profile::bundled(), 80, 0);
    let last = page.map.entries().last().unwrap().1;

    assert!(
        last.end() < page.rows(),
        "footer rows must extend past the last section"
    );
}

#[test]
fn test_one_card_per_project() {
    let profile = Profile::bundled();
    let page = Page::build(&profile, 80, 0);

    assert_eq!(page.card_count, profile.projects.len());
}

#[test]
fn test_focus_changes_styling_but_not_geometry() {
    let profile = Profile::bundled();
    let unfocused = Page::build(&profile, 80, 0);
    let focused = Page::build(&profile, 80, 1);

    assert_eq!(unfocused.rows(), focused.rows());
    for (a, b) in unfocused.map.entries().iter().zip(focused.map.entries()) {
        assert_eq!(a.1, b.1);
    }
}

#[test]
fn test_narrower_width_wraps_to_more_rows() {
    let profile = Profile::bundled();
    let wide = Page::build(&profile, 100, 0);
    let narrow = Page::build(&profile, 40, 0);

    assert!(narrow.rows() > wide.rows());
}

#[test]
fn test_wrap_respects_the_column_width() {
    let rows = wrap(
        "clear documentation, user-friendly troubleshooting, and coordination",
        20,
    );

    assert!(rows.len() > 1);
    for row in &rows {
        assert!(row.chars().count() <= 20, "row too wide: {row}");
    }
}

#[test]
fn test_wrap_gives_an_overlong_word_its_own_row() {
    let rows = wrap("a supercalifragilistic b", 10);

    assert_eq!(rows, vec!["a", "supercalifragilistic", "b"]);
}

#[test]
fn test_case_study_covers_every_narrative_part() {
    let profile = Profile::bundled();
    let lines = case_study(&profile.projects[0], 60);
    let text: Vec<String> = lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect();

    for heading in [
        "INTRODUCTION",
        "PROBLEM STATEMENT",
        "OBJECTIVE",
        "METHODOLOGY",
        "RESULTS",
        "CONCLUSION",
    ] {
        assert!(
            text.iter().any(|line| line == heading),
            "case study is missing its {heading} part"
        );
    }
}
