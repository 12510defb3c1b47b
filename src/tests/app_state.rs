use super::AppState;
use crate::content::Profile;
use crate::section::SectionId;

fn app() -> AppState {
    let mut app = AppState::new(Profile::bundled(), 80);
    app.ensure_layout(80, 24);
    app
}

#[test]
fn test_select_then_dismiss_round_trip() {
    let mut app = app();

    app.select_project(1);
    assert_eq!(app.selected_project, Some(1));
    assert_eq!(app.profile.projects[1].title, "Power BI Airline Dashboard");

    app.dismiss_project();
    assert_eq!(app.selected_project, None);
}

#[test]
fn test_overlay_scroll_resets_on_select() {
    let mut app = app();

    app.select_project(0);
    app.overlay_scroll_down();
    app.overlay_scroll_down();
    assert_eq!(app.overlay_scroll, 2);

    app.dismiss_project();
    app.select_project(1);
    assert_eq!(app.overlay_scroll, 0, "a fresh overlay starts at its top");
}

#[test]
fn test_menu_toggle_round_trips() {
    let mut app = app();

    assert!(!app.menu_open);
    app.toggle_menu();
    assert!(app.menu_open);
    app.toggle_menu();
    assert!(!app.menu_open);
}

#[test]
fn test_nav_activation_closes_the_menu_and_scrolls() {
    let mut app = app();
    app.smooth_scroll = false;

    app.toggle_menu();
    app.activate_nav(SectionId::Projects);

    assert!(!app.menu_open, "activating navigation closes the menu");
    let projects_top = app.page.map.geometry(SectionId::Projects).unwrap().top;
    assert_eq!(app.scroll, projects_top.min(app.max_scroll()));
    assert_eq!(app.active_section, SectionId::Projects);

    // Close is idempotent: activating with the menu already shut keeps it shut.
    app.activate_nav(SectionId::Contact);
    assert!(!app.menu_open);
}

#[test]
fn test_smooth_scroll_converges_on_the_target() {
    let mut app = app();

    app.scroll_to_section(SectionId::Education);
    assert!(app.animating());

    let expected = app
        .page
        .map
        .geometry(SectionId::Education)
        .unwrap()
        .top
        .min(app.max_scroll());
    for _ in 0..10_000 {
        if !app.animating() {
            break;
        }
        app.step_scroll();
    }

    assert!(!app.animating(), "easing must terminate");
    assert_eq!(app.scroll, expected);
}

#[test]
fn test_manual_scroll_cancels_easing() {
    let mut app = app();

    app.scroll_to_section(SectionId::Contact);
    assert!(app.animating());

    app.scroll_down(1);
    assert!(!app.animating(), "user input interrupts the glide");
}

#[test]
fn test_scroll_clamps_to_document_extent() {
    let mut app = app();

    app.scroll_down(100_000);
    assert_eq!(app.scroll, app.max_scroll());

    app.scroll_up(100_000);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_active_section_retained_past_the_last_section() {
    let mut app = AppState::new(Profile::bundled(), 80);
    // A two-row viewport lets the footer rows reach the top of the screen.
    app.ensure_layout(80, 2);
    app.smooth_scroll = false;

    app.scroll_to_section(SectionId::Contact);
    assert_eq!(app.active_section, SectionId::Contact);

    app.jump_end();
    assert_eq!(
        app.active_section,
        SectionId::Contact,
        "footer rows belong to no section, so the previous answer is kept"
    );
}

#[test]
fn test_card_focus_clamps_to_the_card_list() {
    let mut app = app();
    assert_eq!(app.page.card_count, 2);

    app.focus_prev_card();
    assert_eq!(app.focused_card, 0);

    app.focus_next_card();
    app.focus_next_card();
    app.focus_next_card();
    assert_eq!(app.focused_card, 1, "focus stops at the last card");
}

#[test]
fn test_enter_opens_the_focused_card() {
    let mut app = app();

    app.focus_next_card();
    app.open_focused_card();
    assert_eq!(app.selected_project, Some(1));
}

#[test]
fn test_menu_highlight_stays_in_range() {
    let mut app = app();

    app.toggle_menu();
    app.menu_up();
    assert_eq!(app.menu_index, 0);

    for _ in 0..20 {
        app.menu_down();
    }
    assert_eq!(app.menu_index, SectionId::ALL.len() - 1);

    app.activate_menu_entry();
    assert!(!app.menu_open);
}

#[test]
fn test_menu_opens_on_the_active_section() {
    let mut app = app();
    app.smooth_scroll = false;

    app.activate_nav(SectionId::Skills);
    app.toggle_menu();

    assert_eq!(SectionId::ALL[app.menu_index], SectionId::Skills);
}
