//! The UI renders the application state into the terminal.
//!
//! Every frame draws the sticky nav header, the visible window of the laid
//! out document, and a help bar; the menu panel and the project overlay draw
//! on top when open. The body chunk is also where the page learns its
//! content width and viewport height, so geometry always matches what is on
//! screen.

use crate::app_state::AppState;
use crate::config::Config;
use crate::layout;
use crate::section::SectionId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

/// Accent for nav highlights, matching the document's palette.
const ACCENT: Color = Color::Rgb(166, 123, 91);

/// Renders one frame of the page.
pub fn draw(f: &mut Frame, app: &mut AppState, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_body(f, app, cfg, chunks[1]);
    draw_help(f, app, chunks[2]);

    if app.menu_open {
        draw_menu(f, app, chunks[0]);
    }
    if let Some(index) = app.selected_project {
        draw_overlay(f, app, index);
    }
}

/// Sticky nav bar: name on the left, one entry per section, the active one
/// reverse-highlighted.
fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![
        Span::styled(
            app.profile.name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for id in SectionId::ALL {
        let style = if id == app.active_section {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(ACCENT)
        };
        spans.push(Span::styled(format!(" {} ", id.label()), style));
    }

    let nav = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(nav, area);
}

fn draw_body(f: &mut Frame, app: &mut AppState, cfg: &Config, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = cfg.content_width.min(usize::from(inner.width)).max(20);
    app.ensure_layout(width, usize::from(inner.height));

    let top = app.scroll.min(app.page.rows());
    let bottom = (top + usize::from(inner.height)).min(app.page.rows());
    let visible = app.page.lines[top..bottom].to_vec();
    f.render_widget(Paragraph::new(visible), inner);

    let mut scrollbar_state = ScrollbarState::new(app.max_scroll()).position(app.scroll);
    f.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area.inner(Margin::new(0, 1)),
        &mut scrollbar_state,
    );
}

/// The collapsible menu, dropped down from the header's right edge like the
/// page's narrow-viewport panel.
fn draw_menu(f: &mut Frame, app: &AppState, header: Rect) {
    let height = u16::try_from(SectionId::ALL.len() + 2).unwrap_or(u16::MAX);
    let width = 24u16.min(f.area().width);
    let x = header.x + header.width.saturating_sub(width);
    let y = header.y + header.height;
    let area = Rect::new(
        x,
        y,
        width,
        height.min(f.area().height.saturating_sub(y)),
    );

    f.render_widget(Clear, area);

    let items: Vec<ListItem> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let marker = if *id == app.active_section { "●" } else { " " };
            let style = if i == app.menu_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else if *id == app.active_section {
                Style::default().fg(ACCENT)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(format!("{marker} {}  {}", i + 1, id.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(list, area);
}

/// The case-study overlay: a centered popup over a cleared backdrop, with
/// its own scroll offset.
fn draw_overlay(f: &mut Frame, app: &mut AppState, index: usize) {
    let Some(project) = app.profile.projects.get(index).cloned() else {
        return;
    };

    let area = centered_rect(f.area(), 80, 80);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", project.title))
        .title_bottom(" Esc: close · ↑/↓: scroll ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = layout::case_study(&project, usize::from(inner.width).saturating_sub(2).max(20));
    let max_scroll =
        u16::try_from(lines.len().saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX);
    app.overlay_scroll = app.overlay_scroll.min(max_scroll);

    let body = Paragraph::new(lines).scroll((app.overlay_scroll, 0));
    f.render_widget(body, inner);
}

/// Help/status line; hints follow whichever surface has the keys.
fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = if app.selected_project.is_some() {
        "↑/↓: Scroll case study | Esc/x: Close"
    } else if app.menu_open {
        "↑/↓: Navigate | Enter: Go | 1-7: Jump | Esc/m: Close"
    } else {
        "↑/↓: Scroll | ←/→: Focus card | Enter: Open card | m: Menu | 1-7: Jump | q: Quit"
    };

    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

/// Centered sub-rectangle taking the given percentages of the parent area.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
