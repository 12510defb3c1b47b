//! folio: a personal portfolio rendered as a scrolling terminal page.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, content, section, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A personal portfolio that lives in the terminal", long_about = None)]
struct Args {
    /// Section to open at: hero, summary, experience, projects, skills,
    /// education, contact
    #[arg(long, value_name = "SECTION", value_parser = parse_section)]
    section: Option<section::SectionId>,

    /// Content width in columns, overriding folio.toml
    #[arg(long, value_name = "COLS")]
    width: Option<usize>,

    /// Write the portfolio as pretty-printed JSON and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn parse_section(name: &str) -> Result<section::SectionId, String> {
    section::SectionId::from_anchor(name).ok_or_else(|| {
        format!("unknown section '{name}' (expected hero, summary, experience, projects, skills, education, or contact)")
    })
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(width) = args.width {
        cfg.content_width = width;
    }

    let profile = content::Profile::bundled();

    if let Some(path) = args.export {
        let json = serde_json::to_string_pretty(&profile).map_err(io::Error::other)?;
        std::fs::write(&path, json)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let mut state = app_state::AppState::new(profile, cfg.content_width);
    state.scroll_step = cfg.scroll_step;
    state.smooth_scroll = cfg.smooth_scroll;
    if let Some(id) = args.section {
        state.open_at(id);
    }

    run_tui(state, &cfg)
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        // While a smooth scroll is easing, advance it between input polls
        // instead of blocking on the next key.
        if app.animating() && !event::poll(Duration::from_millis(16))? {
            app.step_scroll();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if app.selected_project.is_some() {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x' | 'q') => {
                        app.dismiss_project();
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.overlay_scroll_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.overlay_scroll_down(),
                    _ => {}
                }
            } else if app.menu_open {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('m') | KeyCode::Tab => app.close_menu(),
                    KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
                    KeyCode::Enter => app.activate_menu_entry(),
                    KeyCode::Char(c @ '1'..='7') => activate_quick_link(app, c),
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(app.scroll_step),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(app.scroll_step),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
                    KeyCode::Home | KeyCode::Char('g') => app.jump_top(),
                    KeyCode::End | KeyCode::Char('G') => app.jump_end(),
                    KeyCode::Char('m') | KeyCode::Tab => app.toggle_menu(),
                    KeyCode::Left | KeyCode::Char('h') => app.focus_prev_card(),
                    KeyCode::Right | KeyCode::Char('l') => app.focus_next_card(),
                    KeyCode::Enter => app.open_focused_card(),
                    KeyCode::Char(c @ '1'..='7') => activate_quick_link(app, c),
                    _ => {}
                }
            }
        }
    }
}

/// Digits 1-7 mirror the hero quick links: jump straight to a section, and
/// close the menu if it was open.
fn activate_quick_link(app: &mut app_state::AppState, digit: char) {
    if let Some(id) = "1234567"
        .find(digit)
        .and_then(|i| section::SectionId::ALL.get(i).copied())
    {
        app.activate_nav(id);
    }
}
