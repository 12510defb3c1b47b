//! Document assembly: content in, styled rows and measured geometry out.
//!
//! The whole portfolio is laid out as one vertical sequence of lines at a
//! fixed content width, and each section's top offset and height is recorded
//! while the lines are produced, so the scroll tracker always works against
//! exactly what is on screen. Sections are adjacent with no gaps (each owns
//! its trailing padding), keeping the first-match scan deterministic at
//! boundaries. The footer renders after the last section and belongs to no
//! section at all.

use crate::content::{Profile, Project};
use crate::section::{SectionGeometry, SectionId};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Accent colour standing in for the page's brown-on-cream palette.
const ACCENT: Color = Color::Rgb(166, 123, 91);
/// Colour for hints, badges, and asset notes.
const FAINT: Color = Color::DarkGray;

/// Explicit mapping from section identifier to measured geometry.
///
/// Keyed lookups return `None` for a section that produced no rows; the
/// tracker skips such sections silently, so they can never become active.
pub struct PageMap {
    entries: Vec<(SectionId, SectionGeometry)>,
}

impl PageMap {
    #[must_use]
    /// Builds a map from already-measured entries, in page order.
    pub fn from_entries(entries: Vec<(SectionId, SectionGeometry)>) -> Self {
        Self { entries }
    }

    #[must_use]
    /// Measured extent of one section, `None` if it was never laid out.
    pub fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, geometry)| *geometry)
    }

    #[must_use]
    /// All measured sections in page order.
    pub fn entries(&self) -> &[(SectionId, SectionGeometry)] {
        &self.entries
    }
}

/// A fully laid-out portfolio document.
pub struct Page {
    /// Styled document rows, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Measured extent of every rendered section.
    pub map: PageMap,
    /// Number of project cards laid out.
    pub card_count: usize,
}

impl Page {
    #[must_use]
    #[allow(clippy::too_many_lines)]
    /// Lays out the profile at the given content width.
    ///
    /// `focused_card` selects which project card is highlighted; it changes
    /// styling only, never row counts, so geometry is stable across focus
    /// moves.
    pub fn build(profile: &Profile, width: usize, focused_card: usize) -> Self {
        let mut doc = Builder::new(width);

        doc.section(SectionId::Hero, |doc| {
            doc.blank();
            doc.text(profile.name, Style::default().add_modifier(Modifier::BOLD));
            doc.text(profile.headline, Style::default().fg(ACCENT));
            doc.push(Line::from(Span::styled(
                "─".repeat(doc.width.min(24)),
                Style::default().fg(ACCENT),
            )));
            doc.blank();
            doc.text(
                &format!("[ portrait: {} ]", profile.portrait),
                Style::default().fg(FAINT),
            );
            doc.blank();
            doc.text(
                "VIEW WORK THAT SPEAKS  — press 4",
                Style::default().add_modifier(Modifier::BOLD),
            );
            doc.text("START A CONVERSATION  — press 7", Style::default());
            doc.blank();
            let quick_links = SectionId::ALL
                .iter()
                .skip(1)
                .map(|id| id.label())
                .collect::<Vec<_>>()
                .join(" · ");
            doc.text(&format!("Jump: {quick_links}"), Style::default().fg(FAINT));
            doc.blank();
        });

        doc.section(SectionId::Summary, |doc| {
            doc.banner("SUMMARY");
            doc.text(profile.summary, Style::default());
            doc.blank();
        });

        doc.section(SectionId::Experience, |doc| {
            doc.banner("WORK EXPERIENCE");
            for role in &profile.experience {
                doc.text(
                    &format!("{} — {}", role.employer, role.title),
                    Style::default().add_modifier(Modifier::BOLD),
                );
                doc.text(role.tenure, Style::default().fg(FAINT));
                for bullet in &role.bullets {
                    doc.bullet(bullet, Style::default());
                }
                doc.blank();
            }
        });

        let mut card_count = 0;
        doc.section(SectionId::Projects, |doc| {
            doc.banner("PROJECTS");
            doc.text(profile.projects_tagline, Style::default());
            doc.blank();
            for (index, project) in profile.projects.iter().enumerate() {
                doc.card(project, index == focused_card);
                card_count += 1;
            }
            doc.text(profile.projects_outro, Style::default().fg(FAINT));
            doc.blank();
        });

        doc.section(SectionId::Skills, |doc| {
            doc.banner("SKILLS");
            doc.text(profile.skills_tagline, Style::default());
            doc.blank();
            for group in &profile.skills {
                doc.text(
                    &group.title.to_uppercase(),
                    Style::default().add_modifier(Modifier::BOLD),
                );
                for skill in &group.skills {
                    doc.bullet(skill, Style::default());
                }
                doc.blank();
            }
        });

        doc.section(SectionId::Education, |doc| {
            doc.banner("EDUCATION");
            for school in &profile.education {
                doc.text(
                    school.institution,
                    Style::default().add_modifier(Modifier::BOLD),
                );
                doc.text(school.degree, Style::default());
                doc.text(school.dates, Style::default().fg(FAINT));
                doc.blank();
            }
        });

        doc.section(SectionId::Contact, |doc| {
            doc.banner("CONTACT");
            doc.text(profile.contact_pitch, Style::default());
            doc.blank();
            for link in &profile.contact {
                doc.push(Line::from(vec![
                    Span::styled(
                        format!("  {}", link.label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", link.target), Style::default().fg(FAINT)),
                ]));
            }
            doc.blank();
        });

        // Footer lives past the last section; scrolling here keeps the
        // previous section active.
        doc.push(Line::from(Span::styled(
            "─".repeat(doc.width.min(24)),
            Style::default().fg(FAINT),
        )));
        doc.text(profile.footer, Style::default().fg(FAINT));
        doc.blank();

        Self {
            lines: doc.lines,
            map: PageMap::from_entries(doc.entries),
            card_count,
        }
    }

    #[must_use]
    /// Total document height in rows.
    pub fn rows(&self) -> usize {
        self.lines.len()
    }
}

/// Full case-study lines for the project overlay.
///
/// Mirrors the page's detail view: category and subtitle, then the titled
/// narrative parts with bulleted methodology and results.
#[must_use]
pub fn case_study(project: &Project, width: usize) -> Vec<Line<'static>> {
    let mut doc = Builder::new(width);

    doc.text(
        &format!("[{}]", project.category),
        Style::default().fg(FAINT),
    );
    doc.text(project.subtitle, Style::default().fg(ACCENT));
    doc.blank();

    for (heading, body) in [
        ("INTRODUCTION", project.introduction),
        ("PROBLEM STATEMENT", project.problem),
        ("OBJECTIVE", project.objective),
    ] {
        doc.text(heading, Style::default().add_modifier(Modifier::BOLD));
        doc.text(body, Style::default());
        doc.blank();
    }

    for (heading, items) in [
        ("METHODOLOGY", &project.methodology),
        ("RESULTS", &project.results),
    ] {
        doc.text(heading, Style::default().add_modifier(Modifier::BOLD));
        for item in items {
            doc.bullet(item, Style::default());
        }
        doc.blank();
    }

    doc.text(
        "CONCLUSION",
        Style::default().add_modifier(Modifier::BOLD),
    );
    doc.text(project.conclusion, Style::default());

    doc.lines
}

/// Accumulates styled lines and section measurements during a build.
struct Builder {
    width: usize,
    lines: Vec<Line<'static>>,
    entries: Vec<(SectionId, SectionGeometry)>,
}

impl Builder {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(20),
            lines: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Runs a section renderer and records the rows it produced.
    fn section(&mut self, id: SectionId, render: impl FnOnce(&mut Self)) {
        let top = self.lines.len();
        render(self);
        let height = self.lines.len() - top;
        self.entries.push((id, SectionGeometry { top, height }));
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Section heading with its underline, the page's h2 equivalent.
    fn banner(&mut self, title: &str) {
        self.push(Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        self.push(Line::from(Span::styled(
            "─".repeat(self.width.min(16)),
            Style::default().fg(ACCENT),
        )));
        self.blank();
    }

    /// Word-wrapped paragraph in a single style.
    fn text(&mut self, text: &str, style: Style) {
        for segment in wrap(text, self.width) {
            self.push(Line::from(Span::styled(segment, style)));
        }
    }

    /// Bulleted item with a hanging indent on wrapped rows.
    fn bullet(&mut self, text: &str, style: Style) {
        for (i, segment) in wrap(text, self.width.saturating_sub(4))
            .into_iter()
            .enumerate()
        {
            let prefix = if i == 0 { "  • " } else { "    " };
            self.push(Line::from(Span::styled(format!("{prefix}{segment}"), style)));
        }
    }

    /// One project card; the focused card carries the selection style.
    fn card(&mut self, project: &Project, focused: bool) {
        let title_style = if focused {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        self.text(
            &format!("[{}]", project.category),
            Style::default().fg(FAINT),
        );
        self.text(project.title, title_style);
        self.text(project.subtitle, Style::default().fg(ACCENT));

        // The card shows a teaser, clamped like the page's three-line
        // introduction; the overlay carries the full text.
        let teaser = wrap(project.introduction, self.width);
        let clamped = teaser.len() > 3;
        for (i, mut segment) in teaser.into_iter().take(3).enumerate() {
            if clamped && i == 2 {
                segment.push('…');
            }
            self.push(Line::from(Span::styled(segment, Style::default())));
        }

        self.text("View details ↗  (Enter)", Style::default().fg(FAINT));
        self.blank();
    }
}

/// Greedy word wrap at a column width, measured in characters.
///
/// Deterministic by construction: geometry depends on it, so the same text
/// and width must always produce the same rows. A word longer than the
/// width gets a row of its own rather than being split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= width {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
