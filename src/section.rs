//! The seven fixed regions of the portfolio page.
//!
//! Sections are static: they exist for as long as the page is on screen and
//! none are created or destroyed at runtime. Each corresponds to a region of
//! the rendered document with a measurable top offset and height, which is
//! what the scroll tracker consumes to decide which section is in view.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Identifier for one fixed region of the page.
pub enum SectionId {
    /// Name, headline, portrait, and quick links.
    Hero,
    /// One-paragraph professional summary.
    Summary,
    /// Work history, most recent first.
    Experience,
    /// Case-study cards, each opening a detail overlay.
    Projects,
    /// Skill groups by competency area.
    Skills,
    /// Degrees and institutions.
    Education,
    /// Ways to get in touch.
    Contact,
}

impl SectionId {
    /// Canonical page order, used by the tracker scan and every nav surface.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Summary,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Contact,
    ];

    #[must_use]
    /// Lowercase anchor naming this section, as accepted by `--section`.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    /// Label shown in the nav bar and menu.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    /// Resolves an anchor back to its section, `None` for unknown names.
    pub fn from_anchor(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Measured vertical extent of one rendered section, in document rows.
pub struct SectionGeometry {
    /// First document row the section occupies.
    pub top: usize,
    /// Number of rows from the section heading through its trailing padding.
    pub height: usize,
}

impl SectionGeometry {
    #[must_use]
    /// Whether a document position falls inside this section.
    ///
    /// The lower bound is inclusive and the upper bound exclusive, so two
    /// adjacent sections yield exactly one match for their shared boundary.
    pub const fn contains(self, pos: usize) -> bool {
        pos >= self.top && pos < self.top + self.height
    }

    #[must_use]
    /// First document row past the end of this section.
    pub const fn end(self) -> usize {
        self.top + self.height
    }
}
