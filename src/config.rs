//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings
//! from there. This provides content width and scrolling preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 80)]
    /// Maximum column width the document is laid out at.
    pub content_width: usize,
    #[facet(default = 3)]
    /// Rows moved per arrow-key scroll.
    pub scroll_step: usize,
    #[facet(default = true)]
    /// Ease navigation jumps over a few frames instead of landing instantly.
    ///
    /// Either way the landing row is identical; this only changes how the
    /// viewport gets there.
    pub smooth_scroll: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from folio.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("folio.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
