//! folio: a single-page personal portfolio rendered as a scrolling terminal document.
//!
//! The page is a fixed sequence of seven sections (hero, summary, experience,
//! projects, skills, education, contact) laid out once per width and scrolled
//! with the keyboard. As the viewport moves, the nav bar highlights whichever
//! section is currently in view; project cards open a full case-study overlay.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod content;
pub mod layout;
pub mod section;
pub mod tracker;
pub mod ui;
