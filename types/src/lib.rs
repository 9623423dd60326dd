//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod ids;
mod portfolio;
mod section;
pub mod ui;

pub use ids::{MiniAppKind, ProjectId};
pub use portfolio::{
    Accent, Portfolio, Profile, Project, SkillGroup, UNAVAILABLE_SOURCE, source_snippet,
};
pub use section::Section;
