//! View state for rendering.
//!
//! One structure owns what is on screen. The route decides between the
//! portfolio page and a mini-app; the portfolio's overlay and scroll live
//! inside the portfolio route, so they cannot outlive it.

use std::time::Instant;

use folio_core::{DelayTimer, MiniApp};
use folio_types::{
    ProjectId, Section,
    ui::{Theme, UiOptions},
};

use super::{OverlayEffect, PageScroll};

/// A modal drawn on top of the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Section list; `highlighted` is the row the cursor is on.
    SectionMenu { highlighted: Section },
    /// Source snippet of one project, scrolled by `scroll` lines.
    CodeViewer { project: ProjectId, scroll: u16 },
}

/// Portfolio page state. Rebuilt, scrolled to top, whenever the page is
/// shown again after a mini-app.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub overlay: Overlay,
    pub overlay_effect: Option<OverlayEffect>,
    pub scroll: PageScroll,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self {
            overlay: Overlay::None,
            overlay_effect: None,
            scroll: PageScroll::default(),
        }
    }
}

impl PortfolioView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// What occupies the screen.
#[derive(Debug, Clone)]
pub enum Route {
    Portfolio(PortfolioView),
    MiniApp(MiniApp),
}

#[derive(Debug)]
pub struct ViewState {
    pub route: Route,
    pub theme: Theme,
    /// UI options (glyphs, contrast, motion).
    pub ui_options: UiOptions,
    /// Offset past which the navigation bar is drawn as scrolled.
    pub scrolled_threshold: u16,
    /// Index of the highlighted project card. Survives mini-app visits.
    pub selected_project: usize,
    /// Pending clear of the "Copied!" indicator; `Some` while it shows.
    pub copied: Option<DelayTimer>,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            route: Route::Portfolio(PortfolioView::new()),
            theme: Theme::default(),
            ui_options: UiOptions::default(),
            scrolled_threshold: 0,
            selected_project: 0,
            copied: None,
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn portfolio(&self) -> Option<&PortfolioView> {
        match &self.route {
            Route::Portfolio(view) => Some(view),
            Route::MiniApp(_) => None,
        }
    }

    pub fn portfolio_mut(&mut self) -> Option<&mut PortfolioView> {
        match &mut self.route {
            Route::Portfolio(view) => Some(view),
            Route::MiniApp(_) => None,
        }
    }

    #[must_use]
    pub fn mini_app(&self) -> Option<&MiniApp> {
        match &self.route {
            Route::MiniApp(app) => Some(app),
            Route::Portfolio(_) => None,
        }
    }

    /// The navigation bar's "scrolled" flag.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.portfolio()
            .is_some_and(|view| view.scroll.offset() > self.scrolled_threshold)
    }
}
