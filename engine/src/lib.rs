//! Application state for Folio.
//!
//! [`App`] owns the view state, routes project activations to the embedded
//! mini-apps, and drives every timer from the frame tick. It performs no
//! terminal IO; the clipboard and URL launcher are injected as [`Services`].

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::must_use_candidate)] // Accessors don't need #[must_use]

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

pub use folio_config::FolioConfig;
pub use folio_core::{
    AppSignal, Calculator, CalculatorKey, CategoryFilter, Cents, Dashboard, DashboardAction,
    DelayTimer, Likert, MiniApp, MiniAppAction, MiniAppSettings, Patient, PatientStatus,
    Personality, Product, Quiz, QuizAction, QuizPhase, Store, StoreAction, StoreView,
};
pub use folio_types::{
    Accent, MiniAppKind, Portfolio, Profile, Project, ProjectId, Section, SkillGroup,
    UNAVAILABLE_SOURCE, source_snippet,
};

mod services;
pub mod ui;

pub use services::{
    ClipboardError, ClipboardService, LaunchError, LinkLauncher, NoClipboard, Services,
    SystemLauncher,
};
pub use ui::{
    Overlay, OverlayEffect, OverlayEffectKind, PageScroll, PortfolioView, Route, Theme,
    UiOptions, ViewState,
};

/// How long the "Copied!" indicator stays up after a successful copy.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Startup options, usually derived from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub theme: Theme,
    pub ui_options: UiOptions,
    pub scrolled_threshold: u16,
    pub mini_apps: MiniAppSettings,
    pub profile: Profile,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&FolioConfig::default())
    }
}

impl AppOptions {
    #[must_use]
    pub fn from_config(config: &FolioConfig) -> Self {
        Self {
            theme: config.theme(),
            ui_options: config.ui_options(),
            scrolled_threshold: config.scrolled_threshold(),
            mini_apps: config.mini_app_settings(),
            profile: config.profile(),
        }
    }
}

pub struct App {
    portfolio: Portfolio,
    mini_app_settings: MiniAppSettings,
    view: ViewState,
    services: Services,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(options: AppOptions, services: Services) -> Self {
        let view = ViewState {
            theme: options.theme,
            ui_options: options.ui_options,
            scrolled_threshold: options.scrolled_threshold,
            ..ViewState::default()
        };
        Self {
            portfolio: Portfolio::builtin(options.profile),
            mini_app_settings: options.mini_apps,
            view,
            services,
            should_quit: false,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.view.theme
    }

    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn mini_app(&self) -> Option<&MiniApp> {
        self.view.mini_app()
    }

    pub fn open_mini_app_kind(&self) -> Option<MiniAppKind> {
        self.mini_app().map(MiniApp::kind)
    }

    pub fn portfolio_view(&self) -> Option<&PortfolioView> {
        self.view.portfolio()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.portfolio_view().map(|view| &view.overlay)
    }

    pub fn scroll_offset(&self) -> u16 {
        self.portfolio_view().map_or(0, |view| view.scroll.offset())
    }

    pub fn is_scrolled(&self) -> bool {
        self.view.is_scrolled()
    }

    pub fn copied(&self) -> bool {
        self.view.copied.is_some()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.portfolio.projects.get(self.view.selected_project)
    }

    pub fn selected_project_index(&self) -> usize {
        self.view.selected_project
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Source shown by the code viewer for `project`.
    pub fn code_snippet(project: ProjectId) -> &'static str {
        source_snippet(project).unwrap_or(UNAVAILABLE_SOURCE)
    }

    // ========================================================================
    // Mini-app host
    // ========================================================================

    /// "Live Demo" on a project card.
    pub fn open_project(&mut self, id: ProjectId) {
        if let Some(url) = self.portfolio.project(id).and_then(|p| p.external_link) {
            info!(project = %id, url, "Opening external project link");
            if let Err(err) = self.services.launcher.open(url) {
                warn!(project = %id, "Failed to open external link: {err}");
            }
            return;
        }

        let Some(kind) = MiniAppKind::from_project_id(id) else {
            warn!(project = %id, "No demo for project");
            if self.view.mini_app().is_some() {
                self.show_portfolio();
            }
            return;
        };

        info!(project = %id, app = %kind, "Opening mini-app");
        let app = MiniApp::open(kind, &self.mini_app_settings, self.view.theme);
        self.view.route = Route::MiniApp(app);
    }

    pub fn open_selected_project(&mut self) {
        if let Some(id) = self.selected_project().map(|project| project.id) {
            self.open_project(id);
        }
    }

    /// Leave the open mini-app and return to the top of the portfolio.
    pub fn close_mini_app(&mut self) {
        let Some(kind) = self.open_mini_app_kind() else {
            return;
        };
        info!(app = %kind, "Closing mini-app");
        self.show_portfolio();
    }

    pub fn mini_app_action(&mut self, action: MiniAppAction) {
        let Route::MiniApp(app) = &mut self.view.route else {
            debug!(?action, "No mini-app open; dropping action");
            return;
        };
        if app.handle(action) == AppSignal::Close {
            self.close_mini_app();
        }
    }

    fn show_portfolio(&mut self) {
        self.view.route = Route::Portfolio(PortfolioView::new());
    }

    // ========================================================================
    // Portfolio navigation
    // ========================================================================

    /// Called by the renderer with the section anchors and content height
    /// of the page it just laid out.
    pub fn set_page_layout(&mut self, anchors: [u16; 4], content_height: u16, viewport: u16) {
        if let Some(view) = self.view.portfolio_mut() {
            view.scroll.set_layout(anchors, content_height, viewport);
        }
    }

    pub fn scroll_lines(&mut self, delta: i32) {
        if let Some(view) = self.view.portfolio_mut() {
            view.scroll.scroll_by(delta);
        }
    }

    pub fn scroll_page_down(&mut self) {
        if let Some(view) = self.view.portfolio_mut() {
            view.scroll.scroll_page(true);
        }
    }

    pub fn scroll_page_up(&mut self) {
        if let Some(view) = self.view.portfolio_mut() {
            view.scroll.scroll_page(false);
        }
    }

    /// Jump to the bottom of the page.
    pub fn scroll_to_end(&mut self) {
        if let Some(view) = self.view.portfolio_mut() {
            let end = view.scroll.max_offset();
            view.scroll.scroll_to(end, true);
        }
    }

    /// Smooth scroll to the top; closes the section menu.
    pub fn scroll_to_top(&mut self) {
        let reduced_motion = self.view.ui_options.reduced_motion;
        if let Some(view) = self.view.portfolio_mut() {
            close_section_menu(view);
            view.scroll.scroll_to(0, reduced_motion);
        }
    }

    /// Smooth scroll to a section anchor; closes the section menu.
    pub fn scroll_to_section(&mut self, section: Section) {
        let reduced_motion = self.view.ui_options.reduced_motion;
        if let Some(view) = self.view.portfolio_mut() {
            close_section_menu(view);
            let target = view.scroll.anchor(section);
            debug!(section = section.label(), target, "Scrolling to section");
            view.scroll.scroll_to(target, reduced_motion);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.view.theme = self.view.theme.toggled();
        debug!(theme = %self.view.theme, "Theme toggled");
    }

    pub fn select_next_project(&mut self) {
        let count = self.portfolio.projects.len();
        if count > 0 {
            self.view.selected_project = (self.view.selected_project + 1) % count;
        }
    }

    pub fn select_prev_project(&mut self) {
        let count = self.portfolio.projects.len();
        if count > 0 {
            self.view.selected_project = (self.view.selected_project + count - 1) % count;
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn toggle_section_menu(&mut self) {
        let reduced_motion = self.view.ui_options.reduced_motion;
        let Some(view) = self.view.portfolio_mut() else {
            return;
        };
        if matches!(view.overlay, Overlay::SectionMenu { .. }) {
            close_section_menu(view);
            return;
        }
        view.overlay = Overlay::SectionMenu {
            highlighted: view.scroll.current_section(),
        };
        view.overlay_effect = if reduced_motion {
            None
        } else {
            OverlayEffect::entrance(&view.overlay)
        };
    }

    pub fn section_menu_move(&mut self, delta: isize) {
        let Some(view) = self.view.portfolio_mut() else {
            return;
        };
        if let Overlay::SectionMenu { highlighted } = &mut view.overlay {
            let count = Section::ALL.len() as isize;
            let next = (highlighted.index() as isize + delta).rem_euclid(count);
            *highlighted = Section::ALL[next as usize];
        }
    }

    /// Scroll to the highlighted section of an open section menu.
    pub fn section_menu_confirm(&mut self) {
        let highlighted = match self.overlay() {
            Some(Overlay::SectionMenu { highlighted }) => *highlighted,
            _ => return,
        };
        self.scroll_to_section(highlighted);
    }

    /// "View Code" on a project card.
    pub fn open_code_viewer(&mut self, project: ProjectId) {
        let reduced_motion = self.view.ui_options.reduced_motion;
        let Some(view) = self.view.portfolio_mut() else {
            return;
        };
        debug!(project = %project, "Opening code viewer");
        view.overlay = Overlay::CodeViewer { project, scroll: 0 };
        view.overlay_effect = if reduced_motion {
            None
        } else {
            OverlayEffect::entrance(&view.overlay)
        };
    }

    pub fn view_selected_code(&mut self) {
        if let Some(id) = self.selected_project().map(|project| project.id) {
            self.open_code_viewer(id);
        }
    }

    pub fn scroll_code_viewer(&mut self, delta: i32) {
        let Some(view) = self.view.portfolio_mut() else {
            return;
        };
        if let Overlay::CodeViewer { project, scroll } = &mut view.overlay {
            let max = Self::code_snippet(*project).lines().count().saturating_sub(1);
            let max = i32::try_from(max).unwrap_or(i32::MAX);
            *scroll = (i32::from(*scroll) + delta).clamp(0, max) as u16;
        }
    }

    pub fn close_overlay(&mut self) {
        if let Some(view) = self.view.portfolio_mut() {
            view.overlay = Overlay::None;
            view.overlay_effect = None;
        }
    }

    // ========================================================================
    // Contact
    // ========================================================================

    /// Copy the contact email, falling back to the secondary clipboard.
    pub fn copy_email(&mut self) {
        let email = self.portfolio.profile.email.clone();
        let copied = match self.services.clipboard.copy(&email) {
            Ok(()) => true,
            Err(err) => {
                warn!("Clipboard copy failed, trying fallback: {err}");
                match self.services.fallback_clipboard.copy(&email) {
                    Ok(()) => true,
                    Err(err) => {
                        warn!("Fallback clipboard copy failed: {err}");
                        false
                    }
                }
            }
        };
        if copied {
            debug!("Email copied");
            self.view.copied = Some(DelayTimer::new(COPIED_INDICATOR_DURATION));
        }
    }

    // ========================================================================
    // Timers
    // ========================================================================

    /// Advance all timers by the wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(delta);
    }

    /// Advance all timers by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(timer) = &mut self.view.copied
            && timer.advance(delta)
        {
            self.view.copied = None;
        }

        match &mut self.view.route {
            Route::MiniApp(app) => app.tick(delta),
            Route::Portfolio(view) => {
                view.scroll.advance(delta);
                if let Some(effect) = &mut view.overlay_effect
                    && !effect.step(delta)
                {
                    view.overlay_effect = None;
                }
            }
        }
    }
}

fn close_section_menu(view: &mut PortfolioView) {
    if matches!(view.overlay, Overlay::SectionMenu { .. }) {
        view.overlay = Overlay::None;
        view.overlay_effect = None;
    }
}
