//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_engine::{
    App, AppOptions, ClipboardError, ClipboardService, LaunchError, LinkLauncher, ProjectId,
    Services,
};

pub const LOANS: ProjectId = ProjectId::new("loans");
pub const QUIZ: ProjectId = ProjectId::new("psymetrics");
pub const DASHBOARD: ProjectId = ProjectId::new("apicella");
pub const STORE: ProjectId = ProjectId::new("ecommerce");
pub const CALCULATOR: ProjectId = ProjectId::new("ai-calculator");

/// Clipboard that records every copy and optionally refuses it.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    copies: Arc<Mutex<Vec<String>>>,
    broken: bool,
}

impl FakeClipboard {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }
}

impl ClipboardService for FakeClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.copies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeLauncher {
    opened: Arc<Mutex<Vec<String>>>,
}

impl FakeLauncher {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkLauncher for FakeLauncher {
    fn open(&mut self, url: &str) -> Result<(), LaunchError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub struct TestApp {
    pub app: App,
    pub clipboard: FakeClipboard,
    pub fallback: FakeClipboard,
    pub launcher: FakeLauncher,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(AppOptions::default(), FakeClipboard::default())
    }

    pub fn with(options: AppOptions, clipboard: FakeClipboard) -> Self {
        let fallback = FakeClipboard::default();
        let launcher = FakeLauncher::default();
        let services = Services::new(
            Box::new(clipboard.clone()),
            Box::new(fallback.clone()),
            Box::new(launcher.clone()),
        );
        let mut app = App::new(options, services);
        // About, Skills, Projects, Contact on a 20 row viewport.
        app.set_page_layout([0, 12, 30, 70], 90, 20);
        Self {
            app,
            clipboard,
            fallback,
            launcher,
        }
    }

    /// Feed key presses through the same routing the terminal loop uses.
    pub fn press(&mut self, codes: &[KeyCode]) -> &mut Self {
        for &code in codes {
            folio_tui::apply_key(&mut self.app, key(code));
        }
        self
    }

    pub fn type_str(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            folio_tui::apply_key(&mut self.app, key(KeyCode::Char(ch)));
        }
        self
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
