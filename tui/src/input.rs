//! Input handling for the Folio TUI.
//!
//! Terminal events are read on a blocking task and queued; the frame loop
//! drains the queue and maps each key to an [`App`] operation for the screen
//! that is showing.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_core::{
    CalculatorKey, DashboardAction, Likert, MiniApp, MiniAppAction, QuizAction, QuizPhase,
    StoreAction, StoreView,
};
use folio_engine::{App, Overlay};
use folio_types::Section;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input. Returns `true` when the application should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if apply_event(app, ev) {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the application should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    if let Event::Key(key) = event {
        apply_key(app, key);
    }
    app.should_quit()
}

/// Apply one key press to whatever screen is showing.
pub fn apply_key(app: &mut App, key: KeyEvent) {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if let Some(mini_app) = app.mini_app() {
        match mini_app_action(mini_app, key) {
            Some(action) => app.mini_app_action(action),
            None => debug!(code = ?key.code, "Unbound key in mini-app"),
        }
        return;
    }

    match app.overlay() {
        Some(Overlay::SectionMenu { .. }) => handle_section_menu(app, key),
        Some(Overlay::CodeViewer { .. }) => handle_code_viewer(app, key),
        Some(Overlay::None) | None => handle_portfolio(app, key),
    }
}

fn handle_portfolio(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_lines(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_lines(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page_down(),
        KeyCode::PageUp => app.scroll_page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_end(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(section) = Section::from_hotkey(c) {
                app.scroll_to_section(section);
            }
        }
        KeyCode::Char('m') => app.toggle_section_menu(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Tab | KeyCode::Char('l') => app.select_next_project(),
        KeyCode::BackTab | KeyCode::Char('h') => app.select_prev_project(),
        KeyCode::Enter => app.open_selected_project(),
        KeyCode::Char('v') => app.view_selected_code(),
        KeyCode::Char('e') => app.copy_email(),
        _ => {}
    }
}

fn handle_section_menu(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.section_menu_move(1),
        KeyCode::Char('k') | KeyCode::Up => app.section_menu_move(-1),
        KeyCode::Enter => app.section_menu_confirm(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(section) = Section::from_hotkey(c) {
                app.scroll_to_section(section);
            }
        }
        KeyCode::Esc | KeyCode::Char('m') => app.toggle_section_menu(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_code_viewer(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_code_viewer(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_code_viewer(-1),
        KeyCode::PageDown => app.scroll_code_viewer(10),
        KeyCode::PageUp => app.scroll_code_viewer(-10),
        KeyCode::Esc | KeyCode::Char('q' | 'v') => app.close_overlay(),
        _ => {}
    }
}

/// Map a key to an action for the open mini-app, given its current state.
#[must_use]
pub fn mini_app_action(app: &MiniApp, key: KeyEvent) -> Option<MiniAppAction> {
    match app {
        MiniApp::Calculator(_) => calculator_key(key).map(MiniAppAction::Calculator),
        MiniApp::Quiz(quiz) => quiz_action(quiz.phase(), key).map(MiniAppAction::Quiz),
        MiniApp::Dashboard(_) => dashboard_action(key).map(MiniAppAction::Dashboard),
        MiniApp::Store(store) => store_action(store.view(), key).map(MiniAppAction::Store),
    }
}

fn calculator_key(key: KeyEvent) -> Option<CalculatorKey> {
    match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')')) => {
            Some(CalculatorKey::Symbol(c))
        }
        KeyCode::Char('x') => Some(CalculatorKey::Symbol('*')),
        KeyCode::Enter | KeyCode::Char('=') => Some(CalculatorKey::Evaluate),
        KeyCode::Backspace => Some(CalculatorKey::Backspace),
        KeyCode::Delete | KeyCode::Char('c' | 'C') => Some(CalculatorKey::Clear),
        KeyCode::Esc => Some(CalculatorKey::Close),
        _ => None,
    }
}

fn quiz_action(phase: &QuizPhase, key: KeyEvent) -> Option<QuizAction> {
    if key.code == KeyCode::Esc {
        return Some(QuizAction::Exit);
    }
    match (phase, key.code) {
        (QuizPhase::Intro, KeyCode::Enter | KeyCode::Char(' ')) => Some(QuizAction::Start),
        (QuizPhase::Answering, KeyCode::Char(c @ '1'..='5')) => c
            .to_digit(10)
            .and_then(|weight| Likert::from_weight(weight as u8))
            .map(QuizAction::Answer),
        (QuizPhase::Result, KeyCode::Char('r')) => Some(QuizAction::Retake),
        (QuizPhase::Result, KeyCode::Enter | KeyCode::Char('s')) => Some(QuizAction::SaveAndExit),
        _ => None,
    }
}

fn dashboard_action(key: KeyEvent) -> Option<DashboardAction> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::SelectPrev),
        KeyCode::Char('l') | KeyCode::Esc => Some(DashboardAction::Logout),
        _ => None,
    }
}

fn store_action(view: &StoreView, key: KeyEvent) -> Option<StoreAction> {
    if key.code == KeyCode::Char('x') {
        return Some(StoreAction::Close);
    }
    match view {
        StoreView::Browsing => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(StoreAction::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(StoreAction::SelectPrev),
            KeyCode::Enter | KeyCode::Char('a') => Some(StoreAction::AddSelected),
            KeyCode::Char('f') => Some(StoreAction::CycleFilter),
            KeyCode::Char('c') => Some(StoreAction::OpenCart),
            KeyCode::Esc => Some(StoreAction::Close),
            _ => None,
        },
        StoreView::Cart => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(StoreAction::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(StoreAction::SelectPrev),
            KeyCode::Char('d') | KeyCode::Delete => Some(StoreAction::RemoveSelected),
            KeyCode::Enter => Some(StoreAction::Checkout),
            KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc => {
                Some(StoreAction::BackToShop)
            }
            _ => None,
        },
        StoreView::Checkout(_) => match key.code {
            KeyCode::Esc => Some(StoreAction::CancelCheckout),
            _ => None,
        },
        StoreView::Confirmed => match key.code {
            KeyCode::Enter => Some(StoreAction::ContinueShopping),
            KeyCode::Esc => Some(StoreAction::Close),
            _ => None,
        },
    }
}
