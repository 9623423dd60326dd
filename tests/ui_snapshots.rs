//! Rendering tests through a vt100 virtual terminal.


use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::Terminal;

use folio_engine::ui::{CODE_VIEWER_POP, SECTION_MENU_SLIDE};
use folio_engine::{
    App, AppOptions, NoClipboard, ProjectId, Services, SystemLauncher, Theme, UiOptions,
};

use vt100_backend::VT100Backend;

const CALCULATOR: ProjectId = ProjectId::new("ai-calculator");
const QUIZ: ProjectId = ProjectId::new("psymetrics");
const DASHBOARD: ProjectId = ProjectId::new("apicella");
const STORE: ProjectId = ProjectId::new("ecommerce");

fn app_with(options: AppOptions) -> App {
    let services = Services::new(
        Box::new(NoClipboard),
        Box::new(NoClipboard),
        Box::new(SystemLauncher),
    );
    App::new(options, services)
}

fn app() -> App {
    app_with(AppOptions {
        theme: Theme::Dark,
        ..AppOptions::default()
    })
}

fn ascii() -> AppOptions {
    AppOptions {
        ui_options: UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
        ..AppOptions::default()
    }
}

fn render(app: &mut App, width: u16, height: u16) -> Terminal<VT100Backend> {
    let mut terminal = Terminal::new(VT100Backend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| folio_tui::draw(frame, app))
        .expect("draw");
    terminal
}

fn screen(app: &mut App, width: u16, height: u16) -> String {
    render(app, width, height).backend().contents()
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for &code in codes {
        folio_tui::apply_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }
}

// ============================================================================
// Portfolio page
// ============================================================================

#[test]
fn portfolio_top_shows_hero_and_navbar() {
    let mut app = app();
    let out = screen(&mut app, 100, 40);

    assert!(out.contains("ABIGAIL CONCEPCION"), "{out}");
    assert!(out.contains("Full Stack Software Developer"));
    for label in ["About", "Skills", "Projects", "Contact"] {
        assert!(out.contains(label), "navbar missing {label}");
    }
    assert!(out.contains("quit"));
}

#[test]
fn portfolio_end_shows_contact_and_copy_hint() {
    let mut app = app();
    render(&mut app, 100, 30);
    press(&mut app, &[KeyCode::End]);
    let out = screen(&mut app, 100, 30);

    assert!(out.contains("concepcionabigail03@gmail.com"), "{out}");
    assert!(out.contains("[e] Copy"));
    assert!(out.contains("Abigail Concepcion"));
}

#[test]
fn selected_project_card_shows_actions() {
    let mut app = app_with(ascii());
    render(&mut app, 100, 30);
    press(&mut app, &[KeyCode::Tab, KeyCode::Char('3')]);
    app.advance(Duration::from_secs(1));
    let out = screen(&mut app, 100, 30);

    assert!(out.contains("> Psymetrics Platform"), "{out}");
    assert!(out.contains("[Enter] Live Demo"));
    assert!(out.contains("[v] View Code"));
}

#[test]
fn external_project_is_marked() {
    let mut app = app_with(ascii());
    render(&mut app, 100, 30);
    press(&mut app, &[KeyCode::Char('3')]);
    app.advance(Duration::from_secs(1));
    let out = screen(&mut app, 100, 30);

    assert!(out.contains("Loans Tracking Mobile ->"), "{out}");
    assert!(out.contains("[Enter] Open Link"));
}

#[test]
fn section_menu_lists_sections() {
    let mut app = app();
    render(&mut app, 100, 30);
    press(&mut app, &[KeyCode::Char('m')]);
    app.advance(SECTION_MENU_SLIDE);
    let out = screen(&mut app, 100, 30);

    assert!(out.contains("Sections"), "{out}");
    assert!(out.contains("4 Contact"));
}

#[test]
fn code_viewer_shows_numbered_source() {
    let mut app = app();
    render(&mut app, 100, 30);
    app.open_code_viewer(QUIZ);
    app.advance(CODE_VIEWER_POP);
    let out = screen(&mut app, 100, 30);

    assert!(out.contains("Psymetrics Platform : source"), "{out}");
    assert!(out.contains("Esc close"));
    assert!(out.contains(" 1 "));
}

#[test]
fn overlay_mid_animation_still_renders() {
    let mut app = app();
    render(&mut app, 100, 30);
    app.open_code_viewer(CALCULATOR);
    app.advance(Duration::from_millis(1));
    let out = screen(&mut app, 100, 30);

    assert!(out.contains("ABIGAIL CONCEPCION"));
}

#[test]
fn light_and_high_contrast_render() {
    for ui_options in [
        UiOptions::default(),
        UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        },
    ] {
        let mut app = app_with(AppOptions {
            theme: Theme::Light,
            ui_options,
            ..AppOptions::default()
        });
        let out = screen(&mut app, 80, 24);
        assert!(out.contains("ABIGAIL CONCEPCION"), "{out}");
    }
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app();
    screen(&mut app, 12, 4);
    press(&mut app, &[KeyCode::Char('m')]);
    screen(&mut app, 12, 4);
    press(&mut app, &[KeyCode::Esc]);

    for id in [CALCULATOR, QUIZ, DASHBOARD, STORE] {
        app.open_project(id);
        screen(&mut app, 12, 4);
        app.close_mini_app();
    }
}

// ============================================================================
// Mini-apps
// ============================================================================

#[test]
fn exit_bar_ascii() {
    let mut app = app_with(ascii());
    app.open_project(CALCULATOR);
    let terminal = render(&mut app, 60, 30);

    let bar = terminal.backend().row(0);
    assert_snapshot!(bar.trim_start(), @"<- Exit Demo (Esc)  |  AI Calc");
}

#[test]
fn calculator_shows_result_and_history() {
    let mut app = app();
    app.open_project(CALCULATOR);
    let out = screen(&mut app, 80, 30);
    assert!(out.contains("No calculations yet"), "{out}");

    for ch in "2+2=".chars() {
        press(&mut app, &[KeyCode::Char(ch)]);
    }
    let out = screen(&mut app, 80, 30);

    assert!(out.contains("2+2 = 4"), "{out}");
    assert!(!out.contains("No calculations yet"));
}

#[test]
fn quiz_phases_render() {
    let mut app = app();
    app.open_project(QUIZ);
    let out = screen(&mut app, 80, 30);
    assert!(out.contains("Psymetrics Personality Test"), "{out}");
    assert!(out.contains("Press Enter to start"));

    press(&mut app, &[KeyCode::Enter]);
    let out = screen(&mut app, 80, 30);
    assert!(out.contains("Question 1 of 5"), "{out}");

    for _ in 0..5 {
        press(&mut app, &[KeyCode::Char('5')]);
    }
    app.advance(Duration::from_millis(1500));
    let out = screen(&mut app, 80, 30);
    assert!(out.contains("Strategic Leader"), "{out}");
    assert!(out.contains("Score: 25 / 25"));
}

#[test]
fn dashboard_lists_patients() {
    let mut app = app();
    app.open_project(DASHBOARD);
    let out = screen(&mut app, 90, 30);

    assert!(out.contains("Apicella Health: Patient Records"), "{out}");
    assert!(out.contains("Sarah Connor"));
    assert!(out.contains("Rick Deckard"));
}

#[test]
fn store_checkout_renders_each_step() {
    let mut app = app();
    app.open_project(STORE);
    let out = screen(&mut app, 90, 30);
    assert!(out.contains("DevStore"), "{out}");
    assert!(out.contains("Dev Keyboard"));

    press(&mut app, &[KeyCode::Enter, KeyCode::Char('c')]);
    let out = screen(&mut app, 90, 30);
    assert!(out.contains("Your cart"), "{out}");
    assert!(out.contains("$150"));

    press(&mut app, &[KeyCode::Enter]);
    let out = screen(&mut app, 90, 30);
    assert!(out.contains("Processing payment of $150..."), "{out}");

    app.advance(Duration::from_secs(2));
    let out = screen(&mut app, 90, 30);
    assert!(out.contains("Order confirmed!"), "{out}");
}
