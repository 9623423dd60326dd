//! Portfolio host flows driven through key routing.

use std::time::Duration;

use crossterm::event::KeyCode;
use folio_engine::ui::SMOOTH_SCROLL_DURATION;
use folio_engine::{AppOptions, MiniAppKind, Overlay, Section, Theme, UiOptions};

use crate::common::{CALCULATOR, DASHBOARD, FakeClipboard, QUIZ, STORE, TestApp, ctrl, key};

#[test]
fn enter_on_external_project_opens_link_without_leaving_portfolio() {
    let mut t = TestApp::new();
    assert_eq!(t.app.selected_project_index(), 0);

    t.press(&[KeyCode::Enter]);

    assert_eq!(
        t.launcher.opened(),
        vec!["https://preview-0nwsfzfz--loans-tracking-mobile-1.deploypad.app/".to_string()]
    );
    assert!(t.app.mini_app().is_none());
    assert!(t.app.portfolio_view().is_some());
}

#[test]
fn tab_then_enter_opens_the_selected_demo() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Tab, KeyCode::Enter]);

    assert_eq!(t.app.open_mini_app_kind(), Some(MiniAppKind::Quiz));
    assert!(t.app.portfolio_view().is_none());
    assert!(t.launcher.opened().is_empty());
}

#[test]
fn every_embedded_project_opens_its_demo() {
    for (id, kind) in [
        (QUIZ, MiniAppKind::Quiz),
        (DASHBOARD, MiniAppKind::Dashboard),
        (STORE, MiniAppKind::Store),
        (CALCULATOR, MiniAppKind::Calculator),
    ] {
        let mut t = TestApp::new();
        t.app.open_project(id);
        assert_eq!(t.app.open_mini_app_kind(), Some(kind), "{id}");
        t.press(&[KeyCode::Esc]);
        assert!(t.app.mini_app().is_none(), "{id} should close on Esc");
    }
}

#[test]
fn closing_a_demo_returns_to_top_of_page() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('G')]);
    assert_eq!(t.app.scroll_offset(), 70);

    t.app.open_project(CALCULATOR);
    t.press(&[KeyCode::Esc]);

    assert!(t.app.mini_app().is_none());
    assert_eq!(t.app.scroll_offset(), 0);
    assert_eq!(t.app.overlay(), Some(&Overlay::None));
}

#[test]
fn opening_a_demo_closes_any_overlay() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('m')]);
    assert!(matches!(t.app.overlay(), Some(Overlay::SectionMenu { .. })));

    t.app.open_project(STORE);
    t.press(&[KeyCode::Char('x')]);

    assert_eq!(t.app.overlay(), Some(&Overlay::None));
}

#[test]
fn selection_survives_a_demo_visit() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
    assert_eq!(t.app.open_mini_app_kind(), Some(MiniAppKind::Dashboard));

    t.press(&[KeyCode::Char('l')]);

    assert!(t.app.mini_app().is_none());
    assert_eq!(t.app.selected_project().map(|p| p.id), Some(DASHBOARD));
}

#[test]
fn project_selection_wraps_both_ways() {
    let mut t = TestApp::new();
    let count = t.app.portfolio().projects.len();

    t.press(&[KeyCode::BackTab]);
    assert_eq!(t.app.selected_project_index(), count - 1);
    t.press(&[KeyCode::Tab]);
    assert_eq!(t.app.selected_project_index(), 0);
}

#[test]
fn number_keys_smooth_scroll_to_sections() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('3')]);
    assert_eq!(t.app.scroll_offset(), 0);

    t.app.advance(SMOOTH_SCROLL_DURATION);
    assert_eq!(t.app.scroll_offset(), 30);
    assert_eq!(
        t.app.portfolio_view().map(|v| v.scroll.current_section()),
        Some(Section::Projects)
    );

    t.press(&[KeyCode::Char('g')]);
    t.app.advance(SMOOTH_SCROLL_DURATION);
    assert_eq!(t.app.scroll_offset(), 0);
}

#[test]
fn reduced_motion_jumps_immediately() {
    let options = AppOptions {
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..AppOptions::default()
    };
    let mut t = TestApp::with(options, FakeClipboard::default());

    t.press(&[KeyCode::Char('4')]);

    assert_eq!(t.app.scroll_offset(), 70);
}

#[test]
fn manual_scroll_interrupts_smooth_scroll() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('4')]);
    t.app.advance(Duration::from_millis(50));
    let mid = t.app.scroll_offset();
    assert!(mid > 0 && mid < 70, "mid-animation offset was {mid}");

    t.press(&[KeyCode::Char('j')]);
    t.app.advance(SMOOTH_SCROLL_DURATION);

    assert_eq!(t.app.scroll_offset(), mid + 1);
}

#[test]
fn paging_keeps_two_lines_of_overlap() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::PageDown]);
    assert_eq!(t.app.scroll_offset(), 18);
    t.press(&[KeyCode::Char(' ')]);
    assert_eq!(t.app.scroll_offset(), 36);
    t.press(&[KeyCode::PageUp]);
    assert_eq!(t.app.scroll_offset(), 18);
}

#[test]
fn section_menu_navigates_and_scrolls() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('m')]);
    assert_eq!(
        t.app.overlay(),
        Some(&Overlay::SectionMenu {
            highlighted: Section::About
        })
    );

    t.press(&[KeyCode::Char('k')]);
    assert_eq!(
        t.app.overlay(),
        Some(&Overlay::SectionMenu {
            highlighted: Section::Contact
        })
    );

    t.press(&[KeyCode::Char('k'), KeyCode::Enter]);
    assert_eq!(t.app.overlay(), Some(&Overlay::None));

    t.app.advance(SMOOTH_SCROLL_DURATION);
    assert_eq!(t.app.scroll_offset(), 30);
}

#[test]
fn section_menu_escape_leaves_scroll_alone() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('j'), KeyCode::Char('m'), KeyCode::Esc]);

    assert_eq!(t.app.overlay(), Some(&Overlay::None));
    assert_eq!(t.app.scroll_offset(), 1);
}

#[test]
fn code_viewer_opens_for_selected_project_and_closes() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Tab, KeyCode::Char('v')]);

    assert_eq!(
        t.app.overlay(),
        Some(&Overlay::CodeViewer {
            project: QUIZ,
            scroll: 0
        })
    );

    // Keys go to the viewer, not the page.
    t.press(&[KeyCode::Char('q')]);
    assert!(!t.app.should_quit());
    assert_eq!(t.app.overlay(), Some(&Overlay::None));
}

#[test]
fn code_viewer_scroll_stays_within_snippet() {
    let mut t = TestApp::new();
    t.app.open_code_viewer(CALCULATOR);
    for _ in 0..500 {
        t.press(&[KeyCode::Char('j')]);
    }

    let lines = folio_engine::App::code_snippet(CALCULATOR).lines().count();
    match t.app.overlay() {
        Some(Overlay::CodeViewer { scroll, .. }) => {
            assert!(usize::from(*scroll) < lines.max(1));
        }
        other => panic!("expected code viewer, got {other:?}"),
    }
}

#[test]
fn copy_email_sets_indicator_until_it_expires() {
    let mut t = TestApp::new();
    t.press(&[KeyCode::Char('e')]);

    let email = t.app.portfolio().profile.email.clone();
    assert_eq!(t.clipboard.copies(), vec![email]);
    assert!(t.fallback.copies().is_empty());
    assert!(t.app.copied());

    t.app.advance(Duration::from_millis(1999));
    assert!(t.app.copied());
    t.app.advance(Duration::from_millis(1));
    assert!(!t.app.copied());
}

#[test]
fn copy_email_falls_back_when_system_clipboard_fails() {
    let mut t = TestApp::with(AppOptions::default(), FakeClipboard::broken());
    t.press(&[KeyCode::Char('e')]);

    assert!(t.clipboard.copies().is_empty());
    assert_eq!(
        t.fallback.copies(),
        vec![t.app.portfolio().profile.email.clone()]
    );
    assert!(t.app.copied());
}

#[test]
fn theme_toggle_flips_and_returns() {
    let options = AppOptions {
        theme: Theme::Dark,
        ..AppOptions::default()
    };
    let mut t = TestApp::with(options, FakeClipboard::default());

    t.press(&[KeyCode::Char('t')]);
    assert_eq!(t.app.theme(), Theme::Light);
    t.press(&[KeyCode::Char('t')]);
    assert_eq!(t.app.theme(), Theme::Dark);
}

#[test]
fn q_quits_from_portfolio_but_not_from_a_demo() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);
    t.press(&[KeyCode::Char('q')]);
    assert!(!t.app.should_quit());

    t.press(&[KeyCode::Esc, KeyCode::Char('q')]);
    assert!(t.app.should_quit());
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);
    folio_tui::apply_key(&mut t.app, ctrl('c'));
    assert!(t.app.should_quit());

    let mut t = TestApp::new();
    folio_tui::apply_key(&mut t.app, key(KeyCode::Char('c')));
    assert!(!t.app.should_quit());
}
