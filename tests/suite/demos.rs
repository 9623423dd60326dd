//! Mini-app flows driven through key routing.

use std::time::Duration;

use crossterm::event::KeyCode;
use folio_engine::{
    AppOptions, Cents, Dashboard, MiniApp, MiniAppSettings, Personality, Quiz, QuizPhase, Store,
    StoreView,
};
use folio_core::{calculator::ERROR_DISPLAY, store::AddToCartBehavior};

use crate::common::{CALCULATOR, DASHBOARD, FakeClipboard, QUIZ, STORE, TestApp};

fn calculator(t: &TestApp) -> &folio_engine::Calculator {
    match t.app.mini_app() {
        Some(MiniApp::Calculator(calc)) => calc,
        other => panic!("expected calculator, got {other:?}"),
    }
}

fn quiz(t: &TestApp) -> &Quiz {
    match t.app.mini_app() {
        Some(MiniApp::Quiz(quiz)) => quiz,
        other => panic!("expected quiz, got {other:?}"),
    }
}

fn dashboard(t: &TestApp) -> &Dashboard {
    match t.app.mini_app() {
        Some(MiniApp::Dashboard(dashboard)) => dashboard,
        other => panic!("expected dashboard, got {other:?}"),
    }
}

fn store(t: &TestApp) -> &Store {
    match t.app.mini_app() {
        Some(MiniApp::Store(store)) => store,
        other => panic!("expected store, got {other:?}"),
    }
}

// ============================================================================
// Calculator
// ============================================================================

#[test]
fn calculator_evaluates_typed_expression() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);

    t.type_str("12+3").press(&[KeyCode::Enter]);

    assert_eq!(calculator(&t).display(), "15");
    assert_eq!(calculator(&t).history().collect::<Vec<_>>(), vec!["12+3 = 15"]);
}

#[test]
fn calculator_x_key_multiplies_and_c_clears() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);

    t.type_str("6x7=");
    assert_eq!(calculator(&t).display(), "42");

    t.type_str("c");
    assert_eq!(calculator(&t).display(), "0");
}

#[test]
fn calculator_division_by_zero_shows_infinity() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);

    t.type_str("8/0").press(&[KeyCode::Enter]);
    assert_eq!(calculator(&t).display(), "Infinity");
    assert_eq!(
        calculator(&t).history().collect::<Vec<_>>(),
        vec!["8/0 = Infinity"]
    );

    t.type_str("5").press(&[KeyCode::Enter]);
    assert_eq!(calculator(&t).display(), ERROR_DISPLAY);
    assert_eq!(calculator(&t).history().len(), 1);

    t.press(&[KeyCode::Backspace]);
    assert_eq!(calculator(&t).display(), "0");
}

#[test]
fn calculator_survives_a_pasted_wall_of_parentheses() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);

    t.type_str(&"(".repeat(5_000)).type_str("1").press(&[KeyCode::Enter]);

    assert_eq!(calculator(&t).display(), ERROR_DISPLAY);
    assert!(t.app.mini_app().is_some());
    assert!(!t.app.should_quit());
}

#[test]
fn calculator_history_keeps_most_recent_entries() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);

    for n in 1..=7 {
        t.type_str(&format!("c{n}+{n}="));
    }

    let history: Vec<_> = calculator(&t).history().collect();
    assert_eq!(history.len(), 5);
    assert_eq!(history.first(), Some(&"3+3 = 6"));
    assert_eq!(history.last(), Some(&"7+7 = 14"));
}

#[test]
fn calculator_starts_fresh_on_every_open() {
    let mut t = TestApp::new();
    t.app.open_project(CALCULATOR);
    t.type_str("2+2=");
    t.press(&[KeyCode::Esc]);

    t.app.open_project(CALCULATOR);

    assert_eq!(calculator(&t).display(), "0");
    assert_eq!(calculator(&t).history().len(), 0);
}

#[test]
fn calculator_history_cap_follows_settings() {
    let options = AppOptions {
        mini_apps: MiniAppSettings {
            calculator_history_cap: 2,
            ..MiniAppSettings::default()
        },
        ..AppOptions::default()
    };
    let mut t = TestApp::with(options, FakeClipboard::default());
    t.app.open_project(CALCULATOR);

    t.type_str("c1+1=c2+2=c3+3=");

    assert_eq!(
        calculator(&t).history().collect::<Vec<_>>(),
        vec!["2+2 = 4", "3+3 = 6"]
    );
}

// ============================================================================
// Quiz
// ============================================================================

#[test]
fn quiz_full_run_reaches_result_after_analysis() {
    let mut t = TestApp::new();
    t.app.open_project(QUIZ);
    assert_eq!(quiz(&t).phase(), &QuizPhase::Intro);

    t.press(&[KeyCode::Enter]);
    t.type_str("55555");
    assert!(matches!(quiz(&t).phase(), QuizPhase::Analyzing(_)));

    t.app.advance(Duration::from_millis(1499));
    assert!(matches!(quiz(&t).phase(), QuizPhase::Analyzing(_)));
    t.app.advance(Duration::from_millis(1));

    assert_eq!(quiz(&t).phase(), &QuizPhase::Result);
    assert_eq!(quiz(&t).score(), 25);
    assert_eq!(quiz(&t).outcome(), Some(Personality::StrategicLeader));

    t.press(&[KeyCode::Char('s')]);
    assert!(t.app.mini_app().is_none());
}

#[test]
fn quiz_outcome_thresholds() {
    for (answers, expected) in [
        ("11111", Personality::ReflectiveThinker),
        ("33333", Personality::ReflectiveThinker),
        ("43333", Personality::BalancedCollaborator),
        ("44444", Personality::BalancedCollaborator),
        ("54444", Personality::StrategicLeader),
    ] {
        let mut t = TestApp::new();
        t.app.open_project(QUIZ);
        t.press(&[KeyCode::Enter]).type_str(answers);
        t.app.advance(Duration::from_millis(1500));
        assert_eq!(quiz(&t).outcome(), Some(expected), "answers {answers}");
    }
}

#[test]
fn quiz_ignores_keys_while_analyzing() {
    let mut t = TestApp::new();
    t.app.open_project(QUIZ);
    t.press(&[KeyCode::Enter]).type_str("33333");

    t.type_str("1r");

    assert!(matches!(quiz(&t).phase(), QuizPhase::Analyzing(_)));
    assert_eq!(quiz(&t).answers().len(), 5);
}

#[test]
fn quiz_retake_returns_to_intro() {
    let mut t = TestApp::new();
    t.app.open_project(QUIZ);
    t.press(&[KeyCode::Enter]).type_str("12345");
    t.app.advance(Duration::from_millis(1500));

    t.type_str("r");

    assert_eq!(quiz(&t).phase(), &QuizPhase::Intro);
    assert!(quiz(&t).answers().is_empty());
}

#[test]
fn quiz_exit_mid_way_discards_progress() {
    let mut t = TestApp::new();
    t.app.open_project(QUIZ);
    t.press(&[KeyCode::Enter]).type_str("55");
    assert_eq!(quiz(&t).index(), 2);

    t.press(&[KeyCode::Esc]);
    assert!(t.app.mini_app().is_none());

    t.app.open_project(QUIZ);
    assert_eq!(quiz(&t).phase(), &QuizPhase::Intro);
    assert!(quiz(&t).answers().is_empty());
}

#[test]
fn quiz_closed_during_analysis_never_completes() {
    let mut t = TestApp::new();
    t.app.open_project(QUIZ);
    t.press(&[KeyCode::Enter]).type_str("55555");
    t.press(&[KeyCode::Esc]);

    t.app.advance(Duration::from_secs(5));

    assert!(t.app.mini_app().is_none());
    assert!(t.app.portfolio_view().is_some());
}

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn dashboard_selection_is_clamped() {
    let mut t = TestApp::new();
    t.app.open_project(DASHBOARD);
    let count = dashboard(&t).records().len();

    for _ in 0..count + 3 {
        t.press(&[KeyCode::Char('j')]);
    }
    assert_eq!(dashboard(&t).selected(), Some(count - 1));

    for _ in 0..count + 3 {
        t.press(&[KeyCode::Up]);
    }
    assert_eq!(dashboard(&t).selected(), Some(0));
}

#[test]
fn dashboard_logout_closes() {
    let mut t = TestApp::new();
    t.app.open_project(DASHBOARD);
    t.press(&[KeyCode::Char('l')]);
    assert!(t.app.mini_app().is_none());
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn store_add_checkout_and_continue() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);

    t.press(&[KeyCode::Enter, KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(store(&t).view(), &StoreView::Browsing);
    assert_eq!(store(&t).cart_len(), 2);

    t.press(&[KeyCode::Char('c')]);
    assert_eq!(store(&t).view(), &StoreView::Cart);
    assert_eq!(store(&t).total(), Cents::dollars(450));

    t.press(&[KeyCode::Enter]);
    assert!(matches!(store(&t).view(), StoreView::Checkout(_)));

    t.app.advance(Duration::from_millis(1999));
    assert!(matches!(store(&t).view(), StoreView::Checkout(_)));
    t.app.advance(Duration::from_millis(1));
    assert_eq!(store(&t).view(), &StoreView::Confirmed);

    t.press(&[KeyCode::Enter]);
    assert_eq!(store(&t).view(), &StoreView::Browsing);
    assert_eq!(store(&t).cart_len(), 0);
}

#[test]
fn store_cancelled_checkout_keeps_cart() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);
    t.press(&[
        KeyCode::Enter,
        KeyCode::Char('c'),
        KeyCode::Enter,
        KeyCode::Esc,
    ]);

    assert_eq!(store(&t).view(), &StoreView::Cart);
    assert_eq!(store(&t).cart_len(), 1);

    t.app.advance(Duration::from_secs(5));
    assert_eq!(store(&t).view(), &StoreView::Cart);
}

#[test]
fn store_empty_cart_cannot_check_out() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);
    t.press(&[KeyCode::Char('c'), KeyCode::Enter]);

    assert_eq!(store(&t).view(), &StoreView::Cart);
}

#[test]
fn store_remove_from_cart() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);
    t.press(&[
        KeyCode::Enter,
        KeyCode::Enter,
        KeyCode::Char('c'),
        KeyCode::Char('d'),
    ]);

    assert_eq!(store(&t).cart_len(), 1);
    assert_eq!(store(&t).total(), Cents::dollars(150));
}

#[test]
fn store_filter_narrows_catalog() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);
    let all = store(&t).visible_products().count();

    t.press(&[KeyCode::Char('f')]);

    let filtered = store(&t).visible_products().count();
    assert!(filtered < all);
    let category = store(&t).filter().label();
    assert!(store(&t).visible_products().all(|p| p.category == category));
}

#[test]
fn store_open_cart_behavior_follows_settings() {
    let options = AppOptions {
        mini_apps: MiniAppSettings {
            store_add_behavior: AddToCartBehavior::OpenCart,
            ..MiniAppSettings::default()
        },
        ..AppOptions::default()
    };
    let mut t = TestApp::with(options, FakeClipboard::default());
    t.app.open_project(STORE);

    t.press(&[KeyCode::Enter]);

    assert_eq!(store(&t).view(), &StoreView::Cart);
}

#[test]
fn store_x_exits_from_any_view() {
    let mut t = TestApp::new();
    t.app.open_project(STORE);
    t.press(&[KeyCode::Enter, KeyCode::Char('c'), KeyCode::Enter]);
    assert!(matches!(store(&t).view(), StoreView::Checkout(_)));

    t.press(&[KeyCode::Char('x')]);

    assert!(t.app.mini_app().is_none());
}
