use std::time::Duration;

use folio_types::{MiniAppKind, ui::Theme};
use tracing::debug;

use crate::{
    Calculator, CalculatorKey, Dashboard, DashboardAction, Quiz, QuizAction, Store, StoreAction,
    calculator::DEFAULT_HISTORY_CAP,
    quiz::DEFAULT_ANALYSIS_DELAY,
    store::{AddToCartBehavior, DEFAULT_CHECKOUT_DELAY},
};

/// What a mini-app asks of its host after handling an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSignal {
    Continue,
    Close,
}

/// A self-contained demo driven by actions and the frame tick.
pub trait MiniAppState {
    type Action;

    fn handle(&mut self, action: Self::Action) -> AppSignal;

    /// Advance any pending timer. Most demos have none.
    fn tick(&mut self, _delta: Duration) {}
}

/// Per-variant knobs, usually sourced from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniAppSettings {
    pub calculator_history_cap: usize,
    pub quiz_analysis_delay: Duration,
    pub store_add_behavior: AddToCartBehavior,
    pub store_checkout_delay: Duration,
}

impl Default for MiniAppSettings {
    fn default() -> Self {
        Self {
            calculator_history_cap: DEFAULT_HISTORY_CAP,
            quiz_analysis_delay: DEFAULT_ANALYSIS_DELAY,
            store_add_behavior: AddToCartBehavior::default(),
            store_checkout_delay: DEFAULT_CHECKOUT_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniAppAction {
    Calculator(CalculatorKey),
    Quiz(QuizAction),
    Dashboard(DashboardAction),
    Store(StoreAction),
}

/// The single open demo. Constructed fresh on every open.
#[derive(Debug, Clone)]
pub enum MiniApp {
    Calculator(Calculator),
    Quiz(Quiz),
    Dashboard(Dashboard),
    Store(Store),
}

impl MiniApp {
    #[must_use]
    pub fn open(kind: MiniAppKind, settings: &MiniAppSettings, theme: Theme) -> Self {
        match kind {
            MiniAppKind::Calculator => {
                Self::Calculator(Calculator::new(settings.calculator_history_cap, theme))
            }
            MiniAppKind::Quiz => Self::Quiz(Quiz::new(settings.quiz_analysis_delay)),
            MiniAppKind::Dashboard => Self::Dashboard(Dashboard::new()),
            MiniAppKind::Store => Self::Store(Store::new(
                settings.store_add_behavior,
                settings.store_checkout_delay,
            )),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MiniAppKind {
        match self {
            Self::Calculator(_) => MiniAppKind::Calculator,
            Self::Quiz(_) => MiniAppKind::Quiz,
            Self::Dashboard(_) => MiniAppKind::Dashboard,
            Self::Store(_) => MiniAppKind::Store,
        }
    }

    /// Route an action to the open demo. Actions addressed to a different
    /// demo are dropped.
    pub fn handle(&mut self, action: MiniAppAction) -> AppSignal {
        match (self, action) {
            (Self::Calculator(app), MiniAppAction::Calculator(key)) => app.handle(key),
            (Self::Quiz(app), MiniAppAction::Quiz(action)) => app.handle(action),
            (Self::Dashboard(app), MiniAppAction::Dashboard(action)) => app.handle(action),
            (Self::Store(app), MiniAppAction::Store(action)) => app.handle(action),
            (app, action) => {
                debug!(open = %app.kind(), ?action, "Dropping action for another mini-app");
                AppSignal::Continue
            }
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        match self {
            Self::Calculator(app) => app.tick(delta),
            Self::Quiz(app) => app.tick(delta),
            Self::Dashboard(app) => app.tick(delta),
            Self::Store(app) => app.tick(delta),
        }
    }
}
