//! Core domain logic for Folio.
//!
//! Each embedded demo is a self-contained state machine driven by discrete
//! actions and a frame tick. None of them perform IO; the engine owns the
//! single open instance and drops it on close.

pub mod calculator;
pub mod dashboard;
mod miniapp;
pub mod quiz;
pub mod store;
mod timer;

pub use calculator::{Calculator, CalculatorKey, EvalError, evaluate, format_number};
pub use dashboard::{Dashboard, DashboardAction, Patient, PatientStatus};
pub use miniapp::{AppSignal, MiniApp, MiniAppAction, MiniAppSettings, MiniAppState};
pub use quiz::{Likert, Personality, Quiz, QuizAction, QuizPhase};
pub use store::{AddToCartBehavior, CategoryFilter, Cents, Product, Store, StoreAction, StoreView};
pub use timer::DelayTimer;
