//! The "AI Calc" demo: a display buffer, a keypad, and a short history log.

mod eval;

use std::collections::VecDeque;

use folio_types::ui::Theme;
use tracing::debug;

pub use eval::{EvalError, evaluate, format_number};

use crate::{AppSignal, MiniAppState};

pub const INITIAL_DISPLAY: &str = "0";
pub const ERROR_DISPLAY: &str = "Error";
pub const DEFAULT_HISTORY_CAP: usize = 5;

/// Keypad layout, row-major, four columns.
pub const KEYPAD: [CalculatorKey; 20] = [
    CalculatorKey::Clear,
    CalculatorKey::Symbol('('),
    CalculatorKey::Symbol(')'),
    CalculatorKey::Symbol('/'),
    CalculatorKey::Symbol('7'),
    CalculatorKey::Symbol('8'),
    CalculatorKey::Symbol('9'),
    CalculatorKey::Symbol('*'),
    CalculatorKey::Symbol('4'),
    CalculatorKey::Symbol('5'),
    CalculatorKey::Symbol('6'),
    CalculatorKey::Symbol('-'),
    CalculatorKey::Symbol('1'),
    CalculatorKey::Symbol('2'),
    CalculatorKey::Symbol('3'),
    CalculatorKey::Symbol('+'),
    CalculatorKey::Symbol('0'),
    CalculatorKey::Symbol('.'),
    CalculatorKey::Backspace,
    CalculatorKey::Evaluate,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorKey {
    /// A digit, `.`, an operator, or a parenthesis.
    Symbol(char),
    Clear,
    Backspace,
    Evaluate,
    Close,
}

impl CalculatorKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Symbol(c) => c.to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "BS".to_string(),
            Self::Evaluate => "=".to_string(),
            Self::Close => "X".to_string(),
        }
    }
}

fn is_keypad_symbol(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    history: VecDeque<String>,
    history_cap: usize,
    theme: Theme,
}

impl Calculator {
    /// A cap of zero is treated as one; the log always keeps the latest entry.
    #[must_use]
    pub fn new(history_cap: usize, theme: Theme) -> Self {
        let history_cap = history_cap.max(1);
        Self {
            display: INITIAL_DISPLAY.to_string(),
            history: VecDeque::with_capacity(history_cap),
            history_cap,
            theme,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// History entries, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    #[must_use]
    pub fn history_cap(&self) -> usize {
        self.history_cap
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn shows_placeholder(&self) -> bool {
        self.display == INITIAL_DISPLAY || self.display == ERROR_DISPLAY
    }

    fn press_symbol(&mut self, symbol: char) {
        if !is_keypad_symbol(symbol) {
            return;
        }
        if self.shows_placeholder() {
            self.display.clear();
        }
        self.display.push(symbol);
    }

    fn backspace(&mut self) {
        if self.display == ERROR_DISPLAY || self.display.chars().count() <= 1 {
            self.display = INITIAL_DISPLAY.to_string();
        } else {
            self.display.pop();
        }
    }

    fn calculate(&mut self) {
        match evaluate(&self.display) {
            Ok(value) => {
                let result = format_number(value);
                self.history
                    .push_back(format!("{} = {}", self.display, result));
                while self.history.len() > self.history_cap {
                    self.history.pop_front();
                }
                self.display = result;
            }
            Err(err) => {
                debug!(expression = %self.display, error = %err, "Calculator evaluation failed");
                self.display = ERROR_DISPLAY.to_string();
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP, Theme::default())
    }
}

impl MiniAppState for Calculator {
    type Action = CalculatorKey;

    fn handle(&mut self, key: CalculatorKey) -> AppSignal {
        match key {
            CalculatorKey::Symbol(c) => self.press_symbol(c),
            CalculatorKey::Clear => self.display = INITIAL_DISPLAY.to_string(),
            CalculatorKey::Backspace => self.backspace(),
            CalculatorKey::Evaluate => self.calculate(),
            CalculatorKey::Close => return AppSignal::Close,
        }
        AppSignal::Continue
    }
}
