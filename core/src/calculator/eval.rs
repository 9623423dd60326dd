//! Arithmetic expression evaluation for the calculator display.
//!
//! Grammar (whitespace is ignored):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! number  := digits ['.' digits] | '.' digits | digits '.'
//! ```
//!
//! Anything outside the grammar is rejected; nothing is ever executed.
//! Division by zero is well-formed and yields an infinite or NaN result.

use thiserror::Error;

/// Nesting limit for parentheses and unary signs combined.
const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character `{ch}` at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("unexpected `{found}` at {pos}")]
    UnexpectedToken { found: String, pos: usize },
    #[error("expression ended unexpectedly")]
    UnexpectedEnd,
    #[error("expression nested deeper than {max} levels", max = MAX_DEPTH)]
    TooDeep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn describe(self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '0'..='9' | '.' => {
                let mut end = pos + ch.len_utf8();
                while let Some(&(next_pos, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = next_pos + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[pos..end];
                if literal.matches('.').count() > 1 {
                    return Err(EvalError::InvalidNumber(literal.to_string()));
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
                Token::Number(value)
            }
            '+' | '-' => {
                // `++` and `--` are increment/decrement in the expression
                // language the display mimics, never two unary signs.
                if chars.peek().is_some_and(|&(_, next)| next == ch) {
                    return Err(EvalError::UnexpectedChar { ch, pos: pos + 1 });
                }
                if ch == '+' { Token::Plus } else { Token::Minus }
            }
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(EvalError::UnexpectedChar { ch: other, pos }),
        };
        tokens.push((token, pos));
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    /// Run `parse` one nesting level down, failing once `MAX_DEPTH` is reached.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<f64, EvalError>,
    ) -> Result<f64, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).map(|&(token, _)| token)
    }

    fn bump(&mut self) -> Option<(Token, usize)> {
        let next = self.tokens.get(self.cursor).copied();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.cursor += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.cursor += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                value / rhs
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.cursor += 1;
                self.nested(Self::unary)
            }
            Some(Token::Minus) => {
                self.cursor += 1;
                Ok(-self.nested(Self::unary)?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.bump() {
            Some((Token::Number(value), _)) => Ok(value),
            Some((Token::LParen, _)) => {
                let value = self.nested(Self::expr)?;
                match self.bump() {
                    Some((Token::RParen, _)) => Ok(value),
                    Some((token, pos)) => Err(EvalError::UnexpectedToken {
                        found: token.describe(),
                        pos,
                    }),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some((token, pos)) => Err(EvalError::UnexpectedToken {
                found: token.describe(),
                pos,
            }),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression with `+ - * /`, unary signs and parentheses.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let value = parser.expr()?;
    match parser.bump() {
        Some((token, pos)) => Err(EvalError::UnexpectedToken {
            found: token.describe(),
            pos,
        }),
        None => Ok(value),
    }
}

/// Render a result for the display the way a browser prints numbers.
///
/// Integral values carry no fraction, negative zero prints as `0`, and
/// magnitudes at or above `1e21` or below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`). Non-finite results print as `Infinity`, `-Infinity`
/// and `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }
    value.to_string()
}
