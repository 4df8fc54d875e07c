//! Amount validation for the numeric pad
//!
//! Two checks exist. The partial check gates every keystroke and only asks
//! whether the text can still grow into a valid amount. The full check runs
//! when the amount is about to be used and requires a strictly positive
//! number.

use std::str::FromStr;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;

/// The only separator the buffer ever contains
pub const DECIMAL_SEPARATOR: char = '.';

/// How long the amount field shakes after a rejection
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

/// Most digits an amount may carry, counting fraction digits and integer
/// digits after leading zeros. Anything within the limit is exact in a
/// `Decimal`.
pub const MAX_AMOUNT_DIGITS: usize = 28;

/// Digit counts of a structurally valid amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AmountShape {
    digits: usize,
    any_digit: bool,
    nonzero: bool,
}

/// `None` unless `text` is ASCII digits with at most one separator
fn amount_shape(text: &str) -> Option<AmountShape> {
    let mut shape = AmountShape {
        digits: 0,
        any_digit: false,
        nonzero: false,
    };
    let mut in_fraction = false;

    for c in text.chars() {
        if c == DECIMAL_SEPARATOR {
            if in_fraction {
                return None;
            }
            in_fraction = true;
        } else if c.is_ascii_digit() {
            shape.any_digit = true;
            if c != '0' {
                shape.nonzero = true;
            }
            // leading integer zeros do not count
            if in_fraction || shape.nonzero {
                shape.digits += 1;
            }
        } else {
            return None;
        }
    }
    Some(shape)
}

/// True if `text` can still grow into a valid amount by typing more digits.
///
/// Every prefix of a valid amount passes. An all-zero amount needs room for
/// one more digit.
pub fn is_partial_amount(text: &str) -> bool {
    match amount_shape(text) {
        Some(shape) if shape.nonzero => shape.digits <= MAX_AMOUNT_DIGITS,
        Some(shape) => shape.digits < MAX_AMOUNT_DIGITS,
        None => false,
    }
}

/// Parse a fully entered amount.
///
/// Returns `None` unless the text is structurally valid, within
/// `MAX_AMOUNT_DIGITS`, and denotes a strictly positive value. A bare
/// leading or trailing separator is accepted (`".5"`, `"5."`).
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let shape = amount_shape(text)?;
    if !shape.any_digit || !shape.nonzero || shape.digits > MAX_AMOUNT_DIGITS {
        return None;
    }

    let mut normalized = String::with_capacity(text.len() + 1);
    if text.starts_with(DECIMAL_SEPARATOR) {
        normalized.push('0');
    }
    normalized.push_str(text.strip_suffix(DECIMAL_SEPARATOR).unwrap_or(text));

    Decimal::from_str(&normalized)
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
}

/// Validation capability the numeric pad depends on
pub trait NumpadValidator {
    /// Full validity: the text can be used as an amount as-is
    fn valid(&self, text: &str) -> bool;

    /// Partial validity: the text can still become a valid amount
    fn valid_partial(&self, text: &str) -> bool {
        is_partial_amount(text)
    }

    /// Called when a caller tries to use (or type) an unacceptable string
    fn on_invalid_input(&mut self, text: &str);
}

/// Structural validator with no side effects
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNumpadValidator;

impl NumpadValidator for SimpleNumpadValidator {
    fn valid(&self, text: &str) -> bool {
        parse_amount(text).is_some()
    }

    fn on_invalid_input(&mut self, _text: &str) {}
}

/// Rejection feedback state for the amount field
#[derive(Debug, Clone, Default)]
pub struct Shake {
    started_at: Option<Instant>,
    rejections: u32,
    last_rejected: Option<String>,
}

impl Shake {
    fn start(&mut self, text: &str) {
        self.started_at = Some(Instant::now());
        self.rejections += 1;
        self.last_rejected = Some(text.to_string());
    }

    /// Whether the shake animation is still running at `now`
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < SHAKE_DURATION)
    }

    /// Horizontal offset in cells for the amount field at `now`
    pub fn offset(&self, now: Instant) -> i16 {
        match self.started_at {
            Some(start) if self.is_shaking(now) => {
                const PATTERN: [i16; 4] = [1, 0, -1, 0];
                let step = now.saturating_duration_since(start).as_millis() / 50;
                PATTERN[(step % 4) as usize]
            }
            _ => 0,
        }
    }

    /// Total number of rejections seen
    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    pub fn last_rejected(&self) -> Option<&str> {
        self.last_rejected.as_deref()
    }
}

/// Layers a shake animation on top of a base validator
#[derive(Debug, Clone, Default)]
pub struct ShakingValidator<V = SimpleNumpadValidator> {
    base: V,
    shake: Shake,
}

impl<V: NumpadValidator> ShakingValidator<V> {
    pub fn new(base: V) -> Self {
        Self {
            base,
            shake: Shake::default(),
        }
    }

    pub fn shake(&self) -> &Shake {
        &self.shake
    }
}

impl<V: NumpadValidator> NumpadValidator for ShakingValidator<V> {
    fn valid(&self, text: &str) -> bool {
        self.base.valid(text)
    }

    fn valid_partial(&self, text: &str) -> bool {
        self.base.valid_partial(text)
    }

    fn on_invalid_input(&mut self, text: &str) {
        self.base.on_invalid_input(text);
        self.shake.start(text);
    }
}
