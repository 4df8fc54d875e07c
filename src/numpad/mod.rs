//! Numeric keypad input
//!
//! The keypad never touches a widget directly. It edits a [`NumpadEditable`]
//! target, asks a [`NumpadValidator`] whether each candidate string is still
//! buildable toward a valid amount, and reports accepted changes to a
//! [`TextObserver`].

pub mod controller;
pub mod editable;
pub mod key;
pub mod validator;

pub use controller::{KeyOutcome, NumpadController};
pub use editable::{AmountField, MirrorText, NoopObserver, NumpadEditable, TextObserver};
pub use key::NumpadKey;
pub use validator::{
    is_partial_amount, parse_amount, NumpadValidator, Shake, ShakingValidator,
    SimpleNumpadValidator, DECIMAL_SEPARATOR, MAX_AMOUNT_DIGITS, SHAKE_DURATION,
};
