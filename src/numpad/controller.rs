//! Keypad controller
//!
//! Owns the amount buffer (through its editable target), the validator and
//! the change observer. Every write goes through here so the observer never
//! misses an update.

use super::editable::{NoopObserver, NumpadEditable, TextObserver};
use super::key::NumpadKey;
use super::validator::NumpadValidator;

/// Result of a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The text changed and the observer was notified
    Accepted,
    /// The key had no effect (backspace on empty, clear on empty)
    Unchanged,
    /// The candidate was malformed; text kept, validator notified
    Rejected,
}

/// Mediates between key presses and an editable amount target
#[derive(Debug, Clone)]
pub struct NumpadController<E, V, O = NoopObserver> {
    editable: E,
    validator: V,
    observer: O,
}

impl<E, V> NumpadController<E, V, NoopObserver>
where
    E: NumpadEditable,
    V: NumpadValidator,
{
    /// Create a controller without a change observer
    pub fn without_observer(editable: E, validator: V) -> Self {
        Self::new(editable, validator, NoopObserver)
    }
}

impl<E, V, O> NumpadController<E, V, O>
where
    E: NumpadEditable,
    V: NumpadValidator,
    O: TextObserver,
{
    pub fn new(editable: E, validator: V, observer: O) -> Self {
        Self {
            editable,
            validator,
            observer,
        }
    }

    /// Apply a key press, gated by the partial check
    pub fn press(&mut self, key: NumpadKey) -> KeyOutcome {
        let current = self.editable.text();
        let candidate = key.apply(&current);

        if candidate == current {
            return KeyOutcome::Unchanged;
        }

        if !self.validator.valid_partial(&candidate) {
            self.validator.on_invalid_input(&candidate);
            return KeyOutcome::Rejected;
        }

        self.write(&candidate);
        KeyOutcome::Accepted
    }

    /// Replace the text wholesale and notify the observer
    pub fn set_text(&mut self, text: &str) {
        self.write(text);
    }

    /// Current buffer contents
    pub fn text(&self) -> String {
        self.editable.text()
    }

    /// Full validity of the current buffer
    pub fn is_valid(&self) -> bool {
        self.validator.valid(&self.editable.text())
    }

    /// Report the current buffer as unusable
    pub fn reject_current(&mut self) {
        let text = self.editable.text();
        self.validator.on_invalid_input(&text);
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn editable(&self) -> &E {
        &self.editable
    }

    fn write(&mut self, text: &str) {
        self.editable.set_text(text);
        self.observer.on_text_changed(text);
    }
}
