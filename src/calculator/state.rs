//! Calculator state.
//!
//! A `CalculatorState` is an immutable snapshot; the engine never mutates
//! one in place, it builds the next one.

use serde::{Deserialize, Serialize};

/// Literal shown after a division by zero.
pub const ERROR_DISPLAY: &str = "Error";

/// A binary operation awaiting its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Keypad label for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Returns `None` for a division by zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

/// The captured left operand together with the operation chosen after it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    pub operand: f64,
    pub operation: Operation,
}

/// Full calculator state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Raw display buffer, never containing separators.
    pub display: String,
    /// Pending operand and operation; both present or both absent.
    pub pending: Option<Pending>,
    /// Next digit starts a fresh number instead of extending `display`.
    pub waiting_for_value: bool,
    /// Reserved accumulator; no transition reads or writes it.
    pub memory: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            waiting_for_value: false,
            memory: 0.0,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The terminal state reached after dividing by zero.
    pub fn error() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            pending: None,
            waiting_for_value: true,
            memory: 0.0,
        }
    }

    /// Check if the display shows the error literal.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Operand captured before the pending operation.
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operation awaiting its second operand.
    pub fn operation(&self) -> Option<Operation> {
        self.pending.map(|p| p.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display, "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.waiting_for_value);
        assert_eq!(state.memory, 0.0);
    }

    #[test]
    fn test_divide_by_zero_is_none() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), None);
        assert_eq!(Operation::Divide.apply(1.0, 4.0), Some(0.25));
        assert_eq!(Operation::Subtract.apply(1.0, 4.0), Some(-3.0));
    }

    #[test]
    fn test_error_state() {
        let state = CalculatorState::error();
        assert!(state.is_error());
        assert!(state.pending.is_none());
        assert!(state.waiting_for_value);
    }

    #[test]
    fn test_state_serializes_operation_lowercase() {
        let state = CalculatorState {
            pending: Some(Pending {
                operand: 5.0,
                operation: Operation::Multiply,
            }),
            ..CalculatorState::new()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"multiply\""));
    }
}
