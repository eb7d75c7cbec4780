//! Readout projection of the calculator state.
//!
//! A `Readout` is what a front end draws. It is derived from the state
//! and never fed back into it.

use crate::calculator::{CalculatorState, Operation, group_thousands};
use crate::config::DisplayConfig;
use serde::Serialize;

/// Displays longer than this many characters use the compact size.
const REGULAR_MAX_LEN: usize = 6;

/// Text size class for the readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadoutSize {
    Regular,
    Compact,
}

/// The calculator display as presented to the user.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readout {
    /// Display text with thousands separators.
    pub text: String,
    /// Raw display for the clipboard. None while showing the error.
    pub clipboard: Option<String>,
    /// Whether the display shows the error literal.
    pub is_error: bool,
    /// Operation whose key is highlighted.
    pub pending: Option<Operation>,
    pub size: ReadoutSize,
}

impl Readout {
    pub fn from_state(state: &CalculatorState, config: &DisplayConfig) -> Self {
        let is_error = state.is_error();
        let size = if state.display.chars().count() > REGULAR_MAX_LEN {
            ReadoutSize::Compact
        } else {
            ReadoutSize::Regular
        };

        Self {
            text: group_thousands(&state.display, config.separator),
            clipboard: (!is_error).then(|| state.display.clone()),
            is_error,
            pending: state.operation(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::apply;
    use crate::input::parse_script;

    fn readout(script: &str) -> Readout {
        let state = parse_script(script)
            .unwrap()
            .into_iter()
            .fold(CalculatorState::new(), |state, input| apply(&state, input));
        Readout::from_state(&state, &DisplayConfig::default())
    }

    #[test]
    fn test_grouped_text_and_raw_clipboard() {
        let r = readout("1234567");
        assert_eq!(r.text, "1,234,567");
        assert_eq!(r.clipboard.as_deref(), Some("1234567"));
        assert_eq!(r.size, ReadoutSize::Compact);
    }

    #[test]
    fn test_zero() {
        let r = readout("");
        assert_eq!(r.text, "0");
        assert_eq!(r.size, ReadoutSize::Regular);
        assert!(!r.is_error);
    }

    #[test]
    fn test_pending_operation_highlighted() {
        assert_eq!(readout("12*").pending, Some(Operation::Multiply));
        assert_eq!(readout("12*3=").pending, None);
    }

    #[test]
    fn test_error_readout() {
        let r = readout("1/0=");
        assert!(r.is_error);
        assert_eq!(r.text, "Error");
        assert_eq!(r.clipboard, None);
    }

    #[test]
    fn test_custom_separator() {
        let state = CalculatorState {
            display: "-1234.5".to_string(),
            ..CalculatorState::new()
        };
        let config = DisplayConfig {
            separator: '\'',
            ..DisplayConfig::default()
        };
        assert_eq!(Readout::from_state(&state, &config).text, "-1'234.5");
    }
}
