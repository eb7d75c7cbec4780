//! Input events and the key dispatch table.
//!
//! Keyboard listeners and keypad buttons both reduce to an [`Input`];
//! keys outside the table are not calculator input.

use crate::calculator::Operation;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// A single calculator input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Digit(char),
    Decimal,
    Operation(Operation),
    Evaluate,
    Clear,
    ToggleSign,
    Percent,
}

impl Input {
    /// Map a key name or keypad label to an input.
    pub fn from_key(key: &str) -> Option<Self> {
        let input = match key {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                Self::Digit(key.chars().next()?)
            }
            "." => Self::Decimal,
            "+" => Self::Operation(Operation::Add),
            "-" => Self::Operation(Operation::Subtract),
            "*" | "×" | "x" => Self::Operation(Operation::Multiply),
            "/" | "÷" => Self::Operation(Operation::Divide),
            "=" | "Enter" => Self::Evaluate,
            "Escape" | "c" | "C" => Self::Clear,
            "%" => Self::Percent,
            "±" => Self::ToggleSign,
            _ => return None,
        };
        Some(input)
    }

    /// Keypad label that shows this input.
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

/// Errors raised while reading a key script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unrecognized key '{key}' in \"{token}\"")]
    Unrecognized { key: char, token: String },
}

lazy_static! {
    /// Whole-token key names. `neg` stands in for the `±` button.
    static ref NAMED_KEY: Regex = Regex::new(r"^(?i)(enter|escape|esc|neg)$").unwrap();
}

/// Parse a key script such as `"12 + 3 Enter"` into inputs.
///
/// Tokens are separated by whitespace. Named keys (`Enter`, `Escape`,
/// `neg`) must stand alone; every other token is read one character at a
/// time.
pub fn parse_script(script: &str) -> Result<Vec<Input>, KeyError> {
    let mut inputs = Vec::new();

    for token in script.split_whitespace() {
        if let Some(caps) = NAMED_KEY.captures(token) {
            let input = match caps[1].to_ascii_lowercase().as_str() {
                "enter" => Input::Evaluate,
                "neg" => Input::ToggleSign,
                _ => Input::Clear,
            };
            inputs.push(input);
            continue;
        }

        for key in token.chars() {
            let mut buf = [0u8; 4];
            let input = Input::from_key(key.encode_utf8(&mut buf)).ok_or_else(|| {
                KeyError::Unrecognized {
                    key,
                    token: token.to_string(),
                }
            })?;
            inputs.push(input);
        }
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_table() {
        assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_key("."), Some(Input::Decimal));
        assert_eq!(
            Input::from_key("*"),
            Some(Input::Operation(Operation::Multiply))
        );
        assert_eq!(
            Input::from_key("÷"),
            Some(Input::Operation(Operation::Divide))
        );
        assert_eq!(Input::from_key("Enter"), Some(Input::Evaluate));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("C"), Some(Input::Clear));
        assert_eq!(Input::from_key("%"), Some(Input::Percent));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(Input::from_key("a"), None);
        assert_eq!(Input::from_key("Tab"), None);
        assert_eq!(Input::from_key("12"), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for label in ["0", "9", ".", "+", "-", "×", "÷", "=", "C", "±", "%"] {
            let input = Input::from_key(label).unwrap();
            assert_eq!(input.label(), label);
        }
    }

    #[test]
    fn test_parse_script() {
        let inputs = parse_script("12+3 enter neg").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::Operation(Operation::Add),
                Input::Digit('3'),
                Input::Evaluate,
                Input::ToggleSign,
            ]
        );
    }

    #[test]
    fn test_parse_script_rejects_unknown() {
        let err = parse_script("1+q").unwrap_err();
        assert_eq!(
            err,
            KeyError::Unrecognized {
                key: 'q',
                token: "1+q".to_string()
            }
        );
    }

    #[test]
    fn test_parse_script_empty() {
        assert!(parse_script("   ").unwrap().is_empty());
    }
}
