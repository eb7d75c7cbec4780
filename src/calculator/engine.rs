//! Calculator transitions.
//!
//! Every transition takes the current state by reference and returns the
//! next one. While the display shows the error literal, everything except
//! [`clear`] returns the state unchanged.

use super::format::{
    digit_count, format_exponential, format_number, parse_display, round_noise,
};
use super::state::{CalculatorState, Operation, Pending};
use crate::input::Input;

/// Maximum number of digits the readout holds.
pub const MAX_DIGITS: usize = 9;

/// Results with a larger magnitude switch to scientific notation on `=`.
pub const OVERFLOW_LIMIT: f64 = 999_999_999.0;

/// Apply a single input to `state`.
pub fn apply(state: &CalculatorState, input: Input) -> CalculatorState {
    match input {
        Input::Digit(d) => digit_entry(state, d),
        Input::Decimal => decimal_entry(state),
        Input::Operation(op) => input_operation(state, op),
        Input::Evaluate => evaluate(state),
        Input::Clear => clear(state),
        Input::ToggleSign => toggle_sign(state),
        Input::Percent => percent(state),
    }
}

/// Enter a digit. Non-digit characters are ignored.
pub fn digit_entry(state: &CalculatorState, digit: char) -> CalculatorState {
    if state.is_error() || !digit.is_ascii_digit() {
        return state.clone();
    }

    if state.waiting_for_value {
        return CalculatorState {
            display: digit.to_string(),
            waiting_for_value: false,
            ..state.clone()
        };
    }

    if state.display == "0" {
        return CalculatorState {
            display: digit.to_string(),
            ..state.clone()
        };
    }

    if digit_count(&state.display) >= MAX_DIGITS {
        return state.clone();
    }

    let mut display = state.display.clone();
    display.push(digit);
    CalculatorState {
        display,
        ..state.clone()
    }
}

/// Enter a decimal point; at most one per number.
pub fn decimal_entry(state: &CalculatorState) -> CalculatorState {
    if state.is_error() {
        return state.clone();
    }

    if state.waiting_for_value {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_value: false,
            ..state.clone()
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display: format!("{}.", state.display),
        ..state.clone()
    }
}

/// Negate the displayed value. Zero is left alone.
pub fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    match parse_display(&state.display) {
        Some(value) if value != 0.0 => CalculatorState {
            display: format_number(-value),
            ..state.clone()
        },
        _ => state.clone(),
    }
}

/// Divide the displayed value by 100.
pub fn percent(state: &CalculatorState) -> CalculatorState {
    match parse_display(&state.display) {
        Some(value) => CalculatorState {
            display: format_number(value / 100.0),
            ..state.clone()
        },
        None => state.clone(),
    }
}

/// Reset to the initial state.
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::new()
}

/// Choose an operation, evaluating a pending one first when a second
/// operand has been typed.
pub fn input_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    let Some(current) = parse_display(&state.display) else {
        return state.clone();
    };

    match state.pending {
        Some(pending) if !state.waiting_for_value => {
            let Some(result) = pending
                .operation
                .apply(pending.operand, current)
                .filter(|r| r.is_finite())
            else {
                return CalculatorState::error();
            };

            let result = round_noise(result);
            CalculatorState {
                display: format_number(result),
                pending: Some(Pending {
                    operand: result,
                    operation,
                }),
                waiting_for_value: true,
                ..state.clone()
            }
        }
        _ => CalculatorState {
            pending: Some(Pending {
                operand: current,
                operation,
            }),
            waiting_for_value: true,
            ..state.clone()
        },
    }
}

/// Apply the pending operation (the `=` key).
pub fn evaluate(state: &CalculatorState) -> CalculatorState {
    let Some(pending) = state.pending else {
        return state.clone();
    };
    let Some(current) = parse_display(&state.display) else {
        return state.clone();
    };

    let Some(result) = pending
        .operation
        .apply(pending.operand, current)
        .filter(|r| r.is_finite())
    else {
        return CalculatorState::error();
    };

    let display = if result.abs() > OVERFLOW_LIMIT {
        format_exponential(result)
    } else {
        format_number(round_noise(result))
    };

    CalculatorState {
        display,
        pending: None,
        waiting_for_value: true,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: CalculatorState, keys: &str) -> CalculatorState {
        keys.chars().fold(state, |state, key| {
            let input = Input::from_key(&key.to_string()).unwrap();
            apply(&state, input)
        })
    }

    fn run(keys: &str) -> CalculatorState {
        press(CalculatorState::new(), keys)
    }

    #[test]
    fn test_digits_reconstruct_integer() {
        let state = run("123456789");
        assert_eq!(state.display, "123456789");
        assert_eq!(parse_display(&state.display), Some(123_456_789.0));
    }

    #[test]
    fn test_leading_zero_replaced() {
        assert_eq!(run("007").display, "7");
    }

    #[test]
    fn test_digit_cap() {
        assert_eq!(run("1234567890").display, "123456789");
        assert_eq!(run("1.234567890").display, "1.23456789");
        assert_eq!(digit_count(&run("99999999999999").display), MAX_DIGITS);
    }

    #[test]
    fn test_decimal_once_per_number() {
        let once = run("1.");
        let twice = decimal_entry(&once);
        assert_eq!(once, twice);
        assert_eq!(run("1.5.2").display, "1.52");
    }

    #[test]
    fn test_decimal_after_operation_starts_fresh() {
        let state = run("7+.");
        assert_eq!(state.display, "0.");
        assert!(!state.waiting_for_value);
        assert_eq!(state.previous_value(), Some(7.0));
    }

    #[test]
    fn test_toggle_sign_involution() {
        let state = run("42");
        let negated = toggle_sign(&state);
        assert_eq!(negated.display, "-42");
        assert_eq!(toggle_sign(&negated), state);
    }

    #[test]
    fn test_toggle_sign_normalizes_trailing_point() {
        let state = run("1.");
        let negated = toggle_sign(&state);
        assert_eq!(negated.display, "-1");
        assert_eq!(toggle_sign(&negated).display, "1");

        let state = run("2.50");
        assert_eq!(toggle_sign(&toggle_sign(&state)).display, "2.5");
    }

    #[test]
    fn test_toggle_sign_zero_noop() {
        let state = CalculatorState::new();
        assert_eq!(toggle_sign(&state), state);
        let state = run("0.");
        assert_eq!(toggle_sign(&state), state);
    }

    #[test]
    fn test_percent() {
        assert_eq!(run("50%").display, "0.5");
        assert_eq!(run("5%").display, "0.05");
    }

    #[test]
    fn test_chaining() {
        let state = run("5+3+");
        assert_eq!(state.display, "8");
        assert_eq!(state.previous_value(), Some(8.0));
        assert_eq!(state.operation(), Some(Operation::Add));
        assert!(state.waiting_for_value);

        let state = press(state, "2=");
        assert_eq!(state.display, "10");
        assert_eq!(state.pending, None);
        assert!(state.waiting_for_value);
    }

    #[test]
    fn test_operator_replaced_without_evaluating() {
        let state = run("9+-");
        assert_eq!(state.display, "9");
        assert_eq!(state.previous_value(), Some(9.0));
        assert_eq!(state.operation(), Some(Operation::Subtract));
        assert_eq!(press(state, "4=").display, "5");
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        assert_eq!(run("2+3*4=").display, "20");
    }

    #[test]
    fn test_rounding_noise() {
        assert_eq!(run(".1+.2=").display, "0.3");
        assert_eq!(run("1/3=").display, "0.33333333");
    }

    #[test]
    fn test_overflow_uses_exponential() {
        let state = run("999999999*999999999=");
        assert_eq!(state.display, "1.00e+18");
        assert_eq!(state.pending, None);
        assert!(state.waiting_for_value);
    }

    #[test]
    fn test_repeated_chained_products_stay_finite() {
        let mut state = run("999999999");
        for step in 0..40 {
            state = press(state, "*999999999");
            assert!(
                state.is_error() || parse_display(&state.display).is_some(),
                "step {step}: {}",
                state.display
            );
            if let Some(operand) = state.previous_value() {
                assert!(operand.is_finite(), "step {step}");
            }
        }
        assert!(state.is_error());
    }

    #[test]
    fn test_divide_by_zero_on_evaluate() {
        let state = run("8/0=");
        assert_eq!(state.display, "Error");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(state.waiting_for_value);
    }

    #[test]
    fn test_divide_by_zero_on_chain() {
        let state = run("8/0+");
        assert_eq!(state, CalculatorState::error());
    }

    #[test]
    fn test_error_is_terminal_until_clear() {
        let error = run("1/0=");
        for key in ["5", ".", "+", "=", "%", "±"] {
            let input = Input::from_key(key).unwrap();
            assert_eq!(apply(&error, input), error, "key {key}");
        }
        assert_eq!(press(error, "c"), CalculatorState::new());
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = run("12+3");
        assert_eq!(clear(&state), CalculatorState::new());
    }

    #[test]
    fn test_evaluate_without_operation_is_noop() {
        let state = run("12");
        assert_eq!(evaluate(&state), state);
    }

    #[test]
    fn test_digit_after_result_starts_new_number() {
        let state = run("2+2=5");
        assert_eq!(state.display, "5");
        assert_eq!(state.pending, None);
    }

    #[test]
    fn test_negative_zero_product_displays_zero() {
        let state = apply(&run("5"), Input::ToggleSign);
        assert_eq!(press(state, "*0=").display, "0");
    }
}
