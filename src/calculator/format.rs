//! Number formatting and parsing for the display buffer.
//!
//! The stored display is always raw (`1234.5`); thousands separators only
//! appear in the presentation projection built by [`group_thousands`].

use super::state::ERROR_DISPLAY;

/// Scale used to strip binary floating point noise (8 decimal places).
const NOISE_SCALE: f64 = 1e8;

/// Format a number as the shortest decimal string that round-trips.
///
/// Never uses exponential notation and never renders negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    format!("{}", value)
}

/// Format a number in scientific notation with two fractional digits.
///
/// The exponent always carries a sign: `9.99e+17`, `5.00e-3`.
pub fn format_exponential(value: f64) -> String {
    let formatted = format!("{:.2e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Parse a display string into a finite number.
///
/// Thousands separators are ignored. Returns `None` for the error literal
/// or anything that does not parse to a finite value.
pub fn parse_display(display: &str) -> Option<f64> {
    if display == ERROR_DISPLAY {
        return None;
    }

    let cleaned: String = display.chars().filter(|&c| c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to eight decimal places, halves toward positive infinity.
///
/// Values too large to scale carry no fractional digits and are returned
/// unchanged.
pub fn round_noise(value: f64) -> f64 {
    let scaled = value * NOISE_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / NOISE_SCALE
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Count the digit characters in a display string.
///
/// Signs, decimal points and separators are not counted.
pub fn digit_count(display: &str) -> usize {
    display.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Insert `separator` every three digits of the integer part.
///
/// Text whose integer part is not a plain run of digits (the error literal,
/// for example) is returned unchanged.
pub fn group_thousands(display: &str, separator: char) -> String {
    if display == "0" {
        return display.to_string();
    }

    let (integer_part, rest) = match display.find('.') {
        Some(dot_pos) => display.split_at(dot_pos),
        None => (display, ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return display.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, grouped, rest)
}
