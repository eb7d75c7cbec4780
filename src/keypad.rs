//! Keypad layout and terminal rendering.
//!
//! The press highlight is view state: it lives here, next to the layout,
//! and the calculator engine never sees it.

use crate::input::Input;
use crate::readout::Readout;
use std::time::{Duration, Instant};

/// How long a pressed key stays highlighted.
pub const PRESS_DURATION: Duration = Duration::from_millis(100);

/// Inner width of a single button cell.
const CELL_INNER: usize = 3;

/// A keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    /// Spans two columns.
    pub wide: bool,
}

impl Button {
    const fn key(label: &'static str) -> Self {
        Self { label, wide: false }
    }

    const fn wide(label: &'static str) -> Self {
        Self { label, wide: true }
    }

    pub fn input(&self) -> Option<Input> {
        Input::from_key(self.label)
    }
}

/// The four-column button grid, top to bottom.
pub const KEYPAD: &[&[Button]] = &[
    &[Button::key("C"), Button::key("±"), Button::key("%"), Button::key("÷")],
    &[Button::key("7"), Button::key("8"), Button::key("9"), Button::key("×")],
    &[Button::key("4"), Button::key("5"), Button::key("6"), Button::key("-")],
    &[Button::key("1"), Button::key("2"), Button::key("3"), Button::key("+")],
    &[Button::wide("0"), Button::key("."), Button::key("=")],
];

/// Tracks the most recently pressed key for a short highlight.
#[derive(Clone, Debug, Default)]
pub struct PressHighlight {
    pressed: Option<(String, Instant)>,
}

impl PressHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press of `label` at `now`.
    pub fn press(&mut self, label: impl Into<String>, now: Instant) {
        self.pressed = Some((label.into(), now));
    }

    /// The highlighted label at `now`, if the press has not expired.
    pub fn active(&self, now: Instant) -> Option<&str> {
        match &self.pressed {
            Some((label, at)) if now.saturating_duration_since(*at) < PRESS_DURATION => {
                Some(label.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CellStyle {
    Normal,
    Pressed,
    Pending,
}

fn render_cell(label: &str, inner: usize, style: CellStyle) -> String {
    let (open, close) = match style {
        CellStyle::Normal => ('[', ']'),
        CellStyle::Pressed => ('(', ')'),
        CellStyle::Pending => ('<', '>'),
    };
    let pad = inner.saturating_sub(label.chars().count());
    let left = pad / 2;
    format!(
        "{}{}{}{}{}",
        open,
        " ".repeat(left),
        label,
        " ".repeat(pad - left),
        close
    )
}

/// Total width of one keypad row in characters.
fn row_width() -> usize {
    4 * (CELL_INNER + 2) + 3
}

/// Render the readout and keypad as lines of text.
///
/// `pressed` is the currently highlighted key, if any. The button of the
/// pending operation is drawn with angle brackets.
pub fn render(readout: &Readout, pressed: Option<&str>) -> Vec<String> {
    let width = row_width();
    let pending = readout.pending.map(|op| op.symbol());

    let mut lines = Vec::with_capacity(KEYPAD.len() + 2);
    lines.push(format!("{:>width$}", readout.text, width = width));
    lines.push("-".repeat(width));

    for row in KEYPAD {
        let cells: Vec<String> = row
            .iter()
            .map(|button| {
                let style = if pressed == Some(button.label) {
                    CellStyle::Pressed
                } else if pending == Some(button.label) {
                    CellStyle::Pending
                } else {
                    CellStyle::Normal
                };
                let inner = if button.wide {
                    2 * CELL_INNER + 3
                } else {
                    CELL_INNER
                };
                render_cell(button.label, inner, style)
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines
}
