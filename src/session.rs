//! A running calculator session.
//!
//! The session owns the current state and installs each returned state
//! before the next input is applied, so inputs take effect strictly in
//! arrival order.

use crate::calculator::{CalculatorState, apply, copy_to_clipboard};
use crate::config::Config;
use crate::input::Input;
use crate::keypad::PressHighlight;
use crate::readout::Readout;
use std::time::Instant;

pub struct Session {
    state: CalculatorState,
    highlight: PressHighlight,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            state: CalculatorState::new(),
            highlight: PressHighlight::new(),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply one input and install the resulting state.
    pub fn press(&mut self, input: Input) -> &CalculatorState {
        self.press_at(input, Instant::now())
    }

    /// Apply one input as if pressed at `now`.
    pub fn press_at(&mut self, input: Input, now: Instant) -> &CalculatorState {
        let next = apply(&self.state, input);
        self.highlight.press(input.label(), now);

        if next.is_error() && !self.state.is_error() {
            tracing::warn!(display = %self.state.display, "Division by zero");
        }
        tracing::debug!(
            ?input,
            from = %self.state.display,
            to = %next.display,
            waiting = next.waiting_for_value,
            "Applied input"
        );

        let evaluated = input == Input::Evaluate && next != self.state;
        self.state = next;

        if evaluated && self.config.clipboard.copy_on_evaluate {
            self.copy_result();
        }

        &self.state
    }

    /// Apply inputs in order.
    pub fn feed(&mut self, inputs: impl IntoIterator<Item = Input>) -> &CalculatorState {
        for input in inputs {
            self.press(input);
        }
        &self.state
    }

    /// Copy the current result to the clipboard.
    ///
    /// Returns whether anything was copied. Errors are logged, not raised.
    pub fn copy_result(&self) -> bool {
        let readout = self.readout();
        let Some(text) = readout.clipboard.as_deref() else {
            return false;
        };

        match copy_to_clipboard(text) {
            Ok(()) => {
                tracing::info!(%text, "Copied result to clipboard");
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.state, &self.config.display)
    }

    /// Key highlighted at `now`.
    pub fn highlighted(&self, now: Instant) -> Option<&str> {
        self.highlight.active(now)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
