//! A four-function keypad calculator.
//!
//! The [`calculator`] engine is a pure state reducer; [`session`] drives it
//! from a stream of [`input::Input`] events and [`readout`]/[`keypad`]
//! project its state for display.

pub mod calculator;
pub mod config;
pub mod input;
pub mod keypad;
pub mod readout;
pub mod session;

pub use calculator::{CalculatorState, Operation};
pub use config::Config;
pub use input::{Input, KeyError, parse_script};
pub use readout::Readout;
pub use session::Session;
