//! Four-function calculator engine.
//!
//! This module provides:
//! - The calculator state and its pending-operation model
//! - Pure transitions for every keypad input
//! - Display formatting, parsing and rounding
//! - Copying results to the clipboard

mod clipboard;
pub mod engine;
pub mod format;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::apply;
pub use format::{format_number, group_thousands, parse_display};
pub use state::{CalculatorState, ERROR_DISPLAY, Operation, Pending};
