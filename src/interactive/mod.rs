//! Interactive TUI mode
//!
//! A free-play board where letters are drawn from a bag and placed one at a
//! time, with live scoring against the curated dictionary.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, LetterBag, run_tui};
