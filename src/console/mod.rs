//! The text collaborator the game talks to.
//!
//! The core never prints. It asks a [`Console`] for lines and hands it
//! [`Event`]s to show; how they look is the console's business.
//!
//! - [`Terminal`] — dialoguer prompts and colored output (requires `cli` feature)
//! - [`Transcript`] — canned input, recorded events; for tests and replays
mod event;
#[cfg(feature = "cli")]
mod terminal;
mod transcript;

pub use event::*;
#[cfg(feature = "cli")]
pub use terminal::*;
pub use transcript::*;

use crate::error::Error;

/// Line-based input and event output.
pub trait Console {
    /// Ask for one line of input.
    /// Closed or interrupted input is [`Error::Abort`].
    fn read_line(&mut self, prompt: &str) -> Result<String, Error>;
    /// Show something that happened.
    fn notify(&mut self, event: &Event);
}
