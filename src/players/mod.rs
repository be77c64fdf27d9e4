//! Match participants and where their choices come from.
//!
//! A [`Player`] is plain data (who, and how many points) plus an injected
//! [`Source`]. The match loop never knows whether a choice was typed,
//! rolled, or replayed.
//!
//! - [`Human`] — asks the console until a valid choice is typed
//! - [`Robot`] — draws uniformly at random
//! - [`Scripted`] — replays a fixed sequence
mod human;
mod player;
mod robot;
mod scripted;

pub use human::*;
pub use player::*;
pub use robot::*;
pub use scripted::*;

use crate::console::Console;
use crate::error::Error;
use crate::rules::Choice;

/// How a participant picks from a menu of choices.
pub trait Source {
    /// Returns a member of `choices`, which is never empty.
    fn select(&mut self, choices: &[Choice], io: &mut dyn Console) -> Result<Choice, Error>;
}

/// Which side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Role {
    Human,
    Robot,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "You"),
            Self::Robot => write!(f, "Computer"),
        }
    }
}
