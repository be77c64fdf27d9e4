//! Rounds, matches, and the session that strings them together.
//!
//! - [`Match`] — two players, one rule set, a target score; owns the round loop
//! - [`Phase`] — whether a match is still running or who took it
//! - [`Session`] — menus, target score, and the play-again loop
mod matches;
mod phase;
mod session;

pub use matches::*;
pub use phase::*;
pub use session::*;
