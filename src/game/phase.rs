use crate::players::Role;

/// Match-level state. A single round's resolution is its `Outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Over(Role),
}
