//! Rule sets: a choice vocabulary plus the beats-relation over it.
//!
//! - [`Choice`] — every throw any variant knows about
//! - [`Outcome`] — win/lose/tie from the first choice's side
//! - [`Rules`] — the contract each variant implements
//! - [`Classic`], [`Extended`] — the two built-in variants
//! - [`Variant`] — factory from menu input to a boxed rule set
mod choice;
mod classic;
mod extended;
mod outcome;
mod variant;

pub use choice::*;
pub use classic::*;
pub use extended::*;
pub use outcome::*;
pub use variant::*;

use crate::error::Error;

/// A named rule variant. Immutable and stateless.
///
/// Implementors only supply data; [`Rules::resolve`] derives outcomes
/// from [`Rules::beats`]. Any new variant should pass [`check`].
pub trait Rules {
    fn name(&self) -> &'static str;
    /// The ordered vocabulary offered to players. Never empty.
    fn choices(&self) -> &'static [Choice];
    /// The choices that `choice` defeats.
    fn beats(&self, choice: Choice) -> &'static [Choice];

    /// Outcome of `a` against `b`, from `a`'s side.
    ///
    /// Both choices must come from [`Rules::choices`]; anything else
    /// is a caller bug and comes back as [`Error::Unlisted`].
    fn resolve(&self, a: Choice, b: Choice) -> Result<Outcome, Error> {
        for choice in [a, b] {
            if !self.choices().contains(&choice) {
                return Err(Error::Unlisted(choice, self.name()));
            }
        }
        if a == b {
            Ok(Outcome::Tie)
        } else if self.beats(a).contains(&b) {
            Ok(Outcome::Win)
        } else {
            Ok(Outcome::Lose)
        }
    }
}

/// Verify the beats-relation is a tournament over the vocabulary:
/// no self-wins, no outside names, exactly one winner per distinct pair.
pub fn check(rules: &dyn Rules) -> Result<(), Error> {
    let choices = rules.choices();
    let name = rules.name();
    if choices.is_empty() {
        return Err(Error::Inconsistent(name, Choice::Rock, Choice::Rock));
    }
    for &a in choices {
        for &b in rules.beats(a) {
            if a == b || !choices.contains(&b) {
                return Err(Error::Inconsistent(name, a, b));
            }
        }
    }
    for (i, &a) in choices.iter().enumerate() {
        for &b in &choices[i + 1..] {
            let ab = rules.beats(a).contains(&b);
            let ba = rules.beats(b).contains(&a);
            if ab == ba {
                return Err(Error::Inconsistent(name, a, b));
            }
        }
    }
    Ok(())
}
