use super::*;
use crate::Score;
use crate::TARGET_DEFAULT;
use crate::TARGET_MAX;
use crate::TARGET_MIN;
use crate::console::Console;
use crate::console::Event;
use crate::console::Reject;
use crate::error::Error;
use crate::players::Player;
use crate::players::Robot;
use crate::players::Role;
use crate::rules::Variant;
use std::num::IntErrorKind;

/// The outer loop: pick a variant and target, play a match, offer another.
///
/// Every match is built from scratch. Bad answers are re-asked forever;
/// only [`Error::Abort`] leaves early, and it is absorbed here.
#[derive(Debug, Default, Clone)]
pub struct Session {
    variant: Option<Variant>,
    target: Option<Score>,
    seed: Option<u64>,
}

impl Session {
    /// Skip the mode menu and always play this variant.
    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }
    /// Skip the target prompt and always play to this score.
    pub fn with_target(mut self, target: Option<Score>) -> Self {
        self.target = target.filter(|t| (TARGET_MIN..=TARGET_MAX).contains(t));
        self
    }
    /// Match `n` of the session uses a computer seeded with `seed + n`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn run(&self, io: &mut dyn Console) -> Result<(), Error> {
        io.notify(&Event::Banner);
        for n in 0u64.. {
            match self.once(n, io) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(Error::Abort) => {
                    log::warn!("session aborted during match {}", n + 1);
                    io.notify(&Event::Interrupted);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        io.notify(&Event::Farewell);
        Ok(())
    }
}

impl Session {
    /// One match plus the play-again question.
    fn once(&self, n: u64, io: &mut dyn Console) -> Result<bool, Error> {
        let variant = match self.variant {
            Some(variant) => variant,
            None => Self::mode(io)?,
        };
        let target = match self.target {
            Some(target) => target,
            None => Self::goal(io)?,
        };
        Match::new(variant.rules(), target, Player::human(), self.robot(n)).play(io)?;
        Self::again(io)
    }

    fn robot(&self, n: u64) -> Player {
        match self.seed {
            Some(seed) => Player::new(Role::Robot, Box::new(Robot::seeded(seed.wrapping_add(n)))),
            None => Player::robot(),
        }
    }

    fn mode(io: &mut dyn Console) -> Result<Variant, Error> {
        io.notify(&Event::Menu);
        loop {
            let input = io.read_line("Choose mode (1 or 2)")?;
            match Variant::try_from(input.as_str()) {
                Ok(variant) => return Ok(variant),
                Err(_) => io.notify(&Event::Reject(Reject::Mode)),
            }
        }
    }

    fn goal(io: &mut dyn Console) -> Result<Score, Error> {
        let ref prompt = format!(
            "Play to how many points? (default {}, max {})",
            TARGET_DEFAULT, TARGET_MAX
        );
        loop {
            let input = io.read_line(prompt)?;
            match target(&input) {
                Ok(target) => return Ok(target),
                Err(reject) => io.notify(&Event::Reject(reject)),
            }
        }
    }

    fn again(io: &mut dyn Console) -> Result<bool, Error> {
        let input = io.read_line("Play again? (y/n)")?;
        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Parse a target score answer. Empty means the default.
pub fn target(input: &str) -> Result<Score, Reject> {
    if input.is_empty() {
        return Ok(TARGET_DEFAULT);
    }
    match input.trim().parse::<i64>() {
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(Reject::High),
            IntErrorKind::NegOverflow => Err(Reject::Low),
            _ => Err(Reject::NaN),
        },
        Ok(n) if n < TARGET_MIN as i64 => Err(Reject::Low),
        Ok(n) if n > TARGET_MAX as i64 => Err(Reject::High),
        Ok(n) => Ok(n as Score),
    }
}
