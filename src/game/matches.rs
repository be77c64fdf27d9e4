use super::*;
use crate::Score;
use crate::console::Console;
use crate::console::Event;
use crate::error::Error;
use crate::players::Player;
use crate::players::Role;
use crate::rules::Outcome;
use crate::rules::Rules;

/// One match: first to `target` decisive rounds wins.
///
/// Built fresh for every match and dropped once a winner is declared.
/// Ties score nothing and are replayed without limit.
pub struct Match {
    rules: Box<dyn Rules>,
    target: Score,
    human: Player,
    robot: Player,
    rounds: usize,
    ties: usize,
}

impl Match {
    pub fn new(rules: Box<dyn Rules>, target: Score, human: Player, robot: Player) -> Self {
        debug_assert!(crate::rules::check(rules.as_ref()).is_ok());
        debug_assert!((crate::TARGET_MIN..=crate::TARGET_MAX).contains(&target));
        Self {
            rules,
            target,
            human,
            robot,
            rounds: 0,
            ties: 0,
        }
    }
    pub fn human(&self) -> &Player {
        &self.human
    }
    pub fn robot(&self) -> &Player {
        &self.robot
    }
    /// Rounds played so far, ties included.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn phase(&self) -> Phase {
        match self.human.score().max(self.robot.score()) < self.target {
            true => Phase::Playing,
            false => match self.human.score() > self.robot.score() {
                true => Phase::Over(Role::Human),
                false => Phase::Over(Role::Robot),
            },
        }
    }
}

impl Match {
    /// Collect one choice per side, resolve from the human's side,
    /// and award the point. Ties leave both scores alone.
    pub fn play_turn(&mut self, io: &mut dyn Console) -> Result<Outcome, Error> {
        let choices = self.rules.choices();
        let human = self.human.select(choices, io)?;
        let robot = self.robot.select(choices, io)?;
        let outcome = self.rules.resolve(human, robot)?;
        self.rounds += 1;
        io.notify(&Event::Reveal { human, robot });
        match outcome {
            Outcome::Tie => {
                self.ties += 1;
                io.notify(&Event::Tie);
            }
            Outcome::Win => {
                self.human.add_point();
                io.notify(&Event::Round(Role::Human));
            }
            Outcome::Lose => {
                self.robot.add_point();
                io.notify(&Event::Round(Role::Robot));
            }
        }
        if outcome.is_decisive() {
            io.notify(&Event::Score {
                human: self.human.score(),
                robot: self.robot.score(),
            });
        }
        log::debug!(
            "round {}: {} vs {} -> {} ({:?} {:?})",
            self.rounds,
            human,
            robot,
            outcome,
            self.human,
            self.robot
        );
        Ok(outcome)
    }

    /// Play rounds from 0-0 until someone reaches the target.
    pub fn play(&mut self, io: &mut dyn Console) -> Result<Role, Error> {
        io.notify(&Event::Start {
            rules: self.rules.name(),
            target: self.target,
        });
        log::info!("{} match to {}", self.rules.name(), self.target);
        self.human.reset_score();
        self.robot.reset_score();
        self.rounds = 0;
        self.ties = 0;
        loop {
            match self.phase() {
                Phase::Playing => {
                    self.play_turn(io)?;
                }
                Phase::Over(winner) => {
                    io.notify(&Event::Winner(winner));
                    log::info!(
                        "{} won {}-{} after {} rounds ({} ties)",
                        winner,
                        self.human.score().max(self.robot.score()),
                        self.human.score().min(self.robot.score()),
                        self.rounds,
                        self.ties
                    );
                    return Ok(winner);
                }
            }
        }
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}: {:?} vs {:?}",
            self.rules.name(),
            self.target,
            self.human,
            self.robot
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use crate::players::Robot;
    use crate::players::Scripted;
    use crate::rules::Choice::*;
    use crate::rules::*;

    fn scripted(rules: Box<dyn Rules>, target: Score, human: &[Choice], robot: &[Choice]) -> Match {
        Match::new(
            rules,
            target,
            Player::new(Role::Human, Box::new(Scripted::from_iter(human.iter().copied()))),
            Player::new(Role::Robot, Box::new(Scripted::from_iter(robot.iter().copied()))),
        )
    }

    #[test]
    fn first_decisive_round_ends_short_match() {
        let ref mut io = Transcript::default();
        let ref mut game = scripted(Box::new(Classic), 1, &[Rock, Paper], &[Scissors, Rock]);
        assert_eq!(game.play(io), Ok(Role::Human));
        assert_eq!(game.human().score(), 1);
        assert_eq!(game.robot().score(), 0);
        assert_eq!(game.rounds(), 1);
        assert_eq!(game.phase(), Phase::Over(Role::Human));
        assert_eq!(io.events().last(), Some(&Event::Winner(Role::Human)));
    }

    #[test]
    fn ties_are_free() {
        let ref mut io = Transcript::default();
        let ref mut game = scripted(
            Box::new(Classic),
            1,
            &[Rock, Paper, Scissors, Rock],
            &[Rock, Paper, Scissors, Paper],
        );
        assert_eq!(game.play(io), Ok(Role::Robot));
        assert_eq!(game.ties(), 3);
        assert_eq!(game.rounds(), 4);
        assert_eq!((game.human().score(), game.robot().score()), (0, 1));
        assert_eq!(io.count(|e| *e == Event::Tie), 3);
        assert_eq!(io.count(|e| matches!(e, Event::Score { .. })), 1);
    }

    #[test]
    fn tie_turn_keeps_scores() {
        let ref mut io = Transcript::default();
        let ref mut game = scripted(Box::new(Extended), 3, &[Spock], &[Spock]);
        assert_eq!(game.play_turn(io), Ok(Outcome::Tie));
        assert_eq!((game.human().score(), game.robot().score()), (0, 0));
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn extended_match_to_two() {
        let ref mut io = Transcript::default();
        let ref mut game = scripted(
            Box::new(Extended),
            2,
            &[Rock, Lizard, Spock],
            &[Spock, Paper, Scissors],
        );
        assert_eq!(game.play(io), Ok(Role::Human));
        assert_eq!((game.human().score(), game.robot().score()), (2, 1));
        assert_eq!(
            io.events()
                .iter()
                .filter(|e| matches!(e, Event::Score { .. }))
                .last(),
            Some(&Event::Score { human: 2, robot: 1 })
        );
    }

    #[test]
    fn unlisted_choice_is_fatal() {
        let ref mut io = Transcript::default();
        let ref mut game = Match::new(
            Box::new(Classic),
            1,
            Player::new(Role::Human, Box::new(Spocker)),
            Player::new(Role::Robot, Box::new(Robot::seeded(0))),
        );
        assert_eq!(game.play(io), Err(Error::Unlisted(Spock, "Classic")));
        assert_eq!(game.rounds(), 0);
    }

    /// Ignores the menu on purpose.
    struct Spocker;
    impl crate::players::Source for Spocker {
        fn select(&mut self, _: &[Choice], _: &mut dyn Console) -> Result<Choice, Error> {
            Ok(Spock)
        }
    }

    #[test]
    fn scores_stay_in_bounds() {
        for seed in 0..32 {
            let target = (seed % 10 + 1) as Score;
            let ref mut io = Transcript::default();
            let ref mut game = Match::new(
                Variant::ALL[seed as usize % 2].rules(),
                target,
                Player::new(Role::Human, Box::new(Robot::seeded(seed))),
                Player::new(Role::Robot, Box::new(Robot::seeded(seed + 1000))),
            );
            let winner = game.play(io).unwrap();
            let (h, r) = (game.human().score(), game.robot().score());
            assert!(h <= target && r <= target);
            assert!(h.max(r) == target && h.min(r) < target);
            assert_eq!(winner == Role::Human, h == target);
            let mut last = (0, 0);
            for event in io.events() {
                if let Event::Score { human, robot } = *event {
                    assert!(human <= target && robot <= target);
                    assert_eq!(human + robot, last.0 + last.1 + 1);
                    last = (human, robot);
                }
            }
        }
    }

    #[test]
    fn replay_resets_scores() {
        let ref mut io = Transcript::default();
        let ref mut game = scripted(
            Box::new(Classic),
            1,
            &[Rock, Paper],
            &[Scissors, Scissors],
        );
        assert_eq!(game.play(io), Ok(Role::Human));
        assert_eq!(game.play(io), Ok(Role::Robot));
        assert_eq!((game.human().score(), game.robot().score()), (0, 1));
    }
}
