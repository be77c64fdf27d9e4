use crate::Score;
use crate::players::Role;
use crate::rules::Choice;
use crate::rules::Variant;

/// Everything the game shows the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Banner,
    Menu,
    Reject(Reject),
    Start { rules: &'static str, target: Score },
    Choices(Vec<Choice>),
    Computer(Choice),
    Reveal { human: Choice, robot: Choice },
    Tie,
    Round(Role),
    Score { human: Score, robot: Score },
    Winner(Role),
    Interrupted,
    Farewell,
}

/// Why an answer was turned down. The question is asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reject {
    Mode,
    NaN,
    Low,
    High,
    Choice(Vec<Choice>),
}

impl Event {
    /// Events that open a new block of output.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            Self::Menu
                | Self::Start { .. }
                | Self::Choices(_)
                | Self::Reveal { .. }
                | Self::Winner(_)
                | Self::Interrupted
                | Self::Farewell
        )
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Banner => write!(f, "Let's Go!! Rock Paper Scissors!!"),
            Self::Menu => {
                write!(f, "Game Modes:")?;
                for variant in Variant::ALL {
                    write!(f, "\n{}", variant)?;
                }
                Ok(())
            }
            Self::Reject(reject) => write!(f, "{}", reject),
            Self::Start { rules, target } => {
                write!(f, "=== {} Mode ===\nFirst to {} wins!", rules, target)
            }
            Self::Choices(choices) => write!(f, "Choices: {}", Choice::list(choices)),
            Self::Computer(choice) => write!(f, "Computer chooses: {}", choice),
            Self::Reveal { human, robot } => write!(f, "You: {} | Computer: {}", human, robot),
            Self::Tie => write!(f, "Tie! Playing again..."),
            Self::Round(Role::Human) => write!(f, "You win this round!"),
            Self::Round(Role::Robot) => write!(f, "Computer wins this round!"),
            Self::Score { human, robot } => {
                write!(f, "Score: {} (You) vs. {} (Computer)", human, robot)
            }
            Self::Winner(Role::Human) => write!(f, "You win the game!!!"),
            Self::Winner(Role::Robot) => {
                write!(f, "Computer wins the game! :( Better luck next time!")
            }
            Self::Interrupted => write!(f, "Thanks for playing!"),
            Self::Farewell => write!(f, "Thanks for playing! Till next time!\nBye bye!"),
        }
    }
}

impl std::fmt::Display for Reject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mode => write!(f, "Please enter 1 or 2"),
            Self::NaN => write!(f, "Please enter a valid number"),
            Self::Low => write!(
                f,
                "Please enter a positive number from {} to {}",
                crate::TARGET_MIN,
                crate::TARGET_MAX
            ),
            Self::High => write!(
                f,
                "Maximum {} points allowed for a reasonable game length",
                crate::TARGET_MAX
            ),
            Self::Choice(choices) => {
                write!(f, "Invalid choice. Pick from: {}", Choice::list(choices))
            }
        }
    }
}
