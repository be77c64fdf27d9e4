use super::*;

/// Rock, paper, scissors.
#[derive(Debug, Default, Clone, Copy)]
pub struct Classic;

impl Rules for Classic {
    fn name(&self) -> &'static str {
        "Classic"
    }
    fn choices(&self) -> &'static [Choice] {
        &[Choice::Rock, Choice::Paper, Choice::Scissors]
    }
    fn beats(&self, choice: Choice) -> &'static [Choice] {
        match choice {
            Choice::Rock => &[Choice::Scissors],
            Choice::Paper => &[Choice::Rock],
            Choice::Scissors => &[Choice::Paper],
            Choice::Lizard | Choice::Spock => &[],
        }
    }
}
