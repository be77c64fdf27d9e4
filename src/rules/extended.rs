use super::*;

/// Rock, paper, scissors, lizard, Spock.
///
/// Every choice beats exactly two of the other four:
/// - rock crushes lizard and blunts scissors
/// - paper covers rock and disproves Spock
/// - scissors cut paper and decapitate lizard
/// - lizard poisons Spock and eats paper
/// - Spock smashes scissors and vaporizes rock
#[derive(Debug, Default, Clone, Copy)]
pub struct Extended;

impl Rules for Extended {
    fn name(&self) -> &'static str {
        "Extended"
    }
    fn choices(&self) -> &'static [Choice] {
        &Choice::ALL
    }
    fn beats(&self, choice: Choice) -> &'static [Choice] {
        match choice {
            Choice::Rock => &[Choice::Scissors, Choice::Lizard],
            Choice::Paper => &[Choice::Rock, Choice::Spock],
            Choice::Scissors => &[Choice::Paper, Choice::Lizard],
            Choice::Lizard => &[Choice::Spock, Choice::Paper],
            Choice::Spock => &[Choice::Scissors, Choice::Rock],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary() {
        assert_eq!(Extended.choices().len(), 5);
    }

    #[test]
    fn known_matchups() {
        assert_eq!(Extended.resolve(Choice::Rock, Choice::Lizard), Ok(Outcome::Win));
        assert_eq!(Extended.resolve(Choice::Rock, Choice::Spock), Ok(Outcome::Lose));
        assert_eq!(Extended.resolve(Choice::Spock, Choice::Scissors), Ok(Outcome::Win));
        assert_eq!(Extended.resolve(Choice::Lizard, Choice::Paper), Ok(Outcome::Win));
        assert_eq!(Extended.resolve(Choice::Scissors, Choice::Spock), Ok(Outcome::Lose));
    }

    #[test]
    fn two_up_two_down() {
        let rules = Extended;
        for &a in rules.choices() {
            let outcomes = rules
                .choices()
                .iter()
                .filter(|&&b| b != a)
                .map(|&b| rules.resolve(a, b).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(outcomes.iter().filter(|o| **o == Outcome::Win).count(), 2);
            assert_eq!(outcomes.iter().filter(|o| **o == Outcome::Lose).count(), 2);
        }
    }
}
