use super::*;
use crate::Score;

/// One side of a match: identity, score, and a choice source.
pub struct Player {
    role: Role,
    score: Score,
    source: Box<dyn Source>,
}

impl Player {
    pub fn new(role: Role, source: Box<dyn Source>) -> Self {
        Self {
            role,
            score: 0,
            source,
        }
    }
    pub fn human() -> Self {
        Self::new(Role::Human, Box::new(Human))
    }
    pub fn robot() -> Self {
        Self::new(Role::Robot, Box::new(Robot::default()))
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
    pub fn add_point(&mut self) {
        self.score += 1;
    }
    pub fn select(&mut self, choices: &[Choice], io: &mut dyn Console) -> Result<Choice, Error> {
        self.source.select(choices, io)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.role, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_accumulate_and_reset() {
        let ref mut player = Player::human();
        assert_eq!(player.score(), 0);
        player.add_point();
        player.add_point();
        assert_eq!(player.score(), 2);
        player.reset_score();
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn named_by_role() {
        assert_eq!(Player::human().role().to_string(), "You");
        assert_eq!(Player::robot().role().to_string(), "Computer");
        assert_eq!(Player::robot().role(), Role::Robot);
    }
}
