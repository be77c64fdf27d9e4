/// Something a player can throw.
///
/// The enum covers every variant's vocabulary; a given rule set
/// only offers the ordered subset returned by `Rules::choices`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Choice {
    pub const ALL: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Lizard => "lizard",
            Self::Spock => "spock",
        }
    }
    /// Comma separated names, in menu order.
    pub fn list(choices: &[Self]) -> String {
        choices
            .iter()
            .map(Self::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Case and surrounding whitespace are ignored.
impl TryFrom<&str> for Choice {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let ref normal = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == normal.as_str())
            .ok_or_else(|| format!("unknown choice: {}", s.trim()))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
