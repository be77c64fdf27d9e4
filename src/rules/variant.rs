use super::*;

/// The built-in rule variants, keyed by their menu number.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Variant {
    Classic,
    Extended,
}

impl Variant {
    pub const ALL: [Self; 2] = [Self::Classic, Self::Extended];
    pub fn rules(&self) -> Box<dyn Rules> {
        match self {
            Self::Classic => Box::new(Classic),
            Self::Extended => Box::new(Extended),
        }
    }
    pub fn key(&self) -> &'static str {
        match self {
            Self::Classic => "1",
            Self::Extended => "2",
        }
    }
}

/// Menu input, surrounding whitespace ignored.
impl TryFrom<&str> for Variant {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.key() == key)
            .ok_or_else(|| format!("no game mode {}", key))
    }
}

/// Menu line.
impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "{}. Classic (Rock, Paper, Scissors)", self.key()),
            Self::Extended => write!(f, "{}. Extended (+ Lizard, Spock)", self.key()),
        }
    }
}
