use crate::rules::Choice;

/// Errors that can end a session early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input was closed or interrupted before a valid answer arrived.
    Abort,
    /// A choice outside the active rule set's vocabulary was resolved.
    Unlisted(Choice, &'static str),
    /// A rule set's beats-relation is not a tournament over its vocabulary.
    Inconsistent(&'static str, Choice, Choice),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "input aborted"),
            Self::Unlisted(choice, rules) => {
                write!(f, "invalid argument: {} is not a {} choice", choice, rules)
            }
            Self::Inconsistent(rules, a, b) => {
                write!(f, "inconsistent {} rules: {} vs {}", rules, a, b)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(feature = "cli")]
impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        log::warn!("terminal input failed: {}", e);
        Self::Abort
    }
}
