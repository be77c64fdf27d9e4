use super::*;
use std::collections::VecDeque;

/// Replays a fixed sequence of choices.
/// Running dry, or scripting a choice the rules don't offer, is [`Error::Abort`].
#[derive(Debug, Default, Clone)]
pub struct Scripted(VecDeque<Choice>);

impl FromIterator<Choice> for Scripted {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Choice>,
    {
        Self(iter.into_iter().collect())
    }
}

impl Source for Scripted {
    fn select(&mut self, choices: &[Choice], _: &mut dyn Console) -> Result<Choice, Error> {
        self.0
            .pop_front()
            .filter(|choice| choices.contains(choice))
            .ok_or(Error::Abort)
    }
}
