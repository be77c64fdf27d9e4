use super::*;
use std::collections::VecDeque;

/// A console with canned input that records everything it is shown.
/// Running out of input reads as [`Error::Abort`], like a closed stdin.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    input: VecDeque<String>,
    prompts: Vec<String>,
    events: Vec<Event>,
}

impl Transcript {
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
    /// How many recorded events satisfy `f`.
    pub fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&Event) -> bool,
    {
        self.events.iter().filter(|e| f(e)).count()
    }
}

impl<S> FromIterator<S> for Transcript
where
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            input: iter.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Console for Transcript {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or(Error::Abort)
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}
