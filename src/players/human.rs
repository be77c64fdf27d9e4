use super::*;
use crate::console::Event;
use crate::console::Reject;

/// Choices typed at the console. Bad input is re-asked, never surfaced.
#[derive(Debug, Default)]
pub struct Human;

impl Source for Human {
    fn select(&mut self, choices: &[Choice], io: &mut dyn Console) -> Result<Choice, Error> {
        io.notify(&Event::Choices(choices.to_vec()));
        loop {
            let input = io.read_line("Your choice")?;
            match Choice::try_from(input.as_str()) {
                Ok(choice) if choices.contains(&choice) => return Ok(choice),
                _ => {
                    log::debug!("rejected choice {:?}", input);
                    io.notify(&Event::Reject(Reject::Choice(choices.to_vec())))
                }
            }
        }
    }
}
