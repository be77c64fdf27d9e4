use super::*;
use crate::players::Role;
use colored::Colorize;
use dialoguer::Input;

/// The interactive terminal.
///
/// The goodbye races the Ctrl+C handler, so it is only printed
/// after winning [`crate::leaving`].
#[derive(Debug, Default)]
pub struct Terminal {
    leaving: bool,
}

impl Terminal {
    pub(crate) fn owns_goodbye(&mut self) -> bool {
        self.leaving = self.leaving || crate::leaving();
        self.leaving
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(Error::from)
    }
    fn notify(&mut self, event: &Event) {
        if matches!(event, Event::Interrupted | Event::Farewell) && !self.owns_goodbye() {
            return;
        }
        if event.is_heading() {
            println!();
        }
        let text = event.to_string();
        match event {
            Event::Banner | Event::Start { .. } => println!("{}", text.bold()),
            Event::Reject(_) => println!("{}", text.yellow()),
            Event::Tie => println!("{}", text.dimmed()),
            Event::Round(Role::Human) | Event::Winner(Role::Human) => println!("{}", text.green()),
            Event::Round(Role::Robot) | Event::Winner(Role::Robot) => println!("{}", text.red()),
            _ => println!("{}", text),
        }
    }
}
