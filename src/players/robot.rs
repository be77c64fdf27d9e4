use super::*;
use crate::console::Event;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Uniformly random choices.
#[derive(Debug)]
pub struct Robot(SmallRng);

impl Robot {
    /// Reproducible choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Source for Robot {
    fn select(&mut self, choices: &[Choice], io: &mut dyn Console) -> Result<Choice, Error> {
        let choice = choices
            .choose(&mut self.0)
            .copied()
            .expect("non empty choices conditional on being asked to choose");
        io.notify(&Event::Computer(choice));
        Ok(choice)
    }
}
