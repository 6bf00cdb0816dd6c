use super::{CellModel, Transition};
use crate::{AgePalette, Rgb};

/// Life where every cell carries its age, colored by a blackbody palette.
///
/// Age `0` is dead, `1` is newborn, survivors get one older per generation
/// up to `u8::MAX`.
#[derive(Clone, Debug, Default)]
pub struct Aging {
    palette: AgePalette,
}

impl Aging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_for_age(&self, age: u8) -> Rgb {
        self.palette.color_for_age(age)
    }
}

impl CellModel for Aging {
    type Cell = u8;

    const NAME: &'static str = "aging";
    const DEAD: u8 = 0;
    const SEEDED: u8 = 1;
    const COUNTS_SELF: bool = true;

    fn is_alive(&self, age: u8) -> bool {
        age != 0
    }

    fn next_state(&self, age: u8, live_neighbors: u8) -> u8 {
        match Transition::of(self.is_alive(age), live_neighbors) {
            Transition::Death => 0,
            Transition::Birth => 1,
            Transition::Survival => age.min(u8::MAX - 1) + 1,
        }
    }

    fn render_color(&self, age: u8) -> Rgb {
        self.color_for_age(age)
    }
}
