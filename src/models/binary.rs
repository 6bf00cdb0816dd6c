use super::{CellModel, Transition};
use crate::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BinaryCell {
    #[default]
    Dead = 0,
    Alive = 1,
}

/// Plain Conway's Game of Life.
#[derive(Clone, Copy, Debug, Default)]
pub struct Binary;

impl CellModel for Binary {
    type Cell = BinaryCell;

    const NAME: &'static str = "binary";
    const DEAD: BinaryCell = BinaryCell::Dead;
    const SEEDED: BinaryCell = BinaryCell::Alive;

    fn is_alive(&self, cell: BinaryCell) -> bool {
        cell != BinaryCell::Dead
    }

    fn next_state(&self, cell: BinaryCell, live_neighbors: u8) -> BinaryCell {
        match Transition::of(self.is_alive(cell), live_neighbors) {
            Transition::Death => BinaryCell::Dead,
            Transition::Birth | Transition::Survival => BinaryCell::Alive,
        }
    }

    fn render_color(&self, cell: BinaryCell) -> Rgb {
        match cell {
            BinaryCell::Dead => Rgb::BLACK,
            BinaryCell::Alive => Rgb::PURPLE,
        }
    }
}
