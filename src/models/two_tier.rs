use super::{CellModel, Transition};
use crate::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TwoTierCell {
    #[default]
    Dead = 0,
    /// Born in the last generation.
    Young = 1,
    /// Survived at least one generation.
    Old = 2,
}

/// Life that tells newborn cells apart from survivors.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoTier;

impl CellModel for TwoTier {
    type Cell = TwoTierCell;

    const NAME: &'static str = "two-tier";
    const DEAD: TwoTierCell = TwoTierCell::Dead;
    const SEEDED: TwoTierCell = TwoTierCell::Young;

    fn is_alive(&self, cell: TwoTierCell) -> bool {
        cell != TwoTierCell::Dead
    }

    fn next_state(&self, cell: TwoTierCell, live_neighbors: u8) -> TwoTierCell {
        match Transition::of(self.is_alive(cell), live_neighbors) {
            Transition::Death => TwoTierCell::Dead,
            Transition::Birth => TwoTierCell::Young,
            Transition::Survival => TwoTierCell::Old,
        }
    }

    fn render_color(&self, cell: TwoTierCell) -> Rgb {
        match cell {
            TwoTierCell::Dead => Rgb::BLACK,
            TwoTierCell::Young => Rgb::ORCHID,
            TwoTierCell::Old => Rgb::PURPLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_young_grows_old() {
        let m = TwoTier;
        assert_eq!(m.next_state(TwoTierCell::Dead, 3), TwoTierCell::Young);
        assert_eq!(m.next_state(TwoTierCell::Young, 2), TwoTierCell::Old);
        assert_eq!(m.next_state(TwoTierCell::Young, 3), TwoTierCell::Old);
        assert_eq!(m.next_state(TwoTierCell::Old, 3), TwoTierCell::Old);
        assert_eq!(m.next_state(TwoTierCell::Old, 0), TwoTierCell::Dead);
    }
}
