mod aging;
mod binary;
mod two_tier;

pub use aging::Aging;
pub use binary::{Binary, BinaryCell};
pub use two_tier::{TwoTier, TwoTierCell};

use crate::{ConfigError, LifeEngine, Rgb, Simulation};
use std::fmt::Debug;
use std::str::FromStr;

/// State space and transition rule of a single cell.
///
/// The engine owns the grid and the neighborhood scan; a model only decides
/// what a cell becomes given its own state and the number of live neighbors.
pub trait CellModel {
    type Cell: Copy + Eq + Debug + Send + Sync + 'static;

    /// Human-readable name used in logs.
    const NAME: &'static str;
    const DEAD: Self::Cell;
    /// State of a live cell produced by random seeding.
    const SEEDED: Self::Cell;
    /// Count neighbors over the full 3x3 block and subtract the center
    /// afterwards instead of skipping it during the scan.
    const COUNTS_SELF: bool = false;

    fn is_alive(&self, cell: Self::Cell) -> bool;

    /// `live_neighbors` is always in `0..=8`.
    fn next_state(&self, cell: Self::Cell, live_neighbors: u8) -> Self::Cell;

    fn render_color(&self, cell: Self::Cell) -> Rgb;
}

/// Outcome of the B3/S23 rule for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Death,
    Birth,
    Survival,
}

impl Transition {
    /// Classic Conway thresholds. A dead cell that stays dead is `Death` too.
    pub fn of(alive: bool, live_neighbors: u8) -> Self {
        match (alive, live_neighbors) {
            (true, 2 | 3) => Self::Survival,
            (false, 3) => Self::Birth,
            _ => Self::Death,
        }
    }
}

/// Runtime selector of the cell model, for hosts that pick it from config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelKind {
    Binary,
    TwoTier,
    #[default]
    Aging,
}

impl ModelKind {
    pub fn build(self, width: usize, height: usize) -> Result<Box<dyn Simulation>, ConfigError> {
        Ok(match self {
            Self::Binary => Box::new(LifeEngine::<Binary>::new(width, height)?),
            Self::TwoTier => Box::new(LifeEngine::<TwoTier>::new(width, height)?),
            Self::Aging => Box::new(LifeEngine::<Aging>::new(width, height)?),
        })
    }
}

impl FromStr for ModelKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "two-tier" | "two_tier" | "twotier" => Ok(Self::TwoTier),
            "aging" => Ok(Self::Aging),
            _ => Err(ConfigError::UnknownModel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        for alive in [false, true] {
            for n in [0, 1, 4, 5, 6, 7, 8] {
                assert_eq!(Transition::of(alive, n), Transition::Death);
            }
        }
        assert_eq!(Transition::of(false, 2), Transition::Death);
        assert_eq!(Transition::of(true, 2), Transition::Survival);
        assert_eq!(Transition::of(false, 3), Transition::Birth);
        assert_eq!(Transition::of(true, 3), Transition::Survival);
    }

    #[test]
    fn test_model_kind_from_str() {
        assert_eq!("binary".parse::<ModelKind>(), Ok(ModelKind::Binary));
        assert_eq!(" Two-Tier ".parse::<ModelKind>(), Ok(ModelKind::TwoTier));
        assert_eq!("AGING".parse::<ModelKind>(), Ok(ModelKind::Aging));
        assert_eq!(
            "hex".parse::<ModelKind>(),
            Err(ConfigError::UnknownModel("hex".to_string()))
        );
    }

    #[test]
    fn test_model_kind_build() {
        let sim = ModelKind::TwoTier.build(8, 4).unwrap();
        assert_eq!(sim.size(), (8, 4));
        assert_eq!(sim.model_name(), TwoTier::NAME);
        assert!(ModelKind::Aging.build(0, 4).is_err());
    }
}
