mod engine;
mod gui;
mod models;
mod utils;

pub use engine::{LifeEngine, SEED_FILL_RATE};
pub use gui::{App, Config};
pub use models::{
    Aging, Binary, BinaryCell, CellModel, ModelKind, Transition, TwoTier, TwoTierCell,
};
pub use utils::{
    temperature_color, AgePalette, ConfigError, Rgb, Simulation, COLDEST_KELVIN, FADE_KELVIN,
    HOTTEST_KELVIN,
};
