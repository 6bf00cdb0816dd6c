mod error;
mod rgb;
mod temperature;
mod traits;

pub use error::ConfigError;
pub use rgb::Rgb;
pub use temperature::{
    temperature_color, AgePalette, COLDEST_KELVIN, FADE_KELVIN, HOTTEST_KELVIN,
};
pub use traits::Simulation;
