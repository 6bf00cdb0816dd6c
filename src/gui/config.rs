use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const GRID_WIDTH: usize = 256;
    pub const GRID_HEIGHT: usize = 256;
    /// 8 generations per second.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(125);

    pub const WINDOW_SIZE: [f32; 2] = [800., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [256., 256.];
    pub const FRAME_MARGIN: f32 = 8.;
    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;

    /// Environment variable selecting the cell model.
    pub const MODEL_VAR: &'static str = "LIFE_MODEL";
    /// Environment variable fixing the random seed.
    pub const SEED_VAR: &'static str = "LIFE_SEED";
}
