use super::{Config, Ticker};
use crate::{ConfigError, ModelKind, Simulation};
use eframe::egui::{CentralPanel, Context, Frame, Margin};
use std::time::Instant;

/// Viewer that advances a simulation on a fixed cadence and paints it.
pub struct App {
    pub(super) life: Box<dyn Simulation>, // Engine behind the selected cell model.
    pub(super) ticker: Ticker,            // Decides when the next generation is due.
    pub(super) seed: u64,                 // Seed the field was randomized with.
}

impl App {
    pub fn new(model: ModelKind, seed: Option<u64>) -> Result<Self, ConfigError> {
        let mut life = model.build(Config::GRID_WIDTH, Config::GRID_HEIGHT)?;
        let seed = life.seed(seed);
        Ok(Self {
            life,
            ticker: Ticker::new(Config::TICK_INTERVAL, Instant::now()),
            seed,
        })
    }

    /// Reads the model and the seed from [`Config::MODEL_VAR`] and
    /// [`Config::SEED_VAR`]; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let model = match std::env::var(Config::MODEL_VAR) {
            Ok(name) => name.parse()?,
            Err(_) => ModelKind::default(),
        };
        let seed = parse_seed(std::env::var(Config::SEED_VAR).ok())?;
        log::info!("starting {:?} model", model);
        Self::new(model, seed)
    }

    pub fn title(&self) -> String {
        format!("Life ({}, seed {})", self.life.model_name(), self.seed)
    }

    fn tick(&mut self, now: Instant) {
        if self.ticker.poll(now) {
            self.life.step();
            log::debug!(
                "tick {}: generation {}",
                self.ticker.ticks(),
                self.life.generation()
            );
        }
    }
}

/// Unset means "pick a random seed"; anything else must be a `u64`.
fn parse_seed(raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    raw.map(|s| s.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed(s)))
        .transpose()
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(now);

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        ctx.request_repaint_after(self.ticker.remaining(now));
    }
}
