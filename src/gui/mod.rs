mod app;
mod config;
mod draw;
mod ticker;

pub use app::App;
pub use config::Config;
use ticker::Ticker;
