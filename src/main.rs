#![warn(clippy::all)]

use aging_life::{App, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui::ViewportBuilder;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = App::from_env().inspect_err(|e| log::error!("bad configuration: {}", e))?;
    let title = app.title();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(Config::WINDOW_SIZE)
            .with_min_inner_size(Config::MIN_WINDOW_SIZE),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}
