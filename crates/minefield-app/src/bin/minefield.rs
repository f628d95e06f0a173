//! Minefield desktop application using egui/eframe.

use clap::{CommandFactory as _, Parser as _, error::ErrorKind};
use minefield_app::{Args, MinefieldApp, version};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.minefield";

    better_panic::install();
    env_logger::init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => Args::command().error(ErrorKind::ValueValidation, err).exit(),
    };
    let game = match config.start_game() {
        Ok(game) => game,
        Err(err) => Args::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    log::info!("starting Minefield, version={}", version::build_version());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size(config.window)
            .with_min_inner_size((200.0, 200.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Minefield",
        options,
        Box::new(|cc| Ok(Box::new(MinefieldApp::new(cc, game)))),
    )
}
