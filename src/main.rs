//! Solo Pong entry point
//!
//! Sets up logging, loads settings and runs the game loop.

use std::process::ExitCode;

use solo_pong::Settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Solo Pong starting...");

    let settings = Settings::load();
    match solo_pong::run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Unable to start: {}", e);
            ExitCode::FAILURE
        }
    }
}
