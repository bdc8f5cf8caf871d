//! Ball Eater entry point
//!
//! Loads settings, sets up logging and runs the native game loop.

use ball_eater::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Ball Eater starting: {}x{}, seed {seed}",
        settings.width,
        settings.height
    );

    ball_eater::platform::run(settings, seed)
}
