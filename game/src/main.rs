use std::process::ExitCode;

use anyhow::Context;
use bblock::app::{AppContext, Bblock};
use bblock::config::{Cli, Config};
use bblock::highscore::ScoreFile;
use bblock::settings::SettingsStore;
use bblock::sfx;
use clap::Parser;
use engine::app::{AppConfig, run_app};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_cli(cli).context("invalid startup configuration")?;
    log::info!(
        "difficulty {}, window {}x{}, pref {}, assets {}",
        config.difficulty,
        config.window.width,
        config.window.height,
        config.pref_dir.display(),
        config.assets_dir.display()
    );

    let settings = SettingsStore::in_dir(&config.pref_dir).load();
    let sfx = sfx::open_player(&config.assets_dir, sfx::cue_gain(config.sound, settings.audio));

    let ctx = AppContext::new(
        config.difficulty,
        Box::new(ScoreFile::in_dir(&config.pref_dir)),
        sfx,
    )
    .with_invincible(config.invincible);

    let mut window = AppConfig::new("bblock", config.window);
    window.fullscreen = config.fullscreen;
    run_app(window, Bblock::new(ctx)).context("window loop failed")
}
