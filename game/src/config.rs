//! Startup configuration from the command line.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use directories::ProjectDirs;
use engine::surface::SurfaceSize;

use crate::difficulty::{Difficulty, DifficultyError};
use crate::playfield;

#[derive(Parser, Debug)]
#[command(name = "bblock", about = "Click the falling blocks before they reach the bottom")]
pub struct Cli {
    /// Window width in pixels.
    #[arg(long, default_value_t = playfield::CANVAS_WIDTH * 2)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = playfield::CANVAS_HEIGHT * 2)]
    pub height: u32,

    /// Difficulty preset, 1 (slowest) to 5.
    #[arg(long, default_value_t = 1)]
    pub difficulty: u8,

    /// Directory holding the sound effects.
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Directory for the high score and settings files.
    #[arg(long, value_name = "DIR")]
    pub pref: Option<PathBuf>,

    #[arg(long)]
    pub fullscreen: bool,

    /// Play sound effects.
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub sound: bool,

    /// Start with misses ignored (toggle in game with the right mouse button).
    #[arg(long)]
    pub invincible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window: SurfaceSize,
    pub difficulty: Difficulty,
    pub assets_dir: PathBuf,
    pub pref_dir: PathBuf,
    pub fullscreen: bool,
    pub sound: bool,
    pub invincible: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, DifficultyError> {
        let difficulty = Difficulty::try_from(cli.difficulty)?;
        Ok(Self {
            window: SurfaceSize::new(cli.width, cli.height),
            difficulty,
            assets_dir: cli.assets.unwrap_or_else(default_assets_dir),
            pref_dir: cli.pref.unwrap_or_else(default_pref_dir),
            fullscreen: cli.fullscreen,
            sound: cli.sound,
            invincible: cli.invincible,
        })
    }
}

/// `assets` next to the executable, or under the working directory if that is unknown.
pub fn default_assets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("assets")
}

pub fn default_pref_dir() -> PathBuf {
    ProjectDirs::from("", "", "bblock")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
