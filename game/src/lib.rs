pub mod app;
pub mod block;
pub mod config;
pub mod difficulty;
pub mod game_state;
pub mod highscore;
pub mod playfield;
pub mod settings;
pub mod sfx;
pub mod title;
