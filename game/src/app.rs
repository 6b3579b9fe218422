//! The application: shared context plus the Title/Game screen machine.

use std::time::{SystemTime, UNIX_EPOCH};

use engine::graphics::{Color, Renderer2d};
use engine::input::InputEvent;
use engine::surface::SurfaceSize;
use engine::{Flow, FrameApp};

use crate::difficulty::Difficulty;
use crate::game_state::GameState;
use crate::highscore::{self, MAX_SCORE, ScoreStore};
use crate::playfield;
use crate::sfx::{Cue, CuePlayer};
use crate::title::TitleState;

/// Everything the screens share for the lifetime of the process.
pub struct AppContext {
    difficulty: Difficulty,
    playfield_height: u32,
    invincible: bool,
    high_score: u32,
    scores: Box<dyn ScoreStore>,
    sfx: Box<dyn CuePlayer>,
    seeds: Box<dyn FnMut() -> u64>,
}

impl AppContext {
    pub fn new(difficulty: Difficulty, scores: Box<dyn ScoreStore>, sfx: Box<dyn CuePlayer>) -> Self {
        Self {
            difficulty,
            playfield_height: playfield::CANVAS_HEIGHT,
            invincible: false,
            high_score: 0,
            scores,
            sfx,
            seeds: Box::new(wall_clock_seed),
        }
    }

    pub fn with_invincible(mut self, invincible: bool) -> Self {
        self.invincible = invincible;
        self
    }

    /// Replaces the wall clock as the source of per-run seeds.
    pub fn with_seed_source(mut self, seeds: impl FnMut() -> u64 + 'static) -> Self {
        self.seeds = Box::new(seeds);
        self
    }

    /// Shrinks (or grows) the span blocks fall through. Drawing still uses the full canvas.
    ///
    /// Headless test hook for short, exactly timed runs; the binary always plays on the full
    /// canvas height.
    pub fn with_playfield_height(mut self, height: u32) -> Self {
        self.playfield_height = height.max(1);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn playfield_height(&self) -> u32 {
        self.playfield_height
    }

    pub fn invincible(&self) -> bool {
        self.invincible
    }

    pub fn toggle_invincible(&mut self) -> bool {
        self.invincible = !self.invincible;
        log::info!("invincibility toggled: {}", self.invincible);
        self.invincible
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Raises the high score to `score` if it beats it.
    pub fn offer_score(&mut self, score: u32) {
        self.high_score = self.high_score.max(score.min(MAX_SCORE));
    }

    pub fn reload_high_score(&mut self) {
        self.high_score = highscore::load_or_default(self.scores.as_ref());
    }

    pub fn persist_high_score(&self) {
        match self.scores.save(self.high_score) {
            Ok(()) => log::debug!("high score {} saved", self.high_score),
            Err(err) => log::warn!("could not save high score {}: {err}", self.high_score),
        }
    }

    pub fn play(&self, cue: Cue) {
        self.sfx.play(cue);
    }

    pub fn next_seed(&mut self) -> u64 {
        (self.seeds)()
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// What a screen asks the application to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    StartGame,
    ShowTitle,
    Exit,
}

#[derive(Debug)]
pub enum Screen {
    Title(TitleState),
    Game(GameState),
}

pub struct Bblock {
    ctx: AppContext,
    screen: Screen,
}

impl Bblock {
    /// Starts on the title screen.
    pub fn new(mut ctx: AppContext) -> Self {
        let title = TitleState::enter(&mut ctx);
        Self {
            ctx,
            screen: Screen::Title(title),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn on_title(&self) -> bool {
        matches!(self.screen, Screen::Title(_))
    }

    pub fn game(&self) -> Option<&GameState> {
        match &self.screen {
            Screen::Game(game) => Some(game),
            Screen::Title(_) => None,
        }
    }

    fn apply(&mut self, transition: Transition) -> Flow {
        match transition {
            Transition::Stay => {}
            Transition::StartGame => {
                let seed = self.ctx.next_seed();
                self.screen = Screen::Game(GameState::start(&mut self.ctx, seed));
            }
            Transition::ShowTitle => {
                self.screen = Screen::Title(TitleState::enter(&mut self.ctx));
            }
            Transition::Exit => return Flow::Exit,
        }
        Flow::Continue
    }
}

impl FrameApp for Bblock {
    fn canvas_size(&self) -> SurfaceSize {
        playfield::canvas_size()
    }

    fn clear_color(&self) -> Color {
        playfield::BACKGROUND
    }

    fn on_event(&mut self, event: InputEvent) -> Flow {
        let transition = match &mut self.screen {
            Screen::Title(title) => title.on_event(event),
            Screen::Game(game) => game.on_event(&mut self.ctx, event),
        };
        self.apply(transition)
    }

    fn on_update(&mut self) -> Flow {
        let transition = match &mut self.screen {
            Screen::Title(title) => title.on_update(),
            Screen::Game(game) => game.on_update(&mut self.ctx),
        };
        self.apply(transition)
    }

    fn on_draw(&self, gfx: &mut dyn Renderer2d) {
        match &self.screen {
            Screen::Title(title) => title.on_draw(&self.ctx, gfx),
            Screen::Game(game) => game.on_draw(&self.ctx, gfx),
        }
    }
}
