//! One play session: spawning, falling, hit testing and scoring.

use engine::graphics::Renderer2d;
use engine::input::{InputEvent, Key, MouseButton};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::{AppContext, Transition};
use crate::block::Block;
use crate::difficulty::Timing;
use crate::highscore::MAX_SCORE;
use crate::playfield::{self, LANE_COUNT, LANE_WIDTH, SCORE_BAR_HEIGHT, SCORE_TEXT, SEPARATOR};
use crate::sfx::Cue;

/// Chance of ending a spawn batch after each lane pick.
pub const BATCH_STOP_CHANCE: f64 = 0.75;

#[derive(Debug)]
pub struct GameState {
    score: u32,
    blocks: Vec<Block>,
    timing: Timing,
    lane_width: u32,
    spawn_timer: u32,
    playfield_height: u32,
    best_at_start: u32,
    rng: StdRng,
}

impl GameState {
    /// Begins a run at the context's difficulty.
    pub fn start(ctx: &mut AppContext, seed: u64) -> Self {
        let mut game = Self {
            score: 0,
            blocks: Vec::new(),
            timing: ctx.difficulty().timing(),
            lane_width: LANE_WIDTH,
            spawn_timer: 0,
            playfield_height: ctx.playfield_height(),
            best_at_start: ctx.high_score(),
            rng: StdRng::seed_from_u64(seed),
        };
        game.reset(ctx, seed);
        game
    }

    pub fn reset(&mut self, ctx: &mut AppContext, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        ctx.play(Cue::Begin);

        self.score = 0;
        self.blocks.clear();
        self.spawn_timer = 0;
        self.lane_width = LANE_WIDTH;
        self.timing = ctx.difficulty().timing();
        self.playfield_height = ctx.playfield_height();
        self.best_at_start = ctx.high_score();
        log::info!("run started at difficulty {}", ctx.difficulty());
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn lane_width(&self) -> u32 {
        self.lane_width
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    /// Adds a block directly, bypassing the spawner.
    ///
    /// Test-only hook for setting up exact block layouts; the game itself spawns through
    /// `try_spawn`.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn on_event(&mut self, ctx: &mut AppContext, event: InputEvent) -> Transition {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => Transition::Exit,
            InputEvent::MouseDown {
                button: MouseButton::Primary,
                x,
                y,
            } => {
                self.handle_click(ctx, x, y);
                Transition::Stay
            }
            InputEvent::MouseDown {
                button: MouseButton::Secondary,
                ..
            } => {
                ctx.toggle_invincible();
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    /// Removes the first block under the canvas position `(x, y)`. Returns whether one was hit.
    pub fn handle_click(&mut self, ctx: &mut AppContext, x: i32, y: i32) -> bool {
        let y = self.playfield_height as i32 - y;
        let lane_height = self.timing.lane_height;
        let Some(index) = self
            .blocks
            .iter()
            .position(|block| block.contains(x, y, self.lane_width, lane_height))
        else {
            return false;
        };

        ctx.play(Cue::Hit);
        if self.score < MAX_SCORE {
            self.score += 1;
        }
        ctx.offer_score(self.score);
        self.blocks.swap_remove(index);
        true
    }

    pub fn on_update(&mut self, ctx: &mut AppContext) -> Transition {
        self.try_spawn();

        let rate = self.timing.fall_rate;
        let mut i = 0;
        while i < self.blocks.len() {
            let block = &mut self.blocks[i];
            block.fall(rate);
            if block.bottom > rate {
                i += 1;
                continue;
            }
            if !ctx.invincible() {
                return self.end_run(ctx);
            }
            log::debug!("missed block in lane {} dropped", block.lane);
            // The block swapped in has not fallen yet this tick.
            self.blocks.swap_remove(i);
        }
        Transition::Stay
    }

    /// Counts one tick towards the next batch and spawns it when due. Returns how many blocks
    /// were added.
    pub fn try_spawn(&mut self) -> usize {
        self.spawn_timer += 1;
        if self.spawn_timer < self.timing.spawn_interval() {
            return 0;
        }
        self.spawn_timer = 0;

        let lanes = roll_lanes(&mut self.rng);
        log::debug!("spawning in lanes {lanes:?}");
        for &lane in &lanes {
            self.blocks.push(Block::spawn(lane, self.playfield_height));
        }
        lanes.len()
    }

    fn end_run(&mut self, ctx: &mut AppContext) -> Transition {
        ctx.play(Cue::End);
        log::info!("run over with score {}", self.score);
        if ctx.high_score() > self.best_at_start {
            ctx.persist_high_score();
        }
        Transition::ShowTitle
    }

    pub fn on_draw(&self, ctx: &AppContext, gfx: &mut dyn Renderer2d) {
        let height = gfx.size().height;
        let lanes_bottom = height.saturating_sub(SCORE_BAR_HEIGHT);
        for x in playfield::separator_xs() {
            gfx.vline(x, 0, lanes_bottom, SEPARATOR);
        }

        for block in &self.blocks {
            block.draw(gfx, self.lane_width, self.timing.lane_height, self.playfield_height);
        }

        let text_y = height.saturating_sub(20);
        gfx.draw_text(4, text_y, &format!("SCORE {}", self.score), SCORE_TEXT);
        gfx.draw_text(110, text_y, &format!("BEST {}", ctx.high_score()), SCORE_TEXT);
    }
}

/// Rolls one spawn batch: up to four uniform lane picks, stopping early with
/// `BATCH_STOP_CHANCE` after each. Repeated lanes are dropped, first pick wins.
pub fn roll_lanes<R: Rng + ?Sized>(rng: &mut R) -> Vec<usize> {
    let mut lanes = Vec::with_capacity(LANE_COUNT);
    for _ in 0..LANE_COUNT {
        let lane = rng.gen_range(0..LANE_COUNT);
        if !lanes.contains(&lane) {
            lanes.push(lane);
        }
        if rng.gen_bool(BATCH_STOP_CHANCE) {
            break;
        }
    }
    lanes
}
