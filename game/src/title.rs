use engine::graphics::{Renderer2d, text_width};
use engine::input::{InputEvent, Key};

use crate::app::{AppContext, Transition};
use crate::playfield::{ACCENT, CANVAS_WIDTH};

const BLINK_HALF_PERIOD: i32 = 30;
const TITLE_SCALE: u32 = 4;
const TEXT_SCALE: u32 = 2;

/// Attract screen shown between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleState {
    blink: i32,
}

impl TitleState {
    /// Enters the title screen: restarts the blink cycle and reloads the stored high score.
    pub fn enter(ctx: &mut AppContext) -> Self {
        let mut title = Self {
            blink: -BLINK_HALF_PERIOD,
        };
        title.reset(ctx);
        title
    }

    pub fn reset(&mut self, ctx: &mut AppContext) {
        self.blink = -BLINK_HALF_PERIOD;
        ctx.reload_high_score();
    }

    pub fn blink(&self) -> i32 {
        self.blink
    }

    pub fn prompt_visible(&self) -> bool {
        self.blink < 0
    }

    pub fn on_event(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => Transition::Exit,
            // Reserved.
            InputEvent::KeyDown(Key::Alt) => Transition::Stay,
            InputEvent::KeyDown(_) | InputEvent::MouseDown { .. } => Transition::StartGame,
        }
    }

    pub fn on_update(&mut self) -> Transition {
        self.blink += 1;
        if self.blink == BLINK_HALF_PERIOD {
            self.blink = -BLINK_HALF_PERIOD;
        }
        Transition::Stay
    }

    pub fn on_draw(&self, ctx: &AppContext, gfx: &mut dyn Renderer2d) {
        draw_centered(gfx, 80, "BBLOCK", TITLE_SCALE);
        if self.prompt_visible() {
            draw_centered(gfx, 150, "PRESS ANY KEY", TEXT_SCALE);
        }
        draw_centered(gfx, 260, &format!("HIGH SCORE {}", ctx.high_score()), TEXT_SCALE);
    }
}

fn draw_centered(gfx: &mut dyn Renderer2d, y: u32, text: &str, scale: u32) {
    let x = CANVAS_WIDTH.saturating_sub(text_width(text, scale)) / 2;
    gfx.draw_text_scaled(x, y, text, ACCENT, scale);
}
