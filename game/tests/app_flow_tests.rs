mod common;

use bblock::block::Block;
use bblock::playfield::{BACKGROUND, BLOCK_FILL, BLOCK_OUTLINE, SCORE_TEXT, SEPARATOR};
use bblock::sfx::Cue;
use common::harness;
use engine::Flow;
use engine::input::{InputEvent, Key};

fn blocks(h: &common::Harness) -> Vec<Block> {
    h.runner
        .app()
        .game()
        .map(|game| game.blocks().to_vec())
        .unwrap_or_default()
}

#[test]
fn a_click_on_the_title_starts_a_run() {
    let mut h = harness(1, Some(5), |ctx| ctx);
    assert!(h.runner.app().on_title());

    assert_eq!(h.runner.step([InputEvent::click(10, 10)]), Flow::Continue);
    let game = h.runner.app().game().expect("run should have started");
    assert_eq!(game.score(), 0);
    assert_eq!(game.spawn_timer(), 1);
    assert_eq!(h.sfx.take(), vec![Cue::Begin]);
    assert_eq!(h.runner.app().context().high_score(), 5);
}

#[test]
fn an_unclicked_block_ends_the_run_on_its_49th_fall() {
    let mut h = harness(1, None, |ctx| ctx.with_playfield_height(100));

    h.runner.step([InputEvent::click(0, 0)]);
    h.runner.idle(48);
    assert!(blocks(&h).is_empty());

    // Update 50 spawns the first batch and moves it once.
    h.runner.idle(1);
    let spawned = blocks(&h);
    assert!((1..=4).contains(&spawned.len()));
    assert!(spawned.iter().all(|b| b.bottom == 98.0));

    h.runner.idle(47);
    assert_eq!(h.runner.frame(), 97);
    assert!(blocks(&h).iter().all(|b| b.bottom == 4.0));

    assert_eq!(h.runner.idle(1), Flow::Continue);
    assert!(h.runner.app().on_title());
    assert_eq!(h.sfx.take(), vec![Cue::Begin, Cue::End]);
    assert_eq!(h.scores.saves.get(), 0);
}

#[test]
fn hits_score_and_a_new_best_is_saved_when_the_run_ends() {
    let mut h = harness(1, None, |ctx| ctx.with_playfield_height(100));
    h.runner.step([InputEvent::click(0, 0)]);
    h.runner.idle(49);

    // Canvas y 0 is playfield y 100, inside a block whose bottom is 98.
    let clicks: Vec<InputEvent> = blocks(&h)
        .iter()
        .map(|b| InputEvent::click(b.origin_x as i32 + 10, 0))
        .collect();
    let hits = clicks.len() as u32;
    h.runner.step(clicks);

    let game = h.runner.app().game().expect("still playing");
    assert_eq!(game.score(), hits);
    assert!(game.blocks().is_empty());
    assert_eq!(h.runner.app().context().high_score(), hits);

    h.runner.idle(120);
    assert!(h.runner.app().on_title());
    assert_eq!(h.scores.saves.get(), 1);
    assert_eq!(h.scores.stored.get(), Some(hits));
    assert_eq!(h.runner.app().context().high_score(), hits);

    let cues = h.sfx.take();
    assert_eq!(cues.first(), Some(&Cue::Begin));
    assert_eq!(cues.last(), Some(&Cue::End));
    assert_eq!(cues.iter().filter(|c| **c == Cue::Hit).count() as u32, hits);
}

#[test]
fn a_miss_click_does_not_score() {
    let mut h = harness(2, None, |ctx| ctx);
    h.runner.step([InputEvent::click(0, 0)]);
    h.runner.step([InputEvent::click(100, 100)]);

    assert_eq!(h.runner.app().game().map(|g| g.score()), Some(0));
    assert_eq!(h.sfx.take(), vec![Cue::Begin]);
}

#[test]
fn escape_and_quit_exit_from_either_screen() {
    let mut h = harness(1, None, |ctx| ctx);
    assert_eq!(h.runner.step([InputEvent::KeyDown(Key::Escape)]), Flow::Exit);

    let mut h = harness(1, None, |ctx| ctx);
    assert_eq!(h.runner.step([InputEvent::Quit]), Flow::Exit);

    let mut h = harness(1, None, |ctx| ctx);
    h.runner.step([InputEvent::KeyDown(Key::Enter)]);
    assert!(h.runner.app().game().is_some());
    assert_eq!(h.runner.step([InputEvent::KeyDown(Key::Escape)]), Flow::Exit);

    let mut h = harness(1, None, |ctx| ctx);
    h.runner.step([InputEvent::KeyDown(Key::Space)]);
    assert_eq!(h.runner.step([InputEvent::Quit]), Flow::Exit);
}

#[test]
fn alt_is_ignored_on_the_title() {
    let mut h = harness(1, None, |ctx| ctx);
    assert_eq!(h.runner.step([InputEvent::KeyDown(Key::Alt)]), Flow::Continue);
    assert!(h.runner.app().on_title());
    assert!(h.sfx.take().is_empty());
}

#[test]
fn invincible_runs_survive_until_toggled_off() {
    let mut h = harness(1, None, |ctx| ctx.with_playfield_height(100).with_invincible(true));
    h.runner.step([InputEvent::click(0, 0)]);

    h.runner.idle(200);
    assert!(h.runner.app().game().is_some());
    assert!(blocks(&h).iter().all(|b| b.bottom > 2.0));

    h.runner.step([InputEvent::right_click(0, 0)]);
    assert!(!h.runner.app().context().invincible());

    h.runner.idle(100);
    assert!(h.runner.app().on_title());
    assert_eq!(h.sfx.take(), vec![Cue::Begin, Cue::End]);
}

#[test]
fn the_prompt_blinks_every_thirty_frames() {
    let mut h = harness(1, None, |ctx| ctx);

    h.runner.idle(1);
    let visible = h.runner.surface().fingerprint();
    h.runner.idle(29);
    let hidden = h.runner.surface().fingerprint();
    assert_ne!(visible, hidden);

    h.runner.idle(60);
    assert_eq!(h.runner.surface().fingerprint(), hidden);
    h.runner.idle(30);
    assert_eq!(h.runner.surface().fingerprint(), visible);
}

#[test]
fn game_frames_draw_lanes_blocks_and_scores() {
    let mut h = harness(1, None, |ctx| ctx);
    h.runner.step([InputEvent::click(0, 0)]);

    // First batch spawns on update 50; 50 falls later its bottom is 200 and its top is 0.
    h.runner.idle(98);
    let block = blocks(&h)[0];
    assert_eq!(block.bottom, 200.0);

    let surface = h.runner.surface();
    assert_eq!(surface.pixel(block.origin_x + 10, 50), Some(BLOCK_FILL));
    assert_eq!(surface.pixel(block.origin_x, 50), Some(BLOCK_OUTLINE));
    assert_eq!(surface.pixel(block.origin_x + 10, 150), Some(BACKGROUND));
    assert_eq!(surface.pixel(50, 120), Some(SEPARATOR));
    assert_eq!(surface.pixel(50, 290), Some(BACKGROUND));
    assert_eq!(surface.pixel(4, 280), Some(SCORE_TEXT));
}
