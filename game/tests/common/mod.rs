#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use bblock::app::{AppContext, Bblock};
use bblock::difficulty::Difficulty;
use bblock::highscore::ScoreStore;
use bblock::sfx::{Cue, CuePlayer};
use engine::HeadlessRunner;

/// High score kept in memory; `None` behaves like a missing file.
#[derive(Clone, Default)]
pub struct MemoryScores {
    pub stored: Rc<Cell<Option<u32>>>,
    pub saves: Rc<Cell<u32>>,
}

impl ScoreStore for MemoryScores {
    fn load(&self) -> io::Result<u32> {
        self.stored
            .get()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn save(&self, score: u32) -> io::Result<()> {
        self.stored.set(Some(score));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingSfx {
    pub played: Rc<RefCell<Vec<Cue>>>,
}

impl RecordingSfx {
    pub fn take(&self) -> Vec<Cue> {
        std::mem::take(&mut *self.played.borrow_mut())
    }
}

impl CuePlayer for RecordingSfx {
    fn play(&self, cue: Cue) {
        self.played.borrow_mut().push(cue);
    }
}

pub struct Harness {
    pub runner: HeadlessRunner<Bblock>,
    pub scores: MemoryScores,
    pub sfx: RecordingSfx,
}

pub fn harness(level: u8, stored: Option<u32>, tweak: impl FnOnce(AppContext) -> AppContext) -> Harness {
    let scores = MemoryScores::default();
    scores.stored.set(stored);
    let sfx = RecordingSfx::default();
    let ctx = AppContext::new(
        Difficulty::try_from(level).unwrap(),
        Box::new(scores.clone()),
        Box::new(sfx.clone()),
    )
    .with_seed_source(|| 0x5eed);
    let runner = HeadlessRunner::new(Bblock::new(tweak(ctx)));
    Harness { runner, scores, sfx }
}
