use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("difficulty must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// One of the five startup presets. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

/// Lane geometry and block speed for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub lane_height: u32,
    pub fall_rate: f32,
}

impl Timing {
    /// Ticks between spawn batches: the time a block needs to fall its own height.
    pub fn spawn_interval(self) -> u32 {
        (self.lane_height as f32 / self.fall_rate).floor() as u32
    }
}

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(5);

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn timing(self) -> Timing {
        let (lane_height, fall_rate) = match self.0 {
            1 => (100, 2.0),
            2 => (100, 3.0),
            3 => (100, 4.0),
            4 => (90, 4.5),
            _ => (80, 6.0),
        };
        Timing {
            lane_height,
            fall_rate,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DifficultyError::OutOfRange(level))
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
