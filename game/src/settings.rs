use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct AudioSettings {
    #[serde(default = "full_volume")]
    pub sfx_volume: f32,
    #[serde(default)]
    pub mute_all: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sfx_volume: full_volume(),
            mute_all: false,
        }
    }
}

impl AudioSettings {
    pub fn clamp(mut self) -> Self {
        self.sfx_volume = if self.sfx_volume.is_finite() {
            self.sfx_volume.clamp(0.0, 1.0)
        } else {
            full_volume()
        };
        self
    }

    pub fn effective_sfx_gain(self) -> f32 {
        if self.mute_all { 0.0 } else { self.sfx_volume }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlayerSettings {
    #[serde(default)]
    pub audio: AudioSettings,
}

impl PlayerSettings {
    pub fn sanitized(mut self) -> Self {
        self.audio = self.audio.clamp();
        self
    }
}

fn full_volume() -> f32 {
    1.0
}

/// Read-only view of `settings.json` in the preference directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; a malformed one is reported and ignored.
    pub fn load(&self) -> PlayerSettings {
        let Ok(bytes) = fs::read(&self.path) else {
            return PlayerSettings::default();
        };
        match serde_json::from_slice::<PlayerSettings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!("ignoring {}: {err}", self.path.display());
                PlayerSettings::default()
            }
        }
    }
}
