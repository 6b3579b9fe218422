//! Sound cues.
//!
//! Playback is best effort everywhere: a missing device, asset or decoder error only ever
//! silences the cue.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::settings::AudioSettings;

/// Base volume of every cue (0.0..=1.0), scaled by the player's sfx setting.
pub const CUE_VOLUME: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A block was clicked.
    Hit,
    Begin,
    End,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Hit, Cue::Begin, Cue::End];

    pub fn file_name(self) -> &'static str {
        match self {
            Cue::Hit => "click.ogg",
            Cue::Begin => "begin.ogg",
            Cue::End => "end.ogg",
        }
    }

    fn index(self) -> usize {
        match self {
            Cue::Hit => 0,
            Cue::Begin => 1,
            Cue::End => 2,
        }
    }
}

pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl CuePlayer for Muted {
    fn play(&self, _cue: Cue) {}
}

/// Fire-and-forget playback on the default output device.
///
/// Clips are read into memory once; each cue gets its own detached sink so overlapping cues mix.
pub struct RodioSfx {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: [Option<Arc<[u8]>>; 3],
    volume: f32,
}

impl RodioSfx {
    pub fn open(assets_dir: &Path, volume: f32) -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        let clips = Cue::ALL.map(|cue| load_clip(&assets_dir.join(cue.file_name())));
        Ok(Self {
            _stream: stream,
            handle,
            clips,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

/// Playback gain for the cues, or `None` when sound is switched off or muted.
pub fn cue_gain(sound_enabled: bool, audio: AudioSettings) -> Option<f32> {
    let gain = audio.effective_sfx_gain() * CUE_VOLUME;
    (sound_enabled && gain > 0.0).then_some(gain)
}

/// Opens the output device unless `gain` is `None`. Falls back to `Muted` without a device.
pub fn open_player(assets_dir: &Path, gain: Option<f32>) -> Box<dyn CuePlayer> {
    let Some(gain) = gain else {
        return Box::new(Muted);
    };
    match RodioSfx::open(assets_dir, gain) {
        Ok(sfx) => Box::new(sfx),
        Err(err) => {
            log::warn!("no audio output, playing muted: {err}");
            Box::new(Muted)
        }
    }
}

fn load_clip(path: &Path) -> Option<Arc<[u8]>> {
    match fs::read(path) {
        Ok(bytes) => Some(bytes.into()),
        Err(err) => {
            log::warn!("sound {} unavailable, cue will be silent: {err}", path.display());
            None
        }
    }
}

impl CuePlayer for RodioSfx {
    fn play(&self, cue: Cue) {
        let Some(clip) = self.clips[cue.index()].clone() else {
            return;
        };
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(self.volume);

        let source = match Decoder::new(Cursor::new(clip)) {
            Ok(source) => source,
            Err(err) => {
                log::debug!("cannot decode {}: {err}", cue.file_name());
                return;
            }
        };
        sink.append(source);
        sink.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_map_to_distinct_files_and_slots() {
        let names: Vec<&str> = Cue::ALL.iter().map(|cue| cue.file_name()).collect();
        assert_eq!(names, vec!["click.ogg", "begin.ogg", "end.ogg"]);

        let slots: Vec<usize> = Cue::ALL.iter().map(|cue| cue.index()).collect();
        assert_eq!(slots, vec![0, 1, 2]);
    }

    #[test]
    fn missing_clip_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_clip(&dir.path().join("nope.ogg")).is_none());

        let path = dir.path().join("click.ogg");
        fs::write(&path, b"not really ogg").unwrap();
        assert_eq!(load_clip(&path).as_deref(), Some(&b"not really ogg"[..]));
    }

    #[test]
    fn switched_off_or_muted_sound_has_no_gain() {
        let audio = AudioSettings::default();
        assert_eq!(cue_gain(false, audio), None);
        assert_eq!(cue_gain(true, AudioSettings { mute_all: true, ..audio }), None);
        assert_eq!(cue_gain(true, AudioSettings { sfx_volume: 0.0, ..audio }), None);

        let half = cue_gain(true, AudioSettings { sfx_volume: 0.5, ..audio }).unwrap();
        assert!((half - 0.5 * CUE_VOLUME).abs() < 1e-6);
    }
}
