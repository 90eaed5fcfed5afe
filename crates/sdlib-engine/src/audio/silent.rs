use std::path::{Path, PathBuf};

use slotmap::SlotMap;

use super::{AudioDevice, AudioError, AudioResult, MusicId, SoundId};

/// An `AudioDevice` that accepts everything and plays nothing.
///
/// Loaded paths and the current music are tracked so callers (and tests) can
/// observe what would have played.
#[derive(Debug, Default)]
pub struct SilentAudio {
    music: SlotMap<MusicId, PathBuf>,
    effects: SlotMap<SoundId, PathBuf>,
    playing: Option<MusicId>,
    effects_played: usize,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the music that is "playing".
    pub fn playing(&self) -> Option<&Path> {
        self.playing.and_then(|id| self.music.get(id)).map(PathBuf::as_path)
    }

    pub fn effects_played(&self) -> usize {
        self.effects_played
    }
}

impl AudioDevice for SilentAudio {
    fn load_music(&mut self, path: &Path) -> AudioResult<MusicId> {
        Ok(self.music.insert(path.to_path_buf()))
    }

    fn play_music(&mut self, music: MusicId, _loops: i32) -> AudioResult<()> {
        if !self.music.contains_key(music) {
            return Err(AudioError::UnknownHandle);
        }
        self.playing = Some(music);
        Ok(())
    }

    fn halt_music(&mut self) {
        self.playing = None;
    }

    fn load_effect(&mut self, path: &Path) -> AudioResult<SoundId> {
        Ok(self.effects.insert(path.to_path_buf()))
    }

    fn play_effect(&mut self, effect: SoundId, _loops: i32) -> AudioResult<()> {
        if !self.effects.contains_key(effect) {
            return Err(AudioError::UnknownHandle);
        }
        self.effects_played += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_plays_until_halted() {
        let mut audio = SilentAudio::new();
        let theme = audio.load_music(Path::new("theme.mp3")).unwrap();
        audio.play_music(theme, -1).unwrap();
        assert_eq!(audio.playing(), Some(Path::new("theme.mp3")));

        audio.halt_music();
        assert_eq!(audio.playing(), None);
    }

    #[test]
    fn effects_need_a_loaded_handle() {
        let mut audio = SilentAudio::new();
        let hit = audio.load_effect(Path::new("hit.wav")).unwrap();
        audio.play_effect(hit, 0).unwrap();
        audio.play_effect(hit, 2).unwrap();
        assert_eq!(audio.effects_played(), 2);

        assert_eq!(audio.play_effect(SoundId::default(), 0), Err(AudioError::UnknownHandle));
        assert_eq!(audio.play_music(MusicId::default(), 0), Err(AudioError::UnknownHandle));
    }
}
