//! Audio playback contract.
//!
//! Backends implement `AudioDevice`; music and effects are referred to by
//! handle so apps never hold native mixer objects. `SilentAudio` stands in
//! when no device could be opened.

mod silent;

use std::path::Path;

pub use silent::SilentAudio;

slotmap::new_key_type! {
    /// Handle to a loaded music stream.
    pub struct MusicId;
    /// Handle to a loaded sound effect.
    pub struct SoundId;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("mixer error: {0}")]
    Mixer(String),

    #[error("unknown audio handle")]
    UnknownHandle,
}

pub type AudioResult<T> = Result<T, AudioError>;

/// Music and sound effect playback.
///
/// `loops` follows the mixer convention: `0` plays once, `-1` repeats forever.
pub trait AudioDevice {
    fn load_music(&mut self, path: &Path) -> AudioResult<MusicId>;

    /// Starts `music`, replacing whatever music is playing.
    fn play_music(&mut self, music: MusicId, loops: i32) -> AudioResult<()>;

    fn halt_music(&mut self);

    fn load_effect(&mut self, path: &Path) -> AudioResult<SoundId>;

    /// Plays `effect` on the first free channel.
    fn play_effect(&mut self, effect: SoundId, loops: i32) -> AudioResult<()>;
}
