use std::path::Path;

use anyhow::{Result, anyhow};
use log::{debug, info};
use sdl2::mixer::{self, Channel, Chunk, DEFAULT_FORMAT, InitFlag, Music, Sdl2MixerContext};
use sdl2::{AudioSubsystem, Sdl};
use slotmap::SlotMap;

use sdlib_engine::audio::{AudioDevice, AudioError, AudioResult, MusicId, SoundId};
use sdlib_engine::config::AudioConfig;

/// SDL_mixer playback device.
///
/// Owns the mixer context and the open audio device; every loaded stream and
/// chunk is freed before the device closes.
pub struct SdlAudio {
    music: SlotMap<MusicId, Music<'static>>,
    effects: SlotMap<SoundId, Chunk>,
    _mixer: Sdl2MixerContext,
    _subsystem: AudioSubsystem,
}

/// Simultaneous sound effects.
const MIXING_CHANNELS: i32 = 16;

impl SdlAudio {
    /// Initializes the mixer (MP3) and opens the default device.
    pub fn open(sdl: &Sdl, config: &AudioConfig) -> Result<Self> {
        let subsystem = sdl.audio().map_err(|e| anyhow!("SDL audio init failed: {e}"))?;
        let context = mixer::init(InitFlag::MP3).map_err(|e| anyhow!("SDL_mixer init failed: {e}"))?;
        mixer::open_audio(config.frequency, DEFAULT_FORMAT, config.channels, config.chunk_size)
            .map_err(|e| anyhow!("cannot open audio device: {e}"))?;
        let channels = mixer::allocate_channels(MIXING_CHANNELS);

        info!(
            "audio opened: {} Hz, {} output channels, {} mixing channels",
            config.frequency, config.channels, channels
        );

        Ok(Self {
            music: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            _mixer: context,
            _subsystem: subsystem,
        })
    }
}

impl Drop for SdlAudio {
    fn drop(&mut self) {
        Music::halt();
        Channel::all().halt();
        self.music.clear();
        self.effects.clear();
        mixer::close_audio();
        debug!("audio closed");
    }
}

impl AudioDevice for SdlAudio {
    fn load_music(&mut self, path: &Path) -> AudioResult<MusicId> {
        let music = Music::from_file(path).map_err(AudioError::Mixer)?;
        debug!("loaded music {}", path.display());
        Ok(self.music.insert(music))
    }

    fn play_music(&mut self, music: MusicId, loops: i32) -> AudioResult<()> {
        let music = self.music.get(music).ok_or(AudioError::UnknownHandle)?;
        music.play(loops).map_err(AudioError::Mixer)
    }

    fn halt_music(&mut self) {
        Music::halt();
    }

    fn load_effect(&mut self, path: &Path) -> AudioResult<SoundId> {
        let chunk = Chunk::from_file(path).map_err(AudioError::Mixer)?;
        debug!("loaded effect {}", path.display());
        Ok(self.effects.insert(chunk))
    }

    fn play_effect(&mut self, effect: SoundId, loops: i32) -> AudioResult<()> {
        let chunk = self.effects.get(effect).ok_or(AudioError::UnknownHandle)?;
        Channel::all().play(chunk, loops).map(|_| ()).map_err(AudioError::Mixer)
    }
}
