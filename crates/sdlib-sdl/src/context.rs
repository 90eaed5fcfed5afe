use anyhow::{Result, anyhow};
use log::info;
use sdl2::image::{InitFlag as ImageInitFlag, Sdl2ImageContext};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::{EventPump, Sdl, VideoSubsystem};

/// The initialized SDL library family: core video, SDL_image (PNG) and SDL_ttf.
///
/// Subsystems shut down in reverse order when this drops. Everything that
/// renders borrows from it, so it must outlive the graphics device.
pub struct SdlContext {
    pub sdl: Sdl,
    pub video: VideoSubsystem,
    pub ttf: Sdl2TtfContext,
    _image: Sdl2ImageContext,
}

impl SdlContext {
    pub fn init() -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| anyhow!("SDL init failed: {e}"))?;
        let video = sdl.video().map_err(|e| anyhow!("SDL video init failed: {e}"))?;
        let image = sdl2::image::init(ImageInitFlag::PNG).map_err(|e| anyhow!("SDL_image init failed: {e}"))?;
        let ttf = sdl2::ttf::init().map_err(|e| anyhow!("SDL_ttf init failed: {e}"))?;

        info!("SDL {} initialized (video driver: {})", sdl2::version::version(), video.current_video_driver());

        Ok(Self {
            sdl,
            video,
            ttf,
            _image: image,
        })
    }

    pub fn event_pump(&self) -> Result<EventPump> {
        self.sdl.event_pump().map_err(|e| anyhow!("SDL event pump unavailable: {e}"))
    }
}
