//! SDL2 backend for sdlib.
//!
//! - `SdlContext`: SDL, SDL_image and SDL_ttf initialization
//! - `SdlGraphics`: the engine `Graphics` traits over a window canvas
//! - `SdlAudio`: the engine `AudioDevice` over SDL_mixer
//! - `events::translate`: SDL events to engine `InputEvent`s
//! - `Runtime`: the main loop driving a `core::App`

mod audio;
mod context;
pub mod events;
mod graphics;
mod runtime;
pub mod window;

pub use audio::SdlAudio;
pub use context::SdlContext;
pub use graphics::SdlGraphics;
pub use runtime::Runtime;
