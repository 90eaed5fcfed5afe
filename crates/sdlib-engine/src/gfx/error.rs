/// Graphics errors.
///
/// Native failures carry the backend's error string unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GfxError {
    #[error("renderer error: {0}")]
    Sdl(String),

    #[error("image error: {0}")]
    Image(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("unknown or busy texture handle")]
    UnknownTexture,

    #[error("invalid texture size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("the renderer does not support render targets")]
    TargetUnsupported,
}

pub type GfxResult<T> = Result<T, GfxError>;
