use sdlib_engine::gfx::GfxError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Elements must be at least one pixel in each direction.
    #[error("invalid element size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error(transparent)]
    Gfx(#[from] GfxError),
}

pub type UiResult<T> = Result<T, UiError>;
