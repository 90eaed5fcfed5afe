/// How source pixels combine with the destination.
///
/// Mirrors the renderer's fixed blend modes; backends translate one-to-one.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Replace the destination.
    None,
    /// Alpha blending.
    #[default]
    Blend,
    /// Additive blending.
    Add,
    /// Color modulate.
    Mod,
    /// Color multiply.
    Mul,
}
