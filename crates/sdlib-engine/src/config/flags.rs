use bitflags::bitflags;

bitflags! {
    /// Window creation flags understood by the backends.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const SHOWN          = 1 << 0;
        const RESIZABLE      = 1 << 1;
        const FULLSCREEN     = 1 << 2;
        const BORDERLESS     = 1 << 3;
        const MAXIMIZED      = 1 << 4;
        const ALLOW_HIGH_DPI = 1 << 5;
    }
}

bitflags! {
    /// Renderer creation flags.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct RendererFlags: u32 {
        const SOFTWARE       = 1 << 0;
        const ACCELERATED    = 1 << 1;
        const PRESENT_VSYNC  = 1 << 2;
        const TARGET_TEXTURE = 1 << 3;
    }
}
