use super::Vec2;

/// Axis-aligned rectangle with fractional coordinates (top-left origin).
///
/// Used as a draw destination; sub-pixel positions are forwarded to the renderer as-is.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    #[inline]
    pub fn translated(self, by: Vec2) -> Self {
        Rect::new(self.x + by.x, self.y + by.y, self.w, self.h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }
}

impl From<IRect> for Rect {
    fn from(r: IRect) -> Self {
        Rect::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
    }
}

/// Integral rectangle: signed origin, unsigned extent.
///
/// This is the shape of element bounds and texture clip regions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size anchored at the origin.
    #[inline]
    pub const fn sized(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    #[inline]
    pub fn right(self) -> i32 {
        self.x.saturating_add(extent(self.w))
    }

    #[inline]
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(extent(self.h))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        IRect::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.w, self.h)
    }

    /// Closed containment: both edges count as inside.
    ///
    /// Pointer hit-testing uses this form, so a cursor on the last pixel
    /// column of an element still hovers it.
    #[inline]
    pub fn contains_inclusive(self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px <= self.right() && py <= self.bottom()
    }

    /// True when the two rectangles share at least one pixel.
    #[inline]
    pub fn overlaps(self, other: IRect) -> bool {
        self.intersect(other).is_some()
    }

    pub fn intersect(self, other: IRect) -> Option<IRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(IRect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
        }
    }
}

/// An unsigned extent as a signed span, saturating at `i32::MAX`.
#[inline]
pub fn extent(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
