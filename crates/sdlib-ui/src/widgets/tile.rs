use sdlib_engine::coords::extent;
use sdlib_engine::gfx::{DrawSurface, GfxResult};

use crate::element::{UpdateCtx, Widget};

/// Lays its children out left to right in rows of at most `column_max`.
///
/// Each row starts below the tallest element of the previous row. Layout
/// runs when a setting changes or the number of children changes; moving or
/// resizing a child by hand lasts until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileAlignment {
    column_max: usize,
    column_padding: i32,
    row_padding: i32,
    dirty: bool,
    laid_out: usize,
}

impl TileAlignment {
    pub const DEFAULT_PADDING: i32 = 5;

    pub fn new(column_max: usize) -> Self {
        Self {
            column_max: column_max.max(1),
            column_padding: Self::DEFAULT_PADDING,
            row_padding: Self::DEFAULT_PADDING,
            dirty: true,
            laid_out: 0,
        }
    }

    pub fn column_max(&self) -> usize {
        self.column_max
    }

    /// Zero becomes one.
    pub fn set_column_max(&mut self, column_max: usize) {
        self.column_max = column_max.max(1);
        self.dirty = true;
    }

    pub fn column_padding(&self) -> i32 {
        self.column_padding
    }

    pub fn set_column_padding(&mut self, padding: i32) {
        self.column_padding = padding;
        self.dirty = true;
    }

    pub fn row_padding(&self) -> i32 {
        self.row_padding
    }

    pub fn set_row_padding(&mut self, padding: i32) {
        self.row_padding = padding;
        self.dirty = true;
    }
}

impl Widget for TileAlignment {
    fn update(&mut self, ctx: &mut UpdateCtx<'_>, _dt: f32) {
        if !self.dirty && self.laid_out == ctx.children.len() {
            return;
        }

        let mut y = 0;
        for row in ctx.children.chunks_mut(self.column_max) {
            let mut x = 0;
            let mut tallest = 0;
            for child in row {
                child.set_position(x, y);
                x = x.saturating_add(extent(child.width())).saturating_add(self.column_padding);
                tallest = tallest.max(extent(child.height()));
            }
            y = y.saturating_add(tallest).saturating_add(self.row_padding);
        }

        self.dirty = false;
        self.laid_out = ctx.children.len();
    }

    fn paint(&mut self, _surface: &mut dyn DrawSurface, _size: (u32, u32)) -> GfxResult<()> {
        Ok(())
    }
}
