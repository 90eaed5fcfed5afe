//! sdlib UI: a retained element tree composited through offscreen textures.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sdlib_ui::prelude::*;
//!
//! let mut display = UiDisplay::new();
//!
//! let mut panel = UiElement::new(Panel::new(Color::GRAY), 20, 20, 240, 120)?;
//! let mut ok = UiElement::new(Button::new(font.clone()).with_text("OK"), 10, 10, 100, 32)?;
//! ok.access_keys.insert(Key::Enter);
//! ok.on_separate(|| log::info!("ok"));
//! panel.add_child(ok);
//! display.add(panel);
//!
//! // Each frame:
//! display.update(ctx.gfx, &ctx.input_view(), ctx.time.delta)?;
//! display.render(ctx.gfx)?;
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`] and wrap it in a [`UiElement`]; the element supplies
//! geometry, input, children and the backing texture.

pub mod display;
pub mod element;
pub mod error;
pub mod position;
pub mod widgets;

pub use display::UiDisplay;
pub use element::{ElementId, ElementInput, UiElement, UpdateCtx, Widget};
pub use error::{UiError, UiResult};

/// Everything needed to build and extend a UI.
pub mod prelude {
    pub use crate::display::UiDisplay;
    pub use crate::element::{ElementId, ElementInput, UiElement, UpdateCtx, Widget};
    pub use crate::error::{UiError, UiResult};
    pub use crate::position::{Align, HorizontalAlign, VerticalAlign, align};
    pub use crate::widgets::{Button, ButtonMode, Label, Panel, Placement, Scroller, TileAlignment};

    pub use sdlib_engine::coords::IRect;
    pub use sdlib_engine::gfx::{DrawSurface, FontFamily, FontStyle, GfxResult, Graphics, Texture2D};
    pub use sdlib_engine::input::Key;
    pub use sdlib_engine::paint::Color;
}
