mod button;
mod label;
mod panel;
mod scroller;
mod tile;

pub use button::{Button, ButtonMode, Placement};
pub use label::Label;
pub use panel::Panel;
pub use scroller::Scroller;
pub use tile::TileAlignment;
