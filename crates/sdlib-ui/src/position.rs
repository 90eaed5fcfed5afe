//! Alignment of a box inside its parent along one axis.

/// Placement along one axis.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl From<HorizontalAlign> for Align {
    fn from(h: HorizontalAlign) -> Self {
        match h {
            HorizontalAlign::Left => Align::Start,
            HorizontalAlign::Center => Align::Center,
            HorizontalAlign::Right => Align::End,
        }
    }
}

impl From<VerticalAlign> for Align {
    fn from(v: VerticalAlign) -> Self {
        match v {
            VerticalAlign::Top => Align::Start,
            VerticalAlign::Center => Align::Center,
            VerticalAlign::Bottom => Align::End,
        }
    }
}

/// Offset of a `target`-sized box inside a `parent`-sized one.
///
/// The result is negative when the target is larger than the parent.
pub fn align(parent: i32, target: i32, align: impl Into<Align>) -> i32 {
    match align.into() {
        Align::Start => 0,
        Align::Center => (parent - target) / 2,
        Align::End => parent - target,
    }
}
