use sdlib_engine::input::InputEvent;

/// A clamped scroll position driven by the mouse wheel.
///
/// Not an element: owners read `value` and offset their content themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scroller {
    value: i32,
    min: i32,
    max: i32,
    /// Amount moved per wheel notch.
    pub line: i32,
}

impl Scroller {
    /// `min` and `max` are swapped if given in the wrong order.
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
            line: 1,
        }
    }

    pub fn with_line(mut self, line: i32) -> Self {
        self.line = line;
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Changes the range and re-clamps the value.
    pub fn set_range(&mut self, min: i32, max: i32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.set_value(self.value);
    }

    /// Moves by `lines` wheel notches; positive scrolls up.
    pub fn scroll_by(&mut self, lines: i32) {
        self.set_value(self.value.saturating_add(lines.saturating_mul(self.line)));
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::MouseWheel { y, .. } = event {
            if *y > 0.0 {
                self.scroll_by(1);
            } else if *y < 0.0 {
                self.scroll_by(-1);
            }
        }
    }
}
