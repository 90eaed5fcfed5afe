use std::any::Any;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;
use sdlib_engine::coords::IRect;
use sdlib_engine::gfx::{DrawSurface, GfxResult, Graphics, TextureArea};
use sdlib_engine::input::{InputEvent, InputView, Key, MouseButton};

use crate::error::{UiError, UiResult};

// ── Identity ──────────────────────────────────────────────────────────────

/// Process-unique element identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ── Input state ───────────────────────────────────────────────────────────

/// Pointer and access-key state of one element for the current frame.
///
/// Every push state implies `hovering`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ElementInput {
    pub hovering: bool,
    /// Left button or an access key is held.
    pub pushing: bool,
    /// The press began this frame.
    pub pushed: bool,
    /// The press ended this frame.
    pub separate: bool,
}

// ── Widget trait ──────────────────────────────────────────────────────────

#[doc(hidden)]
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// What an element looks like and how it reacts.
///
/// `UiElement` owns the geometry, children, input and backing texture; the
/// widget only paints into the area it is given and adjusts itself (or its
/// children) during `update`.
///
/// ```rust,ignore
/// struct Swatch(Color);
///
/// impl Widget for Swatch {
///     fn paint(&mut self, surface: &mut dyn DrawSurface, (w, h): (u32, u32)) -> GfxResult<()> {
///         surface.fill_rect(IRect::sized(w, h), self.0)
///     }
/// }
///
/// let swatch = UiElement::new(Swatch(Color::RED), 10, 10, 32, 32)?;
/// ```
pub trait Widget: AsAny {
    /// Creates or refreshes textures the next `paint` needs.
    fn prepare(&mut self, gfx: &mut dyn Graphics) -> GfxResult<()> {
        let _ = gfx;
        Ok(())
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, dt: f32) {
        let _ = (ctx, dt);
    }

    /// Draws into the element's area; `size` is the area size.
    fn paint(&mut self, surface: &mut dyn DrawSurface, size: (u32, u32)) -> GfxResult<()>;

    fn dispose(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }

    fn on_event(&mut self, event: &InputEvent) {
        let _ = event;
    }
}

/// Element state handed to `Widget::update`.
pub struct UpdateCtx<'a> {
    pub input: ElementInput,
    pub size: (u32, u32),
    pub children: &'a mut Vec<UiElement>,
}

// ── Handlers ──────────────────────────────────────────────────────────────

type InputHandler = Box<dyn FnMut()>;
type UpdateHandler = Box<dyn FnMut(f32)>;
type PaintHandler = Box<dyn FnMut(&mut dyn DrawSurface, (u32, u32)) -> GfxResult<()>>;

#[derive(Default)]
struct Handlers {
    hovering: Vec<InputHandler>,
    pushing: Vec<InputHandler>,
    pushed: Vec<InputHandler>,
    separate: Vec<InputHandler>,
    update: Vec<UpdateHandler>,
    paint: Vec<PaintHandler>,
}

fn fire(handlers: &mut [InputHandler]) {
    for h in handlers {
        h();
    }
}

// ── UiElement ─────────────────────────────────────────────────────────────

/// A node of the retained UI tree.
///
/// Each element renders into its own offscreen `TextureArea`, which is
/// recreated only when the element's size changes. Children are rendered
/// first and then copied into the parent's area, so the tree composites
/// bottom-up and no render target is ever nested inside another.
///
/// Positions are relative to the parent. Hover testing happens against the
/// absolute bounds and is clipped by every ancestor, so a child overflowing
/// its parent cannot be hovered outside the parent.
pub struct UiElement {
    id: ElementId,
    x: i32,
    y: i32,
    width: u32,
    height: u32,

    /// When false the element never reports hover or push.
    pub input_enabled: bool,
    /// Keys that push the element while it is hovered.
    pub access_keys: HashSet<Key>,

    children: Vec<UiElement>,
    area: Option<TextureArea>,
    dirty: bool,
    widget: Box<dyn Widget>,
    handlers: Handlers,

    window_active: bool,
    pub(crate) display_input: bool,
    children_hovering: bool,
    parent_origin: (i32, i32),
    /// Absolute clip rectangle inherited from the ancestors; `None` at the root.
    /// `Some(None)` means the ancestors leave no visible region at all.
    parent_clip: Option<Option<IRect>>,
    input: ElementInput,
}

impl UiElement {
    pub fn new(widget: impl Widget, x: i32, y: i32, width: u32, height: u32) -> UiResult<Self> {
        check_size(width, height)?;
        Ok(Self {
            id: ElementId::next(),
            x,
            y,
            width,
            height,
            input_enabled: true,
            access_keys: HashSet::new(),
            children: Vec::new(),
            area: None,
            dirty: true,
            widget: Box::new(widget),
            handlers: Handlers::default(),
            window_active: true,
            display_input: true,
            children_hovering: false,
            parent_origin: (0, 0),
            parent_clip: None,
            input: ElementInput::default(),
        })
    }

    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    // ── geometry ──

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Window position: the sum of every ancestor's position and this one's.
    ///
    /// Ancestors pass their origin down during `update`.
    pub fn absolute_position(&self) -> (i32, i32) {
        (
            self.parent_origin.0.saturating_add(self.x),
            self.parent_origin.1.saturating_add(self.y),
        )
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> UiResult<()> {
        check_size(width, height)?;
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn set_width(&mut self, width: u32) -> UiResult<()> {
        self.set_size(width, self.height)
    }

    pub fn set_height(&mut self, height: u32) -> UiResult<()> {
        self.set_size(self.width, height)
    }

    /// Bounds relative to the parent.
    pub fn rect(&self) -> IRect {
        IRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn absolute_rect(&self) -> IRect {
        let (x, y) = self.absolute_position();
        IRect::new(x, y, self.width, self.height)
    }

    /// The backing area; `None` until the first `update`.
    pub fn area(&self) -> Option<&TextureArea> {
        self.area.as_ref()
    }

    // ── children ──

    /// Appends `child` in front of the existing children.
    pub fn add_child(&mut self, child: UiElement) -> ElementId {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Detaches a direct child. Its textures stay alive until it is disposed.
    pub fn remove_child(&mut self, id: ElementId) -> Option<UiElement> {
        let index = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(index))
    }

    pub fn child(&self, id: ElementId) -> Option<&UiElement> {
        self.children.iter().find(|c| c.id == id)
    }

    pub fn child_mut(&mut self, id: ElementId) -> Option<&mut UiElement> {
        self.children.iter_mut().find(|c| c.id == id)
    }

    pub fn children(&self) -> &[UiElement] {
        &self.children
    }

    // ── widget ──

    pub fn widget<W: Widget>(&self) -> Option<&W> {
        (*self.widget).as_any().downcast_ref::<W>()
    }

    pub fn widget_mut<W: Widget>(&mut self) -> Option<&mut W> {
        (*self.widget).as_any_mut().downcast_mut::<W>()
    }

    // ── handlers ──

    /// Runs every frame the element is hovered.
    pub fn on_hovering(&mut self, f: impl FnMut() + 'static) {
        self.handlers.hovering.push(Box::new(f));
    }

    /// Runs every frame the element is held.
    pub fn on_pushing(&mut self, f: impl FnMut() + 'static) {
        self.handlers.pushing.push(Box::new(f));
    }

    /// Runs on the frame a press begins.
    pub fn on_pushed(&mut self, f: impl FnMut() + 'static) {
        self.handlers.pushed.push(Box::new(f));
    }

    /// Runs on the frame a press ends over the element.
    pub fn on_separate(&mut self, f: impl FnMut() + 'static) {
        self.handlers.separate.push(Box::new(f));
    }

    pub fn on_update(&mut self, f: impl FnMut(f32) + 'static) {
        self.handlers.update.push(Box::new(f));
    }

    /// Draws after the widget, beneath the children.
    pub fn on_paint(
        &mut self,
        f: impl FnMut(&mut dyn DrawSurface, (u32, u32)) -> GfxResult<()> + 'static,
    ) {
        self.handlers.paint.push(Box::new(f));
    }

    // ── input queries ──

    pub fn input(&self) -> ElementInput {
        self.input
    }

    pub fn is_hovering(&self) -> bool {
        self.input.hovering
    }

    pub fn is_pushing(&self) -> bool {
        self.input.pushing
    }

    pub fn is_pushed(&self) -> bool {
        self.input.pushed
    }

    pub fn is_separate(&self) -> bool {
        self.input.separate
    }

    /// True when any descendant was hovered during the last update.
    pub fn children_hovering(&self) -> bool {
        self.children_hovering
    }

    /// This element or one of its descendants is hovered.
    pub(crate) fn hover_claimed(&self) -> bool {
        self.input.hovering || self.children_hovering
    }

    pub(crate) fn place_at_root(&mut self) {
        self.parent_origin = (0, 0);
        self.parent_clip = None;
    }

    // ── frame ──

    /// Rebuilds the area if needed, updates the children front-to-back, then
    /// this element's input state, handlers and widget.
    pub fn update(&mut self, gfx: &mut dyn Graphics, input: &InputView<'_>, dt: f32) -> UiResult<()> {
        if self.dirty || self.area.is_none() {
            self.rebuild(gfx)?;
        }

        let origin = self.absolute_position();
        let own = IRect::new(origin.0, origin.1, self.width, self.height);
        let clip = match self.parent_clip {
            None => Some(own),
            Some(parent) => parent.and_then(|p| p.intersect(own)),
        };

        let mut covered = false;
        for child in self.children.iter_mut().rev() {
            child.parent_origin = origin;
            child.parent_clip = Some(clip);
            child.window_active = self.window_active;
            child.display_input = self.display_input && !covered;

            child.update(gfx, input, dt)?;

            if child.hover_claimed() {
                covered = true;
            }
        }
        self.children_hovering = covered;

        self.input = self.compute_input(input);
        if self.input.hovering {
            fire(&mut self.handlers.hovering);
        }
        if self.input.pushing {
            fire(&mut self.handlers.pushing);
        }
        if self.input.pushed {
            fire(&mut self.handlers.pushed);
        }
        if self.input.separate {
            fire(&mut self.handlers.separate);
        }

        let mut ctx = UpdateCtx {
            input: self.input,
            size: (self.width, self.height),
            children: &mut self.children,
        };
        self.widget.update(&mut ctx, dt);

        for h in &mut self.handlers.update {
            h(dt);
        }
        Ok(())
    }

    fn rebuild(&mut self, gfx: &mut dyn Graphics) -> UiResult<()> {
        if let Some(old) = self.area.take() {
            old.destroy(gfx);
        }
        self.area = Some(TextureArea::new(gfx, self.width, self.height)?);
        self.dirty = false;
        trace!("element {:?} area rebuilt at {}x{}", self.id, self.width, self.height);
        Ok(())
    }

    fn compute_input(&self, input: &InputView<'_>) -> ElementInput {
        if !self.hover_test(input) {
            return ElementInput::default();
        }

        let keys = || self.access_keys.iter().copied();
        ElementInput {
            hovering: true,
            pushing: input.is_button_pushing(MouseButton::Left) || keys().any(|k| input.is_key_pushing(k)),
            pushed: input.is_button_pushed(MouseButton::Left) || keys().any(|k| input.is_key_pushed(k)),
            separate: input.is_button_separate(MouseButton::Left) || keys().any(|k| input.is_key_separate(k)),
        }
    }

    fn hover_test(&self, input: &InputView<'_>) -> bool {
        if !self.input_enabled || !self.display_input || !self.window_active || !input.focused() {
            return false;
        }
        if self.children_hovering {
            return false;
        }
        let Some(pointer) = input.pointer() else {
            return false;
        };

        let (px, py) = pointer.to_pixel();
        if !self.absolute_rect().contains_inclusive(px, py) {
            return false;
        }
        match self.parent_clip {
            None => true,
            Some(Some(clip)) => clip.contains_inclusive(px, py),
            Some(None) => false,
        }
    }

    /// Renders the children into their own areas, then paints this element's
    /// area: widget, paint handlers, and finally the visible children.
    ///
    /// Does nothing before the first `update`.
    pub fn render(&mut self, gfx: &mut dyn Graphics) -> UiResult<()> {
        let bounds = IRect::sized(self.width, self.height);
        for child in &mut self.children {
            if child.rect().overlaps(bounds) {
                child.render(gfx)?;
            }
        }

        self.widget.prepare(gfx)?;

        let Some(area) = &self.area else {
            return Ok(());
        };

        let size = (self.width, self.height);
        let widget = &mut self.widget;
        let handlers = &mut self.handlers.paint;
        let children = &self.children;

        area.render(gfx, |surface| {
            widget.paint(surface, size)?;
            for h in handlers.iter_mut() {
                h(surface, size)?;
            }
            for child in children {
                if child.rect().overlaps(bounds) {
                    child.composite(surface)?;
                }
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Copies the rendered area to the element's position on `surface`.
    pub fn composite(&self, surface: &mut dyn DrawSurface) -> GfxResult<()> {
        match &self.area {
            Some(area) => area.texture().render(surface, self.x as f32, self.y as f32),
            None => Ok(()),
        }
    }

    /// Tracks window focus for the whole subtree and forwards the event to
    /// the widgets.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::Focused(focused) = event {
            self.window_active = *focused;
        }
        self.widget.on_event(event);
        for child in &mut self.children {
            child.handle_event(event);
        }
    }

    /// Frees the area and the widget's resources, then the children's.
    pub fn dispose(&mut self, gfx: &mut dyn Graphics) {
        if let Some(area) = self.area.take() {
            area.destroy(gfx);
        }
        self.dirty = true;
        self.widget.dispose(gfx);
        for child in &mut self.children {
            child.dispose(gfx);
        }
    }
}

impl std::fmt::Debug for UiElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiElement")
            .field("id", &self.id)
            .field("rect", &self.rect())
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

fn check_size(width: u32, height: u32) -> UiResult<()> {
    if width == 0 || height == 0 {
        return Err(UiError::InvalidSize { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sdlib_engine::coords::Vec2;
    use sdlib_engine::gfx::headless::{DrawCall, HeadlessGraphics};
    use sdlib_engine::input::{InputFrame, InputState, KeyState, Modifiers};
    use sdlib_engine::paint::Color;

    use super::*;

    struct Fill(Color);

    impl Widget for Fill {
        fn paint(&mut self, surface: &mut dyn DrawSurface, (w, h): (u32, u32)) -> GfxResult<()> {
            surface.fill_rect(IRect::sized(w, h), self.0)
        }
    }

    fn fill(x: i32, y: i32, w: u32, h: u32) -> UiElement {
        UiElement::new(Fill(Color::WHITE), x, y, w, h).unwrap()
    }

    struct Input {
        state: InputState,
        frame: InputFrame,
    }

    impl Input {
        fn at(x: f32, y: f32) -> Self {
            let mut input = Self {
                state: InputState::default(),
                frame: InputFrame::default(),
            };
            input.send(InputEvent::PointerMoved(Vec2::new(x, y)));
            input
        }

        fn send(&mut self, ev: InputEvent) {
            self.state.apply_event(&mut self.frame, ev);
        }

        fn left(&mut self, state: KeyState) {
            let position = self.state.pointer_pos.unwrap_or(Vec2::ZERO);
            self.send(InputEvent::PointerButton { button: MouseButton::Left, state, position });
        }

        fn key(&mut self, key: Key, state: KeyState) {
            self.send(InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat: false });
        }

        fn view(&self) -> InputView<'_> {
            InputView::new(&self.state, &self.frame)
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            UiElement::new(Fill(Color::RED), 0, 0, 0, 10),
            Err(UiError::InvalidSize { width: 0, height: 10 })
        ));

        let mut e = fill(0, 0, 10, 10);
        assert!(e.set_height(0).is_err());
        assert_eq!(e.size(), (10, 10));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(fill(0, 0, 1, 1).id(), fill(0, 0, 1, 1).id());
    }

    #[test]
    fn typed_widget_access() {
        let mut e = fill(0, 0, 4, 4);
        assert_eq!(e.widget::<Fill>().map(|f| f.0), Some(Color::WHITE));
        if let Some(f) = e.widget_mut::<Fill>() {
            f.0 = Color::BLUE;
        }
        assert_eq!(e.widget::<Fill>().map(|f| f.0), Some(Color::BLUE));
    }

    // ── area lifecycle ────────────────────────────────────────────────────

    #[test]
    fn area_is_rebuilt_only_on_resize() {
        let mut gfx = HeadlessGraphics::new();
        let input = Input::at(-1.0, -1.0);
        let mut e = fill(0, 0, 10, 10);

        e.update(&mut gfx, &input.view(), 0.016).unwrap();
        let first = e.area().unwrap().texture().id();
        e.update(&mut gfx, &input.view(), 0.016).unwrap();
        assert_eq!(e.area().unwrap().texture().id(), first);

        e.set_width(20).unwrap();
        e.update(&mut gfx, &input.view(), 0.016).unwrap();
        assert_ne!(e.area().unwrap().texture().id(), first);
        assert_eq!(e.area().unwrap().width(), 20);
        assert_eq!(gfx.texture_count(), 1);
    }

    #[test]
    fn dispose_frees_the_whole_subtree() {
        let mut gfx = HeadlessGraphics::new();
        let input = Input::at(-1.0, -1.0);
        let mut root = fill(0, 0, 50, 50);
        root.add_child(fill(0, 0, 10, 10));
        root.add_child(fill(10, 10, 10, 10));

        root.update(&mut gfx, &input.view(), 0.0).unwrap();
        assert_eq!(gfx.texture_count(), 3);
        root.dispose(&mut gfx);
        assert_eq!(gfx.texture_count(), 0);
    }

    // ── hover ─────────────────────────────────────────────────────────────

    #[test]
    fn hover_uses_inclusive_edges() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = fill(10, 10, 20, 20);

        e.update(&mut gfx, &Input::at(30.0, 30.0).view(), 0.0).unwrap();
        assert!(e.is_hovering());

        e.update(&mut gfx, &Input::at(31.0, 30.0).view(), 0.0).unwrap();
        assert!(!e.is_hovering());
    }

    #[test]
    fn absolute_position_sums_every_ancestor() {
        let mut gfx = HeadlessGraphics::new();
        let grandchild = fill(5, 5, 10, 10);
        let leaf = grandchild.id();

        let mut child = fill(20, 20, 40, 40);
        let mid = child.id();
        child.add_child(grandchild);

        let mut root = fill(100, 100, 100, 100);
        root.add_child(child);

        root.update(&mut gfx, &Input::at(126.0, 126.0).view(), 0.0).unwrap();

        let child = root.child(mid).unwrap();
        let leaf = child.child(leaf).unwrap();
        assert_eq!(leaf.absolute_position(), (125, 125));
        assert!(leaf.is_hovering());
        assert!(child.children_hovering());
        assert!(!child.is_hovering());
        assert!(!root.is_hovering());
    }

    #[test]
    fn front_sibling_occludes_the_one_behind() {
        let mut gfx = HeadlessGraphics::new();
        let mut root = fill(0, 0, 100, 100);
        let back = root.add_child(fill(0, 0, 50, 50));
        let front = root.add_child(fill(25, 25, 50, 50));

        root.update(&mut gfx, &Input::at(30.0, 30.0).view(), 0.0).unwrap();
        assert!(root.child(front).unwrap().is_hovering());
        assert!(!root.child(back).unwrap().is_hovering());

        root.update(&mut gfx, &Input::at(10.0, 10.0).view(), 0.0).unwrap();
        assert!(!root.child(front).unwrap().is_hovering());
        assert!(root.child(back).unwrap().is_hovering());
    }

    #[test]
    fn overflowing_child_is_clipped_by_its_parent() {
        let mut gfx = HeadlessGraphics::new();
        let mut root = fill(0, 0, 50, 50);
        let child = root.add_child(fill(40, 40, 30, 30));

        root.update(&mut gfx, &Input::at(60.0, 60.0).view(), 0.0).unwrap();
        assert!(!root.child(child).unwrap().is_hovering());

        root.update(&mut gfx, &Input::at(45.0, 45.0).view(), 0.0).unwrap();
        assert!(root.child(child).unwrap().is_hovering());
    }

    #[test]
    fn disabled_or_unfocused_elements_do_not_hover() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = fill(0, 0, 10, 10);
        e.input_enabled = false;
        e.update(&mut gfx, &Input::at(5.0, 5.0).view(), 0.0).unwrap();
        assert!(!e.is_hovering());

        e.input_enabled = true;
        e.handle_event(&InputEvent::Focused(false));
        e.update(&mut gfx, &Input::at(5.0, 5.0).view(), 0.0).unwrap();
        assert!(!e.is_hovering());

        e.handle_event(&InputEvent::Focused(true));
        e.update(&mut gfx, &Input::at(5.0, 5.0).view(), 0.0).unwrap();
        assert!(e.is_hovering());
    }

    // ── push states ───────────────────────────────────────────────────────

    #[test]
    fn left_button_drives_push_states_and_handlers() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = fill(0, 0, 10, 10);
        let pushed = Rc::new(Cell::new(0));
        let separated = Rc::new(Cell::new(0));
        {
            let pushed = pushed.clone();
            e.on_pushed(move || pushed.set(pushed.get() + 1));
            let separated = separated.clone();
            e.on_separate(move || separated.set(separated.get() + 1));
        }

        let mut input = Input::at(5.0, 5.0);
        input.left(KeyState::Pressed);
        e.update(&mut gfx, &input.view(), 0.0).unwrap();
        assert_eq!(e.input(), ElementInput { hovering: true, pushing: true, pushed: true, separate: false });

        input.frame.clear();
        e.update(&mut gfx, &input.view(), 0.0).unwrap();
        assert!(e.is_pushing());
        assert!(!e.is_pushed());

        input.left(KeyState::Released);
        e.update(&mut gfx, &input.view(), 0.0).unwrap();
        assert!(e.is_separate());
        assert!(!e.is_pushing());

        assert_eq!(pushed.get(), 1);
        assert_eq!(separated.get(), 1);
    }

    #[test]
    fn any_access_key_pushes() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = fill(0, 0, 10, 10);
        e.access_keys.extend([Key::Enter, Key::Space]);

        let mut input = Input::at(5.0, 5.0);
        input.key(Key::Space, KeyState::Pressed);
        e.update(&mut gfx, &input.view(), 0.0).unwrap();
        assert!(e.is_pushed());
        assert!(e.is_pushing());
    }

    #[test]
    fn update_handlers_receive_delta() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = fill(0, 0, 10, 10);
        let total = Rc::new(Cell::new(0.0f32));
        let t = total.clone();
        e.on_update(move |dt| t.set(t.get() + dt));

        let input = Input::at(-5.0, -5.0);
        e.update(&mut gfx, &input.view(), 0.25).unwrap();
        e.update(&mut gfx, &input.view(), 0.5).unwrap();
        assert_eq!(total.get(), 0.75);
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn children_composite_into_parent_area() {
        let mut gfx = HeadlessGraphics::new();
        let input = Input::at(-1.0, -1.0);
        let mut root = fill(0, 0, 50, 50);
        let inside = root.add_child(fill(10, 10, 10, 10));
        root.add_child(fill(200, 200, 10, 10));

        root.update(&mut gfx, &input.view(), 0.0).unwrap();
        gfx.take_calls();
        root.render(&mut gfx).unwrap();

        let root_area = root.area().unwrap().texture().id();
        let child_area = root.child(inside).unwrap().area().unwrap().texture().id();

        let copies: Vec<_> = gfx
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Copy { target, texture, dst, .. } => Some((*target, *texture, dst.x, dst.y)),
                _ => None,
            })
            .collect();
        // The off-area child is neither rendered nor copied.
        assert_eq!(copies, vec![(Some(root_area), child_area, 10.0, 10.0)]);

        // Child is drawn before the parent area is opened.
        let first_root_call = gfx.calls().iter().position(|c| c.target() == Some(root_area));
        let first_child_call = gfx.calls().iter().position(|c| c.target() == Some(child_area));
        assert!(first_child_call < first_root_call);
    }

    #[test]
    fn paint_handlers_draw_after_the_widget() {
        let mut gfx = HeadlessGraphics::new();
        let input = Input::at(-1.0, -1.0);
        let mut e = fill(0, 0, 8, 8);
        e.on_paint(|surface, _| surface.fill_rect(IRect::new(1, 1, 2, 2), Color::RED));

        e.update(&mut gfx, &input.view(), 0.0).unwrap();
        e.render(&mut gfx).unwrap();

        let fills: Vec<Color> = gfx
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![Color::WHITE, Color::RED]);
    }
}
