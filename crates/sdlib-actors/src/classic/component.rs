use sdlib_engine::coords::Vec2;
use sdlib_engine::gfx::{GfxResult, Graphics, Texture2D};

use crate::scene::SceneCtx;

/// A reusable piece of actor behavior. Every hook is optional.
pub trait Component {
    fn update(&mut self, ctx: &mut SceneCtx<'_>) {
        let _ = ctx;
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let _ = ctx;
        Ok(())
    }

    fn dispose(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }
}

/// Components an actor drives in insertion order.
#[derive(Default)]
pub struct Components {
    list: Vec<Box<dyn Component>>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component and returns its index.
    pub fn add(&mut self, component: impl Component + 'static) -> usize {
        self.list.push(Box::new(component));
        self.list.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&dyn Component> {
        self.list.get(index).map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn update_all(&mut self, ctx: &mut SceneCtx<'_>) {
        for component in &mut self.list {
            component.update(ctx);
        }
    }

    pub fn render_all(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        for component in &mut self.list {
            component.render(ctx)?;
        }
        Ok(())
    }

    /// Disposes and drops every component.
    pub fn dispose_all(&mut self, gfx: &mut dyn Graphics) {
        for mut component in self.list.drain(..) {
            component.dispose(gfx);
        }
    }
}

impl std::fmt::Debug for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Components").field("len", &self.list.len()).finish()
    }
}

/// Draws a texture at a position.
///
/// The texture usually comes from a `TextureManager` and is left alone on
/// dispose; build with `owning` to destroy it instead.
#[derive(Debug, Clone)]
pub struct TextureComponent {
    pub texture: Texture2D,
    pub position: Vec2,
    pub visible: bool,
    owned: bool,
}

impl TextureComponent {
    pub fn new(texture: Texture2D, position: Vec2) -> Self {
        Self {
            texture,
            position,
            visible: true,
            owned: false,
        }
    }

    pub fn owning(mut self) -> Self {
        self.owned = true;
        self
    }
}

impl Component for TextureComponent {
    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        if !self.visible {
            return Ok(());
        }
        self.texture.render(ctx.gfx.surface(), self.position.x, self.position.y)
    }

    fn dispose(&mut self, gfx: &mut dyn Graphics) {
        if self.owned {
            gfx.destroy_texture(self.texture.id());
            self.owned = false;
        }
    }
}
