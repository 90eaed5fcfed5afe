use log::debug;
use sdlib_engine::gfx::Graphics;
use sdlib_engine::input::{InputEvent, InputView};

use crate::element::{ElementId, UiElement};
use crate::error::UiResult;

/// The top-level elements of one screen, in back-to-front order.
///
/// The element added last is the topmost: it is updated first and, once it
/// (or one of its descendants) is hovered, nothing behind it can be.
#[derive(Debug, Default)]
pub struct UiDisplay {
    elements: Vec<UiElement>,
}

impl UiDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: UiElement) -> ElementId {
        let id = element.id();
        self.elements.push(element);
        id
    }

    /// Detaches an element without freeing its textures.
    pub fn remove(&mut self, id: ElementId) -> Option<UiElement> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&UiElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut UiElement> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn update(&mut self, gfx: &mut dyn Graphics, input: &InputView<'_>, dt: f32) -> UiResult<()> {
        let mut covered = false;
        for element in self.elements.iter_mut().rev() {
            element.place_at_root();
            element.display_input = !covered;
            element.update(gfx, input, dt)?;
            if element.hover_claimed() {
                covered = true;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        for element in &mut self.elements {
            element.handle_event(event);
        }
    }

    /// Renders every element and composites it onto the screen.
    pub fn render(&mut self, gfx: &mut dyn Graphics) -> UiResult<()> {
        for element in &mut self.elements {
            element.render(gfx)?;
            element.composite(gfx.surface())?;
        }
        Ok(())
    }

    pub fn dispose(&mut self, gfx: &mut dyn Graphics) {
        for element in &mut self.elements {
            element.dispose(gfx);
        }
        debug!("disposed {} ui elements", self.elements.len());
    }
}
