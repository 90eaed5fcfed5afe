use std::collections::HashMap;

use log::{debug, info, warn};
use sdlib_engine::audio::AudioDevice;
use sdlib_engine::core::FrameCtx;
use sdlib_engine::gfx::{GfxError, GfxResult, Graphics};
use sdlib_engine::input::InputView;
use sdlib_engine::time::AppTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no scene named `{0}`")]
    UnknownScene(String),

    #[error("a scene named `{0}` is already registered")]
    DuplicateScene(String),

    #[error(transparent)]
    Gfx(#[from] GfxError),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// What a scene sees during one frame.
///
/// `'a` is the duration of the frame callback.
pub struct SceneCtx<'a> {
    pub gfx: &'a mut dyn Graphics,
    pub audio: &'a mut dyn AudioDevice,
    pub input: InputView<'a>,
    pub time: AppTime,
    next_scene: Option<String>,
}

impl<'a> SceneCtx<'a> {
    pub fn new(
        gfx: &'a mut dyn Graphics,
        audio: &'a mut dyn AudioDevice,
        input: InputView<'a>,
        time: AppTime,
    ) -> Self {
        Self {
            gfx,
            audio,
            input,
            time,
            next_scene: None,
        }
    }

    /// Borrows the devices and input of a runtime frame.
    pub fn from_frame(frame: &'a mut FrameCtx<'_>) -> Self {
        let input = InputView::new(frame.input, frame.input_frame);
        Self::new(&mut *frame.gfx, &mut *frame.audio, input, frame.time)
    }

    /// Asks the manager to switch scenes at the start of the next `view`.
    ///
    /// A later request in the same frame replaces an earlier one.
    pub fn set_scene(&mut self, name: impl Into<String>) {
        self.next_scene = Some(name.into());
    }

    pub fn requested_scene(&self) -> Option<&str> {
        self.next_scene.as_deref()
    }

    pub(crate) fn take_scene_request(&mut self) -> Option<String> {
        self.next_scene.take()
    }
}

/// One screen of the application, driven by a `SceneManager`.
pub trait Scene {
    /// Runs on the first `view` after the scene becomes current.
    fn init(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let _ = ctx;
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneCtx<'_>);

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()>;

    /// Applies the mutations deferred during `update` and `render`.
    fn end_frame(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }

    /// Releases everything the scene holds. The scene may be initialized again later.
    fn finish(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }

    fn actor_count(&self) -> usize {
        0
    }
}

/// Named scenes with at most one current.
///
/// Switching finishes the outgoing scene and re-initializes the incoming one
/// on its next `view`, so a scene can be entered any number of times.
#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<String, Box<dyn Scene>>,
    current: Option<String>,
    needs_init: bool,
    pending: Option<String>,
    actor_count: usize,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scene under `name`. With `activate_if_none` it becomes current
    /// when no scene is.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        scene: impl Scene + 'static,
        activate_if_none: bool,
    ) -> SceneResult<()> {
        let name = name.into();
        if self.scenes.contains_key(&name) {
            warn!("scene `{name}` registered twice");
            return Err(SceneError::DuplicateScene(name));
        }

        if activate_if_none && self.current.is_none() {
            debug!("scene `{name}` is now current");
            self.current = Some(name.clone());
            self.needs_init = true;
        }
        self.scenes.insert(name, Box::new(scene));
        Ok(())
    }

    /// Switches immediately: the current scene is finished and `name` is
    /// initialized on the next `view`.
    pub fn set_scene(&mut self, name: &str, gfx: &mut dyn Graphics) -> SceneResult<()> {
        if !self.scenes.contains_key(name) {
            return Err(SceneError::UnknownScene(name.to_string()));
        }

        if let Some(current) = self.current.take() {
            if let Some(scene) = self.scenes.get_mut(&current) {
                scene.finish(gfx);
            }
        }

        info!("switched to scene `{name}`");
        self.current = Some(name.to_string());
        self.needs_init = true;
        self.pending = None;
        self.actor_count = 0;
        Ok(())
    }

    /// Finishes and drops a scene. Returns false for an unknown name.
    pub fn remove(&mut self, name: &str, gfx: &mut dyn Graphics) -> bool {
        let Some(mut scene) = self.scenes.remove(name) else {
            return false;
        };
        scene.finish(gfx);

        if self.current.as_deref() == Some(name) {
            self.current = None;
            self.actor_count = 0;
        }
        if self.pending.as_deref() == Some(name) {
            self.pending = None;
        }
        debug!("removed scene `{name}`");
        true
    }

    pub fn remove_all(&mut self, gfx: &mut dyn Graphics) {
        for (_, mut scene) in self.scenes.drain() {
            scene.finish(gfx);
        }
        self.current = None;
        self.pending = None;
        self.actor_count = 0;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Actors in the current scene as of the last completed frame.
    pub fn actor_count(&self) -> usize {
        self.actor_count
    }

    /// Runs one frame of the current scene.
    ///
    /// A frame does exactly one of: apply a transition requested last frame,
    /// initialize the current scene, or update, render and end the frame.
    pub fn view(&mut self, ctx: &mut SceneCtx<'_>) -> SceneResult<()> {
        if let Some(next) = self.pending.take() {
            return self.set_scene(&next, ctx.gfx);
        }

        let Some(scene) = self.current.as_ref().and_then(|name| self.scenes.get_mut(name)) else {
            return Ok(());
        };

        if self.needs_init {
            scene.init(ctx)?;
            self.needs_init = false;
        } else {
            scene.update(ctx);
            scene.render(ctx)?;
            scene.end_frame(ctx.gfx);
            self.actor_count = scene.actor_count();
        }

        if let Some(next) = ctx.take_scene_request() {
            if !self.scenes.contains_key(&next) {
                return Err(SceneError::UnknownScene(next));
            }
            self.pending = Some(next);
        }
        Ok(())
    }
}

impl std::fmt::Debug for SceneManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.scenes.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SceneManager")
            .field("scenes", &names)
            .field("current", &self.current)
            .field("pending", &self.pending)
            .finish()
    }
}
