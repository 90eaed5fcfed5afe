use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::device::{Graphics, TextureId};
use super::error::GfxResult;
use super::texture::Texture2D;

/// Registry of textures loaded from files.
///
/// Deleting goes through the registry, so a texture this manager did not
/// load is never freed by it.
#[derive(Debug, Default)]
pub struct TextureManager {
    loaded: HashMap<TextureId, PathBuf>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, gfx: &mut dyn Graphics, path: impl AsRef<Path>) -> GfxResult<Texture2D> {
        let path = path.as_ref();
        let texture = Texture2D::load(gfx, path)?;
        debug!("loaded texture {} ({}x{})", path.display(), texture.width(), texture.height());
        self.loaded.insert(texture.id(), path.to_path_buf());
        Ok(texture)
    }

    /// Loads every path, stopping at the first failure.
    ///
    /// Textures loaded before the failure stay registered.
    pub fn load_many<I, P>(&mut self, gfx: &mut dyn Graphics, paths: I) -> GfxResult<Vec<Texture2D>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().map(|p| self.load(gfx, p)).collect()
    }

    /// Frees `texture` if this manager loaded it.
    pub fn delete(&mut self, gfx: &mut dyn Graphics, texture: &Texture2D) -> bool {
        match self.loaded.remove(&texture.id()) {
            Some(path) => {
                gfx.destroy_texture(texture.id());
                debug!("deleted texture {}", path.display());
                true
            }
            None => {
                warn!("texture {:?} is not managed here; not deleting", texture.id());
                false
            }
        }
    }

    /// Returns how many of `textures` were deleted.
    pub fn delete_many<'a, I>(&mut self, gfx: &mut dyn Graphics, textures: I) -> usize
    where
        I: IntoIterator<Item = &'a Texture2D>,
    {
        textures
            .into_iter()
            .filter(|t| self.delete(gfx, t))
            .count()
    }

    pub fn delete_all(&mut self, gfx: &mut dyn Graphics) {
        for (id, _) in self.loaded.drain() {
            gfx.destroy_texture(id);
        }
    }

    pub fn contains(&self, texture: &Texture2D) -> bool {
        self.loaded.contains_key(&texture.id())
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::headless::HeadlessGraphics;

    fn device() -> HeadlessGraphics {
        let mut gfx = HeadlessGraphics::new();
        gfx.register_image("a.png", 8, 8);
        gfx.register_image("b.png", 16, 16);
        gfx
    }

    #[test]
    fn load_many_registers_all() {
        let mut gfx = device();
        let mut manager = TextureManager::new();
        let textures = manager.load_many(&mut gfx, ["a.png", "b.png"]).unwrap();
        assert_eq!(textures.len(), 2);
        assert_eq!(manager.len(), 2);
        assert_eq!(textures[1].width(), 16);
    }

    #[test]
    fn load_many_stops_at_first_failure() {
        let mut gfx = device();
        let mut manager = TextureManager::new();
        assert!(manager.load_many(&mut gfx, ["a.png", "nope.png", "b.png"]).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn foreign_textures_are_not_deleted() {
        let mut gfx = device();
        let mut manager = TextureManager::new();
        let foreign = Texture2D::load(&mut gfx, "a.png").unwrap();
        assert!(!manager.delete(&mut gfx, &foreign));
        assert_eq!(gfx.texture_count(), 1);
    }

    #[test]
    fn delete_many_counts_managed_only() {
        let mut gfx = device();
        let mut manager = TextureManager::new();
        let a = manager.load(&mut gfx, "a.png").unwrap();
        let foreign = Texture2D::load(&mut gfx, "b.png").unwrap();
        assert_eq!(manager.delete_many(&mut gfx, [&a, &foreign]), 1);
        assert!(!manager.contains(&a));
        assert_eq!(gfx.texture_count(), 1);
    }

    #[test]
    fn delete_all_frees_everything() {
        let mut gfx = device();
        let mut manager = TextureManager::new();
        manager.load_many(&mut gfx, ["a.png", "b.png"]).unwrap();
        manager.delete_all(&mut gfx);
        assert!(manager.is_empty());
        assert_eq!(gfx.texture_count(), 0);
    }
}
