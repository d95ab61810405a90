//! Images and the asset store
//!
//! The engine never performs image I/O on its own: games load what they need
//! up front and hand the decoded images to whoever draws them. The store is
//! plain dependency-injected state - there is no process-wide registry.

use std::collections::HashMap;

use macroquad::texture::{load_texture, FilterMode, Texture2D};

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// Lookup of a key that was never registered
    Missing(String),
    /// Backend failure while loading/decoding an image file
    Load(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Missing(key) => {
                write!(f, "missing asset '{}' (never registered in the store)", key)
            }
            AssetError::Load(msg) => write!(f, "failed to load asset: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

/// A decoded raster image ready for drawing.
///
/// Pairs the GPU texture with its pixel dimensions so sprite-sheet grid math
/// never has to touch the graphics backend. The texture slot is optional:
/// `Image::blank` builds a texture-less image for headless use (sizing logic,
/// tests), and drawing one is simply a no-op.
#[derive(Clone, Debug)]
pub struct Image {
    texture: Option<Texture2D>,
    pub width: f32,
    pub height: f32,
}

impl Image {
    /// Wrap an uploaded texture. Filtering is forced to nearest-neighbor so
    /// scaled pixel art stays crisp.
    pub fn from_texture(texture: Texture2D) -> Self {
        texture.set_filter(FilterMode::Nearest);
        let (width, height) = (texture.width(), texture.height());
        Self {
            texture: Some(texture),
            width,
            height,
        }
    }

    /// An image with dimensions but no backing texture.
    pub fn blank(width: f32, height: f32) -> Self {
        Self {
            texture: None,
            width,
            height,
        }
    }

    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }
}

/// A store of decoded images keyed by name.
///
/// Pass it (or the individual images) into scene setup code explicitly;
/// a missing key is a fail-fast error at this boundary, not a silent None.
#[derive(Default)]
pub struct AssetStore {
    images: HashMap<String, Image>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    /// Register an already-decoded image under a key.
    /// Replaces any previous image with the same key.
    pub fn insert(&mut self, key: impl Into<String>, image: Image) {
        let key = key.into();
        log::debug!("asset '{}' registered ({}x{})", key, image.width, image.height);
        self.images.insert(key, image);
    }

    /// Load an image file through the backend and register it.
    pub async fn load_image(&mut self, key: &str, path: &str) -> Result<(), AssetError> {
        let texture = load_texture(path)
            .await
            .map_err(|e| AssetError::Load(format!("{}: {}", path, e)))?;
        self.insert(key, Image::from_texture(texture));
        Ok(())
    }

    /// Look up an image by key.
    pub fn get(&self, key: &str) -> Result<&Image, AssetError> {
        self.images
            .get(key)
            .ok_or_else(|| AssetError::Missing(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.images.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
