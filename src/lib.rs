//! tinypix: a tiny fixed-resolution 2D pixel-art game engine
//!
//! Like a Game Boy dev kit for macroquad:
//! - Fixed virtual resolution with integer upscaling and letterboxing
//! - Scenes of game objects composed from reusable components
//! - Sprite-sheet animations with loop/clamp playback and named states
//! - Follow camera with zoom, smoothing, and world bounds
//! - Pointer gestures: hover, click, hold - dispatched by z-ordered hit-test
//!
//! A game builds [`Scene`]s out of [`GameObject`]s, attaches [`Component`]s
//! for behavior and drawing, registers the scenes on an [`Engine`], and runs
//! the loop:
//!
//! ```no_run
//! use tinypix::{Engine, EngineConfig, GameObject, Scene};
//!
//! #[macroquad::main("game")]
//! async fn main() {
//!     let mut scene = Scene::new();
//!     let hero = scene.add_object(GameObject::new("hero").with_position(80.0, 72.0));
//!     scene.set_camera_target(hero);
//!
//!     let mut engine = Engine::new(&EngineConfig::default());
//!     engine.add_scene("overworld", scene);
//!     engine.set_scene("overworld");
//!     engine.run().await;
//! }
//! ```

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod animation;
pub mod assets;
pub mod camera;
pub mod canvas;
pub mod component;
pub mod components;
pub mod config;
pub mod engine;
pub mod events;
pub mod gameobject;
pub mod input;
pub mod rect;
pub mod scene;
pub mod sprite;

pub use animation::{AnimationController, SpriteAnimation};
pub use assets::{AssetError, AssetStore, Image};
pub use camera::Camera;
pub use canvas::{Canvas, ScreenCanvas, TextAlign};
pub use component::{Component, UpdateCtx};
pub use components::{PointerArea, PointerHit, SpriteRenderer, TextLabel};
pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use events::{EventQueue, GestureKind, PointerEvent};
pub use gameobject::{Facing, GameObject, ObjectId};
pub use input::{InputState, KeyCode, Keyboard, PointerSnapshot};
pub use rect::Rect;
pub use scene::Scene;
pub use sprite::{Sprite, SpriteSheet};
