//! Built-in components: sprite drawing, text labels, pointer hit regions

mod pointer_area;
mod sprite_renderer;
mod text_label;

pub use pointer_area::{PointerArea, PointerHit};
pub use sprite_renderer::SpriteRenderer;
pub use text_label::TextLabel;
