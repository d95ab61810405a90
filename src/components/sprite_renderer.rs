//! Sprite drawing component

use crate::animation::AnimationController;
use crate::canvas::Canvas;
use crate::component::{Component, UpdateCtx};
use crate::gameobject::{Facing, GameObject};
use crate::sprite::Sprite;

/// Draws a static sprite or an animation at the owner's position.
///
/// The draw anchor is `(x - origin_x + offset_x, y - origin_y + offset_y)`,
/// mirrored horizontally while the owner faces left. When both a sprite and
/// an animation are present, the animation wins.
#[derive(Default)]
pub struct SpriteRenderer {
    pub sprite: Option<Sprite>,
    pub animation: Option<AnimationController>,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sprite(sprite: Sprite) -> Self {
        Self {
            sprite: Some(sprite),
            ..Self::default()
        }
    }

    pub fn from_animation(animation: AnimationController) -> Self {
        Self {
            animation: Some(animation),
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

impl Component for SpriteRenderer {
    fn update(&mut self, dt: f32, _owner: &mut GameObject, _ctx: &UpdateCtx) {
        if let Some(animation) = &mut self.animation {
            animation.update(dt);
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, scale: f32, owner: &GameObject) {
        let x = owner.x - owner.origin_x + self.offset_x;
        let y = owner.y - owner.origin_y + self.offset_y;
        let flip_x = owner.facing == Facing::Left;

        if let Some(animation) = &self.animation {
            animation.draw(canvas, scale, x, y, flip_x);
        } else if let Some(sprite) = &self.sprite {
            sprite.draw(canvas, scale, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Image;
    use crate::animation::SpriteAnimation;
    use crate::canvas::{DrawCall, RecordingCanvas};
    use crate::rect::Rect;
    use crate::sprite::SpriteSheet;

    fn pet() -> GameObject {
        let sheet = SpriteSheet::new(Image::blank(64.0, 16.0), 16.0, 16.0);
        let ctrl = crate::animation::AnimationController::new()
            .with("idle", SpriteAnimation::new(sheet, vec![0, 1], 100.0));
        GameObject::new("pet")
            .with_position(40.0, 30.0)
            .with_origin(8.0, 16.0)
            .with_component(SpriteRenderer::from_animation(ctrl))
    }

    #[test]
    fn test_draw_applies_origin_and_scale() {
        let obj = pet();
        let mut canvas = RecordingCanvas::new();
        obj.draw(&mut canvas, 2.0);

        assert_eq!(
            canvas.calls,
            vec![DrawCall::Region {
                src: Rect::new(0.0, 0.0, 16.0, 16.0),
                dest: Rect::new(64.0, 28.0, 32.0, 32.0),
                flip_x: false,
            }]
        );
    }

    #[test]
    fn test_facing_left_flips_in_place() {
        let mut obj = pet();
        obj.facing = Facing::Left;
        let mut canvas = RecordingCanvas::new();
        obj.draw(&mut canvas, 2.0);

        match &canvas.calls[0] {
            DrawCall::Region { dest, flip_x, .. } => {
                // same destination rect as the unflipped draw
                assert_eq!(*dest, Rect::new(64.0, 28.0, 32.0, 32.0));
                assert!(flip_x);
            }
            other => panic!("unexpected draw call {:?}", other),
        }
    }
}
