//! Virtual pet demo
//!
//! Exercises the whole engine with procedurally generated textures (no asset
//! files): a pet you can steer with the arrow keys, send somewhere by
//! clicking the ground, and put to sleep by press-and-holding it. The camera
//! follows the pet across a world wider than the screen.

use macroquad::prelude::*;
use tinypix::{
    AnimationController, Component, Engine, EngineConfig, Facing, GameObject, GestureKind, Image,
    ObjectId, PointerArea, Scene, Sprite, SpriteAnimation, SpriteRenderer, SpriteSheet, TextAlign,
    TextLabel, UpdateCtx,
};

const WORLD_W: f32 = 320.0;
const WORLD_H: f32 = 144.0;

/// Moves the pet toward the most recent ground click.
struct ClickToMove {
    ground: ObjectId,
    speed: f32,
    target: Option<(f32, f32)>,
}

impl ClickToMove {
    fn new(ground: ObjectId, speed: f32) -> Self {
        Self {
            ground,
            speed,
            target: None,
        }
    }

    fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    fn cancel(&mut self) {
        self.target = None;
    }
}

impl Component for ClickToMove {
    fn update(&mut self, dt: f32, owner: &mut GameObject, ctx: &UpdateCtx) {
        for event in ctx.events.iter() {
            if event.object == self.ground && event.kind == GestureKind::Click {
                self.target = Some((event.world_x, event.world_y));
            }
        }

        let Some((tx, ty)) = self.target else {
            return;
        };
        let dx = tx - owner.x;
        let dy = ty - owner.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let step = self.speed * dt / 1000.0;

        if dist <= step.max(0.5) {
            owner.x = tx;
            owner.y = ty;
            self.target = None;
        } else {
            owner.x += dx / dist * step;
            owner.y += dy / dist * step;
            owner.facing = if dx < 0.0 { Facing::Left } else { Facing::Right };
        }
    }
}

/// Keyboard steering, nap-on-hold, and animation state switching.
struct PetController {
    speed: f32,
    asleep: bool,
}

impl PetController {
    fn new(speed: f32) -> Self {
        Self {
            speed,
            asleep: false,
        }
    }
}

impl Component for PetController {
    fn update(&mut self, dt: f32, owner: &mut GameObject, ctx: &UpdateCtx) {
        // press-and-hold on the pet toggles its nap
        for event in ctx.events.iter() {
            if event.object == owner.id() {
                match event.kind {
                    GestureKind::HoldStart => self.asleep = true,
                    GestureKind::HoldEnd => self.asleep = false,
                    _ => {}
                }
            }
        }

        if self.asleep {
            if let Some(renderer) = owner.get_component_mut::<SpriteRenderer>() {
                if let Some(animation) = &mut renderer.animation {
                    animation.set_state("sleep");
                }
            }
            return;
        }

        let keyboard = &ctx.input.keyboard;
        let seconds = dt / 1000.0;
        let mut vx = 0.0;
        let mut vy = 0.0;
        if keyboard.is_down(KeyCode::Left) || keyboard.is_down(KeyCode::A) {
            vx -= self.speed;
        }
        if keyboard.is_down(KeyCode::Right) || keyboard.is_down(KeyCode::D) {
            vx += self.speed;
        }
        if keyboard.is_down(KeyCode::Up) || keyboard.is_down(KeyCode::W) {
            vy -= self.speed;
        }
        if keyboard.is_down(KeyCode::Down) || keyboard.is_down(KeyCode::S) {
            vy += self.speed;
        }

        let manual = vx != 0.0 || vy != 0.0;
        if manual {
            owner.x += vx * seconds;
            owner.y += vy * seconds;
            if vx < 0.0 {
                owner.facing = Facing::Left;
            } else if vx > 0.0 {
                owner.facing = Facing::Right;
            }
            // steering overrides any pending click target
            if let Some(mover) = owner.get_component_mut::<ClickToMove>() {
                mover.cancel();
            }
        }

        owner.x = owner.x.clamp(8.0, WORLD_W - 8.0);
        owner.y = owner.y.clamp(16.0, WORLD_H);

        let moving = manual
            || owner
                .get_component::<ClickToMove>()
                .map_or(false, |m| m.is_moving());
        if let Some(renderer) = owner.get_component_mut::<SpriteRenderer>() {
            if let Some(animation) = &mut renderer.animation {
                animation.set_state(if moving { "walk" } else { "idle" });
            }
        }
    }
}

/// A 16x16-per-frame sheet: a blocky critter whose body bobs and whose eye
/// blinks across frames.
fn pet_sheet(frames: usize, body: [u8; 3]) -> SpriteSheet {
    let width = 16 * frames;
    let mut pixels = vec![0u8; width * 16 * 4];
    for frame in 0..frames {
        let bob = (frame % 2) as usize;
        for y in (3 + bob)..15 {
            for x in 2..14 {
                let i = ((y * width) + frame * 16 + x) * 4;
                pixels[i] = body[0];
                pixels[i + 1] = body[1];
                pixels[i + 2] = body[2];
                pixels[i + 3] = 255;
            }
        }
        // eye on the facing side, closed every other frame
        let eye_open = frame % 2 == 0;
        let ey = 6 + bob;
        let i = ((ey * width) + frame * 16 + 10) * 4;
        let shade = if eye_open { 10 } else { body[0] / 2 };
        pixels[i] = shade;
        pixels[i + 1] = shade;
        pixels[i + 2] = shade;
        pixels[i + 3] = 255;
    }
    let texture = Texture2D::from_rgba8(width as u16, 16, &pixels);
    SpriteSheet::new(Image::from_texture(texture), 16.0, 16.0)
}

/// A 16x24 pine: green canopy over a brown trunk.
fn tree_sprite() -> Sprite {
    let (w, h) = (16usize, 24usize);
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let half = if y < 16 { 8 - y as i32 / 2 } else { 0 };
            let canopy = y < 16 && (x as i32 - 8).abs() <= 8 - half.max(0);
            let trunk = y >= 16 && (6..10).contains(&x);
            if canopy || trunk {
                let i = (y * w + x) * 4;
                let (r, g, b) = if canopy { (24, 96, 48) } else { (92, 64, 38) };
                pixels[i] = r;
                pixels[i + 1] = g;
                pixels[i + 2] = b;
                pixels[i + 3] = 255;
            }
        }
    }
    let texture = Texture2D::from_rgba8(w as u16, h as u16, &pixels);
    Sprite::new(Image::from_texture(texture), 16.0, 24.0)
}

fn pet_animations() -> AnimationController {
    AnimationController::new()
        .with(
            "idle",
            SpriteAnimation::new(pet_sheet(2, [240, 200, 90]), vec![0, 1], 400.0),
        )
        .with(
            "walk",
            SpriteAnimation::new(pet_sheet(4, [240, 200, 90]), vec![0, 1, 2, 3], 120.0),
        )
        .with(
            "sleep",
            SpriteAnimation::new(pet_sheet(2, [160, 130, 70]), vec![0, 1], 700.0),
        )
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.camera.bounds = Some((WORLD_W, WORLD_H));

    // invisible ground plane catching click-to-move; z below everything
    let ground = scene.add_object(
        GameObject::new("ground")
            .with_z(-1)
            .with_component(PointerArea::new(WORLD_W, WORLD_H)),
    );

    for (i, x) in [40.0, 110.0, 190.0, 260.0].into_iter().enumerate() {
        scene.add_object(
            GameObject::new(format!("pine-{}", i))
                .with_position(x, 20.0)
                .with_component(SpriteRenderer::from_sprite(tree_sprite())),
        );
    }

    let pet = scene.add_object(
        GameObject::new("pet")
            .with_position(80.0, 80.0)
            .with_origin(8.0, 16.0)
            .with_component(SpriteRenderer::from_animation(pet_animations()))
            .with_component(PointerArea::new(16.0, 16.0))
            .with_component(ClickToMove::new(ground, 45.0))
            .with_component(PetController::new(40.0)),
    );
    scene.set_camera_target(pet);

    scene.add_ui_object(
        GameObject::new("help").with_position(2.0, 134.0).with_component(
            TextLabel::new("arrows move / click ground / hold pet to nap").with_font_size(6.0),
        ),
    );
    scene.add_ui_object(
        GameObject::new("version")
            .with_position(158.0, 2.0)
            .with_component(
                TextLabel::new(format!("tinypix v{}", tinypix::VERSION))
                    .with_font_size(6.0)
                    .with_align(TextAlign::Right),
            ),
    );

    scene
}

fn window_conf() -> Conf {
    Conf {
        window_title: "tinypix pet".to_string(),
        window_width: 640,
        window_height: 576,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = EngineConfig::default();
    let mut engine = Engine::new(&config);
    engine.add_scene("meadow", build_scene());
    engine.set_scene("meadow");
    engine.run().await;
}
