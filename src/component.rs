//! Component trait
//!
//! Components are polymorphic behavior units attached to exactly one
//! `GameObject`. Every lifecycle hook has a no-op default, so a component
//! implements only what it needs; dispatch is a plain vtable call with no
//! runtime existence checks.

use std::any::Any;

use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::events::{EventQueue, PointerEvent};
use crate::gameobject::GameObject;
use crate::input::InputState;

/// Read-only frame context handed to component updates.
pub struct UpdateCtx<'a> {
    /// Keyboard and raw pointer state for this frame
    pub input: &'a InputState,
    /// Pointer gestures dispatched at the end of the previous frame
    pub events: &'a EventQueue<PointerEvent>,
    /// Snapshot of the scene camera after the follow pass
    pub camera: Camera,
    /// Virtual viewport size, known once the scene has been entered
    pub viewport: Option<(f32, f32)>,
}

/// Downcast support for component lookup by concrete type.
/// Blanket-implemented; component authors never touch this.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A behavior unit owned by a single `GameObject` for its whole lifetime.
///
/// The owner is passed into each hook rather than stored as a back-reference;
/// it is the same object the component was attached to, every time.
pub trait Component: AsAny {
    /// Called exactly once, when the component is attached - before it has
    /// joined the owner's component list and before any update or draw.
    fn start(&mut self, _owner: &mut GameObject) {}

    /// Called every frame while the owner is active. `dt` is in milliseconds.
    ///
    /// The component itself is detached from the owner's list for the
    /// duration of the call, so sibling lookups work but self-lookup does
    /// not, and siblings must not be removed from here.
    fn update(&mut self, _dt: f32, _owner: &mut GameObject, _ctx: &UpdateCtx) {}

    /// Called every frame while the owner is active, after all updates.
    fn draw(&self, _canvas: &mut dyn Canvas, _scale: f32, _owner: &GameObject) {}
}
