//! Game objects
//!
//! A `GameObject` is a positioned container owning an ordered list of
//! components; update and draw delegate to the components in list order.
//! Objects carry no behavior of their own.

use crate::canvas::Canvas;
use crate::component::{Component, UpdateCtx};

/// Identity of a game object within a scene.
///
/// Assigned when the object is added to a scene; used by the camera follow
/// target and pointer dispatch to refer to objects across frames without
/// holding references into the scene's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) u64);

impl ObjectId {
    /// The id of an object that has not been added to a scene yet.
    pub const NONE: ObjectId = ObjectId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        ObjectId::NONE
    }
}

/// Which way a sprite-carrying object is facing.
/// Drawing components mirror their frames when facing left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// A positioned container of components.
///
/// `(x, y)` is the object's anchor point in world pixels; the visual
/// top-left sits at `(x - origin_x, y - origin_y)`. `z` orders both drawing
/// (higher draws on top) and pointer hit-testing (higher wins).
pub struct GameObject {
    /// Diagnostic label; not unique
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub z: i32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub facing: Facing,
    /// Inactive objects skip update, draw, and hit-testing entirely
    pub active: bool,

    id: ObjectId,
    components: Vec<Box<dyn Component>>,
}

/// Placeholder swapped into an updating component's slot so the component
/// can receive `&mut` to its owner while siblings stay reachable.
struct Detached;

impl Component for Detached {}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            z: 0,
            origin_x: 0.0,
            origin_y: 0.0,
            facing: Facing::default(),
            active: true,
            id: ObjectId::NONE,
            components: Vec::new(),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Anchor offset in sprite pixels: the visual top-left is
    /// `(x - origin_x, y - origin_y)`.
    pub fn with_origin(mut self, origin_x: f32, origin_y: f32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Builder-style component attach.
    pub fn with_component<C: Component + 'static>(mut self, component: C) -> Self {
        self.add_component(component);
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ObjectId) {
        self.id = id;
    }

    /// Attach a component: runs its `start` hook exactly once (with this
    /// object as owner, before the component joins the list), then appends
    /// it to the ordered component list.
    pub fn add_component<C: Component + 'static>(&mut self, mut component: C) {
        component.start(self);
        self.components.push(Box::new(component));
    }

    /// First component of the given concrete type, if any. O(n) scan over
    /// the live list; component counts per object are expected to be small.
    pub fn get_component<C: Component + 'static>(&self) -> Option<&C> {
        self.components
            .iter()
            .find_map(|c| c.as_any().downcast_ref::<C>())
    }

    /// Mutable variant of [`get_component`](Self::get_component).
    pub fn get_component_mut<C: Component + 'static>(&mut self) -> Option<&mut C> {
        self.components
            .iter_mut()
            .find_map(|c| c.as_any_mut().downcast_mut::<C>())
    }

    /// All components of the given concrete type, with their list indices.
    pub fn components_of<C: Component + 'static>(&self) -> impl Iterator<Item = (usize, &C)> {
        self.components
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_any().downcast_ref::<C>().map(|c| (i, c)))
    }

    /// The component at a list index, downcast to a concrete type.
    pub(crate) fn component_at_mut<C: Component + 'static>(&mut self, index: usize) -> Option<&mut C> {
        self.components
            .get_mut(index)
            .and_then(|c| c.as_any_mut().downcast_mut::<C>())
    }

    /// Remove the first component of the given type. Immediate splice; the
    /// remaining components keep their relative order.
    pub fn remove_component<C: Component + 'static>(&mut self) -> bool {
        match self
            .components
            .iter()
            .position(|c| c.as_any().downcast_ref::<C>().is_some())
        {
            Some(index) => {
                self.components.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Run the update hook of every component, in list order.
    /// Does nothing at all while the object is inactive.
    ///
    /// Each component is briefly swapped out of its slot so it can take
    /// `&mut` to the owner; components appended during the pass (via
    /// `add_component` from inside a hook) are updated in the same pass.
    pub fn update(&mut self, dt: f32, ctx: &UpdateCtx) {
        if !self.active {
            return;
        }

        let mut i = 0;
        while i < self.components.len() {
            let mut component = std::mem::replace(&mut self.components[i], Box::new(Detached));
            component.update(dt, self, ctx);
            self.components[i] = component;
            i += 1;
        }
    }

    /// Run the draw hook of every component, in list order.
    /// Does nothing at all while the object is inactive.
    pub fn draw(&self, canvas: &mut dyn Canvas, scale: f32) {
        if !self.active {
            return;
        }

        for component in &self.components {
            component.draw(canvas, scale, self);
        }
    }
}
