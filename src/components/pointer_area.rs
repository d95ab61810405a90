//! Pointer hit region component

use crate::component::Component;
use crate::events::GestureKind;
use crate::gameobject::GameObject;
use crate::rect::Rect;

/// Pointer position in world pixels, handed to gesture callbacks.
#[derive(Debug, Clone, Copy)]
pub struct PointerHit {
    pub world_x: f32,
    pub world_y: f32,
}

type GestureHook = Box<dyn FnMut(PointerHit)>;

/// Declares a world-space rectangular hit region and gesture callbacks.
///
/// The hitbox is aligned the same way sprites draw:
/// `(owner.x - origin_x + offset_x, owner.y - origin_y + offset_y)`, and is
/// recomputed from the owner's position on every hit test. Containment is
/// inclusive on all four edges.
///
/// Gestures are resolved by the scene's pointer dispatch; each callback
/// fires with the pointer's world position. The same gestures are also
/// queued as [`PointerEvent`](crate::events::PointerEvent)s.
pub struct PointerArea {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,

    /// Continuous press time before the hold gesture starts, in ms
    pub hold_threshold_ms: f32,
    /// Maximum press-to-release travel (device pixels) for a click
    pub click_max_move_px: f32,
    /// Maximum press-to-release duration for a click, in ms
    pub click_max_duration_ms: f32,

    on_hover_enter: Option<GestureHook>,
    on_hover_leave: Option<GestureHook>,
    on_hover: Option<GestureHook>,
    on_down: Option<GestureHook>,
    on_up: Option<GestureHook>,
    on_click: Option<GestureHook>,
    on_hold_start: Option<GestureHook>,
    on_hold_end: Option<GestureHook>,
}

impl PointerArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
            hold_threshold_ms: 450.0,
            click_max_move_px: 6.0,
            click_max_duration_ms: 300.0,
            on_hover_enter: None,
            on_hover_leave: None,
            on_hover: None,
            on_down: None,
            on_up: None,
            on_click: None,
            on_hold_start: None,
            on_hold_end: None,
        }
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn with_hold_threshold(mut self, ms: f32) -> Self {
        self.hold_threshold_ms = ms;
        self
    }

    pub fn with_click_tolerance(mut self, max_move_px: f32, max_duration_ms: f32) -> Self {
        self.click_max_move_px = max_move_px;
        self.click_max_duration_ms = max_duration_ms;
        self
    }

    pub fn on_hover_enter(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_hover_enter = Some(Box::new(hook));
        self
    }

    pub fn on_hover_leave(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_hover_leave = Some(Box::new(hook));
        self
    }

    pub fn on_hover(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_hover = Some(Box::new(hook));
        self
    }

    pub fn on_down(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_down = Some(Box::new(hook));
        self
    }

    pub fn on_up(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_up = Some(Box::new(hook));
        self
    }

    pub fn on_click(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_click = Some(Box::new(hook));
        self
    }

    pub fn on_hold_start(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_hold_start = Some(Box::new(hook));
        self
    }

    pub fn on_hold_end(mut self, hook: impl FnMut(PointerHit) + 'static) -> Self {
        self.on_hold_end = Some(Box::new(hook));
        self
    }

    /// The hit rectangle in world pixels, recomputed from the owner's
    /// current position.
    pub fn world_rect(&self, owner: &GameObject) -> Rect {
        Rect::new(
            owner.x - owner.origin_x + self.offset_x,
            owner.y - owner.origin_y + self.offset_y,
            self.width,
            self.height,
        )
    }

    /// Does the world-space point hit this area? Always false while the
    /// owner is inactive.
    pub fn hit_test(&self, owner: &GameObject, world_x: f32, world_y: f32) -> bool {
        if !owner.active {
            return false;
        }
        self.world_rect(owner).contains_inclusive(world_x, world_y)
    }

    /// Invoke the callback registered for a gesture, if any.
    pub(crate) fn fire(&mut self, kind: GestureKind, hit: PointerHit) {
        let hook = match kind {
            GestureKind::HoverEnter => &mut self.on_hover_enter,
            GestureKind::HoverLeave => &mut self.on_hover_leave,
            GestureKind::Hover => &mut self.on_hover,
            GestureKind::Down => &mut self.on_down,
            GestureKind::Up => &mut self.on_up,
            GestureKind::Click => &mut self.on_click,
            GestureKind::HoldStart => &mut self.on_hold_start,
            GestureKind::HoldEnd => &mut self.on_hold_end,
        };
        if let Some(hook) = hook {
            hook(hit);
        }
    }
}

impl Component for PointerArea {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_rect_tracks_owner() {
        let mut owner = GameObject::new("pet")
            .with_position(40.0, 30.0)
            .with_origin(8.0, 16.0);
        let area = PointerArea::new(16.0, 16.0).with_offset(1.0, 2.0);

        assert_eq!(area.world_rect(&owner), Rect::new(33.0, 16.0, 16.0, 16.0));

        // no caching: moving the owner moves the rect
        owner.x = 50.0;
        assert_eq!(area.world_rect(&owner), Rect::new(43.0, 16.0, 16.0, 16.0));
    }

    #[test]
    fn test_hit_test_edges_inclusive() {
        let owner = GameObject::new("pet").with_position(10.0, 10.0);
        let area = PointerArea::new(16.0, 16.0);

        assert!(area.hit_test(&owner, 10.0, 10.0));
        assert!(area.hit_test(&owner, 26.0, 26.0));
        assert!(!area.hit_test(&owner, 26.5, 26.0));
    }

    #[test]
    fn test_inactive_owner_never_hits() {
        let mut owner = GameObject::new("pet").with_position(10.0, 10.0);
        let area = PointerArea::new(16.0, 16.0);
        assert!(area.hit_test(&owner, 12.0, 12.0));

        owner.active = false;
        assert!(!area.hit_test(&owner, 12.0, 12.0));
    }
}
