//! Scenes
//!
//! A scene owns the world's game objects plus a screen-anchored UI layer,
//! drives the camera, dispatches pointer gestures against `PointerArea`
//! components, and composes the per-frame draw with the camera transform
//! applied to world objects only.
//!
//! Frame order (driven by the engine): `update` runs the camera follow and
//! every object's components, then `handle_pointer` resolves gestures from
//! the raw device snapshot, then `draw` renders world objects in z order
//! followed by the UI layer.

use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::component::UpdateCtx;
use crate::components::{PointerArea, PointerHit};
use crate::events::{EventQueue, GestureKind, PointerEvent};
use crate::gameobject::{GameObject, ObjectId};
use crate::input::{InputState, PointerSnapshot};

/// A (object, pointer-area) pair identified across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitTarget {
    object: ObjectId,
    /// Index of the area in the object's component list
    component: usize,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    target: HitTarget,
    holding: bool,
}

type SceneHook = Box<dyn FnMut(&mut Scene)>;

/// A world of game objects with a camera and a UI layer.
pub struct Scene {
    objects: Vec<GameObject>,
    ui_objects: Vec<GameObject>,
    pub camera: Camera,

    viewport: Option<(f32, f32)>,
    hovered: Option<HitTarget>,
    pressed: Option<Press>,
    pointer_events: EventQueue<PointerEvent>,
    next_id: u64,

    enter_hook: Option<SceneHook>,
    exit_hook: Option<SceneHook>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            ui_objects: Vec::new(),
            camera: Camera::default(),
            viewport: None,
            hovered: None,
            pressed: None,
            pointer_events: EventQueue::new(),
            next_id: 0,
            enter_hook: None,
            exit_hook: None,
        }
    }

    fn alloc_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }

    /// Add a world object; it is updated, drawn under the camera transform,
    /// and eligible for pointer hit-testing.
    pub fn add_object(&mut self, mut object: GameObject) -> ObjectId {
        let id = self.alloc_id();
        object.set_id(id);
        self.objects.push(object);
        id
    }

    /// Add a screen-anchored object: drawn after the world without the
    /// camera transform, and never hit-tested.
    pub fn add_ui_object(&mut self, mut object: GameObject) -> ObjectId {
        let id = self.alloc_id();
        object.set_id(id);
        self.ui_objects.push(object);
        id
    }

    /// Remove an object (world or UI) immediately.
    /// Any hover/press tracking on it is dropped.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len() + self.ui_objects.len();
        self.objects.retain(|o| o.id() != id);
        self.ui_objects.retain(|o| o.id() != id);

        if self.hovered.map_or(false, |h| h.object == id) {
            self.hovered = None;
        }
        if self.pressed.map_or(false, |p| p.target.object == id) {
            self.pressed = None;
        }

        before != self.objects.len() + self.ui_objects.len()
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects
            .iter()
            .chain(self.ui_objects.iter())
            .find(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects
            .iter_mut()
            .chain(self.ui_objects.iter_mut())
            .find(|o| o.id() == id)
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn ui_objects(&self) -> &[GameObject] {
        &self.ui_objects
    }

    /// Keep this object centered in the viewport.
    pub fn set_camera_target(&mut self, id: ObjectId) {
        self.camera.target = Some(id);
    }

    /// Pointer gestures dispatched most recently; readable by components on
    /// the following update.
    pub fn pointer_events(&self) -> &EventQueue<PointerEvent> {
        &self.pointer_events
    }

    /// Run when the scene becomes active.
    pub fn set_enter_hook(&mut self, hook: impl FnMut(&mut Scene) + 'static) {
        self.enter_hook = Some(Box::new(hook));
    }

    /// Run when the scene stops being active.
    pub fn set_exit_hook(&mut self, hook: impl FnMut(&mut Scene) + 'static) {
        self.exit_hook = Some(Box::new(hook));
    }

    /// Called by the engine when this scene becomes active.
    pub fn on_enter(&mut self, viewport: (f32, f32)) {
        self.viewport = Some(viewport);
        if let Some(mut hook) = self.enter_hook.take() {
            hook(self);
            self.enter_hook = Some(hook);
        }
    }

    /// Called by the engine when this scene is no longer active.
    pub fn on_exit(&mut self) {
        if let Some(mut hook) = self.exit_hook.take() {
            hook(self);
            self.exit_hook = Some(hook);
        }
    }

    pub fn viewport(&self) -> Option<(f32, f32)> {
        self.viewport
    }

    /// Per-frame update: camera follow first, then every world object in
    /// list order, then every UI object in list order.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if let (Some(viewport), Some(target_id)) = (self.viewport, self.camera.target) {
            if let Some(target) = self.objects.iter().find(|o| o.id() == target_id) {
                let position = (target.x, target.y);
                self.camera.follow(position, viewport, dt);
            }
        }

        let ctx = UpdateCtx {
            input,
            events: &self.pointer_events,
            camera: self.camera,
            viewport: self.viewport,
        };
        for object in &mut self.objects {
            object.update(dt, &ctx);
        }
        for object in &mut self.ui_objects {
            object.update(dt, &ctx);
        }
    }

    /// Resolve pointer gestures for this frame from the raw device snapshot.
    ///
    /// Dispatch order: hit-test, hover transitions, press capture, hold
    /// detection, release (up / hold-end / click). Every fired gesture is
    /// also queued on [`pointer_events`](Self::pointer_events).
    pub fn handle_pointer(&mut self, pointer: &PointerSnapshot, device_scale: f32) {
        self.pointer_events.clear();

        let zoom = self.camera.zoom;
        let world_x = pointer.x / (device_scale * zoom) + self.camera.x;
        let world_y = pointer.y / (device_scale * zoom) + self.camera.y;
        let hit = PointerHit { world_x, world_y };

        let best = self.pick(world_x, world_y);

        // Hover transitions, by pair identity
        if best != self.hovered {
            if let Some(previous) = self.hovered {
                self.fire(previous, GestureKind::HoverLeave, hit);
            }
            if let Some(next) = best {
                self.fire(next, GestureKind::HoverEnter, hit);
            }
            self.hovered = best;
        }
        if let Some(current) = self.hovered {
            self.fire(current, GestureKind::Hover, hit);
        }

        // Press capture
        if pointer.just_down {
            self.pressed = self.hovered.map(|target| Press {
                target,
                holding: false,
            });
            if let Some(press) = self.pressed {
                self.fire(press.target, GestureKind::Down, hit);
            }
        }

        // Hold detection
        if pointer.is_down {
            let candidate = match self.pressed {
                Some(press) if !press.holding => Some(press.target),
                _ => None,
            };
            if let Some(target) = candidate {
                if let Some(threshold) = self.area_hold_threshold(target) {
                    if pointer.now - pointer.down_time >= f64::from(threshold) {
                        if let Some(press) = &mut self.pressed {
                            press.holding = true;
                        }
                        self.fire(target, GestureKind::HoldStart, hit);
                    }
                }
            }
        }

        // Release: up, hold end, then click evaluation
        if pointer.just_up {
            if let Some(press) = self.pressed.take() {
                self.fire(press.target, GestureKind::Up, hit);
                if press.holding {
                    self.fire(press.target, GestureKind::HoldEnd, hit);
                }
                if Some(press.target) == self.hovered {
                    if let Some((max_move, max_duration)) = self.area_click_tolerance(press.target)
                    {
                        let dx = pointer.x - pointer.down_x;
                        let dy = pointer.y - pointer.down_y;
                        let moved = (dx * dx + dy * dy).sqrt();
                        let duration = pointer.up_time - pointer.down_time;
                        if moved <= max_move && duration <= f64::from(max_duration) {
                            self.fire(press.target, GestureKind::Click, hit);
                        }
                    }
                }
            }
        }
    }

    /// Best hit among active world objects' pointer areas: highest `z` wins,
    /// ties broken by the larger owner `y` (visually in front).
    fn pick(&self, world_x: f32, world_y: f32) -> Option<HitTarget> {
        let mut best: Option<(HitTarget, i32, f32)> = None;
        for object in &self.objects {
            if !object.active {
                continue;
            }
            for (index, area) in object.components_of::<PointerArea>() {
                if !area.hit_test(object, world_x, world_y) {
                    continue;
                }
                let wins = match best {
                    None => true,
                    Some((_, z, y)) => object.z > z || (object.z == z && object.y > y),
                };
                if wins {
                    let target = HitTarget {
                        object: object.id(),
                        component: index,
                    };
                    best = Some((target, object.z, object.y));
                }
            }
        }
        best.map(|(target, _, _)| target)
    }

    /// Queue the gesture and invoke the area's callback, if the pair still
    /// exists.
    fn fire(&mut self, target: HitTarget, kind: GestureKind, hit: PointerHit) {
        self.pointer_events.send(PointerEvent {
            object: target.object,
            kind,
            world_x: hit.world_x,
            world_y: hit.world_y,
        });

        if let Some(object) = self.objects.iter_mut().find(|o| o.id() == target.object) {
            if let Some(area) = object.component_at_mut::<PointerArea>(target.component) {
                area.fire(kind, hit);
            }
        }
    }

    fn area_hold_threshold(&self, target: HitTarget) -> Option<f32> {
        self.area(target).map(|a| a.hold_threshold_ms)
    }

    fn area_click_tolerance(&self, target: HitTarget) -> Option<(f32, f32)> {
        self.area(target)
            .map(|a| (a.click_max_move_px, a.click_max_duration_ms))
    }

    fn area(&self, target: HitTarget) -> Option<&PointerArea> {
        self.objects
            .iter()
            .find(|o| o.id() == target.object)
            .and_then(|o| {
                o.components_of::<PointerArea>()
                    .find(|(i, _)| *i == target.component)
                    .map(|(_, a)| a)
            })
    }

    /// Draw world objects in ascending `z` (stable: equal keys keep
    /// insertion order) under the camera translation, then the UI layer
    /// untranslated at the same combined scale.
    pub fn draw(&self, canvas: &mut dyn Canvas, device_scale: f32) {
        let scale = device_scale * self.camera.zoom;

        let mut order: Vec<usize> = (0..self.objects.len()).collect();
        order.sort_by_key(|&i| self.objects[i].z);

        canvas.push_translation(-self.camera.x * scale, -self.camera.y * scale);
        for &i in &order {
            self.objects[i].draw(canvas, scale);
        }
        canvas.pop_translation();

        for object in &self.ui_objects {
            object.draw(canvas, scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, RecordingCanvas};
    use crate::components::TextLabel;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        enter: Cell<u32>,
        leave: Cell<u32>,
        hover: Cell<u32>,
        down: Cell<u32>,
        up: Cell<u32>,
        click: Cell<u32>,
        hold_start: Cell<u32>,
        hold_end: Cell<u32>,
    }

    fn tracked_area(counters: &Rc<Counters>, width: f32, height: f32) -> PointerArea {
        let area = PointerArea::new(width, height);
        let c = counters.clone();
        let area = area.on_hover_enter(move |_| c.enter.set(c.enter.get() + 1));
        let c = counters.clone();
        let area = area.on_hover_leave(move |_| c.leave.set(c.leave.get() + 1));
        let c = counters.clone();
        let area = area.on_hover(move |_| c.hover.set(c.hover.get() + 1));
        let c = counters.clone();
        let area = area.on_down(move |_| c.down.set(c.down.get() + 1));
        let c = counters.clone();
        let area = area.on_up(move |_| c.up.set(c.up.get() + 1));
        let c = counters.clone();
        let area = area.on_click(move |_| c.click.set(c.click.get() + 1));
        let c = counters.clone();
        let area = area.on_hold_start(move |_| c.hold_start.set(c.hold_start.get() + 1));
        let c = counters.clone();
        area.on_hold_end(move |_| c.hold_end.set(c.hold_end.get() + 1))
    }

    fn idle(x: f32, y: f32, now: f64) -> PointerSnapshot {
        PointerSnapshot {
            x,
            y,
            now,
            ..Default::default()
        }
    }

    fn press(x: f32, y: f32, now: f64) -> PointerSnapshot {
        PointerSnapshot {
            x,
            y,
            is_down: true,
            just_down: true,
            down_x: x,
            down_y: y,
            down_time: now,
            now,
            ..Default::default()
        }
    }

    fn held(x: f32, y: f32, down: &PointerSnapshot, now: f64) -> PointerSnapshot {
        PointerSnapshot {
            x,
            y,
            is_down: true,
            down_x: down.down_x,
            down_y: down.down_y,
            down_time: down.down_time,
            now,
            ..Default::default()
        }
    }

    fn release(x: f32, y: f32, down: &PointerSnapshot, now: f64) -> PointerSnapshot {
        PointerSnapshot {
            x,
            y,
            just_up: true,
            down_x: down.down_x,
            down_y: down.down_y,
            down_time: down.down_time,
            up_time: now,
            now,
            ..Default::default()
        }
    }

    /// One object at (10, 10) with a tracked 16x16 area.
    fn scene_with_area() -> (Scene, Rc<Counters>, ObjectId) {
        let counters = Rc::new(Counters::default());
        let mut scene = Scene::new();
        let id = scene.add_object(
            GameObject::new("button")
                .with_position(10.0, 10.0)
                .with_component(tracked_area(&counters, 16.0, 16.0)),
        );
        (scene, counters, id)
    }

    #[test]
    fn test_hover_enter_hover_leave() {
        let (mut scene, counters, _) = scene_with_area();

        scene.handle_pointer(&idle(12.0, 12.0, 0.0), 1.0);
        assert_eq!(counters.enter.get(), 1);
        assert_eq!(counters.hover.get(), 1);

        // still inside: no second enter, hover keeps firing
        scene.handle_pointer(&idle(14.0, 14.0, 16.0), 1.0);
        assert_eq!(counters.enter.get(), 1);
        assert_eq!(counters.hover.get(), 2);

        scene.handle_pointer(&idle(50.0, 50.0, 32.0), 1.0);
        assert_eq!(counters.leave.get(), 1);
        assert_eq!(counters.hover.get(), 2);
    }

    #[test]
    fn test_hit_tiebreak_prefers_larger_y() {
        let back = Rc::new(Counters::default());
        let front = Rc::new(Counters::default());
        let mut scene = Scene::new();
        scene.add_object(
            GameObject::new("back")
                .with_position(0.0, 5.0)
                .with_component(tracked_area(&back, 32.0, 32.0)),
        );
        scene.add_object(
            GameObject::new("front")
                .with_position(0.0, 8.0)
                .with_component(tracked_area(&front, 32.0, 32.0)),
        );

        // equal z: the object with the larger y wins
        scene.handle_pointer(&idle(16.0, 20.0, 0.0), 1.0);
        assert_eq!(back.enter.get(), 0);
        assert_eq!(front.enter.get(), 1);
    }

    #[test]
    fn test_hit_tiebreak_z_beats_y() {
        let low = Rc::new(Counters::default());
        let raised = Rc::new(Counters::default());
        let mut scene = Scene::new();
        scene.add_object(
            GameObject::new("raised")
                .with_position(0.0, 5.0)
                .with_z(1)
                .with_component(tracked_area(&raised, 32.0, 32.0)),
        );
        scene.add_object(
            GameObject::new("low-but-forward")
                .with_position(0.0, 8.0)
                .with_component(tracked_area(&low, 32.0, 32.0)),
        );

        scene.handle_pointer(&idle(16.0, 20.0, 0.0), 1.0);
        assert_eq!(raised.enter.get(), 1);
        assert_eq!(low.enter.get(), 0);
    }

    #[test]
    fn test_click_within_tolerances() {
        let (mut scene, counters, _) = scene_with_area();

        let down = press(10.0, 10.0, 0.0);
        scene.handle_pointer(&down, 1.0);
        assert_eq!(counters.down.get(), 1);

        scene.handle_pointer(&release(12.0, 11.0, &down, 200.0), 1.0);
        assert_eq!(counters.up.get(), 1);
        assert_eq!(counters.click.get(), 1);

        // pressed state cleared: a stray release does nothing
        scene.handle_pointer(&release(12.0, 11.0, &down, 220.0), 1.0);
        assert_eq!(counters.up.get(), 1);
        assert_eq!(counters.click.get(), 1);
    }

    #[test]
    fn test_click_rejected_when_moved_too_far() {
        let (mut scene, counters, _) = scene_with_area();

        let down = press(10.0, 10.0, 0.0);
        scene.handle_pointer(&down, 1.0);
        scene.handle_pointer(&release(30.0, 10.0, &down, 200.0), 1.0);

        assert_eq!(counters.up.get(), 1);
        assert_eq!(counters.click.get(), 0);
    }

    #[test]
    fn test_click_rejected_when_too_slow() {
        let (mut scene, counters, _) = scene_with_area();

        let down = press(12.0, 12.0, 0.0);
        scene.handle_pointer(&down, 1.0);
        scene.handle_pointer(&release(12.0, 12.0, &down, 400.0), 1.0);

        assert_eq!(counters.up.get(), 1);
        assert_eq!(counters.click.get(), 0);
    }

    #[test]
    fn test_hold_start_fires_once_then_hold_end() {
        let (mut scene, counters, _) = scene_with_area();

        let down = press(12.0, 12.0, 0.0);
        scene.handle_pointer(&down, 1.0);
        assert_eq!(counters.hold_start.get(), 0);

        scene.handle_pointer(&held(12.0, 12.0, &down, 400.0), 1.0);
        assert_eq!(counters.hold_start.get(), 0);

        scene.handle_pointer(&held(12.0, 12.0, &down, 460.0), 1.0);
        assert_eq!(counters.hold_start.get(), 1);

        // already holding: no repeat
        scene.handle_pointer(&held(12.0, 12.0, &down, 520.0), 1.0);
        assert_eq!(counters.hold_start.get(), 1);

        scene.handle_pointer(&release(12.0, 12.0, &down, 600.0), 1.0);
        assert_eq!(counters.up.get(), 1);
        assert_eq!(counters.hold_end.get(), 1);
        // 600ms press exceeds the 300ms click window
        assert_eq!(counters.click.get(), 0);
    }

    #[test]
    fn test_press_on_empty_space_captures_nothing() {
        let (mut scene, counters, _) = scene_with_area();

        let down = press(100.0, 100.0, 0.0);
        scene.handle_pointer(&down, 1.0);
        scene.handle_pointer(&release(100.0, 100.0, &down, 50.0), 1.0);

        assert_eq!(counters.down.get(), 0);
        assert_eq!(counters.up.get(), 0);
        assert_eq!(counters.click.get(), 0);
    }

    #[test]
    fn test_gestures_are_queued_as_events() {
        let (mut scene, _, id) = scene_with_area();

        let down = press(12.0, 12.0, 0.0);
        scene.handle_pointer(&down, 1.0);
        scene.handle_pointer(&release(12.0, 12.0, &down, 100.0), 1.0);

        let kinds: Vec<GestureKind> = scene.pointer_events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![GestureKind::Hover, GestureKind::Up, GestureKind::Click]
        );
        assert!(scene.pointer_events().iter().all(|e| e.object == id));
    }

    #[test]
    fn test_pointer_world_conversion_with_zoom_and_camera() {
        let counters = Rc::new(Counters::default());
        let mut scene = Scene::new();
        scene.camera.x = 20.0;
        scene.camera.y = -12.0;
        scene.camera.zoom = 2.0;
        scene.add_object(
            GameObject::new("spot")
                .with_position(30.0, 0.0)
                .with_component(tracked_area(&counters, 8.0, 8.0)),
        );

        // device = (world - camera) * device_scale * zoom
        let device_x = (32.0 - 20.0) * 2.0 * 2.0;
        let device_y = (2.0 - -12.0) * 2.0 * 2.0;
        scene.handle_pointer(&idle(device_x, device_y, 0.0), 2.0);
        assert_eq!(counters.enter.get(), 1);
    }

    #[test]
    fn test_ui_objects_are_not_hit_tested() {
        let counters = Rc::new(Counters::default());
        let mut scene = Scene::new();
        scene.add_ui_object(
            GameObject::new("hud")
                .with_position(10.0, 10.0)
                .with_component(tracked_area(&counters, 16.0, 16.0)),
        );

        scene.handle_pointer(&idle(12.0, 12.0, 0.0), 1.0);
        assert_eq!(counters.enter.get(), 0);
    }

    #[test]
    fn test_inactive_objects_are_not_hit_tested() {
        let (mut scene, counters, id) = scene_with_area();
        scene.object_mut(id).unwrap().active = false;

        scene.handle_pointer(&idle(12.0, 12.0, 0.0), 1.0);
        assert_eq!(counters.enter.get(), 0);
    }

    fn label_object(name: &str, z: i32) -> GameObject {
        GameObject::new(name)
            .with_position(0.0, 0.0)
            .with_z(z)
            .with_component(TextLabel::new(name))
    }

    fn text_order(canvas: &RecordingCanvas) -> Vec<String> {
        canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_draw_order_sorts_by_z_stably() {
        let mut scene = Scene::new();
        scene.add_object(label_object("a", 0));
        scene.add_object(label_object("b", 1));
        scene.add_object(label_object("c", 0));
        scene.add_ui_object(label_object("hud", 0));

        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas, 1.0);

        // equal-z objects keep insertion order; higher z draws later;
        // the UI layer draws last
        assert_eq!(text_order(&canvas), vec!["a", "c", "b", "hud"]);
    }

    #[test]
    fn test_camera_translates_world_but_not_ui() {
        let mut scene = Scene::new();
        scene.camera.x = 5.0;
        scene.camera.y = 3.0;
        scene.add_object(label_object("world", 0));
        scene.add_ui_object(label_object("hud", 0));

        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas, 2.0);

        let calls: Vec<(String, f32, f32)> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect();

        assert_eq!(calls[0], ("world".to_string(), -10.0, -6.0));
        assert_eq!(calls[1], ("hud".to_string(), 0.0, 0.0));
    }

    #[test]
    fn test_update_centers_camera_on_target() {
        let mut scene = Scene::new();
        let id = scene.add_object(GameObject::new("hero").with_position(100.0, 60.0));
        scene.set_camera_target(id);
        scene.on_enter((160.0, 144.0));

        scene.update(16.0, &InputState::default());
        assert_eq!((scene.camera.x, scene.camera.y), (20.0, -12.0));
    }

    #[test]
    fn test_remove_object_is_immediate() {
        let (mut scene, counters, id) = scene_with_area();
        scene.handle_pointer(&idle(12.0, 12.0, 0.0), 1.0);
        assert_eq!(counters.enter.get(), 1);

        assert!(scene.remove_object(id));
        assert!(scene.object(id).is_none());
        assert!(!scene.remove_object(id));

        // hover tracking was dropped with the object: no leave callback
        // fires, and nothing is hit anymore
        scene.handle_pointer(&idle(12.0, 12.0, 16.0), 1.0);
        assert_eq!(counters.leave.get(), 0);
    }

    #[test]
    fn test_enter_exit_hooks_fire() {
        let entered = Rc::new(Cell::new(0));
        let exited = Rc::new(Cell::new(0));
        let mut scene = Scene::new();
        let e = entered.clone();
        scene.set_enter_hook(move |_| e.set(e.get() + 1));
        let x = exited.clone();
        scene.set_exit_hook(move |_| x.set(x.get() + 1));

        scene.on_enter((160.0, 144.0));
        assert_eq!(entered.get(), 1);
        assert_eq!(scene.viewport(), Some((160.0, 144.0)));

        scene.on_exit();
        assert_eq!(exited.get(), 1);
    }
}
