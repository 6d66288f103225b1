//! Pointer hit testing against the live scene.
//!
//! Hover is recomputed from scratch every frame: the bodies move, so a
//! cached hit from the last pointer event would go stale even with a still
//! mouse. Clicks are resolved the moment they are applied.

use glam::Vec2;

use crate::api::types::{BodyId, OrreryEvent};
use crate::renderer::camera::{Camera3D, Ray};
use crate::systems::motion::PickTarget;

/// A ray/sphere hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: BodyId,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// What a click asks of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRequest {
    Focus(BodyId),
    Reset,
}

/// Nearest target the ray hits, if any.
pub fn pick<'a>(ray: &Ray, targets: impl IntoIterator<Item = &'a PickTarget>) -> Option<Hit> {
    targets
        .into_iter()
        .filter_map(|t| {
            ray.intersect_sphere(t.center, t.radius)
                .map(|distance| Hit { id: t.id, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

pub struct PointerInteraction {
    /// Last known pointer position in device pixels.
    pointer: Option<Vec2>,
    /// Pointer moved since the last refresh.
    moved: bool,
    hovered: Option<BodyId>,
    pressed: bool,
    press_at: Vec2,
    last: Vec2,
    dragging: bool,
    /// The press that just ended was a drag; swallow its click.
    suppress_click: bool,
    drag_threshold: f32,
}

impl PointerInteraction {
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            pointer: None,
            moved: false,
            hovered: None,
            pressed: false,
            press_at: Vec2::ZERO,
            last: Vec2::ZERO,
            dragging: false,
            suppress_click: false,
            drag_threshold,
        }
    }

    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record a pointer position. While pressed past the drag threshold,
    /// returns the pixel delta since the previous move.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let pos = Vec2::new(x, y);
        self.pointer = Some(pos);
        self.moved = true;

        if !self.pressed {
            return None;
        }
        if !self.dragging && pos.distance(self.press_at) > self.drag_threshold {
            self.dragging = true;
            self.suppress_click = true;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.dragging.then_some(delta)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        self.pointer = Some(pos);
        self.pressed = true;
        self.press_at = pos;
        self.last = pos;
        self.dragging = false;
        self.suppress_click = false;
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
        self.pressed = false;
        self.dragging = false;
    }

    /// The pointer left the viewport.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.pressed = false;
        self.dragging = false;
    }

    /// Recompute the hovered body for this frame.
    /// Emits when the hovered body changes, when the pointer moves while
    /// hovering, and once when hover clears.
    pub fn refresh(&mut self, camera: &Camera3D, targets: &[PickTarget]) -> Option<OrreryEvent> {
        let moved = std::mem::take(&mut self.moved);
        let Some(pointer) = self.pointer else {
            return self.hovered.take().map(|_| OrreryEvent::HoverChanged {
                body: None,
                x: 0.0,
                y: 0.0,
            });
        };

        let ray = camera.ray_from_screen(pointer);
        let hit = pick(&ray, targets).map(|h| h.id);

        let changed = hit != self.hovered;
        self.hovered = hit;
        if changed || (hit.is_some() && moved) {
            Some(OrreryEvent::HoverChanged { body: hit, x: pointer.x, y: pointer.y })
        } else {
            None
        }
    }

    /// Resolve a click. Only focusable targets are considered. A miss asks
    /// for a reset when the camera is busy.
    pub fn click(
        &mut self,
        x: f32,
        y: f32,
        camera: &Camera3D,
        targets: &[PickTarget],
        camera_free: bool,
    ) -> Option<PointerRequest> {
        if std::mem::take(&mut self.suppress_click) {
            return None;
        }
        let ray = camera.ray_from_screen(Vec2::new(x, y));
        match pick(&ray, targets.iter().filter(|t| t.focusable)) {
            Some(hit) => Some(PointerRequest::Focus(hit.id)),
            None if !camera_free => Some(PointerRequest::Reset),
            None => None,
        }
    }
}
