use bytemuck::{Pod, Zeroable};

/// Unique identifier for an object in the scene.
/// Stars, bodies, satellites and debris share one id space; a scene node
/// carries the same id as the motion state that drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// What kind of object a scene node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    /// The central body. Spins in place, never orbits.
    Star,
    /// A primary orbiting body.
    #[default]
    Planet,
    /// Orbits a parent body instead of the center.
    Satellite,
    /// Belt fragments. Never hit-tested.
    Debris,
}

impl BodyKind {
    /// Numeric code written into render instances.
    pub fn wire_code(self) -> f32 {
        match self {
            BodyKind::Star => 0.0,
            BodyKind::Planet => 1.0,
            BodyKind::Satellite => 2.0,
            BodyKind::Debris => 3.0,
        }
    }
}

/// Notification from the core to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrreryEvent {
    /// The body under the pointer changed, or the pointer moved over it.
    /// `x`/`y` are device pixels for tooltip placement.
    HoverChanged { body: Option<BodyId>, x: f32, y: f32 },
    /// Motion was paused or resumed.
    PauseChanged(bool),
    /// The camera started focusing a body, or let go of it.
    FocusChanged(Option<BodyId>),
    /// A body exists in the motion model but has no scene node.
    MissingSceneNode(BodyId),
}

// ── Wire event kinds ─────────────────────────────────────────────────

pub const EVENT_HOVER: f32 = 1.0;
pub const EVENT_PAUSE: f32 = 2.0;
pub const EVENT_FOCUS: f32 = 3.0;
pub const EVENT_MISSING_NODE: f32 = 4.0;

/// Payload value meaning "no body".
pub const NO_BODY: f32 = -1.0;

/// An event in its flat wire form.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;
}

fn body_code(body: Option<BodyId>) -> f32 {
    body.map(|id| id.0 as f32).unwrap_or(NO_BODY)
}

impl From<OrreryEvent> for WireEvent {
    fn from(event: OrreryEvent) -> Self {
        match event {
            OrreryEvent::HoverChanged { body, x, y } => WireEvent {
                kind: EVENT_HOVER,
                a: body_code(body),
                b: x,
                c: y,
            },
            OrreryEvent::PauseChanged(paused) => WireEvent {
                kind: EVENT_PAUSE,
                a: if paused { 1.0 } else { 0.0 },
                ..WireEvent::default()
            },
            OrreryEvent::FocusChanged(body) => WireEvent {
                kind: EVENT_FOCUS,
                a: body_code(body),
                ..WireEvent::default()
            },
            OrreryEvent::MissingSceneNode(id) => WireEvent {
                kind: EVENT_MISSING_NODE,
                a: id.0 as f32,
                ..WireEvent::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_cleared_uses_sentinel() {
        let wire = WireEvent::from(OrreryEvent::HoverChanged { body: None, x: 10.0, y: 20.0 });
        assert_eq!(wire.kind, EVENT_HOVER);
        assert_eq!(wire.a, NO_BODY);
        assert_eq!(wire.b, 10.0);
        assert_eq!(wire.c, 20.0);
    }

    #[test]
    fn pause_and_focus_payloads() {
        let paused = WireEvent::from(OrreryEvent::PauseChanged(true));
        assert_eq!((paused.kind, paused.a), (EVENT_PAUSE, 1.0));

        let focus = WireEvent::from(OrreryEvent::FocusChanged(Some(BodyId(3))));
        assert_eq!((focus.kind, focus.a), (EVENT_FOCUS, 3.0));
    }

    #[test]
    fn wire_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<WireEvent>(), WireEvent::FLOATS * 4);
    }
}
