use crate::api::types::BodyId;

/// A request from the UI layer.
/// Queued between frames and applied at the start of the next tick, so
/// no UI callback ever touches motion or camera state directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetPaused(bool),
    TogglePause,
    /// Clamped into the configured multiplier range when applied.
    SetSpeedMultiplier { body: BodyId, value: f64 },
    RequestFocus(BodyId),
    RequestReset,
    /// Pointer moved to device pixels (x, y), origin top-left.
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerClick { x: f32, y: f32 },
    PointerLeave,
    /// Wheel step. Positive moves the camera away.
    Zoom { direction: f32 },
    /// New viewport size in device pixels.
    Resize { width: f32, height: f32 },
}

/// A queue of UI commands.
/// The host pushes commands; the frame loop drains them once per tick.
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Drain all pending commands. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut queue = CommandQueue::new();
        queue.push(Command::TogglePause);
        queue.push(Command::SetSpeedMultiplier { body: BodyId(3), value: 2.0 });
        queue.push(Command::RequestReset);
        assert_eq!(queue.len(), 3);

        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![
                Command::TogglePause,
                Command::SetSpeedMultiplier { body: BodyId(3), value: 2.0 },
                Command::RequestReset,
            ]
        );
        assert!(queue.is_empty());
    }
}
