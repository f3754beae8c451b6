/// Logical actions the simulation understands.
/// Device mapping (keys, pads, touch) belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Fire,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Fire];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Edge event for hosts that receive input as a stream rather than polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

/// Snapshot of which actions are held this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    held: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: a snapshot with `action` held.
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    pub fn set(&mut self, action: Action, active: bool) {
        if active {
            self.held |= action.bit();
        } else {
            self.held &= !action.bit();
        }
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }

    /// Fold a batch of edge events into the snapshot, in order.
    pub fn apply(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            match event {
                InputEvent::Pressed(action) => self.set(action, true),
                InputEvent::Released(action) => self.set(action, false),
            }
        }
    }

    /// Horizontal intent from the two opposed move actions: -1, 0 or 1.
    pub fn move_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.is_active(Action::MoveLeft) {
            axis -= 1.0;
        }
        if self.is_active(Action::MoveRight) {
            axis += 1.0;
        }
        axis
    }
}
