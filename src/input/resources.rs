use bevy::prelude::*;

/// Key bindings for flashlight control
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashlightKeys {
    /// Toggles power
    pub switch: KeyCode,
    /// Turns the blinking behavior on or off
    pub toggle_blinking: KeyCode,
    /// Starts a blinking burst right away
    pub trigger_burst: KeyCode,
}

impl Default for FlashlightKeys {
    fn default() -> Self {
        Self {
            switch: KeyCode::KeyF,
            toggle_blinking: KeyCode::KeyB,
            trigger_burst: KeyCode::KeyT,
        }
    }
}
