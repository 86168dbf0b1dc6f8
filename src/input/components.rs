use bevy::prelude::*;

/// Lets the keyboard drive a flashlight.
/// Usually placed on the player that carries the flashlight.
#[derive(Component, Debug, Clone, Copy)]
pub struct FlashlightInput {
    /// Entity holding the `PowerSource`
    pub flashlight: Entity,
    /// Entity holding the `FlashlightBlinker`, if the flashlight blinks
    pub blinker: Option<Entity>,
}

impl FlashlightInput {
    pub fn new(flashlight: Entity) -> Self {
        Self {
            flashlight,
            blinker: None,
        }
    }

    pub fn with_blinker(mut self, blinker: Entity) -> Self {
        self.blinker = Some(blinker);
        self
    }
}
