use bevy::prelude::*;

use crate::blink::config::BlinkConfig;
use crate::blink::controller::BlinkController;

/// Blinks a lamp while its power source is on.
///
/// The power source and the lamp are injected as entities when the blinker is
/// built. They are checked once when the blinker starts; a missing one faults
/// the blinker for good.
#[derive(Component, Debug, Clone)]
pub struct FlashlightBlinker {
    /// Entity holding the `PowerSource`
    pub power: Entity,
    /// Entity holding the `SpotLight` and its `Visibility`
    pub lamp: Entity,
    controller: BlinkController,
}

impl FlashlightBlinker {
    pub fn new(config: BlinkConfig, power: Entity, lamp: Entity) -> Self {
        Self::with_controller(BlinkController::new(config), power, lamp)
    }

    pub fn with_controller(controller: BlinkController, power: Entity, lamp: Entity) -> Self {
        Self {
            power,
            lamp,
            controller,
        }
    }

    pub fn controller(&self) -> &BlinkController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BlinkController {
        &mut self.controller
    }

    pub fn is_blinking_active(&self) -> bool {
        self.controller.is_blinking_active()
    }
}
