use bevy::prelude::*;

use crate::blink::controller::BlinkEvent;

/// Command for a blinker, see [`BlinkRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkCommand {
    /// Turn the blinking behavior on or off
    SetBehavior(bool),
    /// Start a burst now
    TriggerBurst,
    /// Host lifecycle: resume the blinker
    Enable,
    /// Host lifecycle: stop the blinker, ending any open burst
    Disable,
}

/// Request addressed to the entity holding a `FlashlightBlinker`
#[derive(Message, Debug, Clone, Copy)]
pub struct BlinkRequest {
    pub blinker: Entity,
    pub command: BlinkCommand,
}

impl BlinkRequest {
    pub fn new(blinker: Entity, command: BlinkCommand) -> Self {
        Self { blinker, command }
    }
}

/// Notification published by a blinker.
///
/// Every blinker notification travels on this one stream so listeners see
/// them in the order they happened, even when a long frame both ends a burst
/// and starts the next one.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkNotification {
    pub blinker: Entity,
    pub event: BlinkEvent,
}
