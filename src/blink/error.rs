use bevy::prelude::Entity;
use thiserror::Error;

/// Why a blink command was rejected. The controller is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlinkError {
    #[error("blinking behavior is inactive")]
    BlinkingInactive,
    #[error("flashlight is powered off")]
    PoweredOff,
    #[error("blinker is disabled by its host")]
    Halted,
    #[error("blinker was disabled by a configuration error")]
    Faulted,
}

/// Missing collaborator found when a blinker starts up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("power source {0:?} has no PowerSource component")]
    MissingPowerSource(Entity),
    #[error("lamp {0:?} has no SpotLight with Visibility")]
    MissingLamp(Entity),
}
