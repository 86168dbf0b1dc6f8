use bevy::prelude::*;

/// What a [`PowerRequest`] asks the power source to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    TurnOn,
    TurnOff,
    Switch,
}

/// Request to change a flashlight's power state
#[derive(Message, Debug, Clone, Copy)]
pub struct PowerRequest {
    pub flashlight: Entity,
    pub action: PowerAction,
}

impl PowerRequest {
    pub fn new(flashlight: Entity, action: PowerAction) -> Self {
        Self { flashlight, action }
    }
}

/// Fired on every real power transition, before the directional message
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerStateChanged {
    pub flashlight: Entity,
    pub is_on: bool,
}

/// Fired when a flashlight goes from off to on
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerTurnedOn {
    pub flashlight: Entity,
}

/// Fired when a flashlight goes from on to off
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerTurnedOff {
    pub flashlight: Entity,
}
