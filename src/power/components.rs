use bevy::prelude::*;

use crate::power::events::PowerAction;

/// Logical on/off state of a flashlight, independent of any blink phase.
///
/// Mutated only through [`PowerSource::turn_on`], [`PowerSource::turn_off`]
/// and [`PowerSource::switch`]. Each method reports the transition it made so
/// the caller can publish exactly one notification per real change.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerSource {
    is_on: bool,
    starts_on: bool,
}

/// A power change that actually happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTransition {
    TurnedOn,
    TurnedOff,
}

impl PowerTransition {
    /// Power state after the transition
    pub fn is_on(self) -> bool {
        matches!(self, PowerTransition::TurnedOn)
    }
}

impl PowerSource {
    /// A powered-off source. With `starts_on`, the host turns it on the first
    /// frame it sees the component.
    pub fn new(starts_on: bool) -> Self {
        Self {
            is_on: false,
            starts_on,
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn starts_on(&self) -> bool {
        self.starts_on
    }

    pub fn turn_on(&mut self) -> Option<PowerTransition> {
        if self.is_on {
            return None;
        }
        self.is_on = true;
        Some(PowerTransition::TurnedOn)
    }

    pub fn turn_off(&mut self) -> Option<PowerTransition> {
        if !self.is_on {
            return None;
        }
        self.is_on = false;
        Some(PowerTransition::TurnedOff)
    }

    /// Flips the power state. Always a real transition.
    pub fn switch(&mut self) -> Option<PowerTransition> {
        if self.is_on {
            self.turn_off()
        } else {
            self.turn_on()
        }
    }

    pub fn apply(&mut self, action: PowerAction) -> Option<PowerTransition> {
        match action {
            PowerAction::TurnOn => self.turn_on(),
            PowerAction::TurnOff => self.turn_off(),
            PowerAction::Switch => self.switch(),
        }
    }
}

/// Links a power source to the lamp entity it drives.
/// The lamp's visibility mirrors the power state on every transition.
#[derive(Component, Debug, Clone, Copy)]
pub struct Flashlight {
    pub lamp: Entity,
}
