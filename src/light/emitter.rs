use bevy::prelude::*;

/// An on/off, intensity-settable light.
///
/// Flashlight logic only reads and writes through this trait, so the same
/// state machine drives a Bevy [`SpotLight`] in the game and a plain
/// [`SteadyLight`] in headless hosts.
pub trait LightEmitter {
    fn intensity(&self) -> f32;
    fn set_intensity(&mut self, intensity: f32);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// A light with no engine behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyLight {
    pub intensity: f32,
    pub enabled: bool,
}

impl SteadyLight {
    pub fn new(intensity: f32) -> Self {
        Self {
            intensity,
            enabled: true,
        }
    }
}

impl LightEmitter for SteadyLight {
    fn intensity(&self) -> f32 {
        self.intensity
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Borrowed view of a lamp entity: the spot light and the visibility that
/// switches it on and off.
pub struct Lamp<'w> {
    pub light: Mut<'w, SpotLight>,
    pub visibility: Mut<'w, Visibility>,
}

impl<'w> Lamp<'w> {
    pub fn new(light: Mut<'w, SpotLight>, visibility: Mut<'w, Visibility>) -> Self {
        Self { light, visibility }
    }
}

impl LightEmitter for Lamp<'_> {
    fn intensity(&self) -> f32 {
        self.light.intensity
    }

    fn set_intensity(&mut self, intensity: f32) {
        // Avoid flagging the light as changed every frame of a steady phase
        if self.light.intensity != intensity {
            self.light.intensity = intensity;
        }
    }

    fn is_enabled(&self) -> bool {
        *self.visibility != Visibility::Hidden
    }

    fn set_enabled(&mut self, enabled: bool) {
        let target = if enabled {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        self.visibility.set_if_neq(target);
    }
}
