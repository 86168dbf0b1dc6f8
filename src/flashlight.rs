use bevy::prelude::*;

use crate::blink::{BlinkConfig, FlashlightBlinker};
use crate::power::{Flashlight, PowerSource};

/// Power, blink and input systems, chained by [`FlashlightSet`](crate::sets::FlashlightSet).
/// Audio reactions live in [`crate::audio::plugin`] because they need Kira.
pub fn plugin(app: &mut App) {
    crate::sets::configure(app);
    app.add_plugins((crate::power::plugin, crate::blink::plugin, crate::input::plugin));
}

/// Description of a flashlight to spawn
#[derive(Debug, Clone)]
pub struct FlashlightRig {
    pub transform: Transform,
    /// Lamp intensity in lumens
    pub intensity: f32,
    pub range: f32,
    pub outer_angle: f32,
    pub starts_on: bool,
    /// Attach a blinker with this configuration
    pub blink: Option<BlinkConfig>,
}

impl Default for FlashlightRig {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            intensity: 400_000.0,
            range: 40.0,
            outer_angle: 0.45,
            starts_on: true,
            blink: None,
        }
    }
}

/// Entities created by [`spawn_flashlight`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedFlashlight {
    /// Holds the `PowerSource`, the `Flashlight` link and the blinker if any
    pub flashlight: Entity,
    /// Child holding the `SpotLight`
    pub lamp: Entity,
}

/// Spawns a flashlight root with its lamp as a child
pub fn spawn_flashlight(commands: &mut Commands, rig: FlashlightRig) -> SpawnedFlashlight {
    let lamp = commands
        .spawn((
            SpotLight {
                intensity: rig.intensity,
                range: rig.range,
                outer_angle: rig.outer_angle,
                inner_angle: rig.outer_angle * 0.6,
                shadows_enabled: true,
                ..default()
            },
            Visibility::Inherited,
        ))
        .id();

    let flashlight = commands
        .spawn((
            rig.transform,
            Visibility::default(),
            PowerSource::new(rig.starts_on),
            Flashlight { lamp },
        ))
        .add_child(lamp)
        .id();

    if let Some(config) = rig.blink {
        commands
            .entity(flashlight)
            .insert(FlashlightBlinker::new(config, flashlight, lamp));
    }

    SpawnedFlashlight { flashlight, lamp }
}
