pub mod scene;

use bevy::prelude::*;

use crate::blink::FloatRange;
use crate::flashlight::FlashlightRig;

pub use scene::*;

/// What the demo spawns, filled in from the command line
#[derive(Resource, Debug, Clone, Default)]
pub struct DemoSettings {
    pub rig: FlashlightRig,
    /// Asset paths of the power switch clicks
    pub switch_sounds: Vec<String>,
    /// Asset paths of the looping burst sounds
    pub blink_sounds: Vec<String>,
}

/// Demo scene: camera, floor, a flashlight with blinker, audio and input,
/// and a status line.
pub fn plugin(app: &mut App) {
    app.init_resource::<DemoSettings>()
        .add_systems(Startup, setup_demo_scene)
        .add_systems(Update, update_status_text);
}

/// Parses `MIN,MAX` (or a single value for a fixed range) in seconds
pub fn parse_range(value: &str) -> Result<FloatRange, String> {
    let parse = |part: &str| {
        let part = part.trim();
        match part.parse::<f32>() {
            Ok(number) if number.is_finite() => Ok(number),
            Ok(_) => Err(format!("{:?} is not a finite number", part)),
            Err(err) => Err(format!("invalid number {:?}: {}", part, err)),
        }
    };

    match value.split_once(',') {
        Some((min, max)) => Ok(FloatRange::new(parse(min)?, parse(max)?)),
        None => Ok(FloatRange::fixed(parse(value)?)),
    }
}
