pub use bevy::prelude::*;
pub use crate::sets::FlashlightSet;

// Re-export components
pub use crate::audio::components::*;
pub use crate::blink::components::*;
pub use crate::input::components::*;
pub use crate::power::components::*;

// Re-export messages
pub use crate::blink::events::*;
pub use crate::power::events::*;

pub use crate::blink::{BlinkConfig, BlinkController, BlinkError, BlinkEvent, BlinkState, FloatRange, SetupError};
pub use crate::flashlight::{spawn_flashlight, FlashlightRig, SpawnedFlashlight};
pub use crate::input::FlashlightKeys;
pub use crate::light::{Lamp, LightEmitter, SteadyLight};
