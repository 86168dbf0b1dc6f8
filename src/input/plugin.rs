use bevy::prelude::*;

use crate::input::resources::FlashlightKeys;
use crate::input::systems::handle_flashlight_keys;
use crate::sets::FlashlightSet;

/// Keyboard control. Expects Bevy's `InputPlugin`.
pub fn plugin(app: &mut App) {
    app.init_resource::<FlashlightKeys>().add_systems(
        Update,
        handle_flashlight_keys.in_set(FlashlightSet::Input),
    );
}
