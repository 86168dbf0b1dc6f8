use bevy::prelude::*;

use crate::power::events::*;
use crate::power::systems::*;
use crate::sets::FlashlightSet;

pub fn plugin(app: &mut App) {
    app.add_message::<PowerRequest>()
        .add_message::<PowerStateChanged>()
        .add_message::<PowerTurnedOn>()
        .add_message::<PowerTurnedOff>()
        .add_systems(
            Update,
            (start_power_sources, apply_power_requests)
                .chain()
                .in_set(FlashlightSet::Power),
        );
}
