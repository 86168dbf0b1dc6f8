use bevy::prelude::*;

use crate::blink::events::*;
use crate::blink::systems::*;
use crate::sets::FlashlightSet;

/// Blinker systems. Expects the power plugin for `PowerStateChanged`.
pub fn plugin(app: &mut App) {
    app.add_message::<BlinkRequest>()
        .add_message::<BlinkNotification>()
        .add_systems(
            Update,
            (
                start_blinkers,
                react_to_power,
                apply_blink_requests,
                advance_blinkers,
                publish_blink_events,
            )
                .chain()
                .in_set(FlashlightSet::Blink),
        );
}
