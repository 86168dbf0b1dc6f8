use bevy::prelude::*;

use crate::blink::components::FlashlightBlinker;
use crate::blink::error::SetupError;
use crate::blink::events::*;
use crate::light::Lamp;
use crate::power::{PowerSource, PowerStateChanged};

type LampQuery<'w, 's> = Query<'w, 's, (&'static mut SpotLight, &'static mut Visibility)>;

fn power_is_on(sources: &Query<&PowerSource>, power: Entity) -> bool {
    sources.get(power).map(PowerSource::is_on).unwrap_or(false)
}

fn check_handles(
    blinker: &FlashlightBlinker,
    sources: &Query<&PowerSource>,
    lamps: &LampQuery,
) -> Result<(), SetupError> {
    if !sources.contains(blinker.power) {
        return Err(SetupError::MissingPowerSource(blinker.power));
    }
    if !lamps.contains(blinker.lamp) {
        return Err(SetupError::MissingLamp(blinker.lamp));
    }
    Ok(())
}

/// Validates the injected handles of new blinkers and starts them.
/// A blinker with a missing power source or lamp is faulted permanently.
pub fn start_blinkers(
    mut blinkers: Query<(Entity, &mut FlashlightBlinker), Added<FlashlightBlinker>>,
    sources: Query<&PowerSource>,
    mut lamps: LampQuery,
) {
    for (entity, mut blinker) in blinkers.iter_mut() {
        if let Err(err) = check_handles(&blinker, &sources, &lamps) {
            error!("Flashlight blinker {:?} disabled: {}", entity, err);
            blinker.controller_mut().fault();
            continue;
        }

        let power_on = power_is_on(&sources, blinker.power);
        let Ok((light, visibility)) = lamps.get_mut(blinker.lamp) else {
            continue;
        };
        let mut lamp = Lamp::new(light, visibility);
        if let Err(err) = blinker.controller_mut().enable(power_on, &mut lamp) {
            warn!("Flashlight blinker {:?} could not start: {}", entity, err);
        }
    }
}

/// Forwards power transitions to the blinkers driven by that power source,
/// in the order the transitions happened.
pub fn react_to_power(
    mut power_changes: MessageReader<PowerStateChanged>,
    mut blinkers: Query<&mut FlashlightBlinker>,
    mut lamps: LampQuery,
) {
    for change in power_changes.read() {
        for mut blinker in blinkers.iter_mut() {
            if blinker.power != change.flashlight || blinker.controller().is_faulted() {
                continue;
            }
            let Ok((light, visibility)) = lamps.get_mut(blinker.lamp) else {
                continue;
            };
            let mut lamp = Lamp::new(light, visibility);
            if change.is_on {
                blinker.controller_mut().on_power_on(&mut lamp);
            } else {
                blinker.controller_mut().on_power_off(&mut lamp);
            }
        }
    }
}

/// Applies blink commands. Rejected commands are logged and change nothing.
pub fn apply_blink_requests(
    mut requests: MessageReader<BlinkRequest>,
    mut blinkers: Query<&mut FlashlightBlinker>,
    sources: Query<&PowerSource>,
    mut lamps: LampQuery,
) {
    for request in requests.read() {
        let Ok(mut blinker) = blinkers.get_mut(request.blinker) else {
            warn!(
                "Blink request {:?} for {:?} ignored: entity has no FlashlightBlinker",
                request.command, request.blinker
            );
            continue;
        };
        let power_on = power_is_on(&sources, blinker.power);
        let Ok((light, visibility)) = lamps.get_mut(blinker.lamp) else {
            warn!(
                "Blink request {:?} for {:?} ignored: lamp {:?} unavailable",
                request.command, request.blinker, blinker.lamp
            );
            continue;
        };
        let mut lamp = Lamp::new(light, visibility);

        let controller = blinker.controller_mut();
        let result = match request.command {
            BlinkCommand::SetBehavior(active) => {
                controller.set_blinking_behavior(active, power_on, &mut lamp)
            }
            BlinkCommand::TriggerBurst => controller.trigger_blinking_burst(power_on, &mut lamp),
            BlinkCommand::Enable => controller.enable(power_on, &mut lamp),
            BlinkCommand::Disable => {
                controller.disable(power_on, &mut lamp);
                Ok(())
            }
        };

        if let Err(err) = result {
            warn!(
                "Blink request {:?} for {:?} rejected: {}",
                request.command, request.blinker, err
            );
        }
    }
}

/// Ticks every running blinker with the frame delta
pub fn advance_blinkers(
    time: Res<Time>,
    mut blinkers: Query<&mut FlashlightBlinker>,
    sources: Query<&PowerSource>,
    mut lamps: LampQuery,
) {
    let dt = time.delta_secs();

    for mut blinker in blinkers.iter_mut() {
        if blinker.controller().is_halted() {
            continue;
        }
        let power_on = power_is_on(&sources, blinker.power);
        let Ok((light, visibility)) = lamps.get_mut(blinker.lamp) else {
            continue;
        };
        let mut lamp = Lamp::new(light, visibility);
        blinker.controller_mut().advance(dt, power_on, &mut lamp);
    }
}

/// Publishes queued controller notifications as [`BlinkNotification`]s
pub fn publish_blink_events(
    mut blinkers: Query<(Entity, &mut FlashlightBlinker)>,
    mut notifications: MessageWriter<BlinkNotification>,
) {
    for (entity, mut blinker) in blinkers.iter_mut() {
        if !blinker.controller().has_pending_events() {
            continue;
        }
        for event in blinker.controller_mut().drain_events() {
            debug!("Flashlight blinker {:?}: {:?}", entity, event);
            notifications.write(BlinkNotification {
                blinker: entity,
                event,
            });
        }
    }
}
