use bevy::prelude::*;

use crate::power::components::*;
use crate::power::events::*;

/// Applies the start-up policy of newly spawned power sources.
/// `starts_on` sources get a turn-on request; the rest have their lamp
/// switched off silently.
pub fn start_power_sources(
    query: Query<(Entity, &PowerSource, Option<&Flashlight>), Added<PowerSource>>,
    mut lamps: Query<&mut Visibility, With<SpotLight>>,
    mut requests: MessageWriter<PowerRequest>,
) {
    for (entity, source, flashlight) in query.iter() {
        if source.starts_on() {
            requests.write(PowerRequest::new(entity, PowerAction::TurnOn));
        } else if let Some(flashlight) = flashlight {
            if let Ok(mut visibility) = lamps.get_mut(flashlight.lamp) {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

/// Applies power requests in arrival order.
/// Every real transition updates the lamp and publishes
/// `PowerStateChanged` followed by `PowerTurnedOn`/`PowerTurnedOff`.
pub fn apply_power_requests(
    mut requests: MessageReader<PowerRequest>,
    mut sources: Query<(&mut PowerSource, Option<&Flashlight>)>,
    mut lamps: Query<&mut Visibility, With<SpotLight>>,
    mut state_changed: MessageWriter<PowerStateChanged>,
    mut turned_on: MessageWriter<PowerTurnedOn>,
    mut turned_off: MessageWriter<PowerTurnedOff>,
) {
    for request in requests.read() {
        let Ok((mut source, flashlight)) = sources.get_mut(request.flashlight) else {
            warn!(
                "Power request {:?} for {:?} ignored: entity has no PowerSource",
                request.action, request.flashlight
            );
            continue;
        };

        let Some(transition) = source.apply(request.action) else {
            continue;
        };
        let is_on = transition.is_on();

        match flashlight {
            Some(flashlight) => match lamps.get_mut(flashlight.lamp) {
                Ok(mut visibility) => {
                    let target = if is_on {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    };
                    visibility.set_if_neq(target);
                }
                Err(_) => error!(
                    "Flashlight {:?} lamp {:?} has no SpotLight",
                    request.flashlight, flashlight.lamp
                ),
            },
            None => debug!("Power source {:?} has no lamp attached", request.flashlight),
        }

        debug!("Flashlight {:?} powered {}", request.flashlight, if is_on { "on" } else { "off" });

        state_changed.write(PowerStateChanged {
            flashlight: request.flashlight,
            is_on,
        });
        match transition {
            PowerTransition::TurnedOn => {
                turned_on.write(PowerTurnedOn {
                    flashlight: request.flashlight,
                });
            }
            PowerTransition::TurnedOff => {
                turned_off.write(PowerTurnedOff {
                    flashlight: request.flashlight,
                });
            }
        }
    }
}
