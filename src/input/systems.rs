use bevy::prelude::*;

use crate::blink::{BlinkCommand, BlinkRequest, FlashlightBlinker};
use crate::input::components::FlashlightInput;
use crate::input::resources::FlashlightKeys;
use crate::power::{PowerAction, PowerRequest};

/// Turns flashlight key presses into power and blink requests
pub fn handle_flashlight_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    keys: Res<FlashlightKeys>,
    inputs: Query<&FlashlightInput>,
    blinkers: Query<&FlashlightBlinker>,
    mut power_requests: MessageWriter<PowerRequest>,
    mut blink_requests: MessageWriter<BlinkRequest>,
) {
    for input in inputs.iter() {
        if keyboard.just_pressed(keys.switch) {
            power_requests.write(PowerRequest::new(input.flashlight, PowerAction::Switch));
        }

        let Some(blinker) = input.blinker else {
            continue;
        };

        if keyboard.just_pressed(keys.toggle_blinking) {
            match blinkers.get(blinker) {
                Ok(current) => {
                    let active = !current.is_blinking_active();
                    info!("Flashlight blinking {}", if active { "enabled" } else { "disabled" });
                    blink_requests.write(BlinkRequest::new(blinker, BlinkCommand::SetBehavior(active)));
                }
                Err(_) => warn!("Flashlight input: {:?} has no FlashlightBlinker", blinker),
            }
        }

        if keyboard.just_pressed(keys.trigger_burst) {
            blink_requests.write(BlinkRequest::new(blinker, BlinkCommand::TriggerBurst));
        }
    }
}
