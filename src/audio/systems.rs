use bevy::prelude::*;
use bevy_kira_audio::prelude::{AudioChannel, AudioControl, AudioInstance, AudioTween};

use crate::audio::components::*;
use crate::audio::plugin::FlashlightSoundChannel;
use crate::audio::resources::BurstLoops;
use crate::blink::{BlinkEvent, BlinkNotification, FlashlightBlinker};
use crate::power::{PowerSource, PowerStateChanged};

fn stop_loop(
    listener: Entity,
    loops: &mut BurstLoops,
    instances: Option<&mut Assets<AudioInstance>>,
) {
    let (Some(handle), Some(instances)) = (loops.take(listener), instances) else {
        return;
    };
    match instances.get_mut(&handle) {
        Some(instance) => instance.stop(AudioTween::default()),
        None => debug!("Flashlight audio {:?}: burst loop already gone", listener),
    }
}

/// Reports listeners whose collaborators are missing when they are added
pub fn check_audio_links(
    listeners: Query<(Entity, &FlashlightAudio), Added<FlashlightAudio>>,
    sources: Query<(), With<PowerSource>>,
    blinkers: Query<(), With<FlashlightBlinker>>,
) {
    for (entity, audio) in listeners.iter() {
        if !sources.contains(audio.power) {
            error!(
                "Flashlight audio {:?}: {:?} has no PowerSource, switch sounds will not play",
                entity, audio.power
            );
        }
        match audio.blinker {
            Some(blinker) if blinkers.contains(blinker) => {}
            _ => warn!(
                "Flashlight audio {:?}: no blinker found, blinking sounds will not play",
                entity
            ),
        }
    }
}

/// Plays one switch click per power transition
pub fn play_switch_sounds(
    mut power_changes: MessageReader<PowerStateChanged>,
    mut listeners: Query<&mut FlashlightAudio>,
    channel: Option<Res<AudioChannel<FlashlightSoundChannel>>>,
) {
    let mut rng = rand::thread_rng();

    for change in power_changes.read() {
        for mut audio in listeners.iter_mut() {
            if audio.power != change.flashlight {
                continue;
            }
            let Some(index) = pick_clip(audio.switch_sounds.len(), audio.last_switch, &mut rng)
            else {
                continue;
            };
            audio.last_switch = Some(index);

            if let Some(channel) = channel.as_ref() {
                channel.play(audio.switch_sounds[index].clone());
            }
        }
    }
}

/// Loops a blinking sound for the length of each burst
pub fn play_blink_sounds(
    mut notifications: MessageReader<BlinkNotification>,
    mut listeners: Query<(Entity, &mut FlashlightAudio)>,
    mut loops: ResMut<BurstLoops>,
    channel: Option<Res<AudioChannel<FlashlightSoundChannel>>>,
    mut instances: Option<ResMut<Assets<AudioInstance>>>,
) {
    let mut rng = rand::thread_rng();

    for notification in notifications.read() {
        for (listener, mut audio) in listeners.iter_mut() {
            if audio.blinker != Some(notification.blinker) {
                continue;
            }

            match notification.event {
                BlinkEvent::BurstStarted => {
                    if audio.blink_sounds.is_empty() {
                        continue;
                    }
                    if audio.looping {
                        stop_loop(listener, &mut loops, instances.as_deref_mut());
                    }
                    let Some(index) =
                        pick_clip(audio.blink_sounds.len(), audio.last_blink, &mut rng)
                    else {
                        continue;
                    };
                    audio.last_blink = Some(index);
                    audio.looping = true;

                    let instance = channel.as_ref().map(|channel| {
                        channel
                            .play(audio.blink_sounds[index].clone())
                            .looped()
                            .handle()
                    });
                    loops.insert(listener, instance);
                }
                BlinkEvent::BurstEnded => {
                    if audio.looping {
                        stop_loop(listener, &mut loops, instances.as_deref_mut());
                        audio.looping = false;
                    }
                }
                BlinkEvent::BehaviorChanged { .. } => {}
            }
        }
    }
}

/// Silences burst loops whose blinker or listener went away mid-burst
pub fn stop_removed_loops(
    mut removed_blinkers: RemovedComponents<FlashlightBlinker>,
    mut removed_listeners: RemovedComponents<FlashlightAudio>,
    mut listeners: Query<(Entity, &mut FlashlightAudio)>,
    mut loops: ResMut<BurstLoops>,
    mut instances: Option<ResMut<Assets<AudioInstance>>>,
) {
    for blinker in removed_blinkers.read() {
        for (listener, mut audio) in listeners.iter_mut() {
            if audio.blinker == Some(blinker) && audio.looping {
                stop_loop(listener, &mut loops, instances.as_deref_mut());
                audio.looping = false;
            }
        }
    }

    for listener in removed_listeners.read() {
        if loops.is_playing(listener) {
            debug!("Flashlight audio {:?} removed mid-burst, stopping its loop", listener);
            stop_loop(listener, &mut loops, instances.as_deref_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;
    use bevy_kira_audio::AudioSource;

    fn setup_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<BurstLoops>()
            .add_message::<PowerStateChanged>()
            .add_message::<BlinkNotification>()
            .add_systems(
                Update,
                (
                    check_audio_links,
                    play_switch_sounds,
                    play_blink_sounds,
                    stop_removed_loops,
                )
                    .chain(),
            );
        app
    }

    fn clips(count: usize) -> Vec<Handle<AudioSource>> {
        (0..count).map(|_| Handle::default()).collect()
    }

    fn notify(app: &mut App, blinker: Entity, event: BlinkEvent) {
        app.world_mut()
            .write_message(BlinkNotification { blinker, event });
    }

    fn audio(app: &App, entity: Entity) -> &FlashlightAudio {
        app.world().get::<FlashlightAudio>(entity).unwrap()
    }

    #[test]
    fn test_power_change_picks_switch_clip() {
        let mut app = setup_test_app();
        let flashlight = app.world_mut().spawn(PowerSource::new(false)).id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(flashlight, None).with_switch_sounds(clips(2)))
            .id();

        app.world_mut().write_message(PowerStateChanged {
            flashlight,
            is_on: true,
        });
        app.update();
        let first = audio(&app, listener).last_switch_sound().unwrap();

        app.world_mut().write_message(PowerStateChanged {
            flashlight,
            is_on: false,
        });
        app.update();
        let second = audio(&app, listener).last_switch_sound().unwrap();

        // Two clips: consecutive switches alternate
        assert_ne!(first, second);
    }

    #[test]
    fn test_other_flashlight_is_not_heard() {
        let mut app = setup_test_app();
        let flashlight = app.world_mut().spawn(PowerSource::new(false)).id();
        let other = app.world_mut().spawn(PowerSource::new(false)).id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(flashlight, None).with_switch_sounds(clips(2)))
            .id();

        app.world_mut().write_message(PowerStateChanged {
            flashlight: other,
            is_on: true,
        });
        app.update();

        assert_eq!(audio(&app, listener).last_switch_sound(), None);
    }

    #[test]
    fn test_burst_loops_until_burst_ends() {
        let mut app = setup_test_app();
        let blinker = app.world_mut().spawn_empty().id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, Some(blinker)).with_blink_sounds(clips(3)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();
        assert!(audio(&app, listener).is_looping());
        assert!(audio(&app, listener).last_blink_sound().is_some());

        notify(&mut app, blinker, BlinkEvent::BehaviorChanged { active: true });
        app.update();
        assert!(audio(&app, listener).is_looping());

        notify(&mut app, blinker, BlinkEvent::BurstEnded);
        app.update();
        assert!(!audio(&app, listener).is_looping());
    }

    #[test]
    fn test_end_then_start_in_one_frame_keeps_looping() {
        let mut app = setup_test_app();
        let blinker = app.world_mut().spawn_empty().id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, Some(blinker)).with_blink_sounds(clips(2)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();

        notify(&mut app, blinker, BlinkEvent::BurstEnded);
        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();

        assert!(audio(&app, listener).is_looping());
    }

    #[test]
    fn test_no_blink_clips_means_no_loop() {
        let mut app = setup_test_app();
        let blinker = app.world_mut().spawn_empty().id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, Some(blinker)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();

        assert!(!audio(&app, listener).is_looping());
    }

    #[test]
    fn test_listener_without_blinker_ignores_bursts() {
        let mut app = setup_test_app();
        let blinker = app.world_mut().spawn_empty().id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, None).with_blink_sounds(clips(2)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();

        assert!(!audio(&app, listener).is_looping());
    }

    #[test]
    fn test_burst_loop_is_tracked_by_listener() {
        let mut app = setup_test_app();
        let blinker = app.world_mut().spawn_empty().id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, Some(blinker)).with_blink_sounds(clips(2)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();
        assert!(app.world().resource::<BurstLoops>().is_playing(listener));

        notify(&mut app, blinker, BlinkEvent::BurstEnded);
        app.update();
        assert!(!app.world().resource::<BurstLoops>().is_playing(listener));
    }

    #[test]
    fn test_despawning_listener_mid_burst_stops_loop() {
        let mut app = setup_test_app();
        let blinker = app.world_mut().spawn_empty().id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, Some(blinker)).with_blink_sounds(clips(2)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();
        assert!(app.world().resource::<BurstLoops>().is_playing(listener));

        app.world_mut().despawn(listener);
        app.update();
        assert!(app.world().resource::<BurstLoops>().is_empty());
    }

    #[test]
    fn test_removing_blinker_mid_burst_stops_loop() {
        let mut app = setup_test_app();
        let blinker = app
            .world_mut()
            .spawn(crate::blink::FlashlightBlinker::new(
                crate::blink::BlinkConfig::default(),
                Entity::PLACEHOLDER,
                Entity::PLACEHOLDER,
            ))
            .id();
        let listener = app
            .world_mut()
            .spawn(FlashlightAudio::new(blinker, Some(blinker)).with_blink_sounds(clips(1)))
            .id();

        notify(&mut app, blinker, BlinkEvent::BurstStarted);
        app.update();
        assert!(audio(&app, listener).is_looping());

        app.world_mut()
            .entity_mut(blinker)
            .remove::<FlashlightBlinker>();
        app.update();
        assert!(!audio(&app, listener).is_looping());
        assert!(!app.world().resource::<BurstLoops>().is_playing(listener));
    }
}
