use bevy::prelude::*;
use bevy_kira_audio::prelude::AudioApp;

use crate::audio::resources::BurstLoops;
use crate::audio::systems::*;
use crate::sets::FlashlightSet;

/// Kira channel carrying every flashlight sound
#[derive(Resource)]
pub struct FlashlightSoundChannel;

/// Flashlight audio reactions. Needs `bevy_kira_audio::AudioPlugin`.
pub fn plugin(app: &mut App) {
    app.add_audio_channel::<FlashlightSoundChannel>()
        .init_resource::<BurstLoops>()
        .add_systems(
            Update,
            (
                check_audio_links,
                play_switch_sounds,
                play_blink_sounds,
                stop_removed_loops,
            )
                .chain()
                .in_set(FlashlightSet::Reactions),
        );
}
