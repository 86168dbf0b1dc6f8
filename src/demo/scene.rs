use bevy::prelude::*;

use crate::audio::FlashlightAudio;
use crate::blink::{BlinkState, FlashlightBlinker};
use crate::demo::DemoSettings;
use crate::flashlight::{spawn_flashlight, FlashlightRig};
use crate::input::{FlashlightInput, FlashlightKeys};
use crate::power::PowerSource;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 8.0);

/// Marker for the status line
#[derive(Component)]
pub struct StatusText;

/// Spawns the camera carrying the flashlight, a floor with a few props, and
/// the status line
pub fn setup_demo_scene(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let camera = commands
        .spawn((
            Camera3d::default(),
            Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();

    // Flashlight sits slightly right of the eye and points where the camera looks
    let spawned = spawn_flashlight(
        &mut commands,
        FlashlightRig {
            transform: Transform::from_xyz(0.3, -0.2, 0.0),
            ..settings.rig.clone()
        },
    );
    commands.entity(camera).add_child(spawned.flashlight);

    let blinker = settings.rig.blink.as_ref().map(|_| spawned.flashlight);
    let mut input = FlashlightInput::new(spawned.flashlight);
    if let Some(blinker) = blinker {
        input = input.with_blinker(blinker);
    }
    commands.entity(camera).insert(input);

    let load = |paths: &[String]| -> Vec<_> {
        paths.iter().map(|path| asset_server.load(path.clone())).collect()
    };
    commands.entity(spawned.flashlight).insert(
        FlashlightAudio::new(spawned.flashlight, blinker)
            .with_switch_sounds(load(&settings.switch_sounds))
            .with_blink_sounds(load(&settings.blink_sounds)),
    );

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(30.0, 30.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.3, 0.32))),
    ));

    // Props to catch the beam
    let prop_material = materials.add(Color::srgb(0.7, 0.6, 0.5));
    for (index, x) in [-2.5_f32, 0.0, 2.5].into_iter().enumerate() {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0 + index as f32 * 0.5, 1.0))),
            MeshMaterial3d(prop_material.clone()),
            Transform::from_xyz(x, 0.5 + index as f32 * 0.25, -1.5),
        ));
    }

    commands.spawn((
        StatusText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

/// One line describing the first flashlight
pub fn status_line(power: &PowerSource, blinker: Option<&FlashlightBlinker>, keys: &FlashlightKeys) -> String {
    let power = if power.is_on() { "ON" } else { "OFF" };
    let blink = match blinker.map(|b| (b.is_blinking_active(), b.controller().state())) {
        None => "no blinker".to_string(),
        Some((false, _)) => "blinking off".to_string(),
        Some((true, BlinkState::Idle)) => "blinking on, idle".to_string(),
        Some((true, BlinkState::WaitingForBurst)) => "blinking on, steady".to_string(),
        Some((true, BlinkState::InBurst)) => "blinking on, BURST".to_string(),
    };
    format!(
        "Power {} | {} | [{:?}] switch  [{:?}] blinking  [{:?}] burst",
        power, blink, keys.switch, keys.toggle_blinking, keys.trigger_burst
    )
}

pub fn update_status_text(
    flashlights: Query<(&PowerSource, Option<&FlashlightBlinker>)>,
    keys: Res<FlashlightKeys>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    let Some((power, blinker)) = flashlights.iter().next() else {
        return;
    };
    let line = status_line(power, blinker, &keys);
    for mut text in texts.iter_mut() {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}
