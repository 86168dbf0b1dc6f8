use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use flashlight_kit::blink::{BlinkConfig, FloatRange};
use flashlight_kit::demo::{parse_range, DemoSettings};
use flashlight_kit::flashlight::FlashlightRig;
use flashlight_kit::{audio_plugin, demo_plugin, flashlight_plugin};

/// Interactive flashlight with random blinking bursts
#[derive(Parser, Debug)]
#[command(name = "flashlight-demo", version, about)]
struct Args {
    /// Steady time between bursts, `MIN,MAX` seconds
    #[arg(long, value_parser = parse_range, default_value = "5,30")]
    interval: FloatRange,

    /// Length of a burst, `MIN,MAX` seconds
    #[arg(long, value_parser = parse_range, default_value = "1,5")]
    burst: FloatRange,

    /// Lit part of each blink, `MIN,MAX` seconds
    #[arg(long, value_parser = parse_range, default_value = "0.01,0.2")]
    blink_on: FloatRange,

    /// Dimmed part of each blink, `MIN,MAX` seconds
    #[arg(long, value_parser = parse_range, default_value = "0.05,0.5")]
    blink_off: FloatRange,

    /// Intensity fraction while dimmed, `MIN,MAX`
    #[arg(long, value_parser = parse_range, default_value = "0,0.2")]
    dim: FloatRange,

    /// Start with the flashlight switched off
    #[arg(long)]
    starts_off: bool,

    /// Start with blinking behavior active
    #[arg(long)]
    blinking: bool,

    /// Leave the light at its last blink intensity when blinking halts
    #[arg(long)]
    no_restore: bool,

    /// Asset path of a switch click, repeatable
    #[arg(long = "switch-sound", value_name = "PATH")]
    switch_sounds: Vec<String>,

    /// Asset path of a looping burst sound, repeatable
    #[arg(long = "blink-sound", value_name = "PATH")]
    blink_sounds: Vec<String>,

    /// Log filter passed to Bevy's `LogPlugin`
    #[arg(long, default_value = "info,wgpu=error,naga=warn")]
    log_filter: String,
}

impl Args {
    fn blink_config(&self) -> BlinkConfig {
        BlinkConfig {
            burst_interval: self.interval,
            burst_duration: self.burst,
            blink_on_duration: self.blink_on,
            blink_off_duration: self.blink_off,
            dim_factor: self.dim,
            restore_on_stop: !self.no_restore,
            starts_active: self.blinking,
        }
    }

    fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            rig: FlashlightRig {
                starts_on: !self.starts_off,
                blink: Some(self.blink_config()),
                ..default()
            },
            switch_sounds: self.switch_sounds.clone(),
            blink_sounds: self.blink_sounds.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: args.log_filter.clone(),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(bevy_kira_audio::AudioPlugin)
        .insert_resource(args.demo_settings())
        .add_plugins((flashlight_plugin, audio_plugin, demo_plugin))
        .run();
}
