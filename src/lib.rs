pub mod audio;
pub mod blink;
pub mod demo;
pub mod flashlight;
pub mod input;
pub mod light;
pub mod power;
pub mod prelude;
pub mod sets;

pub use audio::plugin as audio_plugin;
pub use demo::plugin as demo_plugin;
pub use flashlight::plugin as flashlight_plugin;
