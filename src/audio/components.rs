use bevy::prelude::*;
use bevy_kira_audio::AudioSource;
use rand::Rng;

/// Plays flashlight sounds: a one-shot click on every power change and a
/// looping buzz for the length of each blinking burst.
#[derive(Component, Debug)]
pub struct FlashlightAudio {
    /// Entity holding the `PowerSource` whose switches are heard
    pub power: Entity,
    /// Entity holding the `FlashlightBlinker`; without one no buzz is played
    pub blinker: Option<Entity>,
    pub switch_sounds: Vec<Handle<AudioSource>>,
    pub blink_sounds: Vec<Handle<AudioSource>>,
    pub(crate) last_switch: Option<usize>,
    pub(crate) last_blink: Option<usize>,
    pub(crate) looping: bool,
}

impl FlashlightAudio {
    pub fn new(power: Entity, blinker: Option<Entity>) -> Self {
        Self {
            power,
            blinker,
            switch_sounds: Vec::new(),
            blink_sounds: Vec::new(),
            last_switch: None,
            last_blink: None,
            looping: false,
        }
    }

    pub fn with_switch_sounds(mut self, sounds: Vec<Handle<AudioSource>>) -> Self {
        self.switch_sounds = sounds;
        self
    }

    pub fn with_blink_sounds(mut self, sounds: Vec<Handle<AudioSource>>) -> Self {
        self.blink_sounds = sounds;
        self
    }

    /// Whether the burst buzz is currently playing
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn last_switch_sound(&self) -> Option<usize> {
        self.last_switch
    }

    pub fn last_blink_sound(&self) -> Option<usize> {
        self.last_blink
    }
}

/// Picks a clip index out of `len`, avoiding `last` whenever another clip exists
pub fn pick_clip<R: Rng + ?Sized>(len: usize, last: Option<usize>, rng: &mut R) -> Option<usize> {
    match (len, last) {
        (0, _) => None,
        (1, _) => Some(0),
        (len, Some(last)) if last < len => {
            let index = rng.gen_range(0..len - 1);
            Some(if index >= last { index + 1 } else { index })
        }
        (len, _) => Some(rng.gen_range(0..len)),
    }
}
