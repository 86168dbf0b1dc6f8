use std::collections::HashMap;

use bevy::prelude::*;
use bevy_kira_audio::prelude::AudioInstance;

/// Burst loops currently playing, keyed by the `FlashlightAudio` entity.
/// Lives outside the component so a loop can still be stopped after its
/// listener is despawned. The handle is `None` on hosts without a channel.
#[derive(Resource, Debug, Default)]
pub struct BurstLoops {
    playing: HashMap<Entity, Option<Handle<AudioInstance>>>,
}

impl BurstLoops {
    pub fn is_playing(&self, listener: Entity) -> bool {
        self.playing.contains_key(&listener)
    }

    pub fn len(&self) -> usize {
        self.playing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playing.is_empty()
    }

    pub(crate) fn insert(&mut self, listener: Entity, instance: Option<Handle<AudioInstance>>) {
        self.playing.insert(listener, instance);
    }

    /// Forgets the loop of `listener`, returning its instance if one was playing
    pub(crate) fn take(&mut self, listener: Entity) -> Option<Handle<AudioInstance>> {
        self.playing.remove(&listener).flatten()
    }
}
