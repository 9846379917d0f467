//! Audio capability for bounce feedback
//!
//! The simulation never mixes audio itself; it asks a `SoundBank` how long a
//! sample lasts and tells it when to play. `SampleBank` is a headless bank that
//! keeps counts, used by the demo binary and tests.

use serde::{Deserialize, Serialize};

/// Bounce sound variants (one is picked at random per bounce)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BounceSound {
    Bounce1,
    Bounce2,
    Bounce3,
}

impl BounceSound {
    pub const ALL: [BounceSound; 3] = [
        BounceSound::Bounce1,
        BounceSound::Bounce2,
        BounceSound::Bounce3,
    ];

    pub fn index(self) -> usize {
        match self {
            BounceSound::Bounce1 => 0,
            BounceSound::Bounce2 => 1,
            BounceSound::Bounce3 => 2,
        }
    }
}

/// Something that can play bounce samples
pub trait SoundBank {
    /// Sample duration in the bank's native unit
    fn duration(&self, sound: BounceSound) -> f32;
    fn play(&mut self, sound: BounceSound);
}

/// Default sample duration in bank units (scaled into a ~0.3s cooldown)
pub const DEFAULT_SAMPLE_DURATION: f32 = 30_000.0;

/// Headless sound bank: fixed durations, counts plays
#[derive(Debug, Clone)]
pub struct SampleBank {
    durations: [f32; 3],
    plays: [u32; 3],
    volume: f32,
    muted: bool,
}

impl Default for SampleBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleBank {
    pub fn new() -> Self {
        Self::with_durations([DEFAULT_SAMPLE_DURATION; 3])
    }

    pub fn with_durations(durations: [f32; 3]) -> Self {
        Self {
            durations,
            plays: [0; 3],
            volume: 0.98,
            muted: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// How many times a sound was triggered
    pub fn plays(&self, sound: BounceSound) -> u32 {
        self.plays[sound.index()]
    }

    pub fn total_plays(&self) -> u32 {
        self.plays.iter().sum()
    }
}

impl SoundBank for SampleBank {
    fn duration(&self, sound: BounceSound) -> f32 {
        self.durations[sound.index()]
    }

    fn play(&mut self, sound: BounceSound) {
        // Muted plays still count: the cooldown is driven by the trigger, not the mix
        self.plays[sound.index()] += 1;
        log::debug!("play {:?} at volume {:.2}", sound, self.effective_volume());
    }
}
