//! Game settings and tuning
//!
//! Everything the simulation would otherwise hardcode (arena size, tick rate,
//! movement and timing constants) lives here so it can be loaded from JSON
//! and swapped out in tests.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Arena geometry and timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub width: f32,
    pub height: f32,
    /// Ticks per second, used to turn second-based durations into tick counts
    pub tick_rate: f32,
    /// Wrap triggers `hitbox * wrap_margin_factor` outside the arena
    pub wrap_margin_factor: f32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            tick_rate: TICK_RATE,
            wrap_margin_factor: WRAP_MARGIN_FACTOR,
        }
    }
}

impl ArenaSettings {
    /// Convert a duration in seconds into whole ticks
    pub fn secs_to_ticks(&self, secs: f32) -> u32 {
        (secs * self.tick_rate).max(0.0) as u32
    }
}

/// Movement, combat and feedback tuning for the player actor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorTuning {
    // === Movement ===
    pub max_speed: f32,
    pub accel_step: f32,
    pub friction: f32,
    pub turn_rate_deg: f32,

    // === Collision ===
    pub min_bounce_speed: f32,
    pub restitution: f32,
    pub repel_push: f32,
    pub hitbox_width: f32,
    pub hitbox_height: f32,

    // === Health ===
    pub initial_health: i32,
    pub invulnerability_secs: f32,
    pub hurt_alpha: f32,
    pub hurt_light_fade_secs: f32,
    pub death_light_fade_secs: f32,
    pub death_fade_rate: f32,
    pub death_fade_threshold: f32,
    pub death_grace_ticks: u32,

    // === Attacks ===
    pub attack_windup_ticks: u32,
    pub attack_recovery_ticks: u32,
    pub shot_offset: f32,

    // === Bounce feedback ===
    /// Multiplier from a sound's reported duration to cooldown seconds
    pub bounce_cooldown_scale: f32,
    /// Multiplier from real elapsed milliseconds to cooldown seconds
    pub bounce_decay_scale: f32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            accel_step: ACCEL_STEP,
            friction: FRICTION,
            turn_rate_deg: TURN_RATE_DEG,

            min_bounce_speed: MIN_BOUNCE_SPEED,
            restitution: RESTITUTION,
            repel_push: REPEL_PUSH,
            hitbox_width: HITBOX_WIDTH,
            hitbox_height: HITBOX_HEIGHT,

            initial_health: INITIAL_HEALTH,
            invulnerability_secs: INVULNERABILITY_SECS,
            hurt_alpha: HURT_ALPHA,
            hurt_light_fade_secs: HURT_LIGHT_FADE_SECS,
            death_light_fade_secs: DEATH_LIGHT_FADE_SECS,
            death_fade_rate: DEATH_FADE_RATE,
            death_fade_threshold: DEATH_FADE_THRESHOLD,
            death_grace_ticks: DEATH_GRACE_TICKS,

            attack_windup_ticks: ATTACK_WINDUP_TICKS,
            attack_recovery_ticks: ATTACK_RECOVERY_TICKS,
            shot_offset: SHOT_OFFSET,

            bounce_cooldown_scale: BOUNCE_COOLDOWN_SCALE,
            bounce_decay_scale: BOUNCE_DECAY_SCALE,
        }
    }
}

/// Complete simulation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: ArenaSettings,
    pub actor: ActorTuning,
    /// Seed for bounce sound selection
    pub seed: u64,
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        positive("arena.tick_rate", self.arena.tick_rate)?;
        positive("actor.max_speed", self.actor.max_speed)?;
        positive("actor.accel_step", self.actor.accel_step)?;
        positive("actor.hitbox_width", self.actor.hitbox_width)?;
        positive("actor.hitbox_height", self.actor.hitbox_height)?;

        if !(0.0..=1.0).contains(&self.actor.death_fade_rate) || self.actor.death_fade_rate == 0.0 {
            return Err(SettingsError::Invalid {
                field: "actor.death_fade_rate",
                reason: "must be in (0, 1]",
            });
        }
        if self.actor.initial_health <= 0 {
            return Err(SettingsError::Invalid {
                field: "actor.initial_health",
                reason: "must be at least 1",
            });
        }
        if self.actor.friction < 0.0 || self.actor.min_bounce_speed < 0.0 {
            log::warn!("Negative friction/bounce floor configured; actor may never settle");
        }
        Ok(())
    }

    /// Number of ticks the actor stays invulnerable after a hit
    pub fn invulnerability_ticks(&self) -> u32 {
        self.arena.secs_to_ticks(self.actor.invulnerability_secs)
    }
}
