//! Actor state and core simulation types
//!
//! Everything the tick reads or writes lives on `Actor`. Timed behaviors
//! (invulnerability, death fade, attacks) are explicit phase enums with tick
//! counters so the whole actor can be inspected or snapshotted between ticks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::scene::{Scene, SpawnRequest};
use crate::Settings;
use crate::audio::BounceSound;
use crate::presentation::{Anim, Sprite};

/// Health / damage state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifePhase {
    /// Takes damage normally
    Healthy,
    /// Recently hit; damage ignored until the countdown runs out
    Invulnerable { remaining: u32 },
    /// Health hit zero; fading out
    Dying(DeathPhase),
    /// Death sequence finished, actor is out of the scene
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathPhase {
    /// Sprite alpha easing toward zero
    Fading,
    /// Fully faded, waiting before game over
    Grace { remaining: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    /// Ranged lightning ball
    Shot,
    /// Area lightning burst (roots the actor during windup)
    Burst,
}

/// Attack sequencer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPhase {
    Idle,
    Windup { kind: AttackKind, remaining: u32 },
    Recovery { kind: AttackKind, remaining: u32 },
}

/// Things that happened during a tick, drained by the owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorEvent {
    Bounced { sound: BounceSound },
    Damaged { health: i32 },
    Vulnerable,
    Died,
    AttackStarted { kind: AttackKind },
    Spawned(SpawnRequest),
    AttackReady,
    GameOver,
}

fn unseeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// The player-controlled actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub position: Vec2,
    /// Position at the start of the current tick
    pub previous_position: Vec2,
    pub velocity: Vec2,
    /// Recomputed from input every tick
    pub acceleration: Vec2,
    /// Degrees, derived from `facing_direction` (90 = up)
    pub facing_angle: f32,
    /// Unit vector; turns toward acceleration at a bounded rate
    pub facing_direction: Vec2,
    pub health: i32,
    /// One-way latch set when the death sequence starts
    pub dead: bool,
    /// Seconds until the next bounce may play a sound / deal damage
    pub bounce_timeout: f32,
    pub can_move: bool,
    pub can_attack: bool,
    pub life: LifePhase,
    pub attack: AttackPhase,
    pub sprite_alpha: f32,
    /// Hitbox half width / half height
    pub half_extents: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub settings: Settings,
    #[serde(skip, default = "unseeded_rng")]
    rng: Pcg32,
    #[serde(skip)]
    events: Vec<ActorEvent>,
}

impl Actor {
    pub fn new(position: Vec2, settings: Settings) -> Self {
        let half_extents =
            Vec2::new(settings.actor.hitbox_width, settings.actor.hitbox_height) / 2.0;
        Self {
            position,
            previous_position: position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            facing_angle: 90.0,
            facing_direction: Vec2::new(0.0, -1.0),
            health: settings.actor.initial_health,
            dead: false,
            bounce_timeout: 0.0,
            can_move: true,
            can_attack: true,
            life: LifePhase::Healthy,
            attack: AttackPhase::Idle,
            sprite_alpha: 1.0,
            half_extents,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            events: Vec::new(),
        }
    }

    /// Register with the scene: light goes into the scene's light list and
    /// the sprite starts on the move animation
    pub fn attach(&mut self, scene: &mut dyn Scene, sprite: &mut dyn Sprite) {
        scene.attach_light();
        sprite.set_alpha(self.sprite_alpha);
        sprite.set_angle(self.facing_angle - 90.0);
        sprite.play(Anim::Move);
        log::debug!("actor attached at {:?}", self.position);
    }

    /// Restart the bounce RNG from `settings.seed` (after deserializing a snapshot)
    pub fn reseed(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.settings.seed);
    }

    pub fn is_invulnerable(&self) -> bool {
        matches!(self.life, LifePhase::Invulnerable { .. })
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_removed(&self) -> bool {
        self.life == LifePhase::Removed
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<ActorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[ActorEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: ActorEvent) {
        self.events.push(event);
    }

    pub(crate) fn pick_bounce_sound(&mut self) -> BounceSound {
        BounceSound::ALL[self.rng.random_range(0..BounceSound::ALL.len())]
    }
}
