//! Fixed timestep simulation tick
//!
//! Advances the actor by one frame: pending timed sequences first, then input,
//! movement, collisions, attacks, orientation and finally the screen wrap.

use glam::Vec2;

use super::scene::Scene;
use super::state::Actor;
use super::world::CollisionQuery;
use super::{attack, collision, life, motion};
use crate::audio::SoundBank;
use crate::presentation::{Light, Sprite};

/// Analog stick reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogStick {
    pub x: f32,
    pub y: f32,
    /// Stick at rest; digital buttons apply
    pub neutral: bool,
}

impl Default for AnalogStick {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            neutral: true,
        }
    }
}

impl AnalogStick {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            neutral: x == 0.0 && y == 0.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional buttons currently held
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Shot button pressed this tick (edge, not held)
    pub shoot: bool,
    /// Burst button pressed this tick (edge, not held)
    pub burst: bool,
    pub stick: AnalogStick,
}

impl TickInput {
    /// Movement direction: digital buttons, overridden by a non-neutral stick
    pub fn direction(&self) -> Vec2 {
        if !self.stick.neutral {
            return Vec2::new(self.stick.x, self.stick.y).clamp(Vec2::NEG_ONE, Vec2::ONE);
        }
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
        Vec2::new(axis(self.right, self.left), axis(self.down, self.up))
    }
}

/// Capabilities the actor talks to during a tick
pub struct Host<'a> {
    pub world: &'a dyn CollisionQuery,
    pub scene: &'a mut dyn Scene,
    pub sprite: &'a mut dyn Sprite,
    pub light: &'a mut dyn Light,
    pub audio: &'a mut dyn SoundBank,
}

/// Advance the actor by one tick; `real_dt_ms` is wall time since the last tick
pub fn tick(actor: &mut Actor, input: &TickInput, host: &mut Host<'_>, real_dt_ms: f32) {
    if actor.is_removed() {
        return;
    }

    actor.time_ticks += 1;

    // Resume timed sequences
    life::advance(actor, host);
    if actor.is_removed() {
        return;
    }
    attack::advance(actor, host);

    actor.acceleration = Vec2::ZERO;
    actor.bounce_timeout =
        (actor.bounce_timeout - real_dt_ms * actor.settings.actor.bounce_decay_scale).max(0.0);

    let dir = if actor.can_move {
        input.direction()
    } else {
        Vec2::ZERO
    };

    motion::integrate_input(actor, dir);
    collision::push_from_hazards(actor, host);
    motion::cap_speed(actor, dir.length());

    actor.position += actor.velocity;
    collision::resolve_solids(actor, host);

    attack::try_start(actor, input.shoot, input.burst, host);
    motion::orient(actor, host.sprite);

    actor.previous_position = actor.position;
    motion::wrap(actor);
}
