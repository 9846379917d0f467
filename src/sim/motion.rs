//! Movement integration, facing and screen wrap

use glam::Vec2;

use super::state::Actor;
use crate::presentation::Sprite;
use crate::{angle_degrees, approach, rotate_degrees, wrap_degrees};

/// Turn this tick's input direction into acceleration and velocity
pub fn integrate_input(actor: &mut Actor, dir: Vec2) {
    let max_speed = actor.settings.actor.max_speed;
    let accel = actor.settings.actor.accel_step;
    let friction = actor.settings.actor.friction;

    if dir == Vec2::ZERO {
        // Slow down as an overall speed so the heading is kept
        let speed = (actor.velocity.length() - friction).max(0.0);
        actor.velocity = actor.velocity.normalize_or_zero() * speed;
        return;
    }

    if dir.x != 0.0 {
        actor.acceleration.x = dir.x * accel;
        actor.velocity.x = (actor.velocity.x + actor.acceleration.x).clamp(-max_speed, max_speed);
    } else {
        actor.velocity.x = approach(actor.velocity.x, 0.0, friction);
    }

    if dir.y != 0.0 {
        actor.acceleration.y = dir.y * accel;
        actor.velocity.y = (actor.velocity.y + actor.acceleration.y).clamp(-max_speed, max_speed);
    } else {
        actor.velocity.y = approach(actor.velocity.y, 0.0, friction);
    }
}

/// Cap speed to the input's share of max speed, then to max speed
pub fn cap_speed(actor: &mut Actor, input_len: f32) {
    let max_speed = actor.settings.actor.max_speed;

    if input_len != 0.0 && actor.velocity.length() > input_len * max_speed {
        actor.velocity = actor.velocity.normalize_or_zero() * (input_len * max_speed);
    }
    actor.velocity = actor.velocity.clamp_length_max(max_speed);
}

/// Turn the facing direction toward the acceleration at a bounded rate
pub fn orient(actor: &mut Actor, sprite: &mut dyn Sprite) {
    if actor.acceleration.x != 0.0 || actor.acceleration.y != 0.0 {
        let target = angle_degrees(actor.acceleration);
        let turn = actor.settings.actor.turn_rate_deg;
        let delta = wrap_degrees(target - actor.facing_angle).clamp(-turn, turn);
        actor.facing_direction = rotate_degrees(actor.facing_direction, delta);
        actor.facing_angle = angle_degrees(actor.facing_direction);
    }
    // Sprite art faces up
    sprite.set_angle(actor.facing_angle - 90.0);
}

/// Teleport to the opposite edge once past the overscanned arena
pub fn wrap(actor: &mut Actor) {
    let arena = &actor.settings.arena;
    let size = actor.half_extents * 2.0;

    let left = 0.0 - size.x * arena.wrap_margin_factor;
    let right = arena.width + size.x * arena.wrap_margin_factor;
    let top = 0.0 - size.y * arena.wrap_margin_factor;
    let bottom = arena.height + size.y * arena.wrap_margin_factor;

    if actor.position.x < left {
        actor.position.x = right;
        actor.previous_position.x = right;
    } else if actor.position.x > right {
        actor.position.x = left;
        actor.previous_position.x = left;
    }

    if actor.position.y < top {
        actor.position.y = bottom;
        actor.previous_position.y = bottom;
    } else if actor.position.y > bottom {
        actor.position.y = top;
        actor.previous_position.y = top;
    }
}
