//! Collision response for the actor's box hitbox
//!
//! Solid geometry uses a discrete sweep-back: after the move, step the actor
//! back one unit at a time along a single axis (X tested before Y on every
//! step) until it no longer overlaps, bounded by the current speed. This is an
//! approximation, not a time-of-impact solve; whatever it misses is handled by
//! the axis-separated unstick against last tick's position.

use glam::Vec2;

use super::life;
use super::state::{Actor, ActorEvent};
use super::tick::Host;
use super::world::{Category, ObstacleId};
use crate::sign;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Push away from repel posts (harmless) and enemies (hurt)
pub fn push_from_hazards(actor: &mut Actor, host: &mut Host<'_>) {
    if let Some(id) = host
        .world
        .overlaps_at(actor.position, actor.half_extents, Category::REPEL)
    {
        push_away(actor, host, id);
        bounce_damage(actor, false, host);
    }

    if let Some(id) = host
        .world
        .overlaps_at(actor.position, actor.half_extents, Category::ENEMY)
    {
        push_away(actor, host, id);
        bounce_damage(actor, true, host);
    }
}

fn push_away(actor: &mut Actor, host: &Host<'_>, id: ObstacleId) {
    let Some(bounds) = host.world.bounds(id) else {
        return;
    };
    let away = (actor.position - bounds.center).normalize_or_zero();
    actor.velocity += away * actor.settings.actor.repel_push;
}

/// Resolve overlap with solid geometry after the position step
pub fn resolve_solids(actor: &mut Actor, host: &mut Host<'_>) {
    let half = actor.half_extents;
    if let Some(id) = host.world.overlaps_at(actor.position, half, Category::SOLID) {
        sweep_back(actor, host, id);
        if host.world.overlaps(actor.position, half, id) {
            unstick(actor, host, id);
        }
    }

    // A minimum-bounce floor can push a diagonal velocity over the cap
    actor.velocity = actor.velocity.clamp_length_max(actor.settings.actor.max_speed);
}

fn sweep_back(actor: &mut Actor, host: &mut Host<'_>, id: ObstacleId) {
    let half = actor.half_extents;
    let steps = actor.velocity.x.abs().max(actor.velocity.y.abs());
    let dir = Vec2::new(sign(actor.velocity.x), sign(actor.velocity.y));

    let mut i = 0u32;
    while (i as f32) < steps {
        let back = i as f32;

        let candidate = Vec2::new(actor.position.x - back * dir.x, actor.position.y);
        if !host.world.overlaps(candidate, half, id) {
            actor.position = candidate;
            bounce_axis(actor, host, Axis::X);
            return;
        }

        let candidate = Vec2::new(actor.position.x, actor.position.y - back * dir.y);
        if !host.world.overlaps(candidate, half, id) {
            actor.position = candidate;
            bounce_axis(actor, host, Axis::Y);
            return;
        }

        i += 1;
    }
}

fn bounce_axis(actor: &mut Actor, host: &mut Host<'_>, axis: Axis) {
    let restitution = actor.settings.actor.restitution;
    let min_bounce = actor.settings.actor.min_bounce_speed;

    let (vel, acc) = match axis {
        Axis::X => (&mut actor.velocity.x, &mut actor.acceleration.x),
        Axis::Y => (&mut actor.velocity.y, &mut actor.acceleration.y),
    };
    *vel *= -restitution;
    *acc = sign(*vel);
    if vel.abs() < min_bounce {
        *vel = min_bounce * sign(*vel);
    }

    bounce_damage(actor, false, host);
}

/// Still inside after the sweep: work out which axis moved us in and snap
/// that axis to the obstacle's near edge
fn unstick(actor: &mut Actor, host: &mut Host<'_>, id: ObstacleId) {
    let Some(bounds) = host.world.bounds(id) else {
        return;
    };
    let half = actor.half_extents;
    let prev = actor.previous_position;
    let pos = actor.position;

    if !host.world.overlaps(Vec2::new(prev.x, pos.y), half, id) {
        actor.position.x = if prev.x < pos.x {
            bounds.left() - half.x
        } else {
            bounds.right() + half.x
        };
        actor.velocity.x = 0.0;
    } else if !host.world.overlaps(Vec2::new(pos.x, prev.y), half, id) {
        actor.position.y = if prev.y < pos.y {
            bounds.top() - half.y
        } else {
            bounds.bottom() + half.y
        };
        actor.velocity.y = 0.0;
    }
}

/// Bounce feedback, rate limited by the sound cooldown. Damage (when asked
/// for) shares the same cooldown. Returns whether the gate was open.
pub fn bounce_damage(actor: &mut Actor, hurt: bool, host: &mut Host<'_>) -> bool {
    if actor.bounce_timeout > 0.0 {
        return false;
    }

    let sound = actor.pick_bounce_sound();
    actor.bounce_timeout = host.audio.duration(sound) * actor.settings.actor.bounce_cooldown_scale;
    host.audio.play(sound);
    actor.push_event(ActorEvent::Bounced { sound });

    if hurt {
        life::apply_damage(actor, 1, host);
    }
    true
}
