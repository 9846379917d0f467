//! Attack sequencer
//!
//! Two timed sequences share the `can_attack` gate, so at most one runs at a
//! time and neither can be interrupted once started.

use glam::Vec2;

use super::scene::SpawnRequest;
use super::state::{Actor, ActorEvent, AttackKind, AttackPhase};
use super::tick::Host;
use crate::presentation::Anim;
use crate::rotate_degrees;

/// Start an attack from this tick's button presses. Shot wins if both are pressed.
pub fn try_start(
    actor: &mut Actor,
    shoot: bool,
    burst: bool,
    host: &mut Host<'_>,
) -> Option<AttackKind> {
    if !actor.can_attack {
        return None;
    }

    let kind = if shoot {
        AttackKind::Shot
    } else if burst {
        AttackKind::Burst
    } else {
        return None;
    };

    actor.can_attack = false;
    if kind == AttackKind::Burst {
        actor.can_move = false;
    }
    host.sprite.play(Anim::Attack);
    actor.attack = AttackPhase::Windup {
        kind,
        remaining: actor.settings.actor.attack_windup_ticks,
    };
    actor.push_event(ActorEvent::AttackStarted { kind });
    log::debug!("{:?} started at tick {}", kind, actor.time_ticks);
    Some(kind)
}

/// Advance a running attack by one tick
pub fn advance(actor: &mut Actor, host: &mut Host<'_>) {
    match actor.attack {
        AttackPhase::Idle => {}

        AttackPhase::Windup { kind, remaining } if remaining > 0 => {
            actor.attack = AttackPhase::Windup {
                kind,
                remaining: remaining - 1,
            };
        }

        AttackPhase::Windup { kind, .. } => {
            if kind == AttackKind::Burst {
                actor.can_move = true;
            }
            let request = spawn_request(actor, kind);
            host.scene.spawn(request);
            actor.push_event(ActorEvent::Spawned(request));
            // The spawn tick is the first recovery tick
            actor.attack = AttackPhase::Recovery {
                kind,
                remaining: actor.settings.actor.attack_recovery_ticks.saturating_sub(1),
            };
        }

        AttackPhase::Recovery { kind, remaining } if remaining > 0 => {
            actor.attack = AttackPhase::Recovery {
                kind,
                remaining: remaining - 1,
            };
        }

        AttackPhase::Recovery { .. } => {
            actor.attack = AttackPhase::Idle;
            actor.can_attack = true;
            host.sprite.play(Anim::Move);
            actor.push_event(ActorEvent::AttackReady);
        }
    }
}

fn spawn_request(actor: &Actor, kind: AttackKind) -> SpawnRequest {
    match kind {
        AttackKind::Shot => {
            let offset = rotate_degrees(
                Vec2::new(actor.settings.actor.shot_offset, 0.0),
                actor.facing_angle,
            );
            SpawnRequest::Projectile {
                pos: actor.position + offset,
                direction: actor.facing_direction,
            }
        }
        AttackKind::Burst => SpawnRequest::AreaEffect {
            pos: actor.position,
            direction: actor.facing_direction,
        },
    }
}
