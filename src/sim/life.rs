//! Damage, invulnerability and death
//!
//! `Healthy -> Invulnerable -> Healthy` after each survivable hit, and
//! `Healthy | Invulnerable -> Dying -> Removed` once health runs out. Waits are
//! counted in ticks and resume on the tick after the counter runs out.

use super::state::{Actor, ActorEvent, DeathPhase, LifePhase};
use super::tick::Host;
use crate::lerp;

/// Apply damage unless the actor is invulnerable or already dead.
/// Returns whether health changed.
pub fn apply_damage(actor: &mut Actor, amount: i32, host: &mut Host<'_>) -> bool {
    if actor.is_invulnerable() || actor.dead {
        return false;
    }

    actor.health -= amount;
    actor.push_event(ActorEvent::Damaged {
        health: actor.health,
    });

    if actor.health > 0 {
        start_invulnerability(actor, host);
    } else {
        begin_dying(actor, host);
    }
    true
}

fn start_invulnerability(actor: &mut Actor, host: &mut Host<'_>) {
    let ticks = actor.settings.invulnerability_ticks();
    actor.life = LifePhase::Invulnerable { remaining: ticks };
    actor.sprite_alpha = actor.settings.actor.hurt_alpha;
    host.sprite.set_alpha(actor.sprite_alpha);
    host.light.fade_out(actor.settings.actor.hurt_light_fade_secs);
    log::debug!(
        "actor hit, health {} (invulnerable for {} ticks)",
        actor.health,
        ticks
    );
}

/// Start the death sequence. Only the first call does anything.
pub fn begin_dying(actor: &mut Actor, host: &mut Host<'_>) -> bool {
    if actor.dead {
        return false;
    }

    actor.dead = true;
    actor.life = LifePhase::Dying(DeathPhase::Fading);
    host.light.fade_out(actor.settings.actor.death_light_fade_secs);
    // The fade starts on the tick of death
    fade_step(actor, host);
    actor.push_event(ActorEvent::Died);
    log::info!("actor died at tick {}", actor.time_ticks);
    true
}

/// Ease alpha toward zero while above the threshold. False once faded out.
fn fade_step(actor: &mut Actor, host: &mut Host<'_>) -> bool {
    let tuning = &actor.settings.actor;
    if actor.sprite_alpha <= tuning.death_fade_threshold {
        return false;
    }
    actor.sprite_alpha = lerp(actor.sprite_alpha, 0.0, tuning.death_fade_rate);
    host.sprite.set_alpha(actor.sprite_alpha);
    true
}

/// Advance the life state machine by one tick
pub fn advance(actor: &mut Actor, host: &mut Host<'_>) {
    match actor.life {
        LifePhase::Healthy | LifePhase::Removed => {}

        LifePhase::Invulnerable { remaining } if remaining > 0 => {
            actor.life = LifePhase::Invulnerable {
                remaining: remaining - 1,
            };
        }

        LifePhase::Invulnerable { .. } => {
            actor.life = LifePhase::Healthy;
            actor.sprite_alpha = 1.0;
            host.sprite.set_alpha(actor.sprite_alpha);
            host.light.fade_in(actor.settings.actor.hurt_light_fade_secs);
            actor.push_event(ActorEvent::Vulnerable);
        }

        LifePhase::Dying(DeathPhase::Fading) => {
            if !fade_step(actor, host) {
                actor.life = LifePhase::Dying(DeathPhase::Grace {
                    remaining: actor.settings.actor.death_grace_ticks,
                });
            }
        }

        LifePhase::Dying(DeathPhase::Grace { remaining }) if remaining > 0 => {
            actor.life = LifePhase::Dying(DeathPhase::Grace {
                remaining: remaining - 1,
            });
        }

        LifePhase::Dying(DeathPhase::Grace { .. }) => {
            host.scene.notify_game_over();
            host.scene.detach_light();
            host.scene.remove_actor();
            actor.life = LifePhase::Removed;
            actor.push_event(ActorEvent::GameOver);
            log::info!("game over after {} ticks", actor.time_ticks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::presentation::Fade;
    use crate::sim::test_support::Rig;
    use glam::Vec2;

    #[test]
    fn test_damage_enters_invulnerability() {
        let mut rig = Rig::new();
        let mut actor = Actor::new(Vec2::ZERO, Settings::default());

        assert!(apply_damage(&mut actor, 1, &mut rig.host()));
        assert_eq!(actor.health, 3);
        assert_eq!(actor.life, LifePhase::Invulnerable { remaining: 120 });
        assert_eq!(rig.sprite.alpha, 0.8);
        assert_eq!(rig.light.last_fade(), Some(Fade::Out(0.3)));
    }

    #[test]
    fn test_invulnerable_ignores_damage() {
        let mut rig = Rig::new();
        let mut actor = Actor::new(Vec2::ZERO, Settings::default());
        actor.life = LifePhase::Invulnerable { remaining: 5 };

        assert!(!apply_damage(&mut actor, 3, &mut rig.host()));
        assert_eq!(actor.health, 4);
        assert!(rig.light.fades.is_empty());
    }

    #[test]
    fn test_recovery_restores_visuals() {
        let mut rig = Rig::new();
        let mut actor = Actor::new(Vec2::ZERO, Settings::default());
        actor.life = LifePhase::Invulnerable { remaining: 1 };
        actor.sprite_alpha = 0.8;

        advance(&mut actor, &mut rig.host());
        assert!(actor.is_invulnerable());
        advance(&mut actor, &mut rig.host());
        assert_eq!(actor.life, LifePhase::Healthy);
        assert_eq!(rig.sprite.alpha, 1.0);
        assert_eq!(rig.light.last_fade(), Some(Fade::In(0.3)));
        assert_eq!(actor.drain_events(), vec![ActorEvent::Vulnerable]);
    }

    #[test]
    fn test_fatal_damage_starts_dying() {
        let mut rig = Rig::new();
        let mut actor = Actor::new(Vec2::ZERO, Settings::default());
        actor.health = 2;

        assert!(apply_damage(&mut actor, 5, &mut rig.host()));
        assert_eq!(actor.health, -3);
        assert!(actor.is_dead());
        assert_eq!(actor.life, LifePhase::Dying(DeathPhase::Fading));
        assert_eq!(rig.light.last_fade(), Some(Fade::Out(1.8)));

        // Dead actors take no further damage
        assert!(!apply_damage(&mut actor, 1, &mut rig.host()));
        assert_eq!(actor.health, -3);
    }

    #[test]
    fn test_death_trigger_is_idempotent() {
        let mut rig = Rig::new();
        let mut actor = Actor::new(Vec2::ZERO, Settings::default());

        assert!(begin_dying(&mut actor, &mut rig.host()));
        assert!(!begin_dying(&mut actor, &mut rig.host()));
        assert_eq!(rig.light.fades, vec![Fade::Out(1.8)]);

        let mut ticks = 0;
        while actor.life != LifePhase::Removed {
            advance(&mut actor, &mut rig.host());
            ticks += 1;
            assert!(ticks < 500);
        }
        // A late second trigger doesn't restart anything
        assert!(!begin_dying(&mut actor, &mut rig.host()));
        for _ in 0..200 {
            advance(&mut actor, &mut rig.host());
        }

        let died = actor
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, ActorEvent::Died | ActorEvent::GameOver))
            .count();
        assert_eq!(died, 2);
        assert_eq!(rig.scene.game_over_count, 1);
        assert!(rig.scene.actor_removed);
    }

    #[test]
    fn test_death_fade_then_grace() {
        let mut rig = Rig::new();
        let mut actor = Actor::new(Vec2::ZERO, Settings::default());
        begin_dying(&mut actor, &mut rig.host());
        assert!((actor.sprite_alpha - 0.94).abs() < 1e-6);
        assert_eq!(rig.sprite.alpha, actor.sprite_alpha);

        // 0.94^38 < 0.1 < 0.94^37; the first step happened on the death tick
        for _ in 0..37 {
            advance(&mut actor, &mut rig.host());
        }
        assert!(actor.sprite_alpha <= 0.1);
        assert_eq!(actor.life, LifePhase::Dying(DeathPhase::Fading));

        advance(&mut actor, &mut rig.host());
        assert_eq!(
            actor.life,
            LifePhase::Dying(DeathPhase::Grace { remaining: 60 })
        );

        for _ in 0..60 {
            advance(&mut actor, &mut rig.host());
        }
        assert_eq!(rig.scene.game_over_count, 0);
        advance(&mut actor, &mut rig.host());
        assert_eq!(actor.life, LifePhase::Removed);
        assert_eq!(rig.scene.game_over_count, 1);
    }
}
