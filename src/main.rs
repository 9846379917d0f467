//! Ink Arena entry point
//!
//! Runs the actor simulation headless against a small scripted level.
//! Usage: `ink-arena [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use ink_arena::Settings;
    use ink_arena::audio::SampleBank;
    use ink_arena::presentation::{HeadlessLight, HeadlessSprite};
    use ink_arena::sim::{
        Aabb, Actor, ActorEvent, Category, CollisionQuery, Host, SceneLog, StaticWorld, tick,
    };

    env_logger::init();
    log::info!("Ink Arena (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("{}; falling back to default settings", e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let tick_rate = settings.arena.tick_rate;
    let frame_ms = 1000.0 / tick_rate;
    let center = Vec2::new(settings.arena.width, settings.arena.height) / 2.0;

    // Level: walls on both sides, a repel post and one wandering enemy
    let mut world = StaticWorld::new();
    world.add(
        Category::SOLID,
        Aabb::from_corner(center.x + 300.0, center.y - 200.0, 80.0, 400.0),
    );
    world.add(
        Category::SOLID,
        Aabb::from_corner(center.x - 380.0, center.y - 200.0, 80.0, 400.0),
    );
    world.add(
        Category::REPEL,
        Aabb::new(center + Vec2::new(0.0, 180.0), Vec2::splat(30.0)),
    );
    let enemy = world.add(
        Category::ENEMY,
        Aabb::new(center + Vec2::new(-200.0, -150.0), Vec2::splat(24.0)),
    );

    let mut scene = SceneLog::default();
    let mut sprite = HeadlessSprite::default();
    let mut light = HeadlessLight::default();
    let mut audio = SampleBank::new();

    let mut actor = Actor::new(center, settings);
    actor.attach(&mut scene, &mut sprite);

    let total_ticks = (tick_rate * 20.0) as u32;
    let mut bounces = 0u32;
    let mut hits = 0u32;

    for t in 0..total_ticks {
        let input = scripted_input(t);

        // Enemy drifts toward the actor
        if let Some(bounds) = world.bounds(enemy) {
            let step = (actor.position - bounds.center).normalize_or_zero() * 1.5;
            world.move_to(enemy, bounds.center + step);
        }

        let mut host = Host {
            world: &world,
            scene: &mut scene,
            sprite: &mut sprite,
            light: &mut light,
            audio: &mut audio,
        };
        tick(&mut actor, &input, &mut host, frame_ms);

        for event in actor.drain_events() {
            match event {
                ActorEvent::Bounced { .. } => bounces += 1,
                ActorEvent::Damaged { health } => {
                    hits += 1;
                    log::info!("tick {}: hit, health {}", t, health);
                }
                ActorEvent::GameOver => log::info!("tick {}: game over", t),
                other => log::debug!("tick {}: {:?}", t, other),
            }
        }

        if t % (tick_rate as u32).max(1) == 0 {
            log::debug!(
                "tick {}: pos {:?} vel {:?} facing {:.1}",
                t,
                actor.position,
                actor.velocity,
                actor.facing_angle
            );
        }

        if actor.is_removed() {
            break;
        }
    }

    println!("Ink Arena run finished after {} ticks", actor.time_ticks);
    println!("  position:     {:?}", actor.position);
    println!("  health:       {}", actor.health);
    println!("  hits taken:   {}", hits);
    println!("  bounces:      {}", bounces);
    println!("  projectiles:  {}", scene.projectiles());
    println!("  area bursts:  {}", scene.area_effects());
    println!("  game over:    {}", scene.game_over_count > 0);
}

/// Fixed input script: run right, curve with the stick, then circle
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(t: u32) -> ink_arena::sim::TickInput {
    use ink_arena::sim::{AnalogStick, TickInput};

    let mut input = TickInput::default();
    match t {
        0..=89 => input.right = true,
        90..=179 => input.stick = AnalogStick::new(-0.7, 0.4),
        180..=299 => {
            input.left = true;
            input.up = true;
        }
        300..=599 => {
            let phase = t as f32 * 0.05;
            input.stick = AnalogStick::new(phase.cos(), phase.sin());
        }
        _ => {}
    }
    input.shoot = t % 45 == 10;
    input.burst = t % 120 == 60;
    input
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the host game
}
