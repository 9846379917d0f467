//! Ink Arena - player actor simulation for a wrap-around arena
//!
//! Core modules:
//! - `sim`: Deterministic actor simulation (motion, collisions, damage, attacks)
//! - `settings`: Data-driven tuning and arena configuration
//! - `audio`: Bounce sound capability
//! - `presentation`: Sprite and light capabilities

pub mod audio;
pub mod presentation;
pub mod settings;
pub mod sim;

pub use settings::{ActorTuning, ArenaSettings, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: f32 = 60.0;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1920.0;
    pub const ARENA_HEIGHT: f32 = 1080.0;
    /// Wrap triggers this fraction of a hitbox outside the arena
    pub const WRAP_MARGIN_FACTOR: f32 = 0.95;

    /// Actor movement defaults (pixels per tick)
    pub const MAX_SPEED: f32 = 9.0;
    pub const ACCEL_STEP: f32 = 0.46;
    pub const FRICTION: f32 = 0.30;
    pub const MIN_BOUNCE_SPEED: f32 = 2.0;
    pub const RESTITUTION: f32 = 0.9;
    /// Velocity kick away from repel/enemy hitboxes
    pub const REPEL_PUSH: f32 = 3.0;
    /// Max facing turn per tick (degrees)
    pub const TURN_RATE_DEG: f32 = 5.0;

    /// Sprite frame is 70x87, hitbox is inset by 24 on each axis
    pub const HITBOX_WIDTH: f32 = 46.0;
    pub const HITBOX_HEIGHT: f32 = 63.0;

    pub const INITIAL_HEALTH: i32 = 4;
    pub const INVULNERABILITY_SECS: f32 = 2.0;

    /// Attack timing (ticks)
    pub const ATTACK_WINDUP_TICKS: u32 = 20;
    pub const ATTACK_RECOVERY_TICKS: u32 = 8;
    /// Projectile spawn offset along facing
    pub const SHOT_OFFSET: f32 = 12.0;

    /// Death fade: sprite alpha eases toward 0 at this rate until below threshold
    pub const DEATH_FADE_RATE: f32 = 0.06;
    pub const DEATH_FADE_THRESHOLD: f32 = 0.1;
    pub const DEATH_GRACE_TICKS: u32 = 60;

    /// Light fade durations (seconds)
    pub const HURT_LIGHT_FADE_SECS: f32 = 0.3;
    pub const DEATH_LIGHT_FADE_SECS: f32 = 1.8;
    pub const HURT_ALPHA: f32 = 0.8;

    /// Sound duration -> bounce cooldown seconds
    pub const BOUNCE_COOLDOWN_SCALE: f32 = 0.00001;
    /// Real milliseconds -> cooldown seconds
    pub const BOUNCE_DECAY_SCALE: f32 = 0.001;
}

/// Move `value` toward `target` by at most `amount`, never overshooting
#[inline]
pub fn approach(value: f32, target: f32, amount: f32) -> f32 {
    if value < target {
        (value + amount).min(target)
    } else {
        (value - amount).max(target)
    }
}

/// Sign of `x` as -1, 0 or 1 (zero stays zero)
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Wrap an angle delta (degrees) into (-180, 180]
#[inline]
pub fn wrap_degrees(delta: f32) -> f32 {
    180.0 - (180.0 - delta).rem_euclid(360.0)
}

/// Screen-space angle of a vector in degrees (y points down, 90 = up)
#[inline]
pub fn angle_degrees(v: Vec2) -> f32 {
    (-v.y).atan2(v.x).to_degrees()
}

/// Rotate a screen-space vector by `degrees` (positive turns counter-clockwise on screen)
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_never_overshoots() {
        assert_eq!(approach(0.2, 0.0, 0.3), 0.0);
        assert_eq!(approach(-0.2, 0.0, 0.3), 0.0);
        assert!((approach(5.0, 0.0, 0.3) - 4.7).abs() < 1e-6);
        assert!((approach(-5.0, 0.0, 0.3) + 4.7).abs() < 1e-6);
    }

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn test_wrap_degrees_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert!((wrap_degrees(190.0) + 170.0).abs() < 1e-4);
        assert!((wrap_degrees(-270.0) - 90.0).abs() < 1e-4);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_matches_screen_angle() {
        // Facing right, rotate +90 -> facing up (negative y on screen)
        let up = rotate_degrees(Vec2::X, 90.0);
        assert!(up.x.abs() < 1e-5);
        assert!((up.y + 1.0).abs() < 1e-5);
        assert!((angle_degrees(up) - 90.0).abs() < 1e-4);

        let v = Vec2::new(0.0, -1.0);
        let turned = rotate_degrees(v, 5.0);
        assert!((angle_degrees(turned) - 95.0).abs() < 1e-3);
        assert!((turned.length() - 1.0).abs() < 1e-5);
    }
}
