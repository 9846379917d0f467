//! Deterministic actor simulation
//!
//! All gameplay logic for the player actor lives here. This module must stay
//! pure and deterministic:
//! - One fixed tick per update, no wall-clock reads
//! - Seeded RNG only
//! - Rendering, audio and level ownership reached only through capability traits

pub mod attack;
pub mod collision;
pub mod life;
pub mod motion;
pub mod scene;
pub mod state;
pub mod tick;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use collision::bounce_damage;
pub use life::{apply_damage, begin_dying};
pub use scene::{Scene, SceneLog, SpawnRequest};
pub use state::{Actor, ActorEvent, AttackKind, AttackPhase, DeathPhase, LifePhase};
pub use tick::{AnalogStick, Host, TickInput, tick};
pub use world::{Aabb, Category, CollisionQuery, ObstacleId, StaticWorld};
