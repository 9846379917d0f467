//! Scene capability: the level that owns the actor
//!
//! The actor asks the scene to spawn attack entities and, at the end of its
//! death sequence, to end the run and drop it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Entity the actor wants spawned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnRequest {
    /// Ranged shot travelling along `direction`
    Projectile { pos: Vec2, direction: Vec2 },
    /// Area burst centered on the actor
    AreaEffect { pos: Vec2, direction: Vec2 },
}

impl SpawnRequest {
    pub fn pos(&self) -> Vec2 {
        match *self {
            SpawnRequest::Projectile { pos, .. } | SpawnRequest::AreaEffect { pos, .. } => pos,
        }
    }
}

pub trait Scene {
    fn spawn(&mut self, request: SpawnRequest);
    fn notify_game_over(&mut self);
    /// Register the actor's light with the scene's light list
    fn attach_light(&mut self);
    fn detach_light(&mut self);
    /// Drop the actor from the active entity list
    fn remove_actor(&mut self);
}

/// Scene that records requests instead of running entities
#[derive(Debug, Clone, Default)]
pub struct SceneLog {
    pub spawned: Vec<SpawnRequest>,
    pub game_over_count: u32,
    pub light_attached: bool,
    pub actor_removed: bool,
}

impl SceneLog {
    pub fn projectiles(&self) -> usize {
        self.spawned
            .iter()
            .filter(|s| matches!(s, SpawnRequest::Projectile { .. }))
            .count()
    }

    pub fn area_effects(&self) -> usize {
        self.spawned
            .iter()
            .filter(|s| matches!(s, SpawnRequest::AreaEffect { .. }))
            .count()
    }
}

impl Scene for SceneLog {
    fn spawn(&mut self, request: SpawnRequest) {
        self.spawned.push(request);
    }

    fn notify_game_over(&mut self) {
        self.game_over_count += 1;
    }

    fn attach_light(&mut self) {
        self.light_attached = true;
    }

    fn detach_light(&mut self) {
        self.light_attached = false;
    }

    fn remove_actor(&mut self) {
        self.actor_removed = true;
    }
}
