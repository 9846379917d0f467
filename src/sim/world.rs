//! Collision geometry and queries
//!
//! Obstacles are axis-aligned boxes tagged with a category. The actor asks the
//! world whether its hitbox overlaps anything of a category at a candidate
//! position; `StaticWorld` answers by linear scan in insertion order.

use std::ops::BitOr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to an obstacle owned by the world
pub type ObstacleId = u32;

/// Collision category bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(u32);

impl Category {
    /// Walls and rocks: bounce off
    pub const SOLID: Category = Category(1 << 0);
    /// Pushes the actor away, no damage
    pub const REPEL: Category = Category(1 << 1);
    /// Pushes the actor away and hurts
    pub const ENEMY: Category = Category(1 << 2);

    #[inline]
    pub fn intersects(self, other: Category) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        Category(self.0 | rhs.0)
    }
}

/// Axis-aligned box stored as center + half extents (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Box from its top-left corner and size
    pub fn from_corner(x: f32, y: f32, width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) / 2.0;
        Self {
            center: Vec2::new(x, y) + half,
            half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }
}

/// Geometry queries the actor needs each tick
pub trait CollisionQuery {
    /// First obstacle of `mask` overlapped by a hitbox centered at `center`
    fn overlaps_at(&self, center: Vec2, half: Vec2, mask: Category) -> Option<ObstacleId>;

    /// Whether a hitbox centered at `center` overlaps one specific obstacle
    fn overlaps(&self, center: Vec2, half: Vec2, id: ObstacleId) -> bool;

    /// Current bounds of an obstacle
    fn bounds(&self, id: ObstacleId) -> Option<Aabb>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub category: Category,
    pub bounds: Aabb,
}

/// Flat list of obstacles, good enough for a single arena screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticWorld {
    obstacles: Vec<Obstacle>,
    next_id: ObstacleId,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category, bounds: Aabb) -> ObstacleId {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            category,
            bounds,
        });
        id
    }

    /// Move an obstacle (enemies wander); returns false for unknown ids
    pub fn move_to(&mut self, id: ObstacleId, center: Vec2) -> bool {
        match self.obstacles.iter_mut().find(|o| o.id == id) {
            Some(obstacle) => {
                obstacle.bounds.center = center;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let idx = self.obstacles.iter().position(|o| o.id == id)?;
        Some(self.obstacles.remove(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl CollisionQuery for StaticWorld {
    fn overlaps_at(&self, center: Vec2, half: Vec2, mask: Category) -> Option<ObstacleId> {
        let hitbox = Aabb::new(center, half);
        self.obstacles
            .iter()
            .find(|o| o.category.intersects(mask) && o.bounds.overlaps(&hitbox))
            .map(|o| o.id)
    }

    fn overlaps(&self, center: Vec2, half: Vec2, id: ObstacleId) -> bool {
        let hitbox = Aabb::new(center, half);
        self.obstacles
            .iter()
            .any(|o| o.id == id && o.bounds.overlaps(&hitbox))
    }

    fn bounds(&self, id: ObstacleId) -> Option<Aabb> {
        self.obstacles.iter().find(|o| o.id == id).map(|o| o.bounds)
    }
}
