//! Sprite and light capabilities
//!
//! The actor drives its visuals through these traits and never owns their
//! update loops. The `Headless*` types record the last command for tests and
//! the native demo.

use serde::{Deserialize, Serialize};

/// Closed set of actor animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anim {
    #[default]
    Move,
    Attack,
}

pub trait Sprite {
    fn set_alpha(&mut self, alpha: f32);
    /// Rotation in degrees
    fn set_angle(&mut self, degrees: f32);
    fn play(&mut self, anim: Anim);
}

pub trait Light {
    fn fade_in(&mut self, secs: f32);
    fn fade_out(&mut self, secs: f32);
}

/// Sprite that just remembers what it was told
#[derive(Debug, Clone)]
pub struct HeadlessSprite {
    pub alpha: f32,
    pub angle: f32,
    pub anim: Anim,
    /// Every animation change, oldest first
    pub anim_history: Vec<Anim>,
}

impl Default for HeadlessSprite {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            angle: 0.0,
            anim: Anim::Move,
            anim_history: Vec::new(),
        }
    }
}

impl Sprite for HeadlessSprite {
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    fn play(&mut self, anim: Anim) {
        self.anim = anim;
        self.anim_history.push(anim);
    }
}

/// Light fade direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fade {
    In(f32),
    Out(f32),
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessLight {
    pub fades: Vec<Fade>,
}

impl HeadlessLight {
    pub fn last_fade(&self) -> Option<Fade> {
        self.fades.last().copied()
    }
}

impl Light for HeadlessLight {
    fn fade_in(&mut self, secs: f32) {
        self.fades.push(Fade::In(secs));
    }

    fn fade_out(&mut self, secs: f32) {
        self.fades.push(Fade::Out(secs));
    }
}
