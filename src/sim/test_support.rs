//! Headless capability bundle for simulation tests

use super::scene::SceneLog;
use super::tick::Host;
use super::world::StaticWorld;
use crate::audio::SampleBank;
use crate::presentation::{HeadlessLight, HeadlessSprite};

#[derive(Default)]
pub struct Rig {
    pub world: StaticWorld,
    pub scene: SceneLog,
    pub sprite: HeadlessSprite,
    pub light: HeadlessLight,
    pub audio: SampleBank,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(&mut self) -> Host<'_> {
        Host {
            world: &self.world,
            scene: &mut self.scene,
            sprite: &mut self.sprite,
            light: &mut self.light,
            audio: &mut self.audio,
        }
    }
}
