//! Fixed-capacity star pool
//!
//! Slots are created once per session and recycled. Activation always takes
//! the lowest-indexed inactive slot so replays stay deterministic.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::command::BodySpec;
use crate::tuning::Tuning;

/// One pooled star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub slot: usize,
    pub active: bool,
    pub pos: Vec2,
    /// Velocity at activation time (physics owns it afterwards)
    pub vel: Vec2,
    pub bounce: f32,
}

impl Collectible {
    fn new(slot: usize) -> Self {
        Self {
            slot,
            active: false,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            bounce: 0.0,
        }
    }

    /// Physics body for the engine, valid only while active
    pub fn body(&self) -> BodySpec {
        BodySpec {
            pos: self.pos,
            vel: self.vel,
            bounce: self.bounce,
            collide_world_bounds: true,
            allow_gravity: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectiblePool {
    slots: Vec<Collectible>,
}

impl CollectiblePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(Collectible::new).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|c| c.active).count()
    }

    pub fn get(&self, slot: usize) -> Option<&Collectible> {
        self.slots.get(slot)
    }

    pub fn is_active(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(|c| c.active)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.slots.iter()
    }

    /// Enable the first free slot at (x, y) with a random lateral drift.
    ///
    /// Returns `None` (and changes nothing) when every slot is in use.
    pub fn activate_at<R: Rng>(
        &mut self,
        x: f32,
        y: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<usize> {
        let capacity = self.slots.len();
        let Some(star) = self.slots.iter_mut().find(|c| !c.active) else {
            log::debug!("Star pool exhausted ({capacity} slots busy)");
            return None;
        };

        let vx = rng.random_range(-tuning.spawn_speed_x..=tuning.spawn_speed_x) as f32;
        star.active = true;
        star.pos = Vec2::new(x, y);
        star.vel = Vec2::new(vx, tuning.spawn_speed_y);
        star.bounce = tuning.spawn_bounce;
        Some(star.slot)
    }

    /// Disable a slot. Returns false if it was already inactive or out of range.
    pub fn deactivate(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(star) if star.active => {
                star.active = false;
                true
            }
            _ => false,
        }
    }
}
