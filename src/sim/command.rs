//! Requests the rule core makes of the engine
//!
//! The core never touches physics bodies, text or animations directly. It
//! queues commands here and the engine glue applies them after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Named player animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationClip {
    Left,
    /// Idle / facing camera
    Turn,
    Right,
}

impl AnimationClip {
    /// Engine-side animation key
    pub fn key(&self) -> &'static str {
        match self {
            AnimationClip::Left => "left",
            AnimationClip::Turn => "turn",
            AnimationClip::Right => "right",
        }
    }
}

/// Physics properties shared by every spawned star and bomb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounce: f32,
    pub collide_world_bounds: bool,
    pub allow_gravity: bool,
}

/// A single request to the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum EngineCommand {
    /// Show and enable the pooled star in `slot`
    EnableCollectible {
        slot: usize,
        texture: &'static str,
        body: BodySpec,
    },
    /// Hide and disable the pooled star in `slot`
    DisableCollectible { slot: usize },
    /// Create a new bomb body
    SpawnHazard {
        id: u32,
        texture: &'static str,
        body: BodySpec,
    },
    SetPlayerVelocityX { vx: f32 },
    SetPlayerVelocityY { vy: f32 },
    PlayAnimation { clip: AnimationClip, looping: bool },
    SetPlayerTint { color: u32 },
    /// Halt the whole physics world
    PausePhysics,
    /// Replace the score label
    SetScoreText { text: String, x: f32, y: f32 },
}
