//! Directional input to player motion
//!
//! Pure mapping from key state (plus the grounded flag from physics) to the
//! velocity and animation the engine should apply this frame.

use serde::{Deserialize, Serialize};

use super::command::{AnimationClip, EngineCommand};
use super::state::{Facing, GameSession};
use crate::tuning::Tuning;

/// Key state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// Read but unused
    pub down: bool,
}

/// Motion the player should take this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntent {
    pub vx: f32,
    /// `None` leaves vertical velocity to physics
    pub vy: Option<f32>,
    pub clip: AnimationClip,
    pub looping: bool,
}

impl MotionIntent {
    pub fn facing(&self) -> Facing {
        match self.clip {
            AnimationClip::Left => Facing::Left,
            AnimationClip::Right => Facing::Right,
            AnimationClip::Turn => Facing::Idle,
        }
    }
}

/// Left wins over right; jumping needs ground contact
pub fn map_input(keys: DirectionKeys, grounded: bool, tuning: &Tuning) -> MotionIntent {
    let (vx, clip, looping) = if keys.left {
        (-tuning.player_run_speed, AnimationClip::Left, true)
    } else if keys.right {
        (tuning.player_run_speed, AnimationClip::Right, true)
    } else {
        (0.0, AnimationClip::Turn, false)
    };

    let vy = (keys.up && grounded).then_some(tuning.player_jump_velocity);

    MotionIntent { vx, vy, clip, looping }
}

/// Map input and queue the resulting engine commands. No-op after game over.
pub fn apply_input(session: &mut GameSession, keys: DirectionKeys) {
    if session.is_over() {
        return;
    }

    let intent = map_input(keys, session.player.grounded, &session.tuning);
    session.player.facing = intent.facing();
    session.push(EngineCommand::SetPlayerVelocityX { vx: intent.vx });
    if let Some(vy) = intent.vy {
        session.push(EngineCommand::SetPlayerVelocityY { vy });
    }
    session.push(EngineCommand::PlayAnimation {
        clip: intent.clip,
        looping: intent.looping,
    });
}
