//! Game balance values
//!
//! Defaults mirror [`crate::consts`]. A JSON file may override any subset of
//! fields; missing keys keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field}: empty range [{min}, {max}]")]
    EmptyRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
}

/// Data-driven balance knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,

    // === Stars ===
    /// Number of pooled star slots
    pub pool_capacity: usize,
    pub initial_wave_delay_ms: u64,
    pub initial_wave_repeat: u32,
    pub respawn_delay_min_ms: u64,
    pub respawn_delay_max_ms: u64,
    pub score_per_pickup: u64,

    // === Bombs ===
    /// Score multiple that adds a bomb
    pub hazard_milestone: u64,
    pub hazard_spawn_y: f32,

    // === Spawned bodies (stars and bombs) ===
    pub spawn_speed_x: i32,
    pub spawn_speed_y: f32,
    pub spawn_bounce: f32,

    // === Player ===
    pub player_run_speed: f32,
    pub player_jump_velocity: f32,
    pub game_over_tint: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,

            pool_capacity: POOL_CAPACITY,
            initial_wave_delay_ms: INITIAL_WAVE_DELAY_MS,
            initial_wave_repeat: INITIAL_WAVE_REPEAT,
            respawn_delay_min_ms: RESPAWN_DELAY_MIN_MS,
            respawn_delay_max_ms: RESPAWN_DELAY_MAX_MS,
            score_per_pickup: SCORE_PER_PICKUP,

            hazard_milestone: HAZARD_MILESTONE,
            hazard_spawn_y: HAZARD_SPAWN_Y,

            spawn_speed_x: SPAWN_SPEED_X,
            spawn_speed_y: SPAWN_SPEED_Y,
            spawn_bounce: SPAWN_BOUNCE,

            player_run_speed: PLAYER_RUN_SPEED,
            player_jump_velocity: PLAYER_JUMP_VELOCITY,
            game_over_tint: GAME_OVER_TINT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning (pool {}, milestone {})",
            tuning.pool_capacity,
            tuning.hazard_milestone
        );
        Ok(tuning)
    }

    /// Reject values the rules cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.world_width <= 0.0 {
            return Err(TuningError::NonPositive { field: "world_width" });
        }
        if self.pool_capacity == 0 {
            return Err(TuningError::NonPositive { field: "pool_capacity" });
        }
        if self.score_per_pickup == 0 {
            return Err(TuningError::NonPositive { field: "score_per_pickup" });
        }
        if self.hazard_milestone == 0 {
            return Err(TuningError::NonPositive { field: "hazard_milestone" });
        }
        if self.spawn_speed_x < 0 {
            return Err(TuningError::EmptyRange {
                field: "spawn_speed_x",
                min: -i64::from(self.spawn_speed_x),
                max: i64::from(self.spawn_speed_x),
            });
        }
        if self.respawn_delay_min_ms > self.respawn_delay_max_ms {
            return Err(TuningError::EmptyRange {
                field: "respawn_delay_ms",
                min: self.respawn_delay_min_ms as i64,
                max: self.respawn_delay_max_ms as i64,
            });
        }
        Ok(())
    }

    /// Horizontal center of the world
    pub fn midpoint(&self) -> f32 {
        self.world_width / 2.0
    }
}
