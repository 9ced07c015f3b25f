//! Star Catcher - gameplay rules for a 2D star-collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic rule logic (spawns, pickups, bombs, game over)
//! - `tuning`: Data-driven game balance
//!
//! The engine (physics, rendering, animation playback) sits outside this
//! crate. It feeds [`sim::FrameInput`] in and drains [`sim::EngineCommand`]s out.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// World width (pixels)
    pub const WORLD_WIDTH: f32 = 800.0;

    /// Star pool size
    pub const POOL_CAPACITY: usize = 4;

    /// Initial wave: first firing after this delay, then every delay again
    pub const INITIAL_WAVE_DELAY_MS: u64 = 5000;
    /// Extra firings after the first (4 total)
    pub const INITIAL_WAVE_REPEAT: u32 = 3;

    /// Respawn / bomb delay range (inclusive, ms)
    pub const RESPAWN_DELAY_MIN_MS: u64 = 3000;
    pub const RESPAWN_DELAY_MAX_MS: u64 = 5000;

    /// Points per star
    pub const SCORE_PER_PICKUP: u64 = 10;
    /// A bomb is added every time the score hits a multiple of this
    pub const HAZARD_MILESTONE: u64 = 30;

    /// Spawned bodies get a lateral speed in [-SPAWN_SPEED_X, SPAWN_SPEED_X]
    pub const SPAWN_SPEED_X: i32 = 200;
    /// Initial downward drift of spawned bodies
    pub const SPAWN_SPEED_Y: f32 = 20.0;
    /// Perfectly elastic
    pub const SPAWN_BOUNCE: f32 = 1.0;
    /// Bombs appear just below the top edge
    pub const HAZARD_SPAWN_Y: f32 = 16.0;

    /// Player movement
    pub const PLAYER_RUN_SPEED: f32 = 160.0;
    pub const PLAYER_JUMP_VELOCITY: f32 = -330.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 450.0;

    /// Player tint after touching a bomb
    pub const GAME_OVER_TINT: u32 = 0xff0000;

    /// Score text anchor (screen coordinates)
    pub const SCORE_TEXT_X: f32 = 16.0;
    pub const SCORE_TEXT_Y: f32 = 16.0;

    /// Asset keys the engine loads at startup
    pub mod assets {
        pub const SKY: &str = "sky";
        pub const GROUND: &str = "ground";
        pub const STAR: &str = "star";
        pub const BOMB: &str = "bomb";
        pub const DUDE: &str = "dude";

        /// Everything the engine must preload
        pub const ALL: [&str; 5] = [SKY, GROUND, STAR, BOMB, DUDE];
    }
}
