//! Deterministic gameplay rules
//!
//! All rule logic lives here. This module must stay deterministic:
//! - Logical clock only (no wall time)
//! - Seeded RNG only
//! - Stable iteration order (pool slot index, timer ID)
//! - No physics, rendering or platform dependencies

pub mod collision;
pub mod command;
pub mod input;
pub mod pool;
pub mod schedule;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contact, Outcome, decide, resolve};
pub use command::{AnimationClip, BodySpec, EngineCommand};
pub use input::{DirectionKeys, MotionIntent, map_input};
pub use pool::{Collectible, CollectiblePool};
pub use schedule::{Fired, Scheduler, Timer, TimerAction, TimerId};
pub use score::ScoreTracker;
pub use state::{Facing, GamePhase, GameSession, Hazard, Player, SessionSnapshot};
pub use tick::{FrameInput, tick};
