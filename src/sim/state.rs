//! Session state and lifecycle
//!
//! A [`GameSession`] owns everything one play-through needs: pool, score,
//! bombs, timers, RNG and the outgoing command buffer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::command::EngineCommand;
use super::pool::{Collectible, CollectiblePool};
use super::schedule::{Scheduler, Timer, TimerAction};
use super::score::ScoreTracker;
use crate::consts::*;
use crate::tuning::Tuning;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player touched a bomb (terminal)
    GameOver,
}

/// Horizontal facing, follows the last input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Idle,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Last position reported by physics
    pub pos: Vec2,
    pub facing: Facing,
    /// Standing on something (reported by physics)
    pub grounded: bool,
    pub alive: bool,
    pub tint: Option<u32>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            facing: Facing::Idle,
            grounded: false,
            alive: true,
            tint: None,
        }
    }
}

/// A bouncing bomb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    /// Spawn position
    pub pos: Vec2,
    /// Spawn velocity
    pub vel: Vec2,
}

/// Serializable view of a session for logging and debugging
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub time_ms: u64,
    pub player: Player,
    pub collectibles: Vec<Collectible>,
    pub hazards: Vec<Hazard>,
    pub timers: Vec<Timer>,
}

/// One play-through of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub pool: CollectiblePool,
    pub score: ScoreTracker,
    /// Bombs in creation order
    pub hazards: Vec<Hazard>,
    pub scheduler: Scheduler,
    pub(crate) rng: Pcg32,
    commands: Vec<EngineCommand>,
    next_hazard_id: u32,
}

impl GameSession {
    /// Start a session with a seeded RNG
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Start a session with a caller-supplied RNG stream
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Self {
        let mut session = Self {
            pool: CollectiblePool::new(tuning.pool_capacity),
            tuning,
            phase: GamePhase::Playing,
            player: Player::default(),
            score: ScoreTracker::new(),
            hazards: Vec::new(),
            scheduler: Scheduler::new(),
            rng,
            commands: Vec::new(),
            next_hazard_id: 1,
        };
        session.start();
        session
    }

    /// Arm the opening timers and show the initial HUD
    fn start(&mut self) {
        self.scheduler.schedule_repeating(
            self.tuning.initial_wave_delay_ms,
            self.tuning.initial_wave_repeat,
            TimerAction::ActivateCollectible,
        );
        self.push_score_text();
        log::info!(
            "Session started: {} star slots, first wave in {} ms",
            self.pool.capacity(),
            self.tuning.initial_wave_delay_ms
        );
    }

    /// Full scene reset: fresh pool, score and bombs, pending timers dropped
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.player = Player::default();
        self.pool = CollectiblePool::new(self.tuning.pool_capacity);
        self.score = ScoreTracker::new();
        self.hazards.clear();
        self.scheduler = Scheduler::new();
        self.commands.clear();
        self.next_hazard_id = 1;
        self.start();
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take every command queued since the last drain
    pub fn drain_commands(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands queued but not yet drained
    pub fn pending_commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    pub(crate) fn push(&mut self, command: EngineCommand) {
        self.commands.push(command);
    }

    pub(crate) fn push_score_text(&mut self) {
        let text = self.score.text();
        self.push(EngineCommand::SetScoreText {
            text,
            x: SCORE_TEXT_X,
            y: SCORE_TEXT_Y,
        });
    }

    /// Allocate a new bomb ID
    pub(crate) fn next_hazard_id(&mut self) -> u32 {
        let id = self.next_hazard_id;
        self.next_hazard_id += 1;
        id
    }

    pub fn hazard(&self, id: u32) -> Option<&Hazard> {
        self.hazards.iter().find(|h| h.id == id)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score.total(),
            time_ms: self.scheduler.now_ms(),
            player: self.player.clone(),
            collectibles: self.pool.iter().cloned().collect(),
            hazards: self.hazards.clone(),
            timers: self.scheduler.pending().to_vec(),
        }
    }
}
