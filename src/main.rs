//! Star Catcher headless runner
//!
//! Drives a session with a scripted autopilot instead of a real engine and
//! prints the final state as JSON.
//!
//! Usage: `star-catcher [tuning.json] [--seed N] [--frames N]`

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use glam::Vec2;

use star_catcher::Tuning;
use star_catcher::consts::assets;
use star_catcher::sim::{Contact, DirectionKeys, EngineCommand, FrameInput, GameSession, tick};

/// 60 Hz in whole milliseconds
const FRAME_MS: u64 = 16;
/// Frames a star stays on screen before the autopilot grabs it
const GRAB_AFTER_FRAMES: u64 = 45;
/// Frames between direction changes
const TURN_EVERY_FRAMES: u64 = 150;

struct Args {
    tuning_path: Option<String>,
    seed: u64,
    frames: u64,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        tuning_path: None,
        seed: 12345,
        frames: 60 * 120,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = value.parse().with_context(|| format!("bad seed: {value}"))?;
            }
            "--frames" => {
                let value = iter.next().context("--frames needs a value")?;
                args.frames = value.parse().with_context(|| format!("bad frame count: {value}"))?;
            }
            flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
            path => args.tuning_path = Some(path.to_string()),
        }
    }
    Ok(args)
}

fn load_tuning(path: Option<&str>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    Tuning::from_json(&json).with_context(|| format!("loading tuning from {path}"))
}

/// Stand-in for the engine side: tracks what the core asked for and fakes
/// contacts on a fixed script.
struct Autopilot {
    frame: u64,
    player_x: f32,
    vx: f32,
    /// Slot -> frame it was enabled
    stars: HashMap<usize, u64>,
    bombs: Vec<u32>,
    paused: bool,
}

impl Autopilot {
    fn new(start_x: f32) -> Self {
        Self {
            frame: 0,
            player_x: start_x,
            vx: 0.0,
            stars: HashMap::new(),
            bombs: Vec::new(),
            paused: false,
        }
    }

    fn apply(&mut self, commands: Vec<EngineCommand>) {
        for command in commands {
            match command {
                EngineCommand::EnableCollectible { slot, .. } => {
                    self.stars.insert(slot, self.frame);
                }
                EngineCommand::DisableCollectible { slot } => {
                    self.stars.remove(&slot);
                }
                EngineCommand::SpawnHazard { id, .. } => self.bombs.push(id),
                EngineCommand::SetPlayerVelocityX { vx } => self.vx = vx,
                EngineCommand::PausePhysics => self.paused = true,
                EngineCommand::SetScoreText { text, .. } => log::info!("{text}"),
                EngineCommand::PlayAnimation { clip, looping } => {
                    log::trace!("Animation {} (loop {looping})", clip.key());
                }
                EngineCommand::SetPlayerVelocityY { .. } | EngineCommand::SetPlayerTint { .. } => {}
            }
        }
    }

    fn next_frame(&mut self, world_width: f32) -> FrameInput {
        self.frame += 1;
        if !self.paused {
            let dt = FRAME_MS as f32 / 1000.0;
            self.player_x = (self.player_x + self.vx * dt).clamp(0.0, world_width);
        }

        let heading_left = (self.frame / TURN_EVERY_FRAMES) % 2 == 1;
        let keys = DirectionKeys {
            left: heading_left,
            right: !heading_left,
            ..Default::default()
        };

        let mut contacts: Vec<Contact> = self
            .stars
            .iter()
            .filter(|(_, since)| self.frame - **since >= GRAB_AFTER_FRAMES)
            .map(|(slot, _)| Contact::Collectible { slot: *slot })
            .collect();
        contacts.sort_by_key(|c| match c {
            Contact::Collectible { slot } => *slot,
            Contact::Hazard { .. } => usize::MAX,
        });

        // Dodge the first bomb, walk into the second
        if let Some(&id) = self.bombs.get(1) {
            contacts.push(Contact::Hazard { id });
        }

        FrameInput {
            keys,
            grounded: true,
            player_pos: Some(Vec2::new(self.player_x, star_catcher::consts::PLAYER_START_Y)),
            contacts,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    log::debug!("Engine preloads {:?}", assets::ALL);
    let tuning = load_tuning(args.tuning_path.as_deref())?;
    let world_width = tuning.world_width;

    let mut session = GameSession::new(args.seed, tuning);
    let mut pilot = Autopilot::new(session.player.pos.x);
    pilot.apply(session.drain_commands());

    for _ in 0..args.frames {
        let frame = pilot.next_frame(world_width);
        tick(&mut session, &frame, FRAME_MS);
        pilot.apply(session.drain_commands());
        if session.is_over() {
            break;
        }
    }

    log::info!(
        "Finished after {} frames ({} ms): {:?}, score {}",
        pilot.frame,
        session.scheduler.now_ms(),
        session.phase,
        session.score.total()
    );

    let snapshot =
        serde_json::to_string_pretty(&session.snapshot()).context("serializing snapshot")?;
    println!("{snapshot}");
    Ok(())
}
