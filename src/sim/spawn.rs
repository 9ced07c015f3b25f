//! Spawn rules for stars and bombs
//!
//! Timer lines:
//! - Initial wave: repeating, armed at session start
//! - Respawn: one-shot after every pickup
//! - Bomb: one-shot after a milestone pickup, same delay as its respawn

use glam::Vec2;
use rand::Rng;

use super::command::{BodySpec, EngineCommand};
use super::schedule::{TimerAction, TimerId};
use super::state::{GameSession, Hazard};
use crate::consts::assets;

/// Pick a delay for a respawn / bomb timer
pub fn respawn_delay<R: Rng>(rng: &mut R, min_ms: u64, max_ms: u64) -> u64 {
    rng.random_range(min_ms..=max_ms)
}

/// Schedule the one-shot star respawn. Returns the delay used.
pub fn schedule_respawn(session: &mut GameSession) -> (TimerId, u64) {
    let delay = respawn_delay(
        &mut session.rng,
        session.tuning.respawn_delay_min_ms,
        session.tuning.respawn_delay_max_ms,
    );
    let id = session.scheduler.schedule_once(delay, TimerAction::ActivateCollectible);
    (id, delay)
}

/// Schedule a bomb after `delay_ms`
pub fn schedule_hazard(session: &mut GameSession, delay_ms: u64) -> TimerId {
    log::debug!("Bomb scheduled in {delay_ms} ms");
    session.scheduler.schedule_once(delay_ms, TimerAction::SpawnHazard)
}

/// Run a fired timer's action. Ignored once the game is over.
pub fn fire(session: &mut GameSession, action: TimerAction) {
    if session.is_over() {
        log::trace!("Ignoring {action:?} after game over");
        return;
    }
    match action {
        TimerAction::ActivateCollectible => {
            activate_collectible(session);
        }
        TimerAction::SpawnHazard => {
            spawn_hazard(session);
        }
    }
}

/// Enable one star at the left or right world edge (coin flip), top of screen
pub fn activate_collectible(session: &mut GameSession) -> Option<usize> {
    let x = if session.rng.random_bool(0.5) {
        0.0
    } else {
        session.tuning.world_width
    };

    let slot = session.pool.activate_at(x, 0.0, &mut session.rng, &session.tuning)?;
    let body = session.pool.get(slot)?.body();
    log::debug!("Star {slot} in at x={x} vx={}", body.vel.x);
    session.push(EngineCommand::EnableCollectible {
        slot,
        texture: assets::STAR,
        body,
    });
    Some(slot)
}

/// Create a bomb on the half of the world the player is not in
pub fn spawn_hazard(session: &mut GameSession) -> u32 {
    let tuning = &session.tuning;
    let mid = tuning.midpoint() as i32;
    let width = tuning.world_width as i32;

    // Side test and ranges share the same whole-pixel midpoint
    let x = if session.player.pos.x < mid as f32 {
        session.rng.random_range(mid..=width)
    } else {
        session.rng.random_range(0..=mid)
    };
    let x = x as f32;
    let vx = session
        .rng
        .random_range(-tuning.spawn_speed_x..=tuning.spawn_speed_x) as f32;

    let body = BodySpec {
        pos: Vec2::new(x, tuning.hazard_spawn_y),
        vel: Vec2::new(vx, tuning.spawn_speed_y),
        bounce: tuning.spawn_bounce,
        collide_world_bounds: true,
        allow_gravity: false,
    };

    let id = session.next_hazard_id();
    session.hazards.push(Hazard {
        id,
        pos: body.pos,
        vel: body.vel,
    });
    log::debug!("Bomb {id} in at x={x} (player x={})", session.player.pos.x);
    session.push(EngineCommand::SpawnHazard {
        id,
        texture: assets::BOMB,
        body,
    });
    id
}
