//! Per-frame update
//!
//! One call per engine frame. Order within a frame:
//! 1. Mirror the physics report (player position, grounded)
//! 2. Map input to motion
//! 3. Resolve contacts in report order
//! 4. Advance the logical clock, firing due timers one at a time

use glam::Vec2;

use super::collision::{self, Contact};
use super::input::{self, DirectionKeys};
use super::spawn;
use super::state::GameSession;

/// Everything the engine reports for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keys: DirectionKeys,
    /// Player is touching ground
    pub grounded: bool,
    /// Player position after the physics step
    pub player_pos: Option<Vec2>,
    /// Contacts detected during the physics step
    pub contacts: Vec<Contact>,
}

/// Advance the session by one frame of `dt_ms` logical milliseconds
pub fn tick(session: &mut GameSession, frame: &FrameInput, dt_ms: u64) {
    if let Some(pos) = frame.player_pos {
        session.player.pos = pos;
    }
    session.player.grounded = frame.grounded;

    input::apply_input(session, frame.keys);

    for contact in &frame.contacts {
        collision::resolve(session, contact);
    }

    let until = session.scheduler.now_ms() + dt_ms;
    while let Some(fired) = session.scheduler.pop_due(until) {
        log::trace!("Timer {} fired at {} ms: {:?}", fired.id, fired.at_ms, fired.action);
        spawn::fire(session, fired.action);
    }
    session.scheduler.advance_to(until);
}
