//! Contact outcomes
//!
//! Physics detects overlaps; this module only decides what they mean.
//! [`decide`] is pure, [`apply`] performs the effects on the session.

use serde::{Deserialize, Serialize};

use super::command::{AnimationClip, EngineCommand};
use super::spawn;
use super::state::{Facing, GamePhase, GameSession};

/// A contact reported by physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// Player overlapped a pooled star
    Collectible { slot: usize },
    /// Player collided with a bomb
    Hazard { id: u32 },
}

/// What a contact does to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Star picked up
    Collected {
        slot: usize,
        /// Score after the pickup
        score: u64,
        /// Score landed on a bomb milestone
        milestone: bool,
    },
    /// Bomb hit while playing
    GameOver,
    /// Stale, unknown or post-game-over contact
    Ignored,
}

/// Map a contact to its outcome without touching the session
pub fn decide(session: &GameSession, contact: &Contact) -> Outcome {
    if session.phase == GamePhase::GameOver {
        return Outcome::Ignored;
    }

    match *contact {
        Contact::Collectible { slot } => {
            if !session.pool.is_active(slot) {
                return Outcome::Ignored;
            }
            let score = session.score.total() + session.tuning.score_per_pickup;
            Outcome::Collected {
                slot,
                score,
                milestone: score.is_multiple_of(session.tuning.hazard_milestone),
            }
        }
        Contact::Hazard { id } if session.hazard(id).is_some() => Outcome::GameOver,
        Contact::Hazard { .. } => Outcome::Ignored,
    }
}

/// Carry out an outcome
pub fn apply(session: &mut GameSession, outcome: Outcome) {
    match outcome {
        Outcome::Collected { slot, .. } => collect(session, slot),
        Outcome::GameOver => game_over(session),
        Outcome::Ignored => {}
    }
}

/// Decide and apply in one step
pub fn resolve(session: &mut GameSession, contact: &Contact) -> Outcome {
    let outcome = decide(session, contact);
    if outcome == Outcome::Ignored {
        log::trace!("Ignoring contact {contact:?}");
    }
    apply(session, outcome);
    outcome
}

fn collect(session: &mut GameSession, slot: usize) {
    if !session.pool.deactivate(slot) {
        return;
    }
    session.push(EngineCommand::DisableCollectible { slot });

    let total = session.score.add(session.tuning.score_per_pickup);
    session.push_score_text();

    let (_, delay) = spawn::schedule_respawn(session);
    log::debug!("Star {slot} collected, score {total}, respawn in {delay} ms");

    if session.score.is_multiple_of(session.tuning.hazard_milestone) {
        spawn::schedule_hazard(session, delay);
    }
}

fn game_over(session: &mut GameSession) {
    if session.phase == GamePhase::GameOver {
        return;
    }
    session.push(EngineCommand::PausePhysics);

    let tint = session.tuning.game_over_tint;
    session.player.tint = Some(tint);
    session.push(EngineCommand::SetPlayerTint { color: tint });

    session.player.facing = Facing::Idle;
    session.push(EngineCommand::PlayAnimation {
        clip: AnimationClip::Turn,
        looping: false,
    });

    session.player.alive = false;
    session.phase = GamePhase::GameOver;
    log::info!("Game over at score {}", session.score.total());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::schedule::TimerAction;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn session_with_star() -> GameSession {
        let mut session = GameSession::new(9, Tuning::default());
        assert_eq!(spawn::activate_collectible(&mut session), Some(0));
        session.drain_commands();
        session
    }

    fn session_with_star_and_bomb() -> GameSession {
        let mut session = session_with_star();
        assert_eq!(spawn::spawn_hazard(&mut session), 1);
        session.drain_commands();
        session
    }

    fn hazard_timers(session: &GameSession) -> usize {
        session
            .scheduler
            .pending()
            .iter()
            .filter(|t| t.action == TimerAction::SpawnHazard)
            .count()
    }

    #[test]
    fn test_collect_star() {
        let mut session = session_with_star();
        let outcome = resolve(&mut session, &Contact::Collectible { slot: 0 });
        assert_eq!(
            outcome,
            Outcome::Collected {
                slot: 0,
                score: 10,
                milestone: false
            }
        );
        assert_eq!(session.score.total(), 10);
        assert!(!session.pool.is_active(0));

        let commands = session.drain_commands();
        assert_eq!(commands[0], EngineCommand::DisableCollectible { slot: 0 });
        assert!(matches!(
            &commands[1],
            EngineCommand::SetScoreText { text, .. } if text == "Score: 10"
        ));

        // Initial wave + one respawn
        assert_eq!(session.scheduler.pending().len(), 2);
        assert_eq!(hazard_timers(&session), 0);
    }

    #[test]
    fn test_inactive_star_is_ignored() {
        let mut session = GameSession::new(9, Tuning::default());
        session.drain_commands();
        assert_eq!(resolve(&mut session, &Contact::Collectible { slot: 2 }), Outcome::Ignored);
        assert_eq!(resolve(&mut session, &Contact::Collectible { slot: 40 }), Outcome::Ignored);
        assert_eq!(session.score.total(), 0);
        assert!(session.pending_commands().is_empty());
    }

    #[test]
    fn test_decide_is_pure() {
        let session = session_with_star_and_bomb();
        let before = session.snapshot();
        decide(&session, &Contact::Collectible { slot: 0 });
        decide(&session, &Contact::Hazard { id: 1 });
        let after = session.snapshot();
        assert_eq!(before.score, after.score);
        assert_eq!(before.collectibles, after.collectibles);
        assert_eq!(before.phase, after.phase);
    }

    #[test]
    fn test_milestone_schedules_one_bomb() {
        let mut session = session_with_star();
        let mut bombs_after = Vec::new();
        for _ in 0..9 {
            spawn::activate_collectible(&mut session);
            let slot = session.pool.iter().find(|c| c.active).map(|c| c.slot).unwrap();
            let before = hazard_timers(&session);
            resolve(&mut session, &Contact::Collectible { slot });
            if hazard_timers(&session) > before {
                bombs_after.push(session.score.total());
            }
        }
        assert_eq!(bombs_after, vec![30, 60, 90]);
    }

    #[test]
    fn test_bomb_uses_respawn_delay() {
        let mut session = session_with_star();
        session.score.add(20);
        resolve(&mut session, &Contact::Collectible { slot: 0 });

        let timers = session.scheduler.pending();
        let respawn = &timers[1];
        let bomb = &timers[2];
        assert_eq!(respawn.action, TimerAction::ActivateCollectible);
        assert_eq!(bomb.action, TimerAction::SpawnHazard);
        assert_eq!(respawn.due_ms, bomb.due_ms);
        assert!((3000..=5000).contains(&bomb.due_ms));
    }

    #[test]
    fn test_unknown_bomb_is_ignored() {
        let mut session = session_with_star();
        assert!(session.hazards.is_empty());
        assert_eq!(resolve(&mut session, &Contact::Hazard { id: 77 }), Outcome::Ignored);
        assert_eq!(session.phase, GamePhase::Playing);
        assert!(session.player.alive);
        assert!(session.pending_commands().is_empty());
    }

    #[test]
    fn test_bomb_id_from_before_reset_is_ignored() {
        let mut session = session_with_star_and_bomb();
        session.reset();
        session.drain_commands();
        assert_eq!(resolve(&mut session, &Contact::Hazard { id: 1 }), Outcome::Ignored);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_bomb_hit_ends_game_once() {
        let mut session = session_with_star_and_bomb();
        assert_eq!(resolve(&mut session, &Contact::Hazard { id: 1 }), Outcome::GameOver);
        assert_eq!(session.phase, GamePhase::GameOver);
        assert!(!session.player.alive);
        assert_eq!(session.player.tint, Some(0xff0000));
        assert_eq!(
            session.drain_commands(),
            vec![
                EngineCommand::PausePhysics,
                EngineCommand::SetPlayerTint { color: 0xff0000 },
                EngineCommand::PlayAnimation {
                    clip: AnimationClip::Turn,
                    looping: false
                },
            ]
        );

        // Second hit and late pickup do nothing
        assert_eq!(resolve(&mut session, &Contact::Hazard { id: 1 }), Outcome::Ignored);
        assert_eq!(resolve(&mut session, &Contact::Collectible { slot: 0 }), Outcome::Ignored);
        assert!(session.pending_commands().is_empty());
        assert_eq!(session.score.total(), 0);
    }

    #[test]
    fn test_apply_game_over_is_idempotent() {
        let mut session = session_with_star();
        apply(&mut session, Outcome::GameOver);
        session.drain_commands();
        apply(&mut session, Outcome::GameOver);
        assert!(session.pending_commands().is_empty());
    }

    fn contact_strategy() -> impl Strategy<Value = Contact> {
        prop_oneof![
            (0usize..5).prop_map(|slot| Contact::Collectible { slot }),
            (1u32..5).prop_map(|id| Contact::Hazard { id }),
        ]
    }

    proptest! {
        #[test]
        fn prop_game_over_happens_once(
            contacts in proptest::collection::vec(contact_strategy(), 1..40)
        ) {
            let mut session = GameSession::new(11, Tuning::default());
            for _ in 0..4 {
                spawn::activate_collectible(&mut session);
            }
            // Bombs 1..=3 exist, bomb 4 never spawns
            for _ in 0..3 {
                spawn::spawn_hazard(&mut session);
            }
            let mut transitions = 0;
            let mut seen_over = false;
            for contact in &contacts {
                let outcome = resolve(&mut session, contact);
                if outcome == Outcome::GameOver {
                    transitions += 1;
                }
                if seen_over {
                    prop_assert_eq!(session.phase, GamePhase::GameOver);
                }
                seen_over |= session.is_over();
            }
            prop_assert!(transitions <= 1);
            let hit = contacts
                .iter()
                .any(|c| matches!(c, Contact::Hazard { id } if *id <= 3));
            prop_assert_eq!(transitions == 1, hit);
        }

        #[test]
        fn prop_score_is_ten_per_pickup(pickups in 0usize..40) {
            let mut session = GameSession::new(13, Tuning::default());
            for _ in 0..pickups {
                let slot = spawn::activate_collectible(&mut session);
                prop_assert_eq!(slot, Some(0));
                resolve(&mut session, &Contact::Collectible { slot: 0 });
            }
            prop_assert_eq!(session.score.total(), 10 * pickups as u64);
        }
    }
}
