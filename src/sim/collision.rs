//! Hazard collision and damage bookkeeping
//!
//! An obstacle is "at the player" while its z sits inside a narrow band around
//! the player plane. In-lane obstacles in that band hit unless the avatar is
//! high enough mid-jump. Confirmed hits are gated by the invincibility window,
//! which also makes re-checking within the same frame harmless.

use crate::consts::*;

use super::events::{FrameOutput, SimEvent};
use super::state::{GamePhase, Obstacle, PlayerState, SimState};

/// Whether a z position is inside the longitudinal band around the player
#[inline]
pub fn in_player_band(z: f32) -> bool {
    z > -COLLISION_BAND && z < COLLISION_BAND
}

/// Whether this obstacle would hit the player right now, ignoring invincibility
///
/// The logical lane is authoritative; the eased visual x plays no part here.
pub fn obstacle_threatens(obstacle: &Obstacle, player: &PlayerState) -> bool {
    in_player_band(obstacle.z) && obstacle.lane == player.lane && player.y < JUMP_CLEARANCE
}

/// Apply a confirmed hit unless the invincibility window is still open
///
/// Decrements lives, restamps the hit time and emits the damage event. At zero
/// lives the session freezes into game over and reports the final score.
pub fn try_apply_hit(state: &mut SimState, out: &mut FrameOutput) {
    let now = state.time_secs;
    if state.player.is_invincible(now) {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    state.player.last_hit_at = now;
    out.events.push(SimEvent::Damaged {
        lives_left: state.lives,
    });
    log::info!("hit at t={now:.2}, lives left {}", state.lives);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        out.events.push(SimEvent::GameOver { score: state.score });
        log::info!("game over, final score {}", state.score);
    }
}
