//! Player state machine
//!
//! Two states: grounded and jumping. Jump height is a closed-form parabola of
//! elapsed sim time, not velocity-integrated, so hazard-clearance timing is
//! deterministic. Lane changes apply to the logical lane immediately; the
//! visual x position eases toward the lane center each frame.

use crate::consts::*;
use crate::{jump_height, lane_to_x};

use super::state::PlayerState;
use super::tick::{Steer, TickInput};

/// Apply this frame's pending intents to the player
///
/// Steering shifts the logical lane by one, clamped at the outer lanes (no-op
/// at the boundary). A jump intent is honored only when grounded.
pub fn apply_intents(player: &mut PlayerState, input: &TickInput, now: f64) {
    match input.steer {
        Some(Steer::Left) => player.lane = player.lane.saturating_sub(1),
        Some(Steer::Right) => player.lane = (player.lane + 1).min(LANE_COUNT - 1),
        None => {}
    }
    if input.jump && !player.jumping {
        player.jumping = true;
        player.jump_started_at = now;
        log::debug!("jump started at t={now:.2}");
    }
}

/// Advance jump phase, lateral lerp and invincibility blink by one frame
pub fn update(player: &mut PlayerState, now: f64, dt: f32) {
    if player.jumping {
        let elapsed = (now - player.jump_started_at) as f32;
        if elapsed >= JUMP_DURATION {
            player.jumping = false;
            player.y = 0.0;
        } else {
            player.y = jump_height(elapsed / JUMP_DURATION);
        }
    }

    // Exponential approach of visual x toward the lane center. The factor is
    // capped so a large dt cannot overshoot the target.
    let target_x = lane_to_x(player.lane);
    let blend = (LANE_LERP_RATE * dt).min(1.0);
    player.x += (target_x - player.x) * blend;

    player.visible = if player.is_invincible(now) {
        let since_hit = now - player.last_hit_at;
        (since_hit / BLINK_PERIOD as f64) as i64 % 2 == 0
    } else {
        true
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayerState;

    const DT: f32 = 1.0 / 60.0;

    fn grounded() -> PlayerState {
        PlayerState::default()
    }

    #[test]
    fn jump_curve_is_zero_at_endpoints_and_peaks_at_apex() {
        assert_eq!(jump_height(0.0), 0.0);
        assert_eq!(jump_height(1.0), 0.0);
        assert_eq!(jump_height(0.5), JUMP_HEIGHT);
        // Strictly below the apex elsewhere
        assert!(jump_height(0.25) < JUMP_HEIGHT);
        assert!(jump_height(0.25) > 0.0);
    }

    #[test]
    fn jump_lands_after_duration() {
        let mut player = grounded();
        apply_intents(
            &mut player,
            &TickInput {
                jump: true,
                steer: None,
            },
            0.0,
        );
        assert!(player.jumping);

        update(&mut player, (JUMP_DURATION / 2.0) as f64, DT);
        assert!((player.y - JUMP_HEIGHT).abs() < 1e-4);

        update(&mut player, JUMP_DURATION as f64 + 0.01, DT);
        assert!(!player.jumping);
        assert_eq!(player.y, 0.0);
    }

    #[test]
    fn jump_intent_ignored_mid_air() {
        let mut player = grounded();
        let jump = TickInput {
            jump: true,
            steer: None,
        };
        apply_intents(&mut player, &jump, 0.0);
        // A second jump must not restart the clock
        apply_intents(&mut player, &jump, 0.3);
        assert_eq!(player.jump_started_at, 0.0);
    }

    #[test]
    fn lane_shift_clamps_at_boundaries() {
        let mut player = grounded();
        let left = TickInput {
            jump: false,
            steer: Some(Steer::Left),
        };
        apply_intents(&mut player, &left, 0.0);
        assert_eq!(player.lane, 0);
        apply_intents(&mut player, &left, 0.0);
        assert_eq!(player.lane, 0);

        let right = TickInput {
            jump: false,
            steer: Some(Steer::Right),
        };
        for _ in 0..4 {
            apply_intents(&mut player, &right, 0.0);
        }
        assert_eq!(player.lane, LANE_COUNT - 1);
    }

    #[test]
    fn visual_x_eases_toward_lane_center() {
        let mut player = grounded();
        apply_intents(
            &mut player,
            &TickInput {
                jump: false,
                steer: Some(Steer::Right),
            },
            0.0,
        );
        assert_eq!(player.lane, 2);

        // One frame moves part of the way, many frames converge
        update(&mut player, 0.0, DT);
        let after_one = player.x;
        assert!(after_one > 0.0 && after_one < lane_to_x(2));
        for i in 1..120 {
            update(&mut player, i as f64 * DT as f64, DT);
        }
        assert!((player.x - lane_to_x(2)).abs() < 1e-2);
    }

    #[test]
    fn blink_toggles_on_fixed_period_while_invincible() {
        let mut player = grounded();
        player.last_hit_at = 10.0;

        update(&mut player, 10.05, DT);
        assert!(player.visible);
        update(&mut player, 10.15, DT);
        assert!(!player.visible);
        update(&mut player, 10.25, DT);
        assert!(player.visible);

        // Window closed: visible again regardless of phase
        update(&mut player, 10.0 + INVINCIBILITY_DURATION as f64 + 0.1, DT);
        assert!(player.visible);
    }
}
