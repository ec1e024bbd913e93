//! Per-frame simulation step
//!
//! One `tick` per rendered frame with a wall-clock delta. Frame order is
//! fixed: difficulty, player intents and physics, decorations, obstacles with
//! collision, retirement. The sim is frozen while paused or after game over.

use glam::Vec3;

use crate::consts::*;
use crate::lane_to_x;

use super::collision;
use super::events::{FrameOutput, RenderCommand, SimEvent};
use super::player;
use super::spawn;
use super::state::{GamePhase, SimState, speed_for_score};

/// Steering direction decoded from a lane gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Input for a single frame, already reduced to at most one intent of each kind
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub steer: Option<Steer>,
}

/// Advance the simulation by one frame
///
/// `dt` is clamped to `[0, MAX_FRAME_DT]`: clock anomalies must never run the
/// world backwards, and the first frame after a stall must not teleport it.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> FrameOutput {
    let mut out = FrameOutput::default();
    if state.phase != GamePhase::Running {
        return out;
    }

    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };
    state.time_secs += dt as f64;
    let now = state.time_secs;

    // Difficulty: purely derived from score
    state.speed = speed_for_score(state.score);

    // Player intents and physics
    let was_visible = state.player.visible;
    player::apply_intents(&mut state.player, input, now);
    player::update(&mut state.player, now, dt);
    out.commands.push(RenderCommand::PlayerMoved {
        position: Vec3::new(state.player.x, state.player.y, 0.0),
    });
    if state.player.visible != was_visible {
        out.commands
            .push(RenderCommand::PlayerVisibility(state.player.visible));
    }

    // Decorations: spawn, advance, retire
    spawn::update_decorations(state, dt, &mut out);
    let dz = state.speed * dt;
    for deco in &mut state.decorations {
        deco.z += dz;
        out.commands.push(RenderCommand::Moved {
            id: deco.id,
            position: Vec3::new(deco.x, 0.0, deco.z),
            rotation: deco.rotation,
        });
    }
    state.decorations.retain(|deco| {
        if deco.z > RETIRE_Z {
            out.commands.push(RenderCommand::Removed { id: deco.id });
            false
        } else {
            true
        }
    });

    // Obstacles: spawn, advance, pass bookkeeping, collision
    spawn::update_obstacles(state, dt, &mut out);
    let mut passes = 0u32;
    let mut hit = false;
    let player = &state.player;
    for obstacle in &mut state.obstacles {
        obstacle.z += dz;
        out.commands.push(RenderCommand::Moved {
            id: obstacle.id,
            position: Vec3::new(lane_to_x(obstacle.lane), 0.0, obstacle.z),
            rotation: 0.0,
        });
        // Pass and hit are independent bookkeeping: a hit obstacle still
        // scores once it crosses the pass threshold.
        if !obstacle.passed && obstacle.z > PASS_Z {
            obstacle.passed = true;
            passes += 1;
        }
        if collision::obstacle_threatens(obstacle, player) {
            hit = true;
        }
    }

    for _ in 0..passes {
        state.score += SCORE_PER_PASS;
        out.events.push(SimEvent::ObstaclePassed { score: state.score });
    }

    if hit {
        collision::try_apply_hit(state, &mut out);
    }

    state.obstacles.retain(|obstacle| {
        if obstacle.z > RETIRE_Z {
            out.commands.push(RenderCommand::Removed { id: obstacle.id });
            false
        } else {
            true
        }
    });

    out
}
