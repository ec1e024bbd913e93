//! Procedural entity generation
//!
//! Two independent countdown streams, both driven by the session's seeded RNG.
//! Periods shrink as speed grows so hazard density keeps pace with difficulty.
//! Obstacle lanes are drawn uniformly with no anti-clustering rule; same-lane
//! runs are possible and a well-timed jump still clears them.

use glam::Vec3;
use rand::Rng;

use crate::consts::*;
use crate::lane_to_x;

use super::events::{EntityKind, FrameOutput, RenderCommand};
use super::state::{Decoration, DecorationKind, Obstacle, SimState};

/// Obstacle spawn period at the given speed
#[inline]
pub fn obstacle_interval(speed: f32) -> f32 {
    OBSTACLE_INTERVAL_BASE * (START_SPEED / speed.max(START_SPEED))
}

/// Decoration emission period at the given speed
#[inline]
pub fn decoration_interval(speed: f32) -> f32 {
    obstacle_interval(speed) / DECOR_CADENCE_DIV
}

/// Count down the obstacle timer and spawn when it expires
pub fn update_obstacles(state: &mut SimState, dt: f32, out: &mut FrameOutput) {
    state.obstacle_timer -= dt;
    while state.obstacle_timer <= 0.0 {
        state.obstacle_timer += obstacle_interval(state.speed);
        spawn_obstacle(state, out);
    }
}

/// Count down the decoration timer and emit a batch when it expires
pub fn update_decorations(state: &mut SimState, dt: f32, out: &mut FrameOutput) {
    state.decor_timer -= dt;
    while state.decor_timer <= 0.0 {
        state.decor_timer += decoration_interval(state.speed);
        let count = state.rng.random_range(1..=DECOR_MAX_PER_TICK);
        for _ in 0..count {
            spawn_decoration(state, out);
        }
    }
}

fn spawn_obstacle(state: &mut SimState, out: &mut FrameOutput) {
    let id = state.next_entity_id();
    let lane = state.rng.random_range(0..LANE_COUNT);
    let obstacle = Obstacle {
        id,
        lane,
        z: SPAWN_DISTANCE,
        passed: false,
    };
    log::debug!("spawn obstacle #{id} lane={lane}");
    out.commands.push(RenderCommand::Spawned {
        id,
        kind: EntityKind::Obstacle,
        position: Vec3::new(lane_to_x(lane), 0.0, SPAWN_DISTANCE),
        rotation: 0.0,
    });
    state.obstacles.push(obstacle);
}

fn spawn_decoration(state: &mut SimState, out: &mut FrameOutput) {
    let id = state.next_entity_id();

    // Weighted kind draw: 40% grass, 35% flower, 25% tree
    let kind = match state.rng.random_range(0..100u32) {
        0..40 => DecorationKind::Grass,
        40..75 => DecorationKind::Flower,
        _ => DecorationKind::Tree,
    };

    // Placed outside the lane corridor on a random side, with z jitter so
    // batches don't line up in rows.
    let side = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let x = side * state.rng.random_range(DECOR_X_MIN..DECOR_X_MAX);
    let z = SPAWN_DISTANCE + state.rng.random_range(-DECOR_Z_JITTER..DECOR_Z_JITTER);
    let rotation = state.rng.random_range(0.0..std::f32::consts::TAU);

    out.commands.push(RenderCommand::Spawned {
        id,
        kind: match kind {
            DecorationKind::Tree => EntityKind::Tree,
            DecorationKind::Grass => EntityKind::Grass,
            DecorationKind::Flower => EntityKind::Flower,
        },
        position: Vec3::new(x, 0.0, z),
        rotation,
    });
    state.decorations.push(Decoration {
        id,
        x,
        z,
        kind,
        rotation,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_shrinks_as_speed_grows() {
        let base = obstacle_interval(START_SPEED);
        assert_eq!(base, OBSTACLE_INTERVAL_BASE);
        assert!(obstacle_interval(MAX_SPEED) < base);
        // Never divides by a speed below the floor
        assert_eq!(obstacle_interval(0.0), OBSTACLE_INTERVAL_BASE);
    }

    #[test]
    fn obstacles_spawn_upstream_with_distinct_ids() {
        let mut state = SimState::new(3);
        let mut out = FrameOutput::default();
        // Force two immediate spawns
        state.obstacle_timer = 0.0;
        update_obstacles(&mut state, 0.0, &mut out);
        state.obstacle_timer = 0.0;
        update_obstacles(&mut state, 0.0, &mut out);

        assert_eq!(state.obstacles.len(), 2);
        assert_ne!(state.obstacles[0].id, state.obstacles[1].id);
        for ob in &state.obstacles {
            assert_eq!(ob.z, SPAWN_DISTANCE);
            assert!(ob.lane < LANE_COUNT);
            assert!(!ob.passed);
        }
        // One Spawned command per obstacle
        let spawned = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Spawned { .. }))
            .count();
        assert_eq!(spawned, 2);
    }

    #[test]
    fn decorations_stay_outside_the_corridor() {
        let mut state = SimState::new(11);
        let mut out = FrameOutput::default();
        for _ in 0..50 {
            state.decor_timer = 0.0;
            update_decorations(&mut state, 0.0, &mut out);
        }
        assert!(!state.decorations.is_empty());
        let corridor_half_width = 1.5 * LANE_WIDTH;
        for deco in &state.decorations {
            assert!(deco.x.abs() > corridor_half_width);
            assert!(deco.x.abs() <= DECOR_X_MAX);
        }
    }

    #[test]
    fn all_decoration_kinds_appear_over_many_draws() {
        let mut state = SimState::new(5);
        let mut out = FrameOutput::default();
        for _ in 0..200 {
            state.decor_timer = 0.0;
            update_decorations(&mut state, 0.0, &mut out);
        }
        let has = |k: DecorationKind| state.decorations.iter().any(|d| d.kind == k);
        assert!(has(DecorationKind::Grass));
        assert!(has(DecorationKind::Flower));
        assert!(has(DecorationKind::Tree));
    }
}
