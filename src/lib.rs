//! Pose Runner - an endless three-lane runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, player state)
//! - `render`: Renderer trait boundary and command-list adapter
//! - `gesture`: Discrete gesture input from an external pose estimator
//! - `session`: Pause/resume/reset shell around the simulation

pub mod gesture;
pub mod render;
pub mod session;
pub mod sim;

pub use gesture::{Gesture, GestureSource, IntentMailbox};
pub use session::{HudSnapshot, Session};

/// Game configuration constants
pub mod consts {
    /// Number of parallel lanes
    pub const LANE_COUNT: u8 = 3;
    /// Lateral distance between lane centers
    pub const LANE_WIDTH: f32 = 2.0;

    /// Distance along the travel axis where new entities appear (ahead of the player)
    pub const SPAWN_DISTANCE: f32 = -60.0;
    /// Z past which an obstacle counts as survived and awards score
    pub const PASS_Z: f32 = 2.0;
    /// Z past which an entity is retired and its renderer handle destroyed
    pub const RETIRE_Z: f32 = 10.0;

    /// Half-width of the longitudinal band treated as "at the player"
    pub const COLLISION_BAND: f32 = 1.0;
    /// Below this height the avatar is considered grounded for collision
    pub const JUMP_CLEARANCE: f32 = 1.1;

    /// Full jump duration in seconds
    pub const JUMP_DURATION: f32 = 0.7;
    /// Peak jump height at the parabola apex
    pub const JUMP_HEIGHT: f32 = 2.0;
    /// Exponential approach rate of visual x toward the lane center (per second)
    pub const LANE_LERP_RATE: f32 = 10.0;

    /// Immunity window after a confirmed hit, seconds
    pub const INVINCIBILITY_DURATION: f32 = 2.0;
    /// Visibility toggle period while invincible, seconds
    pub const BLINK_PERIOD: f32 = 0.1;

    /// Forward speed at session start
    pub const START_SPEED: f32 = 15.0;
    /// Speed ceiling
    pub const MAX_SPEED: f32 = 40.0;
    /// Score divisor in the difficulty curve: speed = START_SPEED + score / SPEED_SCORE_DIV
    pub const SPEED_SCORE_DIV: f32 = 50.0;

    /// Score awarded per obstacle survived
    pub const SCORE_PER_PASS: u32 = 10;
    /// Lives at session start
    pub const START_LIVES: u8 = 3;

    /// Obstacle spawn period at START_SPEED, seconds (shrinks as speed grows)
    pub const OBSTACLE_INTERVAL_BASE: f32 = 1.2;
    /// Decorations spawn this many times faster than obstacles
    pub const DECOR_CADENCE_DIV: f32 = 6.0;
    /// Lateral offset range for decorations, outside the lane corridor
    pub const DECOR_X_MIN: f32 = 4.0;
    pub const DECOR_X_MAX: f32 = 12.0;
    /// Z jitter applied to decoration spawns
    pub const DECOR_Z_JITTER: f32 = 8.0;
    /// Most decorations per emission tick
    pub const DECOR_MAX_PER_TICK: u32 = 3;

    /// Largest frame delta fed to the simulation, seconds
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Lateral world x of a lane center
#[inline]
pub fn lane_to_x(lane: u8) -> f32 {
    (lane as f32 - 1.0) * consts::LANE_WIDTH
}

/// Parabolic jump height as a pure function of normalized progress t in [0, 1]
///
/// Zero at both endpoints, peak `JUMP_HEIGHT` at t = 0.5. Hazard-clearance
/// timing depends on this exact curve shape.
#[inline]
pub fn jump_height(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    consts::JUMP_HEIGHT * 4.0 * t * (1.0 - t)
}
