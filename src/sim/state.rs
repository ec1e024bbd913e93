//! Simulation state and core entity types
//!
//! One explicit `SimState` value owns everything the simulation mutates; there
//! is no hidden shared state. All of it is snapshot-serializable.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lane_to_x;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing every frame
    Running,
    /// Frozen; render may continue but no state advances
    Paused,
    /// Lives reached zero, session over
    GameOver,
}

/// One of the three fixed lateral travel tracks (0 = left, 1 = center, 2 = right)
pub type Lane = u8;

/// Player avatar state
///
/// The logical `lane` is authoritative for collision; the visual `x` trails it
/// with an exponential lerp for smooth strafing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub lane: Lane,
    /// Visual lateral position (approaches `lane_to_x(lane)` each frame)
    pub x: f32,
    /// Height above the ground plane
    pub y: f32,
    pub jumping: bool,
    /// Sim-time stamp of the current jump's start
    pub jump_started_at: f64,
    /// Sim-time stamp of the last confirmed hit
    pub last_hit_at: f64,
    /// Rendered visibility (toggles while invincible)
    pub visible: bool,
}

/// Sentinel hit time far enough in the past that a fresh player is vulnerable
const NEVER_HIT: f64 = -1.0e6;

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            lane: 1,
            x: lane_to_x(1),
            y: 0.0,
            jumping: false,
            jump_started_at: 0.0,
            last_hit_at: NEVER_HIT,
            visible: true,
        }
    }
}

impl PlayerState {
    /// Whether the invincibility window following the last hit is still open
    pub fn is_invincible(&self, now: f64) -> bool {
        now - self.last_hit_at <= INVINCIBILITY_DURATION as f64
    }
}

/// A hazard entity travelling down one lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: Lane,
    /// Distance along the travel axis (negative = ahead, grows toward camera)
    pub z: f32,
    /// Set once the obstacle crosses the pass threshold and awards score
    pub passed: bool,
}

/// Cosmetic scenery kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    Tree,
    Grass,
    Flower,
}

/// A non-interactive cosmetic entity placed outside the lane corridor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    pub id: u32,
    pub x: f32,
    pub z: f32,
    pub kind: DecorationKind,
    pub rotation: f32,
}

/// Current forward speed as a pure function of score, clamped to the speed band
#[inline]
pub fn speed_for_score(score: u32) -> f32 {
    (START_SPEED + score as f32 / SPEED_SCORE_DIV).clamp(START_SPEED, MAX_SPEED)
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all procedural decisions
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulated seconds since session start (wall clock never leaks in)
    pub time_secs: f64,
    pub score: u32,
    pub lives: u8,
    /// Derived each frame from `score`; cached for spawn cadence and HUD
    pub speed: f32,
    pub player: PlayerState,
    pub obstacles: Vec<Obstacle>,
    pub decorations: Vec<Decoration>,
    /// Seconds until the next obstacle spawn
    pub obstacle_timer: f32,
    /// Seconds until the next decoration emission
    pub decor_timer: f32,
    next_id: u32,
}

impl SimState {
    /// Create a fresh session state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            time_secs: 0.0,
            score: 0,
            lives: START_LIVES,
            speed: START_SPEED,
            player: PlayerState::default(),
            obstacles: Vec::new(),
            decorations: Vec::new(),
            obstacle_timer: OBSTACLE_INTERVAL_BASE,
            decor_timer: OBSTACLE_INTERVAL_BASE / DECOR_CADENCE_DIV,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID (monotonic, unique within a session)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_curve_is_clamped_to_band() {
        assert_eq!(speed_for_score(0), START_SPEED);
        assert_eq!(speed_for_score(500), START_SPEED + 10.0);
        assert_eq!(speed_for_score(u32::MAX), MAX_SPEED);
    }

    #[test]
    fn entity_ids_are_unique_and_monotonic() {
        let mut state = SimState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        let c = state.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn fresh_player_is_vulnerable() {
        let player = PlayerState::default();
        assert!(!player.is_invincible(0.0));
    }

    #[test]
    fn state_snapshot_round_trips() {
        let mut state = SimState::new(42);
        state.score = 120;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            lane: 2,
            z: -30.0,
            passed: false,
        });
        let json = serde_json::to_string(&state).unwrap();
        let back: SimState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 120);
        assert_eq!(back.obstacles.len(), 1);
        assert_eq!(back.obstacles[0].lane, 2);
    }
}
