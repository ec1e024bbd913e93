//! Pose Runner headless demo
//!
//! Runs the simulation against the null renderer with an autopilot gesture
//! source standing in for the external pose estimator. Useful for soak-testing
//! the sim and for watching difficulty ramp in the logs.
//!
//! Usage: `pose-runner [seed]`

use pose_runner::consts::*;
use pose_runner::render::NullRenderer;
use pose_runner::sim::SimState;
use pose_runner::{Gesture, GestureSource, Session};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7u64);
    log::info!("Pose Runner demo starting (seed {seed})");

    let mut session = Session::new(seed, NullRenderer::new());
    session.set_damage_hook(Box::new(|| log::info!("** damage feedback **")));

    let mut autopilot = Autopilot::default();
    let dt = 1.0 / 60.0;
    let max_frames = (120.0 / dt) as u64; // two simulated minutes

    let mut frame = 0u64;
    while frame < max_frames {
        let now = frame as f64 * dt;
        let gesture = autopilot.poll(session.state(), now);
        session.push_gesture(gesture);
        session.frame(now);

        if frame % (5.0 / dt) as u64 == 0 {
            let hud = session.hud();
            log::info!(
                "t={now:>6.1}s score={} lives={} speed={:.1}",
                hud.score,
                hud.lives,
                hud.speed
            );
        }
        if session.hud().game_over {
            break;
        }
        frame += 1;
    }

    let summary = session.hud();
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("hud snapshot serializes")
    );
}

/// Demo AI playing the part of the pose service: steer out of threatened
/// lanes, jump when boxed in
#[derive(Default)]
struct Autopilot;

impl Autopilot {
    /// Does any obstacle threaten this lane within the reaction window?
    fn lane_blocked(state: &SimState, lane: u8) -> bool {
        state
            .obstacles
            .iter()
            .any(|ob| ob.lane == lane && ob.z > -15.0 && ob.z < COLLISION_BAND)
    }
}

impl GestureSource for Autopilot {
    fn poll(&mut self, state: &SimState, _now: f64) -> Gesture {
        let lane = state.player.lane;
        if !Self::lane_blocked(state, lane) {
            return Gesture::None;
        }

        // Prefer stepping into a free adjacent lane
        if lane > 0 && !Self::lane_blocked(state, lane - 1) {
            return Gesture::Left;
        }
        if lane + 1 < LANE_COUNT && !Self::lane_blocked(state, lane + 1) {
            return Gesture::Right;
        }

        // Boxed in: jump once the hazard is close enough that the parabola
        // carries the avatar over it
        let imminent = state
            .obstacles
            .iter()
            .any(|ob| ob.lane == lane && ob.z > -8.0 && ob.z < COLLISION_BAND);
        if imminent && !state.player.jumping {
            Gesture::Jump
        } else {
            Gesture::None
        }
    }
}
