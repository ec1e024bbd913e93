//! Per-frame outputs of the simulation
//!
//! The sim never touches a renderer directly. Each tick emits a list of
//! `RenderCommand`s for an adapter to apply, plus gameplay `SimEvent`s for the
//! application shell (HUD, damage feedback, game over).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// What an entity looks like to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Obstacle,
    Tree,
    Grass,
    Flower,
}

/// One renderer mutation. Entity ids are sim-side; the adapter owns the
/// mapping to renderer handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    Spawned {
        id: u32,
        kind: EntityKind,
        position: Vec3,
        rotation: f32,
    },
    Moved {
        id: u32,
        position: Vec3,
        rotation: f32,
    },
    Removed {
        id: u32,
    },
    PlayerMoved {
        position: Vec3,
    },
    PlayerVisibility(bool),
}

/// Gameplay events surfaced to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A confirmed hit was applied (fired exactly once per hit)
    Damaged { lives_left: u8 },
    /// An obstacle crossed the pass threshold and awarded score
    ObstaclePassed { score: u32 },
    /// Lives hit zero; `score` is final
    GameOver { score: u32 },
}

/// Everything one tick produced
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    pub commands: Vec<RenderCommand>,
    pub events: Vec<SimEvent>,
}
