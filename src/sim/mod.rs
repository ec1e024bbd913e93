//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Sim time accumulated from clamped frame deltas only
//! - Seeded RNG only
//! - Monotonic entity ids
//! - No rendering or platform dependencies; renderer mutations leave as
//!   command lists

pub mod collision;
pub mod events;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use events::{EntityKind, FrameOutput, RenderCommand, SimEvent};
pub use state::{
    Decoration, DecorationKind, GamePhase, Lane, Obstacle, PlayerState, SimState, speed_for_score,
};
pub use tick::{Steer, TickInput, tick};
