//! Gesture input boundary
//!
//! An external body-pose estimator classifies the player's pose into one of
//! four discrete symbols. The simulation never sees raw landmarks; it consumes
//! the symbol stream through a latest-intent-wins mailbox, one jump intent and
//! one steer intent honored per frame.

use serde::{Deserialize, Serialize};

use crate::sim::{SimState, Steer, TickInput};

/// A discrete classified user intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gesture {
    /// No pose detected, or pose below threshold. Never an error.
    #[default]
    None,
    Jump,
    Left,
    Right,
}

/// Producer of gesture symbols, polled once per frame
///
/// Debounce, thresholds and cooldowns are the source's own business; the core
/// only consumes the resulting symbol.
pub trait GestureSource {
    fn poll(&mut self, state: &SimState, now: f64) -> Gesture;
}

/// Pending-intent mailbox between the async gesture stream and the frame loop
///
/// Gestures may arrive at any rate between frames; only the latest jump intent
/// and the latest steer intent survive until the next `take`. Nothing blocks,
/// nothing queues.
#[derive(Debug, Clone, Default)]
pub struct IntentMailbox {
    jump: bool,
    steer: Option<Steer>,
}

impl IntentMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a gesture. Latest steer wins; a jump intent sticks until consumed.
    pub fn push(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::None => {}
            Gesture::Jump => self.jump = true,
            Gesture::Left => self.steer = Some(Steer::Left),
            Gesture::Right => self.steer = Some(Steer::Right),
        }
    }

    /// Consume the pending intents into this frame's input
    pub fn take(&mut self) -> TickInput {
        TickInput {
            jump: std::mem::take(&mut self.jump),
            steer: self.steer.take(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.jump && self.steer.is_none()
    }
}
