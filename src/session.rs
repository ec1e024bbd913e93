//! Session shell around the simulation
//!
//! Owns the wall-clock bookkeeping the sim itself must never see: frame delta
//! computation, pause/resume re-baselining, atomic restart, and dispatch of
//! the damage feedback hook. The application reads score/lives/game-over
//! through a HUD snapshot each frame.

use serde::Serialize;

use crate::gesture::{Gesture, IntentMailbox};
use crate::render::{RenderAdapter, Renderer};
use crate::sim::{GamePhase, SimEvent, SimState, tick};

/// Fire-and-forget notification invoked once per confirmed hit
pub type DamageHook = Box<dyn FnMut()>;

/// Per-frame display snapshot
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u8,
    pub speed: f32,
    pub game_over: bool,
}

/// A running game session bound to one renderer
pub struct Session<R: Renderer> {
    state: SimState,
    renderer: R,
    adapter: RenderAdapter,
    mailbox: IntentMailbox,
    /// Wall-clock stamp of the previous simulated frame; None forces a
    /// zero-delta frame (fresh session, or first frame after resume)
    last_time: Option<f64>,
    damage_hook: Option<DamageHook>,
}

impl<R: Renderer> Session<R> {
    pub fn new(seed: u64, mut renderer: R) -> Self {
        let adapter = RenderAdapter::new(&mut renderer);
        log::info!("session started with seed {seed}");
        Self {
            state: SimState::new(seed),
            renderer,
            adapter,
            mailbox: IntentMailbox::new(),
            last_time: None,
            damage_hook: None,
        }
    }

    /// Atomically restart: every live entity handle is destroyed and all
    /// simulation state replaced before the next frame can run
    pub fn reset(&mut self, seed: u64) {
        self.adapter.clear(&mut self.renderer);
        self.state = SimState::new(seed);
        self.mailbox = IntentMailbox::new();
        self.last_time = None;
        log::info!("session reset with seed {seed}");
    }

    /// Freeze the simulation; rendering may continue
    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Paused;
            log::info!("paused at t={:.2}", self.state.time_secs);
        }
    }

    /// Unfreeze and re-baseline the frame clock so paused wall time is never
    /// applied as simulation delta
    pub fn resume(&mut self) {
        if self.state.phase == GamePhase::Paused {
            self.state.phase = GamePhase::Running;
            self.last_time = None;
            log::info!("resumed at t={:.2}", self.state.time_secs);
        }
    }

    /// Record a gesture from the pose service (latest intent wins)
    pub fn push_gesture(&mut self, gesture: Gesture) {
        self.mailbox.push(gesture);
    }

    /// Audio/feedback hook fired exactly once per confirmed hit
    pub fn set_damage_hook(&mut self, hook: DamageHook) {
        self.damage_hook = Some(hook);
    }

    /// Run one frame at the given wall-clock time (seconds)
    pub fn frame(&mut self, now: f64) -> Vec<SimEvent> {
        let dt = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        let input = self.mailbox.take();
        let out = tick(&mut self.state, &input, dt);
        self.adapter.apply(&mut self.renderer, &out.commands);

        for event in &out.events {
            if let SimEvent::Damaged { .. } = event
                && let Some(hook) = self.damage_hook.as_mut()
            {
                hook();
            }
        }
        out.events
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.state.score,
            lives: self.state.lives,
            speed: self.state.speed,
            game_over: self.state.game_over(),
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
