//! Renderer boundary
//!
//! The sim emits `RenderCommand` lists; a `RenderAdapter` owns the id-to-handle
//! map and replays them against whatever `Renderer` implementation the host
//! provides. The core never queries the renderer back, and a command naming an
//! unknown entity is a no-op rather than a fault.

use std::collections::HashMap;

use glam::Vec3;

use crate::sim::{EntityKind, RenderCommand};

/// Opaque handle to an entity the renderer owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// Scene mutations the host rendering engine must support
pub trait Renderer {
    fn add_entity(&mut self, kind: EntityKind, position: Vec3, rotation: f32) -> RenderHandle;
    fn update_transform(&mut self, handle: RenderHandle, position: Vec3, rotation: f32);
    fn remove_entity(&mut self, handle: RenderHandle);
    fn set_visible(&mut self, handle: RenderHandle, visible: bool);
}

/// Applies sim command lists to a renderer, pairing every spawn with exactly
/// one handle and every retirement with its destruction
pub struct RenderAdapter {
    handles: HashMap<u32, RenderHandle>,
    player: RenderHandle,
}

impl RenderAdapter {
    /// Register the player avatar and start with an empty entity map
    pub fn new<R: Renderer>(renderer: &mut R) -> Self {
        let player = renderer.add_entity(EntityKind::Player, Vec3::ZERO, 0.0);
        Self {
            handles: HashMap::new(),
            player,
        }
    }

    /// Replay one frame's commands
    pub fn apply<R: Renderer>(&mut self, renderer: &mut R, commands: &[RenderCommand]) {
        for command in commands {
            match *command {
                RenderCommand::Spawned {
                    id,
                    kind,
                    position,
                    rotation,
                } => {
                    let handle = renderer.add_entity(kind, position, rotation);
                    self.handles.insert(id, handle);
                }
                RenderCommand::Moved {
                    id,
                    position,
                    rotation,
                } => {
                    if let Some(&handle) = self.handles.get(&id) {
                        renderer.update_transform(handle, position, rotation);
                    } else {
                        log::debug!("move for unknown entity #{id} ignored");
                    }
                }
                RenderCommand::Removed { id } => {
                    if let Some(handle) = self.handles.remove(&id) {
                        renderer.remove_entity(handle);
                    }
                }
                RenderCommand::PlayerMoved { position } => {
                    renderer.update_transform(self.player, position, 0.0);
                }
                RenderCommand::PlayerVisibility(visible) => {
                    renderer.set_visible(self.player, visible);
                }
            }
        }
    }

    /// Destroy every live entity handle (session reset)
    ///
    /// Visibility is delta-encoded by the sim, so a reset issued mid-blink
    /// must restore the avatar explicitly or it stays hidden.
    pub fn clear<R: Renderer>(&mut self, renderer: &mut R) {
        for (_, handle) in self.handles.drain() {
            renderer.remove_entity(handle);
        }
        renderer.set_visible(self.player, true);
    }

    /// Number of live entity handles (excluding the player)
    pub fn live_entities(&self) -> usize {
        self.handles.len()
    }
}

/// Renderer that records calls and tracks live handles; backs tests and
/// headless runs
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_handle: u64,
    pub live: std::collections::HashSet<u64>,
    /// Last rotation seen per live handle
    pub rotations: HashMap<u64, f32>,
    /// Last visibility seen per handle
    pub visibility: HashMap<u64, bool>,
    pub added: u64,
    pub removed: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for NullRenderer {
    fn add_entity(&mut self, _kind: EntityKind, _position: Vec3, rotation: f32) -> RenderHandle {
        let handle = RenderHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle.0);
        self.rotations.insert(handle.0, rotation);
        self.visibility.insert(handle.0, true);
        self.added += 1;
        handle
    }

    fn update_transform(&mut self, handle: RenderHandle, _position: Vec3, rotation: f32) {
        self.rotations.insert(handle.0, rotation);
    }

    fn remove_entity(&mut self, handle: RenderHandle) {
        self.live.remove(&handle.0);
        self.rotations.remove(&handle.0);
        self.removed += 1;
    }

    fn set_visible(&mut self, handle: RenderHandle, visible: bool) {
        self.visibility.insert(handle.0, visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(id: u32) -> RenderCommand {
        RenderCommand::Spawned {
            id,
            kind: EntityKind::Obstacle,
            position: Vec3::ZERO,
            rotation: 0.0,
        }
    }

    #[test]
    fn every_spawn_gets_exactly_one_handle() {
        let mut renderer = NullRenderer::new();
        let mut adapter = RenderAdapter::new(&mut renderer);

        adapter.apply(&mut renderer, &[spawn(1), spawn(2)]);
        assert_eq!(adapter.live_entities(), 2);
        // Player handle plus two entities
        assert_eq!(renderer.live.len(), 3);
    }

    #[test]
    fn removal_pairs_with_handle_destruction() {
        let mut renderer = NullRenderer::new();
        let mut adapter = RenderAdapter::new(&mut renderer);

        adapter.apply(&mut renderer, &[spawn(7)]);
        adapter.apply(&mut renderer, &[RenderCommand::Removed { id: 7 }]);
        assert_eq!(adapter.live_entities(), 0);
        assert_eq!(renderer.live.len(), 1); // player only
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut renderer = NullRenderer::new();
        let mut adapter = RenderAdapter::new(&mut renderer);

        adapter.apply(
            &mut renderer,
            &[
                RenderCommand::Moved {
                    id: 99,
                    position: Vec3::ZERO,
                    rotation: 0.0,
                },
                RenderCommand::Removed { id: 99 },
            ],
        );
        assert_eq!(renderer.removed, 0);
    }

    #[test]
    fn movement_preserves_spawn_rotation() {
        let mut renderer = NullRenderer::new();
        let mut adapter = RenderAdapter::new(&mut renderer);

        adapter.apply(
            &mut renderer,
            &[RenderCommand::Spawned {
                id: 5,
                kind: EntityKind::Tree,
                position: Vec3::ZERO,
                rotation: 5.44,
            }],
        );
        adapter.apply(
            &mut renderer,
            &[RenderCommand::Moved {
                id: 5,
                position: Vec3::new(8.0, 0.0, -40.0),
                rotation: 5.44,
            }],
        );
        // Handle 0 is the player; the tree is handle 1
        assert_eq!(renderer.rotations.get(&1), Some(&5.44));
    }

    #[test]
    fn clear_restores_player_visibility() {
        let mut renderer = NullRenderer::new();
        let mut adapter = RenderAdapter::new(&mut renderer);

        adapter.apply(&mut renderer, &[RenderCommand::PlayerVisibility(false)]);
        assert_eq!(renderer.visibility.get(&0), Some(&false));

        adapter.clear(&mut renderer);
        assert_eq!(renderer.visibility.get(&0), Some(&true));
    }

    #[test]
    fn clear_destroys_all_entity_handles_but_keeps_player() {
        let mut renderer = NullRenderer::new();
        let mut adapter = RenderAdapter::new(&mut renderer);

        adapter.apply(&mut renderer, &[spawn(1), spawn(2), spawn(3)]);
        adapter.clear(&mut renderer);
        assert_eq!(adapter.live_entities(), 0);
        assert_eq!(renderer.live.len(), 1);
    }
}
