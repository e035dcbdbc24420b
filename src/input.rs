//! Pointer input
//!
//! Hover highlights particles, click starts fading them. Handlers only touch
//! particle state; membership and counters are left to [`tick`](crate::sim::tick).

use glam::Vec2;

use crate::sim::SimState;

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Click,
}

/// A pointer event in client (page viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub client: Vec2,
}

impl PointerEvent {
    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            client: Vec2::new(x, y),
        }
    }

    pub fn clicked(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Click,
            client: Vec2::new(x, y),
        }
    }
}

/// Top-left corner of the drawing surface in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
}

/// Translate client coordinates into surface-local ones
#[inline]
pub fn to_surface_coords(client: Vec2, rect: SurfaceRect) -> Vec2 {
    Vec2::new(client.x - rect.left, client.y - rect.top)
}

/// Recolor every particle for the pointer position. Returns how many are
/// highlighted.
pub fn on_pointer_move(state: &mut SimState, pointer: Vec2) -> usize {
    state
        .particles
        .iter_mut()
        .map(|p| p.highlight_if_hovered(pointer))
        .filter(|&hovered| hovered)
        .count()
}

/// Start fading every particle under the pointer. Returns how many started.
pub fn on_pointer_click(state: &mut SimState, pointer: Vec2) -> usize {
    let mut started = 0;
    for particle in state.particles.iter_mut() {
        if particle.contains_point(pointer) && particle.begin_fade() {
            started += 1;
        }
    }
    if started > 0 {
        log::debug!("Click at {:?} started {} fades", pointer, started);
    }
    started
}

/// Dispatch a pointer event to the matching handler
pub fn handle_pointer(state: &mut SimState, event: PointerEvent, rect: SurfaceRect) -> usize {
    let pointer = to_surface_coords(event.client, rect);
    match event.kind {
        PointerKind::Move => on_pointer_move(state, pointer),
        PointerKind::Click => on_pointer_click(state, pointer),
    }
}
