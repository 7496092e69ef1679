//! Normalized input events and the pointer energy accumulator.
//!
//! Page handlers push events here as they arrive; the frame tick drains the
//! queue once, so ordering is independent of when the browser fires them.

use glam::Vec2;
use std::collections::VecDeque;

use crate::config::OrbConfig;
use crate::state::SimulationState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in client pixels.
    PointerMoved { pos: Vec2 },
    /// Click on the render surface, already in normalized device coordinates.
    Click { ndc: Vec2 },
}

#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    /// Set once nothing will drain the queue again; later pushes are dropped.
    closed: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        if !self.closed {
            self.events.push_back(event);
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.push(InputEvent::PointerMoved { pos });
    }

    pub fn click(&mut self, ndc: Vec2) {
        self.push(InputEvent::Click { ndc });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard pending events and refuse new ones.
    pub fn close(&mut self) {
        self.closed = true;
        self.events.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Take every queued event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

/// Add spin proportional to the distance travelled since the last pointer
/// position. Growth is unbounded: a faster shake reveals sooner.
pub fn apply_pointer_move(sim: &mut SimulationState, config: &OrbConfig, pos: Vec2) {
    let speed = pos.distance(sim.last_pointer);
    sim.spin_velocity += speed * config.pointer_scale;
    sim.last_pointer = pos;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_preserves_order() {
        let mut q = InputQueue::new();
        q.pointer_moved(Vec2::new(1.0, 2.0));
        q.click(Vec2::ZERO);
        q.pointer_moved(Vec2::new(3.0, 4.0));
        let got: Vec<_> = q.drain().collect();
        assert_eq!(
            got,
            vec![
                InputEvent::PointerMoved {
                    pos: Vec2::new(1.0, 2.0)
                },
                InputEvent::Click { ndc: Vec2::ZERO },
                InputEvent::PointerMoved {
                    pos: Vec2::new(3.0, 4.0)
                },
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn closed_queue_drops_input() {
        let mut q = InputQueue::new();
        q.pointer_moved(Vec2::ONE);
        q.close();
        assert!(q.is_closed());
        assert!(q.is_empty());
        for i in 0..100 {
            q.pointer_moved(Vec2::splat(i as f32));
            q.click(Vec2::ZERO);
        }
        assert_eq!(q.len(), 0);
        assert_eq!(q.drain().count(), 0);
    }

    #[test]
    fn pointer_energy_scales_with_distance() {
        let cfg = OrbConfig::shield();
        let mut sim = SimulationState::new(100.0);
        sim.last_pointer = Vec2::new(100.0, 100.0);
        apply_pointer_move(&mut sim, &cfg, Vec2::new(103.0, 104.0));
        assert!((sim.spin_velocity - 5.0 * cfg.pointer_scale).abs() < 1e-9);
        assert_eq!(sim.last_pointer, Vec2::new(103.0, 104.0));
    }

    #[test]
    fn first_move_measures_from_origin() {
        let cfg = OrbConfig::threshold();
        let mut sim = SimulationState::new(100.0);
        apply_pointer_move(&mut sim, &cfg, Vec2::new(30.0, 40.0));
        assert!((sim.spin_velocity - 50.0 * cfg.pointer_scale).abs() < 1e-9);
    }

    #[test]
    fn stationary_pointer_adds_nothing() {
        let cfg = OrbConfig::shield();
        let mut sim = SimulationState::new(100.0);
        sim.last_pointer = Vec2::new(5.0, 5.0);
        apply_pointer_move(&mut sim, &cfg, Vec2::new(5.0, 5.0));
        assert_eq!(sim.spin_velocity, 0.0);
    }
}
