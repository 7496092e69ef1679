// Host-side tests for the orb simulation: spin accumulation, the health
// state machine and the reveal transition.

use glam::Vec2;
use orb_core::{
    apply_pointer_move, step, tick, Camera, CoreHitVolume, InputQueue, OrbCommand, OrbConfig,
    OrbState, HEALTH_MAX,
};
use proptest::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn run_ticks(state: &mut OrbState, cfg: &OrbConfig, n: usize) -> Vec<OrbCommand> {
    (0..n).filter_map(|_| step(state, cfg, DT)).collect()
}

#[test]
fn pointer_move_adds_scaled_distance() {
    let cfg = OrbConfig::shield();
    let mut state = OrbState::new(&cfg);
    apply_pointer_move(&mut state.sim, &cfg, Vec2::new(300.0, 400.0));
    assert!((state.sim.spin_velocity - 0.1).abs() < 1e-6);
    assert_eq!(state.sim.last_pointer, Vec2::new(300.0, 400.0));

    // Same position again adds nothing.
    apply_pointer_move(&mut state.sim, &cfg, Vec2::new(300.0, 400.0));
    assert!((state.sim.spin_velocity - 0.1).abs() < 1e-6);
}

#[test]
fn single_frame_collapse_from_last_health_point() {
    let cfg = OrbConfig::shield();
    let mut state = OrbState::new(&cfg);
    state.sim.health = 1.0;
    state.sim.spin_velocity = 1.0;

    assert_eq!(step(&mut state, &cfg, DT), None);
    assert!((state.sim.health - 0.5).abs() < 1e-6);
    assert!(!state.sim.revealed);

    assert_eq!(step(&mut state, &cfg, DT), Some(OrbCommand::Reveal));
    assert_eq!(state.sim.health, 0.0);
    assert!(state.sim.revealed);
}

#[test]
fn idle_orb_regenerates_to_full_without_overshoot() {
    let cfg = OrbConfig::shield();
    let mut state = OrbState::new(&cfg);
    state.sim.health = 50.0;

    run_ticks(&mut state, &cfg, 200);
    assert!((state.sim.health - 90.0).abs() < 1e-3);

    run_ticks(&mut state, &cfg, 400);
    assert_eq!(state.sim.health, HEALTH_MAX);
}

#[test]
fn mid_band_speed_neither_drains_nor_regenerates() {
    let cfg = OrbConfig::shield();
    let mut state = OrbState::new(&cfg);
    state.sim.health = 60.0;
    state.sim.spin_velocity = 0.06;
    step(&mut state, &cfg, DT);
    assert_eq!(state.sim.health, 60.0);
}

#[test]
fn sustained_shaking_reveals_exactly_once() {
    let cfg = OrbConfig::shield();
    let mut state = OrbState::new(&cfg);
    let mut reveals = 0;
    for _ in 0..400 {
        state.sim.spin_velocity = 0.5;
        if step(&mut state, &cfg, DT) == Some(OrbCommand::Reveal) {
            reveals += 1;
        }
    }
    assert_eq!(reveals, 1);
    assert!(state.sim.revealed);
    assert_eq!(state.sim.health, 0.0);
}

#[test]
fn revealed_orb_does_not_regenerate() {
    let cfg = OrbConfig::shield();
    let mut state = OrbState::new(&cfg);
    state.sim.health = 0.5;
    state.sim.spin_velocity = 1.0;
    run_ticks(&mut state, &cfg, 2);
    assert!(state.sim.revealed);

    state.sim.spin_velocity = 0.0;
    run_ticks(&mut state, &cfg, 100);
    assert_eq!(state.sim.health, 0.0);
}

#[test]
fn threshold_variant_reveals_on_one_big_move() {
    let cfg = OrbConfig::threshold();
    let (mut state, cam, vol, mut queue) = (
        OrbState::new(&cfg),
        Camera::looking_at_orb(1.0),
        CoreHitVolume::default(),
        InputQueue::new(),
    );
    queue.pointer_moved(Vec2::new(400.0, 0.0));
    let out = tick(&mut state, &cfg, &cam, &vol, &mut queue, DT);
    assert_eq!(out.commands.as_slice(), &[OrbCommand::Reveal]);
    assert_eq!(state.sim.health, HEALTH_MAX);
    assert!(!out.visuals.shells_visible);
}

#[test]
fn threshold_variant_ignores_slow_spin() {
    let cfg = OrbConfig::threshold();
    let mut state = OrbState::new(&cfg);
    state.sim.spin_velocity = 0.15;
    assert_eq!(step(&mut state, &cfg, DT), None);
    assert!(!state.sim.revealed);
}

proptest! {
    #[test]
    fn health_stays_in_bounds(
        start in 0.0f32..=100.0,
        kicks in proptest::collection::vec(0.0f32..0.5, 1..200),
    ) {
        let cfg = OrbConfig::shield();
        let mut state = OrbState::new(&cfg);
        state.sim.health = start;
        for kick in kicks {
            state.sim.spin_velocity += kick;
            step(&mut state, &cfg, DT);
            prop_assert!((0.0..=HEALTH_MAX).contains(&state.sim.health));
        }
    }

    #[test]
    fn reveal_is_never_undone(
        moves in proptest::collection::vec((0.0f32..2000.0, 0.0f32..2000.0), 1..100),
    ) {
        let cfg = OrbConfig::shield();
        let mut state = OrbState::new(&cfg);
        let mut seen_reveal = false;
        for (x, y) in moves {
            apply_pointer_move(&mut state.sim, &cfg, Vec2::new(x, y));
            step(&mut state, &cfg, DT);
            if seen_reveal {
                prop_assert!(state.sim.revealed);
            }
            seen_reveal |= state.sim.revealed;
        }
    }
}
