//! Per-frame update of the orb.
//!
//! One call per display frame. Input is drained first so clicks see the state
//! left by the previous frame, then spin, health and the reveal are advanced.

use smallvec::SmallVec;

use crate::config::{OrbConfig, RevealRule};
use crate::constants::*;
use crate::input::{apply_pointer_move, InputEvent, InputQueue};
use crate::pick::CoreHitVolume;
use crate::state::{Camera, OrbState};
use crate::tween::{Ease, ScaleTween};
use glam::Vec2;

/// Side effects the page must carry out. Emitted by the state machine so they
/// can be asserted without a browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbCommand {
    /// The shield just collapsed. Emitted once per session.
    Reveal,
    /// A click landed on the revealed core; start the download.
    Download,
}

/// Values the renderer and HUD need for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visuals {
    pub health_percent: f32,
    pub health_critical: bool,
    pub gas_opacity: f32,
    pub gas_outer_opacity: f32,
    pub aura_c: f32,
    pub shells_visible: bool,
}

impl Visuals {
    pub fn from_state(state: &OrbState) -> Self {
        let health = state.sim.health;
        let h = health / HEALTH_MAX;
        Self {
            health_percent: health,
            health_critical: health < HEALTH_CRITICAL,
            gas_opacity: GAS_OPACITY * h,
            gas_outer_opacity: GAS_OUTER_OPACITY * h,
            aura_c: AURA_C * h,
            shells_visible: state.pose.shells_visible,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub commands: SmallVec<[OrbCommand; 2]>,
    pub visuals: Visuals,
}

/// Drain `queue`, advance one frame and report what the page should do.
/// `dt` is wall-clock seconds since the last frame and only drives tweens;
/// spin and health advance per frame.
pub fn tick(
    state: &mut OrbState,
    config: &OrbConfig,
    camera: &Camera,
    hit_volume: &CoreHitVolume,
    queue: &mut InputQueue,
    dt: f32,
) -> FrameOutput {
    let mut commands = SmallVec::new();
    for event in queue.drain() {
        match event {
            InputEvent::PointerMoved { pos } => apply_pointer_move(&mut state.sim, config, pos),
            InputEvent::Click { ndc } => {
                if let Some(cmd) = handle_click(state, camera, hit_volume, ndc) {
                    commands.push(cmd);
                }
            }
        }
    }
    if let Some(cmd) = step(state, config, dt) {
        commands.push(cmd);
    }
    FrameOutput {
        commands,
        visuals: Visuals::from_state(state),
    }
}

/// Advance spin, health and the reveal by one frame. Returns
/// `Some(OrbCommand::Reveal)` on the frame the shield collapses.
pub fn step(state: &mut OrbState, config: &OrbConfig, dt: f32) -> Option<OrbCommand> {
    state.ticks += 1;
    let sim = &mut state.sim;
    let pose = &mut state.pose;

    pose.group_rotation.y += config.idle_rotation;
    pose.group_rotation.y += sim.spin_velocity;
    pose.group_rotation.x += sim.spin_velocity * config.tilt_factor;
    sim.spin_velocity *= config.friction;

    let speed = sim.spin_velocity.abs();
    let collapse = match config.reveal {
        RevealRule::Health {
            drain_above,
            drain_per_tick,
            regen_below,
            regen_per_tick,
        } => {
            if speed > drain_above && sim.health > 0.0 {
                sim.health -= drain_per_tick;
            } else if speed < regen_below && sim.health < HEALTH_MAX && !sim.revealed {
                sim.health += regen_per_tick;
            }
            sim.health = sim.health.clamp(0.0, HEALTH_MAX);
            sim.health <= 0.0
        }
        RevealRule::Threshold { velocity } => speed > velocity,
    };

    let mut reveal = None;
    if collapse && !sim.revealed {
        sim.revealed = true;
        pose.shells_visible = false;
        pose.animate_core(ScaleTween::new(
            pose.core_scale,
            1.0,
            CORE_REVEAL_SECS,
            Ease::BackOut,
        ));
        log::info!("[orb] shield down after {} ticks", state.ticks);
        reveal = Some(OrbCommand::Reveal);
    }

    pose.core_rotation.x += CORE_SPIN[0];
    pose.core_rotation.y += CORE_SPIN[1];
    pose.advance_core(dt);
    reveal
}

/// Hit-test a click against the core. Ignored until the shield is down.
/// Every hit downloads again; there is no once-only guard.
pub fn handle_click(
    state: &mut OrbState,
    camera: &Camera,
    hit_volume: &CoreHitVolume,
    ndc: Vec2,
) -> Option<OrbCommand> {
    if !state.sim.revealed {
        return None;
    }
    let ray = camera.ray_from_ndc(ndc);
    let hit = hit_volume.intersect(&ray, state.pose.core_matrix());
    match hit {
        Some(t) => {
            log::debug!("[click] core hit at t={:.3} ndc=({:.3},{:.3})", t, ndc.x, ndc.y);
            state.pose.animate_core(
                ScaleTween::new(
                    state.pose.rest_scale(),
                    CORE_PULSE_SCALE,
                    CORE_PULSE_SECS,
                    Ease::QuadOut,
                )
                .yoyo(),
            );
            Some(OrbCommand::Download)
        }
        None => {
            log::debug!("[click] miss ndc=({:.3},{:.3})", ndc.x, ndc.y);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn setup(config: &OrbConfig) -> (OrbState, Camera, CoreHitVolume, InputQueue) {
        (
            OrbState::new(config),
            Camera::looking_at_orb(1.0),
            CoreHitVolume::default(),
            InputQueue::new(),
        )
    }

    #[test]
    fn idle_frame_rotates_group_and_core() {
        let cfg = OrbConfig::shield();
        let mut state = OrbState::new(&cfg);
        step(&mut state, &cfg, DT);
        assert!((state.pose.group_rotation.y - IDLE_ROTATION).abs() < 1e-7);
        assert_eq!(state.pose.group_rotation.x, 0.0);
        assert_eq!(state.pose.core_rotation, Vec2::new(0.01, 0.02));
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn spin_tilts_by_config_factor() {
        let cfg = OrbConfig::shield();
        let mut state = OrbState::new(&cfg);
        state.sim.spin_velocity = 0.04;
        step(&mut state, &cfg, DT);
        assert!((state.pose.group_rotation.x - 0.02).abs() < 1e-7);
        assert!((state.pose.group_rotation.y - (IDLE_ROTATION + 0.04)).abs() < 1e-7);
        assert!((state.sim.spin_velocity - 0.038).abs() < 1e-7);
    }

    #[test]
    fn reveal_starts_core_growth_and_hides_shells() {
        let cfg = OrbConfig::threshold();
        let mut state = OrbState::new(&cfg);
        state.sim.spin_velocity = 1.0;
        assert_eq!(step(&mut state, &cfg, DT), Some(OrbCommand::Reveal));
        assert!(!state.pose.shells_visible);
        assert!(state.pose.core_tween.is_some());
        for _ in 0..120 {
            assert_eq!(step(&mut state, &cfg, DT), None);
        }
        assert!((state.pose.core_scale - 1.0).abs() < 1e-5);
        assert!(state.pose.core_tween.is_none());
    }

    #[test]
    fn queued_click_uses_previous_frame_state() {
        let cfg = OrbConfig::threshold();
        let (mut state, cam, vol, mut queue) = setup(&cfg);
        // The click is queued before the move that will trigger the reveal,
        // so it is evaluated while the shield is still up.
        queue.click(Vec2::ZERO);
        queue.pointer_moved(Vec2::new(400.0, 0.0));
        let out = tick(&mut state, &cfg, &cam, &vol, &mut queue, DT);
        assert_eq!(out.commands.as_slice(), &[OrbCommand::Reveal]);
        assert!(queue.is_empty());
    }

    #[test]
    fn centre_click_after_reveal_downloads_and_pulses() {
        let cfg = OrbConfig::threshold();
        let (mut state, cam, vol, mut queue) = setup(&cfg);
        state.sim.revealed = true;
        state.pose.core_scale = 1.0;
        queue.click(Vec2::ZERO);
        let out = tick(&mut state, &cfg, &cam, &vol, &mut queue, DT);
        assert_eq!(out.commands.as_slice(), &[OrbCommand::Download]);
        let tween = state.pose.core_tween.as_ref().expect("pulse");
        assert!(tween.yoyo);
        assert!((tween.to - CORE_PULSE_SCALE).abs() < 1e-6);
    }

    #[test]
    fn visuals_follow_health() {
        let cfg = OrbConfig::shield();
        let mut state = OrbState::new(&cfg);
        state.sim.health = 25.0;
        let v = Visuals::from_state(&state);
        assert!(v.health_critical);
        assert!((v.gas_opacity - 0.15).abs() < 1e-6);
        assert!((v.gas_outer_opacity - 0.075).abs() < 1e-6);
        assert!((v.aura_c - 0.125).abs() < 1e-6);
        state.sim.health = 30.0;
        assert!(!Visuals::from_state(&state).health_critical);
    }

    proptest::proptest! {
        #[test]
        fn spin_decays_geometrically(v in -2.0f32..2.0, n in 1usize..60) {
            let cfg = OrbConfig::threshold();
            let mut state = OrbState::new(&cfg);
            state.sim.revealed = true;
            state.sim.spin_velocity = v;
            for _ in 0..n {
                step(&mut state, &cfg, DT);
            }
            let expected = v * cfg.friction.powi(n as i32);
            proptest::prop_assert!(
                (state.sim.spin_velocity - expected).abs() <= 1e-5 * v.abs().max(1.0)
            );
        }
    }
}
