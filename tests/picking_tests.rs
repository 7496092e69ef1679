// Host-side tests for click handling: reveal gating, ray casting against the
// core and its cage, and the download pulse.

use glam::Vec2;
use orb_core::{
    click_to_ndc, handle_click, step, tick, Camera, CoreHitVolume, InputQueue, OrbCommand,
    OrbConfig, OrbState, CORE_PULSE_SCALE,
};
use proptest::prelude::*;

const DT: f32 = 1.0 / 60.0;

struct Scene {
    cfg: OrbConfig,
    state: OrbState,
    camera: Camera,
    volume: CoreHitVolume,
    queue: InputQueue,
}

impl Scene {
    fn new() -> Self {
        let cfg = OrbConfig::shield();
        Self {
            state: OrbState::new(&cfg),
            cfg,
            camera: Camera::looking_at_orb(1.0),
            volume: CoreHitVolume::default(),
            queue: InputQueue::new(),
        }
    }

    fn revealed() -> Self {
        let mut s = Self::new();
        s.state.sim.revealed = true;
        s.state.pose.core_scale = 1.0;
        s.state.pose.shells_visible = false;
        s
    }

    fn click(&mut self, ndc: Vec2) -> Vec<OrbCommand> {
        self.queue.click(ndc);
        tick(
            &mut self.state,
            &self.cfg,
            &self.camera,
            &self.volume,
            &mut self.queue,
            DT,
        )
        .commands
        .into_vec()
    }
}

proptest! {
    #[test]
    fn clicks_are_ignored_while_shielded(x in -1.0f32..1.0, y in -1.0f32..1.0) {
        let mut s = Scene::new();
        // Even a full-size core is not clickable before the reveal.
        s.state.pose.core_scale = 1.0;
        prop_assert!(s.click(Vec2::new(x, y)).is_empty());
        prop_assert!(s.state.pose.core_tween.is_none());
        prop_assert!(!s.state.sim.revealed);
    }
}

#[test]
fn centre_click_downloads_every_time() {
    let mut s = Scene::revealed();
    assert_eq!(s.click(Vec2::ZERO), vec![OrbCommand::Download]);
    for _ in 0..30 {
        step(&mut s.state, &s.cfg, DT);
    }
    assert_eq!(s.click(Vec2::ZERO), vec![OrbCommand::Download]);
}

#[test]
fn far_click_misses() {
    let mut s = Scene::revealed();
    assert!(s.click(Vec2::new(0.9, 0.9)).is_empty());
    assert!(s.click(Vec2::new(0.36, 0.0)).is_empty());
    assert!(s.state.pose.core_tween.is_none());
}

#[test]
fn near_centre_click_hits_after_idle_rotation() {
    let mut s = Scene::revealed();
    for _ in 0..500 {
        step(&mut s.state, &s.cfg, DT);
    }
    let ray = s.camera.ray_from_ndc(Vec2::new(0.17, 0.0));
    assert!(s.volume.intersect(&ray, s.state.pose.core_matrix()).is_some());
}

#[test]
fn hit_pulses_to_absolute_scale_and_settles() {
    let mut s = Scene::revealed();
    let cmd = handle_click(&mut s.state, &s.camera, &s.volume, Vec2::ZERO);
    assert_eq!(cmd, Some(OrbCommand::Download));

    let mut peak: f32 = 0.0;
    for _ in 0..60 {
        step(&mut s.state, &s.cfg, DT);
        peak = peak.max(s.state.pose.core_scale);
    }
    assert!((peak - CORE_PULSE_SCALE).abs() < 0.05);
    assert!((s.state.pose.core_scale - 1.0).abs() < 1e-5);
    assert!(s.state.pose.core_tween.is_none());
}

#[test]
fn ndc_mapping_over_container_rect() {
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(400.0, 200.0);
    assert_eq!(click_to_ndc(Vec2::new(300.0, 150.0), origin, size), Some(Vec2::ZERO));
    assert_eq!(
        click_to_ndc(Vec2::new(100.0, 50.0), origin, size),
        Some(Vec2::new(-1.0, 1.0))
    );
    assert_eq!(click_to_ndc(Vec2::ZERO, origin, Vec2::ZERO), None);
}
