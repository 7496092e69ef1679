//! Simulation and scene state shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! frame loop owns a single `OrbState`; input handlers never touch it directly
//! and go through the `InputQueue` instead.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::config::OrbConfig;
use crate::constants::*;
use crate::pick::Ray;
use crate::tween::ScaleTween;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at_orb(1.0)
    }
}

impl Camera {
    /// The fixed camera used by the page, looking down -Z at the orb.
    pub fn looking_at_orb(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = (width / height.max(1.0)).max(1e-3);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        let through = p.truncate() / p.w;
        Ray::new(self.eye, through - self.eye)
    }
}

/// The part of the state that drives the reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub spin_velocity: f32,
    /// Shield integrity, always within [0, 100].
    pub health: f32,
    /// Once true, stays true for the session.
    pub revealed: bool,
    pub last_pointer: Vec2,
}

impl SimulationState {
    pub fn new(initial_health: f32) -> Self {
        Self {
            spin_velocity: 0.0,
            health: initial_health.clamp(0.0, HEALTH_MAX),
            revealed: false,
            last_pointer: Vec2::ZERO,
        }
    }
}

/// Scene transforms advanced by the tick; purely visual.
#[derive(Clone, Debug)]
pub struct OrbPose {
    /// Group rotation around (x, y).
    pub group_rotation: Vec2,
    /// Core rotation around (x, y), relative to the group.
    pub core_rotation: Vec2,
    pub core_scale: f32,
    pub core_tween: Option<ScaleTween>,
    pub shells_visible: bool,
}

impl Default for OrbPose {
    fn default() -> Self {
        Self {
            group_rotation: Vec2::ZERO,
            core_rotation: Vec2::ZERO,
            core_scale: CORE_HIDDEN_SCALE,
            core_tween: None,
            shells_visible: true,
        }
    }
}

impl OrbPose {
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_quat(euler_xy(self.group_rotation))
    }

    /// World transform of the core (and its cage, which is parented to it).
    pub fn core_matrix(&self) -> Mat4 {
        self.group_matrix()
            * Mat4::from_scale_rotation_translation(
                Vec3::splat(self.core_scale),
                euler_xy(self.core_rotation),
                Vec3::ZERO,
            )
    }

    /// Scale the core settles at once the running animation ends.
    pub fn rest_scale(&self) -> f32 {
        match &self.core_tween {
            Some(tween) if tween.yoyo => tween.from,
            Some(tween) => tween.to,
            None => self.core_scale,
        }
    }

    /// Replace any running core animation.
    pub fn animate_core(&mut self, tween: ScaleTween) {
        self.core_tween = Some(tween);
    }

    pub fn advance_core(&mut self, dt: f32) {
        if let Some(tween) = &mut self.core_tween {
            self.core_scale = tween.advance(dt);
            if tween.is_finished() {
                self.core_tween = None;
            }
        }
    }
}

#[inline]
fn euler_xy(rot: Vec2) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rot.x, rot.y, 0.0)
}

/// Everything the frame loop owns about the orb.
#[derive(Clone, Debug)]
pub struct OrbState {
    pub sim: SimulationState,
    pub pose: OrbPose,
    pub ticks: u64,
}

impl OrbState {
    pub fn new(config: &OrbConfig) -> Self {
        Self {
            sim: SimulationState::new(config.initial_health),
            pose: OrbPose::default(),
            ticks: 0,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.sim.revealed
    }
}
