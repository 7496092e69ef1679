//! Ray casting against the orb's core.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::*;
use crate::mesh::Mesh;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// The same ray expressed in the local space of an object whose world
    /// transform is `model`. Distances along the result are local units.
    pub fn to_local(&self, model: Mat4) -> Ray {
        let inv = model.inverse();
        Ray::new(
            inv.transform_point3(self.origin),
            inv.transform_vector3(self.dir),
        )
    }
}

/// Nearest non-negative hit distance of a ray with a sphere. A ray starting
/// inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = -b - sq;
    if t0 >= 0.0 {
        return Some(t0);
    }
    let t1 = -b + sq;
    (t1 >= 0.0).then_some(t1)
}

/// Möller–Trumbore ray/triangle intersection, both faces.
#[inline]
pub fn ray_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = b - a;
    let e2 = c - a;
    let p = ray.dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray.dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t > EPS).then_some(t)
}

/// Convert a click in surface-relative pixels into normalized device
/// coordinates (x right, y up).
#[inline]
pub fn click_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let local = (client - rect_origin) / rect_size;
    Some(Vec2::new(local.x * 2.0 - 1.0, 1.0 - local.y * 2.0))
}

/// Geometry the click is tested against: the core and the cage parented to
/// it. Built once; the transform is supplied per query.
#[derive(Clone, Debug)]
pub struct CoreHitVolume {
    core: Mesh,
    cage: Mesh,
    bound: f32,
}

impl Default for CoreHitVolume {
    fn default() -> Self {
        Self::new(
            Mesh::icosahedron(CORE_RADIUS, CORE_DETAIL),
            Mesh::icosahedron(CAGE_RADIUS, CAGE_DETAIL),
        )
    }
}

impl CoreHitVolume {
    pub fn new(core: Mesh, cage: Mesh) -> Self {
        let bound = core.bounding_radius().max(cage.bounding_radius());
        Self { core, cage, bound }
    }

    /// Distance (in core-local units) to the nearest hit, if any.
    pub fn intersect(&self, world_ray: &Ray, core_model: Mat4) -> Option<f32> {
        let local = world_ray.to_local(core_model);
        ray_sphere(local.origin, local.dir, Vec3::ZERO, self.bound)?;
        match (self.core.intersect_ray(&local), self.cage.intersect_ray(&local)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
