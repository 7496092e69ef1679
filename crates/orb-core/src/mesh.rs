//! Procedural geometry for the core, cage and shells.
//!
//! Meshes are plain triangle lists shared by the renderer (uploaded as
//! vertex/index buffers) and the picker (tested triangle by triangle).

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::pick::{ray_triangle, Ray};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

const ICO_INDICES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn ico_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

#[inline]
fn spherical_uv(p: Vec3) -> Vec2 {
    let n = p.normalize_or_zero();
    Vec2::new(
        n.z.atan2(n.x) / TAU + 0.5,
        n.y.clamp(-1.0, 1.0).asin() / PI + 0.5,
    )
}

impl Mesh {
    /// Icosahedron subdivided `detail` times per edge and pushed out to
    /// `radius`. Non-indexed: every triangle owns its three vertices.
    pub fn icosahedron(radius: f32, detail: u32) -> Self {
        let base = ico_vertices();
        let cols = detail as usize + 1;
        let mut mesh = Mesh::default();

        for face in ICO_INDICES {
            let (a, b, c) = (base[face[0]], base[face[1]], base[face[2]]);
            // Barycentric grid over the face, row i has cols - i + 1 points.
            let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
            for i in 0..=cols {
                let fi = i as f32 / cols as f32;
                let aj = a.lerp(c, fi);
                let bj = b.lerp(c, fi);
                let rows = cols - i;
                let row = (0..=rows)
                    .map(|j| {
                        if rows == 0 {
                            aj
                        } else {
                            aj.lerp(bj, j as f32 / rows as f32)
                        }
                    })
                    .collect();
                grid.push(row);
            }
            for i in 0..cols {
                for j in 0..(2 * (cols - i) - 1) {
                    let k = j / 2;
                    let tri = if j % 2 == 0 {
                        [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                    } else {
                        [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                    };
                    mesh.push_sphere_triangle(tri, radius, detail == 0);
                }
            }
        }
        mesh
    }

    fn push_sphere_triangle(&mut self, tri: [Vec3; 3], radius: f32, flat: bool) {
        let pts = tri.map(|p| p.normalize() * radius);
        let face_normal = (pts[1] - pts[0]).cross(pts[2] - pts[0]).normalize_or_zero();
        for p in pts {
            let idx = self.positions.len() as u32;
            self.positions.push(p);
            self.normals.push(if flat { face_normal } else { p.normalize() });
            self.uvs.push(spherical_uv(p));
            self.indices.push(idx);
        }
    }

    /// Latitude/longitude sphere with `width_segments` x `height_segments`
    /// quads; poles are single triangles.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);
        let mut mesh = Mesh::default();
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let p = Vec3::new(
                    -radius * (u * TAU).cos() * (v * PI).sin(),
                    radius * (v * PI).cos(),
                    radius * (u * TAU).sin() * (v * PI).sin(),
                );
                mesh.positions.push(p);
                mesh.normals.push(p.normalize_or_zero());
                mesh.uvs.push(Vec2::new(u, 1.0 - v));
            }
        }
        let stride = w + 1;
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * stride + ix + 1;
                let b = iy * stride + ix;
                let c = (iy + 1) * stride + ix;
                let d = (iy + 1) * stride + ix + 1;
                if iy != 0 {
                    mesh.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != h - 1 {
                    mesh.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }

    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }

    /// Nearest triangle hit along `ray`, in the mesh's own space.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        self.triangles()
            .filter_map(|[a, b, c]| ray_triangle(ray, a, b, c))
            .fold(None, |best: Option<f32>, t| {
                Some(best.map_or(t, |b| b.min(t)))
            })
    }

    /// Unique edges as position pairs, for wireframe drawing. Coincident
    /// vertices of neighbouring triangles are merged by position.
    pub fn edges(&self) -> Vec<[Vec3; 2]> {
        let key = |p: Vec3| {
            let q = (p * 1e4).round();
            (q.x as i64, q.y as i64, q.z as i64)
        };
        let mut seen = std::collections::BTreeSet::new();
        let mut out = Vec::new();
        for [a, b, c] in self.triangles() {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                let (kp, kq) = (key(p), key(q));
                let k = if kp <= kq { (kp, kq) } else { (kq, kp) };
                if seen.insert(k) {
                    out.push([p, q]);
                }
            }
        }
        out
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Vertices for a line list covering every unique edge.
    pub fn edge_vertices(&self) -> Vec<Vertex> {
        self.edges()
            .into_iter()
            .flat_map(|edge| edge.into_iter())
            .map(|p| Vertex {
                position: p.to_array(),
                normal: p.normalize_or_zero().to_array(),
                uv: spherical_uv(p).to_array(),
            })
            .collect()
    }
}
