//! Convex polyhedron geometry and the two line views drawn from it.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Indexed triangle mesh with shared vertices.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    /// Counter-clockwise (outward) triangles.
    pub triangles: Vec<[u16; 3]>,
}

impl Geometry {
    /// Regular dodecahedron centered at the origin with all vertices at
    /// `radius`. Each pentagonal face is fan-triangulated.
    pub fn dodecahedron(radius: f32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let r = 1.0 / t;

        let mut positions = Vec::with_capacity(20);
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    positions.push(Vec3::new(x, y, z));
                }
            }
        }
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                positions.push(Vec3::new(0.0, a * r, b * t));
                positions.push(Vec3::new(a * r, b * t, 0.0));
                positions.push(Vec3::new(a * t, 0.0, b * r));
            }
        }
        for p in &mut positions {
            *p = p.normalize() * radius;
        }

        // Face normals of a dodecahedron are the vertices of its dual icosahedron.
        let mut normals = Vec::with_capacity(12);
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                normals.push(Vec3::new(0.0, a * t, b).normalize());
                normals.push(Vec3::new(a * t, b, 0.0).normalize());
                normals.push(Vec3::new(a, 0.0, b * t).normalize());
            }
        }

        let mut triangles = Vec::with_capacity(36);
        for n in normals {
            let face = face_ring(&positions, n);
            for i in 1..face.len() - 1 {
                triangles.push([face[0], face[i], face[i + 1]]);
            }
        }

        Self {
            positions,
            triangles,
        }
    }

    pub fn triangle_normal(&self, tri: [u16; 3]) -> Vec3 {
        let [a, b, c] = tri.map(|i| self.positions[i as usize]);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Every distinct triangle edge as a line-list index buffer.
    pub fn wireframe_indices(&self) -> Vec<u16> {
        let mut seen = FnvHashSet::default();
        let mut out = Vec::with_capacity(self.triangles.len() * 6);
        for tri in &self.triangles {
            for (a, b) in tri_edges(*tri) {
                if seen.insert(edge_key(a, b)) {
                    out.push(a);
                    out.push(b);
                }
            }
        }
        out
    }
}

/// Line segments along the hard edges of a geometry: boundary edges, plus
/// edges whose two faces meet at more than a threshold angle.
#[derive(Clone, Debug, Default)]
pub struct EdgesGeometry {
    /// Segment endpoints, two per edge.
    pub positions: Vec<Vec3>,
}

impl EdgesGeometry {
    pub fn from_geometry(geometry: &Geometry, threshold_degrees: f32) -> Self {
        let threshold_dot = threshold_degrees.to_radians().cos();

        let mut faces: FnvHashMap<(u16, u16), SmallVec<[Vec3; 2]>> = FnvHashMap::default();
        let mut order = Vec::new();
        for tri in &geometry.triangles {
            let normal = geometry.triangle_normal(*tri);
            for (a, b) in tri_edges(*tri) {
                let key = edge_key(a, b);
                let entry = faces.entry(key).or_insert_with(|| {
                    order.push(key);
                    SmallVec::new()
                });
                entry.push(normal);
            }
        }

        let mut positions = Vec::new();
        for key in order {
            let normals = &faces[&key];
            let hard = match normals.as_slice() {
                [n0, n1] => n0.dot(*n1) <= threshold_dot,
                _ => true,
            };
            if hard {
                positions.push(geometry.positions[key.0 as usize]);
                positions.push(geometry.positions[key.1 as usize]);
            }
        }
        Self { positions }
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }
}

#[inline]
fn edge_key(a: u16, b: u16) -> (u16, u16) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
fn tri_edges([a, b, c]: [u16; 3]) -> [(u16, u16); 3] {
    [(a, b), (b, c), (c, a)]
}

// Vertices lying on the face with outward normal `n`, ordered counter-clockwise
// when viewed from outside.
fn face_ring(positions: &[Vec3], n: Vec3) -> Vec<u16> {
    let max_d = positions
        .iter()
        .map(|p| p.dot(n))
        .fold(f32::MIN, f32::max);
    let ring: Vec<u16> = (0..positions.len())
        .filter(|&i| (positions[i].dot(n) - max_d).abs() <= 1e-3 * max_d.abs().max(1.0))
        .map(|i| i as u16)
        .collect();

    let center = ring
        .iter()
        .map(|&i| positions[i as usize])
        .sum::<Vec3>()
        / ring.len() as f32;
    let u = (positions[ring[0] as usize] - center).normalize();
    let w = n.cross(u);
    let angle = |i: u16| {
        let d = positions[i as usize] - center;
        d.dot(w).atan2(d.dot(u))
    };
    let mut ring = ring;
    ring.sort_by(|&a, &b| angle(a).partial_cmp(&angle(b)).unwrap_or(Ordering::Equal));
    ring
}
