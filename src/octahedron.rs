//! Subdivided octahedron sphere topology
//!
//! Vertices are emitted ring by ring from the south pole to the north pole.
//! Each ring is split into four quadrants, and every pole is duplicated once
//! per quadrant so the UV seams can be pinned later.

use crate::error::PlanetError;
use glam::Vec3;

/// Equatorial directions bounding the four quadrants, in emission order
const DIRECTIONS: [Vec3; 4] = [Vec3::NEG_X, Vec3::NEG_Z, Vec3::X, Vec3::Z];

/// Raw octahedron geometry before projection onto the sphere
#[derive(Debug, Clone, PartialEq)]
pub struct Octahedron {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
}

/// Number of vertices emitted for a given resolution
pub fn vertex_count(resolution: usize) -> usize {
    (resolution + 1) * (resolution + 1) * 4 - (resolution * 2 - 1) * 3
}

/// Number of triangle indices emitted for a given subdivision level
pub fn index_count(subdivision_level: u32) -> usize {
    (1 << (subdivision_level * 2 + 3)) * 3
}

/// Build the subdivided octahedron for `subdivision_level`
///
/// The level is expected to be clamped already; the resolution (vertices per
/// edge) is `2^subdivision_level`.
pub fn build(subdivision_level: u32) -> Octahedron {
    let resolution = 1usize << subdivision_level;
    let mut vertices = vec![Vec3::ZERO; vertex_count(resolution)];
    let mut triangles = vec![0u32; index_count(subdivision_level)];

    let mut v = 0;
    let mut v_bottom = 0;
    let mut t = 0;

    for _ in 0..4 {
        vertices[v] = Vec3::NEG_Y;
        v += 1;
    }

    // Lower hemisphere, rings growing away from the south pole
    for i in 1..=resolution {
        let progress = i as f32 / resolution as f32;
        let mut to = Vec3::NEG_Y.lerp(Vec3::Z, progress);
        vertices[v] = to;
        v += 1;

        for direction in DIRECTIONS {
            let from = to;
            to = Vec3::NEG_Y.lerp(direction, progress);
            t = lower_strip(i, v, v_bottom, t, &mut triangles);
            v = vertex_line(from, to, i, v, &mut vertices);

            v_bottom += if i > 1 { i - 1 } else { 1 };
        }

        v_bottom = v - 1 - i * 4;
    }

    // Upper hemisphere, rings shrinking towards the north pole
    for i in (1..resolution).rev() {
        let progress = i as f32 / resolution as f32;
        let mut to = Vec3::Y.lerp(Vec3::Z, progress);
        vertices[v] = to;
        v += 1;

        for direction in DIRECTIONS {
            let from = to;
            to = Vec3::Y.lerp(direction, progress);
            t = upper_strip(i, v, v_bottom, t, &mut triangles);
            v = vertex_line(from, to, i, v, &mut vertices);

            v_bottom += i + 1;
        }

        v_bottom = v - 1 - i * 4;
    }

    for _ in 0..4 {
        triangles[t] = v_bottom as u32;
        triangles[t + 1] = v as u32;
        v_bottom += 1;
        triangles[t + 2] = v_bottom as u32;
        t += 3;

        vertices[v] = Vec3::Y;
        v += 1;
    }

    debug_assert_eq!(v, vertices.len());
    debug_assert_eq!(t, triangles.len());

    Octahedron { vertices, triangles }
}

/// Write `steps` vertices interpolated from `from` (exclusive) to `to` (inclusive)
fn vertex_line(from: Vec3, to: Vec3, steps: usize, mut v: usize, vertices: &mut [Vec3]) -> usize {
    for i in 1..=steps {
        vertices[v] = from.lerp(to, i as f32 / steps as f32);
        v += 1;
    }

    v
}

/// Stitch a ring segment to the shorter segment below it (towards the south pole)
fn lower_strip(steps: usize, mut v_top: usize, mut v_bottom: usize, mut t: usize, triangles: &mut [u32]) -> usize {
    for _ in 1..steps {
        t = push_triangle(triangles, t, v_bottom, v_top - 1, v_top);

        let next_bottom = v_bottom + 1;
        t = push_triangle(triangles, t, v_bottom, v_top, next_bottom);
        v_bottom = next_bottom;
        v_top += 1;
    }

    push_triangle(triangles, t, v_bottom, v_top - 1, v_top)
}

/// Stitch a ring segment to the longer segment below it (towards the equator)
fn upper_strip(steps: usize, mut v_top: usize, mut v_bottom: usize, mut t: usize, triangles: &mut [u32]) -> usize {
    t = push_triangle(triangles, t, v_bottom, v_top - 1, v_bottom + 1);
    v_bottom += 1;

    for _ in 1..=steps {
        t = push_triangle(triangles, t, v_top - 1, v_top, v_bottom);
        t = push_triangle(triangles, t, v_bottom, v_top, v_bottom + 1);
        v_top += 1;
        v_bottom += 1;
    }

    t
}

fn push_triangle(triangles: &mut [u32], t: usize, a: usize, b: usize, c: usize) -> usize {
    triangles[t] = a as u32;
    triangles[t + 1] = b as u32;
    triangles[t + 2] = c as u32;
    t + 3
}

/// Project every vertex onto the unit sphere and return the matching normals
///
/// The normals are provisional: they are replaced once the surface has been
/// displaced.
pub fn normalize(vertices: &mut [Vec3]) -> Result<Vec<Vec3>, PlanetError> {
    let mut normals = Vec::with_capacity(vertices.len());

    for (i, vertex) in vertices.iter_mut().enumerate() {
        let unit = vertex.try_normalize().ok_or_else(|| {
            PlanetError::invalid("vertex", format!("vertex {} has zero length and no direction", i))
        })?;
        *vertex = unit;
        normals.push(unit);
    }

    Ok(normals)
}
