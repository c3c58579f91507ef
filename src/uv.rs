//! Spherical texture coordinates for the octahedron vertices

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Longitudes pinned onto the four duplicated vertices at each pole
pub const POLE_ANCHORS: [f32; 4] = [0.125, 0.375, 0.625, 0.875];

/// Compute per-vertex UVs for unit-length vertices in emission order
///
/// `u` is the longitude in [0, 1] and `v` the latitude mapped to [0, 1].
/// A vertex that repeats the previous vertex's x coordinate marks a seam
/// duplicate, so the previous vertex is moved to `u = 1` to close the wrap.
pub fn compute(vertices: &[Vec3]) -> Vec<Vec2> {
    let mut uv: Vec<Vec2> = Vec::with_capacity(vertices.len());
    let mut prev_x = 1.0;

    for (i, v) in vertices.iter().enumerate() {
        if i > 0 && v.x == prev_x {
            uv[i - 1].x = 1.0;
        }
        prev_x = v.x;

        let mut u = v.x.atan2(v.z) / (-2.0 * PI);
        if u < 0.0 {
            u += 1.0;
        }

        uv.push(Vec2::new(u, v.y.asin() / PI + 0.5));
    }

    let len = uv.len();
    if len >= 8 {
        for (k, anchor) in POLE_ANCHORS.into_iter().enumerate() {
            uv[k].x = anchor;
            uv[len - 4 + k].x = anchor;
        }
    }

    uv
}
