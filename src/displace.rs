use crate::maps::Grid;
use glam::{Vec2, Vec3};

/// Texel of a `size` x `size` map covering `uv`, clamped to the map
pub fn texel(uv: Vec2, size: usize) -> (usize, usize) {
    let max = size.saturating_sub(1) as f32;
    let x = (uv.x * size as f32).floor().clamp(0.0, max);
    let y = (uv.y * size as f32).floor().clamp(0.0, max);
    (x as usize, y as usize)
}

/// Push every vertex out along its direction by the height under its UV
///
/// The offset is `height * noise_scale`. When `radius` differs from 1 by more
/// than 0.01 the displaced vertices are scaled by it afterwards.
pub fn apply(vertices: &mut [Vec3], uv: &[Vec2], height: &Grid, noise_scale: f32, radius: f32) {
    let size = height.width();

    for (vertex, &coords) in vertices.iter_mut().zip(uv) {
        let (x, y) = texel(coords, size);
        let offset = height.get_clamped(x, y) * noise_scale;
        let direction = vertex.normalize_or_zero();
        *vertex += direction * offset;
    }

    if (radius - 1.0).abs() > 0.01 {
        for vertex in vertices.iter_mut() {
            *vertex *= radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Array2D;

    #[test]
    fn test_texel_is_clamped() {
        assert_eq!(texel(Vec2::new(0.0, 0.0), 8), (0, 0));
        assert_eq!(texel(Vec2::new(1.0, 1.0), 8), (7, 7));
        assert_eq!(texel(Vec2::new(0.49, 0.5), 8), (3, 4));
        assert_eq!(texel(Vec2::new(-0.2, 1.5), 8), (0, 7));
    }

    #[test]
    fn test_displaces_along_direction() {
        let height = Array2D::from_fn(2, 2, |x, _| if x == 0 { 0.25 } else { 0.5 });
        let mut vertices = vec![Vec3::X, Vec3::Y];
        let uv = vec![Vec2::new(0.1, 0.1), Vec2::new(0.9, 0.1)];

        apply(&mut vertices, &uv, &height, 2.0, 1.0);

        assert!((vertices[0] - Vec3::new(1.5, 0.0, 0.0)).length() < 1e-6);
        assert!((vertices[1] - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_radius_scaling() {
        let height = Array2D::square(4, 1.0);
        let uv = vec![Vec2::splat(0.5)];

        let mut vertices = vec![Vec3::Z];
        apply(&mut vertices, &uv, &height, 0.0, 3.0);
        assert_eq!(vertices[0], Vec3::new(0.0, 0.0, 3.0));

        // Radii within 0.01 of 1 are left unscaled
        let mut vertices = vec![Vec3::Z];
        apply(&mut vertices, &uv, &height, 0.0, 1.005);
        assert_eq!(vertices[0], Vec3::Z);
    }
}
