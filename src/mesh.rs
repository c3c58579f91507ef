use glam::{Vec2, Vec3};

/// Renderable triangle mesh
///
/// `vertices`, `normals` and `uv` are index-aligned; `triangles` holds three
/// vertex indices per face, counter-clockwise when seen from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uv: Vec<Vec2>,
    pub triangles: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Recompute smooth vertex normals from the triangles
    ///
    /// Every face adds its unit normal to each of its three vertices, then
    /// the sums are normalized. Vertices that share a position but not an
    /// index (seam duplicates) are shaded independently.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.triangles.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = self.vertices[i0];
            let b = self.vertices[i1];
            let c = self.vertices[i2];
            let face_normal = (b - a).cross(c - a).normalize_or_zero();
            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        self.normals = normals.into_iter().map(Vec3::normalize_or_zero).collect();
    }

    /// Distance from the origin to the farthest vertex
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}
