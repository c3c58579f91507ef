use crate::maps::Grid;
use crate::mesh::Mesh;
use crate::texture::Texture;
use anyhow::{Context, Result};
use mesh_tools::GltfBuilder;
use mesh_tools::Triangle;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Exports the given mesh in GLB format
///
/// Positions, normals and UVs are written as-is; the texture is saved
/// separately with [`export_texture_to_png`].
///
/// # Arguments
/// * `mesh` - The generated planet mesh
/// * `output_path` - Path where the GLB file will be saved
pub fn export_mesh_to_glb(mesh: &Mesh, output_path: &str) -> Result<()> {
    let mut builder = GltfBuilder::new();

    let positions: Vec<_> = mesh
        .vertices
        .iter()
        .map(|v| mesh_tools::compat::point3::new(v.x, v.y, v.z))
        .collect();
    let normals: Vec<_> = mesh
        .normals
        .iter()
        .map(|n| mesh_tools::compat::vector3::new(n.x, n.y, n.z))
        .collect();
    let texcoords: Vec<_> = mesh
        .uv
        .iter()
        .map(|uv| mesh_tools::compat::vector2::new(uv.x, uv.y))
        .collect();
    let indices: Vec<_> = mesh
        .triangles
        .chunks_exact(3)
        .map(|tri| Triangle::new(tri[0], tri[1], tri[2]))
        .collect();

    let mesh_index = builder.create_simple_mesh(
        Some(format!("{}Mesh", mesh.name)),
        &positions,
        &indices,
        Some(normals),
        Some(texcoords),
        None, // Texture is exported on its own
    );

    let node = builder.add_node(
        Some(mesh.name.clone()),
        Some(mesh_index),
        None, // Default position
        None, // Default rotation
        None, // Default scale
    );

    builder.add_scene(Some("Main Scene".to_string()), Some(vec![node]));
    builder.export_glb(output_path)?;

    Ok(())
}

/// Save the texture as an 8-bit RGB PNG
pub fn export_texture_to_png(texture: &Texture, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    texture
        .to_rgb_image()
        .save(output_path)
        .with_context(|| format!("failed to write texture to {}", output_path.display()))?;
    Ok(())
}

/// Export a 2D grid to a comma-separated text file
pub fn export_grid_to_file(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Grid dimensions: {} x {}", grid.width(), grid.height())?;

    for y in 0..grid.height() {
        let mut line = String::new();

        for x in 0..grid.width() {
            if x > 0 {
                line.push(',');
            }

            match grid.get(x, y) {
                // Keep 0 and 1 short
                Some(value) if value == 0.0 || value == 1.0 => {
                    line.push_str(&format!("{}", value as i32));
                }
                Some(value) => line.push_str(&format!("{:.3}", value)),
                None => line.push('0'),
            }
        }

        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}
