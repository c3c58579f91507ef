use crate::biome::Biome;
use crate::config::GenerationParams;
use crate::error::PlanetError;
use crate::maps;
use crate::mesh::Mesh;
use crate::noise_field::NoiseField;
use crate::texture::{self, Texture};
use crate::{displace, octahedron, uv};

/// Generate a planet mesh and its surface texture
///
/// Builds the octahedron sphere, samples the height map (plus humidity and
/// temperature unless `params.moon` is set), paints the texture, displaces
/// the vertices by the final height map and recomputes the normals.
///
/// # Errors
/// * `PlanetError::InvalidParameter` - if the radius is not positive or the
///   texture size is zero
pub fn generate(params: &GenerationParams) -> Result<(Mesh, Texture), PlanetError> {
    let params = params.validated()?;

    let octahedron::Octahedron {
        mut vertices,
        triangles,
    } = octahedron::build(params.subdivision_level);
    let normals = octahedron::normalize(&mut vertices)?;
    let texcoords = uv::compute(&vertices);
    log::debug!(
        "octahedron level {}: {} vertices, {} triangles",
        params.subdivision_level,
        vertices.len(),
        triangles.len() / 3
    );

    let noise = NoiseField::new(params.frequency_multiplier, params.amplitude_multiplier);
    let mut height = maps::height_map(&noise, params.texture_size, params.sample_scale, 1.0);

    let texture = if params.moon {
        texture::moon_texture(&height)
    } else {
        let humidity = maps::humidity_map(&height, &params.thresholds);
        let temperature = maps::temperature_map(&height, params.noise_scale);
        let (texture, counts) = texture::compose(
            &noise,
            &mut height,
            &humidity,
            &temperature,
            &params.thresholds,
        );
        for biome in Biome::ALL {
            log::debug!("{:?}: {} texels", biome, counts.get(biome));
        }
        texture
    };

    displace::apply(&mut vertices, &texcoords, &height, params.noise_scale, params.radius);

    let name = if params.moon { "Moon" } else { "Planet" };
    let mut mesh = Mesh {
        name: name.to_string(),
        vertices,
        normals,
        uv: texcoords,
        triangles,
    };
    mesh.recalculate_normals();

    log::info!(
        "generated {} with {} vertices and a {}x{} texture (bounding radius {:.3})",
        mesh.name,
        mesh.vertices.len(),
        texture.width(),
        texture.height(),
        mesh.bounding_radius()
    );

    Ok((mesh, texture))
}
