use anyhow::Result;
use clap::Parser;
use planet_maker::config::{GenerationParams, Thresholds};
use planet_maker::export::{export_grid_to_file, export_mesh_to_glb, export_texture_to_png};
use planet_maker::maps;
use planet_maker::noise_field::NoiseField;

/// Generate a textured planet or moon mesh
#[derive(Debug, Parser)]
#[command(name = "planet-maker", version)]
struct Args {
    /// Planet radius
    #[arg(long, default_value_t = 1.0)]
    radius: f32,

    /// Octahedron subdivision level (clamped to 0-6)
    #[arg(long, default_value_t = 0)]
    subdivisions: u32,

    /// Scale of the sampled noise domain
    #[arg(long, default_value_t = 1.0)]
    sample_scale: f32,

    /// Height displacement strength
    #[arg(long, default_value_t = 1.0)]
    noise_scale: f32,

    /// Side length of the square texture
    #[arg(long, default_value_t = 1024)]
    texture_size: usize,

    /// Generate a grayscale moon instead of a planet with biomes
    #[arg(long)]
    moon: bool,

    /// Amplitude factor between noise octaves
    #[arg(long, default_value_t = 0.4)]
    amplitude: f32,

    /// Frequency factor between noise octaves
    #[arg(long, default_value_t = 2.5)]
    frequency: f32,

    #[arg(long, default_value_t = 0.5)]
    sea_level: f32,

    #[arg(long, default_value_t = 0.05)]
    beach_level: f32,

    #[arg(long, default_value_t = 0.34)]
    sea_humidity_spread: f32,

    /// Output path for the GLB mesh
    #[arg(long, default_value = "planet.glb")]
    mesh_out: String,

    /// Output path for the PNG texture
    #[arg(long, default_value = "planet.png")]
    texture_out: String,

    /// Also dump the raw height map as comma-separated text
    #[arg(long)]
    heightmap_out: Option<String>,
}

impl Args {
    fn params(&self) -> GenerationParams {
        GenerationParams {
            radius: self.radius,
            subdivision_level: self.subdivisions,
            sample_scale: self.sample_scale,
            noise_scale: self.noise_scale,
            texture_size: self.texture_size,
            moon: self.moon,
            amplitude_multiplier: self.amplitude,
            frequency_multiplier: self.frequency,
            thresholds: Thresholds {
                sea_level: self.sea_level,
                beach_level: self.beach_level,
                sea_humidity_spread: self.sea_humidity_spread,
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = args.params();

    println!("Planet Maker - octahedron sphere generator");
    println!(
        "Generating {} with subdivision level {} and a {}x{} texture...",
        if params.moon { "moon" } else { "planet" },
        params.subdivision_level,
        params.texture_size,
        params.texture_size
    );

    let (mesh, texture) = planet_maker::generate(&params)?;
    println!(
        "Built mesh with {} vertices and {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    export_mesh_to_glb(&mesh, &args.mesh_out)?;
    println!("Exported mesh to: {}", args.mesh_out);

    export_texture_to_png(&texture, &args.texture_out)?;
    println!("Exported texture to: {}", args.texture_out);

    if let Some(path) = &args.heightmap_out {
        let params = params.validated()?;
        let noise = NoiseField::new(params.frequency_multiplier, params.amplitude_multiplier);
        let height = maps::height_map(&noise, params.texture_size, params.sample_scale, 1.0);
        export_grid_to_file(&height, path)?;
        println!("Exported height map to: {}", path);
    }

    Ok(())
}
