//! Procedural planet generation
//!
//! Builds a displaced octahedron-sphere mesh and a matching surface texture
//! from a handful of noise and threshold parameters. See [`generate`].

pub mod biome;
pub mod config;
pub mod displace;
pub mod error;
pub mod export;
pub mod grid;
pub mod maps;
pub mod mesh;
pub mod noise_field;
pub mod octahedron;
pub mod planet;
pub mod texture;
pub mod uv;

pub use biome::Biome;
pub use config::{GenerationParams, Thresholds};
pub use error::PlanetError;
pub use mesh::Mesh;
pub use planet::generate;
pub use texture::Texture;
