use crate::error::PlanetError;

/// Highest accepted subdivision level; larger requests are clamped to it.
pub const MAX_SUBDIVISION_LEVEL: u32 = 6;

/// Height/humidity thresholds that drive biome classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Heights at or below this are water
    pub sea_level: f32,
    /// Band above sea level that is classified as beach
    pub beach_level: f32,
    /// Band above sea level that still counts as humid
    pub sea_humidity_spread: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            sea_level: 0.5,
            beach_level: 0.05,
            sea_humidity_spread: 0.34,
        }
    }
}

/// Parameters for a single planet generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Final planet radius; vertices are scaled by it when it differs from 1
    pub radius: f32,
    /// Octahedron subdivision level (0-6); resolution is `2^level`
    pub subdivision_level: u32,
    /// Scale of the noise domain used for the height map
    pub sample_scale: f32,
    /// Displacement strength, also folded into the temperature map
    pub noise_scale: f32,
    /// Side length of the square height map and texture
    pub texture_size: usize,
    /// Render a grayscale moon instead of a planet with biomes
    pub moon: bool,
    /// Amplitude factor between successive noise octaves
    pub amplitude_multiplier: f32,
    /// Frequency factor between successive noise octaves
    pub frequency_multiplier: f32,
    pub thresholds: Thresholds,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            radius: 1.0,
            subdivision_level: 0,
            sample_scale: 1.0,
            noise_scale: 1.0,
            texture_size: 1024,
            moon: false,
            amplitude_multiplier: 0.4,
            frequency_multiplier: 2.5,
            thresholds: Thresholds::default(),
        }
    }
}

impl GenerationParams {
    /// Check preconditions and return a copy with the subdivision level clamped.
    pub fn validated(&self) -> Result<GenerationParams, PlanetError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlanetError::invalid(
                "radius",
                format!("must be a positive finite number, got {}", self.radius),
            ));
        }
        if self.texture_size == 0 {
            return Err(PlanetError::invalid("texture_size", "must be at least 1"));
        }

        let mut params = self.clone();
        if params.subdivision_level > MAX_SUBDIVISION_LEVEL {
            log::warn!(
                "subdivision level {} clamped to {}",
                params.subdivision_level,
                MAX_SUBDIVISION_LEVEL
            );
            params.subdivision_level = MAX_SUBDIVISION_LEVEL;
        }

        Ok(params)
    }

    /// Vertices per octahedron edge, `2^subdivision_level`
    pub fn resolution(&self) -> usize {
        1 << self.subdivision_level.min(MAX_SUBDIVISION_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdivision_level_is_clamped() {
        let params = GenerationParams {
            subdivision_level: 11,
            ..Default::default()
        };
        let validated = params.validated().unwrap();
        assert_eq!(validated.subdivision_level, MAX_SUBDIVISION_LEVEL);
        assert_eq!(validated.resolution(), 64);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        for radius in [0.0, -2.0, f32::NAN] {
            let params = GenerationParams {
                radius,
                ..Default::default()
            };
            match params.validated() {
                Err(PlanetError::InvalidParameter { name, .. }) => assert_eq!(name, "radius"),
                other => panic!("expected radius error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_empty_texture() {
        let params = GenerationParams {
            texture_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validated(),
            Err(PlanetError::InvalidParameter { name: "texture_size", .. })
        ));
    }

    #[test]
    fn test_defaults_are_valid() {
        let params = GenerationParams::default();
        assert_eq!(params.validated().unwrap(), params);
        assert_eq!(params.resolution(), 1);
    }
}
