//! Height, humidity and temperature maps sampled per texel

use crate::config::Thresholds;
use crate::grid::Array2D;
use crate::noise_field::NoiseField;
use std::f32::consts::PI;

/// A square scalar map, one value per texel
pub type Grid = Array2D<f32>;

/// Sample the height map in [0, 1] from the noise field
///
/// # Arguments
/// * `noise` - Noise field to sample
/// * `texture_size` - Side length of the map
/// * `sample_scale` - Scale of the sampled noise domain
/// * `noise_scale` - Multiplier applied before clamping
pub fn height_map(noise: &NoiseField, texture_size: usize, sample_scale: f32, noise_scale: f32) -> Grid {
    let size = texture_size as f32;
    Array2D::from_fn(texture_size, texture_size, |x, y| {
        let value = noise.adjusted(size, x as f32, y as f32, sample_scale) * 0.5 + 0.5;
        (value * noise_scale).clamp(0.0, 1.0)
    })
}

/// Humidity from height: 1 under water, 0.5 on the coastal band, 0 inland
pub fn humidity_map(height: &Grid, thresholds: &Thresholds) -> Grid {
    Array2D::from_fn(height.width(), height.height(), |x, y| {
        let h = height.get(x, y).unwrap_or(0.0);
        if h <= thresholds.sea_level {
            1.0
        } else if h <= thresholds.sea_level + thresholds.sea_humidity_spread {
            0.5
        } else {
            0.0
        }
    })
}

/// Temperature from latitude, cooled by altitude
///
/// Warmest at the equator row, falling to zero at the poles; higher terrain
/// is colder in proportion to `noise_scale`.
pub fn temperature_map(height: &Grid, noise_scale: f32) -> Grid {
    let size = height.height() as f32;
    Array2D::from_fn(height.width(), height.height(), |x, y| {
        let latitude = (y as f32 / size * PI).sin();
        let h = height.get(x, y).unwrap_or(0.0);
        (latitude + (h - 1.0) * 2.0 * noise_scale).clamp(0.0, 1.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_height_map_in_unit_range_for_any_parameters() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let noise = NoiseField::new(rng.gen_range(0.0..6.0), rng.gen_range(0.0..4.0));
            let sample_scale = rng.gen_range(-20.0..20.0);
            let map = height_map(&noise, 16, sample_scale, 1.0);
            assert_eq!(map.width(), 16);
            assert_eq!(map.height(), 16);
            assert!(map.iter().all(|v| (0.0..=1.0).contains(v)), "height out of range for scale {}", sample_scale);
        }
    }

    #[test]
    fn test_height_map_has_variation() {
        let noise = NoiseField::new(2.5, 0.4);
        let map = height_map(&noise, 32, 1.0, 1.0);
        let first = map.get(0, 0).unwrap();
        assert!(map.iter().any(|&v| v != first), "height map should vary");
    }

    #[test]
    fn test_humidity_bands() {
        let thresholds = Thresholds::default();
        let height = Array2D::from_fn(5, 1, |x, _| [0.2, 0.5, 0.6, 0.8, 0.9][x]);
        let humidity = humidity_map(&height, &thresholds);
        let values: Vec<f32> = humidity.iter().copied().collect();
        assert_eq!(values, vec![1.0, 1.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_temperature_latitude_profile() {
        let height = Array2D::square(8, 1.0);
        let temperature = temperature_map(&height, 1.0);
        // Row 0 is a pole, row size/2 the equator
        assert_eq!(temperature.get(3, 0), Some(0.0));
        assert!((temperature.get(3, 4).unwrap() - 1.0).abs() < 1e-6);
        assert!(temperature.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_temperature_drops_with_altitude() {
        let height = Array2D::from_fn(2, 8, |x, _| if x == 0 { 0.9 } else { 0.6 });
        let temperature = temperature_map(&height, 1.0);
        let high = temperature.get(0, 4).unwrap();
        let low = temperature.get(1, 4).unwrap();
        assert!((high - 0.8).abs() < 1e-5);
        assert!((low - 0.2).abs() < 1e-5);
    }
}
