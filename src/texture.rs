//! Surface texture composition
//!
//! Turns the height, humidity and temperature maps into a color texture.
//! Planet textures are painted per biome and flatten or raise the height map
//! in place so the displaced mesh follows the painted terrain; moon textures
//! are a plain grayscale view of the height map.

use crate::biome::{self, Biome};
use crate::config::Thresholds;
use crate::grid::Array2D;
use crate::maps::Grid;
use crate::noise_field::NoiseField;
use image::{Rgb, RgbImage};

/// Linear RGB color with channels in [0, 1]
pub type Color = [f32; 3];

/// Horizontal noise offset between biomes so each gets its own blend pattern
const BIOME_NOISE_OFFSET: f32 = 10000.0;

/// Generated surface texture, index-aligned with the height map
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub pixels: Array2D<Color>,
}

impl Texture {
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Color of texel `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get(x, y)
    }

    /// Convert to an 8-bit RGB image; texel `(x, y)` becomes pixel `(x, y)`
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let color = self.pixels.get_clamped(x as usize, y as usize);
            Rgb(color.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8))
        })
    }
}

/// Number of texels painted with each biome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiomeCounts([usize; Biome::ALL.len()]);

impl BiomeCounts {
    pub fn add(&mut self, biome: Biome) {
        self.0[biome.index()] += 1;
    }

    pub fn get(&self, biome: Biome) -> usize {
        self.0[biome.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Blend two colors with linear interpolation
///
/// # Arguments
/// * `color1` - First color
/// * `color2` - Second color
/// * `t` - Blend factor, clamped to [0, 1] (0.0 = color1, 1.0 = color2)
pub fn blend_colors(color1: &Color, color2: &Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        color1[0] * (1.0 - t) + color2[0] * t,
        color1[1] * (1.0 - t) + color2[1] * t,
        color1[2] * (1.0 - t) + color2[2] * t,
    ]
}

/// Grayscale texture showing the height map directly
pub fn moon_texture(height: &Grid) -> Texture {
    let pixels = Array2D::from_fn(height.width(), height.height(), |x, y| {
        let v = height.get(x, y).unwrap_or(0.0);
        [v, v, v]
    });

    Texture {
        name: "Moon Surface".to_string(),
        pixels,
    }
}

/// Paint the planet texture and adjust the height map per biome
///
/// Water is flattened to sea level, forests are raised slightly, deserts
/// become low noisy dunes and mountains are pushed up to full height.
/// Each texel's color blends the biome's two palette colors by a noise
/// value offset per biome.
pub fn compose(
    noise: &NoiseField,
    height: &mut Grid,
    humidity: &Grid,
    temperature: &Grid,
    thresholds: &Thresholds,
) -> (Texture, BiomeCounts) {
    let width = height.width();
    let rows = height.height();
    let size = width as f32;
    let mut pixels = Array2D::new(width, rows, [0.0; 3]);
    let mut counts = BiomeCounts::default();

    for y in 0..rows {
        for x in 0..width {
            let h = height.get(x, y).unwrap_or(0.0);
            let wet = humidity.get(x, y).unwrap_or(0.0);
            let warm = temperature.get(x, y).unwrap_or(0.0);

            let biome = biome::classify(h, wet, warm, thresholds);
            counts.add(biome);

            if let Some(adjusted) = adjust_height(noise, biome, h, size, x, y, thresholds) {
                height.set(x, y, adjusted);
            }

            let t = noise.adjusted(
                size,
                x as f32 + biome.index() as f32 * BIOME_NOISE_OFFSET,
                y as f32,
                5.0,
            ) * 0.5
                + 0.5;
            let color = blend_colors(&biome.primary_color(), &biome.secondary_color(), t);
            pixels.set(x, y, color);
        }
    }

    let texture = Texture {
        name: "Planet Surface".to_string(),
        pixels,
    };

    (texture, counts)
}

/// New height for a texel of `biome`, or `None` to keep it
fn adjust_height(
    noise: &NoiseField,
    biome: Biome,
    h: f32,
    size: f32,
    x: usize,
    y: usize,
    thresholds: &Thresholds,
) -> Option<f32> {
    match biome {
        Biome::Ocean | Biome::DeepOcean => Some(thresholds.sea_level),
        Biome::Forest => Some(h + 0.05),
        Biome::Desert => {
            let dunes = noise.adjusted(size, x as f32, y as f32, 10.0) * 0.5 + 0.5;
            Some(thresholds.sea_level + 0.1 + dunes * 0.1)
        }
        // h / h is always 1 here; kept as the established mountain profile
        Biome::Mountains if h < 1.0 => Some(h / h),
        Biome::Mountains => Some(h * h),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps;

    #[test]
    fn test_blend_colors() {
        let color1 = [0.0, 0.0, 0.0];
        let color2 = [1.0, 1.0, 1.0];

        let result = blend_colors(&color1, &color2, 0.5);
        assert_eq!(result, [0.5, 0.5, 0.5]);

        assert_eq!(blend_colors(&color1, &color2, 0.0), color1);
        assert_eq!(blend_colors(&color1, &color2, 1.0), color2);
        assert_eq!(blend_colors(&color1, &color2, 3.0), color2);
    }

    #[test]
    fn test_moon_texture_is_grayscale_height() {
        let noise = NoiseField::new(2.5, 0.4);
        let height = maps::height_map(&noise, 32, 1.0, 1.0);
        let texture = moon_texture(&height);
        assert_eq!(texture.name, "Moon Surface");
        assert_eq!(texture.width(), 32);
        assert_eq!(texture.height(), 32);
        for y in 0..32 {
            for x in 0..32 {
                let h = height.get(x, y).unwrap();
                assert_eq!(texture.get(x, y), Some([h, h, h]));
            }
        }
    }

    #[test]
    fn test_compose_adjusts_heights_per_biome() {
        let thresholds = Thresholds::default();
        let noise = NoiseField::new(2.5, 0.4);
        // deep ocean, ocean, forest, mountains, desert
        let mut height = Array2D::from_fn(5, 1, |x, _| [0.2, 0.45, 0.7, 0.8, 0.7][x]);
        let humidity = Array2D::from_fn(5, 1, |x, _| [1.0, 1.0, 0.5, 0.0, 0.0][x]);
        let temperature = Array2D::new(5, 1, 0.5);

        let (texture, counts) = compose(&noise, &mut height, &humidity, &temperature, &thresholds);

        assert_eq!(height.get(0, 0), Some(0.5));
        assert_eq!(height.get(1, 0), Some(0.5));
        assert!((height.get(2, 0).unwrap() - 0.75).abs() < 1e-6);
        assert_eq!(height.get(3, 0), Some(1.0));
        let desert = height.get(4, 0).unwrap();
        assert!(desert >= 0.6 - 1e-6 && desert <= 0.7 + 1e-6, "desert height {}", desert);

        assert_eq!(counts.get(Biome::DeepOcean), 1);
        assert_eq!(counts.get(Biome::Ocean), 1);
        assert_eq!(counts.get(Biome::Forest), 1);
        assert_eq!(counts.get(Biome::Mountains), 1);
        assert_eq!(counts.get(Biome::Desert), 1);
        assert_eq!(counts.total(), 5);
        assert_eq!(texture.name, "Planet Surface");
    }

    #[test]
    fn test_compose_colors_stay_between_palette_entries() {
        let thresholds = Thresholds::default();
        let noise = NoiseField::new(2.5, 0.4);
        let mut height = maps::height_map(&noise, 24, 1.0, 1.0);
        let original = height.clone();
        let humidity = maps::humidity_map(&height, &thresholds);
        let temperature = maps::temperature_map(&height, 1.0);

        let (texture, counts) = compose(&noise, &mut height, &humidity, &temperature, &thresholds);
        assert_eq!(counts.total(), 24 * 24);

        for y in 0..24 {
            for x in 0..24 {
                let h = original.get(x, y).unwrap();
                let biome = biome::classify(
                    h,
                    humidity.get(x, y).unwrap(),
                    temperature.get(x, y).unwrap(),
                    &thresholds,
                );
                let (a, b) = (biome.primary_color(), biome.secondary_color());
                let color = texture.get(x, y).unwrap();
                for c in 0..3 {
                    let (lo, hi) = (a[c].min(b[c]), a[c].max(b[c]));
                    assert!(color[c] >= lo - 1e-6 && color[c] <= hi + 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_to_rgb_image() {
        let mut pixels = Array2D::new(2, 2, [0.0, 0.0, 0.0]);
        pixels.set(1, 0, [1.0, 0.5, 0.0]);
        let texture = Texture {
            name: "test".to_string(),
            pixels,
        };
        let image = texture.to_rgb_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0), &Rgb([255, 128, 0]));
        assert_eq!(image.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }
}
