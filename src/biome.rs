use crate::config::Thresholds;
use crate::texture::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    DeepOcean,
    Ocean,
    Beach,
    Forest,
    Desert,
    Snow,
    /// Has palette entries but no classification path
    FrozenOcean,
    Mountains,
}

impl Biome {
    pub const ALL: [Biome; 8] = [
        Biome::DeepOcean,
        Biome::Ocean,
        Biome::Beach,
        Biome::Forest,
        Biome::Desert,
        Biome::Snow,
        Biome::FrozenOcean,
        Biome::Mountains,
    ];

    /// Position of the biome in [`Biome::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Base color of the biome
    pub const fn primary_color(self) -> Color {
        match self {
            Biome::DeepOcean => rgb8(0, 57, 109),
            Biome::Ocean => rgb8(0, 105, 170),
            Biome::Beach => rgb8(246, 202, 159),
            Biome::Forest => rgb8(51, 152, 75),
            Biome::Desert => rgb8(255, 200, 37),
            Biome::Snow => [1.0, 1.0, 1.0],
            Biome::FrozenOcean => rgb8(0, 152, 220),
            Biome::Mountains => rgb8(101, 115, 146),
        }
    }

    /// Color blended into the base color by the detail noise
    pub const fn secondary_color(self) -> Color {
        match self {
            Biome::DeepOcean => rgb8(25, 26, 50),
            Biome::Ocean => rgb8(0, 57, 109),
            Biome::Beach => rgb8(191, 111, 74),
            Biome::Forest => rgb8(12, 46, 68),
            Biome::Desert => rgb8(237, 118, 20),
            Biome::Snow => [0.8, 0.8, 0.9],
            Biome::FrozenOcean => rgb8(0, 130, 180),
            Biome::Mountains => rgb8(42, 47, 78),
        }
    }
}

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Classify a texel from its height, humidity and temperature
///
/// Rules are checked in order: water, cold, beach, highlands, humid
/// lowlands, then desert.
pub fn classify(height: f32, humidity: f32, temperature: f32, thresholds: &Thresholds) -> Biome {
    let sea = thresholds.sea_level;
    let beach = thresholds.beach_level;

    if height <= sea + 0.01 {
        if height <= sea * 0.75 {
            return Biome::DeepOcean;
        }
        return Biome::Ocean;
    }

    if temperature < 0.3 {
        return Biome::Snow;
    }

    if height <= sea + beach {
        return Biome::Beach;
    }

    if height >= sea + beach + 0.2 {
        if height >= sea + beach + 0.4 {
            return Biome::Snow;
        }
        return Biome::Mountains;
    }

    if humidity > 0.1 && temperature < 0.85 {
        return Biome::Forest;
    }

    Biome::Desert
}
