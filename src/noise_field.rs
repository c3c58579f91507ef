//! Multi-octave Perlin noise sampled over directions on the unit sphere
//!
//! Texture coordinates are wrapped onto a sphere before sampling so the
//! resulting maps tile seamlessly along the horizontal texture seam.

use noise::{NoiseFn, Perlin};
use std::f32::consts::PI;

/// Number of octaves summed by [`NoiseField::octaved`]
pub const OCTAVES: u32 = 4;

#[derive(Debug, Clone)]
pub struct NoiseField {
    perlin: Perlin,
    frequency_multiplier: f32,
    amplitude_multiplier: f32,
}

impl NoiseField {
    /// Create a noise field with the given per-octave multipliers
    ///
    /// # Arguments
    /// * `frequency_multiplier` - Frequency factor applied per octave (lacunarity)
    /// * `amplitude_multiplier` - Amplitude factor applied per octave (persistence)
    pub fn new(frequency_multiplier: f32, amplitude_multiplier: f32) -> Self {
        NoiseField {
            perlin: Perlin::new(Perlin::DEFAULT_SEED),
            frequency_multiplier,
            amplitude_multiplier,
        }
    }

    /// Sample summed octaves of 3D noise, clamped to [-1, 1]
    ///
    /// Octave `k` samples at `frequency_multiplier^k` times the input
    /// coordinates and contributes `amplitude_multiplier^k` of its value.
    pub fn octaved(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..OCTAVES {
            let sample = self.perlin.get([
                (x * frequency) as f64,
                (y * frequency) as f64,
                (z * frequency) as f64,
            ]) as f32;
            total += sample * amplitude;
            frequency *= self.frequency_multiplier;
            amplitude *= self.amplitude_multiplier;
        }

        total.clamp(-1.0, 1.0)
    }

    /// Sample noise at normalized texture coordinates mapped onto a sphere
    ///
    /// `tx` is the longitude fraction and `ty` the latitude fraction, both in
    /// turns; the resulting direction is scaled by `scale` before sampling.
    pub fn noise(&self, tx: f32, ty: f32, scale: f32) -> f32 {
        let scl = turn_cos(ty);
        self.octaved(
            scl * turn_sin(tx) * scale,
            -turn_sin(ty) * scale,
            scl * turn_cos(tx) * scale,
        )
    }

    /// Sample noise at pixel coordinates of a `texture_size` square texture
    ///
    /// The vertical range is squeezed into a half turn so the samples run
    /// pole to pole instead of wrapping over them.
    pub fn adjusted(&self, texture_size: f32, tx: f32, ty: f32, scale: f32) -> f32 {
        self.noise(
            tx / texture_size,
            (ty / texture_size + 0.5) * 0.5,
            scale,
        )
    }
}

/// Sine of an angle given in turns
fn turn_sin(turns: f32) -> f32 {
    (turns * PI * 2.0).sin()
}

/// Cosine of an angle given in turns
fn turn_cos(turns: f32) -> f32 {
    (turns * PI * 2.0).cos()
}
