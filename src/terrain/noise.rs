//! # Noise Module
//!
//! A seeded Perlin noise field sampled in absolute world coordinates.
//!
//! Sampling in world space (never chunk-local space) is what keeps terrain
//! continuous across chunk boundaries: two chunks asking about the same
//! world column always get the same height.

use noise::{NoiseFn, Perlin};

use crate::voxels::chunk::CHUNK_WIDTH;

/// A deterministic 2D height-noise function.
///
/// Two fields constructed with the same seed return identical samples for
/// all inputs, which is what makes the whole world reproducible from its
/// seed.
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    /// Creates a noise field seeded with the world seed.
    pub fn new(seed: u32) -> Self {
        NoiseField {
            perlin: Perlin::new(seed),
        }
    }

    /// Samples 2D noise at an absolute world column, returning a value in
    /// `[0, 1]`.
    ///
    /// The input is nudged by 0.1 and divided by the chunk width before
    /// scaling; the nudge keeps integer inputs off the noise lattice (where
    /// Perlin noise degenerates to a constant), and the division puts the
    /// biome's `terrain_scale` in units of chunks rather than voxels.
    ///
    /// The raw Perlin sample lies in `[-1, 1]`; it is remapped and clamped
    /// so the terrain layering math sees a `[0, 1]` height fraction.
    pub fn sample_2d(&self, x: i32, z: i32, offset: f64, scale: f64) -> f64 {
        let u = (x as f64 + 0.1) / CHUNK_WIDTH as f64 * scale + offset;
        let v = (z as f64 + 0.1) / CHUNK_WIDTH as f64 * scale + offset;
        let raw = self.perlin.get([u, v]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Samples 3D noise against a threshold.
    ///
    /// Not implemented: always reports "not solid". This hook exists for a
    /// future cave pass and is deliberately left inert rather than given
    /// invented semantics.
    pub fn sample_3d(
        &self,
        _x: i32,
        _y: i32,
        _z: i32,
        _offset: f64,
        _scale: f64,
        _threshold: f64,
    ) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_samples() {
        let a = NoiseField::new(1337);
        let b = NoiseField::new(1337);
        for x in -32..32 {
            for z in -32..32 {
                assert_eq!(a.sample_2d(x, z, 0.0, 0.25), b.sample_2d(x, z, 0.0, 0.25));
            }
        }
    }

    #[test]
    fn samples_stay_in_unit_range() {
        let field = NoiseField::new(7);
        for x in 0..160 {
            for z in 0..160 {
                let s = field.sample_2d(x, z, 0.0, 0.25);
                assert!((0.0..=1.0).contains(&s), "sample {s} out of range");
            }
        }
    }

    #[test]
    fn different_seeds_diverge_somewhere() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let diverges = (0..256).any(|i| {
            a.sample_2d(i, i * 3, 0.0, 0.25) != b.sample_2d(i, i * 3, 0.0, 0.25)
        });
        assert!(diverges);
    }

    #[test]
    fn vertical_noise_is_a_stub() {
        let field = NoiseField::new(0);
        assert!(!field.sample_3d(1, 2, 3, 0.0, 0.1, 0.5));
    }
}
