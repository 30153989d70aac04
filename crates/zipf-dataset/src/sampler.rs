use crate::error::{DatasetError, Result};
use rand::Rng;
use rand_distr::{Distribution, Zeta};

/// Clamp an unbounded Zipf rank into `[1, max]`.
///
/// Ranks above `max` collapse onto `max`, which leaves a frequency spike at
/// the ceiling. That spike is part of the dataset and must not be resampled.
pub fn clamp_rank(raw: f64, max: u32) -> u32 {
    debug_assert!(max >= 1);
    if raw >= max as f64 {
        max
    } else if raw >= 1.0 {
        raw as u32
    } else {
        // Also catches NaN.
        1
    }
}

/// Draws Zipf-distributed ranks for one column and bounds them to `[1, max]`.
pub struct ZipfSampler {
    dist: Zeta<f64>,
    max: u32,
}

impl ZipfSampler {
    pub fn new(alpha: f64, max: u32) -> Result<Self> {
        if max == 0 {
            return Err(DatasetError::InvalidConfig(
                "sampler ceiling must be >= 1".to_string(),
            ));
        }
        let dist = Zeta::new(alpha)
            .map_err(|e| DatasetError::InvalidConfig(format!("invalid Zipf alpha {alpha}: {e}")))?;
        Ok(Self { dist, max })
    }

    /// Draw one unbounded rank (always >= 1).
    pub fn sample_raw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let raw = self.dist.sample(rng);
        debug_assert!(raw >= 1.0, "Zipf rank below 1: {raw}");
        raw
    }

    /// Draw one rank clamped to `[1, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        clamp_rank(self.sample_raw(rng), self.max)
    }

    /// Append `n` clamped ranks to `out`.
    pub fn sample_into<R: Rng + ?Sized>(&self, rng: &mut R, n: usize, out: &mut Vec<u32>) {
        out.reserve(n);
        for _ in 0..n {
            out.push(self.sample(rng));
        }
    }

    pub fn sample_column<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<u32> {
        let mut column = Vec::with_capacity(n);
        self.sample_into(rng, n, &mut column);
        column
    }

    /// Number of entries sitting exactly on the ceiling.
    pub fn ceiling_hits(&self, column: &[u32]) -> u64 {
        column.iter().filter(|&&v| v == self.max).count() as u64
    }
}
