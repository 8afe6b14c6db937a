//! Seeded percentile bootstrap for document-level means.
//!
//! Every call builds its own generator from the configured seed, so the same
//! input and seed always give bit-identical bounds and concurrent documents
//! never share RNG state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use assay_core::numeric::{mean, percentile, weighted_mean};

/// Point estimate with its bootstrap interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BootstrapInterval {
    pub mean: f64,
    pub ci95_low: f64,
    pub ci95_high: f64,
    pub iterations: u32,
    pub seed: u64,
}

impl BootstrapInterval {
    /// Whether `low <= mean <= high` holds.
    pub fn is_ordered(&self) -> bool {
        self.ci95_low <= self.mean && self.mean <= self.ci95_high
    }

    pub fn width(&self) -> f64 {
        self.ci95_high - self.ci95_low
    }
}

/// Resample-with-replacement bootstrap.
#[derive(Debug, Clone, Copy)]
pub struct Bootstrap {
    iterations: u32,
    seed: u64,
    lower_percentile: f64,
    upper_percentile: f64,
}

impl Bootstrap {
    /// Bootstrap with the given iteration count and the 2.5/97.5 percentiles.
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
            seed: 0,
            lower_percentile: 2.5,
            upper_percentile: 97.5,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_percentiles(mut self, lower: f64, upper: f64) -> Self {
        self.lower_percentile = lower;
        self.upper_percentile = upper;
        self
    }

    /// Interval for the mean of `values`, weighted when `weights` is given.
    ///
    /// The reported bounds are widened to contain the point estimate. Empty
    /// input yields an all-zero interval.
    pub fn interval(&self, values: &[f64], weights: Option<&[f64]>) -> BootstrapInterval {
        let n = values.len();
        let estimate = |idx: &mut dyn Iterator<Item = usize>| -> f64 {
            match weights {
                Some(w) => {
                    let (v, w): (Vec<f64>, Vec<f64>) = idx.map(|i| (values[i], w[i])).unzip();
                    weighted_mean(&v, &w)
                }
                None => {
                    let v: Vec<f64> = idx.map(|i| values[i]).collect();
                    mean(&v)
                }
            }
        };

        if n == 0 || weights.is_some_and(|w| w.len() != n) {
            return BootstrapInterval {
                iterations: self.iterations,
                seed: self.seed,
                ..BootstrapInterval::default()
            };
        }

        let point = estimate(&mut (0..n));

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut draws = Vec::with_capacity(self.iterations as usize);
        for _ in 0..self.iterations {
            let mut resample = (0..n).map(|_| rng.gen_range(0..n));
            draws.push(estimate(&mut resample));
        }
        draws.sort_by(f64::total_cmp);

        let low = percentile(&draws, self.lower_percentile);
        let high = percentile(&draws, self.upper_percentile);

        BootstrapInterval {
            mean: point,
            ci95_low: low.min(point),
            ci95_high: high.max(point),
            iterations: self.iterations,
            seed: self.seed,
        }
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new(assay_core::config::defaults::BOOTSTRAP_ITERATIONS)
    }
}
