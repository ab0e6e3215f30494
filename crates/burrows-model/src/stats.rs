//! Sample statistics over relative frequencies.

use serde::Serialize;

/// Mean and sample standard deviation of one token's relative frequency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Moments {
    /// Arithmetic mean of the sample.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for fewer than two observations.
    pub stdev: f64,
}

impl Moments {
    /// Computes mean and sample standard deviation.
    ///
    /// A sample with fewer than two observations has a standard deviation of 0.
    /// An empty sample yields all zeros.
    pub fn of(sample: &[f64]) -> Self {
        if sample.is_empty() {
            return Self::default();
        }
        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        if sample.len() < 2 {
            return Self { mean, stdev: 0.0 };
        }
        let squares: f64 = sample.iter().map(|x| (x - mean).powi(2)).sum();
        Self {
            mean,
            stdev: (squares / (n - 1.0)).sqrt(),
        }
    }

    /// Standardizes `value` against these moments; 0 when the deviation is 0.
    pub fn zscore(&self, value: f64) -> f64 {
        if self.stdev == 0.0 {
            0.0
        } else {
            (value - self.mean) / self.stdev
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_observation_has_zero_stdev() {
        let m = Moments::of(&[0.25]);
        assert_eq!(m.mean, 0.25);
        assert_eq!(m.stdev, 0.0);
    }

    #[test]
    fn sample_stdev_uses_n_minus_one() {
        let m = Moments::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((m.mean - 5.0).abs() < 1e-12);
        // Population stdev is 2; sample stdev is sqrt(32 / 7).
        assert!((m.stdev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn constant_sample_has_zero_stdev() {
        let m = Moments::of(&[0.1, 0.1, 0.1]);
        assert!(m.stdev.abs() < 1e-15);
    }

    #[test]
    fn zscore_with_zero_stdev_is_zero() {
        let m = Moments {
            mean: 0.3,
            stdev: 0.0,
        };
        assert_eq!(m.zscore(0.9), 0.0);
    }

    #[test]
    fn zscore_standardizes() {
        let m = Moments {
            mean: 1.0,
            stdev: 2.0,
        };
        assert_eq!(m.zscore(5.0), 2.0);
        assert_eq!(m.zscore(-1.0), -1.0);
    }
}
