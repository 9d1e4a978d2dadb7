//! Statistical timing comparison for the constant-time paths.
//!
//! Two closures run with inputs from different classes; a Welch t-test on the
//! per-iteration averages (after IQR outlier removal) decides whether the
//! classes are distinguishable.

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Thresholds and sample sizes for one comparison
#[derive(Debug, Clone)]
pub struct TimingConfig {
    pub mean_ratio_max: f64,
    pub t_stat_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mean_ratio_max: 1.25,
            t_stat_threshold: 4.5,
            num_warmup: 200,
            num_samples: 30,
            num_iterations: 200,
        }
    }
}

impl TimingConfig {
    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    /// StC and CtS on small parameters
    pub fn for_codec() -> Self {
        Self::default()
    }

    /// Full decryptions, which include a primitive decode and a re-encryption
    pub fn for_transform() -> Self {
        Self::default()
            .with_mean_ratio_max(1.35)
            .with_t_stat_threshold(5.0)
            .with_samples_and_iterations(20, 20)
    }
}

/// Summary of one comparison
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub is_constant_time: bool,
}

impl std::fmt::Display for TimingAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Mean times: {:.2} ns vs {:.2} ns", self.mean_a, self.mean_b)?;
        writeln!(f, "  Mean ratio: {:.3}", self.mean_ratio)?;
        writeln!(
            f,
            "  t-statistic: {:.3} (df {:.1})",
            self.t_statistic, self.degrees_of_freedom
        )?;
        write!(f, "  p-value: {:.4}", self.p_value)
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TimingConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average time per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            let avg = start.elapsed().as_nanos() / self.num_iterations.max(1) as u128;
            times.push(avg);
        }
        times
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    /// Welch's t-statistic
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        (mean_a - mean_b).abs() / (var_a / n_a + var_b / n_b).sqrt()
    }

    /// Welch-Satterthwaite degrees of freedom
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let term_a = Self::variance(times_a, Self::mean(times_a)) / times_a.len() as f64;
        let term_b = Self::variance(times_b, Self::mean(times_b)) / times_b.len() as f64;
        (term_a + term_b).powi(2)
            / (term_a.powi(2) / (times_a.len() as f64 - 1.0)
                + term_b.powi(2) / (times_b.len() as f64 - 1.0))
    }

    /// Two-tailed p-value from the t distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if !t_stat.is_finite() {
            return if t_stat.is_nan() { 1.0 } else { 0.0 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }

    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TimingConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("After outlier removal, not enough data points remain".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let mean_ratio = if mean_a > mean_b {
            mean_a / mean_b
        } else {
            mean_b / mean_a
        };
        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        // A large t alone flags sub-percent drifts on a quiet machine
        let is_constant_time =
            mean_ratio <= config.mean_ratio_max || t_statistic <= config.t_stat_threshold;

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            is_constant_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outliers_are_removed() {
        let times = [100, 101, 99, 100, 102, 98, 100, 5000];
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 7);
        assert!(!clean.contains(&5000));
    }

    #[test]
    fn test_identical_samples_are_indistinguishable() {
        let a = [100, 102, 98, 101, 99, 100];
        let t = TimingTester::t_statistic(&a, &a);
        assert_eq!(t, 0.0);
        let df = TimingTester::degrees_of_freedom(&a, &a);
        assert!((TimingTester::p_value(t, df) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_separated_samples_are_flagged() {
        let a = [100, 102, 98, 101, 99, 100];
        let b = [200, 202, 198, 201, 199, 200];
        let tester = TimingTester::new(6, 1);
        let analysis = tester.analyze(&a, &b, &TimingConfig::default()).unwrap();
        assert!((analysis.mean_ratio - 2.0).abs() < 0.01);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
    }
}
