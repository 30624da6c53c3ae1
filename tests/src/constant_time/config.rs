// src/constant_time/config.rs

/// Thresholds and sample sizes for one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_min: f64,
    pub mean_ratio_max: f64,
    pub t_stat_threshold: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_min: 0.80,
            mean_ratio_max: 1.25,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 1000,
            num_samples: 25,
            num_iterations: 1000,
        }
    }
}

// Builder methods for easy customization
impl TestConfig {
    pub fn with_mean_ratio_range(mut self, min: f64, max: f64) -> Self {
        self.mean_ratio_min = min;
        self.mean_ratio_max = max;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Presets per operation
impl TestConfig {
    /// Valid vs. tampered ciphertext through the full decapsulation
    pub fn for_decapsulation() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.35)
            .with_warmup(50)
            .with_samples_and_iterations(30, 50)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    /// Equal vs. unequal ciphertext comparison
    pub fn for_compare() -> Self {
        Self::default()
            .with_t_stat_threshold(1.9)
            .with_combined_score_threshold(1.9)
    }

    /// Choice 0 vs. choice 1 in the 32-byte select
    pub fn for_select() -> Self {
        Self::default()
    }

    /// CBD sampling of seeds with very different bit weights
    pub fn for_sampling() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.3)
            .with_warmup(200)
            .with_samples_and_iterations(25, 200)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(1.9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_keep_ratio_range_ordered() {
        for cfg in [
            TestConfig::default(),
            TestConfig::for_decapsulation(),
            TestConfig::for_compare(),
            TestConfig::for_select(),
            TestConfig::for_sampling(),
        ] {
            assert!(cfg.mean_ratio_min < 1.0 && cfg.mean_ratio_max > 1.0);
            assert!(cfg.num_samples >= 4, "outlier removal needs quartiles");
        }
    }
}
