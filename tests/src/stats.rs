//! Statistics over shared-secret outputs

use statrs::distribution::{ContinuousCDF, Normal};

/// Result of a two-sided binomial z-test on the bit balance of a sample.
#[derive(Debug, Clone, Copy)]
pub struct BitBalance {
    pub ones: u64,
    pub total: u64,
    pub z_score: f64,
    pub p_value: f64,
}

/// Counts set bits across `samples` and tests them against Binomial(n, 1/2)
/// via the normal approximation.
pub fn bit_balance<T: AsRef<[u8]>>(samples: &[T]) -> BitBalance {
    let ones: u64 = samples
        .iter()
        .flat_map(|s| s.as_ref().iter())
        .map(|b| b.count_ones() as u64)
        .sum();
    let total: u64 = samples.iter().map(|s| s.as_ref().len() as u64 * 8).sum();

    let n = total as f64;
    let z_score = (ones as f64 - n / 2.0) / (n / 4.0).sqrt();
    let p_value = match Normal::new(0.0, 1.0) {
        Ok(std_normal) => 2.0 * (1.0 - std_normal.cdf(z_score.abs())),
        Err(_) => 0.0,
    };

    BitBalance {
        ones,
        total,
        z_score,
        p_value,
    }
}

/// Number of pairs `(i, j)`, `i < j`, with identical contents.
pub fn duplicate_pairs<T: AsRef<[u8]>>(samples: &[T]) -> usize {
    let mut count = 0;
    for (i, a) in samples.iter().enumerate() {
        for b in &samples[i + 1..] {
            if a.as_ref() == b.as_ref() {
                count += 1;
            }
        }
    }
    count
}

/// Per-position bit frequencies, each the fraction of samples with that bit set.
pub fn bit_frequencies<T: AsRef<[u8]>>(samples: &[T], bits: usize) -> Vec<f64> {
    let mut counts = vec![0u64; bits];
    for s in samples {
        for (i, c) in counts.iter_mut().enumerate() {
            let byte = s.as_ref().get(i / 8).copied().unwrap_or(0);
            *c += ((byte >> (i % 8)) & 1) as u64;
        }
    }
    counts.iter().map(|&c| c as f64 / samples.len() as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_sample() {
        let samples = vec![[0x0Fu8; 32], [0xF0u8; 32]];
        let b = bit_balance(&samples);
        assert_eq!(b.ones, 256);
        assert_eq!(b.total, 512);
        assert!(b.z_score.abs() < 1e-12);
        assert!((b.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_biased_sample_is_rejected() {
        let samples = vec![[0xFFu8; 32]; 8];
        let b = bit_balance(&samples);
        assert!(b.z_score > 40.0);
        assert!(b.p_value < 1e-9);
    }

    #[test]
    fn test_duplicates_and_frequencies() {
        let samples = vec![[1u8; 2], [2u8; 2], [1u8; 2]];
        assert_eq!(duplicate_pairs(&samples), 1);
        let freq = bit_frequencies(&samples, 16);
        assert!((freq[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((freq[1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(freq[2], 0.0);
    }
}
