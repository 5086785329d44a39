//! Gain
//!
//! Impurity based gain metrics. Every metric returns the negated impurity of a
//! label distribution, so gains live in `(-inf, 0]`, larger is better, and a
//! pure node has a gain of zero.
use crate::errors::SaplingError;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gain metric used to score candidate splits.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GainMethod {
    Gini,
    Information,
}

impl GainMethod {
    /// Evaluate the gain of a set of labels with the selected metric.
    pub fn evaluate(&self, labels: &[usize], num_classes: usize, weights: Option<&[f64]>) -> f64 {
        match self {
            GainMethod::Gini => GiniGain::evaluate(labels, num_classes, weights),
            GainMethod::Information => InformationGain::evaluate(labels, num_classes, weights),
        }
    }
}

impl FromStr for GainMethod {
    type Err = SaplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gini" | "GiniGain" => Ok(GainMethod::Gini),
            "Information" | "InformationGain" => Ok(GainMethod::Information),
            _ => Err(SaplingError::ParseString(
                s.to_string(),
                "GainMethod".to_string(),
                items_to_strings(vec!["Gini", "Information"]),
            )),
        }
    }
}

/// Accumulate the per class mass of a set of labels into `counts`,
/// returning the total mass.
///
/// Without weights every point contributes `1.0`, so explicit unit weights
/// follow exactly the same floating point sequence as the unweighted path.
#[inline]
pub fn class_counts(labels: &[usize], weights: Option<&[f64]>, counts: &mut [f64]) -> f64 {
    counts.iter_mut().for_each(|c| *c = 0.0);
    let mut total = 0.0;
    match weights {
        Some(weights) => {
            for (label, w) in labels.iter().zip(weights) {
                counts[*label] += *w;
                total += *w;
            }
        }
        None => {
            for label in labels {
                counts[*label] += 1.0;
                total += 1.0;
            }
        }
    }
    total
}

pub trait GainMetric {
    /// Gain of a distribution given the mass of every class and the total mass.
    /// A zero total mass is treated as an empty set, with a gain of zero.
    fn gain_from_counts(counts: &[f64], total: f64) -> f64;

    /// Gain of a set of labels.
    ///
    /// * `labels` - Class of every point, each in `[0, num_classes)`.
    /// * `num_classes` - Number of classes.
    /// * `weights` - Optional weight of every point.
    fn evaluate(labels: &[usize], num_classes: usize, weights: Option<&[f64]>) -> f64 {
        let mut counts = vec![0.0; num_classes];
        let total = class_counts(labels, weights, &mut counts);
        Self::gain_from_counts(&counts, total)
    }
}

/// Negated gini impurity, `-(1 - sum(p_i^2))`.
#[derive(Default)]
pub struct GiniGain {}

impl GainMetric for GiniGain {
    #[inline]
    fn gain_from_counts(counts: &[f64], total: f64) -> f64 {
        if total <= 0.0 {
            return 0.0;
        }
        let mut sum_sq = 0.0;
        for c in counts {
            let p = *c / total;
            sum_sq += p * p;
        }
        sum_sq - 1.0
    }
}

/// Negated entropy, `sum(p_i * log2(p_i))`, with `0 * log2(0) = 0`.
#[derive(Default)]
pub struct InformationGain {}

impl GainMetric for InformationGain {
    #[inline]
    fn gain_from_counts(counts: &[f64], total: f64) -> f64 {
        if total <= 0.0 {
            return 0.0;
        }
        let mut gain = 0.0;
        for c in counts {
            if *c > 0.0 {
                let p = *c / total;
                gain += p * p.log2();
            }
        }
        gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol * b.abs().max(1.0), "{} != {}", a, b);
    }

    fn even_split(n: usize) -> Vec<usize> {
        (0..n).map(|i| if i < n / 2 { 0 } else { 1 }).collect()
    }

    #[test]
    fn test_gini_perfect() {
        let labels = vec![0; 10];
        let weights = vec![1.0; 10];
        for c in 1..10 {
            assert!(GiniGain::evaluate(&labels, c, None).abs() < 1e-5);
            assert!(GiniGain::evaluate(&labels, c, Some(&weights[..])).abs() < 1e-5);
        }
    }

    #[test]
    fn test_gini_even_split() {
        let labels = even_split(10);
        let weights = vec![1.0; 10];
        for c in 2..10 {
            let gain = GiniGain::evaluate(&labels, c, None);
            assert_close(gain, -0.5, 1e-5);
            assert_eq!(gain, GiniGain::evaluate(&labels, c, Some(&weights[..])));
        }
    }

    #[test]
    fn test_gini_empty() {
        let weights = vec![1.0; 10];
        for c in 1..10 {
            assert!(GiniGain::evaluate(&[], c, None).abs() < 1e-5);
            assert!(GiniGain::evaluate(&[], c, Some(&weights[..0])).abs() < 1e-5);
        }
    }

    #[test]
    fn test_gini_even_split_many_classes() {
        for c in 2..30 {
            let labels: Vec<usize> = (0..c).collect();
            let weights = vec![1.0; c];
            let expected = -(1.0 - 1.0 / c as f64);
            assert_close(GiniGain::evaluate(&labels, c, None), expected, 1e-5);
            assert_close(GiniGain::evaluate(&labels, c, Some(&weights[..])), expected, 1e-5);
        }
    }

    #[test]
    fn test_gini_many_points() {
        for i in 1..20 {
            let n = 100 * i;
            let labels = even_split(n);
            let weights = vec![1.0; n];
            assert_close(GiniGain::evaluate(&labels, 2, None), -0.5, 1e-5);
            assert_close(GiniGain::evaluate(&labels, 2, Some(&weights[..])), -0.5, 1e-5);
        }
    }

    #[test]
    fn test_gini_with_weight() {
        let labels = even_split(10);
        let weights: Vec<f64> = (0..10).map(|i| if i < 5 { 0.3 } else { 0.7 }).collect();
        assert_close(GiniGain::evaluate(&labels, 2, Some(&weights[..])), -0.42, 1e-5);
    }

    #[test]
    fn test_information_perfect() {
        let labels = vec![0; 10];
        for c in 1..10 {
            assert!(InformationGain::evaluate(&labels, c, None).abs() < 1e-5);
        }
    }

    #[test]
    fn test_information_even_split() {
        let labels = even_split(10);
        let weights = vec![1.0; 10];
        for c in 2..10 {
            assert_close(InformationGain::evaluate(&labels, c, None), -1.0, 1e-5);
            assert_close(InformationGain::evaluate(&labels, c, Some(&weights[..])), -1.0, 1e-5);
        }
    }

    #[test]
    fn test_information_empty() {
        for c in 1..10 {
            assert!(InformationGain::evaluate(&[], c, None).abs() < 1e-5);
            assert!(InformationGain::evaluate(&[], c, Some(&[][..])).abs() < 1e-5);
        }
    }

    #[test]
    fn test_information_even_split_many_classes() {
        for c in 2..30 {
            let labels: Vec<usize> = (0..c).collect();
            assert_close(
                InformationGain::evaluate(&labels, c, None),
                (1.0 / c as f64).log2(),
                1e-5,
            );
        }
    }

    #[test]
    fn test_information_with_weight() {
        // All the mass sits in class 0, so the distribution is pure.
        let labels = even_split(10);
        let weights: Vec<f64> = (0..10).map(|i| if i < 5 { 1.0 } else { 0.0 }).collect();
        assert!(InformationGain::evaluate(&labels, 2, Some(&weights[..])).abs() < 1e-5);
    }

    #[test]
    fn test_information_many_points() {
        for i in 1..20 {
            let n = 100 * i;
            let labels = even_split(n);
            let weights = vec![1.0; n];
            assert_close(InformationGain::evaluate(&labels, 2, None), -1.0, 1e-5);
            assert_eq!(
                InformationGain::evaluate(&labels, 2, None),
                InformationGain::evaluate(&labels, 2, Some(&weights[..]))
            );
        }
    }

    #[test]
    fn test_zero_weight_is_empty() {
        let labels = vec![0, 1, 1];
        let weights = vec![0.0; 3];
        assert_eq!(GiniGain::evaluate(&labels, 2, Some(&weights[..])), 0.0);
        assert_eq!(InformationGain::evaluate(&labels, 2, Some(&weights[..])), 0.0);
    }

    #[test]
    fn test_gain_method_from_str() {
        assert_eq!("Gini".parse::<GainMethod>().unwrap(), GainMethod::Gini);
        assert_eq!("InformationGain".parse::<GainMethod>().unwrap(), GainMethod::Information);
        assert!("Entropy".parse::<GainMethod>().is_err());
        let labels = even_split(4);
        assert_eq!(GainMethod::Gini.evaluate(&labels, 2, None), GiniGain::evaluate(&labels, 2, None));
    }
}
