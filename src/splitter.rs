//! Splitter
//!
//! Split strategies decide, for a single feature, whether splitting on it beats
//! a supplied gain. A strategy that finds no improvement returns the supplied
//! gain unchanged and leaves the split info empty. On success the split info
//! holds the auxiliary values needed to route a point to a child.
use crate::gain::{class_counts, GainMetric};
use serde::{Deserialize, Serialize};

/// Tag of the strategy that produced a split, stored in every internal node.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SplitType {
    /// Binary split on a numeric threshold, split info is `[threshold]`.
    BestBinaryNumeric,
    /// One child per category, split info is `[number of children]`.
    AllCategorical,
}

impl SplitType {
    /// Number of children a split creates.
    pub fn num_children(&self, split_info: &[f64]) -> usize {
        match self {
            SplitType::BestBinaryNumeric => BestBinaryNumericSplit::num_children(split_info),
            SplitType::AllCategorical => AllCategoricalSplit::num_children(split_info),
        }
    }

    /// Child a feature value is routed to.
    pub fn calculate_direction(&self, value: f64, split_info: &[f64]) -> usize {
        match self {
            SplitType::BestBinaryNumeric => BestBinaryNumericSplit::calculate_direction(value, split_info),
            SplitType::AllCategorical => AllCategoricalSplit::calculate_direction(value, split_info),
        }
    }
}

pub trait SplitStrategy {
    const SPLIT_TYPE: SplitType;

    /// Check if splitting on a feature gives a gain larger than `best_gain`
    /// by more than `minimum_gain_split`. If so, `split_info` is filled and the
    /// new gain is returned, otherwise `split_info` is left empty and
    /// `best_gain` is returned unchanged.
    ///
    /// * `best_gain` - Gain to beat.
    /// * `values` - Value of the feature for every point.
    /// * `num_categories` - Number of categories, only used by categorical strategies.
    /// * `labels` - Class of every point.
    /// * `num_classes` - Number of classes.
    /// * `weights` - Optional weight of every point.
    /// * `minimum_leaf_size` - Minimum number of points in every child.
    /// * `minimum_gain_split` - Minimum improvement over `best_gain`.
    /// * `split_info` - Output auxiliary split information.
    #[allow(clippy::too_many_arguments)]
    fn split_if_better<G: GainMetric>(
        best_gain: f64,
        values: &[f64],
        num_categories: usize,
        labels: &[usize],
        num_classes: usize,
        weights: Option<&[f64]>,
        minimum_leaf_size: usize,
        minimum_gain_split: f64,
        split_info: &mut Vec<f64>,
    ) -> f64;

    /// Number of children given the split info.
    fn num_children(split_info: &[f64]) -> usize;

    /// Child a value is routed to given the split info.
    fn calculate_direction(value: f64, split_info: &[f64]) -> usize;
}

/// Finds the single numeric threshold with the best gain.
pub struct BestBinaryNumericSplit;

/// Threshold strictly above `lo` and below `hi`, falling back to `lo`
/// when the two values are adjacent floats.
#[inline]
fn midpoint(lo: f64, hi: f64) -> f64 {
    let mid = lo / 2.0 + hi / 2.0;
    if lo <= mid && mid < hi {
        mid
    } else {
        lo
    }
}

impl SplitStrategy for BestBinaryNumericSplit {
    const SPLIT_TYPE: SplitType = SplitType::BestBinaryNumeric;

    fn split_if_better<G: GainMetric>(
        best_gain: f64,
        values: &[f64],
        _num_categories: usize,
        labels: &[usize],
        num_classes: usize,
        weights: Option<&[f64]>,
        minimum_leaf_size: usize,
        minimum_gain_split: f64,
        split_info: &mut Vec<f64>,
    ) -> f64 {
        split_info.clear();
        let n = values.len();
        let minimum_leaf_size = minimum_leaf_size.max(1);
        if n < minimum_leaf_size.saturating_mul(2) {
            return best_gain;
        }

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        if min == max {
            return best_gain;
        }

        // Stable, so equal values keep their original order.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|a, b| values[*a].total_cmp(&values[*b]));

        let mut left = vec![0.0; num_classes];
        let mut right = vec![0.0; num_classes];
        let total = class_counts(labels, weights, &mut right);
        if total <= 0.0 {
            return best_gain;
        }
        let mut left_total = 0.0;
        let mut right_total = total;

        let mut best_found = best_gain + minimum_gain_split;
        let mut threshold = None;

        for i in 0..(n - minimum_leaf_size) {
            let idx = order[i];
            let w = weights.map_or(1.0, |w| w[idx]);
            left[labels[idx]] += w;
            right[labels[idx]] -= w;
            left_total += w;
            right_total -= w;

            if i + 1 < minimum_leaf_size {
                continue;
            }
            let lo = values[idx];
            let hi = values[order[i + 1]];
            if lo == hi {
                continue;
            }

            let gain = (left_total * G::gain_from_counts(&left, left_total)
                + right_total * G::gain_from_counts(&right, right_total))
                / total;
            if gain > best_found {
                best_found = gain;
                threshold = Some(midpoint(lo, hi));
                // Nothing can beat a perfect split.
                if gain >= 0.0 {
                    break;
                }
            }
        }

        match threshold {
            Some(t) => {
                split_info.push(t);
                best_found
            }
            None => best_gain,
        }
    }

    fn num_children(_split_info: &[f64]) -> usize {
        2
    }

    #[inline]
    fn calculate_direction(value: f64, split_info: &[f64]) -> usize {
        if value <= split_info[0] {
            0
        } else {
            1
        }
    }
}

/// Splits into one child per category.
pub struct AllCategoricalSplit;

/// Category code of a value, `None` if the value is not a valid code.
#[inline]
fn category_code(value: f64, num_categories: usize) -> Option<usize> {
    if value >= 0.0 && value.fract() == 0.0 && value < num_categories as f64 {
        Some(value as usize)
    } else {
        None
    }
}

impl SplitStrategy for AllCategoricalSplit {
    const SPLIT_TYPE: SplitType = SplitType::AllCategorical;

    fn split_if_better<G: GainMetric>(
        best_gain: f64,
        values: &[f64],
        num_categories: usize,
        labels: &[usize],
        num_classes: usize,
        weights: Option<&[f64]>,
        minimum_leaf_size: usize,
        minimum_gain_split: f64,
        split_info: &mut Vec<f64>,
    ) -> f64 {
        split_info.clear();
        if num_categories < 2 {
            return best_gain;
        }
        let minimum_leaf_size = minimum_leaf_size.max(1);

        let mut child_counts = vec![0usize; num_categories];
        for v in values {
            child_counts[category_code(*v, num_categories).unwrap_or(0)] += 1;
        }
        if child_counts.iter().any(|c| *c < minimum_leaf_size) {
            return best_gain;
        }

        let mut class_mass = vec![0.0; num_categories * num_classes];
        let mut child_mass = vec![0.0; num_categories];
        let mut total = 0.0;
        for (i, (v, label)) in values.iter().zip(labels).enumerate() {
            let child = category_code(*v, num_categories).unwrap_or(0);
            let w = weights.map_or(1.0, |w| w[i]);
            class_mass[child * num_classes + *label] += w;
            child_mass[child] += w;
            total += w;
        }
        if total <= 0.0 {
            return best_gain;
        }

        let mut weighted_gain = 0.0;
        for (child, mass) in child_mass.iter().enumerate() {
            let counts = &class_mass[child * num_classes..(child + 1) * num_classes];
            weighted_gain += mass * G::gain_from_counts(counts, *mass);
        }
        let gain = weighted_gain / total;

        if gain > best_gain + minimum_gain_split {
            split_info.push(num_categories as f64);
            gain
        } else {
            best_gain
        }
    }

    fn num_children(split_info: &[f64]) -> usize {
        split_info[0] as usize
    }

    #[inline]
    fn calculate_direction(value: f64, split_info: &[f64]) -> usize {
        category_code(value, Self::num_children(split_info)).unwrap_or(0)
    }
}
