/// Fraction of predictions equal to the label, zero for empty input.
pub fn accuracy(y: &[usize], yhat: &[usize]) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let correct = y.iter().zip(yhat).filter(|(y_, yhat_)| y_ == yhat_).count();
    correct as f64 / y.len() as f64
}

/// Share of the total weight carried by correct predictions,
/// zero when the total weight is zero.
pub fn weighted_accuracy(y: &[usize], yhat: &[usize], sample_weight: &[f64]) -> f64 {
    let mut w_sum = 0.;
    let res = y
        .iter()
        .zip(yhat)
        .zip(sample_weight)
        .map(|((y_, yhat_), w_)| {
            w_sum += *w_;
            if y_ == yhat_ {
                *w_
            } else {
                0.
            }
        })
        .sum::<f64>();
    if w_sum > 0. {
        res / w_sum
    } else {
        0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        let y = vec![0, 1, 2, 1];
        let yhat = vec![0, 1, 1, 1];
        assert_eq!(accuracy(&y, &yhat), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn test_weighted_accuracy() {
        let y = vec![0, 1, 2, 1];
        let yhat = vec![0, 1, 1, 1];
        let w = vec![1., 1., 2., 0.];
        assert_eq!(weighted_accuracy(&y, &yhat, &w), 0.5);
        assert_eq!(weighted_accuracy(&y, &yhat, &[0.; 4]), 0.0);
    }
}
