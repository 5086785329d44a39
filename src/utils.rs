use crate::data::{FloatData, MatrixMut};
use crate::errors::SaplingError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

pub fn fmt_vec_output<T: FloatData<T>>(v: &[T]) -> String {
    let mut res = String::new();
    if let Some(last) = v.len().checked_sub(1) {
        if last == 0 {
            return format!("{:.4}", v[0]);
        }
        for n in &v[..last] {
            res.push_str(format!("{:.4}", n).as_str());
            res.push_str(", ");
        }
        res.push_str(format!("{:.4}", &v[last]).as_str());
    }
    res
}

// Validation
pub fn validate_positive_float_parameter<T: FloatData<T>>(value: T, parameter: &str) -> Result<(), SaplingError> {
    validate_float_parameter(value, T::ZERO, T::INFINITY, parameter)
}

pub fn validate_float_parameter<T: FloatData<T>>(
    value: T,
    min: T,
    max: T,
    parameter: &str,
) -> Result<(), SaplingError> {
    if value.is_nan() || value < min || max < value || value == T::INFINITY {
        let ex_msg = format!("finite real value within range {} and {}", min, max);
        Err(SaplingError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_min_usize_parameter(value: usize, min: usize, parameter: &str) -> Result<(), SaplingError> {
    if value < min {
        Err(SaplingError::InvalidParameter(
            parameter.to_string(),
            format!("integer of at least {}", min),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Index of the largest value, the first one wins ties.
#[inline]
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

/// Provided a range of points, reorder them in place so the points of every
/// child are contiguous and in child order. Labels and weights are moved with
/// their points. Returns the `(start, stop)` range of every child.
///
/// * `data` - The points, reordered in place.
/// * `labels` - The labels, reordered with the points.
/// * `weights` - Optional weights, reordered with the points.
/// * `start` - First point of the range.
/// * `stop` - One past the last point of the range.
/// * `num_children` - Number of children.
/// * `direction` - The child a point belongs to.
pub fn partition_points<F>(
    data: &mut MatrixMut<f64>,
    labels: &mut [usize],
    mut weights: Option<&mut [f64]>,
    start: usize,
    stop: usize,
    num_children: usize,
    direction: F,
) -> Vec<(usize, usize)>
where
    F: Fn(&[f64]) -> usize,
{
    let mut ranges = Vec::with_capacity(num_children);
    let mut lo = start;
    for child in 0..num_children.saturating_sub(1) {
        let mut i = lo;
        let mut j = stop;
        while i < j {
            if direction(data.get_col(i)) == child {
                i += 1;
            } else {
                j -= 1;
                data.swap_cols(i, j);
                labels.swap(i, j);
                if let Some(w) = weights.as_deref_mut() {
                    w.swap(i, j);
                }
            }
        }
        ranges.push((lo, i));
        lo = i;
    }
    ranges.push((lo, stop));
    ranges
}
