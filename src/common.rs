//! Common constructs for generating discrete sample domains.

/// Generate a vec of domain values which are linearly spaced between `start` and `end` and which
/// have a count of `count`. The first value will be `start` and the last value will be `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `count`: the total number of discrete, evenly spaced values in the domain
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use naca_section::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 3);
/// assert_eq!(domain, vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(count);
    let step = (end - start) / (count - 1) as f64;
    for i in 0..count {
        result.push(start + i as f64 * step);
    }
    result
}

/// Generate a vec of domain values which begin at `start` and advance by `step`, ending exactly
/// at `end`. The end value is always emitted, so the final interval may be shorter than `step`
/// when the step does not divide the span evenly. A multiple of the step which lands within half
/// a step of the end is dropped in favor of the exact end value, so the result is always strictly
/// increasing.
///
/// If `start == end` the result is the single value `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive and emitted exactly
/// * `step`: the spacing between consecutive values, must be positive
///
/// returns: Vec<f64, Global>
pub fn stepped_space(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut result = Vec::new();
    let mut i = 0usize;
    loop {
        let value = start + i as f64 * step;
        if end - value <= step * 0.5 {
            break;
        }
        result.push(value);
        i += 1;
    }
    result.push(end);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stepped_space_ends_exactly() {
        let values = stepped_space(0.0, 0.4, 1.0e-2);
        assert_eq!(values.len(), 41);
        assert_eq!(values[0], 0.0);
        assert_eq!(*values.last().unwrap(), 0.4);
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn stepped_space_short_final_interval() {
        let values = stepped_space(0.0, 0.37, 0.1);
        assert_eq!(values.len(), 5);
        assert_relative_eq!(values[3], 0.3, epsilon = 1.0e-9);
        assert_eq!(*values.last().unwrap(), 0.37);
    }

    #[test]
    fn stepped_space_degenerate_span() {
        assert_eq!(stepped_space(0.0, 0.0, 1.0e-5), vec![0.0]);
    }
}
