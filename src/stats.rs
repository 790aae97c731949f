//! Descriptive statistics over a timing series.

use serde::Serialize;

use crate::error::StatsError;

/// Count, centre and spread of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    /// `std_dev / mean`; `None` when the mean is zero.
    pub cv: Option<f64>,
}

/// Compute the [`Summary`] of `values`.
pub fn summarize(values: &[f64]) -> Result<Summary, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();
    let cv = if mean == 0.0 { None } else { Some(std_dev / mean) };

    Ok(Summary {
        n,
        mean,
        std_dev,
        cv,
    })
}

/// Sliding dot product of `values` with itself, same length as the input.
///
/// Output index `i` holds lag `i + (n - 1) / 2 - (n - 1)`, i.e. the centre
/// `n` entries of the full `2n - 1` correlation. Values are not normalised.
pub fn autocorrelation(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let offset = (n - 1) / 2;
    (0..n)
        .map(|i| {
            // |lag|; the autocorrelation is symmetric in the lag sign.
            let lag = (i + offset).abs_diff(n - 1);
            values[..n - lag]
                .iter()
                .zip(&values[lag..])
                .map(|(a, b)| a * b)
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summary_of_two_averages() {
        let s = summarize(&[15.0, 5.0]).unwrap();
        assert_eq!(s.n, 2);
        assert!(close(s.mean, 10.0));
        assert!(close(s.std_dev, 5.0));
        assert!(close(s.cv.unwrap(), 0.5));
    }

    #[test]
    fn summary_of_raw_prefix() {
        let s = summarize(&[10.0, 20.0]).unwrap();
        assert!(close(s.mean, 15.0));
        assert!(close(s.std_dev, 5.0));
    }

    #[test]
    fn constant_series_has_zero_spread() {
        for n in 1..10 {
            let values = vec![42.0; n];
            let s = summarize(&values).unwrap();
            assert_eq!(s.n, n);
            assert!(close(s.mean, 42.0));
            assert!(close(s.std_dev, 0.0));
        }
    }

    #[test]
    fn empty_series_is_an_error() {
        assert_eq!(summarize(&[]), Err(StatsError::EmptySeries));
    }

    #[test]
    fn zero_mean_leaves_cv_undefined() {
        let s = summarize(&[-3.0, 3.0]).unwrap();
        assert!(close(s.std_dev, 3.0));
        assert_eq!(s.cv, None);
    }

    #[test]
    fn autocorrelation_odd_length() {
        // full: [3, 8, 14, 8, 3] → centre three
        assert_eq!(autocorrelation(&[1.0, 2.0, 3.0]), vec![8.0, 14.0, 8.0]);
    }

    #[test]
    fn autocorrelation_even_length() {
        // full: [2, 5, 2] → first two of the centre window
        assert_eq!(autocorrelation(&[1.0, 2.0]), vec![2.0, 5.0]);
        // full: [4, 11, 20, 30, 20, 11, 4]
        assert_eq!(
            autocorrelation(&[1.0, 2.0, 3.0, 4.0]),
            vec![11.0, 20.0, 30.0, 20.0]
        );
    }

    #[test]
    fn autocorrelation_zero_lag_is_energy() {
        let values = [3.0, -1.0, 4.0, 1.0, -5.0];
        let energy: f64 = values.iter().map(|v| v * v).sum();
        let acf = autocorrelation(&values);
        assert_eq!(acf.len(), values.len());
        assert!(close(acf[(values.len() - 1) - (values.len() - 1) / 2], energy));
    }

    #[test]
    fn autocorrelation_of_nothing_is_empty() {
        assert!(autocorrelation(&[]).is_empty());
    }
}
