//! Small statistics helpers over `f64` series.

/// Arithmetic mean; 0.0 for an empty series.
pub fn mean(values: &[f64]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). A series with fewer than two
/// values has no spread and yields 0.0.
pub fn sample_std_dev(values: &[f64]) -> f64 {
  if values.len() < 2 {
    return 0.0;
  }
  let m = mean(values);
  let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
  (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Ordinary least-squares slope of `values` against their index (0, 1, 2, ...).
/// Fewer than two points yield 0.0.
pub fn ols_slope(values: &[f64]) -> f64 {
  let n = values.len();
  if n < 2 {
    return 0.0;
  }
  let x_mean = (n - 1) as f64 / 2.0;
  let y_mean = mean(values);
  let (mut num, mut den) = (0.0, 0.0);
  for (i, y) in values.iter().enumerate() {
    let dx = i as f64 - x_mean;
    num += dx * (y - y_mean);
    den += dx * dx;
  }
  num / den
}

/// Round to `places` decimals on the exact binary value: 2.675 is stored just
/// below the half and becomes 2.67. Exact ties go to the even neighbour.
pub fn round_to(value: f64, places: usize) -> f64 {
  format!("{:.*}", places, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn mean_and_empty() {
    assert!(close(mean(&[1.0, 2.0, 6.0]), 3.0));
    assert!(close(mean(&[]), 0.0));
  }

  #[test]
  fn sample_std_dev_uses_n_minus_one() {
    // Population std of [1, 3] is 1; sample std is sqrt(2).
    assert!(close(sample_std_dev(&[1.0, 3.0]), 2f64.sqrt()));
    assert!(close(sample_std_dev(&[4.0]), 0.0));
    assert!(close(sample_std_dev(&[2.0, 2.0, 2.0]), 0.0));
  }

  #[test]
  fn slope_of_lines() {
    assert!(close(ols_slope(&[1.0, 2.0, 3.0]), 1.0));
    assert!(close(ols_slope(&[5.0, 3.0, 1.0]), -2.0));
    assert!(close(ols_slope(&[2.0, 2.0]), 0.0));
    assert!(close(ols_slope(&[7.0]), 0.0));
  }

  #[test]
  fn rounding_half_to_even() {
    assert!(close(round_to(2.5, 0), 2.0));
    assert!(close(round_to(3.5, 0), 4.0));
    assert!(close(round_to(3.3333, 2), 3.33));
    assert!(close(round_to(83.36, 1), 83.4));
  }

  #[test]
  fn rounding_uses_stored_binary_value() {
    assert_eq!(round_to(1.15, 1), 1.1);
    assert_eq!(round_to(2.675, 2), 2.67);
    // 23 commits over 20 active days.
    assert_eq!(round_to(23.0 / 20.0, 1), 1.1);
  }
}
