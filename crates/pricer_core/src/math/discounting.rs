//! Continuous-compounding discounting.

/// Continuously compounded discount factor e^(-rT).
#[inline]
pub fn discount_factor(rate: f64, time: f64) -> f64 {
    (-rate * time).exp()
}

/// Present value of `future_value` received at `time`.
///
/// # Examples
/// ```
/// use pricer_core::math::discounting::discount_to_present;
///
/// let pv = discount_to_present(100.0, 0.05, 1.0);
/// assert!((pv - 95.122942).abs() < 1e-6);
/// ```
#[inline]
pub fn discount_to_present(future_value: f64, rate: f64, time: f64) -> f64 {
    future_value * discount_factor(rate, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_identity() {
        assert_eq!(discount_to_present(42.0, 0.0, 3.0), 42.0);
    }

    #[test]
    fn test_negative_rate_accretes() {
        assert!(discount_to_present(100.0, -0.01, 1.0) > 100.0);
    }

    #[test]
    fn test_discount_factor_composes() {
        let two_years = discount_factor(0.03, 2.0);
        let one_year = discount_factor(0.03, 1.0);
        assert_relative_eq!(two_years, one_year * one_year, epsilon = 1e-15);
    }
}
