//! Tests for factorials and ideal permutation entropy

#[cfg(test)]
mod tests {
    use shuffle_entropy::math::combinatorics::{factorial, log2_factorial};

    // Tests small factorials and the overflow boundary
    // Verified by starting the product at 0
    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(3), Some(6));
        assert_eq!(factorial(7), Some(5040));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    // Tests log2(n!) against direct computation
    // Verified by summing from k = 1 with natural logarithms
    #[test]
    fn test_log2_factorial_matches_factorial() {
        assert!(log2_factorial(0).abs() < f64::EPSILON);
        assert!(log2_factorial(1).abs() < f64::EPSILON);

        for n in 2..=20 {
            let exact = factorial(n).map(|f| (f as f64).log2()).unwrap_or_default();
            assert!(
                (log2_factorial(n) - exact).abs() < 1e-9,
                "n={n}: {} vs {exact}",
                log2_factorial(n)
            );
        }
    }

    // Tests the ideal for three elements used throughout the scenarios
    // Verified by using log2(n) instead of log2(n!)
    #[test]
    fn test_log2_factorial_three() {
        assert!((log2_factorial(3) - 2.584_962_500_721).abs() < 1e-9);
    }

    // Tests sizes past the u64 factorial range still have a finite ideal
    // Verified by computing via the overflowing factorial
    #[test]
    fn test_log2_factorial_large() {
        let value = log2_factorial(100);
        assert!(value.is_finite());
        assert!((value - 524.764_993_290_1).abs() < 1e-6);
    }
}
