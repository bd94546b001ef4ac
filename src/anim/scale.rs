//! Banded easing and sub-phase splitting for node progress.

/// Width of one easing band.
pub const SC_DIV: f64 = 0.51;
/// Base increment applied to a scale on every tick.
pub const SC_GAP: f64 = 0.05;

/// Index of the band `x` falls into: 0 below `SC_DIV`, 1 up to twice that, and so on.
pub fn scale_factor(x: f64) -> f64 {
    (x / SC_DIV).floor()
}

/// Blends `1/a` (band 0) into `1/b` (band 1) as a step function of the band.
pub fn mirror_value(x: f64, a: usize, b: usize) -> f64 {
    let k = scale_factor(x);
    (1.0 - k) / a as f64 + k / b as f64
}

/// Signed per-tick increment for a scale currently at `x`.
pub fn update_value(x: f64, dir: f64, a: usize, b: usize) -> f64 {
    mirror_value(x, a, b) * dir * SC_GAP
}

/// Maps shared progress `x` into the [0, 1] progress of sub-element `i` out of `n`.
///
/// Sub-elements run back to back: element 0 sweeps while `x` is in `[0, 1/n]`,
/// element 1 while `x` is in `[1/n, 2/n]`, etc.
pub fn divide_scale(x: f64, i: usize, n: usize) -> f64 {
    let inv = 1.0 / n as f64;
    inv.min((x - i as f64 * inv).max(0.0)) * n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_scale_factor_bands() {
        assert_eq!(scale_factor(0.0), 0.0);
        assert_eq!(scale_factor(0.5), 0.0);
        assert_eq!(scale_factor(0.51), 1.0);
        assert_eq!(scale_factor(1.0), 1.0);
        assert_eq!(scale_factor(1.02), 2.0);
    }

    #[test]
    fn test_mirror_value_per_band() {
        assert!((mirror_value(0.2, 2, 3) - 0.5).abs() < EPS);
        assert!((mirror_value(0.8, 2, 3) - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_update_value_is_signed() {
        assert!((update_value(0.0, 1.0, 2, 3) - 0.025).abs() < EPS);
        assert!((update_value(0.0, -1.0, 2, 3) + 0.025).abs() < EPS);
        assert_eq!(update_value(0.3, 0.0, 2, 3), 0.0);
    }

    #[test]
    fn test_divide_scale_is_bounded() {
        for n in 1..=4 {
            for i in 0..n {
                for step in 0..=300 {
                    let x = step as f64 * 0.01;
                    let v = divide_scale(x, i, n);
                    assert!((0.0..=1.0).contains(&v), "x={x} i={i} n={n} -> {v}");
                }
            }
        }
    }

    #[test]
    fn test_divide_scale_runs_elements_in_order() {
        let n = 3;
        assert_eq!(divide_scale(0.2, 1, n), 0.0);
        assert!((divide_scale(0.2, 0, n) - 0.6).abs() < EPS);

        // element 1 only starts once element 0 is saturated
        for step in 0..=100 {
            let x = step as f64 * 0.01;
            if divide_scale(x, 1, n) > 0.0 {
                assert!((divide_scale(x, 0, n) - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_divide_scale_full_coverage_only_at_end() {
        let n = 3;
        let total = |x: f64| (0..n).map(|i| divide_scale(x, i, n)).sum::<f64>();
        assert!(total(0.9) < n as f64 - EPS);
        assert!((total(1.0) - n as f64).abs() < EPS);
        assert!((total(1.5) - n as f64).abs() < EPS);
    }
}
