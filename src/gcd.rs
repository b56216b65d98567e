/// Upper bound on the number of candidates tried when the magnitudes are not
/// whole numbers. Only values built from roots or raw non-integral input get
/// here, and they practically never share a divisor that far below their
/// minimum.
const SCAN_LIMIT: u32 = 1 << 20;

/// Find the greatest common divisor of the magnitudes of two numbers.
///
/// The result is always at least 1: a zero or non-finite argument, or two
/// magnitudes without a common divisor of at least 1, yield 1.
///
/// Whole numbers use Euclid's algorithm. `%` on `f64` is exact, so this
/// stays exact even past 2^53 where every float is a whole number.
/// Non-integral magnitudes fall back to trying `min, min - 1, min - 2, ...`
/// down to 1 and returning the first value dividing both.
pub fn gcd(x: f64, y: f64) -> f64 {
    let x = x.abs();
    let y = y.abs();

    if !x.is_finite() || !y.is_finite() || x == 0.0 || y == 0.0 {
        return 1.0;
    }

    if x.fract() == 0.0 && y.fract() == 0.0 {
        euclid(x, y)
    } else {
        scan(x, y)
    }
}
fn euclid(mut x: f64, mut y: f64) -> f64 {
    // gcd(x, y) = gcd(y, x mod y)
    while y != 0.0 {
        let rem = x % y;
        x = y;
        y = rem;
    }
    x
}
fn scan(x: f64, y: f64) -> f64 {
    let mut candidate = x.min(y);
    let mut tries = 0;
    while candidate >= 1.0 && tries < SCAN_LIMIT {
        if x % candidate == 0.0 && y % candidate == 0.0 {
            return candidate;
        }
        candidate -= 1.0;
        tries += 1;
    }
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The plain descending scan without a limit, used as a reference
    fn reference(x: f64, y: f64) -> f64 {
        let (x, y) = (x.abs(), y.abs());
        let mut i = x.min(y);
        while i >= 1.0 {
            if x % i == 0.0 && y % i == 0.0 {
                return i;
            }
            i -= 1.0;
        }
        1.0
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(gcd(81.0, 54.0), 27.0);
        assert_eq!(gcd(9.0, 27.0), 9.0);
        assert_eq!(gcd(-200.0, 400.0), 200.0);
        assert_eq!(gcd(999_999.0, 1_999_998.0), 999_999.0);
        assert_eq!(gcd(17.0, 5.0), 1.0);
        assert_eq!(gcd(2f64.powi(60), 2f64.powi(58) * 3.0), 2f64.powi(58));
    }

    #[test]
    fn matches_descending_scan() {
        for i in 1..60 {
            for j in 1..60 {
                let (x, y) = (i as f64, j as f64);
                assert_eq!(gcd(x, y), reference(x, y), "gcd({}, {})", x, y);
                assert_eq!(gcd(-x, y), reference(-x, y), "gcd(-{}, {})", x, y);
            }
        }
    }

    #[test]
    fn non_integral() {
        assert_eq!(gcd(1.5, 3.0), 1.5);
        assert_eq!(gcd(4.5, 6.0), 1.5);
        assert_eq!(gcd(0.5, 1.0), 1.0);
        assert_eq!(gcd(2f64.sqrt(), 1.0), 1.0);
        assert_eq!(gcd(2.5, 7.25), reference(2.5, 7.25));
    }

    #[test]
    fn degenerate() {
        assert_eq!(gcd(0.0, 5.0), 1.0);
        assert_eq!(gcd(5.0, 0.0), 1.0);
        assert_eq!(gcd(std::f64::INFINITY, 5.0), 1.0);
        assert_eq!(gcd(std::f64::NAN, 5.0), 1.0);
    }
}
