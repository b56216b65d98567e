use crate::{
    error::{FractionError, Result, NOT_FINITE, ZERO_DENOMINATOR},
    gcd::gcd,
    precision::compensate
};
use num_traits::{FromPrimitive, ToPrimitive};
use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr
};

/// Significant digits kept when a decimal is decomposed into a fraction
const DECIMAL_DIGITS: usize = std::f64::DIGITS as usize;

const MALFORMED: FractionError = FractionError::InvalidArgument("unrecognized fraction, expected something like 1/2");
const NOT_WHOLE: FractionError = FractionError::InvalidArgument("fraction parts must be whole numbers");

/// A number stored as a numerator and a denominator, so that (1/3) * 3 is
/// exactly 1 and not 0.99999.
///
/// Both parts are `f64`, so whole numbers are exact up to 2^53 and anything
/// produced by roots may carry a fractional part. Normalization reduces the
/// pair and snaps quotients within a tiny relative tolerance of a whole
/// number onto it, see [`set_epsilon`](crate::set_epsilon).
///
/// Every instance has a finite numerator and a finite, nonzero denominator.
/// The pair is not necessarily reduced: `Fraction::new(2.0, 4.0)` stores
/// `2/4` while comparing equal to `1/2`.
#[derive(Clone, Copy)]
pub struct Fraction {
    pub(crate) numerator: f64,
    pub(crate) denominator: f64
}
impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}
impl Fraction {
    pub(crate) const ZERO: Self = Self { numerator: 0.0, denominator: 1.0 };
    pub(crate) const ONE: Self = Self { numerator: 1.0, denominator: 1.0 };

    /// Construct a new fraction as is, without simplifying it
    pub fn new(numerator: f64, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(ZERO_DENOMINATOR);
        }
        if !numerator.is_finite() || !denominator.is_finite() {
            return Err(FractionError::InvalidArgument("fraction parts must be finite"));
        }
        Ok(Self { numerator, denominator })
    }
    /// Construct a new fraction from a decimal value.
    ///
    /// Whole numbers are stored exactly as `x/1`. Anything else is rounded
    /// to 15 significant digits (ties to even) and read back as digits over a
    /// power of ten, so 0.1 + 0.2 becomes 3/10 and not the float noise after
    /// it. Fails for non-finite values and for magnitudes so small the power
    /// of ten no longer fits in an `f64`.
    pub fn from_decimal(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(FractionError::InvalidArgument("decimal value must be finite"));
        }
        if value.fract() == 0.0 {
            return Ok(Self { numerator: value + 0.0, denominator: 1.0 });
        }

        // 1.23e-4 is rendered as "1.23000000000000e-4"
        let text = format!("{:.*e}", DECIMAL_DIGITS - 1, value.abs());
        let (mantissa, exponent) = text.split_once('e').ok_or(MALFORMED)?;
        let exponent: i32 = exponent.parse().map_err(|_| MALFORMED)?;
        let digits: String = mantissa.chars().filter(|&c| c != '.').collect();
        let digits = digits.trim_end_matches('0');

        let scale = exponent - (digits.len() as i32 - 1);
        let mut numerator: f64 = digits.parse().map_err(|_| MALFORMED)?;
        let denominator = if scale >= 0 {
            numerator *= power_of_ten(scale)?;
            1.0
        } else {
            power_of_ten(-scale)?
        };
        if value < 0.0 {
            numerator = -numerator;
        }
        Self::normalize(numerator, denominator)
    }
    /// Reduce `numerator/denominator` to lowest terms with a positive
    /// denominator, compensating float rounding errors.
    pub fn normalize(numerator: f64, denominator: f64) -> Result<Self> {
        Self::normalize_reporting(numerator, denominator).map(|(fraction, _)| fraction)
    }
    /// Same as `normalize`, but also returns whether the result was snapped
    /// to the nearest whole number to compensate a rounding error.
    pub fn normalize_reporting(numerator: f64, denominator: f64) -> Result<(Self, bool)> {
        if denominator == 0.0 {
            return Err(ZERO_DENOMINATOR);
        }
        if !numerator.is_finite() || !denominator.is_finite() {
            return Err(NOT_FINITE);
        }
        Ok(Self::reduce(numerator, denominator))
    }
    /// Normalize a pair already known to be valid
    fn reduce(mut numerator: f64, mut denominator: f64) -> (Self, bool) {
        if numerator == 0.0 {
            return (Self::ZERO, false);
        }

        let gcd = gcd(numerator, denominator);
        numerator /= gcd;
        denominator /= gcd;

        // -1/4 instead of 1/-4
        if denominator < 0.0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let (numerator, denominator, compensated) = compensate(numerator, denominator);
        (Self { numerator, denominator }, compensated)
    }
    /// Find the lowest possible denominator for this fraction
    pub fn simplify(self) -> Self {
        Self::reduce(self.numerator, self.denominator).0
    }
    /// Return the numerator
    pub fn numerator(self) -> f64 {
        self.numerator
    }
    /// Return the denominator
    pub fn denominator(self) -> f64 {
        self.denominator
    }
    /// Greatest common divisor of the numerator and the denominator
    pub fn gcd(self) -> f64 {
        gcd(self.numerator, self.denominator)
    }
    /// Calculates the decimal result of this fraction
    pub fn to_decimal(self) -> f64 {
        self.numerator / self.denominator
    }
    /// Returns true if this fraction is 0. There is no need to simplify first.
    pub fn is_zero(self) -> bool {
        self.numerator == 0.0
    }
    /// Returns true if this fraction is 1. There is no need to simplify first.
    pub fn is_one(self) -> bool {
        self.numerator == self.denominator
    }
    /// Returns true if this fraction simplifies to a whole number
    pub fn is_integer(self) -> bool {
        self.simplify().denominator == 1.0
    }
    /// Return this value with a positive sign.
    /// abs of -1/2 is 1/2, abs of 1/-2 is also 1/2.
    pub fn abs(self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.abs()
        }
    }
    /// Swap the numerator and the denominator. Fails if the numerator is 0.
    pub fn inverse(self) -> Result<Self> {
        Self::new(self.denominator, self.numerator)
    }
}

fn power_of_ten(exponent: i32) -> Result<f64> {
    // Parsing gives the correctly rounded value, unlike repeated multiplication
    let value: f64 = format!("1e{}", exponent).parse().map_err(|_| MALFORMED)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FractionError::InvalidArgument("decimal value is out of range"))
    }
}
fn parse_whole(part: &str, not_a_number: &'static str) -> Result<f64> {
    let value: f64 = part.parse().map_err(|_| FractionError::InvalidArgument(not_a_number))?;
    if !value.is_finite() {
        return Err(FractionError::InvalidArgument(not_a_number));
    }
    if value.fract() != 0.0 {
        return Err(NOT_WHOLE);
    }
    Ok(value)
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        // 1/2 = 2/4
        let (me, other) = (self.simplify(), other.simplify());
        me.numerator == other.numerator && me.denominator == other.denominator
    }
}
impl Eq for Fraction {}
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.simplify().to_decimal().to_bits().hash(state);
    }
}
impl PartialOrd for Fraction {
    /// Compares the decimal results, not the reduced pairs.
    ///
    /// This breaks the usual `PartialOrd`/`PartialEq` agreement: huge
    /// numerators or denominators can round to the same quotient, so
    /// `partial_cmp` returns `Some(Equal)` for two values that are not `==`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_decimal().partial_cmp(&other.to_decimal())
    }
}
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(precision) = f.precision() {
            return write!(f, "{:.*}", precision, self.to_decimal());
        }
        if self.denominator == 1.0 {
            write!(f, "{}", self.numerator)
        } else if self.denominator == 0.0 {
            write!(f, "Undefined!")
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
impl FromStr for Fraction {
    type Err = FractionError;

    /// Parse "numerator/denominator". Both parts must be whole numbers;
    /// whitespace around either part is ignored, and so are empty segments,
    /// which makes "1//2" and "/1/2" read as 1/2. The result is simplified.
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.split('/').map(str::trim).filter(|part| !part.is_empty());
        let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
            (Some(numerator), Some(denominator), None) => (numerator, denominator),
            _ => return Err(MALFORMED)
        };

        let numerator = parse_whole(numerator, "numerator is not a number")?;
        let denominator = parse_whole(denominator, "denominator is not a number")?;
        Self::normalize(numerator, denominator)
    }
}
impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_decimal(value)
    }
}
macro_rules! impl_from {
    ($($int:ident),*) => {
        $(impl From<$int> for Fraction {
            fn from(i: $int) -> Self {
                Self {
                    numerator: f64::from(i),
                    denominator: 1.0
                }
            }
        })*
    }
}
impl_from!(u8, u16, u32, i8, i16, i32);

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        self.to_decimal().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.to_decimal().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.to_decimal())
    }
}
impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Self::from_decimal(n as f64).ok()
    }
    fn from_u64(n: u64) -> Option<Self> {
        Self::from_decimal(n as f64).ok()
    }
    fn from_f64(n: f64) -> Option<Self> {
        Self::from_decimal(n).ok()
    }
}
