use crate::{
    error::{FractionError, Result, ZERO_DENOMINATOR},
    fraction::Fraction
};
use num_traits::{Inv, One, Zero};
use std::{
    mem,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign}
};

/// Both operands need a usable denominator
fn ensure_defined(left: Fraction, right: Fraction) -> Result<()> {
    if left.denominator == 0.0 || right.denominator == 0.0 {
        return Err(ZERO_DENOMINATOR);
    }
    Ok(())
}

impl Fraction {
    /// Calculates addition and simplifies the result. Adding 0 returns the
    /// other operand as is.
    pub fn checked_add(self, other: Self) -> Result<Self> {
        ensure_defined(self, other)?;
        if self.is_zero() {
            return Ok(other);
        }
        if other.is_zero() {
            return Ok(self);
        }
        Self::normalize(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator
        )
    }
    /// Calculates subtraction and simplifies the result
    pub fn checked_sub(self, other: Self) -> Result<Self> {
        ensure_defined(self, other)?;
        if self.is_zero() {
            return Ok(-other);
        }
        if other.is_zero() {
            return Ok(self);
        }
        Self::normalize(
            self.numerator * other.denominator - other.numerator * self.denominator,
            self.denominator * other.denominator
        )
    }
    /// Calculates multiplication and simplifies the result
    pub fn checked_mul(self, other: Self) -> Result<Self> {
        ensure_defined(self, other)?;
        Self::normalize(self.numerator * other.numerator, self.denominator * other.denominator)
    }
    /// Calculates division and simplifies the result. Fails with
    /// `DivideByZero` if `other` is 0.
    pub fn checked_div(self, other: Self) -> Result<Self> {
        ensure_defined(self, other)?;
        if other.is_zero() {
            return Err(FractionError::DivideByZero);
        }
        // Multiply by the reciprocal
        Self::normalize(self.numerator * other.denominator, self.denominator * other.numerator)
    }
    /// Add one denominator's worth, i.e. 1
    pub fn increment(self) -> Result<Self> {
        Self::normalize(self.numerator + self.denominator, self.denominator)
    }
    /// Subtract one denominator's worth, i.e. 1
    pub fn decrement(self) -> Result<Self> {
        Self::normalize(self.numerator - self.denominator, self.denominator)
    }
    /// Raise this fraction to a fractional power.
    ///
    /// The root is taken before the power: `(n/d)^(a/b)` is computed as
    /// `(n^(1/b))^a / (d^(1/b))^a` on the magnitudes, then the sign is put
    /// back unless the base was multiplied with itself an even number of
    /// times (`a * b` is even). Negative exponents invert the base. Results
    /// off from a whole number by float noise are snapped to it.
    ///
    /// A zero base wins over a zero exponent, so `0^0` is 0. For a decimal
    /// base, convert it first: `Fraction::from_decimal(0.25)?.power(exponent)`.
    pub fn power(self, exponent: Self) -> Result<Self> {
        ensure_defined(self, exponent)?;
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        if exponent.is_zero() {
            return Ok(Self::ONE);
        }

        let Self { numerator: mut base_n, denominator: mut base_d } = self;
        let Self { numerator: mut exp_n, denominator: mut exp_d } = exponent;

        // x^-y = (1/x)^y
        if exp_n * exp_d < 0.0 {
            mem::swap(&mut base_n, &mut base_d);
            exp_n = exp_n.abs();
            exp_d = exp_d.abs();
        }

        let negative = base_n * base_d < 0.0;
        let numerator = base_n.abs().powf(1.0 / exp_d).powf(exp_n);
        let denominator = base_d.abs().powf(1.0 / exp_d).powf(exp_n);

        let sign = if negative && (exp_n * exp_d) % 2.0 != 0.0 { -1.0 } else { 1.0 };
        Self::normalize(sign * numerator, denominator)
    }
    /// Same as `power`, with the exponent given as a decimal and converted
    /// with `from_decimal`, so 0.5 takes the square root.
    pub fn power_decimal(self, exponent: f64) -> Result<Self> {
        self.power(Self::from_decimal(exponent)?)
    }
    /// Take the nth root, where n may itself be a fraction. The square root
    /// is `root(2/1)`. Fails if n is 0.
    pub fn root(self, n: Self) -> Result<Self> {
        self.power(n.inverse()?)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.numerator = -self.numerator;
        self
    }
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $call:ident),* --- $($trait_assign:ident $fn_assign:ident = ($op_assign:tt)),*) => {
        $(impl $trait for Fraction {
            type Output = Self;
            fn $fn(self, other: Self) -> Self {
                self.$call(other).unwrap_or_else(|err| panic!("{}", err))
            }
        }
        impl $trait<f64> for Fraction {
            type Output = Self;
            fn $fn(self, other: f64) -> Self {
                Fraction::from_decimal(other)
                    .and_then(|other| self.$call(other))
                    .unwrap_or_else(|err| panic!("{}", err))
            }
        }
        impl $trait<Fraction> for f64 {
            type Output = Fraction;
            fn $fn(self, other: Fraction) -> Fraction {
                Fraction::from_decimal(self)
                    .and_then(|me| me.$call(other))
                    .unwrap_or_else(|err| panic!("{}", err))
            }
        })*
        $(impl $trait_assign for Fraction {
            fn $fn_assign(&mut self, other: Self) {
                *self = *self $op_assign other;
            }
        }
        impl $trait_assign<f64> for Fraction {
            fn $fn_assign(&mut self, other: f64) {
                *self = *self $op_assign other;
            }
        })*
    }
}
// The operators panic where the checked methods return an error, e.g. when
// dividing by zero or on overflow
impl_op! {
    Add add = checked_add,
    Sub sub = checked_sub,
    Mul mul = checked_mul,
    Div div = checked_div
    ---
    AddAssign add_assign = (+),
    SubAssign sub_assign = (-),
    MulAssign mul_assign = (*),
    DivAssign div_assign = (/)
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }
    fn is_zero(&self) -> bool {
        Fraction::is_zero(*self)
    }
}
impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }
}
impl Inv for Fraction {
    type Output = Self;

    /// ## Panics
    /// Panics if the numerator is 0
    fn inv(self) -> Self::Output {
        self.inverse().unwrap_or_else(|err| panic!("{}", err))
    }
}
