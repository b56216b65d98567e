//! Fractions over `f64` components.
//!
//! ```
//! use fractional::Fraction;
//!
//! let half: Fraction = "1/2".parse()?;
//! let quarter = Fraction::from_decimal(0.25)?;
//!
//! assert_eq!((half + quarter).to_string(), "3/4");
//! assert_eq!(half.power(Fraction::from(2))?, quarter);
//! assert_eq!(Fraction::from(4).root(Fraction::from(2))?, Fraction::from(2));
//! # Ok::<(), fractional::FractionError>(())
//! ```
//!
//! Results that float arithmetic leaves a hair off a whole number are snapped
//! onto it. Each time that happens a message is logged through the `log`
//! crate under the `fractional::precision` target.

mod error;
mod fraction;
mod gcd;
mod ops;
mod precision;

pub use self::error::*;
pub use self::fraction::*;
pub use self::gcd::*;
pub use self::precision::{epsilon, set_epsilon, DEFAULT_EPSILON};
