use crate::Uint;

/// The error type returned when a divisor element in [`checked_quotient`] is 0.
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

impl core::fmt::Display for DivideByZero {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "divisor element is zero")
  }
}

impl core::error::Error for DivideByZero {}

/// Fold `xs` left to right with truncating unsigned division at the width of `U`, starting from
/// `seed`.
///
/// An empty slice yields `Ok(seed)`. The fold stops at the first 0 divisor and returns
/// [`DivideByZero`]; elements after it are not inspected.
///
/// ```
/// # use wrapfold::{checked_quotient, DivideByZero};
/// assert_eq!(checked_quotient(100u8, &[5]), Ok(20));
/// assert_eq!(checked_quotient(42u8, &[]), Ok(42));
/// assert_eq!(checked_quotient(100u8, &[5, 0]), Err(DivideByZero));
/// ```
pub fn checked_quotient<U: Uint>(seed: U, xs: &[U]) -> Result<U, DivideByZero> {
  xs.iter().try_fold(seed, |acc, &x| acc.checked_div(x).ok_or(DivideByZero))
}
