use crate::Uint;

/// Fold `xs` left to right with wrapping multiplication at the width of `U`, starting from 1.
///
/// An empty slice yields 1.
///
/// ```
/// assert_eq!(wrapfold::wrapping_product::<u8>(&[2, 3, 4]), 24);
/// assert_eq!(wrapfold::wrapping_product::<u8>(&[200, 2]), 144);
/// ```
pub fn wrapping_product<U: Uint>(xs: &[U]) -> U {
  xs.iter().fold(U::ONE, |acc, &x| acc.wrapping_mul(x))
}
