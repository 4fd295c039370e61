use crate::Uint;

/// Fold `xs` left to right with wrapping addition at the width of `U`, starting from 0.
///
/// An empty slice yields 0.
///
/// ```
/// assert_eq!(wrapfold::wrapping_sum::<u8>(&[1, 2, 3]), 6);
/// assert_eq!(wrapfold::wrapping_sum::<u8>(&[250, 10]), 4);
/// ```
pub fn wrapping_sum<U: Uint>(xs: &[U]) -> U {
  xs.iter().fold(U::ZERO, |acc, &x| acc.wrapping_add(x))
}
