use crate::Uint;

/// Fold `xs` left to right with wrapping subtraction at the width of `U`, starting from `seed`.
///
/// An empty slice yields the wrapping *negation* of `seed` (i.e. `0 - seed` mod 2<sup>W</sup>),
/// not `seed` itself. Contrast with [`checked_quotient`](crate::checked_quotient), where an empty
/// slice leaves the seed unchanged.
///
/// ```
/// assert_eq!(wrapfold::wrapping_difference(10u8, &[3, 4]), 3);
/// assert_eq!(wrapfold::wrapping_difference(5u8, &[]), 251);
/// ```
pub fn wrapping_difference<U: Uint>(seed: U, xs: &[U]) -> U {
  if xs.is_empty() {
    return seed.wrapping_neg()
  }
  xs.iter().fold(seed, |acc, &x| acc.wrapping_sub(x))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fold::{oracle, test::{seqs, seqs_nonempty}};
  use crate::wrapping_sum;
  use malachite::Integer;
  use proptest::prelude::*;

  #[test]
  fn empty_negates_the_seed() {
    assert_eq!(wrapping_difference(5u8, &[]), 251);
    assert_eq!(wrapping_difference(0u8, &[]), 0);
    assert_eq!(wrapping_difference(255u8, &[]), 1);
    assert_eq!(wrapping_difference(5u16, &[]), 65531);
    assert_eq!(wrapping_difference(0u16, &[]), 0);
  }

  #[test]
  fn basics() {
    assert_eq!(wrapping_difference(10u8, &[3, 4]), 3);
    assert_eq!(wrapping_difference(10u8, &[10]), 0);
    assert_eq!(wrapping_difference(10u16, &[3, 4]), 3);
    assert_eq!(wrapping_difference(60_000u16, &[10_000, 20_000]), 30_000);
  }

  #[test]
  fn wraps_at_width() {
    assert_eq!(wrapping_difference(3u8, &[10]), 249);
    assert_eq!(wrapping_difference(0u8, &[1]), 255);
    assert_eq!(wrapping_difference(0u8, &[255, 255]), 2);
    assert_eq!(wrapping_difference(3u16, &[10]), 65529);
    assert_eq!(wrapping_difference(0u16, &[1]), 65535);
  }

  #[test]
  fn u8_pairs_exhaustive() {
    for seed in 0 ..= u8::MAX {
      for x in 0 ..= u8::MAX {
        assert_eq!(wrapping_difference(seed, &[x]), seed.wrapping_sub(x), "{:?}: {:?}", seed, x)
      }
    }
  }

  macro_rules! test_proptest {
    ($name:ident, $name_nonempty:ident, $uint:ty) => {
      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
        #[test]
        fn $name(seed in any::<$uint>(), xs in seqs::<$uint>()) {
          assert_eq!(Integer::from(wrapping_difference(seed, &xs)), oracle::difference(seed, &xs));
        }

        #[test]
        fn $name_nonempty(seed in any::<$uint>(), xs in seqs_nonempty::<$uint>()) {
          // Folding subtraction is the same as subtracting the whole sum, as long as the slice is
          // nonempty
          assert_eq!(wrapping_difference(seed, &xs), seed.wrapping_sub(wrapping_sum(&xs)));
        }
      }
    }
  }

  test_proptest!{u8_proptest, u8_proptest_nonempty, u8}
  test_proptest!{u16_proptest, u16_proptest_nonempty, u16}
}
