//! This is a **super-explicit** and **super-obvious** rendition of each fold in exact integer
//! arithmetic, since this is what we check the real implementations against! The exact result is
//! reduced mod 2^BITS only at the very end, which for add/sub/mul folds is equivalent to reducing
//! at every step.

use malachite::Integer;
use malachite::base::num::arithmetic::traits::ModPowerOf2;
use malachite::base::num::basic::traits::{One, Zero};

use crate::Uint;

/// Reduce an exact integer to the value a register of `U`'s width would hold.
fn truncate<U: Uint>(x: Integer) -> Integer {
  Integer::from(x.mod_power_of_2(U::BITS as u64))
}

pub(crate) fn sum<U: Uint>(xs: &[U]) -> Integer
where Integer: From<U> {
  let exact = xs.iter().fold(Integer::ZERO, |acc, &x| acc + Integer::from(x));
  truncate::<U>(exact)
}

pub(crate) fn difference<U: Uint>(seed: U, xs: &[U]) -> Integer
where Integer: From<U> {
  let exact = if xs.is_empty() {
    -Integer::from(seed)
  } else {
    xs.iter().fold(Integer::from(seed), |acc, &x| acc - Integer::from(x))
  };
  truncate::<U>(exact)
}

pub(crate) fn product<U: Uint>(xs: &[U]) -> Integer
where Integer: From<U> {
  let exact = xs.iter().fold(Integer::ONE, |acc, &x| acc * Integer::from(x));
  truncate::<U>(exact)
}

/// Unlike the other three, division must truncate at *every* step, so the fold below divides as
/// it goes rather than computing one exact value. All elements of `xs` must be nonzero.
pub(crate) fn quotient<U: Uint>(seed: U, xs: &[U]) -> Integer
where Integer: From<U> {
  xs.iter().fold(Integer::from(seed), |acc, &x| acc / Integer::from(x))
}
