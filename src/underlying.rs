//! This module contains the implementations of the underlying machine integer operations needed
//! by the fold functions. These are hidden from the end-user, which only sees the sealed [`Uint`]
//! trait, implemented for `u8` and `u16`.

/// The trait for the unsigned machine integer types that can be folded over (only satisfied by
/// `u8` and `u16`).
///
/// This is a *sealed* type.
pub trait Uint: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug + core::fmt::Display +
  core::hash::Hash + Default +
{
  const ZERO: Self;
  const ONE: Self;
  const BITS: u32;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_mul(self, other: Self) -> Self;

  /// The additive inverse mod 2<sup>BITS</sup>. Short for `Self::ZERO.wrapping_sub(self)`.
  fn wrapping_neg(self) -> Self;

  /// Truncating unsigned division; `None` if `other` is 0.
  fn checked_div(self, other: Self) -> Option<Self>;
}

/// Implementation of all the functions, identical across widths.
macro_rules! impl_common {
  ($uint:ty) => {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const BITS: u32 = <$uint>::BITS;

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn wrapping_mul(self, other: Self) -> Self { self.wrapping_mul(other) }

    #[inline]
    fn wrapping_neg(self) -> Self { self.wrapping_neg() }

    #[inline]
    fn checked_div(self, other: Self) -> Option<Self> { self.checked_div(other) }
  }
}

impl Uint for u8 {}
impl Sealed for u8 {
  impl_common!{u8}
}

impl Uint for u16 {}
impl Sealed for u16 {
  impl_common!{u16}
}
