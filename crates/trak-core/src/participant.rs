//! Participant and underlying-integer traits

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Fixed-width integer backing a participant and the shared values built from it.
pub trait Repr:
    Copy
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitOrAssign
    + BitAndAssign
    + BitXorAssign
    + Send
    + Sync
    + 'static
{
    /// The all-clear bit pattern.
    const ZERO: Self;

    /// Lossless widening, used for error reporting.
    fn widen(self) -> i128;
}

macro_rules! impl_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_repr!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A concrete type that can take part in a shared value.
///
/// Usually derived: `#[derive(Participant)]` on a fieldless `#[repr(int)]`
/// enum, or on a single-field struct wrapping the integer (the usual shape
/// for flag sets, where every bit pattern is a valid value).
///
/// `Tag` must be distinct for every participant type that can meet another
/// in one participant list or intersection. See [`crate::tag`].
pub trait Participant: Copy + 'static {
    /// Underlying integer.
    type Repr: Repr;

    /// Type-level identity used by the set algebra.
    type Tag: 'static;

    /// Type name, for diagnostics.
    const NAME: &'static str;

    /// The underlying bit pattern of `self`.
    fn to_repr(self) -> Self::Repr;

    /// Rebuilds a value from a bit pattern, or `None` when `repr` is not a
    /// value of this type.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_keeps_sign() {
        assert_eq!((-1i8).widen(), -1);
        assert_eq!(u64::MAX.widen(), i128::from(u64::MAX));
        assert_eq!(<u16 as Repr>::ZERO, 0);
    }
}
