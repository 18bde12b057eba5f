//! Participant type tags
//!
//! Stable Rust cannot ask "are these two types the same?" and get an answer
//! back, only "is this bound satisfied?". Intersection needs the answer, so
//! every participant carries a 64-bit tag encoded as a type: sixteen hex
//! digits, most significant first, each digit a [`Nibble`] of four
//! type-level bits. Equality of two tags is then computed digit by digit.
//!
//! `#[derive(Participant)]` writes the tag: an FNV-1a [`fingerprint`] of
//! the type's module path, name and shape, lowered to digit types through
//! [`Hex`] at compile time. Two distinct participants that meet in one
//! program must not share a tag; same-named types in different modules
//! get different ones.

use std::marker::PhantomData;

use crate::logic::{And, AndOf, EqOf, False, True, TypeEq};

/// Four type-level bits, most significant first.
pub struct Nibble<B3, B2, B1, B0>(PhantomData<(B3, B2, B1, B0)>);

impl<A3, A2, A1, A0, B3, B2, B1, B0> TypeEq<Nibble<B3, B2, B1, B0>> for Nibble<A3, A2, A1, A0>
where
    A3: TypeEq<B3>,
    A2: TypeEq<B2>,
    A1: TypeEq<B1>,
    A0: TypeEq<B0>,
    EqOf<A3, B3>: And<EqOf<A2, B2>>,
    EqOf<A1, B1>: And<EqOf<A0, B0>>,
    AndOf<EqOf<A3, B3>, EqOf<A2, B2>>: And<AndOf<EqOf<A1, B1>, EqOf<A0, B0>>>,
{
    type Output = AndOf<AndOf<EqOf<A3, B3>, EqOf<A2, B2>>, AndOf<EqOf<A1, B1>, EqOf<A0, B0>>>;
}

/// Hex digit `0`
pub type X0 = Nibble<False, False, False, False>;
/// Hex digit `1`
pub type X1 = Nibble<False, False, False, True>;
/// Hex digit `2`
pub type X2 = Nibble<False, False, True, False>;
/// Hex digit `3`
pub type X3 = Nibble<False, False, True, True>;
/// Hex digit `4`
pub type X4 = Nibble<False, True, False, False>;
/// Hex digit `5`
pub type X5 = Nibble<False, True, False, True>;
/// Hex digit `6`
pub type X6 = Nibble<False, True, True, False>;
/// Hex digit `7`
pub type X7 = Nibble<False, True, True, True>;
/// Hex digit `8`
pub type X8 = Nibble<True, False, False, False>;
/// Hex digit `9`
pub type X9 = Nibble<True, False, False, True>;
/// Hex digit `a`
pub type XA = Nibble<True, False, True, False>;
/// Hex digit `b`
pub type XB = Nibble<True, False, True, True>;
/// Hex digit `c`
pub type XC = Nibble<True, True, False, False>;
/// Hex digit `d`
pub type XD = Nibble<True, True, False, True>;
/// Hex digit `e`
pub type XE = Nibble<True, True, True, False>;
/// Hex digit `f`
pub type XF = Nibble<True, True, True, True>;

/// A hex digit as a const parameter, mapped to its [`Nibble`] by [`HexDigit`].
pub struct Hex<const D: u8>;

/// The [`Nibble`] type for a const digit.
pub trait HexDigit {
    /// One of `X0` to `XF`.
    type Nibble;
}

macro_rules! hex_digits {
    ($($digit:literal => $nibble:ident),* $(,)?) => {
        $(
            impl HexDigit for Hex<$digit> {
                type Nibble = $nibble;
            }
        )*
    };
}

hex_digits!(
    0 => X0, 1 => X1, 2 => X2, 3 => X3, 4 => X4, 5 => X5, 6 => X6, 7 => X7,
    8 => X8, 9 => X9, 10 => XA, 11 => XB, 12 => XC, 13 => XD, 14 => XE, 15 => XF,
);

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a of `signature`, usable in const position.
pub const fn fingerprint(signature: &str) -> u64 {
    let bytes = signature.as_bytes();
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Hex digit `index` of `tag`, counting from the least significant.
pub const fn nibble(tag: u64, index: u32) -> u8 {
    ((tag >> (index * 4)) & 0xf) as u8
}

/// One digit of a tag followed by the remaining digits.
pub struct TagDigit<N, Rest>(PhantomData<(N, Rest)>);

/// End of a tag.
pub struct TagEnd;

impl TypeEq<TagEnd> for TagEnd {
    type Output = True;
}

impl<N, R, M, S> TypeEq<TagDigit<M, S>> for TagDigit<N, R>
where
    N: TypeEq<M>,
    R: TypeEq<S>,
    EqOf<N, M>: And<EqOf<R, S>>,
{
    type Output = AndOf<EqOf<N, M>, EqOf<R, S>>;
}
