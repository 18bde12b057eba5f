//! Type-level booleans
//!
//! The set algebra answers its questions ("is `U` in this list?", "is this
//! list a subset of that one?") with a type rather than a value, so the
//! answer can drive further trait resolution. `True` and `False` are those
//! answers; [`Bit::VALUE`] lowers them back to a `bool` when a value is
//! needed.

/// A type-level boolean.
pub trait Bit: 'static {
    /// The boolean this type stands for.
    const VALUE: bool;
}

/// Type-level `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// Type-level `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Bit for True {
    const VALUE: bool = true;
}

impl Bit for False {
    const VALUE: bool = false;
}

/// Conjunction of two type-level booleans.
pub trait And<Rhs: Bit>: Bit {
    /// `Self && Rhs`
    type Output: Bit;
}

impl<Rhs: Bit> And<Rhs> for True {
    type Output = Rhs;
}

impl<Rhs: Bit> And<Rhs> for False {
    type Output = False;
}

/// Disjunction of two type-level booleans.
pub trait Or<Rhs: Bit>: Bit {
    /// `Self || Rhs`
    type Output: Bit;
}

impl<Rhs: Bit> Or<Rhs> for True {
    type Output = True;
}

impl<Rhs: Bit> Or<Rhs> for False {
    type Output = Rhs;
}

/// Negation of a type-level boolean.
pub trait Negate: Bit {
    /// `!Self`
    type Output: Bit;
}

impl Negate for True {
    type Output = False;
}

impl Negate for False {
    type Output = True;
}

/// Type-level `if Self { Then } else { Else }`.
pub trait Select<Then, Else>: Bit {
    /// The chosen branch.
    type Output;
}

impl<Then, Else> Select<Then, Else> for True {
    type Output = Then;
}

impl<Then, Else> Select<Then, Else> for False {
    type Output = Else;
}

/// Decidable equality between two types.
///
/// Only implemented where the answer can be computed structurally: between
/// bits here, and between participant tags in [`crate::tag`].
pub trait TypeEq<Rhs> {
    /// `True` when `Self` and `Rhs` are the same type.
    type Output: Bit;
}

impl TypeEq<True> for True {
    type Output = True;
}

impl TypeEq<False> for True {
    type Output = False;
}

impl TypeEq<True> for False {
    type Output = False;
}

impl TypeEq<False> for False {
    type Output = True;
}

/// `A && B`
pub type AndOf<A, B> = <A as And<B>>::Output;

/// `A || B`
pub type OrOf<A, B> = <A as Or<B>>::Output;

/// `!A`
pub type NotOf<A> = <A as Negate>::Output;

/// `if C { T } else { E }`
pub type SelectOf<C, T, E> = <C as Select<T, E>>::Output;

/// `A == B`
pub type EqOf<A, B> = <A as TypeEq<B>>::Output;
