//! Type-Set Algebra
//!
//! Participant lists are type-level cons lists (`Cons<A, Cons<B, Nil>>`,
//! written `Participants![A, B]`). Everything in this module is resolved
//! by the trait solver; nothing here exists at run time.
//!
//! - [`Contains`]: membership, as a type-level [`Bit`].
//! - [`Intersect`]: ordered intersection, preserving the left list's order.
//! - [`Subset`] / [`SetEq`]: containment and order-insensitive equality.
//! - [`MemberOf`]: membership as a *bound*, by exact type identity. This is
//!   what gates construction and conversion.
//! - [`ParticipantList`]: the lists a shared value can actually be built on
//!   (non-empty, duplicate-free, one underlying integer).
//! - [`Overlaps`]: two participant lists with a non-empty intersection.
//!
//! `Nil` is the base case of every recursion and the "no common type"
//! answer of [`Intersect`]. It never implements [`ParticipantList`], so a
//! shared value over an empty list cannot be built.

use std::marker::PhantomData;

use crate::logic::{And, AndOf, Bit, EqOf, False, Or, OrOf, Select, SelectOf, True, TypeEq};
use crate::participant::{Participant, Repr};

/// The empty participant list.
pub enum Nil {}

/// A participant list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// Builds a participant list type.
///
/// ```
/// use trak_core::type_set::{Cons, Nil};
/// use trak_core::{Participant, Participants};
///
/// #[derive(Clone, Copy, Participant)]
/// #[repr(u8)]
/// enum Red { On = 1 }
///
/// #[derive(Clone, Copy, Participant)]
/// #[repr(u8)]
/// enum Green { On = 1 }
///
/// fn same<T>(_: std::marker::PhantomData<T>, _: std::marker::PhantomData<T>) {}
/// same(
///     std::marker::PhantomData::<Participants![Red, Green]>,
///     std::marker::PhantomData::<Cons<Red, Cons<Green, Nil>>>,
/// );
/// ```
#[macro_export]
macro_rules! Participants {
    () => { $crate::type_set::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::type_set::Cons<$head, $crate::Participants![$($tail),*]>
    };
}

/// Any participant list, including the empty one.
pub trait TypeList: 'static {
    /// Number of participants.
    const LEN: usize;

    /// Appends the participants' names to `out`, in list order.
    fn collect_names(out: &mut Vec<&'static str>);

    /// The participants' names, in list order.
    fn names() -> Vec<&'static str> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut out);
        out
    }
}

impl TypeList for Nil {
    const LEN: usize = 0;

    fn collect_names(_out: &mut Vec<&'static str>) {}
}

impl<H: Participant, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;

    fn collect_names(out: &mut Vec<&'static str>) {
        out.push(H::NAME);
        T::collect_names(out);
    }
}

/// Whether `U` occurs in the list.
pub trait Contains<U: Participant>: TypeList {
    /// `True` iff some participant's tag equals `U`'s.
    type Output: Bit;
}

impl<U: Participant> Contains<U> for Nil {
    type Output = False;
}

impl<U, H, T> Contains<U> for Cons<H, T>
where
    U: Participant,
    H: Participant,
    T: Contains<U>,
    H::Tag: TypeEq<U::Tag>,
    EqOf<H::Tag, U::Tag>: Or<ContainsOf<T, U>>,
{
    type Output = OrOf<EqOf<H::Tag, U::Tag>, ContainsOf<T, U>>;
}

/// `L` contains `U`.
pub type ContainsOf<L, U> = <L as Contains<U>>::Output;

/// Ordered intersection with `R`.
pub trait Intersect<R: TypeList>: TypeList {
    /// The participants of `Self` that also occur in `R`, in `Self`'s order.
    type Output: TypeList;
}

impl<R: TypeList> Intersect<R> for Nil {
    type Output = Nil;
}

impl<H, T, R> Intersect<R> for Cons<H, T>
where
    H: Participant,
    T: Intersect<R>,
    R: Contains<H>,
    ContainsOf<R, H>: Select<Cons<H, Intersection<T, R>>, Intersection<T, R>>,
    SelectOf<ContainsOf<R, H>, Cons<H, Intersection<T, R>>, Intersection<T, R>>: TypeList,
{
    type Output = SelectOf<ContainsOf<R, H>, Cons<H, Intersection<T, R>>, Intersection<T, R>>;
}

/// The participants common to `L` and `R`, in `L`'s order.
pub type Intersection<L, R> = <L as Intersect<R>>::Output;

/// Whether every participant of `Self` occurs in `R`.
pub trait Subset<R: TypeList>: TypeList {
    /// `True` iff `Self` ⊆ `R`.
    type Output: Bit;
}

impl<R: TypeList> Subset<R> for Nil {
    type Output = True;
}

impl<H, T, R> Subset<R> for Cons<H, T>
where
    H: Participant,
    T: Subset<R>,
    R: Contains<H>,
    ContainsOf<R, H>: And<SubsetOf<T, R>>,
{
    type Output = AndOf<ContainsOf<R, H>, SubsetOf<T, R>>;
}

/// `L` ⊆ `R`.
pub type SubsetOf<L, R> = <L as Subset<R>>::Output;

/// Whether `Self` and `R` hold the same participants, in any order.
pub trait SetEq<R: TypeList>: TypeList {
    /// `True` iff `Self` ⊆ `R` and `R` ⊆ `Self`.
    type Output: Bit;
}

impl<L, R> SetEq<R> for L
where
    L: Subset<R>,
    R: Subset<L>,
    SubsetOf<L, R>: And<SubsetOf<R, L>>,
{
    type Output = AndOf<SubsetOf<L, R>, SubsetOf<R, L>>;
}

/// `L` and `R` hold the same participants.
pub type SetEqOf<L, R> = <L as SetEq<R>>::Output;

/// Whether `U` occurs in `L`.
pub const fn is_member<U: Participant, L: Contains<U>>() -> bool {
    <ContainsOf<L, U> as Bit>::VALUE
}

/// Whether `L` ⊆ `R`.
pub const fn is_subset<L: Subset<R>, R: TypeList>() -> bool {
    <SubsetOf<L, R> as Bit>::VALUE
}

/// Whether `L` and `R` hold the same participants.
pub const fn set_eq<L: SetEq<R>, R: TypeList>() -> bool {
    <SetEqOf<L, R> as Bit>::VALUE
}

/// Index of the head of a list, for [`MemberOf`].
pub enum Here {}

/// Index into the tail of a list, for [`MemberOf`].
pub struct There<I>(PhantomData<fn() -> I>);

/// `Self` is one of the participants of `L`.
///
/// `I` is inferred at the call site and locates `Self` in `L`; callers pass
/// `_` for it. Unlike [`Contains`] this relation is exact type identity and
/// does not depend on tags.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a member of this shared type set",
    label = "`{Self}` is not one of the participants",
    note = "the participants are `{L}`"
)]
pub trait MemberOf<L, I>: Participant {}

impl<U: Participant, T> MemberOf<Cons<U, T>, Here> for U {}

impl<U, H, T, I> MemberOf<Cons<H, T>, There<I>> for U
where
    U: Participant + MemberOf<T, I>,
{
}

/// No participant occurs twice.
pub trait Distinct: TypeList {}

impl Distinct for Nil {}

impl<H, T> Distinct for Cons<H, T>
where
    H: Participant,
    T: Distinct + Contains<H, Output = False>,
{
}

/// Every participant is backed by `R`.
pub trait UniformRepr<R: Repr>: TypeList {
    /// Name of the first participant that cannot represent `raw`, if any.
    fn first_rejecting(raw: R) -> Option<&'static str>;
}

impl<R: Repr> UniformRepr<R> for Nil {
    fn first_rejecting(_raw: R) -> Option<&'static str> {
        None
    }
}

impl<R, H, T> UniformRepr<R> for Cons<H, T>
where
    R: Repr,
    H: Participant<Repr = R>,
    T: UniformRepr<R>,
{
    fn first_rejecting(raw: R) -> Option<&'static str> {
        if H::from_repr(raw).is_none() {
            return Some(H::NAME);
        }
        T::first_rejecting(raw)
    }
}

/// A list a shared value can be built on.
///
/// Same-named types from different modules are different participants:
///
/// ```
/// use trak_core::{Participants, SharedEnum};
///
/// mod storage {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, trak_core::Participant)]
///     pub struct Perm(pub u32);
/// }
///
/// mod network {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, trak_core::Participant)]
///     pub struct Perm(pub u32);
/// }
///
/// let perm = SharedEnum::<Participants![storage::Perm, network::Perm]>::new(storage::Perm(4));
/// assert_eq!(perm.get::<network::Perm, _>(), Ok(network::Perm(4)));
/// ```
///
/// A participant may not appear twice:
///
/// ```compile_fail
/// use trak_core::{Participant, Participants, SharedEnum};
///
/// #[derive(Clone, Copy, Participant)]
/// struct Perm(u32);
///
/// let _ = SharedEnum::<Participants![Perm, Perm]>::from_raw(0);
/// ```
///
/// All participants must share one underlying integer:
///
/// ```compile_fail
/// use trak_core::{Participant, Participants, SharedEnum};
///
/// #[derive(Clone, Copy, Participant)]
/// #[repr(u8)]
/// enum Small { On = 1 }
///
/// #[derive(Clone, Copy, Participant)]
/// #[repr(u32)]
/// enum Wide { On = 1 }
///
/// let _ = SharedEnum::<Participants![Small, Wide]>::from_raw(0);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot back a shared value",
    label = "not a usable participant list",
    note = "a participant list must be non-empty with no repeated participant, and all participants must share one `Repr`"
)]
pub trait ParticipantList: Distinct {
    /// The canonical underlying integer.
    type Repr: Repr;

    /// Name of the first participant that cannot represent `raw`, if any.
    fn first_rejecting(raw: Self::Repr) -> Option<&'static str>;
}

impl<H, T> ParticipantList for Cons<H, T>
where
    H: Participant,
    T: Distinct + Contains<H, Output = False> + UniformRepr<H::Repr>,
{
    type Repr = H::Repr;

    fn first_rejecting(raw: H::Repr) -> Option<&'static str> {
        <Self as UniformRepr<H::Repr>>::first_rejecting(raw)
    }
}

/// `Self` and `R` share at least one participant.
///
/// This is the gate on the bitfield operators and on shared-to-shared
/// equality: it only holds when the intersection is itself a usable
/// participant list, which rules out the empty intersection.
#[diagnostic::on_unimplemented(
    message = "`{Self}` and `{R}` have no participant in common",
    label = "the participant lists are disjoint",
    note = "combining two shared values requires at least one common participant"
)]
pub trait Overlaps<R: ParticipantList>: ParticipantList {
    /// The intersection, in `Self`'s order.
    type Common: ParticipantList<Repr = Self::Repr>;
}

impl<L, R> Overlaps<R> for L
where
    L: ParticipantList + Intersect<R>,
    R: ParticipantList<Repr = L::Repr>,
    Intersection<L, R>: ParticipantList<Repr = L::Repr>,
{
    type Common = Intersection<L, R>;
}

/// The non-empty intersection of `L` and `R`.
pub type Common<L, R> = <L as Overlaps<R>>::Common;
