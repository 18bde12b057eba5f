//! Shared Bitfield
//!
//! [`SharedBitfield<L>`] is a [`SharedEnum<L>`] for flag-style participants,
//! with the bitwise operators between two shared values. Combining
//! `SharedBitfield<A>` with `SharedBitfield<B>` yields a
//! `SharedBitfield<Intersection<A, B>>`: the result is only known to be a
//! value of the types both operands are members of.
//!
//! ```
//! use trak_core::{Participant, Participants, SharedBitfield};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! struct FilePerm(u8);
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! struct SocketPerm(u8);
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! struct PipePerm(u8);
//!
//! let file = SharedBitfield::<Participants![FilePerm, SocketPerm]>::new(FilePerm(0b01));
//! let pipe = SharedBitfield::<Participants![SocketPerm, PipePerm]>::new(PipePerm(0b10));
//!
//! let both: SharedBitfield<Participants![SocketPerm]> = file | pipe;
//! assert_eq!(both.get::<SocketPerm, _>().unwrap(), SocketPerm(0b11));
//! ```
//!
//! The operators are not available when the participant lists are disjoint:
//!
//! ```compile_fail
//! use trak_core::{Participant, Participants, SharedBitfield};
//!
//! #[derive(Clone, Copy, Participant)]
//! struct FilePerm(u8);
//!
//! #[derive(Clone, Copy, Participant)]
//! struct GpuPerm(u8);
//!
//! let file = SharedBitfield::<Participants![FilePerm]>::new(FilePerm(1));
//! let gpu = SharedBitfield::<Participants![GpuPerm]>::new(GpuPerm(2));
//! let _ = file | gpu;
//! ```
//!
//! Same-named participants declared in different modules are different
//! types, so their lists are disjoint too:
//!
//! ```compile_fail
//! use trak_core::{Participants, SharedBitfield};
//!
//! mod storage {
//!     #[derive(Clone, Copy, trak_core::Participant)]
//!     pub struct Perm(pub u32);
//! }
//!
//! mod network {
//!     #[derive(Clone, Copy, trak_core::Participant)]
//!     pub struct Perm(pub u32);
//! }
//!
//! let disk = SharedBitfield::<Participants![storage::Perm]>::new(storage::Perm(1));
//! let net = SharedBitfield::<Participants![network::Perm]>::new(network::Perm(2));
//! let _ = disk | net;
//! ```
//!
//! The compound forms are gated the same way:
//!
//! ```compile_fail
//! use trak_core::{Participant, Participants, SharedBitfield};
//!
//! #[derive(Clone, Copy, Participant)]
//! struct FilePerm(u8);
//!
//! #[derive(Clone, Copy, Participant)]
//! struct GpuPerm(u8);
//!
//! let mut file = SharedBitfield::<Participants![FilePerm]>::new(FilePerm(1));
//! file &= SharedBitfield::<Participants![GpuPerm]>::new(GpuPerm(2));
//! ```
//!
//! Compound assignment does not narrow: `a |= b` keeps `a`'s participant
//! list and only replaces the stored bits. Like the plain integer it wraps,
//! a bitfield updated in place from several threads needs outside
//! synchronization.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::errors::Result;
use crate::logic::True;
use crate::participant::{Participant, Repr};
use crate::shared_enum::SharedEnum;
use crate::type_set::{Common, MemberOf, Overlaps, ParticipantList, Subset};

/// A flag value that is a member of every participant type in `L`.
pub struct SharedBitfield<L: ParticipantList> {
    inner: SharedEnum<L>,
}

impl<L: ParticipantList> SharedBitfield<L> {
    /// Number of participant types.
    pub const PARTICIPANTS: usize = L::LEN;

    /// Builds a shared bitfield from a value of one of the participants.
    pub fn new<U, I>(value: U) -> Self
    where
        U: MemberOf<L, I> + Participant<Repr = L::Repr>,
    {
        Self {
            inner: SharedEnum::new(value),
        }
    }

    /// Builds a shared bitfield from a raw bit pattern, with no checks.
    pub const fn from_raw(raw: L::Repr) -> Self {
        Self {
            inner: SharedEnum::from_raw(raw),
        }
    }

    /// The bitfield with no bit set.
    pub const fn empty() -> Self {
        Self::from_raw(<L::Repr as Repr>::ZERO)
    }

    /// Builds a shared bitfield from a raw bit pattern every participant accepts.
    pub fn try_from_raw(raw: L::Repr) -> Result<Self> {
        SharedEnum::try_from_raw(raw).map(Self::from)
    }

    /// The underlying bit pattern.
    #[inline]
    pub fn raw(self) -> L::Repr {
        self.inner.raw()
    }

    /// Converts into participant `T`.
    pub fn get<T, I>(self) -> Result<T>
    where
        T: MemberOf<L, I> + Participant<Repr = L::Repr>,
    {
        self.inner.get()
    }

    /// Checks that every participant accepts the stored bit pattern.
    pub fn validate(self) -> Result<()> {
        self.inner.validate()
    }

    /// Re-tags the value with a subset `M` of its participants.
    pub fn narrow<M>(self) -> SharedBitfield<M>
    where
        M: ParticipantList<Repr = L::Repr> + Subset<L, Output = True>,
    {
        SharedBitfield::from_raw(self.raw())
    }

    /// Whether no bit is set.
    pub fn is_empty(self) -> bool {
        self.raw() == <L::Repr as Repr>::ZERO
    }

    /// Whether every bit set in `other` is also set in `self`.
    pub fn contains<R>(self, other: SharedBitfield<R>) -> bool
    where
        L: Overlaps<R>,
        R: ParticipantList<Repr = L::Repr>,
    {
        self.raw() & other.raw() == other.raw()
    }

    /// Whether `self` and `other` have a set bit in common.
    pub fn intersects<R>(self, other: SharedBitfield<R>) -> bool
    where
        L: Overlaps<R>,
        R: ParticipantList<Repr = L::Repr>,
    {
        self.raw() & other.raw() != <L::Repr as Repr>::ZERO
    }

    /// Names of the participant types, in list order.
    pub fn participant_names() -> Vec<&'static str> {
        SharedEnum::<L>::participant_names()
    }

    /// The same value as a [`SharedEnum`].
    pub fn as_enum(self) -> SharedEnum<L> {
        self.inner
    }
}

macro_rules! bitfield_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<L, R> $Op<SharedBitfield<R>> for SharedBitfield<L>
        where
            L: Overlaps<R>,
            R: ParticipantList<Repr = L::Repr>,
        {
            type Output = SharedBitfield<Common<L, R>>;

            #[inline]
            fn $op(self, rhs: SharedBitfield<R>) -> Self::Output {
                SharedBitfield::from_raw(self.raw() $sym rhs.raw())
            }
        }

        impl<L, R> $OpAssign<SharedBitfield<R>> for SharedBitfield<L>
        where
            L: Overlaps<R>,
            R: ParticipantList<Repr = L::Repr>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: SharedBitfield<R>) {
                self.inner = SharedEnum::from_raw(self.raw() $sym rhs.raw());
            }
        }
    };
}

bitfield_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
bitfield_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
bitfield_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<L: ParticipantList> Clone for SharedBitfield<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ParticipantList> Copy for SharedBitfield<L> {}

impl<L: ParticipantList> Default for SharedBitfield<L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L, R> PartialEq<SharedBitfield<R>> for SharedBitfield<L>
where
    L: Overlaps<R>,
    R: ParticipantList<Repr = L::Repr>,
{
    fn eq(&self, other: &SharedBitfield<R>) -> bool {
        self.raw() == other.raw()
    }
}

impl<L: Overlaps<L>> Eq for SharedBitfield<L> {}

impl<L, R> PartialEq<SharedEnum<R>> for SharedBitfield<L>
where
    L: Overlaps<R>,
    R: ParticipantList<Repr = L::Repr>,
{
    fn eq(&self, other: &SharedEnum<R>) -> bool {
        self.raw() == other.raw()
    }
}

impl<L, R> PartialEq<SharedBitfield<R>> for SharedEnum<L>
where
    L: Overlaps<R>,
    R: ParticipantList<Repr = L::Repr>,
{
    fn eq(&self, other: &SharedBitfield<R>) -> bool {
        self.raw() == other.raw()
    }
}

impl<L: ParticipantList> Hash for SharedBitfield<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<L: ParticipantList> fmt::Debug for SharedBitfield<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBitfield")
            .field("value", &self.raw())
            .field("participants", &L::names())
            .finish()
    }
}

impl<L: ParticipantList> From<SharedEnum<L>> for SharedBitfield<L> {
    fn from(inner: SharedEnum<L>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Alpha, Beta, Gamma};

    type Ab = crate::Participants![Alpha, Beta];
    type Bg = crate::Participants![Beta, Gamma];
    type B = crate::Participants![Beta];

    #[test]
    fn operators_narrow_to_intersection() {
        let lhs = SharedBitfield::<Ab>::new(Alpha(1));
        let rhs = SharedBitfield::<Bg>::new(Beta(2));

        let or: SharedBitfield<B> = lhs | rhs;
        let and: SharedBitfield<B> = lhs & rhs;
        let xor: SharedBitfield<B> = lhs ^ rhs;

        assert_eq!(or.raw(), 3);
        assert_eq!(and.raw(), 0);
        assert_eq!(xor.raw(), 3);
    }

    #[test]
    fn compound_assignment_keeps_type() {
        let mut lhs = SharedBitfield::<Ab>::new(Alpha(1));
        lhs |= SharedBitfield::<Bg>::new(Beta(2));
        let kept: SharedBitfield<Ab> = lhs;
        assert_eq!(kept.raw(), 3);

        lhs &= SharedBitfield::<Bg>::new(Gamma(2));
        assert_eq!(lhs.raw(), 2);

        lhs ^= SharedBitfield::<B>::new(Beta(3));
        assert_eq!(lhs.raw(), 1);
    }

    #[test]
    fn flag_helpers() {
        let flags = SharedBitfield::<Bg>::new(Gamma(0b110));
        assert!(flags.contains(SharedBitfield::<B>::new(Beta(0b010))));
        assert!(!flags.contains(SharedBitfield::<B>::new(Beta(0b011))));
        assert!(flags.intersects(SharedBitfield::<B>::new(Beta(0b011))));
        assert!(!flags.intersects(SharedBitfield::<B>::new(Beta(0b001))));
        assert!(SharedBitfield::<Bg>::empty().is_empty());
        assert_eq!(SharedBitfield::<Bg>::default(), SharedBitfield::<Bg>::empty());
    }

    #[test]
    fn enum_round_trip_keeps_bits() {
        let bitfield = SharedBitfield::<Bg>::new(Gamma(5));
        let shared: SharedEnum<Bg> = bitfield.as_enum();
        assert_eq!(shared, bitfield);
        assert_eq!(bitfield, shared.into_bitfield());
    }
}
