//! Shared Enum
//!
//! A [`SharedEnum<L>`] is one underlying integer that is, at the same time,
//! a value of every participant type in `L`. It is built from a value of
//! any participant and converts back into any participant.
//!
//! ```
//! use trak_core::{Participant, Participants, SharedEnum};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! #[repr(u32)]
//! enum Disk { Read = 1, Write = 2 }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! #[repr(u32)]
//! enum Net { Recv = 1, Send = 2 }
//!
//! let access = SharedEnum::<Participants![Disk, Net]>::new(Disk::Write);
//! assert_eq!(access.get::<Net, _>().unwrap(), Net::Send);
//! assert_eq!(access, Net::Send);
//! ```
//!
//! Building from a type outside the list does not compile:
//!
//! ```compile_fail
//! use trak_core::{Participant, Participants, SharedEnum};
//!
//! #[derive(Clone, Copy, Participant)]
//! #[repr(u32)]
//! enum Disk { Read = 1 }
//!
//! #[derive(Clone, Copy, Participant)]
//! #[repr(u32)]
//! enum Gpu { Draw = 1 }
//!
//! let _ = SharedEnum::<Participants![Disk]>::new(Gpu::Draw);
//! ```
//!
//! Neither does naming a shared value over the empty list:
//!
//! ```compile_fail
//! use trak_core::type_set::Nil;
//! use trak_core::SharedEnum;
//!
//! let _ = SharedEnum::<Nil>::from_raw(0);
//! ```
//!
//! Shared values are plain `Copy` integers. A single instance mutated from
//! several threads is not internally synchronized, exactly like the
//! integer it wraps.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::errors::{Result, SharedEnumError};
use crate::logic::True;
use crate::participant::{Participant, Repr};
use crate::shared_bitfield::SharedBitfield;
use crate::type_set::{MemberOf, Overlaps, ParticipantList, Subset};

/// A value that is a member of every participant type in `L`.
pub struct SharedEnum<L: ParticipantList> {
    value: L::Repr,
    participants: PhantomData<fn() -> L>,
}

impl<L: ParticipantList> SharedEnum<L> {
    /// Number of participant types.
    pub const PARTICIPANTS: usize = L::LEN;

    /// Builds a shared value from a value of one of the participants.
    pub fn new<U, I>(value: U) -> Self
    where
        U: MemberOf<L, I> + Participant<Repr = L::Repr>,
    {
        Self::from_raw(value.to_repr())
    }

    /// Builds a shared value from a raw bit pattern, with no checks.
    pub const fn from_raw(raw: L::Repr) -> Self {
        Self {
            value: raw,
            participants: PhantomData,
        }
    }

    /// Builds a shared value from a raw bit pattern every participant accepts.
    pub fn try_from_raw(raw: L::Repr) -> Result<Self> {
        match L::first_rejecting(raw) {
            Some(participant) => Err(rejected(participant, raw)),
            None => Ok(Self::from_raw(raw)),
        }
    }

    /// The underlying bit pattern.
    #[inline]
    pub fn raw(self) -> L::Repr {
        self.value
    }

    /// Converts into participant `T`.
    ///
    /// Fails when the stored bit pattern is not a value of `T`, which can
    /// only happen for participants with gaps in their value range (most
    /// fieldless enums) after `from_raw` or a bitwise combination.
    pub fn get<T, I>(self) -> Result<T>
    where
        T: MemberOf<L, I> + Participant<Repr = L::Repr>,
    {
        T::from_repr(self.value).ok_or_else(|| rejected(T::NAME, self.value))
    }

    /// Checks that every participant accepts the stored bit pattern.
    pub fn validate(self) -> Result<()> {
        match L::first_rejecting(self.value) {
            Some(participant) => Err(rejected(participant, self.value)),
            None => Ok(()),
        }
    }

    /// Re-tags the value with a subset `M` of its participants.
    pub fn narrow<M>(self) -> SharedEnum<M>
    where
        M: ParticipantList<Repr = L::Repr> + Subset<L, Output = True>,
    {
        SharedEnum::from_raw(self.value)
    }

    /// Names of the participant types, in list order.
    pub fn participant_names() -> Vec<&'static str> {
        L::names()
    }

    /// The same value as a [`SharedBitfield`].
    pub fn into_bitfield(self) -> SharedBitfield<L> {
        SharedBitfield::from(self)
    }
}

pub(crate) fn rejected<R: Repr>(participant: &'static str, raw: R) -> SharedEnumError {
    #[cfg(feature = "tracing")]
    tracing::debug!(participant, raw = ?raw, "bit pattern rejected by participant");
    SharedEnumError::invalid_bit_pattern(participant, raw.widen())
}

impl<L: ParticipantList> Clone for SharedEnum<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ParticipantList> Copy for SharedEnum<L> {}

impl<L, R> PartialEq<SharedEnum<R>> for SharedEnum<L>
where
    L: Overlaps<R>,
    R: ParticipantList<Repr = L::Repr>,
{
    fn eq(&self, other: &SharedEnum<R>) -> bool {
        self.value == other.value
    }
}

impl<L: Overlaps<L>> Eq for SharedEnum<L> {}

impl<L: ParticipantList> Hash for SharedEnum<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<L: ParticipantList> fmt::Debug for SharedEnum<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedEnum")
            .field("value", &self.value)
            .field("participants", &L::names())
            .finish()
    }
}

impl<L: ParticipantList> From<SharedBitfield<L>> for SharedEnum<L> {
    fn from(bitfield: SharedBitfield<L>) -> Self {
        Self::from_raw(bitfield.raw())
    }
}
