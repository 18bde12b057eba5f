//! trak core - values shared across several enum types
//!
//! Systems often grow families of related enums (permission flags reused by
//! several subsystems, modes mirrored across layers) and need one value that
//! can be handed to any of them. A [`SharedEnum<L>`] is such a value: one
//! underlying integer that is a member of every participant type in the
//! list `L`. A [`SharedBitfield<L>`] adds the bitwise operators, typed by
//! the intersection of the operands' participant lists.
//!
//! # Architecture Layers
//!
//! ## Type-Set Algebra
//! - [`logic`]: type-level booleans (`True`, `False`, `And`, `Or`, `Select`)
//! - [`tag`]: type-level participant identities with decidable equality
//! - [`type_set`]: participant lists, membership, ordered intersection,
//!   subset and set equality
//!
//! ## Shared Values
//! - [`shared_enum`]: construction gated on membership, conversion to any
//!   participant, equality by underlying value
//! - [`shared_bitfield`]: `|`, `&`, `^` and their compound forms, available
//!   only when the operands share a participant
//!
//! ## Compile-Time Contracts
//! - Building from a non-participant does not compile
//! - Combining two bitfields with disjoint participant lists does not compile
//! - A shared value over the empty list cannot be named
//!
//! Everything above is resolved by the trait solver. At run time a shared
//! value is its integer and every operation is one integer instruction.
//!
//! ```
//! use trak_core::{Participant, Participants, SharedBitfield};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! #[repr(u32)]
//! enum Storage { Read = 1, Write = 2 }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
//! #[repr(u32)]
//! enum Network { Read = 1, Write = 2 }
//!
//! let read = SharedBitfield::<Participants![Storage, Network]>::new(Storage::Read);
//! let write = SharedBitfield::<Participants![Network]>::new(Network::Write);
//! let both = read | write;
//! assert_eq!(both.raw(), 3);
//! assert_eq!(read, Network::Read);
//! ```

#![forbid(unsafe_code)]

/// Type-level booleans
pub mod logic;

/// Participant type tags
pub mod tag;

/// Participant and underlying-integer traits
pub mod participant;

/// Participant lists and the set algebra over them
pub mod type_set;

/// Values shared across several enum types
pub mod shared_enum;

/// Shared values with bitwise operators
pub mod shared_bitfield;

/// Unified error handling
pub mod errors;

#[cfg(test)]
mod test_utils;

// === Public API Re-exports ===

pub use errors::{Result, SharedEnumError};
pub use participant::{Participant, Repr};
pub use shared_bitfield::SharedBitfield;
pub use shared_enum::SharedEnum;
pub use type_set::{
    is_member, is_subset, set_eq, Common, Contains, Intersect, Intersection, MemberOf, Overlaps,
    ParticipantList, Subset, TypeList,
};

#[cfg(feature = "derive")]
pub use trak_macros::Participant;
