//! Error type for trak core
//!
//! Membership and overlap are enforced by the compiler, so the only thing
//! that can go wrong at run time is a checked conversion meeting a bit
//! pattern that some participant cannot represent.

/// Error returned by the checked conversions of shared values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SharedEnumError {
    /// The stored bit pattern is not a value of a participant
    #[error("bit pattern {value} is not a valid `{participant}`")]
    InvalidBitPattern {
        /// Name of the participant type that rejected the value
        participant: &'static str,
        /// The rejected bit pattern, widened
        value: i128,
    },
}

impl SharedEnumError {
    /// Create an invalid bit pattern error
    pub fn invalid_bit_pattern(participant: &'static str, value: i128) -> Self {
        Self::InvalidBitPattern { participant, value }
    }

    /// Name of the participant type that rejected the value
    pub fn participant(&self) -> &'static str {
        match self {
            Self::InvalidBitPattern { participant, .. } => participant,
        }
    }

    /// The rejected bit pattern
    pub fn value(&self) -> i128 {
        match self {
            Self::InvalidBitPattern { value, .. } => *value,
        }
    }
}

/// Standard Result type for checked conversions
pub type Result<T> = std::result::Result<T, SharedEnumError>;
