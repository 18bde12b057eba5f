//! Hand-written participants for unit tests
//!
//! These skip the derive on purpose so the algebra is tested on its own.
//! Tags are single hex digits, which is enough for a handful of types.

use crate::participant::Participant;
use crate::tag::{TagDigit, TagEnd, X1, X2, X3, X4};

macro_rules! test_participant {
    ($name:ident, $digit:ty) => {
        test_participant!($name, $digit, |_repr: u32| true);
    };
    ($name:ident, $digit:ty, $max:literal) => {
        test_participant!($name, $digit, |repr: u32| repr <= $max);
    };
    ($name:ident, $digit:ty, $accepts:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(crate) struct $name(pub(crate) u32);

        impl Participant for $name {
            type Repr = u32;
            type Tag = TagDigit<$digit, TagEnd>;
            const NAME: &'static str = stringify!($name);

            fn to_repr(self) -> u32 {
                self.0
            }

            fn from_repr(repr: u32) -> Option<Self> {
                ($accepts)(repr).then_some(Self(repr))
            }
        }
    };
}

test_participant!(Alpha, X1, 2);
test_participant!(Beta, X2, 3);
test_participant!(Gamma, X3);
test_participant!(Delta, X4);
