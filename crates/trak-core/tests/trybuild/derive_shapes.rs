use trak_core::{Participant, Participants, SharedEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[repr(u8)]
enum Level {
    Low = 1,
    High = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
struct Raw(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
struct Named {
    bits: u8,
}

fn main() {
    let value = SharedEnum::<Participants![Level, Raw, Named]>::new(Level::High);
    assert_eq!(value.get::<Raw, _>(), Ok(Raw(8)));
    assert_eq!(value.get::<Named, _>(), Ok(Named { bits: 8 }));
    assert_eq!(value, Level::High);
    assert!(SharedEnum::<Participants![Level]>::try_from_raw(2).is_err());
}
