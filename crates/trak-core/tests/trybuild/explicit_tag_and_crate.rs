use trak_core as trak;
use trak::{Participant, Participants, SharedBitfield};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[participant(tag = 0x51, crate = "trak")]
struct Read(u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[participant(tag = 0x52, crate = "trak")]
struct Write(u16);

fn main() {
    let read = SharedBitfield::<Participants![Read, Write]>::new(Read(1));
    let write = SharedBitfield::<Participants![Write]>::new(Write(2));
    let both: SharedBitfield<Participants![Write]> = read | write;
    assert_eq!(both, Write(3));
}
