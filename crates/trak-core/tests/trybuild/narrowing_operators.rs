use trak_core::{Participant, Participants, SharedBitfield};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
struct Disk(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
struct Net(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
struct Gpu(u32);

fn main() {
    let disk = SharedBitfield::<Participants![Disk, Net]>::new(Disk(0b01));
    let gpu = SharedBitfield::<Participants![Gpu, Net]>::new(Gpu(0b10));

    let or: SharedBitfield<Participants![Net]> = disk | gpu;
    let and: SharedBitfield<Participants![Net]> = disk & gpu;
    let xor: SharedBitfield<Participants![Net]> = disk ^ gpu;

    let mut kept = disk;
    kept |= gpu;
    kept &= or;
    kept ^= and;
    let _: SharedBitfield<Participants![Disk, Net]> = kept;

    assert_eq!(xor.get::<Net, _>(), Ok(Net(0b11)));
}
