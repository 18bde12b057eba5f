//! trak Participant derive
//!
//! This crate provides `#[derive(Participant)]`, which lets a concrete type
//! take part in `trak_core` shared enums and shared bitfields.
//!
//! Two shapes are supported:
//!
//! - fieldless enums with an integer `#[repr(..)]`; converting a bit pattern
//!   back into the enum is checked against the declared variants
//! - structs with exactly one field, the integer itself (flag sets); every
//!   bit pattern converts
//!
//! # Example
//!
//! ```ignore
//! use trak_core::Participant;
//!
//! #[derive(Clone, Copy, Participant)]
//! #[repr(u32)]
//! enum Mode {
//!     Idle = 0,
//!     Busy = 1,
//! }
//!
//! #[derive(Clone, Copy, Participant)]
//! #[participant(tag = 0x5eed_0001)]
//! struct Perms(u32);
//! ```
//!
//! # Attributes
//!
//! - `#[participant(tag = <int>)]` - fixes the type tag instead of deriving
//!   it from the module path, type name and shape
//! - `#[participant(crate = "path")]` - path to `trak_core` when it is not a
//!   direct dependency under that name

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod participant;
mod tag;

/// Derives `trak_core::Participant`, plus `PartialEq` in both directions
/// against every shared value whose participant list contains the type.
#[proc_macro_derive(Participant, attributes(participant))]
pub fn derive_participant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match participant::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
