//! Decoding of x86 page-table-entry flag bits.

pub mod pte_flags;

pub use pte_flags::{decode, DecodedFlags, PteFlag, DECODED_MASK};
