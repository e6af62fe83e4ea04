//! Decodes the `mov` subset of the 8086 instruction set from a stream of bytes.
//!
//! ```rust
//! use mov86_decoder::decode_instruction;
//!
//! let mut it = [0x89, 0xD9].into_iter();
//! let instruction = decode_instruction(&mut it).unwrap().unwrap();
//! assert_eq!(instruction.to_string(), "mov cx, bx");
//! ```

mod decode;
mod decoder;
mod errors;
mod listing;
mod mrrm;
mod operations;
mod traits;

pub use decode::{classify, decode_instruction, DecodeFn, OpCodeFamily, OpCodePattern};
pub use decoder::{Decoded, Decoder};
pub use errors::{DecodeError, Result};
pub use listing::{write_listing, ListingError, ListingOptions, HEADER};
pub use mrrm::{ModRegRM, RegisterOrMemory};

use mov86_instruction::{AddressingMode, Register};

/// Converts the 3-bit encoding found in op codes and mod-reg-r/m bytes. Only the lowest 3 bits
/// are considered.
pub(crate) trait FromEncoding {
    fn from_encoding(encoding: u8) -> Self;
}

impl FromEncoding for Register {
    fn from_encoding(encoding: u8) -> Self {
        Register::ALL[(encoding & 0b111) as usize]
    }
}

impl FromEncoding for AddressingMode {
    fn from_encoding(encoding: u8) -> Self {
        AddressingMode::ALL[(encoding & 0b111) as usize]
    }
}
