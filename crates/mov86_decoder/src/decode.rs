use crate::errors::Result;
use crate::operations::mov;
use crate::DecodeError;
use mov86_instruction::Instruction;

/// Decodes the rest of an instruction. Receives the op code byte that was already consumed and
/// the stream positioned right after it.
pub type DecodeFn = fn(u8, &mut dyn Iterator<Item = u8>) -> Result<Instruction>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpCodeFamily {
    /// `1 0 0 0 1 0 d w`
    MovRegisterOrMemoryToFromRegister,
    /// `1 0 1 1 w reg`
    MovImmediateToRegister,
}

/// An op code family is selected when `op_code & mask == pattern`.
pub struct OpCodePattern {
    pub mask: u8,
    pub pattern: u8,
    pub family: OpCodeFamily,
    pub decode: DecodeFn,
}

impl std::fmt::Debug for OpCodePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpCodePattern")
            .field("mask", &format_args!("{:#010b}", self.mask))
            .field("pattern", &format_args!("{:#010b}", self.pattern))
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl OpCodePattern {
    pub fn matches(&self, op_code: u8) -> bool {
        op_code & self.mask == self.pattern
    }
}

// Most specific mask first.
static OP_CODE_PATTERNS: [OpCodePattern; 2] = [
    OpCodePattern {
        mask: 0b1111_1100,
        pattern: 0b1000_1000,
        family: OpCodeFamily::MovRegisterOrMemoryToFromRegister,
        decode: mov::register_or_memory_to_from_register,
    },
    OpCodePattern {
        mask: 0b1111_0000,
        pattern: 0b1011_0000,
        family: OpCodeFamily::MovImmediateToRegister,
        decode: mov::immediate_to_register,
    },
];

/// Find the pattern that applies to the given op code byte.
pub fn classify(op_code: u8) -> Option<&'static OpCodePattern> {
    OP_CODE_PATTERNS.iter().find(|p| p.matches(op_code))
}

/// Reads a single instruction from the stream.
///
/// Returns `Ok(None)` when the stream is exhausted before an op code byte could be read, which
/// is the normal way for a stream to end. After an error the position of the stream is
/// unspecified and decoding should not continue.
pub fn decode_instruction<I>(it: &mut I) -> Result<Option<Instruction>>
where
    I: Iterator<Item = u8>,
{
    let Some(op_code) = it.next() else {
        return Ok(None);
    };

    let Some(pattern) = classify(op_code) else {
        return Err(DecodeError::UnrecognizedOpcode(op_code));
    };

    (pattern.decode)(op_code, it).map(Some)
}

#[cfg(test)]
#[path = "_tests/decode.rs"]
mod tests;
