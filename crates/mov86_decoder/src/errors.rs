use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The leading byte does not match any known op code pattern.
    #[error("Unrecognized op code ({0:#04x})")]
    UnrecognizedOpcode(u8),

    /// The stream ended before all the bytes of the instruction could be read.
    #[error("Stream ended in the middle of an instruction")]
    TruncatedInstruction,
}

pub type Result<T> = std::result::Result<T, DecodeError>;
