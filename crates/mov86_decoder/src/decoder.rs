use crate::decode_instruction;
use crate::errors::Result;
use mov86_instruction::Instruction;
use tracing::debug;

/// An instruction along with where it was found in the stream and the bytes it was decoded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub offset: usize,
    pub bytes: Vec<u8>,
    pub instruction: Instruction,
}

/// Keeps track of the position in the stream and the bytes of the instruction being decoded.
struct Tracked<I> {
    inner: I,
    position: usize,
    consumed: Vec<u8>,
}

impl<I: Iterator<Item = u8>> Iterator for Tracked<I> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.inner.next()?;
        self.position += 1;
        self.consumed.push(byte);
        Some(byte)
    }
}

/// Decodes instructions one after the other from a stream of bytes.
///
/// The iterator ends when the stream is exhausted between instructions. When an instruction
/// could not be decoded, the error is returned and the iterator ends, because there is no way to
/// find the start of the next instruction.
pub struct Decoder<I> {
    source: Tracked<I>,
    instruction_offset: usize,
    failed: bool,
}

impl<I: Iterator<Item = u8>> Decoder<I> {
    pub fn new(source: impl IntoIterator<Item = u8, IntoIter = I>) -> Self {
        Self {
            source: Tracked {
                inner: source.into_iter(),
                position: 0,
                consumed: Vec::with_capacity(6),
            },
            instruction_offset: 0,
            failed: false,
        }
    }

    /// The offset of the instruction that was decoded (or failed to decode) last.
    pub fn instruction_offset(&self) -> usize {
        self.instruction_offset
    }
}

impl<I: Iterator<Item = u8>> Iterator for Decoder<I> {
    type Item = Result<Decoded>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.instruction_offset = self.source.position;
        self.source.consumed.clear();

        match decode_instruction(&mut self.source) {
            Ok(Some(instruction)) => {
                debug!(
                    "{:04x}: {} ({} bytes)",
                    self.instruction_offset,
                    instruction,
                    self.source.consumed.len()
                );

                Some(Ok(Decoded {
                    offset: self.instruction_offset,
                    bytes: self.source.consumed.clone(),
                    instruction,
                }))
            }

            Ok(None) => None,

            Err(err) => {
                debug!(
                    "Could not decode instruction at {:04x}: {}",
                    self.instruction_offset, err
                );
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    #[test]
    fn offsets_and_bytes() {
        let decoded: Vec<_> = Decoder::new([0x89, 0xD9, 0x8A, 0x40, 0x04, 0xB8, 0x01, 0x00])
            .collect::<Result<_>>()
            .unwrap();

        let summary: Vec<_> = decoded
            .iter()
            .map(|d| (d.offset, d.bytes.clone(), d.instruction.to_string()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (0, vec![0x89, 0xD9], "mov cx, bx".to_string()),
                (2, vec![0x8A, 0x40, 0x04], "mov al, [bx + si + 4]".to_string()),
                (5, vec![0xB8, 0x01, 0x00], "mov ax, 1".to_string()),
            ]
        );
    }

    #[test]
    fn stops_after_first_error() {
        let mut decoder = Decoder::new([0xB0, 0x01, 0x0F, 0xB0, 0x02]);

        assert!(matches!(decoder.next(), Some(Ok(_))));
        assert_eq!(
            decoder.next(),
            Some(Err(DecodeError::UnrecognizedOpcode(0x0F)))
        );
        assert_eq!(decoder.instruction_offset(), 2);
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn truncated_tail() {
        let results: Vec<_> = Decoder::new([0x89, 0xD9, 0x89]).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(DecodeError::TruncatedInstruction));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn instruction_events_are_not_compiled_out() {
        assert!(tracing::Level::DEBUG <= tracing::level_filters::STATIC_MAX_LEVEL);
    }

    #[test]
    fn decoding_twice_gives_the_same_result() {
        let bytes = [0x8B, 0x1E, 0x82, 0x0D, 0x88, 0x6E, 0x00, 0xB5, 0xF4];

        let first: Vec<_> = Decoder::new(bytes.iter().copied()).collect();
        let second: Vec<_> = Decoder::new(bytes.iter().copied()).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
