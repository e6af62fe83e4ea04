use crate::{DecodeError, Decoded, Decoder};
use std::io::Write;
use thiserror::Error;

/// Emitted once at the start of every listing, so the output can be assembled again.
pub const HEADER: &str = "bits 16";

#[derive(Clone, Copy, Debug, Default)]
pub struct ListingOptions {
    /// Append the offset and the raw bytes of each instruction as a comment.
    pub annotate: bool,
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Could not decode instruction at offset {offset:#06x}: {source}")]
    Decode {
        offset: usize,
        #[source]
        source: DecodeError,
    },

    #[error("Could not write listing: {0}")]
    Io(#[from] std::io::Error),
}

fn write_line(
    out: &mut impl Write,
    decoded: &Decoded,
    options: ListingOptions,
) -> std::io::Result<()> {
    if !options.annotate {
        return writeln!(out, "{}", decoded.instruction);
    }

    let bytes = decoded
        .bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        out,
        "{:<24}; {:04x}: {}",
        decoded.instruction.to_string(),
        decoded.offset,
        bytes
    )
}

/// Write the [HEADER] followed by one line per instruction decoded from `source`.
///
/// Returns the number of instructions written. On a decode error, every instruction before the
/// failing one has already been written to `out`.
pub fn write_listing(
    source: impl IntoIterator<Item = u8>,
    out: &mut impl Write,
    options: ListingOptions,
) -> Result<usize, ListingError> {
    writeln!(out, "{}", HEADER)?;

    let mut decoder = Decoder::new(source);
    let mut count = 0;

    while let Some(result) = decoder.next() {
        let decoded = result.map_err(|source| ListingError::Decode {
            offset: decoder.instruction_offset(),
            source,
        })?;

        write_line(out, &decoded, options)?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc as asm;
    use pretty_assertions::assert_eq;

    fn listing(bytes: &[u8], options: ListingOptions) -> (String, Result<usize, ListingError>) {
        let mut out = Vec::new();
        let result = write_listing(bytes.iter().copied(), &mut out, options);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn empty_listing_has_header() {
        let (text, result) = listing(&[], ListingOptions::default());
        assert_eq!(text, "bits 16\n");
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn more_movs() {
        let (text, result) = listing(
            &[
                0x89, 0xDE, // mov si, bx
                0x88, 0xC6, // mov dh, al
                0xB1, 0x0C, // mov cl, 12
                0xB5, 0xF4, // mov ch, 244
                0xB9, 0x0C, 0x00, // mov cx, 12
                0xB9, 0xF4, 0xFF, // mov cx, 65524
                0xBA, 0x6C, 0x0F, // mov dx, 3948
                0xBA, 0x94, 0xF0, // mov dx, 61588
                0x8A, 0x00, // mov al, [bx + si]
                0x8B, 0x1B, // mov bx, [bp + di]
                0x8B, 0x56, 0x00, // mov dx, [bp + 0]
                0x8A, 0x60, 0x04, // mov ah, [bx + si + 4]
                0x8A, 0x80, 0x87, 0x13, // mov al, [bx + si + 4999]
                0x89, 0x09, // mov [bx + di], cx
                0x88, 0x0A, // mov [bp + si], cl
                0x88, 0x6E, 0x00, // mov [bp + 0], ch
            ],
            ListingOptions::default(),
        );

        assert_eq!(
            text,
            asm! {"
                bits 16
                mov si, bx
                mov dh, al
                mov cl, 12
                mov ch, 244
                mov cx, 12
                mov cx, 65524
                mov dx, 3948
                mov dx, 61588
                mov al, [bx + si]
                mov bx, [bp + di]
                mov dx, [bp + 0]
                mov ah, [bx + si + 4]
                mov al, [bx + si + 4999]
                mov [bx + di], cx
                mov [bp + si], cl
                mov [bp + 0], ch
            "}
        );
        assert_eq!(result.unwrap(), 16);
    }

    #[test]
    fn annotated() {
        let options = ListingOptions { annotate: true };
        let (text, _) = listing(&[0x89, 0xD9, 0x8B, 0x1E, 0x82, 0x0D], options);

        assert_eq!(
            text,
            asm! {"
                bits 16
                mov cx, bx              ; 0000: 89 d9
                mov bx, [3458]          ; 0002: 8b 1e 82 0d
            "}
        );
    }

    #[test]
    fn stops_at_first_error() {
        let (text, result) =
            listing(&[0x89, 0xD9, 0xB0, 0x01, 0x8B], ListingOptions::default());

        assert_eq!(
            text,
            asm! {"
                bits 16
                mov cx, bx
                mov al, 1
            "}
        );
        assert!(matches!(
            result,
            Err(ListingError::Decode {
                offset: 4,
                source: DecodeError::TruncatedInstruction
            })
        ));
    }

    #[test]
    fn unrecognized_op_code_is_reported_with_offset() {
        let (_, result) = listing(&[0xB0, 0x01, 0xC3], ListingOptions::default());
        let err = result.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Could not decode instruction at offset 0x0002: Unrecognized op code (0xc3)"
        );
    }
}
