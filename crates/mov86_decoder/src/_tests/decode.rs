use super::*;
use pretty_assertions::assert_eq;

fn decode(bytes: &[u8]) -> Result<Option<Instruction>> {
    let mut it = bytes.iter().copied();
    let result = decode_instruction(&mut it);
    if result.is_ok() {
        assert_eq!(it.next(), None, "instruction did not consume all bytes");
    }
    result
}

fn text(bytes: &[u8]) -> String {
    match decode(bytes) {
        Ok(Some(instruction)) => instruction.to_string(),
        Ok(None) => panic!("no instruction decoded from {:02x?}", bytes),
        Err(err) => panic!("could not decode {:02x?}: {}", bytes, err),
    }
}

const BYTE_REGISTERS: [&str; 8] = ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"];
const WORD_REGISTERS: [&str; 8] = ["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"];

#[test]
fn empty_stream() {
    assert_eq!(decode(&[]), Ok(None));
}

#[test]
fn classify_op_codes() {
    for op_code in 0x88..=0x8B {
        assert_eq!(
            classify(op_code).map(|p| p.family),
            Some(OpCodeFamily::MovRegisterOrMemoryToFromRegister)
        );
    }
    for op_code in 0xB0..=0xBF {
        assert_eq!(
            classify(op_code).map(|p| p.family),
            Some(OpCodeFamily::MovImmediateToRegister)
        );
    }

    let recognized = (0..=u8::MAX).filter(|b| classify(*b).is_some()).count();
    assert_eq!(recognized, 4 + 16);
}

#[test]
fn patterns_do_not_overlap() {
    for op_code in 0..=u8::MAX {
        let matches = OP_CODE_PATTERNS
            .iter()
            .filter(|p| p.matches(op_code))
            .count();
        assert!(matches <= 1, "{:#04x} matches {} patterns", op_code, matches);
    }
}

#[test]
fn patterns_ordered_most_specific_first() {
    let specificity: Vec<_> = OP_CODE_PATTERNS
        .iter()
        .map(|p| p.mask.count_ones())
        .collect();
    let mut sorted = specificity.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(specificity, sorted);
}

#[test]
fn unrecognized_op_code() {
    assert_eq!(decode(&[0x90]), Err(DecodeError::UnrecognizedOpcode(0x90)));
    assert_eq!(
        decode(&[0x8C, 0xD8]),
        Err(DecodeError::UnrecognizedOpcode(0x8C))
    );
    assert_eq!(
        decode(&[0xC6, 0x03, 0x07]),
        Err(DecodeError::UnrecognizedOpcode(0xC6))
    );
}

#[test]
fn register_to_register() {
    assert_eq!(text(&[0x89, 0xD9]), "mov cx, bx");
    assert_eq!(text(&[0x88, 0xE5]), "mov ch, ah");
    assert_eq!(text(&[0x89, 0xDE]), "mov si, bx");
    assert_eq!(text(&[0x88, 0xC6]), "mov dh, al");
    assert_eq!(text(&[0x8A, 0xC6]), "mov al, dh");
    assert_eq!(text(&[0x89, 0xC5]), "mov bp, ax");
}

#[test]
fn register_tables() {
    for reg in 0..8_u8 {
        // d = 1, so the reg field is the destination.
        assert_eq!(
            text(&[0x8A, 0b11_000_000 | reg << 3]),
            format!("mov {}, al", BYTE_REGISTERS[reg as usize])
        );
        assert_eq!(
            text(&[0x8B, 0b11_000_000 | reg << 3]),
            format!("mov {}, ax", WORD_REGISTERS[reg as usize])
        );
    }
}

#[test]
fn memory_without_displacement() {
    assert_eq!(text(&[0x8A, 0x00]), "mov al, [bx + si]");
    assert_eq!(text(&[0x8B, 0x1B]), "mov bx, [bp + di]");
    assert_eq!(text(&[0x89, 0x09]), "mov [bx + di], cx");
    assert_eq!(text(&[0x88, 0x0A]), "mov [bp + si], cl");
    assert_eq!(text(&[0x8B, 0x3F]), "mov di, [bx]");
}

#[test]
fn direct_address() {
    assert_eq!(text(&[0x8B, 0x1E, 0x00, 0x00]), "mov bx, [0]");
    assert_eq!(text(&[0x8B, 0x2E, 0x05, 0x00]), "mov bp, [5]");
    assert_eq!(text(&[0x8B, 0x1E, 0x82, 0x0D]), "mov bx, [3458]");
    assert_eq!(text(&[0x89, 0x0E, 0xFF, 0xFF]), "mov [65535], cx");
}

#[test]
fn byte_displacement() {
    assert_eq!(text(&[0x8A, 0x40, 0x04]), "mov al, [bx + si + 4]");
    assert_eq!(text(&[0x8A, 0x60, 0x04]), "mov ah, [bx + si + 4]");
    assert_eq!(text(&[0x8B, 0x41, 0xDB]), "mov ax, [bx + di - 37]");
}

#[test]
fn zero_displacement_is_rendered() {
    assert_eq!(text(&[0x8B, 0x56, 0x00]), "mov dx, [bp + 0]");
    assert_eq!(text(&[0x88, 0x6E, 0x00]), "mov [bp + 0], ch");
}

#[test]
fn word_displacement() {
    assert_eq!(text(&[0x8A, 0x80, 0x87, 0x13]), "mov al, [bx + si + 4999]");
    assert_eq!(text(&[0x89, 0x8C, 0xD4, 0xFE]), "mov [si - 300], cx");
}

#[test]
fn immediate_to_register() {
    assert_eq!(text(&[0xB8, 0x01, 0x00]), "mov ax, 1");
    assert_eq!(text(&[0xB0, 0xFF]), "mov al, 255");
    assert_eq!(text(&[0xB1, 0x0C]), "mov cl, 12");
    assert_eq!(text(&[0xB5, 0xF4]), "mov ch, 244");
    assert_eq!(text(&[0xB9, 0xF4, 0xFF]), "mov cx, 65524");
    assert_eq!(text(&[0xBA, 0x6C, 0x0F]), "mov dx, 3948");
}

#[test]
fn immediate_to_every_register() {
    for reg in 0..8_u8 {
        assert_eq!(
            text(&[0xB0 | reg, 0x07]),
            format!("mov {}, 7", BYTE_REGISTERS[reg as usize])
        );
        assert_eq!(
            text(&[0xB8 | reg, 0x00, 0x01]),
            format!("mov {}, 256", WORD_REGISTERS[reg as usize])
        );
    }
}

#[test]
fn truncated_instructions() {
    for bytes in [
        &[0x88][..],
        &[0x8B, 0x1E, 0x00],
        &[0x8B, 0x1E],
        &[0x8A, 0x40],
        &[0x8A, 0x80, 0x87],
        &[0xB0],
        &[0xB8, 0x01],
    ] {
        assert_eq!(
            decode(bytes),
            Err(DecodeError::TruncatedInstruction),
            "{:02x?}",
            bytes
        );
    }
}

#[test]
fn stream_is_positioned_after_instruction() {
    let bytes = [0x89, 0xD9, 0xB0, 0x05, 0x8B, 0x56, 0x00];
    let mut it = bytes.iter().copied();

    let mut lines = vec![];
    while let Some(instruction) = decode_instruction(&mut it).unwrap() {
        lines.push(instruction.to_string());
    }

    assert_eq!(lines, ["mov cx, bx", "mov al, 5", "mov dx, [bp + 0]"]);
}
