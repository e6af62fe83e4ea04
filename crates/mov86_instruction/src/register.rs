use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSize {
    Byte,
    Word,
}

/// The 3-bit register encoding used by the `reg` and `r/m` fields. The actual register depends
/// on the [OperandSize] it is used with, e.g. `AlAx` is `al` for bytes and `ax` for words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    AlAx = 0b000,
    ClCx = 0b001,
    DlDx = 0b010,
    BlBx = 0b011,
    AhSp = 0b100,
    ChBp = 0b101,
    DhSi = 0b110,
    BhDi = 0b111,
}

impl Register {
    /// All registers in encoding order.
    pub const ALL: [Register; 8] = [
        Register::AlAx,
        Register::ClCx,
        Register::DlDx,
        Register::BlBx,
        Register::AhSp,
        Register::ChBp,
        Register::DhSi,
        Register::BhDi,
    ];

    pub fn encoding(self) -> u8 {
        self as u8
    }
}

const BYTE_REGISTER_NAMES: [&str; 8] = ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"];
const WORD_REGISTER_NAMES: [&str; 8] = ["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizedRegister(pub Register, pub OperandSize);

impl SizedRegister {
    pub fn name(&self) -> &'static str {
        let index = self.0.encoding() as usize;
        match self.1 {
            OperandSize::Byte => BYTE_REGISTER_NAMES[index],
            OperandSize::Word => WORD_REGISTER_NAMES[index],
        }
    }
}

impl Display for SizedRegister {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
