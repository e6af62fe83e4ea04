use crate::SizedRegister;
use std::fmt::{Display, Formatter};

/// The base register expression of an indirect memory operand, selected by the `r/m` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    BxSi,
    BxDi,
    BpSi,
    BpDi,
    Si,
    Di,
    Bp,
    Bx,
}

impl AddressingMode {
    /// All addressing modes in encoding order.
    pub const ALL: [AddressingMode; 8] = [
        AddressingMode::BxSi,
        AddressingMode::BxDi,
        AddressingMode::BpSi,
        AddressingMode::BpDi,
        AddressingMode::Si,
        AddressingMode::Di,
        AddressingMode::Bp,
        AddressingMode::Bx,
    ];
}

impl Display for AddressingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use AddressingMode::*;

        match self {
            BxSi => write!(f, "bx + si"),
            BxDi => write!(f, "bx + di"),
            BpSi => write!(f, "bp + si"),
            BpDi => write!(f, "bp + di"),
            Si => write!(f, "si"),
            Di => write!(f, "di"),
            Bp => write!(f, "bp"),
            Bx => write!(f, "bx"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Displacement {
    None,
    Byte(i8),
    Word(i16),
}

impl Display for Displacement {
    /// Writes the displacement as a term that follows the base expression, including the
    /// surrounding spaces. A zero displacement is still written.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let offset = match *self {
            Displacement::None => return Ok(()),
            Displacement::Byte(offset) => offset as i16,
            Displacement::Word(offset) => offset,
        };

        if offset < 0 {
            write!(f, " - {}", offset.unsigned_abs())
        } else {
            write!(f, " + {}", offset)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Immediate {
    Byte(u8),
    Word(u16),
}

impl Display for Immediate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Immediate::Byte(value) => write!(f, "{}", value),
            Immediate::Word(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// `[0x1234]`, an absolute address with no base register.
    Direct(u16),
    /// `[bx + si + 4]`, a base expression with an optional displacement.
    Indirect(AddressingMode, Displacement),
    Register(SizedRegister),
    Immediate(Immediate),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Direct(address) => write!(f, "[{}]", address),
            Operand::Indirect(addressing_mode, displacement) => {
                write!(f, "[{}{}]", addressing_mode, displacement)
            }
            Operand::Register(register) => register.fmt(f),
            Operand::Immediate(immediate) => immediate.fmt(f),
        }
    }
}

impl From<SizedRegister> for Operand {
    fn from(value: SizedRegister) -> Self {
        Operand::Register(value)
    }
}

impl From<Immediate> for Operand {
    fn from(value: Immediate) -> Self {
        Operand::Immediate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OperandSize, Register};

    #[test]
    fn displacement() {
        assert_eq!(Displacement::None.to_string(), "");
        assert_eq!(Displacement::Byte(0).to_string(), " + 0");
        assert_eq!(Displacement::Byte(-37).to_string(), " - 37");
        assert_eq!(Displacement::Byte(i8::MIN).to_string(), " - 128");
        assert_eq!(Displacement::Word(4999).to_string(), " + 4999");
        assert_eq!(Displacement::Word(i16::MIN).to_string(), " - 32768");
    }

    #[test]
    fn operands() {
        assert_eq!(Operand::Direct(3458).to_string(), "[3458]");
        assert_eq!(
            Operand::Indirect(AddressingMode::BxSi, Displacement::None).to_string(),
            "[bx + si]"
        );
        assert_eq!(
            Operand::Indirect(AddressingMode::Bp, Displacement::Byte(0)).to_string(),
            "[bp + 0]"
        );
        assert_eq!(
            Operand::Indirect(AddressingMode::BpDi, Displacement::Word(-7)).to_string(),
            "[bp + di - 7]"
        );
        assert_eq!(
            Operand::Register(SizedRegister(Register::ChBp, OperandSize::Byte)).to_string(),
            "ch"
        );
        assert_eq!(Operand::Immediate(Immediate::Byte(255)).to_string(), "255");
        assert_eq!(Operand::Immediate(Immediate::Word(65535)).to_string(), "65535");
    }

}
