use crate::{DecodeError, ModRegRM, Result};
use mov86_instruction::{Immediate, OperandSize};

/// Accessors for the fields encoded in the op code byte.
pub trait OpCodeExt {
    /// The `w` bit in the lowest position.
    fn operand_size(self) -> OperandSize;

    /// The `d` bit. When set, the `reg` field is the destination.
    fn register_is_destination(self) -> bool;
}

impl OpCodeExt for u8 {
    fn operand_size(self) -> OperandSize {
        if self & 1 == 0 {
            OperandSize::Byte
        } else {
            OperandSize::Word
        }
    }

    fn register_is_destination(self) -> bool {
        (self >> 1) & 1 == 1
    }
}

/// Accessors for the fields of a mod-reg-r/m byte.
pub trait MrrmExt {
    fn mode(self) -> u8;
    fn reg(self) -> u8;
    fn rm(self) -> u8;
}

impl MrrmExt for u8 {
    fn mode(self) -> u8 {
        self >> 6
    }

    fn reg(self) -> u8 {
        (self >> 3) & 0b111
    }

    fn rm(self) -> u8 {
        self & 0b111
    }
}

pub trait ReadExt {
    fn read_u8(&mut self) -> Result<u8>;

    fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes([self.read_u8()?, self.read_u8()?]))
    }

    fn read_mrrm(&mut self) -> Result<ModRegRM>;

    fn read_immediate(&mut self, operand_size: OperandSize) -> Result<Immediate>;
}

impl<T: Iterator<Item = u8> + ?Sized> ReadExt for T {
    fn read_u8(&mut self) -> Result<u8> {
        self.next().ok_or(DecodeError::TruncatedInstruction)
    }

    fn read_mrrm(&mut self) -> Result<ModRegRM> {
        let mrrm_byte = self.read_u8()?;
        ModRegRM::try_from_byte(mrrm_byte, self)
    }

    fn read_immediate(&mut self, operand_size: OperandSize) -> Result<Immediate> {
        Ok(match operand_size {
            OperandSize::Byte => Immediate::Byte(self.read_u8()?),
            OperandSize::Word => Immediate::Word(self.read_u16()?),
        })
    }
}
