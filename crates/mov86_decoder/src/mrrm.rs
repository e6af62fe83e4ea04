use crate::errors::Result;
use crate::traits::{MrrmExt, ReadExt};
use crate::FromEncoding;
use mov86_instruction::{
    AddressingMode, Displacement, Operand, OperandSize, Register, SizedRegister,
};

/// The operand selected by the `mod` and `r/m` fields, with any displacement bytes that follow
/// the mod-reg-r/m byte already read.
#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOrMemory {
    Direct(u16),
    Indirect(AddressingMode),
    DisplacementByte(AddressingMode, i8),
    DisplacementWord(AddressingMode, i16),
    Register(Register),
}

impl RegisterOrMemory {
    pub fn try_from_mrrm<I>(mrrm_byte: u8, it: &mut I) -> Result<Self>
    where
        I: Iterator<Item = u8> + ?Sized,
    {
        let rm = mrrm_byte.rm();

        Ok(match mrrm_byte.mode() {
            // r/m 110 without a displacement is a direct address instead of [bp].
            0b00 if rm == 0b110 => RegisterOrMemory::Direct(it.read_u16()?),
            0b00 => RegisterOrMemory::Indirect(AddressingMode::from_encoding(rm)),

            0b01 => RegisterOrMemory::DisplacementByte(
                AddressingMode::from_encoding(rm),
                it.read_u8()? as i8,
            ),

            0b10 => RegisterOrMemory::DisplacementWord(
                AddressingMode::from_encoding(rm),
                it.read_u16()? as i16,
            ),

            _ => RegisterOrMemory::Register(Register::from_encoding(rm)),
        })
    }

    pub fn into_operand(self, operand_size: OperandSize) -> Operand {
        match self {
            RegisterOrMemory::Direct(address) => Operand::Direct(address),
            RegisterOrMemory::Indirect(addressing_mode) => {
                Operand::Indirect(addressing_mode, Displacement::None)
            }
            RegisterOrMemory::DisplacementByte(addressing_mode, displacement) => {
                Operand::Indirect(addressing_mode, Displacement::Byte(displacement))
            }
            RegisterOrMemory::DisplacementWord(addressing_mode, displacement) => {
                Operand::Indirect(addressing_mode, Displacement::Word(displacement))
            }
            RegisterOrMemory::Register(register) => {
                Operand::Register(SizedRegister(register, operand_size))
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ModRegRM {
    pub register: Register,
    pub register_or_memory: RegisterOrMemory,
}

impl ModRegRM {
    pub fn try_from_byte<I>(byte: u8, it: &mut I) -> Result<Self>
    where
        I: Iterator<Item = u8> + ?Sized,
    {
        let register = Register::from_encoding(byte.reg());
        let register_or_memory = RegisterOrMemory::try_from_mrrm(byte, it)?;

        Ok(ModRegRM {
            register,
            register_or_memory,
        })
    }
}
