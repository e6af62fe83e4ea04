use crate::errors::Result;
use crate::traits::{OpCodeExt, ReadExt};
use crate::FromEncoding;
use mov86_instruction::{Instruction, Operand, Operation, Register, SizedRegister};

// 1 0 0 0 1 0 d w | mod reg r/m | (disp-lo) | (disp-hi)
pub(crate) fn register_or_memory_to_from_register(
    op_code: u8,
    it: &mut dyn Iterator<Item = u8>,
) -> Result<Instruction> {
    let operand_size = op_code.operand_size();

    let mrrm = it.read_mrrm()?;

    let reg = Operand::Register(SizedRegister(mrrm.register, operand_size));
    let reg_mem = mrrm.register_or_memory.into_operand(operand_size);

    Ok(if op_code.register_is_destination() {
        Instruction::new(Operation::Mov, reg, reg_mem)
    } else {
        Instruction::new(Operation::Mov, reg_mem, reg)
    })
}

// 1 0 1 1 w reg | data | data if w = 1
pub(crate) fn immediate_to_register(
    op_code: u8,
    it: &mut dyn Iterator<Item = u8>,
) -> Result<Instruction> {
    // Special case for reading the [OperandSize] from the 4th bit.
    let operand_size = (op_code >> 3).operand_size();

    let destination = SizedRegister(Register::from_encoding(op_code), operand_size).into();
    let source = it.read_immediate(operand_size)?.into();

    Ok(Instruction::new(Operation::Mov, destination, source))
}
