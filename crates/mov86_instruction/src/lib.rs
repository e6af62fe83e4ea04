//! This crate holds the types that represent a decoded 8086 `mov` instruction and knows how to
//! print them as assembly text that can be fed back into an assembler (e.g. `nasm`).

mod instruction;
mod operand;
mod operation;
mod register;

pub use instruction::Instruction;
pub use operand::{AddressingMode, Displacement, Immediate, Operand};
pub use operation::Operation;
pub use register::{OperandSize, Register, SizedRegister};
