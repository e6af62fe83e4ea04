use crate::{Operand, Operation};
use std::fmt::{Display, Formatter};

/// Representation of a decoded 8086 instruction.
///
/// ```rust
/// use mov86_instruction::*;
///
/// // mov al, [bx + si + 4]
/// let i = Instruction::new(
///     Operation::Mov,
///     Operand::Register(SizedRegister(Register::AlAx, OperandSize::Byte)),
///     Operand::Indirect(AddressingMode::BxSi, Displacement::Byte(4)),
/// );
///
/// assert_eq!(i.to_string(), "mov al, [bx + si + 4]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub operation: Operation,
    pub destination: Operand,
    pub source: Operand,
}

impl Instruction {
    /// Create a new instruction with the given [Operation], destination and source.
    pub fn new(operation: Operation, destination: Operand, source: Operand) -> Self {
        Self {
            operation,
            destination,
            source,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.operation, self.destination, self.source)
    }
}
