//! # Logical Instructions
//!
//! This module implements the bitwise operations on the accumulator:
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//!
//! All three update Z and N from the result and leave C and V alone; the
//! indexed forms add the +1 page-cross penalty.

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.a &= value;
    cpu.set_nz(cpu.a);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.a |= value;
    cpu.set_nz(cpu.a);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.a ^= value;
    cpu.set_nz(cpu.a);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}
