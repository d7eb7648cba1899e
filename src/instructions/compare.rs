//! # Compare Instructions
//!
//! This module implements register-to-memory comparison:
//! - CMP: Compare Accumulator
//! - CPX: Compare X Register
//! - CPY: Compare Y Register
//!
//! A compare computes `register - operand` without writing the register:
//! C is set when the register is >= the operand (no borrow), Z on
//! equality, N from bit 7 of the 8-bit difference.

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    cpu.flag_c = register >= value;
    cpu.flag_z = register == value;
    cpu.flag_n = (diff & 0x80) != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;
    let register = cpu.a;
    compare(cpu, register, value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, _) = cpu.operand_value(metadata.addressing_mode)?;
    let register = cpu.x;
    compare(cpu, register, value);

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, _) = cpu.operand_value(metadata.addressing_mode)?;
    let register = cpu.y;
    compare(cpu, register, value);

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}
