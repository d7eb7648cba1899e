//! # Increment and Decrement Instructions
//!
//! This module implements:
//! - INC, DEC: on memory (read-modify-write) or, on the CMOS part, on the
//!   accumulator
//! - INX, INY, DEX, DEY: on the index registers
//!
//! All update Z and N from the result. The abs,X memory forms always cost
//! 7 cycles; no dynamic page-cross penalty applies to read-modify-write
//! increments.

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the INC (Increment) instruction, on A or memory.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        cpu.a = cpu.a.wrapping_add(1);
        cpu.a
    } else {
        let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
        let result = cpu.memory.read(addr)?.wrapping_add(1);
        cpu.memory.write(addr, result)?;
        result
    };

    cpu.set_nz(result);
    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the DEC (Decrement) instruction, on A or memory.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        cpu.a = cpu.a.wrapping_sub(1);
        cpu.a
    } else {
        let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
        let result = cpu.memory.read(addr)?.wrapping_sub(1);
        cpu.memory.write(addr, result)?;
        result
    };

    cpu.set_nz(result);
    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}
