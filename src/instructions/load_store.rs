//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//! - STZ: Store Zero (CMOS)
//!
//! Loads set Z and N from the loaded value and add the +1 page-cross
//! penalty on their indexed forms. Stores affect no flags and carry their
//! worst-case indexed cost in the base cycle count.

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.a = value;
    cpu.set_nz(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, targeting X.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.x = value;
    cpu.set_nz(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, targeting Y.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.y = value;
    cpu.set_nz(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
///
/// No flags affected. Indexed forms always pay the worst-case cycle cost,
/// so no dynamic page-cross penalty applies.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.a;
    cpu.memory.write(addr, value)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the STX (Store X Register) instruction. No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.x;
    cpu.memory.write(addr, value)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the STY (Store Y Register) instruction. No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.y;
    cpu.memory.write(addr, value)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the STZ (Store Zero) instruction (CMOS).
///
/// Writes 0x00 to the effective address. No flags affected.
pub(crate) fn execute_stz<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
    cpu.memory.write(addr, 0x00)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}
