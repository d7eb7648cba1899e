//! # Bit Test and Test-and-Modify Instructions
//!
//! This module implements:
//! - BIT: Bit Test
//! - TRB: Test and Reset Bits (CMOS)
//! - TSB: Test and Set Bits (CMOS)
//!
//! All three set Z from `A AND memory`. The non-immediate BIT forms also
//! copy operand bit 7 to N and bit 6 to V; the CMOS immediate form of BIT
//! affects only Z. TRB clears the accumulator's bits in memory, TSB sets
//! them; neither touches N or V.

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the BIT (Bit Test) instruction.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode)?;

    cpu.flag_z = (cpu.a & value) == 0;
    if metadata.addressing_mode != AddressingMode::Immediate {
        cpu.flag_n = (value & 0x80) != 0;
        cpu.flag_v = (value & 0x40) != 0;
    }

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the TRB (Test and Reset Bits) instruction (CMOS).
///
/// Z from `A AND memory`, then the bits of A are cleared in memory.
pub(crate) fn execute_trb<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.memory.read(addr)?;

    cpu.flag_z = (cpu.a & value) == 0;
    let result = value & !cpu.a;
    cpu.memory.write(addr, result)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes the TSB (Test and Set Bits) instruction (CMOS).
///
/// Z from `A AND memory`, then the bits of A are set in memory.
pub(crate) fn execute_tsb<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.memory.read(addr)?;

    cpu.flag_z = (cpu.a & value) == 0;
    let result = value | cpu.a;
    cpu.memory.write(addr, result)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}
