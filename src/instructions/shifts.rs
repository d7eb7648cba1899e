//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left (through carry)
//! - ROR: Rotate Right (through carry)
//!
//! Each operates either on the accumulator or on memory (read-modify-
//! write). C receives the shifted-out bit; Z and N follow the result. On
//! the 65C02 the abs,X forms cost 6 cycles plus 1 if the indexing crosses
//! a page (the NMOS part always paid 7).

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// C gets old bit 7; bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mut cycles = metadata.base_cycles as u64;

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.flag_c = (value & 0x80) != 0;
        cpu.a = value << 1;
        cpu.a
    } else {
        let (addr, page_crossed) = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.memory.read(addr)?;
        cpu.flag_c = (value & 0x80) != 0;
        let result = value << 1;
        cpu.memory.write(addr, result)?;
        if page_crossed {
            cycles += 1;
        }
        result
    };

    cpu.set_nz(result);
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// C gets old bit 0; bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mut cycles = metadata.base_cycles as u64;

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.flag_c = (value & 0x01) != 0;
        cpu.a = value >> 1;
        cpu.a
    } else {
        let (addr, page_crossed) = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.memory.read(addr)?;
        cpu.flag_c = (value & 0x01) != 0;
        let result = value >> 1;
        cpu.memory.write(addr, result)?;
        if page_crossed {
            cycles += 1;
        }
        result
    };

    cpu.set_nz(result);
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 0 is filled from the old carry; C gets old bit 7.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mut cycles = metadata.base_cycles as u64;
    let carry_in = cpu.flag_c as u8;

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.flag_c = (value & 0x80) != 0;
        cpu.a = (value << 1) | carry_in;
        cpu.a
    } else {
        let (addr, page_crossed) = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.memory.read(addr)?;
        cpu.flag_c = (value & 0x80) != 0;
        let result = (value << 1) | carry_in;
        cpu.memory.write(addr, result)?;
        if page_crossed {
            cycles += 1;
        }
        result
    };

    cpu.set_nz(result);
    cpu.cycles.add(cycles);

    Ok(())
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 7 is filled from the old carry; C gets old bit 0.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mut cycles = metadata.base_cycles as u64;
    let carry_in = (cpu.flag_c as u8) << 7;

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.flag_c = (value & 0x01) != 0;
        cpu.a = (value >> 1) | carry_in;
        cpu.a
    } else {
        let (addr, page_crossed) = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.memory.read(addr)?;
        cpu.flag_c = (value & 0x01) != 0;
        let result = (value >> 1) | carry_in;
        cpu.memory.write(addr, result)?;
        if page_crossed {
            cycles += 1;
        }
        result
    };

    cpu.set_nz(result);
    cpu.cycles.add(cycles);

    Ok(())
}
