//! # Status Flag Manipulation Instructions
//!
//! This module implements the single-flag set/clear instructions:
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. There is no SEV on the 6502 family;
//! V is only set by ADC/SBC, BIT, PLP, and RTI.
//!
//! All use implied addressing and execute in 2 cycles.

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes a flag set/clear instruction.
pub(crate) fn execute_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    match opcode {
        0x18 => cpu.flag_c = false, // CLC
        0x38 => cpu.flag_c = true,  // SEC
        0x58 => cpu.flag_i = false, // CLI
        0x78 => cpu.flag_i = true,  // SEI
        0xB8 => cpu.flag_v = false, // CLV
        0xD8 => cpu.flag_d = false, // CLD
        0xF8 => cpu.flag_d = true,  // SED
        _ => unreachable!("opcode 0x{opcode:02X} is not a flag instruction"),
    }

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}
