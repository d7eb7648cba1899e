//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PHX, PHY: push A/X/Y (PHX/PHY are CMOS)
//! - PHP: push processor status with B and the unused bit forced to 1
//! - PLA, PLX, PLY: pull A/X/Y, updating Z and N
//! - PLP: pull processor status, ignoring the B and unused bits
//!
//! The stack lives at 0x0100-0x01FF and grows downward: a push writes to
//! 0x0100 | SP and then decrements SP; a pull increments SP first and then
//! reads. Pushes cost 3 cycles, pulls 4.

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes a push instruction (PHA, PHX, PHY, PHP).
///
/// PHP pushes the status byte with B (bit 4) and the unused bit (bit 5)
/// both set; the live flags are unchanged.
pub(crate) fn execute_push<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = match opcode {
        0x48 => cpu.a,                  // PHA
        0xDA => cpu.x,                  // PHX
        0x5A => cpu.y,                  // PHY
        0x08 => cpu.status() | 0b0011_0000, // PHP
        _ => unreachable!("opcode 0x{opcode:02X} is not a push"),
    };
    cpu.push(value)?;

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}

/// Executes a pull instruction (PLA, PLX, PLY, PLP).
///
/// PLA/PLX/PLY update Z and N from the pulled value. PLP restores all
/// documented flags from the pulled byte; B and the unused bit are masked.
pub(crate) fn execute_pull<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pull()?;
    match opcode {
        // PLA
        0x68 => {
            cpu.a = value;
            cpu.set_nz(value);
        }
        // PLX
        0xFA => {
            cpu.x = value;
            cpu.set_nz(value);
        }
        // PLY
        0x7A => {
            cpu.y = value;
            cpu.set_nz(value);
        }
        // PLP
        0x28 => {
            cpu.set_status(value);
        }
        _ => unreachable!("opcode 0x{opcode:02X} is not a pull"),
    }

    cpu.cycles.add(metadata.base_cycles as u64);

    Ok(())
}
