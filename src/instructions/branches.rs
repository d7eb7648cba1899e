//! # Branch Instructions
//!
//! This module implements the conditional branches BPL, BMI, BVC, BVS,
//! BCC, BCS, BNE, BEQ and the CMOS unconditional BRA.
//!
//! All branches use relative addressing: a signed 8-bit offset applied to
//! the PC after the operand byte. Cycle timing:
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken within the same page
//! - 4 cycles if taken across a page boundary

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes a branch instruction.
///
/// The offset operand is always read (and traced), taken or not.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let offset = cpu.fetch_byte()? as i8;

    let taken = match metadata.mnemonic {
        "BPL" => !cpu.flag_n,
        "BMI" => cpu.flag_n,
        "BVC" => !cpu.flag_v,
        "BVS" => cpu.flag_v,
        "BCC" => !cpu.flag_c,
        "BCS" => cpu.flag_c,
        "BNE" => !cpu.flag_z,
        "BEQ" => cpu.flag_z,
        "BRA" => true,
        other => unreachable!("{other} is not a branch"),
    };

    let mut cycles = metadata.base_cycles as u64;
    if taken {
        cycles += take_branch(cpu, offset);
    }
    cpu.cycles.add(cycles);

    Ok(())
}

/// Applies a taken branch: moves PC by the signed offset and returns the
/// penalty (+1, or +2 when the target is on a different page than the PC
/// after the operand).
///
/// Shared with the BBR/BBS bit branches, whose relative part follows the
/// same cost rule.
pub(crate) fn take_branch<M: MemoryBus>(cpu: &mut CPU<M>, offset: i8) -> u64 {
    let target = cpu.pc.wrapping_add_signed(offset as i16);
    let penalty = if (cpu.pc & 0xFF00) != (target & 0xFF00) {
        2
    } else {
        1
    };
    cpu.pc = target;
    penalty
}
