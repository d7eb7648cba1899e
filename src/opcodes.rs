//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for all 65C02 instruction
//! information: mnemonic, addressing mode, base cycle cost, and byte length.
//!
//! Unlike the NMOS part, the CMOS 65C02 defines every byte value: the slots
//! that were undocumented opcodes on the NMOS part decode as NOPs with
//! specific byte lengths and cycle counts, and the Rockwell/WDC bit
//! instructions (RMB/SMB/BBR/BBS) occupy the x7/xF columns. Only WAI (0xCB)
//! and STP (0xDB) are flagged unimplemented; executing either is a fatal
//! fault.
//!
//! Base cycle costs exclude the dynamic penalties (+1 for a read-type page
//! cross, +1/+2 for taken branches); write-type indexed forms and
//! INC/DEC abs,X carry their worst-case cost here.

use crate::addressing::AddressingMode;

/// Metadata for a single 65C02 opcode.
///
/// # Examples
///
/// ```
/// use lib65c02::{OPCODE_TABLE, AddressingMode};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STZ", "BBR3").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page-cross and branch-taken penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub size_bytes: u8,

    /// False only for the WAI and STP slots, which fault when executed.
    pub implemented: bool,
}

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes,
        implemented: true,
    }
}

const fn halt(mnemonic: &'static str, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: AddressingMode::Implied,
        base_cycles,
        size_bytes: 1,
        implemented: false,
    }
}

use AddressingMode::*;

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Cycle and size data follow the W65C02S reference table; the dynamic
/// penalty rules live in the class handlers that consume this table.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Implied, 7, 1),                  // 0x00
    op("ORA", IndirectX, 6, 2),                // 0x01
    op("NOP", Immediate, 2, 2),                // 0x02 (reserved)
    op("NOP", Implied, 1, 1),                  // 0x03 (reserved)
    op("TSB", ZeroPage, 5, 2),                 // 0x04
    op("ORA", ZeroPage, 3, 2),                 // 0x05
    op("ASL", ZeroPage, 5, 2),                 // 0x06
    op("RMB0", ZeroPage, 5, 2),                // 0x07
    op("PHP", Implied, 3, 1),                  // 0x08
    op("ORA", Immediate, 2, 2),                // 0x09
    op("ASL", Accumulator, 2, 1),              // 0x0A
    op("NOP", Implied, 1, 1),                  // 0x0B (reserved)
    op("TSB", Absolute, 6, 3),                 // 0x0C
    op("ORA", Absolute, 4, 3),                 // 0x0D
    op("ASL", Absolute, 6, 3),                 // 0x0E
    op("BBR0", ZeroPageRelative, 5, 3),        // 0x0F
    op("BPL", Relative, 2, 2),                 // 0x10
    op("ORA", IndirectY, 5, 2),                // 0x11
    op("ORA", ZeroPageIndirect, 5, 2),         // 0x12
    op("NOP", Implied, 1, 1),                  // 0x13 (reserved)
    op("TRB", ZeroPage, 5, 2),                 // 0x14
    op("ORA", ZeroPageX, 4, 2),                // 0x15
    op("ASL", ZeroPageX, 6, 2),                // 0x16
    op("RMB1", ZeroPage, 5, 2),                // 0x17
    op("CLC", Implied, 2, 1),                  // 0x18
    op("ORA", AbsoluteY, 4, 3),                // 0x19
    op("INC", Accumulator, 2, 1),              // 0x1A
    op("NOP", Implied, 1, 1),                  // 0x1B (reserved)
    op("TRB", Absolute, 6, 3),                 // 0x1C
    op("ORA", AbsoluteX, 4, 3),                // 0x1D
    op("ASL", AbsoluteX, 6, 3),                // 0x1E
    op("BBR1", ZeroPageRelative, 5, 3),        // 0x1F
    op("JSR", Absolute, 6, 3),                 // 0x20
    op("AND", IndirectX, 6, 2),                // 0x21
    op("NOP", Immediate, 2, 2),                // 0x22 (reserved)
    op("NOP", Implied, 1, 1),                  // 0x23 (reserved)
    op("BIT", ZeroPage, 3, 2),                 // 0x24
    op("AND", ZeroPage, 3, 2),                 // 0x25
    op("ROL", ZeroPage, 5, 2),                 // 0x26
    op("RMB2", ZeroPage, 5, 2),                // 0x27
    op("PLP", Implied, 4, 1),                  // 0x28
    op("AND", Immediate, 2, 2),                // 0x29
    op("ROL", Accumulator, 2, 1),              // 0x2A
    op("NOP", Implied, 1, 1),                  // 0x2B (reserved)
    op("BIT", Absolute, 4, 3),                 // 0x2C
    op("AND", Absolute, 4, 3),                 // 0x2D
    op("ROL", Absolute, 6, 3),                 // 0x2E
    op("BBR2", ZeroPageRelative, 5, 3),        // 0x2F
    op("BMI", Relative, 2, 2),                 // 0x30
    op("AND", IndirectY, 5, 2),                // 0x31
    op("AND", ZeroPageIndirect, 5, 2),         // 0x32
    op("NOP", Implied, 1, 1),                  // 0x33 (reserved)
    op("BIT", ZeroPageX, 4, 2),                // 0x34
    op("AND", ZeroPageX, 4, 2),                // 0x35
    op("ROL", ZeroPageX, 6, 2),                // 0x36
    op("RMB3", ZeroPage, 5, 2),                // 0x37
    op("SEC", Implied, 2, 1),                  // 0x38
    op("AND", AbsoluteY, 4, 3),                // 0x39
    op("DEC", Accumulator, 2, 1),              // 0x3A
    op("NOP", Implied, 1, 1),                  // 0x3B (reserved)
    op("BIT", AbsoluteX, 4, 3),                // 0x3C
    op("AND", AbsoluteX, 4, 3),                // 0x3D
    op("ROL", AbsoluteX, 6, 3),                // 0x3E
    op("BBR3", ZeroPageRelative, 5, 3),        // 0x3F
    op("RTI", Implied, 6, 1),                  // 0x40
    op("EOR", IndirectX, 6, 2),                // 0x41
    op("NOP", Immediate, 2, 2),                // 0x42 (reserved)
    op("NOP", Implied, 1, 1),                  // 0x43 (reserved)
    op("NOP", ZeroPage, 3, 2),                 // 0x44 (reserved)
    op("EOR", ZeroPage, 3, 2),                 // 0x45
    op("LSR", ZeroPage, 5, 2),                 // 0x46
    op("RMB4", ZeroPage, 5, 2),                // 0x47
    op("PHA", Implied, 3, 1),                  // 0x48
    op("EOR", Immediate, 2, 2),                // 0x49
    op("LSR", Accumulator, 2, 1),              // 0x4A
    op("NOP", Implied, 1, 1),                  // 0x4B (reserved)
    op("JMP", Absolute, 3, 3),                 // 0x4C
    op("EOR", Absolute, 4, 3),                 // 0x4D
    op("LSR", Absolute, 6, 3),                 // 0x4E
    op("BBR4", ZeroPageRelative, 5, 3),        // 0x4F
    op("BVC", Relative, 2, 2),                 // 0x50
    op("EOR", IndirectY, 5, 2),                // 0x51
    op("EOR", ZeroPageIndirect, 5, 2),         // 0x52
    op("NOP", Implied, 1, 1),                  // 0x53 (reserved)
    op("NOP", ZeroPageX, 4, 2),                // 0x54 (reserved)
    op("EOR", ZeroPageX, 4, 2),                // 0x55
    op("LSR", ZeroPageX, 6, 2),                // 0x56
    op("RMB5", ZeroPage, 5, 2),                // 0x57
    op("CLI", Implied, 2, 1),                  // 0x58
    op("EOR", AbsoluteY, 4, 3),                // 0x59
    op("PHY", Implied, 3, 1),                  // 0x5A
    op("NOP", Implied, 1, 1),                  // 0x5B (reserved)
    op("NOP", Absolute, 8, 3),                 // 0x5C (reserved)
    op("EOR", AbsoluteX, 4, 3),                // 0x5D
    op("LSR", AbsoluteX, 6, 3),                // 0x5E
    op("BBR5", ZeroPageRelative, 5, 3),        // 0x5F
    op("RTS", Implied, 6, 1),                  // 0x60
    op("ADC", IndirectX, 6, 2),                // 0x61
    op("NOP", Immediate, 2, 2),                // 0x62 (reserved)
    op("NOP", Implied, 1, 1),                  // 0x63 (reserved)
    op("STZ", ZeroPage, 3, 2),                 // 0x64
    op("ADC", ZeroPage, 3, 2),                 // 0x65
    op("ROR", ZeroPage, 5, 2),                 // 0x66
    op("RMB6", ZeroPage, 5, 2),                // 0x67
    op("PLA", Implied, 4, 1),                  // 0x68
    op("ADC", Immediate, 2, 2),                // 0x69
    op("ROR", Accumulator, 2, 1),              // 0x6A
    op("NOP", Implied, 1, 1),                  // 0x6B (reserved)
    op("JMP", Indirect, 6, 3),                 // 0x6C
    op("ADC", Absolute, 4, 3),                 // 0x6D
    op("ROR", Absolute, 6, 3),                 // 0x6E
    op("BBR6", ZeroPageRelative, 5, 3),        // 0x6F
    op("BVS", Relative, 2, 2),                 // 0x70
    op("ADC", IndirectY, 5, 2),                // 0x71
    op("ADC", ZeroPageIndirect, 5, 2),         // 0x72
    op("NOP", Implied, 1, 1),                  // 0x73 (reserved)
    op("STZ", ZeroPageX, 4, 2),                // 0x74
    op("ADC", ZeroPageX, 4, 2),                // 0x75
    op("ROR", ZeroPageX, 6, 2),                // 0x76
    op("RMB7", ZeroPage, 5, 2),                // 0x77
    op("SEI", Implied, 2, 1),                  // 0x78
    op("ADC", AbsoluteY, 4, 3),                // 0x79
    op("PLY", Implied, 4, 1),                  // 0x7A
    op("NOP", Implied, 1, 1),                  // 0x7B (reserved)
    op("JMP", AbsoluteIndexedIndirect, 6, 3),  // 0x7C
    op("ADC", AbsoluteX, 4, 3),                // 0x7D
    op("ROR", AbsoluteX, 6, 3),                // 0x7E
    op("BBR7", ZeroPageRelative, 5, 3),        // 0x7F
    op("BRA", Relative, 2, 2),                 // 0x80
    op("STA", IndirectX, 6, 2),                // 0x81
    op("NOP", Immediate, 2, 2),                // 0x82 (reserved)
    op("NOP", Implied, 1, 1),                  // 0x83 (reserved)
    op("STY", ZeroPage, 3, 2),                 // 0x84
    op("STA", ZeroPage, 3, 2),                 // 0x85
    op("STX", ZeroPage, 3, 2),                 // 0x86
    op("SMB0", ZeroPage, 5, 2),                // 0x87
    op("DEY", Implied, 2, 1),                  // 0x88
    op("BIT", Immediate, 2, 2),                // 0x89
    op("TXA", Implied, 2, 1),                  // 0x8A
    op("NOP", Implied, 1, 1),                  // 0x8B (reserved)
    op("STY", Absolute, 4, 3),                 // 0x8C
    op("STA", Absolute, 4, 3),                 // 0x8D
    op("STX", Absolute, 4, 3),                 // 0x8E
    op("BBS0", ZeroPageRelative, 5, 3),        // 0x8F
    op("BCC", Relative, 2, 2),                 // 0x90
    op("STA", IndirectY, 6, 2),                // 0x91
    op("STA", ZeroPageIndirect, 5, 2),         // 0x92
    op("NOP", Implied, 1, 1),                  // 0x93 (reserved)
    op("STY", ZeroPageX, 4, 2),                // 0x94
    op("STA", ZeroPageX, 4, 2),                // 0x95
    op("STX", ZeroPageY, 4, 2),                // 0x96
    op("SMB1", ZeroPage, 5, 2),                // 0x97
    op("TYA", Implied, 2, 1),                  // 0x98
    op("STA", AbsoluteY, 5, 3),                // 0x99
    op("TXS", Implied, 2, 1),                  // 0x9A
    op("NOP", Implied, 1, 1),                  // 0x9B (reserved)
    op("STZ", Absolute, 4, 3),                 // 0x9C
    op("STA", AbsoluteX, 5, 3),                // 0x9D
    op("STZ", AbsoluteX, 5, 3),                // 0x9E
    op("BBS1", ZeroPageRelative, 5, 3),        // 0x9F
    op("LDY", Immediate, 2, 2),                // 0xA0
    op("LDA", IndirectX, 6, 2),                // 0xA1
    op("LDX", Immediate, 2, 2),                // 0xA2
    op("NOP", Implied, 1, 1),                  // 0xA3 (reserved)
    op("LDY", ZeroPage, 3, 2),                 // 0xA4
    op("LDA", ZeroPage, 3, 2),                 // 0xA5
    op("LDX", ZeroPage, 3, 2),                 // 0xA6
    op("SMB2", ZeroPage, 5, 2),                // 0xA7
    op("TAY", Implied, 2, 1),                  // 0xA8
    op("LDA", Immediate, 2, 2),                // 0xA9
    op("TAX", Implied, 2, 1),                  // 0xAA
    op("NOP", Implied, 1, 1),                  // 0xAB (reserved)
    op("LDY", Absolute, 4, 3),                 // 0xAC
    op("LDA", Absolute, 4, 3),                 // 0xAD
    op("LDX", Absolute, 4, 3),                 // 0xAE
    op("BBS2", ZeroPageRelative, 5, 3),        // 0xAF
    op("BCS", Relative, 2, 2),                 // 0xB0
    op("LDA", IndirectY, 5, 2),                // 0xB1
    op("LDA", ZeroPageIndirect, 5, 2),         // 0xB2
    op("NOP", Implied, 1, 1),                  // 0xB3 (reserved)
    op("LDY", ZeroPageX, 4, 2),                // 0xB4
    op("LDA", ZeroPageX, 4, 2),                // 0xB5
    op("LDX", ZeroPageY, 4, 2),                // 0xB6
    op("SMB3", ZeroPage, 5, 2),                // 0xB7
    op("CLV", Implied, 2, 1),                  // 0xB8
    op("LDA", AbsoluteY, 4, 3),                // 0xB9
    op("TSX", Implied, 2, 1),                  // 0xBA
    op("NOP", Implied, 1, 1),                  // 0xBB (reserved)
    op("LDY", AbsoluteX, 4, 3),                // 0xBC
    op("LDA", AbsoluteX, 4, 3),                // 0xBD
    op("LDX", AbsoluteY, 4, 3),                // 0xBE
    op("BBS3", ZeroPageRelative, 5, 3),        // 0xBF
    op("CPY", Immediate, 2, 2),                // 0xC0
    op("CMP", IndirectX, 6, 2),                // 0xC1
    op("NOP", Immediate, 2, 2),                // 0xC2 (reserved)
    op("NOP", Implied, 1, 1),                  // 0xC3 (reserved)
    op("CPY", ZeroPage, 3, 2),                 // 0xC4
    op("CMP", ZeroPage, 3, 2),                 // 0xC5
    op("DEC", ZeroPage, 5, 2),                 // 0xC6
    op("SMB4", ZeroPage, 5, 2),                // 0xC7
    op("INY", Implied, 2, 1),                  // 0xC8
    op("CMP", Immediate, 2, 2),                // 0xC9
    op("DEX", Implied, 2, 1),                  // 0xCA
    halt("WAI", 3),                            // 0xCB (unimplemented)
    op("CPY", Absolute, 4, 3),                 // 0xCC
    op("CMP", Absolute, 4, 3),                 // 0xCD
    op("DEC", Absolute, 6, 3),                 // 0xCE
    op("BBS4", ZeroPageRelative, 5, 3),        // 0xCF
    op("BNE", Relative, 2, 2),                 // 0xD0
    op("CMP", IndirectY, 5, 2),                // 0xD1
    op("CMP", ZeroPageIndirect, 5, 2),         // 0xD2
    op("NOP", Implied, 1, 1),                  // 0xD3 (reserved)
    op("NOP", ZeroPageX, 4, 2),                // 0xD4 (reserved)
    op("CMP", ZeroPageX, 4, 2),                // 0xD5
    op("DEC", ZeroPageX, 6, 2),                // 0xD6
    op("SMB5", ZeroPage, 5, 2),                // 0xD7
    op("CLD", Implied, 2, 1),                  // 0xD8
    op("CMP", AbsoluteY, 4, 3),                // 0xD9
    op("PHX", Implied, 3, 1),                  // 0xDA
    halt("STP", 3),                            // 0xDB (unimplemented)
    op("NOP", Absolute, 4, 3),                 // 0xDC (reserved)
    op("CMP", AbsoluteX, 4, 3),                // 0xDD
    op("DEC", AbsoluteX, 7, 3),                // 0xDE
    op("BBS5", ZeroPageRelative, 5, 3),        // 0xDF
    op("CPX", Immediate, 2, 2),                // 0xE0
    op("SBC", IndirectX, 6, 2),                // 0xE1
    op("NOP", Immediate, 2, 2),                // 0xE2 (reserved)
    op("NOP", Implied, 1, 1),                  // 0xE3 (reserved)
    op("CPX", ZeroPage, 3, 2),                 // 0xE4
    op("SBC", ZeroPage, 3, 2),                 // 0xE5
    op("INC", ZeroPage, 5, 2),                 // 0xE6
    op("SMB6", ZeroPage, 5, 2),                // 0xE7
    op("INX", Implied, 2, 1),                  // 0xE8
    op("SBC", Immediate, 2, 2),                // 0xE9
    op("NOP", Implied, 2, 1),                  // 0xEA
    op("NOP", Implied, 1, 1),                  // 0xEB (reserved)
    op("CPX", Absolute, 4, 3),                 // 0xEC
    op("SBC", Absolute, 4, 3),                 // 0xED
    op("INC", Absolute, 6, 3),                 // 0xEE
    op("BBS6", ZeroPageRelative, 5, 3),        // 0xEF
    op("BEQ", Relative, 2, 2),                 // 0xF0
    op("SBC", IndirectY, 5, 2),                // 0xF1
    op("SBC", ZeroPageIndirect, 5, 2),         // 0xF2
    op("NOP", Implied, 1, 1),                  // 0xF3 (reserved)
    op("NOP", ZeroPageX, 4, 2),                // 0xF4 (reserved)
    op("SBC", ZeroPageX, 4, 2),                // 0xF5
    op("INC", ZeroPageX, 6, 2),                // 0xF6
    op("SMB7", ZeroPage, 5, 2),                // 0xF7
    op("SED", Implied, 2, 1),                  // 0xF8
    op("SBC", AbsoluteY, 4, 3),                // 0xF9
    op("PLX", Implied, 4, 1),                  // 0xFA
    op("NOP", Implied, 1, 1),                  // 0xFB (reserved)
    op("NOP", Absolute, 4, 3),                 // 0xFC (reserved)
    op("SBC", AbsoluteX, 4, 3),                // 0xFD
    op("INC", AbsoluteX, 7, 3),                // 0xFE
    op("BBS7", ZeroPageRelative, 5, 3),        // 0xFF
];
