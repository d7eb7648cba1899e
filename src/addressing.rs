//! # Addressing Modes
//!
//! This module defines the 16 addressing modes of the 65C02 processor.
//! Each mode determines how the CPU interprets operand bytes and calculates
//! effective addresses. Four of them (`ZeroPageIndirect`,
//! `AbsoluteIndexedIndirect`, `ZeroPageRelative`, and the immediate form of
//! BIT that rides on `Immediate`) exist only on the CMOS part.

/// 65C02 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY, ZeroPageIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect,
///   AbsoluteIndexedIndirect, ZeroPageRelative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, ROR A, INC A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// The sum wraps within the zero page; it never reaches page 1.
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// The sum wraps within the zero page; it never reaches page 1.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// after the operand byte.
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Read-type instructions incur a +1 cycle penalty if the addition
    /// crosses a page boundary; write-type instructions carry the
    /// worst-case cost in their base cycle count.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Same page-cross cost model as `AbsoluteX`.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. JMP only.
    ///
    /// The 65C02 fixes the NMOS page-wrap bug: JMP ($10FF) reads its high
    /// byte from $1100, not $1000.
    Indirect,

    /// Indexed indirect: (zp + X) then dereference.
    ///
    /// The pointer sum and the high-byte fetch both wrap within the zero
    /// page.
    IndirectX,

    /// Indirect indexed: zp dereference then + Y.
    ///
    /// May incur a +1 cycle penalty if adding Y crosses a page boundary.
    IndirectY,

    /// Zero-page indirect without indexing (CMOS only).
    ///
    /// Example: LDA ($40) (read 16-bit address from zp 0x40, load from it)
    ZeroPageIndirect,

    /// Absolute indexed indirect: (16-bit operand + X) then dereference
    /// (CMOS only). JMP only.
    AbsoluteIndexedIndirect,

    /// Zero-page address plus relative branch offset (CMOS only).
    ///
    /// Used by BBR0-7 and BBS0-7: the first operand byte names the
    /// zero-page location to test, the second is the signed branch offset.
    ZeroPageRelative,
}
