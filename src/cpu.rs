//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 65C02 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction byte
//! - **Stack pointer** (SP): 8-bit offset into the stack page; the full
//!   stack address is `0x0100 | SP`
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields; bit 5
//!   is forced to 1 whenever the status byte is materialized)
//! - **Cycle counter**: 64-bit tick accumulator, zeroed by RESET
//!
//! ## Execution Model
//!
//! `execute(n)` retires exactly `n` instructions; `step()` retires one.
//! Each step fetches the opcode through the bus (advancing PC), dispatches
//! through [`OPCODE_TABLE`], and lets the class handler fetch operand
//! bytes, resolve the addressing mode, apply the semantic effect, and
//! charge cycles. All memory traffic goes through the bus, so an enabled
//! trace records the complete run in access order.

use crate::cycles::CycleCounter;
use crate::{AddressingMode, BusError, ExecutionError, MemoryBus, OPCODE_TABLE};

/// NMI vector (low byte address; high byte at +1). Reserved by the part;
/// no operation in this core services NMI.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// RESET vector: loaded into PC by [`CPU::reset`].
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector: loaded into PC by BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 65C02 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait:
/// unit tests typically use [`FlatMemory`](crate::FlatMemory), the system
/// shell uses the three-region [`Bus`](crate::Bus).
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.poke(0xFFFC, 0x00); // Reset vector low byte
/// memory.poke(0xFFFD, 0x80); // Reset vector high byte
/// memory.poke(0x8000, 0xA9); // LDA #$42
/// memory.poke(0x8001, 0x42);
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset().unwrap();
/// cpu.execute(1).unwrap();
///
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x8002);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the full stack address)
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last result)
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow of ADC/SBC, bit 6 via BIT/PLP/RTI)
    pub(crate) flag_v: bool,

    /// Break flag. Phantom on the 65C02: only observable in status bytes
    /// pushed by BRK/PHP, never set by instruction execution.
    pub(crate) flag_b: bool,

    /// Decimal mode flag (BCD arithmetic for ADC/SBC)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Tick accumulator plus configured clock rate
    pub(crate) cycles: CycleCounter,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over the given bus, in the post-RESET register state
    /// but with PC at 0x0000.
    ///
    /// Call [`reset`](CPU::reset) to load PC from the 0xFFFC/0xFFFD vector,
    /// or [`reset_to`](CPU::reset_to) to force a starting address.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true, // Interrupt disable set on reset
            flag_z: false,
            flag_c: false,
            cycles: CycleCounter::default(),
            memory,
        }
    }

    /// RESET: SP to 0xFD, status to I=1 (all others clear), A/X/Y to 0,
    /// cycle counter to 0, PC from the little-endian vector at
    /// 0xFFFC/0xFFFD.
    ///
    /// The vector is fetched through the untraced raw path: RESET is not
    /// an instruction and leaves no trace records. RAM contents are not
    /// cleared. Fails if the vector addresses are unmapped.
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        let lo = self
            .memory
            .peek(RESET_VECTOR)
            .ok_or(BusError::Unmapped { addr: RESET_VECTOR })?;
        let hi = self
            .memory
            .peek(RESET_VECTOR + 1)
            .ok_or(BusError::Unmapped {
                addr: RESET_VECTOR + 1,
            })?;
        let pc = u16::from_le_bytes([lo, hi]);
        self.reset_to(pc);
        Ok(())
    }

    /// RESET with an explicit PC override, for tests and debuggers.
    pub fn reset_to(&mut self, pc: u16) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles.reset();
        self.pc = pc;
        log::debug!("reset: PC=0x{pc:04X}");
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Fetches the opcode at PC through the bus (PC += 1), looks it up in
    /// [`OPCODE_TABLE`], and dispatches to its class handler. The handler
    /// fetches any operand bytes, resolves the addressing mode, performs
    /// the operation, updates exactly the documented flags, and charges
    /// the instruction's full cycle cost.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::Bus`] if any access touches an unmapped address
    /// - [`ExecutionError::UnimplementedOpcode`] for the WAI/STP slots
    ///
    /// A faulting instruction does not retire; no partial-state rollback
    /// is attempted.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        use crate::instructions::*;

        // Fetch opcode at PC (logged) and decode via the table
        let opcode = self.fetch_byte()?;
        let metadata = &OPCODE_TABLE[opcode as usize];

        if !metadata.implemented {
            return Err(ExecutionError::UnimplementedOpcode(opcode));
        }

        match metadata.mnemonic {
            "ADC" => arithmetic::execute_adc(self, opcode)?,
            "SBC" => arithmetic::execute_sbc(self, opcode)?,
            "AND" => logical::execute_and(self, opcode)?,
            "ORA" => logical::execute_ora(self, opcode)?,
            "EOR" => logical::execute_eor(self, opcode)?,
            "ASL" => shifts::execute_asl(self, opcode)?,
            "LSR" => shifts::execute_lsr(self, opcode)?,
            "ROL" => shifts::execute_rol(self, opcode)?,
            "ROR" => shifts::execute_ror(self, opcode)?,
            "BCC" | "BCS" | "BEQ" | "BNE" | "BMI" | "BPL" | "BVC" | "BVS" | "BRA" => {
                branches::execute_branch(self, opcode)?
            }
            "BIT" => bits::execute_bit(self, opcode)?,
            "TRB" => bits::execute_trb(self, opcode)?,
            "TSB" => bits::execute_tsb(self, opcode)?,
            "BRK" => control::execute_brk(self, opcode)?,
            "JMP" => control::execute_jmp(self, opcode)?,
            "JSR" => control::execute_jsr(self, opcode)?,
            "RTS" => control::execute_rts(self, opcode)?,
            "RTI" => control::execute_rti(self, opcode)?,
            "NOP" => control::execute_nop(self, opcode)?,
            "CLC" | "SEC" | "CLI" | "SEI" | "CLD" | "SED" | "CLV" => {
                flags::execute_flag(self, opcode)?
            }
            "CMP" => compare::execute_cmp(self, opcode)?,
            "CPX" => compare::execute_cpx(self, opcode)?,
            "CPY" => compare::execute_cpy(self, opcode)?,
            "INC" => inc_dec::execute_inc(self, opcode)?,
            "DEC" => inc_dec::execute_dec(self, opcode)?,
            "INX" => inc_dec::execute_inx(self, opcode)?,
            "INY" => inc_dec::execute_iny(self, opcode)?,
            "DEX" => inc_dec::execute_dex(self, opcode)?,
            "DEY" => inc_dec::execute_dey(self, opcode)?,
            "LDA" => load_store::execute_lda(self, opcode)?,
            "LDX" => load_store::execute_ldx(self, opcode)?,
            "LDY" => load_store::execute_ldy(self, opcode)?,
            "STA" => load_store::execute_sta(self, opcode)?,
            "STX" => load_store::execute_stx(self, opcode)?,
            "STY" => load_store::execute_sty(self, opcode)?,
            "STZ" => load_store::execute_stz(self, opcode)?,
            "PHA" | "PHX" | "PHY" | "PHP" => stack::execute_push(self, opcode)?,
            "PLA" | "PLX" | "PLY" | "PLP" => stack::execute_pull(self, opcode)?,
            "TAX" | "TAY" | "TXA" | "TYA" | "TSX" | "TXS" => {
                transfer::execute_transfer(self, opcode)?
            }
            "RMB0" | "RMB1" | "RMB2" | "RMB3" | "RMB4" | "RMB5" | "RMB6" | "RMB7" => {
                zp_bits::execute_rmb(self, opcode)?
            }
            "SMB0" | "SMB1" | "SMB2" | "SMB3" | "SMB4" | "SMB5" | "SMB6" | "SMB7" => {
                zp_bits::execute_smb(self, opcode)?
            }
            "BBR0" | "BBR1" | "BBR2" | "BBR3" | "BBR4" | "BBR5" | "BBR6" | "BBR7" => {
                zp_bits::execute_bbr(self, opcode)?
            }
            "BBS0" | "BBS1" | "BBS2" | "BBS3" | "BBS4" | "BBS5" | "BBS6" | "BBS7" => {
                zp_bits::execute_bbs(self, opcode)?
            }
            other => unreachable!("opcode 0x{opcode:02X} has unknown mnemonic {other}"),
        }

        Ok(())
    }

    /// Runs the fetch-execute loop until `instructions` have retired.
    ///
    /// A budget of 0 returns immediately. Stops early with the fault if
    /// an instruction fails; partial instructions never retire.
    pub fn execute(&mut self, instructions: u64) -> Result<(), ExecutionError> {
        for _ in 0..instructions {
            self.step()?;
        }
        Ok(())
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 | SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV1BDIZC): N=7, V=6, unused=5 (always 1), B=4, D=3,
    /// I=2, Z=1, C=0.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Restores the status register from a packed byte, ignoring the B
    /// and unused bits (the PLP/RTI masking rule).
    pub(crate) fn set_status(&mut self, status: u8) {
        self.flag_n = (status & 0b1000_0000) != 0;
        self.flag_v = (status & 0b0100_0000) != 0;
        self.flag_d = (status & 0b0000_1000) != 0;
        self.flag_i = (status & 0b0000_0100) != 0;
        self.flag_z = (status & 0b0000_0010) != 0;
        self.flag_c = (status & 0b0000_0001) != 0;
    }

    /// Returns the ticks consumed since the last RESET.
    pub fn cycles(&self) -> u64 {
        self.cycles.get()
    }

    /// Returns the cycle counter, for elapsed-time conversion.
    pub fn cycle_counter(&self) -> &CycleCounter {
        &self.cycles
    }

    /// Reconfigures the emulated clock rate in MHz.
    pub fn set_clock_mhz(&mut self, mhz: f64) {
        self.cycles.set_clock_mhz(mhz);
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters (for testing) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This is how tests and the system shell seed memory before a run.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Helper Methods for Instruction Implementations ==========

    /// Reads the byte at PC through the bus and advances PC by 1.
    pub(crate) fn fetch_byte(&mut self) -> Result<u8, BusError> {
        let value = self.memory.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads a little-endian word at PC (low byte first) and advances PC
    /// by 2.
    pub(crate) fn fetch_word(&mut self) -> Result<u16, BusError> {
        let lo = self.fetch_byte()?;
        let hi = self.fetch_byte()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads a little-endian word from the zero page, with the high-byte
    /// fetch wrapping within the page.
    pub(crate) fn read_zp_pointer(&mut self, zp: u8) -> Result<u16, BusError> {
        let lo = self.memory.read(zp as u16)?;
        let hi = self.memory.read(zp.wrapping_add(1) as u16)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Resolves the effective address for an addressing mode, consuming
    /// the operand bytes at PC.
    ///
    /// Returns `(address, page_crossed)`. The handler decides whether the
    /// page-cross flag costs a cycle: read-type instructions and the
    /// 65C02 shift/rotate abs,X forms add +1; write-type forms and
    /// INC/DEC abs,X already carry the worst case in their base cost.
    pub(crate) fn operand_address(
        &mut self,
        mode: AddressingMode,
    ) -> Result<(u16, bool), BusError> {
        match mode {
            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte()? as u16;
                Ok((addr, false))
            }
            AddressingMode::ZeroPageX => {
                // The sum wraps within the zero page
                let base = self.fetch_byte()?;
                Ok((base.wrapping_add(self.x) as u16, false))
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte()?;
                Ok((base.wrapping_add(self.y) as u16, false))
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word()?;
                Ok((addr, false))
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word()?;
                let addr = base.wrapping_add(self.x as u16);
                let page_crossed = (base & 0xFF00) != (addr & 0xFF00);
                Ok((addr, page_crossed))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word()?;
                let addr = base.wrapping_add(self.y as u16);
                let page_crossed = (base & 0xFF00) != (addr & 0xFF00);
                Ok((addr, page_crossed))
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte()?.wrapping_add(self.x);
                let addr = self.read_zp_pointer(zp)?;
                Ok((addr, false))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte()?;
                let base = self.read_zp_pointer(zp)?;
                let addr = base.wrapping_add(self.y as u16);
                let page_crossed = (base & 0xFF00) != (addr & 0xFF00);
                Ok((addr, page_crossed))
            }
            AddressingMode::ZeroPageIndirect => {
                let zp = self.fetch_byte()?;
                let addr = self.read_zp_pointer(zp)?;
                Ok((addr, false))
            }
            AddressingMode::Indirect => {
                // JMP (abs). The 65C02 fixes the NMOS page-wrap bug: the
                // high byte of a pointer at 0xXXFF is read from the next
                // page.
                let ptr = self.fetch_word()?;
                let lo = self.memory.read(ptr)?;
                let hi = self.memory.read(ptr.wrapping_add(1))?;
                Ok((u16::from_le_bytes([lo, hi]), false))
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                // JMP (abs,X)
                let ptr = self.fetch_word()?.wrapping_add(self.x as u16);
                let lo = self.memory.read(ptr)?;
                let hi = self.memory.read(ptr.wrapping_add(1))?;
                Ok((u16::from_le_bytes([lo, hi]), false))
            }
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::ZeroPageRelative => {
                unreachable!("mode {mode:?} has no effective address")
            }
        }
    }

    /// Resolves the operand value for a read-type instruction, consuming
    /// the operand bytes at PC.
    ///
    /// Returns `(value, page_crossed)`; the data access is last in the
    /// trace, after the operand and pointer reads.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> Result<(u8, bool), BusError> {
        match mode {
            AddressingMode::Immediate => {
                let value = self.fetch_byte()?;
                Ok((value, false))
            }
            _ => {
                let (addr, page_crossed) = self.operand_address(mode)?;
                let value = self.memory.read(addr)?;
                Ok((value, page_crossed))
            }
        }
    }

    /// Pushes a byte: write to 0x0100 | SP, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), BusError> {
        self.memory.write(0x0100 | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pulls a byte: increment SP, then read from 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> Result<u8, BusError> {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | self.sp as u16)
    }

    /// Sets Z from (value == 0) and N from bit 7 of value.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }
}
