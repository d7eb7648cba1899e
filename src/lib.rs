//! # W65C02 CPU Emulator Core
//!
//! A cycle-accurate WDC 65C02 (CMOS 6502) emulator built around a
//! region-routed memory bus with bus-level execution tracing.
//!
//! This crate provides the instruction interpreter (all documented CMOS
//! opcodes plus the Rockwell/WDC bit instructions), a memory bus that routes
//! 16-bit addresses to RAM, I/O-register, and EEPROM regions, and a system
//! shell that loads a ROM image, resets the CPU through the 0xFFFC/0xFFFD
//! vector, and runs a bounded instruction budget while recording every bus
//! access to a trace file.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib65c02::{Bus, Region, CPU, MemoryBus};
//!
//! // A 64KB all-RAM bus, the configuration used by most unit tests.
//! let bus = Bus::new(Some(Region::new(0x0000, 0xFFFF)), None, None).unwrap();
//! let mut cpu = CPU::new(bus);
//!
//! // Point the reset vector at 0x8000 and reset.
//! cpu.memory_mut().poke(0xFFFC, 0x00);
//! cpu.memory_mut().poke(0xFFFD, 0x80);
//! cpu.reset().unwrap();
//!
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//! assert!(cpu.flag_i());
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: a single 256-entry [`OPCODE_TABLE`] carries
//!   mnemonic, addressing mode, base cycle cost, and byte length for every
//!   opcode; a small set of class handlers consumes it.
//! - **Bus seam**: the CPU is generic over the [`MemoryBus`] trait, so tests
//!   can run against [`FlatMemory`] while the system shell runs against the
//!   three-region [`Bus`].
//! - **Cycle accuracy**: every instruction charges its reference cycle count,
//!   including page-cross and branch-taken penalties, to a 64-bit
//!   [`CycleCounter`] that also converts ticks to advisory wall time.
//! - **Traceability**: with logging enabled, the bus emits one record per
//!   access in exactly the order the addressing mode dictates, so a run can
//!   be compared byte-for-byte against a hardware reference log.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, RESET, and the fetch-execute loop
//! - `bus` - memory regions and the routing/tracing bus
//! - `memory` - the MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - the opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `cycles` - tick accumulator and clock-rate conversion
//! - `trace` - trace record format and log comparison
//! - `system` - region configuration, ROM loading, bounded execution

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod cycles;
pub mod memory;
pub mod opcodes;
pub mod system;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::{Bus, BusError, Region};
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use cycles::CycleCounter;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use system::{ConfigError, System, SystemConfig, SystemError};
pub use trace::{AccessKind, TraceRecord};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Both variants are fatal: they terminate `execute` before the faulting
/// instruction retires, and the caller receives the structured failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// A bus access touched an address outside every configured region.
    #[error(transparent)]
    Bus(#[from] BusError),

    /// The opcode occupies a slot this model does not implement (WAI, STP).
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),
}
