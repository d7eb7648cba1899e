//! # System Shell
//!
//! Construction and orchestration of a complete emulated machine: the
//! three-region bus, the CPU connected to it, ROM image loading, RESET
//! through the EEPROM-resident vector, and bounded trace-logged execution.
//!
//! A `System` is built from a validated [`SystemConfig`]. Any region may
//! be omitted; the all-RAM configuration (`ram: Some((0x0000, 0xFFFF))`,
//! everything else `None`) is the one unit tests use.

use crate::{Bus, ExecutionError, Region, CPU};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration rejected at construction time.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A region's low bound exceeds its high bound.
    #[error("{region} region bounds are inverted: 0x{low:04X} > 0x{high:04X}")]
    InvertedBounds {
        region: &'static str,
        low: u16,
        high: u16,
    },

    /// Two regions share at least one address.
    #[error("{first} and {second} regions overlap")]
    OverlappingRegions {
        first: &'static str,
        second: &'static str,
    },

    /// The clock frequency is zero or negative.
    #[error("clock frequency must be positive, got {mhz} MHz")]
    InvalidClock { mhz: f64 },
}

/// Failures surfaced by the system shell.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The ROM image file could not be read.
    #[error("ROM image {path}: {source}")]
    RomRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The ROM image length does not match the EEPROM region size.
    #[error("ROM image {path} is {found} bytes; EEPROM region expects {expected}")]
    RomSize {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// A ROM image was supplied but no EEPROM region is configured.
    #[error("no EEPROM region configured")]
    RomRegionAbsent,

    /// A fatal fault terminated execution.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Address bounds for the three regions plus the emulated clock rate.
///
/// Bounds are inclusive on both ends. `None` omits a region entirely (the
/// original machine description used `(-1, -1)` pairs for the same
/// purpose); gaps between regions are permitted and fault when accessed.
///
/// # Examples
///
/// ```rust
/// use lib65c02::SystemConfig;
///
/// // 16KB RAM, 8KB of I/O registers, 32KB EEPROM, 1 MHz clock.
/// let config = SystemConfig {
///     ram: Some((0x0000, 0x3FFF)),
///     io: Some((0x6000, 0x7FFF)),
///     rom: Some((0x8000, 0xFFFF)),
///     clock_mhz: 1.0,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// RAM region bounds, or `None` for no RAM.
    pub ram: Option<(u16, u16)>,

    /// I/O-register region bounds, or `None` for no I/O.
    pub io: Option<(u16, u16)>,

    /// EEPROM region bounds, or `None` for no ROM.
    pub rom: Option<(u16, u16)>,

    /// Emulated clock rate in MHz; advisory pacing only.
    pub clock_mhz: f64,
}

impl SystemConfig {
    /// The all-RAM unit-test configuration: 64KB of RAM, no I/O, no ROM.
    pub fn all_ram(clock_mhz: f64) -> Self {
        Self {
            ram: Some((0x0000, 0xFFFF)),
            io: None,
            rom: None,
            clock_mhz,
        }
    }

    /// Checks bounds ordering and the clock rate.
    ///
    /// Region overlap is rejected by [`Bus::new`] when the system is
    /// built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [("ram", self.ram), ("io", self.io), ("rom", self.rom)];
        for (region, bounds) in named {
            if let Some((low, high)) = bounds {
                if low > high {
                    return Err(ConfigError::InvertedBounds { region, low, high });
                }
            }
        }
        if !(self.clock_mhz > 0.0) {
            return Err(ConfigError::InvalidClock {
                mhz: self.clock_mhz,
            });
        }
        Ok(())
    }
}

/// A complete emulated machine: CPU wired to a three-region bus.
///
/// # Examples
///
/// ```rust
/// use lib65c02::{System, SystemConfig};
///
/// let mut system = System::new(SystemConfig::all_ram(1.0)).unwrap();
/// let cpu = system.cpu_mut();
///
/// // LDA #$80 at 0xFFFC (the all-RAM fixture starts execution there)
/// cpu.memory_mut().poke(0xFFFC, 0xA9);
/// cpu.memory_mut().poke(0xFFFD, 0x80);
/// cpu.reset_to(0xFFFC);
/// cpu.execute(1).unwrap();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// ```
pub struct System {
    cpu: CPU<Bus>,
}

impl System {
    /// Validates the configuration and builds the machine.
    pub fn new(config: SystemConfig) -> Result<Self, SystemError> {
        config.validate()?;
        let bus = Bus::new(
            config.ram.map(|(low, high)| Region::new(low, high)),
            config.io.map(|(low, high)| Region::new(low, high)),
            config.rom.map(|(low, high)| Region::new(low, high)),
        )?;
        let mut cpu = CPU::new(bus);
        cpu.set_clock_mhz(config.clock_mhz);
        Ok(Self { cpu })
    }

    /// The CPU and, through it, the bus.
    pub fn cpu(&self) -> &CPU<Bus> {
        &self.cpu
    }

    /// Mutable access to the CPU and, through it, the bus.
    pub fn cpu_mut(&mut self) -> &mut CPU<Bus> {
        &mut self.cpu
    }

    /// Loads a ROM image file into the EEPROM region.
    ///
    /// The file is flat binary: byte `i` lands at `rom_low + i`, and the
    /// file length must equal the region size exactly.
    pub fn load_rom(&mut self, path: &Path) -> Result<(), SystemError> {
        let image = std::fs::read(path).map_err(|source| SystemError::RomRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_rom_image(&image, path)
    }

    fn load_rom_image(&mut self, image: &[u8], path: &Path) -> Result<(), SystemError> {
        let rom = self
            .cpu
            .memory_mut()
            .rom_mut()
            .ok_or(SystemError::RomRegionAbsent)?;
        if image.len() != rom.len() {
            return Err(SystemError::RomSize {
                path: path.to_path_buf(),
                expected: rom.len(),
                found: image.len(),
            });
        }
        rom.load_image(image);
        log::debug!("loaded {} byte ROM image from {}", image.len(), path.display());
        Ok(())
    }

    /// Loads an in-memory ROM image, for tests that build programs on the
    /// fly. Same size contract as [`load_rom`](System::load_rom).
    pub fn load_rom_bytes(&mut self, image: &[u8]) -> Result<(), SystemError> {
        self.load_rom_image(image, Path::new("<memory>"))
    }

    /// Loads a ROM image, resets through the 0xFFFC/0xFFFD vector, and
    /// executes `instructions`, tracing every bus access to `out_file`
    /// when `logging` is set.
    ///
    /// A trace file that cannot be opened disables logging for the run
    /// but does not abort it.
    pub fn execute_program(
        &mut self,
        program: &Path,
        instructions: u64,
        logging: bool,
        out_file: &Path,
    ) -> Result<(), SystemError> {
        self.load_rom(program)?;
        self.cpu.reset()?;

        let bus = self.cpu.memory_mut();
        bus.log = logging;
        if logging && !bus.open_trace_file(out_file) {
            bus.log = false;
        }

        let result = self.cpu.execute(instructions);
        self.cpu.memory_mut().flush_trace();
        result.map_err(SystemError::from)
    }
}
