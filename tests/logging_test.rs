//! Tests for bus-level execution tracing: record format, per-instruction
//! access ordering, and the line-ending-tolerant log comparison.

use lib65c02::trace::logs_equivalent;
use lib65c02::{Bus, Region, CPU};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// An in-memory trace sink the test can read back.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// All-RAM bus with logging wired to a shared buffer.
fn traced_cpu() -> (CPU<Bus>, SharedBuf) {
    let mut bus = Bus::new(Some(Region::new(0x0000, 0xFFFF)), None, None).unwrap();
    bus.poke(0xFFFC, 0x00);
    bus.poke(0xFFFD, 0x80);

    let buf = SharedBuf::default();
    bus.set_trace_sink(Box::new(buf.clone()));

    let mut cpu = CPU::new(bus);
    cpu.reset().unwrap();
    (cpu, buf)
}

#[test]
fn test_store_trace_shows_single_write() {
    // STA $6000 with A=0x42: three operand reads then exactly one write
    let (mut cpu, buf) = traced_cpu();
    cpu.set_a(0x42);
    cpu.memory_mut().poke(0x8000, 0x8D);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x60);

    cpu.memory_mut().log = true;
    cpu.execute(1).unwrap();
    cpu.memory_mut().log = false;

    assert_eq!(
        buf.contents(),
        "R 8000 8D\nR 8001 00\nR 8002 60\nW 6000 42\n"
    );
    assert_eq!(cpu.cycles(), 4);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_indirect_y_trace_order() {
    // Operand, pointer low, pointer high, then the data access last
    let (mut cpu, buf) = traced_cpu();
    cpu.set_y(0x10);
    cpu.memory_mut().poke(0x8000, 0xB1);
    cpu.memory_mut().poke(0x8001, 0x10);
    cpu.memory_mut().poke(0x0010, 0xF0);
    cpu.memory_mut().poke(0x0011, 0x20);
    cpu.memory_mut().poke(0x2100, 0x55);

    cpu.memory_mut().log = true;
    cpu.execute(1).unwrap();
    cpu.memory_mut().log = false;

    assert_eq!(
        buf.contents(),
        "R 8000 B1\nR 8001 10\nR 0010 F0\nR 0011 20\nR 2100 55\n"
    );
    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_jsr_trace_reads_operands_before_pushes() {
    let (mut cpu, buf) = traced_cpu();
    cpu.memory_mut().poke(0x8000, 0x20);
    cpu.memory_mut().poke(0x8001, 0x34);
    cpu.memory_mut().poke(0x8002, 0x12);

    cpu.memory_mut().log = true;
    cpu.execute(1).unwrap();
    cpu.memory_mut().log = false;

    assert_eq!(
        buf.contents(),
        "R 8000 20\nR 8001 34\nR 8002 12\nW 01FD 80\nW 01FC 02\n"
    );
}

#[test]
fn test_rmw_trace_reads_then_writes() {
    // INC $42: operand read, data read, data write
    let (mut cpu, buf) = traced_cpu();
    cpu.memory_mut().poke(0x8000, 0xE6);
    cpu.memory_mut().poke(0x8001, 0x42);
    cpu.memory_mut().poke(0x0042, 0x0F);

    cpu.memory_mut().log = true;
    cpu.execute(1).unwrap();
    cpu.memory_mut().log = false;

    assert_eq!(
        buf.contents(),
        "R 8000 E6\nR 8001 42\nR 0042 0F\nW 0042 10\n"
    );
}

#[test]
fn test_log_flag_off_emits_nothing() {
    let (mut cpu, buf) = traced_cpu();
    cpu.memory_mut().poke(0x8000, 0xEA);

    // log stays false
    cpu.execute(1).unwrap();

    assert_eq!(buf.contents(), "");
}

#[test]
fn test_raw_peek_poke_are_untraced() {
    let (mut cpu, buf) = traced_cpu();
    cpu.memory_mut().log = true;

    cpu.memory_mut().poke(0x1234, 0x42);
    assert_eq!(cpu.memory().peek(0x1234), Some(0x42));

    assert_eq!(buf.contents(), "");
}

#[test]
fn test_trace_comparison_tolerates_line_endings() {
    let (mut cpu, buf) = traced_cpu();
    cpu.memory_mut().poke(0x8000, 0xA9);
    cpu.memory_mut().poke(0x8001, 0x80);

    cpu.memory_mut().log = true;
    cpu.execute(1).unwrap();

    // The same log captured on a CR-LF platform must compare equal
    let reference = "R 8000 A9\r\nR 8001 80\r\n";
    assert!(logs_equivalent(buf.contents().as_bytes(), reference.as_bytes()));

    let different = "R 8000 A9\r\nR 8001 81\r\n";
    assert!(!logs_equivalent(buf.contents().as_bytes(), different.as_bytes()));
}
