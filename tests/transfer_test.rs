//! Tests for the register transfer instructions TAX, TAY, TXA, TYA, TSX,
//! and TXS.

use lib65c02::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.poke(0xFFFC, 0x00);
    memory.poke(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.memory_mut().poke(0x8000, 0xAA);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 2);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_tay_zero_sets_z() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);
    cpu.set_y(0xFF);
    cpu.set_flag_n(true);
    cpu.memory_mut().poke(0x8000, 0xA8);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x42);
    cpu.memory_mut().poke(0x8000, 0x8A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu();
    cpu.set_y(0xFF);
    cpu.memory_mut().poke(0x8000, 0x98);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xF0);
    cpu.memory_mut().poke(0x8000, 0xBA);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xF0);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00); // would set Z if TXS updated flags
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);
    cpu.memory_mut().poke(0x8000, 0x9A);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_transfers_preserve_other_flags() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);
    cpu.memory_mut().poke(0x8000, 0xAA); // TAX

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
}
