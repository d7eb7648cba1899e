//! Tests for JMP (all three forms), JSR, RTS, and RTI.

use lib65c02::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.poke(0xFFFC, 0x00);
    memory.poke(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().poke(0x8000, 0x4C);
    cpu.memory_mut().poke(0x8001, 0x34);
    cpu.memory_mut().poke(0x8002, 0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().poke(0x8000, 0x6C);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x90);
    cpu.memory_mut().poke(0x9000, 0x78);
    cpu.memory_mut().poke(0x9001, 0x56);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x5678);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_jmp_indirect_page_boundary_fixed() {
    // NMOS read the high byte from $90FF/$9000; the 65C02 reads
    // $90FF/$9100
    let mut cpu = setup_cpu();
    cpu.memory_mut().poke(0x8000, 0x6C);
    cpu.memory_mut().poke(0x8001, 0xFF);
    cpu.memory_mut().poke(0x8002, 0x90);
    cpu.memory_mut().poke(0x90FF, 0x78);
    cpu.memory_mut().poke(0x9100, 0x56); // correct high byte
    cpu.memory_mut().poke(0x9000, 0xEE); // NMOS would have read this

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x5678);
}

#[test]
fn test_jmp_absolute_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x04);
    cpu.memory_mut().poke(0x8000, 0x7C);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x90);
    cpu.memory_mut().poke(0x9004, 0x21);
    cpu.memory_mut().poke(0x9005, 0x43);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x4321);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_jmp_affects_no_flags() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    cpu.memory_mut().poke(0x8000, 0x4C);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x90);

    let status_before = cpu.status();
    cpu.step().unwrap();

    assert_eq!(cpu.status(), status_before);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_address_of_last_byte() {
    // JSR $1234 from 0x8000: stack gets 0x80 then 0x02 (the address of
    // the JSR's third byte), SP drops by 2, PC lands on the target
    let mut cpu = setup_cpu();
    cpu.memory_mut().poke(0x8000, 0x20);
    cpu.memory_mut().poke(0x8001, 0x34);
    cpu.memory_mut().poke(0x8002, 0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(cpu.memory().peek(0x01FD), Some(0x80)); // high byte first
    assert_eq!(cpu.memory().peek(0x01FC), Some(0x02));
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_rts_returns_past_the_jsr() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().poke(0x8000, 0x20); // JSR $1234
    cpu.memory_mut().poke(0x8001, 0x34);
    cpu.memory_mut().poke(0x8002, 0x12);
    cpu.memory_mut().poke(0x1234, 0x60); // RTS

    cpu.execute(2).unwrap();

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 6 + 6);
}

#[test]
fn test_jsr_rts_nested() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().poke(0x8000, 0x20); // JSR $9000
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x90);
    cpu.memory_mut().poke(0x9000, 0x20); // JSR $A000
    cpu.memory_mut().poke(0x9001, 0x00);
    cpu.memory_mut().poke(0x9002, 0xA0);
    cpu.memory_mut().poke(0xA000, 0x60); // RTS -> 0x9003
    cpu.memory_mut().poke(0x9003, 0x60); // RTS -> 0x8003

    cpu.execute(4).unwrap();

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

// ========== RTI ==========

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = setup_cpu();
    // Hand-build an interrupt frame: PC 0x9000, status with C and Z set
    cpu.set_sp(0xFA);
    cpu.memory_mut().poke(0x01FB, 0b0010_0011); // status
    cpu.memory_mut().poke(0x01FC, 0x00); // PC low
    cpu.memory_mut().poke(0x01FD, 0x90); // PC high
    cpu.memory_mut().poke(0x8000, 0x40); // RTI

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x9000); // no +1, unlike RTS
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_rti_masks_b_and_unused() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFA);
    cpu.memory_mut().poke(0x01FB, 0xFF);
    cpu.memory_mut().poke(0x01FC, 0x00);
    cpu.memory_mut().poke(0x01FD, 0x90);
    cpu.memory_mut().poke(0x8000, 0x40);

    cpu.step().unwrap();

    assert!(!cpu.flag_b());
    assert!(cpu.flag_n() && cpu.flag_v() && cpu.flag_d());
}
