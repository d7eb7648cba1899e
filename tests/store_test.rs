//! Comprehensive tests for the store instructions STA, STX, STY, and the
//! CMOS STZ.
//!
//! Stores affect no flags, and their indexed forms always pay the
//! worst-case cycle cost whether or not the indexing crosses a page.

use lib65c02::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.poke(0xFFFC, 0x00);
    memory.poke(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

fn check_store(
    cpu: &mut CPU<FlatMemory>,
    target: u16,
    expected_value: u8,
    expected_cycles: u64,
    expected_bytes: u16,
) {
    let status_before = cpu.status();
    let pc_before = cpu.pc();

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(target), Some(expected_value));
    assert_eq!(cpu.cycles(), expected_cycles);
    assert_eq!(cpu.pc().wrapping_sub(pc_before), expected_bytes);
    // No flags affected by stores
    assert_eq!(cpu.status(), status_before);
}

// ========== STA ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.memory_mut().poke(0x8000, 0x85);
    cpu.memory_mut().poke(0x8001, 0x10);
    check_store(&mut cpu, 0x0010, 0x42, 3, 2);
}

#[test]
fn test_sta_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.set_x(0x05);
    cpu.memory_mut().poke(0x8000, 0x95);
    cpu.memory_mut().poke(0x8001, 0x10);
    check_store(&mut cpu, 0x0015, 0x42, 4, 2);
}

#[test]
fn test_sta_absolute() {
    // Writing 0x42 to $6000 via STA abs: 4 cycles, PC advances by 3
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.memory_mut().poke(0x8000, 0x8D);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x60);
    check_store(&mut cpu, 0x6000, 0x42, 4, 3);
}

#[test]
fn test_sta_absolute_x_always_five_cycles() {
    // No page cross: still 5 cycles (write-type worst case)
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_x(0x01);
    cpu.memory_mut().poke(0x8000, 0x9D);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x20);
    check_store(&mut cpu, 0x2001, 0x11, 5, 3);

    // Page cross: same 5 cycles
    let mut cpu = setup_cpu();
    cpu.set_a(0x22);
    cpu.set_x(0x20);
    cpu.memory_mut().poke(0x8000, 0x9D);
    cpu.memory_mut().poke(0x8001, 0xF0);
    cpu.memory_mut().poke(0x8002, 0x20);
    check_store(&mut cpu, 0x2110, 0x22, 5, 3);
}

#[test]
fn test_sta_absolute_y_always_five_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x33);
    cpu.set_y(0xFF);
    cpu.memory_mut().poke(0x8000, 0x99);
    cpu.memory_mut().poke(0x8001, 0x80);
    cpu.memory_mut().poke(0x8002, 0x20);
    check_store(&mut cpu, 0x217F, 0x33, 5, 3);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x44);
    cpu.set_x(0x02);
    cpu.memory_mut().poke(0x8000, 0x81);
    cpu.memory_mut().poke(0x8001, 0x20);
    cpu.memory_mut().poke(0x0022, 0x00);
    cpu.memory_mut().poke(0x0023, 0x30);
    check_store(&mut cpu, 0x3000, 0x44, 6, 2);
}

#[test]
fn test_sta_indirect_y_always_six_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x55);
    cpu.set_y(0x10);
    cpu.memory_mut().poke(0x8000, 0x91);
    cpu.memory_mut().poke(0x8001, 0x40);
    cpu.memory_mut().poke(0x0040, 0xF8);
    cpu.memory_mut().poke(0x0041, 0x20);
    // 0x20F8 + 0x10 crosses into 0x2108; cost stays 6
    check_store(&mut cpu, 0x2108, 0x55, 6, 2);
}

#[test]
fn test_sta_zero_page_indirect() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x66);
    cpu.memory_mut().poke(0x8000, 0x92);
    cpu.memory_mut().poke(0x8001, 0x40);
    cpu.memory_mut().poke(0x0040, 0x00);
    cpu.memory_mut().poke(0x0041, 0x30);
    check_store(&mut cpu, 0x3000, 0x66, 5, 2);
}

// ========== STX / STY ==========

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x42);
    cpu.set_y(0x03);
    cpu.memory_mut().poke(0x8000, 0x96);
    cpu.memory_mut().poke(0x8001, 0x10);
    check_store(&mut cpu, 0x0013, 0x42, 4, 2);
}

#[test]
fn test_stx_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x99);
    cpu.memory_mut().poke(0x8000, 0x8E);
    cpu.memory_mut().poke(0x8001, 0x00);
    cpu.memory_mut().poke(0x8002, 0x25);
    check_store(&mut cpu, 0x2500, 0x99, 4, 3);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x24);
    cpu.set_x(0x01);
    cpu.memory_mut().poke(0x8000, 0x94);
    cpu.memory_mut().poke(0x8001, 0x10);
    check_store(&mut cpu, 0x0011, 0x24, 4, 2);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x77);
    cpu.memory_mut().poke(0x8000, 0x8C);
    cpu.memory_mut().poke(0x8001, 0x34);
    cpu.memory_mut().poke(0x8002, 0x12);
    check_store(&mut cpu, 0x1234, 0x77, 4, 3);
}

// ========== STZ (CMOS) ==========

#[test]
fn test_stz_clears_memory() {
    let cases: [(u8, u16, &[u8], u64); 4] = [
        (0x64, 0x0010, &[0x10], 3),       // STZ zp
        (0x74, 0x0015, &[0x10], 4),       // STZ zp,X (X=5)
        (0x9C, 0x2500, &[0x00, 0x25], 4), // STZ abs
        (0x9E, 0x2505, &[0x00, 0x25], 5), // STZ abs,X (X=5)
    ];
    for (opcode, target, operands, cycles) in cases {
        let mut cpu = setup_cpu();
        cpu.set_x(0x05);
        cpu.memory_mut().poke(target, 0xFF);
        cpu.memory_mut().poke(0x8000, opcode);
        for (i, b) in operands.iter().enumerate() {
            cpu.memory_mut().poke(0x8001 + i as u16, *b);
        }
        check_store(&mut cpu, target, 0x00, cycles, 1 + operands.len() as u16);
    }
}

#[test]
fn test_stz_does_not_touch_flags_even_for_zero() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);
    cpu.memory_mut().poke(0x8000, 0x64);
    cpu.memory_mut().poke(0x8001, 0x10);

    cpu.step().unwrap();

    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}
