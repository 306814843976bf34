// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::*;
use super::*;

fn setup() -> (CPU, Bus) {
    let mut cpu = CPU::new();
    cpu.set_pc(0x80000008);
    (cpu, create_bus(&[]))
}

#[test]
fn test_lui() {
    let (mut cpu, mut bus) = setup();
    exec(&mut cpu, &mut bus, lui(8, 0x1F80)).unwrap();
    assert_eq!(cpu.reg(8).unwrap(), 0x1F800000);
}

#[test]
fn test_ori_zero_extends() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0x12340000).unwrap();
    exec(&mut cpu, &mut bus, ori(2, 1, 0xFFFF)).unwrap();
    assert_eq!(cpu.reg(2).unwrap(), 0x1234FFFF);
}

#[test]
fn test_or() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0xF0F00000).unwrap();
    cpu.set_reg(2, 0x0000F0F0).unwrap();
    exec(&mut cpu, &mut bus, or(3, 1, 2)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 0xF0F0F0F0);
}

#[test]
fn test_addiu_wraps() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0xFFFFFFFF).unwrap();
    exec(&mut cpu, &mut bus, addiu(2, 1, 1)).unwrap();
    assert_eq!(cpu.reg(2).unwrap(), 0);

    exec(&mut cpu, &mut bus, addiu(3, 0, -5)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), (-5i32) as u32);
}

#[test]
fn test_addi_wraps_by_default() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0x7FFFFFFF).unwrap();
    exec(&mut cpu, &mut bus, addi(2, 1, 1)).unwrap();
    assert_eq!(cpu.reg(2).unwrap(), 0x80000000);
}

#[test]
fn test_addi_trap_policy() {
    let mut cpu = CPU::with_overflow_policy(OverflowPolicy::Trap);
    let mut bus = create_bus(&[]);
    cpu.set_pc(0x80000008);

    // No overflow: behaves like ADDIU
    cpu.set_reg(1, 10).unwrap();
    exec(&mut cpu, &mut bus, addi(2, 1, -3)).unwrap();
    assert_eq!(cpu.reg(2).unwrap(), 7);

    // Overflow: fails and leaves rt alone
    cpu.set_reg(1, 0x7FFFFFFF).unwrap();
    let result = exec(&mut cpu, &mut bus, addi(2, 1, 1));
    assert!(matches!(
        result,
        Err(EmulatorError::ArithmeticOverflow { pc: 0x80000000 })
    ));
    assert_eq!(cpu.reg(2).unwrap(), 7);
}

#[test]
fn test_addu_wraps() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0xFFFFFFFF).unwrap();
    cpu.set_reg(2, 2).unwrap();
    exec(&mut cpu, &mut bus, addu(3, 1, 2)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 1);
}

#[test]
fn test_slt_is_signed() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, (-1i32) as u32).unwrap();
    cpu.set_reg(2, 1).unwrap();

    exec(&mut cpu, &mut bus, slt(3, 1, 2)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 1);

    exec(&mut cpu, &mut bus, slt(3, 2, 1)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 0);
}

#[test]
fn test_sltu_is_unsigned() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0xFFFFFFFF).unwrap();
    cpu.set_reg(2, 1).unwrap();

    exec(&mut cpu, &mut bus, sltu(3, 1, 2)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 0);

    exec(&mut cpu, &mut bus, sltu(3, 2, 1)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 1);
}

#[test]
fn test_sll() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0x80000001).unwrap();
    exec(&mut cpu, &mut bus, sll(2, 1, 4)).unwrap();
    assert_eq!(cpu.reg(2).unwrap(), 0x00000010);
}

#[test]
fn test_writes_to_r0_are_dropped() {
    let (mut cpu, mut bus) = setup();
    exec(&mut cpu, &mut bus, lui(0, 0xFFFF)).unwrap();
    exec(&mut cpu, &mut bus, addiu(0, 0, 1)).unwrap();
    assert_eq!(cpu.reg(0).unwrap(), 0);
}

#[test]
fn test_j_stays_in_region() {
    let (mut cpu, mut bus) = setup();
    exec(&mut cpu, &mut bus, j(0x00000100)).unwrap();
    assert_eq!(cpu.pc(), 0x80000100);
}

#[test]
fn test_bne_taken() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 1).unwrap();
    cpu.set_reg(2, 2).unwrap();

    // Branch at 0x80000000: target = 0x80000004 + (4 << 2)
    exec(&mut cpu, &mut bus, bne(1, 2, 4)).unwrap();
    assert_eq!(cpu.pc(), 0x80000014);
}

#[test]
fn test_bne_backwards() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 1).unwrap();
    cpu.set_reg(2, 2).unwrap();

    // Branch at 0x80000000 to itself
    exec(&mut cpu, &mut bus, bne(1, 2, -1)).unwrap();
    assert_eq!(cpu.pc(), 0x80000000);
}

#[test]
fn test_bne_not_taken() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 7).unwrap();
    cpu.set_reg(2, 7).unwrap();

    exec(&mut cpu, &mut bus, bne(1, 2, 4)).unwrap();
    assert_eq!(cpu.pc(), 0x80000008);
}

#[test]
fn test_sw_lw() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0x80000100).unwrap();
    cpu.set_reg(2, 0xCAFEBABE).unwrap();

    exec(&mut cpu, &mut bus, sw(2, 1, 0x10)).unwrap();
    assert_eq!(bus.load32(0x00000110).unwrap(), 0xCAFEBABE);

    // Negative offset reaches the same word
    cpu.set_reg(4, 0xA0000120).unwrap();
    exec(&mut cpu, &mut bus, lw(3, 4, -0x10)).unwrap();
    assert_eq!(cpu.reg(3).unwrap(), 0xCAFEBABE);
}

#[test]
fn test_sw_unaligned_fails() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0x80000102).unwrap();

    let result = exec(&mut cpu, &mut bus, sw(2, 1, 0));
    assert!(matches!(
        result,
        Err(EmulatorError::UnalignedAccess {
            address: 0x80000102,
            size: 4
        })
    ));
}

#[test]
fn test_lw_unmapped_fails_and_keeps_register() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0x10000000).unwrap();
    cpu.set_reg(2, 0x11111111).unwrap();

    let result = exec(&mut cpu, &mut bus, lw(2, 1, 0));
    assert!(matches!(result, Err(EmulatorError::UnmappedAddress { .. })));
    assert_eq!(cpu.reg(2).unwrap(), 0x11111111);
}

#[test]
fn test_sw_to_bios_fails() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0xBFC00000).unwrap();

    let result = exec(&mut cpu, &mut bus, sw(2, 1, 8));
    assert!(matches!(
        result,
        Err(EmulatorError::ReadOnlyViolation { offset: 8 })
    ));
}

#[test]
fn test_mtc0() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(5, 0x12345678).unwrap();
    exec(&mut cpu, &mut bus, mtc0(5, 14)).unwrap();
    assert_eq!(cpu.cop0().reg(Cop0::EPC).unwrap(), 0x12345678);
}

#[test]
fn test_unsupported_opcode() {
    let (mut cpu, mut bus) = setup();
    cpu.set_reg(1, 0xFF).unwrap();
    cpu.set_reg(2, 0x0F).unwrap();

    let result = exec(&mut cpu, &mut bus, xor(3, 1, 2));
    assert!(matches!(
        result,
        Err(EmulatorError::UnsupportedOpcode { name: "xor" })
    ));
    assert_eq!(cpu.reg(3).unwrap(), 0xDEADC0DE);

    let result = exec(&mut cpu, &mut bus, jal(0x100));
    assert!(matches!(
        result,
        Err(EmulatorError::UnsupportedOpcode { name: "jal" })
    ));
    assert_eq!(cpu.reg(31).unwrap(), 0xDEADC0DE);
    assert_eq!(cpu.pc(), 0x80000008);
}
