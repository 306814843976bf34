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

//! Test ROM utilities and small test programs

pub const T0: u32 = 8;
pub const T1: u32 = 9;
pub const T2: u32 = 10;
pub const T3: u32 = 11;

#[allow(dead_code)]
pub fn lui(t: u32, imm: u16) -> u32 {
    (0x0F << 26) | (t << 16) | imm as u32
}

#[allow(dead_code)]
pub fn ori(t: u32, s: u32, imm: u16) -> u32 {
    (0x0D << 26) | (s << 21) | (t << 16) | imm as u32
}

#[allow(dead_code)]
pub fn addiu(t: u32, s: u32, imm: i16) -> u32 {
    (0x09 << 26) | (s << 21) | (t << 16) | (imm as u16) as u32
}

#[allow(dead_code)]
pub fn j(addr: u32) -> u32 {
    (0x02 << 26) | ((addr >> 2) & 0x03FF_FFFF)
}

#[allow(dead_code)]
pub fn bne(s: u32, t: u32, imm: i16) -> u32 {
    (0x05 << 26) | (s << 21) | (t << 16) | (imm as u16) as u32
}

#[allow(dead_code)]
pub fn lw(t: u32, base: u32, offset: i16) -> u32 {
    (0x23 << 26) | (base << 21) | (t << 16) | (offset as u16) as u32
}

#[allow(dead_code)]
pub fn sw(t: u32, base: u32, offset: i16) -> u32 {
    (0x2B << 26) | (base << 21) | (t << 16) | (offset as u16) as u32
}

#[allow(dead_code)]
pub fn mtc0(t: u32, d: u32) -> u32 {
    (0x10 << 26) | (0x04 << 21) | (t << 16) | (d << 11)
}

pub const NOP: u32 = 0x00000000;

/// Test program: build 0x1F801000 in $t0 and store it to itself
#[allow(dead_code)]
pub fn test_program_boot_smoke() -> Vec<u32> {
    vec![
        0x3C081F80, // LUI $t0, 0x1F80
        0x35081000, // ORI $t0, $t0, 0x1000
        0xAD080000, // SW  $t0, 0($t0)
    ]
}

/// Test program: jump with a live delay slot
///
/// Jumps from the reset vector to 0x1FC00100. The ADDIU in the delay slot
/// sets $t0 = 1, the one at the target sets $t1 = 2.
#[allow(dead_code)]
pub fn test_program_jump_delay_slot() -> Vec<u32> {
    let mut program = vec![NOP; 0x41];
    program[0] = j(0x1FC00100);
    program[1] = addiu(T0, 0, 1);
    program[0x40] = addiu(T1, 0, 2);
    program
}

/// Test program: BNE over one instruction
///
/// `$1 = 1`, `$2 = r2`; the branch at 0x1FC00008 targets 0x1FC00014 and
/// skips the `$t2 = 0x42` at 0x1FC00010.
#[allow(dead_code)]
pub fn test_program_bne(r2: i16) -> Vec<u32> {
    vec![
        addiu(1, 0, 1),
        addiu(2, 0, r2),
        bne(1, 2, 2),
        addiu(T1, 0, 7),    // delay slot
        addiu(T2, 0, 0x42), // skipped when taken
        NOP,
    ]
}

/// Test program: memory control setup the way the BIOS does it
///
/// Programs both expansion bases, the RAM size register and the cache
/// control register.
#[allow(dead_code)]
pub fn test_program_memory_control() -> Vec<u32> {
    vec![
        lui(T0, 0x1F80),
        lui(T1, 0x1F00),
        sw(T1, T0, 0x1000), // expansion 1 base
        lui(T1, 0x1F80),
        ori(T1, T1, 0x2000),
        sw(T1, T0, 0x1004), // expansion 2 base
        ori(T2, 0, 0x0B88),
        sw(T2, T0, 0x1060), // RAM size
        lui(T3, 0xFFFE),
        sw(T2, T3, 0x0130), // cache control
    ]
}

/// Test program: isolate the cache, then store and load through KSEG0
#[allow(dead_code)]
pub fn test_program_isolated_cache() -> Vec<u32> {
    vec![
        lui(T0, 0x0001),
        mtc0(T0, 12), // SR.IsC = 1
        lui(T1, 0x8000),
        sw(T0, T1, 0),
        lw(T2, T1, 0),
        mtc0(0, 12), // SR.IsC = 0
        sw(T0, T1, 0),
    ]
}
