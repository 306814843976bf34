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

//! Instruction encoders and CPU fixtures shared by the CPU tests

use super::*;

pub fn lui(t: u32, imm: u16) -> u32 {
    (0x0F << 26) | (t << 16) | imm as u32
}

pub fn ori(t: u32, s: u32, imm: u16) -> u32 {
    (0x0D << 26) | (s << 21) | (t << 16) | imm as u32
}

pub fn addi(t: u32, s: u32, imm: i16) -> u32 {
    (0x08 << 26) | (s << 21) | (t << 16) | (imm as u16) as u32
}

pub fn addiu(t: u32, s: u32, imm: i16) -> u32 {
    (0x09 << 26) | (s << 21) | (t << 16) | (imm as u16) as u32
}

fn r_type(d: u32, s: u32, t: u32, shamt: u32, funct: u32) -> u32 {
    (s << 21) | (t << 16) | (d << 11) | (shamt << 6) | funct
}

pub fn sll(d: u32, t: u32, shift: u32) -> u32 {
    r_type(d, 0, t, shift, 0x00)
}

pub fn addu(d: u32, s: u32, t: u32) -> u32 {
    r_type(d, s, t, 0, 0x21)
}

pub fn or(d: u32, s: u32, t: u32) -> u32 {
    r_type(d, s, t, 0, 0x25)
}

pub fn xor(d: u32, s: u32, t: u32) -> u32 {
    r_type(d, s, t, 0, 0x26)
}

pub fn slt(d: u32, s: u32, t: u32) -> u32 {
    r_type(d, s, t, 0, 0x2A)
}

pub fn sltu(d: u32, s: u32, t: u32) -> u32 {
    r_type(d, s, t, 0, 0x2B)
}

pub fn j(addr: u32) -> u32 {
    (0x02 << 26) | ((addr >> 2) & 0x03FF_FFFF)
}

pub fn jal(addr: u32) -> u32 {
    (0x03 << 26) | ((addr >> 2) & 0x03FF_FFFF)
}

pub fn bne(s: u32, t: u32, imm: i16) -> u32 {
    (0x05 << 26) | (s << 21) | (t << 16) | (imm as u16) as u32
}

pub fn lw(t: u32, base: u32, offset: i16) -> u32 {
    (0x23 << 26) | (base << 21) | (t << 16) | (offset as u16) as u32
}

pub fn sw(t: u32, base: u32, offset: i16) -> u32 {
    (0x2B << 26) | (base << 21) | (t << 16) | (offset as u16) as u32
}

pub fn mtc0(t: u32, d: u32) -> u32 {
    (0x10 << 26) | (0x04 << 21) | (t << 16) | (d << 11)
}

/// Creates a bus with the standard memory map and the given BIOS words
pub fn create_bus(words: &[u32]) -> Bus {
    let bios = Bios::from_words(words).unwrap();
    Bus::with_default_map(bios, Diagnostics::recording()).unwrap()
}

/// Decodes `word` and executes it as if fetched from `pc`
pub fn exec(cpu: &mut CPU, bus: &mut Bus, word: u32) -> crate::core::error::Result<()> {
    let instruction = decode(word)?;
    let pc = cpu.pc().wrapping_sub(8);
    cpu.execute(instruction, pc, bus)
}
