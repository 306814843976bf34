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

use crate::core::config::OverflowPolicy;
use crate::core::error::Result;
use crate::core::memory::Bus;
use std::fmt;

// Module declarations
mod cop0;
mod decode;
mod disassembler;
mod instructions;
#[cfg(test)]
mod tests;

// Re-exports
pub use cop0::{Cop0, StatusRegister};
pub use decode::{decode, Instruction, Opcode, Operands, Reg};
pub use disassembler::disassemble;

/// CPU (MIPS R3000A) emulation implementation
///
/// # Specifications
/// - Architecture: MIPS I (32-bit)
/// - Registers: 32 general-purpose registers + COP0
/// - One branch delay slot
///
/// The CPU keeps the instruction fetched on the previous step in its delay
/// slot and executes it on the next one, after the following word has
/// already been fetched. A jump or branch therefore only redirects the fetch
/// after the instruction right behind it.
///
/// # Example
/// ```
/// use psi::core::cpu::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.set_reg(0, 0xDEADBEEF).unwrap();
/// assert_eq!(cpu.reg(0).unwrap(), 0); // r0 is always 0
/// assert_eq!(cpu.reg(1).unwrap(), 0xDEADC0DE);
/// ```
pub struct CPU {
    /// General purpose registers (r0-r31)
    ///
    /// r0 is hardwired to always return 0
    regs: [u32; 32],

    /// Address of the next fetch
    pc: u32,

    /// Decoded instruction waiting to execute
    delay_slot: Instruction,

    /// Address `delay_slot` was fetched from
    delay_slot_pc: u32,

    /// Coprocessor 0 (System Control Unit)
    cop0: Cop0,

    /// What ADDI does on signed overflow
    overflow: OverflowPolicy,
}

impl CPU {
    /// Boot ROM entry point
    pub const RESET_VECTOR: u32 = 0x1FC00000;

    /// Power-on value of r1-r31
    pub const POISON: u32 = 0xDEADC0DE;

    /// Create a new CPU instance with initial state
    ///
    /// The CPU is initialized with the following state:
    /// - r0: 0, r1-r31: 0xDEADC0DE
    /// - PC: 0x1FC00000 (BIOS entry point)
    /// - Delay slot: NOP
    /// - COP0 SR: 0, other COP0 registers: 0xDEADC0DE
    /// - ADDI wraps on overflow
    pub fn new() -> Self {
        Self::with_overflow_policy(OverflowPolicy::default())
    }

    /// Create a CPU with the given ADDI overflow behavior
    pub fn with_overflow_policy(overflow: OverflowPolicy) -> Self {
        let mut regs = [Self::POISON; 32];
        regs[0] = 0;

        Self {
            regs,
            pc: Self::RESET_VECTOR,
            delay_slot: Instruction::NOP,
            delay_slot_pc: Self::RESET_VECTOR.wrapping_sub(4),
            cop0: Cop0::new(),
            overflow,
        }
    }

    /// Reset CPU to initial state
    ///
    /// The overflow policy is kept.
    pub fn reset(&mut self) {
        *self = Self::with_overflow_policy(self.overflow);
    }

    /// Read from general purpose register
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::InvalidRegister` for indices above 31.
    pub fn reg(&self, index: u8) -> Result<u32> {
        Ok(self.get(Reg::new(index)?))
    }

    /// Write to general purpose register
    ///
    /// Writes to r0 are ignored (r0 is always 0).
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::InvalidRegister` for indices above 31.
    pub fn set_reg(&mut self, index: u8, value: u32) -> Result<()> {
        self.set(Reg::new(index)?, value);
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn get(&self, reg: Reg) -> u32 {
        self.regs[reg.index()]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, reg: Reg, value: u32) {
        if reg != Reg::ZERO {
            self.regs[reg.index()] = value;
        }
    }

    /// Address of the next instruction fetch
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Move the fetch address
    ///
    /// The delay slot is left alone, so the instruction already in it still
    /// executes on the next step.
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Instruction that executes on the next step
    pub fn delay_slot(&self) -> Instruction {
        self.delay_slot
    }

    /// Coprocessor 0
    pub fn cop0(&self) -> &Cop0 {
        &self.cop0
    }

    /// Coprocessor 0 (mutable)
    pub fn cop0_mut(&mut self) -> &mut Cop0 {
        &mut self.cop0
    }

    /// ADDI overflow behavior
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Execute one instruction
    ///
    /// 1. Take the instruction waiting in the delay slot
    /// 2. Fetch the word at PC and advance PC by 4
    /// 3. Decode the fetched word into the delay slot
    /// 4. Execute the instruction taken in step 1
    ///
    /// A failed fetch or decode aborts the step before anything executes.
    ///
    /// # Example
    ///
    /// ```
    /// use psi::core::cpu::CPU;
    /// use psi::core::diagnostics::Diagnostics;
    /// use psi::core::memory::{Bios, Bus};
    ///
    /// // lui $t0, 0x1F80
    /// let bios = Bios::from_words(&[0x3C081F80]).unwrap();
    /// let mut bus = Bus::with_default_map(bios, Diagnostics::silent()).unwrap();
    /// let mut cpu = CPU::new();
    ///
    /// cpu.step(&mut bus).unwrap(); // seeded NOP
    /// cpu.step(&mut bus).unwrap(); // LUI
    /// assert_eq!(cpu.reg(8).unwrap(), 0x1F800000);
    /// ```
    pub fn step(&mut self, bus: &mut Bus) -> Result<()> {
        let instruction = self.delay_slot;
        let pc = self.delay_slot_pc;

        let fetch_pc = self.pc;
        let word = bus.load32(fetch_pc)?;
        self.pc = fetch_pc.wrapping_add(4);

        self.delay_slot = decode(word)?;
        self.delay_slot_pc = fetch_pc;

        log::trace!("0x{:08X}: {}", pc, instruction);
        self.execute(instruction, pc, bus)
    }

    /// Dump all CPU registers to the log at info level
    pub fn dump_registers(&self) {
        for line in self.to_string().lines() {
            log::info!("{}", line);
        }
    }
}

impl fmt::Display for CPU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CPU Registers:")?;
        writeln!(
            f,
            "PC: 0x{:08X}  Delay slot: 0x{:08X} {}",
            self.pc, self.delay_slot_pc, self.delay_slot
        )?;

        // General-purpose registers in rows of 4
        for row in self.regs.chunks(4).enumerate() {
            let (i, values) = row;
            for (j, value) in values.iter().enumerate() {
                write!(f, "r{:2}: 0x{:08X}  ", i * 4 + j, value)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "COP0 Registers:")?;
        for (i, values) in self.cop0.regs().chunks(4).enumerate() {
            for (j, value) in values.iter().enumerate() {
                let index = (i * 4 + j) as u8;
                let label = match Cop0::name(index) {
                    Some(name) => format!("{}:", name),
                    None => format!("cop0r{}:", index),
                };
                write!(f, "{:<9}0x{:08X}  ", label, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
