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

//! CPU instruction implementations
//!
//! This module contains the execution side of every MIPS R3000A instruction
//! the emulator models, organized by instruction type. The decoder already
//! extracted and extended the operands; handlers only see registers and
//! immediates.
//!
//! Anything without a handler fails with `UnsupportedOpcode`. Growing the
//! instruction set means adding an arm here and a handler in the matching
//! file.

use super::decode::{Instruction, Opcode, Operands as O};
use super::CPU;
use crate::core::error::{EmulatorError, Result};
use crate::core::memory::Bus;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod cop0;
mod jump;
mod load;
mod logical;
mod shift;
mod store;

impl CPU {
    /// Execute a decoded instruction
    ///
    /// # Arguments
    ///
    /// * `instruction` - The instruction taken from the delay slot
    /// * `pc` - Address the instruction was fetched from
    /// * `bus` - Memory bus for loads and stores
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or the first fatal condition
    pub(super) fn execute(
        &mut self,
        instruction: Instruction,
        pc: u32,
        bus: &mut Bus,
    ) -> Result<()> {
        match (instruction.opcode, instruction.operands) {
            (Opcode::Lui, O::Upper { t, imm }) => self.op_lui(t, imm),
            (Opcode::Ori, O::Imm { t, s, imm }) => self.op_ori(t, s, imm),
            (Opcode::Or, O::Arith { d, s, t }) => self.op_or(d, s, t),
            (Opcode::Addiu, O::Imm { t, s, imm }) => self.op_addiu(t, s, imm),
            (Opcode::Addi, O::Imm { t, s, imm }) => self.op_addi(t, s, imm, pc),
            (Opcode::Addu, O::Arith { d, s, t }) => self.op_addu(d, s, t),
            (Opcode::Slt, O::Arith { d, s, t }) => self.op_slt(d, s, t),
            (Opcode::Sltu, O::Arith { d, s, t }) => self.op_sltu(d, s, t),
            (Opcode::Sll, O::Shift { d, t, shift }) => self.op_sll(d, t, shift),
            (Opcode::J, O::Jump { target }) => self.op_j(target),
            (Opcode::Bne, O::Branch { s, t, pcrel }) => self.op_bne(s, t, pcrel),
            (Opcode::Lw, O::Mem { t, base, offset }) => self.op_lw(t, base, offset, bus),
            (Opcode::Sw, O::Mem { t, base, offset }) => self.op_sw(t, base, offset, bus),
            (Opcode::Mtc0, O::Cop { t, d }) => self.op_mtc0(t, d),
            (opcode, _) => {
                log::debug!(
                    "Unsupported instruction 0x{:08X} ({}) at PC=0x{:08X}",
                    instruction.word,
                    instruction,
                    pc
                );
                Err(EmulatorError::UnsupportedOpcode {
                    name: opcode.mnemonic(),
                })
            }
        }
    }
}
