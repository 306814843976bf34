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

use super::super::decode::Reg;
use super::super::CPU;
use crate::core::config::OverflowPolicy;
use crate::core::error::{EmulatorError, Result};

impl CPU {
    // === Arithmetic Instructions ===

    /// ADDU: Add Unsigned (no overflow exception)
    ///
    /// Format: addu rd, rs, rt
    /// Operation: rd = rs + rt (wrapping)
    pub(in crate::core::cpu) fn op_addu(&mut self, d: Reg, s: Reg, t: Reg) -> Result<()> {
        let result = self.get(s).wrapping_add(self.get(t));
        self.set(d, result);
        Ok(())
    }

    /// ADDI: Add Immediate
    ///
    /// Format: addi rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    ///
    /// Signed overflow either wraps like ADDIU or fails the step, depending
    /// on the CPU's [`OverflowPolicy`].
    ///
    /// # Arguments
    ///
    /// * `t` - Destination register
    /// * `s` - Source register
    /// * `imm` - Sign-extended immediate
    /// * `pc` - Address of this instruction, reported on overflow
    ///
    /// # Returns
    ///
    /// `Err(EmulatorError::ArithmeticOverflow)` on overflow under
    /// `OverflowPolicy::Trap`; rt is not written in that case.
    pub(in crate::core::cpu) fn op_addi(
        &mut self,
        t: Reg,
        s: Reg,
        imm: u32,
        pc: u32,
    ) -> Result<()> {
        let a = self.get(s) as i32;
        let b = imm as i32;

        let result = match (a.checked_add(b), self.overflow_policy()) {
            (Some(result), _) => result,
            (None, OverflowPolicy::Wrap) => a.wrapping_add(b),
            (None, OverflowPolicy::Trap) => {
                return Err(EmulatorError::ArithmeticOverflow { pc });
            }
        };

        self.set(t, result as u32);
        Ok(())
    }

    /// ADDIU: Add Immediate Unsigned (no overflow exception)
    ///
    /// Despite the name "unsigned", the immediate is sign-extended.
    ///
    /// Format: addiu rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm) (wrapping)
    pub(in crate::core::cpu) fn op_addiu(&mut self, t: Reg, s: Reg, imm: u32) -> Result<()> {
        let result = self.get(s).wrapping_add(imm);
        self.set(t, result);
        Ok(())
    }

    // === Comparison Instructions ===

    /// SLT: Set on Less Than (signed)
    ///
    /// Format: slt rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(in crate::core::cpu) fn op_slt(&mut self, d: Reg, s: Reg, t: Reg) -> Result<()> {
        let result = (self.get(s) as i32) < (self.get(t) as i32);
        self.set(d, result as u32);
        Ok(())
    }

    /// SLTU: Set on Less Than Unsigned
    ///
    /// Format: sltu rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(in crate::core::cpu) fn op_sltu(&mut self, d: Reg, s: Reg, t: Reg) -> Result<()> {
        let result = self.get(s) < self.get(t);
        self.set(d, result as u32);
        Ok(())
    }
}
