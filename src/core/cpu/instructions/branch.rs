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
use crate::core::error::Result;

impl CPU {
    // === Branch Instructions ===

    /// Apply a PC-relative branch offset
    ///
    /// `pcrel` is relative to the instruction after the delay slot, which is
    /// where PC points while a branch executes.
    #[inline(always)]
    fn branch(&mut self, pcrel: i32) {
        self.pc = self.pc.wrapping_add(pcrel as u32);
    }

    /// BNE: Branch on Not Equal
    ///
    /// Conditional branch if two registers are not equal.
    ///
    /// Format: bne rs, rt, offset
    /// Operation: if (rs != rt) PC = PC + 4 + (sign_extend(offset) << 2)
    pub(in crate::core::cpu) fn op_bne(&mut self, s: Reg, t: Reg, pcrel: i32) -> Result<()> {
        if self.get(s) != self.get(t) {
            self.branch(pcrel);
        }
        Ok(())
    }
}
