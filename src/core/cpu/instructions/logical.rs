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
    // === Logical Instructions ===

    /// OR: Bitwise OR
    ///
    /// Format: or rd, rs, rt
    /// Operation: rd = rs | rt
    pub(in crate::core::cpu) fn op_or(&mut self, d: Reg, s: Reg, t: Reg) -> Result<()> {
        let result = self.get(s) | self.get(t);
        self.set(d, result);
        Ok(())
    }

    /// ORI: Bitwise OR Immediate
    ///
    /// Format: ori rt, rs, imm
    /// Operation: rt = rs | zero_extend(imm)
    pub(in crate::core::cpu) fn op_ori(&mut self, t: Reg, s: Reg, imm: u32) -> Result<()> {
        let result = self.get(s) | imm;
        self.set(t, result);
        Ok(())
    }

    /// LUI: Load Upper Immediate
    ///
    /// Loads a 16-bit immediate value into the upper 16 bits of a register.
    /// The lower 16 bits are set to 0.
    ///
    /// Format: lui rt, imm
    /// Operation: rt = imm << 16
    pub(in crate::core::cpu) fn op_lui(&mut self, t: Reg, imm: u32) -> Result<()> {
        self.set(t, imm << 16);
        Ok(())
    }
}
