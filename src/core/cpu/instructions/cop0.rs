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
    // === COP0 Instructions ===

    /// MTC0: Move To Coprocessor 0
    ///
    /// Format: mtc0 rt, rd
    /// Operation: cop0[rd] = rt
    ///
    /// # Arguments
    ///
    /// * `t` - Source general purpose register
    /// * `d` - Destination COP0 register (0-31, from a 5-bit field)
    pub(in crate::core::cpu) fn op_mtc0(&mut self, t: Reg, d: u8) -> Result<()> {
        let value = self.get(t);
        log::trace!("MTC0: cop0r{} = 0x{:08X}", d, value);
        self.cop0_mut().set_reg(d, value)
    }
}
