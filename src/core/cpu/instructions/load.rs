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
use crate::core::diagnostics::Diagnostic;
use crate::core::error::Result;
use crate::core::memory::Bus;

impl CPU {
    // === Load Instructions ===

    /// LW: Load Word
    ///
    /// Loads a 32-bit word from memory. The address must be 4-byte aligned.
    ///
    /// Format: lw rt, offset(rs)
    /// Operation: rt = memory[rs + sign_extend(offset)]
    ///
    /// With the cache isolated the bus is not touched and rt keeps its
    /// value; the skipped load is reported. Alignment is checked either way.
    pub(in crate::core::cpu) fn op_lw(
        &mut self,
        t: Reg,
        base: Reg,
        offset: i16,
        bus: &mut Bus,
    ) -> Result<()> {
        let addr = self.get(base).wrapping_add(offset as i32 as u32);
        Bus::check_alignment(addr, 4)?;

        if self.cop0().isolate_cache() {
            bus.report(Diagnostic::IsolatedLoad { address: addr });
            return Ok(());
        }

        let value = bus.load32(addr)?;
        log::debug!("load32 0x{:08X} -> 0x{:08X}", addr, value);
        self.set(t, value);
        Ok(())
    }
}
