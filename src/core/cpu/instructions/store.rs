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
    // === Store Instructions ===

    /// SW: Store Word
    ///
    /// Stores a 32-bit word to memory. The address must be 4-byte aligned.
    ///
    /// Format: sw rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt
    ///
    /// With the cache isolated the store would only reach the data cache,
    /// which is not modeled. It is dropped and reported, but an unaligned
    /// address still fails.
    pub(in crate::core::cpu) fn op_sw(
        &mut self,
        t: Reg,
        base: Reg,
        offset: i16,
        bus: &mut Bus,
    ) -> Result<()> {
        let addr = self.get(base).wrapping_add(offset as i32 as u32);
        Bus::check_alignment(addr, 4)?;

        if self.cop0().isolate_cache() {
            bus.report(Diagnostic::IsolatedStore { address: addr });
            return Ok(());
        }

        bus.store32(addr, self.get(t))
    }
}
