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

use crate::core::error::{EmulatorError, Result};
use bitflags::bitflags;

bitflags! {
    /// Status Register (CO0 r12) bits the emulator looks at
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusRegister: u32 {
        /// IEc: interrupts enabled (current)
        const INTERRUPT_ENABLE = 1 << 0;
        /// KUc: user mode (current)
        const USER_MODE = 1 << 1;
        /// IsC: loads and stores hit the data cache only
        const ISOLATE_CACHE = 1 << 16;
        /// SwC: swap instruction and data caches
        const SWAP_CACHES = 1 << 17;
        /// BEV: exception vectors in ROM
        const BOOT_EXCEPTION_VECTORS = 1 << 22;

        const _ = !0;
    }
}

/// Coprocessor 0 (System Control)
///
/// A flat bank of 32 registers. Only the Status Register changes how the CPU
/// behaves; the rest are stored and read back verbatim.
#[derive(Debug, Clone)]
pub struct Cop0 {
    regs: [u32; 32],
}

impl Cop0 {
    /// Breakpoint PC
    pub const BPC: u8 = 3;
    /// Breakpoint Data Address
    pub const BDA: u8 = 5;
    /// Target Address
    pub const TAR: u8 = 6;
    /// Cache control
    pub const DCIC: u8 = 7;
    /// Bad Virtual Address
    pub const BADA: u8 = 8;
    /// Data Address Mask
    pub const BDAM: u8 = 9;
    /// PC Mask
    pub const BPCM: u8 = 11;
    /// Status Register
    pub const SR: u8 = 12;
    /// Cause Register
    pub const CAUSE: u8 = 13;
    /// Exception PC
    pub const EPC: u8 = 14;
    /// Processor ID
    pub const PRID: u8 = 15;

    /// Power-on value of every register except SR
    pub const POISON: u32 = 0xDEADC0DE;

    /// Create a new COP0 instance in its reset state
    pub fn new() -> Self {
        let mut regs = [Self::POISON; 32];
        regs[Self::SR as usize] = 0;
        Self { regs }
    }

    /// Reset COP0 registers to initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read a CO0 register
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::InvalidRegister` for indices above 31.
    pub fn reg(&self, index: u8) -> Result<u32> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(EmulatorError::InvalidRegister { index })
    }

    /// Write a CO0 register
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::InvalidRegister` for indices above 31.
    pub fn set_reg(&mut self, index: u8, value: u32) -> Result<()> {
        let slot = self
            .regs
            .get_mut(index as usize)
            .ok_or(EmulatorError::InvalidRegister { index })?;
        *slot = value;
        Ok(())
    }

    /// The whole register bank, indexed by register number
    pub fn regs(&self) -> &[u32; 32] {
        &self.regs
    }

    /// Conventional name of a CO0 register, if it has one
    pub fn name(index: u8) -> Option<&'static str> {
        match index {
            Self::BPC => Some("BPC"),
            Self::BDA => Some("BDA"),
            Self::TAR => Some("TAR"),
            Self::DCIC => Some("DCIC"),
            Self::BADA => Some("BADA"),
            Self::BDAM => Some("BDAM"),
            Self::BPCM => Some("BPCM"),
            Self::SR => Some("SR"),
            Self::CAUSE => Some("CAUSE"),
            Self::EPC => Some("EPC"),
            Self::PRID => Some("PRID"),
            _ => None,
        }
    }

    /// Status Register
    #[inline(always)]
    pub fn status(&self) -> StatusRegister {
        StatusRegister::from_bits_retain(self.regs[Self::SR as usize])
    }

    /// Whether SR.IsC is set
    #[inline(always)]
    pub fn isolate_cache(&self) -> bool {
        self.status().contains(StatusRegister::ISOLATE_CACHE)
    }
}

impl Default for Cop0 {
    fn default() -> Self {
        Self::new()
    }
}
