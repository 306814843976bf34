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

use super::{AddressRange, Device};
use crate::core::diagnostics::Diagnostics;
use crate::core::error::Result;

/// Main RAM (2MB)
///
/// Registered at its KSEG1 address 0xA0000000; the bus folds the KUSEG and
/// KSEG0 mirrors onto it. The buffer starts out filled with a poison byte so
/// reads of never-written memory stand out.
pub struct Ram {
    range: AddressRange,
    data: Vec<u8>,
}

impl Ram {
    /// RAM size (2MB)
    pub const SIZE: usize = 2048 * 1024;

    /// RAM base address
    pub const BASE: u32 = 0xA0000000;

    /// Initial content of every byte
    pub const POISON: u8 = 0xCA;

    /// Create main RAM at its standard location
    pub fn new() -> Self {
        Self::with_range(AddressRange::new(Self::BASE, Self::SIZE as u32))
    }

    /// Create RAM covering an arbitrary range
    ///
    /// Lets tests stand a plain RAM in for a device window.
    ///
    /// # Example
    ///
    /// ```
    /// use psi::core::memory::{AddressRange, Ram};
    ///
    /// let scratch = Ram::with_range(AddressRange::new(0x1F800000, 1024));
    /// ```
    pub fn with_range(range: AddressRange) -> Self {
        // Aligned accesses sit at offsets congruent to -base mod 4; pad so
        // the last aligned word inside the range still fits
        let skew = (range.base & 3) as usize;
        let len = (skew + range.length as usize + 3) & !3;
        Self {
            range,
            data: vec![Self::POISON; len],
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Ram {
    const NAME: &'static str = "RAM";

    fn range(&self) -> AddressRange {
        self.range
    }

    fn load32(&self, offset: u32) -> Result<u32> {
        let offset = offset as usize;
        let bytes = [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ];
        Ok(u32::from_le_bytes(bytes))
    }

    fn store32(&mut self, offset: u32, value: u32, _diag: &mut Diagnostics) -> Result<()> {
        let offset = offset as usize;
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn store16(&mut self, offset: u32, value: u16, _diag: &mut Diagnostics) -> Result<()> {
        let offset = offset as usize;
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }
}
