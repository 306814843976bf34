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

//! Memory bus implementation for PlayStation 1 emulator
//!
//! The Bus is the central component for all memory operations in the emulator.
//! It owns every mapped device, canonicalizes addresses through the segment
//! mask and routes each access to the one region that claims it.
//!
//! # Memory Map
//!
//! | Base        | Region          | Size   | Access        |
//! |-------------|-----------------|--------|---------------|
//! | 0x1FC00000  | BIOS ROM        | 512KB  | R only        |
//! | 0xA0000000  | RAM             | 2MB    | R/W           |
//! | 0x1F801C00  | SPU             | 640B   | 16-bit W only |
//! | 0x1F801000  | HW registers    | 8KB    | W (partial)   |
//! | 0xFFFE0130  | Cache control   | 4B     | W only        |
//!
//! # Address Translation
//!
//! Every address goes through [`mask_region`] before resolution, and so does
//! every region's base. RAM registered at 0xA0000000 therefore answers at
//! 0x00000000 (KUSEG), 0x80000000 (KSEG0) and 0xA0000000 (KSEG1) alike.
//!
//! # Example
//!
//! ```
//! use psi::core::memory::{Bus, Ram};
//!
//! let mut bus = Bus::new();
//! bus.add_region(Ram::new()).unwrap();
//!
//! // Write to RAM via KSEG0
//! bus.store32(0x80000000, 0x12345678).unwrap();
//!
//! // Read from same location via different segment (should mirror)
//! assert_eq!(bus.load32(0x00000000).unwrap(), 0x12345678);
//! assert_eq!(bus.load32(0xA0000000).unwrap(), 0x12345678);
//! ```

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::error::{EmulatorError, Result};

mod bios;
mod cache_control;
mod device;
mod hw_regs;
mod ram;
mod range;
mod segment;
mod spu;

#[cfg(test)]
mod tests;

pub use bios::Bios;
pub use cache_control::CacheControl;
pub use device::{Device, Region};
pub use hw_regs::HwRegs;
pub use ram::Ram;
pub use range::AddressRange;
pub use segment::mask_region;
pub use spu::Spu;

/// Memory bus managing all memory accesses
///
/// Regions are resolved in registration order; the first one whose range
/// contains the address wins. The bus holds no state besides the regions and
/// the diagnostics sink they report to.
pub struct Bus {
    regions: Vec<Region>,
    diagnostics: Diagnostics,
}

impl Bus {
    /// Create an empty bus reporting diagnostics to the log
    pub fn new() -> Self {
        Self::with_diagnostics(Diagnostics::log())
    }

    /// Create an empty bus with the given diagnostics sink
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            regions: Vec::new(),
            diagnostics,
        }
    }

    /// Create a bus with the standard PlayStation memory map
    ///
    /// The SPU window is registered ahead of the hardware register block it
    /// sits in, so it shadows that part of the block.
    ///
    /// # Example
    ///
    /// ```
    /// use psi::core::diagnostics::Diagnostics;
    /// use psi::core::memory::{Bios, Bus};
    ///
    /// let bios = Bios::from_words(&[0x3C081F80]).unwrap();
    /// let bus = Bus::with_default_map(bios, Diagnostics::silent()).unwrap();
    /// assert_eq!(bus.load32(0xBFC00000).unwrap(), 0x3C081F80);
    /// ```
    pub fn with_default_map(bios: Bios, diagnostics: Diagnostics) -> Result<Self> {
        let mut bus = Self::with_diagnostics(diagnostics);
        bus.add_region(bios)?;
        bus.add_region(Ram::new())?;
        bus.add_region(Spu::new())?;
        bus.add_region(HwRegs::new())?;
        bus.add_region(CacheControl::new())?;
        Ok(bus)
    }

    /// Register a region
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::OverlappingRegion` if the new range straddles
    /// the boundary of an already registered one. A range fully inside (or
    /// fully around) an existing one is accepted; the earlier registration
    /// wins for the shared addresses.
    pub fn add_region<R: Into<Region>>(&mut self, region: R) -> Result<()> {
        let region = region.into();
        let new = region.range().canonical();

        for existing in &self.regions {
            let old = existing.range().canonical();
            if old.overlaps(new) && !old.encloses(new) && !new.encloses(old) {
                return Err(EmulatorError::OverlappingRegion {
                    base: region.range().base,
                    length: region.range().length,
                });
            }
        }

        log::debug!(
            "Mapped {} at 0x{:08X} (0x{:X} bytes)",
            region.name(),
            region.range().base,
            region.range().length
        );
        self.regions.push(region);
        Ok(())
    }

    /// Registered regions, in resolution order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Diagnostics sink
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Diagnostics sink (mutable)
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Report a diagnostic to the bus sink
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
    }

    /// Find the region claiming `addr` and the offset inside it
    fn resolve(&self, addr: u32) -> Result<(usize, u32)> {
        let paddr = mask_region(addr);

        self.regions
            .iter()
            .enumerate()
            .find_map(|(index, region)| {
                region
                    .range()
                    .canonical()
                    .contains(paddr)
                    .map(|offset| (index, offset))
            })
            .ok_or(EmulatorError::UnmappedAddress { address: addr })
    }

    /// Fail with `UnalignedAccess` unless `addr` is a multiple of `size`
    #[inline(always)]
    pub(crate) fn check_alignment(addr: u32, size: u8) -> Result<()> {
        if addr % size as u32 != 0 {
            return Err(EmulatorError::UnalignedAccess {
                address: addr,
                size,
            });
        }
        Ok(())
    }

    /// Read 32-bit value from memory
    ///
    /// # Returns
    ///
    /// - `Ok(u32)` containing the value
    /// - `Err(EmulatorError::UnalignedAccess)` if address is not 4-byte aligned
    /// - `Err(EmulatorError::UnmappedAddress)` if no region claims the address
    /// - whatever the device returns for accesses it does not support
    pub fn load32(&self, addr: u32) -> Result<u32> {
        Self::check_alignment(addr, 4)?;
        let (index, offset) = self.resolve(addr)?;
        self.regions[index].load32(offset)
    }

    /// Write 32-bit value to memory
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the device accepted the write
    /// - `Err(EmulatorError::UnalignedAccess)` if address is not 4-byte aligned
    /// - `Err(EmulatorError::UnmappedAddress)` if no region claims the address
    /// - `Err(EmulatorError::ReadOnlyViolation)` for the BIOS
    pub fn store32(&mut self, addr: u32, value: u32) -> Result<()> {
        Self::check_alignment(addr, 4)?;
        let (index, offset) = self.resolve(addr)?;
        log::debug!("store32 0x{:08X} <- 0x{:08X}", addr, value);
        self.regions[index].store32(offset, value, &mut self.diagnostics)
    }

    /// Write 16-bit value to memory
    ///
    /// Same resolution rules as [`store32`](Bus::store32) with 2-byte
    /// alignment.
    pub fn store16(&mut self, addr: u32, value: u16) -> Result<()> {
        Self::check_alignment(addr, 2)?;
        let (index, offset) = self.resolve(addr)?;
        log::debug!("store16 0x{:08X} <- 0x{:04X}", addr, value);
        self.regions[index].store16(offset, value, &mut self.diagnostics)
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
