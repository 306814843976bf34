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

//! Memory region abstraction
//!
//! Every device mapped on the bus implements [`Device`]. The bus itself only
//! deals with [`Region`], a closed set over the concrete devices, so adding a
//! device means adding a variant and the compiler points at every dispatch
//! site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Memory Bus                     │
//! ├─────────────────────────────────────────────┤
//! │  regions: Vec<Region>                       │
//! │                                             │
//! │  load32(addr) {                             │
//! │    for region in regions {                  │
//! │      if let Some(offset) = contains(addr) { │
//! │        return region.load32(offset)         │
//! │      }                                      │
//! │    }                                        │
//! │  }                                          │
//! └─────────────────────────────────────────────┘
//!      ▲         ▲          ▲          ▲
//!      │         │          │          │
//!   ┌──┴──┐  ┌───┴──┐  ┌────┴────┐  ┌──┴──┐
//!   │BIOS │  │ RAM  │  │ HwRegs  │  │ SPU │ ...
//!   └─────┘  └──────┘  └─────────┘  └─────┘
//! ```

use super::{AddressRange, Bios, CacheControl, HwRegs, Ram, Spu};
use crate::core::diagnostics::Diagnostics;
use crate::core::error::{EmulatorError, Result};

/// Trait for devices mapped on the memory bus
///
/// Offsets passed to the access methods are relative to the base of
/// [`range`](Device::range) and already alignment-checked by the bus. For
/// example:
///
/// - Device address range: `0x1F801000 - 0x1F802FFF`
/// - Address: `0x1F801060`
/// - Offset passed to device: `0x60`
///
/// Accesses the device recognizes but does not model are reported to `diag`
/// and otherwise ignored; accesses it does not recognize fail.
pub trait Device {
    /// Short device name used in errors and diagnostics
    const NAME: &'static str;

    /// Address range this device responds to
    fn range(&self) -> AddressRange;

    /// Read a 32-bit little-endian value
    fn load32(&self, offset: u32) -> Result<u32>;

    /// Write a 32-bit little-endian value
    fn store32(&mut self, offset: u32, value: u32, diag: &mut Diagnostics) -> Result<()>;

    /// Write a 16-bit little-endian value
    ///
    /// Devices without a 16-bit path reject the access.
    fn store16(&mut self, offset: u32, _value: u16, _diag: &mut Diagnostics) -> Result<()> {
        Err(EmulatorError::Unimplemented {
            device: Self::NAME,
            offset,
        })
    }
}

/// A device mapped on the bus
pub enum Region {
    Bios(Bios),
    Ram(Ram),
    HwRegs(HwRegs),
    CacheControl(CacheControl),
    Spu(Spu),
}

macro_rules! dispatch {
    ($region:expr, $dev:ident => $body:expr) => {
        match $region {
            Region::Bios($dev) => $body,
            Region::Ram($dev) => $body,
            Region::HwRegs($dev) => $body,
            Region::CacheControl($dev) => $body,
            Region::Spu($dev) => $body,
        }
    };
}

impl Region {
    /// Device name
    pub fn name(&self) -> &'static str {
        match self {
            Region::Bios(_) => Bios::NAME,
            Region::Ram(_) => Ram::NAME,
            Region::HwRegs(_) => HwRegs::NAME,
            Region::CacheControl(_) => CacheControl::NAME,
            Region::Spu(_) => Spu::NAME,
        }
    }

    /// Address range as declared by the device
    pub fn range(&self) -> AddressRange {
        dispatch!(self, dev => dev.range())
    }

    pub fn load32(&self, offset: u32) -> Result<u32> {
        dispatch!(self, dev => dev.load32(offset))
    }

    pub fn store32(&mut self, offset: u32, value: u32, diag: &mut Diagnostics) -> Result<()> {
        dispatch!(self, dev => dev.store32(offset, value, diag))
    }

    pub fn store16(&mut self, offset: u32, value: u16, diag: &mut Diagnostics) -> Result<()> {
        dispatch!(self, dev => dev.store16(offset, value, diag))
    }
}

impl From<Bios> for Region {
    fn from(dev: Bios) -> Self {
        Region::Bios(dev)
    }
}

impl From<Ram> for Region {
    fn from(dev: Ram) -> Self {
        Region::Ram(dev)
    }
}

impl From<HwRegs> for Region {
    fn from(dev: HwRegs) -> Self {
        Region::HwRegs(dev)
    }
}

impl From<CacheControl> for Region {
    fn from(dev: CacheControl) -> Self {
        Region::CacheControl(dev)
    }
}

impl From<Spu> for Region {
    fn from(dev: Spu) -> Self {
        Region::Spu(dev)
    }
}
