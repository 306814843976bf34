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
use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::error::{EmulatorError, Result};

/// SPU register window (640 bytes)
///
/// Address: 0x1F801C00-0x1F801E7F, nested inside the hardware register
/// block. The SPU is a 16-bit device; only halfword stores are accepted,
/// and only reported.
#[derive(Debug, Default)]
pub struct Spu;

impl Spu {
    /// SPU register base address
    pub const BASE: u32 = 0x1F801C00;

    /// SPU register window size
    pub const SIZE: u32 = 640;

    pub fn new() -> Self {
        Self
    }
}

impl Device for Spu {
    const NAME: &'static str = "SPU";

    fn range(&self) -> AddressRange {
        AddressRange::new(Self::BASE, Self::SIZE)
    }

    fn load32(&self, offset: u32) -> Result<u32> {
        Err(EmulatorError::Unimplemented {
            device: Self::NAME,
            offset,
        })
    }

    fn store32(&mut self, offset: u32, _value: u32, _diag: &mut Diagnostics) -> Result<()> {
        Err(EmulatorError::Unimplemented {
            device: Self::NAME,
            offset,
        })
    }

    fn store16(&mut self, offset: u32, value: u16, diag: &mut Diagnostics) -> Result<()> {
        diag.report(Diagnostic::UnmodeledWrite {
            device: Self::NAME,
            register: "SPU register",
            offset,
            value: value as u32,
        });
        Ok(())
    }
}
