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

/// Cache Control register
///
/// Address: 0xFFFE0130 (KSEG2 only, no mirrors)
/// Controls instruction cache, data cache, and scratchpad enable. Cache
/// behavior is not modeled: writes are accepted and reported.
#[derive(Debug, Default)]
pub struct CacheControl;

impl CacheControl {
    /// Cache control register address
    pub const BASE: u32 = 0xFFFE0130;

    /// Cache control register size
    pub const SIZE: u32 = 4;

    pub fn new() -> Self {
        Self
    }
}

impl Device for CacheControl {
    const NAME: &'static str = "cache control";

    fn range(&self) -> AddressRange {
        AddressRange::new(Self::BASE, Self::SIZE)
    }

    fn load32(&self, offset: u32) -> Result<u32> {
        Err(EmulatorError::Unimplemented {
            device: Self::NAME,
            offset,
        })
    }

    fn store32(&mut self, offset: u32, value: u32, diag: &mut Diagnostics) -> Result<()> {
        diag.report(Diagnostic::UnmodeledWrite {
            device: Self::NAME,
            register: "cache control",
            offset,
            value,
        });
        Ok(())
    }
}
