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

//! Hardware register block
//!
//! Covers the I/O window at 0x1F801000-0x1F802FFF. Only the memory control
//! registers at the very start of the window are recognized so far:
//!
//! | Offset        | Register                 | Behavior                       |
//! |---------------|--------------------------|--------------------------------|
//! | 0x0000        | Expansion 1 base address | must be 0x1F000000             |
//! | 0x0004        | Expansion 2 base address | must be 0x1F802000             |
//! | 0x0008-0x0023 | Delay/size, COM_DELAY    | accepted, reported             |
//! | 0x0060        | RAM size                 | accepted, reported             |
//!
//! The BIOS programs the expansion bases once during boot. Any other value
//! fails the store with `UnexpectedConfigurationValue`.

use super::{AddressRange, Device};
use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::error::{EmulatorError, Result};

/// Hardware registers (8KB)
#[derive(Debug, Default)]
pub struct HwRegs;

impl HwRegs {
    /// Hardware register block base address
    pub const BASE: u32 = 0x1F801000;

    /// Hardware register block size (8KB)
    pub const SIZE: u32 = 8 * 1024;

    /// Expansion 1 base address register
    const EXP1_BASE: u32 = 0x0000;
    /// Expansion 2 base address register
    const EXP2_BASE: u32 = 0x0004;
    /// RAM size register
    const RAM_SIZE: u32 = 0x0060;

    /// Memory control registers
    const MEM_CONTROL_START: u32 = 0x0000;
    const MEM_CONTROL_LEN: u32 = 36;

    /// Value the BIOS must program into expansion 1 base
    pub const EXPANSION_1_BASE: u32 = 0x1F000000;
    /// Value the BIOS must program into expansion 2 base
    pub const EXPANSION_2_BASE: u32 = 0x1F802000;

    pub fn new() -> Self {
        Self
    }

    fn check_base(register: &'static str, expected: u32, got: u32) -> Result<()> {
        if got != expected {
            return Err(EmulatorError::UnexpectedConfigurationValue {
                register,
                expected,
                got,
            });
        }
        Ok(())
    }
}

impl Device for HwRegs {
    const NAME: &'static str = "HW registers";

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
        match offset {
            Self::EXP1_BASE => Self::check_base(
                "expansion 1 base address",
                Self::EXPANSION_1_BASE,
                value,
            ),
            Self::EXP2_BASE => Self::check_base(
                "expansion 2 base address",
                Self::EXPANSION_2_BASE,
                value,
            ),
            Self::RAM_SIZE => {
                diag.report(Diagnostic::UnmodeledWrite {
                    device: Self::NAME,
                    register: "RAM size",
                    offset,
                    value,
                });
                Ok(())
            }
            o if (Self::MEM_CONTROL_START..Self::MEM_CONTROL_START + Self::MEM_CONTROL_LEN)
                .contains(&o) =>
            {
                diag.report(Diagnostic::UnmodeledWrite {
                    device: Self::NAME,
                    register: "memory control",
                    offset,
                    value,
                });
                Ok(())
            }
            _ => Err(EmulatorError::Unimplemented {
                device: Self::NAME,
                offset,
            }),
        }
    }
}
