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
use crate::core::error::{EmulatorError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// BIOS ROM (512KB)
///
/// Physical address: 0x1FC00000-0x1FC7FFFF
/// Contains the boot code; the CPU starts executing at its first word.
pub struct Bios {
    data: Vec<u8>,
}

impl Bios {
    /// BIOS size (512KB)
    pub const SIZE: usize = 512 * 1024;

    /// BIOS base address
    pub const BASE: u32 = 0x1FC00000;

    /// Create a BIOS from a ROM image
    ///
    /// The image is copied verbatim. Images shorter than 512KB are padded
    /// with zeros (which decode as NOP).
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::InvalidBiosSize` if the image does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use psi::core::memory::Bios;
    ///
    /// let bios = Bios::from_bytes(&[0x00, 0x80, 0x08, 0x3C]).unwrap();
    /// ```
    pub fn from_bytes(image: &[u8]) -> Result<Self> {
        if image.len() > Self::SIZE {
            return Err(EmulatorError::InvalidBiosSize {
                expected: Self::SIZE,
                got: image.len(),
            });
        }

        let mut data = vec![0u8; Self::SIZE];
        data[..image.len()].copy_from_slice(image);
        Ok(Self { data })
    }

    /// Create a BIOS from little-endian instruction words
    ///
    /// Convenience for hand-assembled test programs.
    pub fn from_words(words: &[u32]) -> Result<Self> {
        let image: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        Self::from_bytes(&image)
    }

    /// Load BIOS from file
    ///
    /// # Errors
    ///
    /// - `EmulatorError::BiosNotFound` if the file does not exist
    /// - `EmulatorError::InvalidBiosSize` if the file is larger than 512KB
    /// - `EmulatorError::Io` for any other read failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use psi::core::memory::Bios;
    ///
    /// let bios = Bios::from_file("SCPH1001.BIN").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let image = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EmulatorError::BiosNotFound(path.display().to_string()),
            _ => EmulatorError::Io(e),
        })?;

        log::info!("Loaded BIOS image {} ({} bytes)", path.display(), image.len());
        Self::from_bytes(&image)
    }
}

impl Device for Bios {
    const NAME: &'static str = "BIOS";

    fn range(&self) -> AddressRange {
        AddressRange::new(Self::BASE, Self::SIZE as u32)
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

    fn store32(&mut self, offset: u32, _value: u32, _diag: &mut Diagnostics) -> Result<()> {
        Err(EmulatorError::ReadOnlyViolation { offset })
    }

    fn store16(&mut self, offset: u32, _value: u16, _diag: &mut Diagnostics) -> Result<()> {
        Err(EmulatorError::ReadOnlyViolation { offset })
    }
}
