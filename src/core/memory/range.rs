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

use super::segment::mask_region;

/// Address range claimed by a memory region
///
/// # Example
///
/// ```
/// use psi::core::memory::AddressRange;
///
/// let range = AddressRange::new(0x1F801000, 8 * 1024);
/// assert_eq!(range.contains(0x1F801070), Some(0x70));
/// assert_eq!(range.contains(0x1F803000), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    /// First address of the range
    pub base: u32,
    /// Length in bytes (never 0)
    pub length: u32,
}

impl AddressRange {
    /// Create a new range
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0. Ranges are compile-time constants of the
    /// memory map, so an empty one is a programming error.
    pub const fn new(base: u32, length: u32) -> Self {
        assert!(length > 0, "address range length must be non-zero");
        Self { base, length }
    }

    /// Offset of `addr` relative to `base`, if the range contains it
    #[inline(always)]
    pub fn contains(self, addr: u32) -> Option<u32> {
        let offset = addr.wrapping_sub(self.base);
        if addr >= self.base && offset < self.length {
            Some(offset)
        } else {
            None
        }
    }

    /// Last address of the range (inclusive)
    pub fn last(self) -> u32 {
        self.base.wrapping_add(self.length - 1)
    }

    /// Same range seen through the segment mask of its base address
    ///
    /// RAM registered at its KSEG1 address `0xA0000000` canonicalizes to
    /// physical `0x00000000`.
    #[inline(always)]
    pub fn canonical(self) -> Self {
        Self {
            base: mask_region(self.base),
            length: self.length,
        }
    }

    /// Whether the two ranges share at least one address
    pub fn overlaps(self, other: AddressRange) -> bool {
        self.base <= other.last() && other.base <= self.last()
    }

    /// Whether `other` lies entirely inside `self`
    pub fn encloses(self, other: AddressRange) -> bool {
        self.base <= other.base && other.last() <= self.last()
    }
}
