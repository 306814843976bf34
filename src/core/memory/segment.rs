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

//! Address segment canonicalization
//!
//! The R3000A exposes four views of the address space, selected by the three
//! most significant bits of an address:
//! - KUSEG (0x00000000-0x7FFFFFFF): User space, cached
//! - KSEG0 (0x80000000-0x9FFFFFFF): Kernel space, cached (mirrors physical memory)
//! - KSEG1 (0xA0000000-0xBFFFFFFF): Kernel space, uncached (mirrors physical memory)
//! - KSEG2 (0xC0000000-0xFFFFFFFF): Kernel space, I/O (cache control lives here)
//!
//! KSEG0 and KSEG1 are folded onto KUSEG by masking; KUSEG and KSEG2 are left
//! untouched.

/// Segment masks indexed by the top 3 bits of the address
const REGION_MASK: [u32; 8] = [
    // KUSEG: 2048MB
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    // KSEG0: 512MB
    0x7FFF_FFFF,
    // KSEG1: 512MB
    0x1FFF_FFFF,
    // KSEG2: 1024MB
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// Canonical address of `addr`
///
/// - 0x00001234 (KUSEG) → 0x00001234
/// - 0x80001234 (KSEG0) → 0x00001234
/// - 0xA0001234 (KSEG1) → 0x00001234
/// - 0xFFFE0130 (KSEG2) → 0xFFFE0130
///
/// # Example
///
/// ```
/// use psi::core::memory::mask_region;
///
/// assert_eq!(mask_region(0xBFC00000), 0x1FC00000);
/// ```
#[inline(always)]
pub fn mask_region(addr: u32) -> u32 {
    addr & REGION_MASK[(addr >> 29) as usize]
}
