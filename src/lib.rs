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

//! PlayStation 1 CPU and memory bus emulation library
//!
//! This library provides the MIPS R3000A CPU core (with its branch delay
//! slot and COP0), the memory bus with segment mirroring, and the devices
//! mapped on it: BIOS ROM, main RAM, hardware registers, cache control and
//! the SPU window.
//!
//! # Example
//!
//! ```
//! use psi::core::cpu::CPU;
//! use psi::core::diagnostics::Diagnostics;
//! use psi::core::memory::{Bios, Bus};
//!
//! // lui $t0, 0x1F80; ori $t0, $t0, 0x1000
//! let bios = Bios::from_words(&[0x3C081F80, 0x35081000]).unwrap();
//! let mut bus = Bus::with_default_map(bios, Diagnostics::silent()).unwrap();
//! let mut cpu = CPU::new();
//!
//! // The first step only executes the NOP seeded into the delay slot
//! for _ in 0..3 {
//!     cpu.step(&mut bus).unwrap();
//! }
//! assert_eq!(cpu.reg(8).unwrap(), 0x1F801000);
//! ```

pub mod core;
