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

//! Test fixtures for common test scenarios

use psi::core::config::Config;
use psi::core::cpu::CPU;
use psi::core::diagnostics::Diagnostics;
use psi::core::error::Result;
use psi::core::memory::{AddressRange, Bios, Bus, Ram};
use psi::core::system::System;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a bus with the standard memory map and a recording diagnostics sink
#[allow(dead_code)]
pub fn create_bus(program: &[u32]) -> Bus {
    let bios = Bios::from_words(program).expect("program fits in the BIOS");
    Bus::with_default_map(bios, Diagnostics::recording()).expect("standard map is valid")
}

/// Create a CPU and a standard bus holding `program` at the reset vector
#[allow(dead_code)]
pub fn create_cpu_with_bus(program: &[u32]) -> (CPU, Bus) {
    (CPU::new(), create_bus(program))
}

/// Create a System running `program` with the given configuration
#[allow(dead_code)]
pub fn create_test_system(program: &[u32], config: &Config) -> System {
    System::with_bus(create_bus(program), config)
}

/// Create a bus with the BIOS and 4KB of RAM standing in at 0x1F801000
///
/// Lets boot code that pokes the hardware registers run against plain
/// memory so the written values can be read back.
#[allow(dead_code)]
pub fn create_ram_backed_io_bus(program: &[u32]) -> Bus {
    let mut bus = Bus::with_diagnostics(Diagnostics::recording());
    bus.add_region(Bios::from_words(program).expect("program fits in the BIOS"))
        .expect("empty bus accepts the BIOS");
    bus.add_region(Ram::with_range(AddressRange::new(0x1F801000, 0x1000)))
        .expect("I/O window does not overlap the BIOS");
    bus
}

/// Execute N CPU instructions, stopping at the first error
#[allow(dead_code)]
pub fn execute_n_instructions(cpu: &mut CPU, bus: &mut Bus, n: usize) -> Result<()> {
    for _ in 0..n {
        cpu.step(bus)?;
    }
    Ok(())
}

/// Write `program` to a temporary BIOS image file
#[allow(dead_code)]
pub fn write_bios_file(program: &[u32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for word in program {
        file.write_all(&word.to_le_bytes()).expect("write BIOS image");
    }
    file.flush().expect("flush BIOS image");
    file
}
