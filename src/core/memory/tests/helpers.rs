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

//! Helper functions for memory tests

use super::*;

/// Creates a bus with the standard memory map, recording diagnostics
#[allow(dead_code)]
pub fn create_test_bus() -> Bus {
    create_bus_with_bios(&[])
}

/// Creates a bus with the standard memory map and the given BIOS words
#[allow(dead_code)]
pub fn create_bus_with_bios(words: &[u32]) -> Bus {
    let bios = Bios::from_words(words).unwrap();
    Bus::with_default_map(bios, Diagnostics::recording()).unwrap()
}

/// Creates a bus holding only main RAM
#[allow(dead_code)]
pub fn create_ram_bus() -> Bus {
    let mut bus = Bus::with_diagnostics(Diagnostics::recording());
    bus.add_region(Ram::new()).unwrap();
    bus
}
