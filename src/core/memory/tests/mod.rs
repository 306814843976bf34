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

//! Memory Bus Tests
//!
//! This module contains tests for the PlayStation memory bus, organized into
//! logical categories:
//!
//! - `basic`: Bus construction, region registration, default memory map
//! - `bus`: 32-bit and 16-bit access, alignment, endianness, unmapped addresses
//! - `regions`: Segment mirroring through the address mask
//! - `devices`: Per-device behavior (BIOS, RAM, HW registers, cache control, SPU)
//! - `properties`: Property tests over RAM and BIOS
//! - `helpers`: Common test utilities

use super::*;

mod helpers;
