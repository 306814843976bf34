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

//! Warn-and-continue diagnostics
//!
//! Some guest behavior is recognized but not modeled: writes to the RAM size
//! register, the memory-control block, the cache-control register or the SPU,
//! and memory accesses while the cache is isolated. These are not fatal, the
//! access is dropped and a [`Diagnostic`] is reported to the sink owned by the
//! [`Bus`](crate::core::memory::Bus).
//!
//! The sink runs in one of three modes:
//! - `Log`: forward to `log::warn!` (what the binary uses)
//! - `Record`: keep every diagnostic in memory so tests can assert on them
//! - `Silent`: drop everything
//!
//! # Example
//!
//! ```
//! use psi::core::diagnostics::{Diagnostic, Diagnostics};
//!
//! let mut diag = Diagnostics::recording();
//! diag.report(Diagnostic::IsolatedStore { address: 0x00000010 });
//! assert_eq!(diag.records().len(), 1);
//! ```

use std::fmt;

/// A recognized-but-unmodeled condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Write accepted by a device that does not model the register
    UnmodeledWrite {
        device: &'static str,
        register: &'static str,
        offset: u32,
        value: u32,
    },
    /// Store skipped because SR.IsC is set
    IsolatedStore { address: u32 },
    /// Load skipped because SR.IsC is set
    IsolatedLoad { address: u32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmodeledWrite {
                device,
                register,
                offset,
                value,
            } => write!(
                f,
                "{} write to {} at offset 0x{:04X} (value 0x{:08X}) not yet implemented",
                device, register, offset, value
            ),
            Diagnostic::IsolatedStore { address } => write!(
                f,
                "store to 0x{:08X} with isolated cache not yet implemented",
                address
            ),
            Diagnostic::IsolatedLoad { address } => write!(
                f,
                "load from 0x{:08X} with isolated cache not yet implemented",
                address
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Log,
    Record,
    Silent,
}

/// Diagnostics sink
#[derive(Debug, Clone)]
pub struct Diagnostics {
    mode: Mode,
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Sink forwarding every diagnostic to `log::warn!`
    pub fn log() -> Self {
        Self {
            mode: Mode::Log,
            records: Vec::new(),
        }
    }

    /// Sink keeping every diagnostic in memory
    pub fn recording() -> Self {
        Self {
            mode: Mode::Record,
            records: Vec::new(),
        }
    }

    /// Sink discarding every diagnostic
    pub fn silent() -> Self {
        Self {
            mode: Mode::Silent,
            records: Vec::new(),
        }
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match self.mode {
            Mode::Log => log::warn!("{}", diagnostic),
            Mode::Record => self.records.push(diagnostic),
            Mode::Silent => {}
        }
    }

    /// Diagnostics recorded so far (always empty outside `Record` mode)
    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    /// Take the recorded diagnostics, leaving the sink empty
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.records)
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::log()
    }
}
