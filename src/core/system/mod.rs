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

//! System integration module
//!
//! This module ties the CPU to a memory bus and provides the main emulation
//! loop.

use super::config::Config;
use super::cpu::CPU;
use super::diagnostics::Diagnostics;
use super::error::Result;
use super::memory::{Bios, Bus};

#[cfg(test)]
mod tests;

/// PlayStation System
///
/// Owns one CPU and the bus it runs against. Several systems can coexist;
/// they share nothing.
///
/// # Example
/// ```
/// use psi::core::config::Config;
/// use psi::core::memory::Bios;
/// use psi::core::system::System;
///
/// // lui $t0, 0x1F80
/// let bios = Bios::from_words(&[0x3C081F80]).unwrap();
/// let mut system = System::new(bios, &Config::default()).unwrap();
///
/// system.step_n(2).unwrap();
/// assert_eq!(system.cpu().reg(8).unwrap(), 0x1F800000);
/// ```
pub struct System {
    /// CPU instance
    cpu: CPU,
    /// Memory bus
    bus: Bus,
    /// Steps completed since reset
    steps: u64,
}

impl System {
    /// Create a system with the standard memory map
    ///
    /// Diagnostics go to the log.
    ///
    /// # Errors
    ///
    /// Fails only if the standard map cannot be built.
    pub fn new(bios: Bios, config: &Config) -> Result<Self> {
        let bus = Bus::with_default_map(bios, Diagnostics::log())?;
        Ok(Self::with_bus(bus, config))
    }

    /// Create a system around a caller-built bus
    pub fn with_bus(bus: Bus, config: &Config) -> Self {
        log::info!(
            "System created with {} mapped regions, ADDI overflow: {:?}",
            bus.regions().len(),
            config.cpu.addi_overflow
        );

        Self {
            cpu: CPU::with_overflow_policy(config.cpu.addi_overflow),
            bus,
            steps: 0,
        }
    }

    /// Reset the CPU to its power-on state
    ///
    /// Memory contents are kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.steps = 0;
        log::info!("System reset");
    }

    /// Execute one CPU instruction
    ///
    /// # Errors
    /// Returns error if instruction execution fails
    pub fn step(&mut self) -> Result<()> {
        self.cpu.step(&mut self.bus)?;
        self.steps += 1;
        Ok(())
    }

    /// Execute multiple CPU instructions
    ///
    /// Stops at the first error.
    pub fn step_n(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Run until `limit` steps have completed or an error occurs
    ///
    /// With no limit the loop only ends on an error. [`steps`](System::steps)
    /// still reports how far the run got after a failure.
    ///
    /// # Returns
    ///
    /// Number of steps completed by this call
    pub fn run(&mut self, limit: Option<u64>) -> Result<u64> {
        let start = self.steps;
        log::info!(
            "Running from PC=0x{:08X}{}",
            self.cpu.pc(),
            limit
                .map(|n| format!(" for {} steps", n))
                .unwrap_or_default()
        );

        while limit.is_none_or(|n| self.steps - start < n) {
            self.step()?;
        }

        Ok(self.steps - start)
    }

    /// Get current PC value
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Steps completed since reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Get reference to CPU
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Get mutable reference to CPU
    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    /// Get reference to memory bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to memory bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}
