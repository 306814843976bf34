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

//! Emulator configuration
//!
//! Configuration is read from an optional TOML file. Every field has a
//! default, so an empty file (or no file at all) is valid.
//!
//! ```toml
//! bios = "SCPH1001.BIN"
//!
//! [cpu]
//! addi_overflow = "trap"
//!
//! [run]
//! max_steps = 100000
//! dump_registers = true
//! ```

use crate::core::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What ADDI does on signed overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Wrap around like ADDIU
    #[default]
    Wrap,
    /// Fail the step with `ArithmeticOverflow`
    Trap,
}

/// CPU options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CpuConfig {
    pub addi_overflow: OverflowPolicy,
}

/// Run loop options
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Stop after this many steps; `None` runs until a fatal error
    pub max_steps: Option<u64>,
    /// Dump CPU state when the run stops on an error
    pub dump_registers: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            dump_registers: true,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Boot ROM image
    pub bios: Option<PathBuf>,
    pub cpu: CpuConfig,
    pub run: RunConfig,
}

impl Config {
    /// Parse configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use psi::core::config::{Config, OverflowPolicy};
    ///
    /// let config = Config::from_toml("[cpu]\naddi_overflow = \"trap\"\n").unwrap();
    /// assert_eq!(config.cpu.addi_overflow, OverflowPolicy::Trap);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EmulatorError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.bios.is_none());
        assert_eq!(config.cpu.addi_overflow, OverflowPolicy::Wrap);
        assert_eq!(config.run.max_steps, None);
        assert!(config.run.dump_registers);
    }

    #[test]
    fn test_full_config() {
        let text = r#"
            bios = "roms/SCPH1001.BIN"

            [cpu]
            addi_overflow = "trap"

            [run]
            max_steps = 5000
            dump_registers = false
        "#;
        let config = Config::from_toml(text).unwrap();
        assert_eq!(config.bios, Some(PathBuf::from("roms/SCPH1001.BIN")));
        assert_eq!(config.cpu.addi_overflow, OverflowPolicy::Trap);
        assert_eq!(config.run.max_steps, Some(5000));
        assert!(!config.run.dump_registers);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = Config::from_toml("[cpu]\naddi_overflow = \"saturate\"\n");
        assert!(matches!(result, Err(EmulatorError::Config(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Config::from_toml("[run]\nturbo = true\n");
        assert!(matches!(result, Err(EmulatorError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("psi.toml");
        std::fs::write(&path, "[run]\nmax_steps = 42\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.run.max_steps, Some(42));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Config::load("/nonexistent/psi.toml");
        assert!(matches!(result, Err(EmulatorError::Io(_))));
    }
}
