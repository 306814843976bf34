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

/// Emulator error types
use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Main error type for the emulator
///
/// Every variant is fatal: the driving loop decides whether to abort the
/// process or surface the condition as a structured diagnostic. Recoverable
/// conditions never show up here, they go to the
/// [`Diagnostics`](crate::core::diagnostics::Diagnostics) sink instead.
#[derive(Error, Debug)]
pub enum EmulatorError {
    #[error("BIOS file not found: {0}")]
    BiosNotFound(String),

    #[error("Invalid BIOS size: {got} bytes (expected at most {expected})")]
    InvalidBiosSize { expected: usize, got: usize },

    #[error("Unaligned memory access: {size}-byte access at 0x{address:08X}")]
    UnalignedAccess { address: u32, size: u8 },

    #[error("Unmapped memory access at 0x{address:08X}")]
    UnmappedAddress { address: u32 },

    #[error("Write to read-only memory at offset 0x{offset:08X}")]
    ReadOnlyViolation { offset: u32 },

    #[error("Unsupported instruction opcode: {name}")]
    UnsupportedOpcode { name: &'static str },

    #[error("Unable to decode instruction: 0x{word:08X}")]
    DecodeFailure { word: u32 },

    #[error("Invalid register index: {index} (valid range: 0-31)")]
    InvalidRegister { index: u8 },

    #[error("Unexpected value written to {register}: expected 0x{expected:08X}, got 0x{got:08X}")]
    UnexpectedConfigurationValue {
        register: &'static str,
        expected: u32,
        got: u32,
    },

    #[error("{device} access at offset 0x{offset:04X} not yet implemented")]
    Unimplemented { device: &'static str, offset: u32 },

    #[error("Arithmetic overflow in instruction at 0x{pc:08X}")]
    ArithmeticOverflow { pc: u32 },

    #[error("Memory region at 0x{base:08X} (length 0x{length:X}) overlaps a registered region")]
    OverlappingRegion { base: u32, length: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for EmulatorError {
    fn from(err: toml::de::Error) -> Self {
        EmulatorError::Config(err.to_string())
    }
}
