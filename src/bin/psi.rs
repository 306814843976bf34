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

use clap::Parser;
use log::{error, info};
use psi::core::config::{Config, OverflowPolicy};
use psi::core::error::{EmulatorError, Result};
use psi::core::memory::Bios;
use psi::core::system::System;
use std::path::PathBuf;

/// PlayStation CPU core runner
#[derive(Parser)]
#[command(name = "psi")]
#[command(about = "Runs a PlayStation BIOS on the R3000A core", long_about = None)]
struct Args {
    /// Path to PlayStation BIOS file (e.g., SCPH1001.BIN)
    ///
    /// Falls back to the config file, then to $PSI_BIOS.
    bios_file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of instructions to execute (default: until an error)
    #[arg(short = 'n', long)]
    steps: Option<u64>,

    /// Fail on ADDI signed overflow instead of wrapping
    #[arg(long)]
    trap_overflow: bool,

    /// Log every executed instruction
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG, PSI_BIOS)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let args = Args::parse();

    let default_filter = if args.trace { "trace" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    info!("psi v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Command line overrides the file
    if args.steps.is_some() {
        config.run.max_steps = args.steps;
    }
    if args.trap_overflow {
        config.cpu.addi_overflow = OverflowPolicy::Trap;
    }

    let bios_path = args
        .bios_file
        .or_else(|| config.bios.clone())
        .or_else(|| std::env::var_os("PSI_BIOS").map(PathBuf::from))
        .ok_or_else(|| {
            EmulatorError::Config("no BIOS given (argument, config file or PSI_BIOS)".into())
        })?;

    info!("Loading BIOS from: {}", bios_path.display());
    let bios = Bios::from_file(&bios_path).inspect_err(|e| error!("Failed to load BIOS: {}", e))?;

    let mut system = System::new(bios, &config)?;

    info!("Starting emulation...");
    match system.run(config.run.max_steps) {
        Ok(steps) => {
            info!("Emulation completed successfully!");
            info!("Total instructions: {}", steps);
            info!("Final PC: 0x{:08X}", system.pc());
            Ok(())
        }
        Err(e) => {
            error!("Error at PC=0x{:08X}: {}", system.pc(), e);
            error!("Instruction count: {}", system.steps());
            if config.run.dump_registers {
                system.cpu().dump_registers();
            }
            Err(e)
        }
    }
}
