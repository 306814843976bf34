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

//! MIPS instruction disassembler for debugging
//!
//! Renders decoded instructions as assembly text. Used by the per-step trace
//! log and by the register dump.

use super::decode::{decode, Instruction, Opcode, Operands};
use std::fmt;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.word == 0 {
            return write!(f, "nop");
        }

        let name = self.opcode.mnemonic();

        match self.operands {
            Operands::None => write!(f, "{}", name),
            Operands::Arith { d, s, t } => {
                write!(f, "{} r{}, r{}, r{}", name, d.index(), s.index(), t.index())
            }
            Operands::Shift { d, t, shift } => {
                write!(f, "{} r{}, r{}, {}", name, d.index(), t.index(), shift)
            }
            Operands::ShiftVar { d, t, s } => {
                write!(f, "{} r{}, r{}, r{}", name, d.index(), t.index(), s.index())
            }
            Operands::Imm { t, s, imm } => match self.opcode {
                Opcode::Andi | Opcode::Ori | Opcode::Xori => {
                    write!(f, "{} r{}, r{}, 0x{:04X}", name, t.index(), s.index(), imm)
                }
                _ => write!(f, "{} r{}, r{}, {}", name, t.index(), s.index(), imm as i32),
            },
            Operands::Upper { t, imm } => write!(f, "{} r{}, 0x{:04X}", name, t.index(), imm),
            Operands::Mem { t, base, offset } => {
                write!(f, "{} r{}, {}(r{})", name, t.index(), offset, base.index())
            }
            Operands::Branch { s, t, pcrel } => {
                // Show the encoded word offset, as an assembler would take it
                let imm = (pcrel + 4) >> 2;
                match self.opcode {
                    Opcode::Beq | Opcode::Bne => {
                        write!(f, "{} r{}, r{}, {}", name, s.index(), t.index(), imm)
                    }
                    _ => write!(f, "{} r{}, {}", name, s.index(), imm),
                }
            }
            Operands::Jump { target } => write!(f, "{} 0x{:07X}", name, target),
            Operands::JumpReg { d, s } => match self.opcode {
                Opcode::Jalr => write!(f, "{} r{}, r{}", name, d.index(), s.index()),
                _ => write!(f, "{} r{}", name, s.index()),
            },
            Operands::HiLo { r } => write!(f, "{} r{}", name, r.index()),
            Operands::MulDiv { s, t } => write!(f, "{} r{}, r{}", name, s.index(), t.index()),
            Operands::Cop { t, d } => write!(f, "{} r{}, cop0r{}", name, t.index(), d),
        }
    }
}

/// Disassemble a raw instruction word
///
/// Reserved encodings render as `.word 0x...`.
///
/// # Example
/// ```
/// use psi::core::cpu::disassemble;
///
/// assert_eq!(disassemble(0x00000000), "nop");
/// assert_eq!(disassemble(0x3C081F80), "lui r8, 0x1F80");
/// ```
pub fn disassemble(word: u32) -> String {
    match decode(word) {
        Ok(instruction) => instruction.to_string(),
        Err(_) => format!(".word 0x{:08X}", word),
    }
}
