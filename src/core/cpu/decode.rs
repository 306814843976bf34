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

//! MIPS I instruction decoder
//!
//! Turns a raw 32-bit word into an [`Instruction`]: an opcode tag plus
//! operands already extracted, sign- or zero-extended and scaled. The
//! execution engine never looks at instruction bits.
//!
//! The decoder knows the whole MIPS I opcode space. Whether the engine can
//! execute an opcode is a separate question; reserved encodings are the only
//! thing that fails here.

use crate::core::error::{EmulatorError, Result};

/// General purpose register index (0-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reg(u8);

impl Reg {
    /// $zero, hardwired to 0
    pub const ZERO: Reg = Reg(0);
    /// $t0
    pub const T0: Reg = Reg(8);
    /// $ra
    pub const RA: Reg = Reg(31);

    /// Validate a register index
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::InvalidRegister` for indices above 31.
    pub fn new(index: u8) -> Result<Self> {
        if index < 32 {
            Ok(Reg(index))
        } else {
            Err(EmulatorError::InvalidRegister { index })
        }
    }

    /// Register from a 5-bit instruction field
    #[inline(always)]
    fn field(instr: u32, shift: u32) -> Self {
        Reg(((instr >> shift) & 0x1F) as u8)
    }

    /// Register index
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Instruction opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // SPECIAL
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Srav,
    Jr,
    Jalr,
    Syscall,
    Break,
    Mfhi,
    Mthi,
    Mflo,
    Mtlo,
    Mult,
    Multu,
    Div,
    Divu,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Sltu,
    // BCONDZ
    Bltz,
    Bgez,
    Bltzal,
    Bgezal,
    // Primary
    J,
    Jal,
    Beq,
    Bne,
    Blez,
    Bgtz,
    Addi,
    Addiu,
    Slti,
    Sltiu,
    Andi,
    Ori,
    Xori,
    Lui,
    Lb,
    Lh,
    Lwl,
    Lw,
    Lbu,
    Lhu,
    Lwr,
    Sb,
    Sh,
    Swl,
    Sw,
    Swr,
    // COP0
    Mfc0,
    Mtc0,
    Rfe,
    // Other coprocessors, not broken down further
    Cop1,
    Cop2,
    Cop3,
    Lwc0,
    Lwc1,
    Lwc2,
    Lwc3,
    Swc0,
    Swc1,
    Swc2,
    Swc3,
}

impl Opcode {
    /// Assembler mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Sll => "sll",
            Opcode::Srl => "srl",
            Opcode::Sra => "sra",
            Opcode::Sllv => "sllv",
            Opcode::Srlv => "srlv",
            Opcode::Srav => "srav",
            Opcode::Jr => "jr",
            Opcode::Jalr => "jalr",
            Opcode::Syscall => "syscall",
            Opcode::Break => "break",
            Opcode::Mfhi => "mfhi",
            Opcode::Mthi => "mthi",
            Opcode::Mflo => "mflo",
            Opcode::Mtlo => "mtlo",
            Opcode::Mult => "mult",
            Opcode::Multu => "multu",
            Opcode::Div => "div",
            Opcode::Divu => "divu",
            Opcode::Add => "add",
            Opcode::Addu => "addu",
            Opcode::Sub => "sub",
            Opcode::Subu => "subu",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Nor => "nor",
            Opcode::Slt => "slt",
            Opcode::Sltu => "sltu",
            Opcode::Bltz => "bltz",
            Opcode::Bgez => "bgez",
            Opcode::Bltzal => "bltzal",
            Opcode::Bgezal => "bgezal",
            Opcode::J => "j",
            Opcode::Jal => "jal",
            Opcode::Beq => "beq",
            Opcode::Bne => "bne",
            Opcode::Blez => "blez",
            Opcode::Bgtz => "bgtz",
            Opcode::Addi => "addi",
            Opcode::Addiu => "addiu",
            Opcode::Slti => "slti",
            Opcode::Sltiu => "sltiu",
            Opcode::Andi => "andi",
            Opcode::Ori => "ori",
            Opcode::Xori => "xori",
            Opcode::Lui => "lui",
            Opcode::Lb => "lb",
            Opcode::Lh => "lh",
            Opcode::Lwl => "lwl",
            Opcode::Lw => "lw",
            Opcode::Lbu => "lbu",
            Opcode::Lhu => "lhu",
            Opcode::Lwr => "lwr",
            Opcode::Sb => "sb",
            Opcode::Sh => "sh",
            Opcode::Swl => "swl",
            Opcode::Sw => "sw",
            Opcode::Swr => "swr",
            Opcode::Mfc0 => "mfc0",
            Opcode::Mtc0 => "mtc0",
            Opcode::Rfe => "rfe",
            Opcode::Cop1 => "cop1",
            Opcode::Cop2 => "cop2",
            Opcode::Cop3 => "cop3",
            Opcode::Lwc0 => "lwc0",
            Opcode::Lwc1 => "lwc1",
            Opcode::Lwc2 => "lwc2",
            Opcode::Lwc3 => "lwc3",
            Opcode::Swc0 => "swc0",
            Opcode::Swc1 => "swc1",
            Opcode::Swc2 => "swc2",
            Opcode::Swc3 => "swc3",
        }
    }
}

/// Decoded operands, one shape per instruction format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// No register operands (SYSCALL, BREAK, RFE, COPn)
    None,
    /// `$d, $s, $t` (ADDU, OR, SLT, ...)
    Arith { d: Reg, s: Reg, t: Reg },
    /// `$d, $t, shift` (SLL, SRL, SRA)
    Shift { d: Reg, t: Reg, shift: u32 },
    /// `$d, $t, $s` (SLLV, SRLV, SRAV)
    ShiftVar { d: Reg, t: Reg, s: Reg },
    /// `$t, $s, imm`; imm is sign- or zero-extended per opcode
    Imm { t: Reg, s: Reg, imm: u32 },
    /// `$t, imm` (LUI)
    Upper { t: Reg, imm: u32 },
    /// `$t, offset($base)`
    Mem { t: Reg, base: Reg, offset: i16 },
    /// `$s, $t, pcrel` (BEQ, BNE, and BCONDZ/BLEZ/BGTZ with `t = $zero`)
    Branch { s: Reg, t: Reg, pcrel: i32 },
    /// 26-bit jump target, already shifted left by 2
    Jump { target: u32 },
    /// `$d, $s` (JR, JALR)
    JumpReg { d: Reg, s: Reg },
    /// `$d` (MFHI, MFLO) or `$s` (MTHI, MTLO), stored as one register
    HiLo { r: Reg },
    /// `$s, $t` (MULT, DIV, ...)
    MulDiv { s: Reg, t: Reg },
    /// `$t, $d` with `$d` a coprocessor register (MFC0, MTC0)
    Cop { t: Reg, d: u8 },
}

/// A decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Operands,
    /// Raw encoding
    pub word: u32,
}

impl Instruction {
    /// The architectural no-op, `sll $zero, $zero, 0`
    pub const NOP: Instruction = Instruction {
        opcode: Opcode::Sll,
        operands: Operands::Shift {
            d: Reg::ZERO,
            t: Reg::ZERO,
            shift: 0,
        },
        word: 0,
    };

    fn new(opcode: Opcode, operands: Operands, word: u32) -> Self {
        Self {
            opcode,
            operands,
            word,
        }
    }
}

/// Decode R-type fields
///
/// Format: | op (6) | rs (5) | rt (5) | rd (5) | shamt (5) | funct (6) |
#[inline(always)]
fn decode_r_type(instr: u32) -> (Reg, Reg, Reg, u32, u32) {
    let rs = Reg::field(instr, 21);
    let rt = Reg::field(instr, 16);
    let rd = Reg::field(instr, 11);
    let shamt = (instr >> 6) & 0x1F;
    let funct = instr & 0x3F;
    (rs, rt, rd, shamt, funct)
}

/// Decode I-type fields
///
/// Format: | op (6) | rs (5) | rt (5) | immediate (16) |
#[inline(always)]
fn decode_i_type(instr: u32) -> (Reg, Reg, u16) {
    let rs = Reg::field(instr, 21);
    let rt = Reg::field(instr, 16);
    let imm = (instr & 0xFFFF) as u16;
    (rs, rt, imm)
}

/// Sign-extend a 16-bit immediate
#[inline(always)]
fn sign_extend(imm: u16) -> u32 {
    imm as i16 as i32 as u32
}

/// PC-relative branch offset
///
/// The engine applies it to a PC that already points past the delay slot,
/// i.e. 8 bytes after the branch. The architectural target is 4 bytes after
/// the branch plus the scaled immediate, hence the -4.
#[inline(always)]
fn branch_offset(imm: u16) -> i32 {
    ((imm as i16 as i32) << 2) - 4
}

/// Decode a 32-bit instruction word
///
/// # Errors
///
/// Returns `EmulatorError::DecodeFailure` for reserved encodings.
///
/// # Example
///
/// ```
/// use psi::core::cpu::{decode, Opcode, Operands, Reg};
///
/// let inst = decode(0x3C081F80).unwrap(); // lui $t0, 0x1F80
/// assert_eq!(inst.opcode, Opcode::Lui);
/// assert_eq!(inst.operands, Operands::Upper { t: Reg::T0, imm: 0x1F80 });
/// ```
pub fn decode(word: u32) -> Result<Instruction> {
    let op = word >> 26;
    let fail = || EmulatorError::DecodeFailure { word };

    let (rs, rt, imm) = decode_i_type(word);
    let imm_se = Operands::Imm {
        t: rt,
        s: rs,
        imm: sign_extend(imm),
    };
    let imm_ze = Operands::Imm {
        t: rt,
        s: rs,
        imm: imm as u32,
    };
    let mem = Operands::Mem {
        t: rt,
        base: rs,
        offset: imm as i16,
    };
    let branch = |t: Reg| Operands::Branch {
        s: rs,
        t,
        pcrel: branch_offset(imm),
    };

    let (opcode, operands) = match op {
        0x00 => return decode_special(word),
        0x01 => {
            // Bit 0 of rt selects BGEZ over BLTZ, bit 4 selects linking.
            // The remaining rt bits are ignored by the R3000A.
            let opcode = match (rt.0 & 0x01 != 0, rt.0 & 0x1E == 0x10) {
                (false, false) => Opcode::Bltz,
                (true, false) => Opcode::Bgez,
                (false, true) => Opcode::Bltzal,
                (true, true) => Opcode::Bgezal,
            };
            (opcode, branch(Reg::ZERO))
        }
        0x02 | 0x03 => {
            let target = (word & 0x03FF_FFFF) << 2;
            let opcode = if op == 0x02 { Opcode::J } else { Opcode::Jal };
            (opcode, Operands::Jump { target })
        }
        0x04 => (Opcode::Beq, branch(rt)),
        0x05 => (Opcode::Bne, branch(rt)),
        0x06 => (Opcode::Blez, branch(Reg::ZERO)),
        0x07 => (Opcode::Bgtz, branch(Reg::ZERO)),
        0x08 => (Opcode::Addi, imm_se),
        0x09 => (Opcode::Addiu, imm_se),
        0x0A => (Opcode::Slti, imm_se),
        0x0B => (Opcode::Sltiu, imm_se),
        0x0C => (Opcode::Andi, imm_ze),
        0x0D => (Opcode::Ori, imm_ze),
        0x0E => (Opcode::Xori, imm_ze),
        0x0F => (
            Opcode::Lui,
            Operands::Upper {
                t: rt,
                imm: imm as u32,
            },
        ),
        0x10 => return decode_cop0(word),
        0x11 => (Opcode::Cop1, Operands::None),
        0x12 => (Opcode::Cop2, Operands::None),
        0x13 => (Opcode::Cop3, Operands::None),
        0x20 => (Opcode::Lb, mem),
        0x21 => (Opcode::Lh, mem),
        0x22 => (Opcode::Lwl, mem),
        0x23 => (Opcode::Lw, mem),
        0x24 => (Opcode::Lbu, mem),
        0x25 => (Opcode::Lhu, mem),
        0x26 => (Opcode::Lwr, mem),
        0x28 => (Opcode::Sb, mem),
        0x29 => (Opcode::Sh, mem),
        0x2A => (Opcode::Swl, mem),
        0x2B => (Opcode::Sw, mem),
        0x2E => (Opcode::Swr, mem),
        0x30 => (Opcode::Lwc0, mem),
        0x31 => (Opcode::Lwc1, mem),
        0x32 => (Opcode::Lwc2, mem),
        0x33 => (Opcode::Lwc3, mem),
        0x38 => (Opcode::Swc0, mem),
        0x39 => (Opcode::Swc1, mem),
        0x3A => (Opcode::Swc2, mem),
        0x3B => (Opcode::Swc3, mem),
        _ => return Err(fail()),
    };

    Ok(Instruction::new(opcode, operands, word))
}

/// Decode SPECIAL instructions (opcode 0x00), selected by the funct field
fn decode_special(word: u32) -> Result<Instruction> {
    let (rs, rt, rd, shamt, funct) = decode_r_type(word);

    let arith = Operands::Arith {
        d: rd,
        s: rs,
        t: rt,
    };
    let shift = Operands::Shift {
        d: rd,
        t: rt,
        shift: shamt,
    };
    let shift_var = Operands::ShiftVar {
        d: rd,
        t: rt,
        s: rs,
    };
    let muldiv = Operands::MulDiv { s: rs, t: rt };

    let (opcode, operands) = match funct {
        0x00 => (Opcode::Sll, shift),
        0x02 => (Opcode::Srl, shift),
        0x03 => (Opcode::Sra, shift),
        0x04 => (Opcode::Sllv, shift_var),
        0x06 => (Opcode::Srlv, shift_var),
        0x07 => (Opcode::Srav, shift_var),
        0x08 => (Opcode::Jr, Operands::JumpReg { d: Reg::ZERO, s: rs }),
        0x09 => (Opcode::Jalr, Operands::JumpReg { d: rd, s: rs }),
        0x0C => (Opcode::Syscall, Operands::None),
        0x0D => (Opcode::Break, Operands::None),
        0x10 => (Opcode::Mfhi, Operands::HiLo { r: rd }),
        0x11 => (Opcode::Mthi, Operands::HiLo { r: rs }),
        0x12 => (Opcode::Mflo, Operands::HiLo { r: rd }),
        0x13 => (Opcode::Mtlo, Operands::HiLo { r: rs }),
        0x18 => (Opcode::Mult, muldiv),
        0x19 => (Opcode::Multu, muldiv),
        0x1A => (Opcode::Div, muldiv),
        0x1B => (Opcode::Divu, muldiv),
        0x20 => (Opcode::Add, arith),
        0x21 => (Opcode::Addu, arith),
        0x22 => (Opcode::Sub, arith),
        0x23 => (Opcode::Subu, arith),
        0x24 => (Opcode::And, arith),
        0x25 => (Opcode::Or, arith),
        0x26 => (Opcode::Xor, arith),
        0x27 => (Opcode::Nor, arith),
        0x2A => (Opcode::Slt, arith),
        0x2B => (Opcode::Sltu, arith),
        _ => return Err(EmulatorError::DecodeFailure { word }),
    };

    Ok(Instruction::new(opcode, operands, word))
}

/// Decode COP0 instructions (opcode 0x10), selected by bits [25:21]
fn decode_cop0(word: u32) -> Result<Instruction> {
    let (rs, rt, rd, _, funct) = decode_r_type(word);
    let cop = Operands::Cop { t: rt, d: rd.0 };

    let (opcode, operands) = match rs.0 {
        0x00 => (Opcode::Mfc0, cop),
        0x04 => (Opcode::Mtc0, cop),
        0x10 if funct == 0x10 => (Opcode::Rfe, Operands::None),
        _ => return Err(EmulatorError::DecodeFailure { word }),
    };

    Ok(Instruction::new(opcode, operands, word))
}
