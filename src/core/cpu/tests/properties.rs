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

use super::helpers::*;
use super::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_r0_stays_zero(value in any::<u32>()) {
        let mut cpu = CPU::new();
        cpu.set_reg(0, value).unwrap();
        prop_assert_eq!(cpu.reg(0).unwrap(), 0);
    }

    #[test]
    fn prop_register_round_trip(index in 1u8..32, value in any::<u32>()) {
        let mut cpu = CPU::new();
        cpu.set_reg(index, value).unwrap();
        prop_assert_eq!(cpu.reg(index).unwrap(), value);
    }

    #[test]
    fn prop_out_of_range_register_fails(index in 32u8..=255) {
        let cpu = CPU::new();
        prop_assert!(cpu.reg(index).is_err());
    }

    #[test]
    fn prop_addiu_wraps(a in any::<u32>(), imm in any::<i16>()) {
        let mut cpu = CPU::new();
        let mut bus = create_bus(&[]);
        cpu.set_reg(1, a).unwrap();
        exec(&mut cpu, &mut bus, addiu(2, 1, imm)).unwrap();
        prop_assert_eq!(cpu.reg(2).unwrap(), a.wrapping_add(imm as i32 as u32));
    }

    #[test]
    fn prop_sltu_matches_unsigned_compare(a in any::<u32>(), b in any::<u32>()) {
        let mut cpu = CPU::new();
        let mut bus = create_bus(&[]);
        cpu.set_reg(1, a).unwrap();
        cpu.set_reg(2, b).unwrap();
        exec(&mut cpu, &mut bus, sltu(3, 1, 2)).unwrap();
        prop_assert_eq!(cpu.reg(3).unwrap(), (a < b) as u32);
    }

    #[test]
    fn prop_bne_target(imm in any::<i16>()) {
        let mut cpu = CPU::new();
        let mut bus = create_bus(&[]);
        cpu.set_pc(0x80100008);
        cpu.set_reg(1, 1).unwrap();
        cpu.set_reg(2, 2).unwrap();

        // Branch sits at 0x80100000
        exec(&mut cpu, &mut bus, bne(1, 2, imm)).unwrap();
        let expected = 0x80100004u32.wrapping_add(((imm as i32) << 2) as u32);
        prop_assert_eq!(cpu.pc(), expected);
    }
}
