// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::*;

impl_cast_signed_to_signed!(i16 => i8, i16, i32, i64, i128);
impl_cast_signed_to_unsigned!(i16 => u8, u16, u32, u64, u128);
impl_cast_int_to_float!(i16 => f32, f64);

#[cfg(all(test, not(feature = "unchecked")))]
mod tests {
	use crate::{CheckedCast, OwnedFragment, Result};

	mod i8 {
		use super::*;

		#[test]
		fn test_checked_cast_happy() {
			let x: i16 = -128;
			let y: Result<i8> = x.checked_cast(OwnedFragment::None);
			assert_eq!(y.unwrap(), i8::MIN);
		}

		#[test]
		fn test_above_max() {
			let x: i16 = 128;
			let y: Result<i8> = x.checked_cast(OwnedFragment::None);
			assert_eq!(
				y.unwrap_err().diagnostic().code,
				"CAST_002"
			);
		}

		#[test]
		fn test_below_min() {
			let x: i16 = -129;
			let y: Result<i8> = x.checked_cast(OwnedFragment::None);
			assert_eq!(
				y.unwrap_err().diagnostic().code,
				"CAST_002"
			);
		}
	}

	mod u16 {
		use super::*;

		#[test]
		fn test_checked_cast_happy() {
			let x: i16 = i16::MAX;
			let y: Result<u16> = x.checked_cast(OwnedFragment::None);
			assert_eq!(y.unwrap(), 32767u16);
		}

		#[test]
		fn test_negative_fails() {
			let x: i16 = -1;
			let y: Result<u16> = x.checked_cast(OwnedFragment::None);
			assert_eq!(
				y.unwrap_err().diagnostic().code,
				"CAST_001"
			);
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_exact_conversion() {
			let x: i16 = 12345;
			let y: Result<f32> = x.checked_cast(OwnedFragment::None);
			assert_eq!(y.unwrap(), 12345.0f32);
		}
	}
}
