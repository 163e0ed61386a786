// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// All supported numeric types
#[derive(
	Clone,
	Copy,
	Debug,
	Hash,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Serialize,
	Deserialize,
)]
pub enum Type {
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
}

impl Type {
	pub fn is_signed_integer(&self) -> bool {
		matches!(
			self,
			Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16
		)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(
			self,
			Type::Uint1
				| Type::Uint2 | Type::Uint4
				| Type::Uint8 | Type::Uint16
		)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}
}

impl Type {
	/// Width of the type in bytes
	pub fn size(&self) -> usize {
		match self {
			Type::Float4 => 4,
			Type::Float8 => 8,
			Type::Int1 => 1,
			Type::Int2 => 2,
			Type::Int4 => 4,
			Type::Int8 => 8,
			Type::Int16 => 16,
			Type::Uint1 => 1,
			Type::Uint2 => 2,
			Type::Uint4 => 4,
			Type::Uint8 => 8,
			Type::Uint16 => 16,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exactly_one_category_per_type() {
		for ty in [
			Type::Float4,
			Type::Float8,
			Type::Int1,
			Type::Int2,
			Type::Int4,
			Type::Int8,
			Type::Int16,
			Type::Uint1,
			Type::Uint2,
			Type::Uint4,
			Type::Uint8,
			Type::Uint16,
		] {
			let categories = [
				ty.is_signed_integer(),
				ty.is_unsigned_integer(),
				ty.is_floating_point(),
			];
			assert_eq!(
				categories.iter().filter(|c| **c).count(),
				1,
				"{} must belong to exactly one category",
				ty
			);
		}
	}

	#[test]
	fn test_size() {
		assert_eq!(Type::Int1.size(), 1);
		assert_eq!(Type::Uint2.size(), 2);
		assert_eq!(Type::Float4.size(), 4);
		assert_eq!(Type::Int8.size(), 8);
		assert_eq!(Type::Uint16.size(), 16);
	}

	#[test]
	fn test_display() {
		assert_eq!(Type::Int1.to_string(), "Int1");
		assert_eq!(Type::Uint16.to_string(), "Uint16");
		assert_eq!(Type::Float8.to_string(), "Float8");
	}
}
