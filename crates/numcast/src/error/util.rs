// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::r#type::Type;

pub(crate) fn value_max<'a>(value: Type) -> &'a str {
	match value {
		Type::Float4 => "+3.4e38",
		Type::Float8 => "+1.8e308",
		Type::Int1 => "127",
		Type::Int2 => "32_767",
		Type::Int4 => "2_147_483_647",
		Type::Int8 => "9_223_372_036_854_775_807",
		Type::Int16 => "170_141_183_460_469_231_731_687_303_715_884_105_727",
		Type::Uint1 => "255",
		Type::Uint2 => "65_535",
		Type::Uint4 => "4_294_967_295",
		Type::Uint8 => "18_446_744_073_709_551_615",
		Type::Uint16 => "340_282_366_920_938_463_463_374_607_431_768_211_455",
	}
}

pub(crate) fn value_range<'a>(value: Type) -> &'a str {
	match value {
		Type::Float4 => "-3.4e38 to +3.4e38",
		Type::Float8 => "-1.8e308 to +1.8e308",
		Type::Int1 => "-128 to 127",
		Type::Int2 => "-32_768 to 32_767",
		Type::Int4 => "-2_147_483_648 to 2_147_483_647",
		Type::Int8 => "-9_223_372_036_854_775_808 to 9_223_372_036_854_775_807",
		Type::Int16 => {
			"-170_141_183_460_469_231_731_687_303_715_884_105_728 to 170_141_183_460_469_231_731_687_303_715_884_105_727"
		}
		Type::Uint1 => "0 to 255",
		Type::Uint2 => "0 to 65_535",
		Type::Uint4 => "0 to 4_294_967_295",
		Type::Uint8 => "0 to 18_446_744_073_709_551_615",
		Type::Uint16 => "0 to 340_282_366_920_938_463_463_374_607_431_768_211_455",
	}
}
