// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{
	CastError,
	util::{value_max, value_range},
};
use crate::fragment::OwnedFragment;

/// A structured, renderable description of a rejected conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: OwnedFragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

impl IntoDiagnostic for CastError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CastError::NegativeToUnsigned {
				value,
				source,
				target,
				fragment,
			} => {
				let range = value_range(target);
				let label = Some(format!(
					"value '{}' of type {} is negative but {} is unsigned",
					value, source, target
				));
				Diagnostic {
					code: "CAST_001".to_string(),
					message: format!(
						"cannot cast negative value to {}",
						target
					),
					fragment,
					label,
					help: Some(
						"use a signed target type or ensure the value is not negative"
							.to_string(),
					),
					notes: vec![format!(
						"valid range: {}",
						range
					)],
				}
			}

			CastError::OutOfRange {
				value,
				source,
				target,
				fragment,
			} => {
				let range = value_range(target);
				let label = Some(format!(
					"value '{}' of type {} exceeds the valid range for type {} ({})",
					value, source, target, range
				));
				Diagnostic {
					code: "CAST_002".to_string(),
					message: "number out of range"
						.to_string(),
					fragment,
					label,
					help: Some(format!(
						"use a value within range {} or use a wider type",
						range
					)),
					notes: vec![format!(
						"valid range: {}",
						range
					)],
				}
			}

			CastError::NanToInteger {
				source,
				target,
				fragment,
			} => {
				let label = Some(format!(
					"NaN (Not a Number) of type {} has no {} representation",
					source, target
				));
				Diagnostic {
					code: "CAST_003".to_string(),
					message: format!(
						"NaN cannot be cast to {}",
						target
					),
					fragment,
					label,
					help: Some(
						"use a floating point target type or filter NaN values first"
							.to_string(),
					),
					notes: vec![],
				}
			}

			CastError::InfinityToInteger {
				value,
				source,
				target,
				fragment,
			} => {
				let label = Some(format!(
					"value '{}' of type {} has no {} representation",
					value, source, target
				));
				Diagnostic {
					code: "CAST_004".to_string(),
					message: format!(
						"infinity cannot be cast to {}",
						target
					),
					fragment,
					label,
					help: Some(
						"use a floating point target type or filter non-finite values first"
							.to_string(),
					),
					notes: vec![format!(
						"the maximum for {} is {}",
						target,
						value_max(target)
					)],
				}
			}
		}
	}
}
