// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Validated numeric conversions with classified, diagnosable failures.
//!
//! Every conversion between the supported numeric primitives (`i8` through
//! `i128`, `u8` through `u128`, `f32`, `f64`) is validated before the value
//! is narrowed or widened: a value that is not representable in the target
//! type produces a classified [`Error`] instead of a silently wrapped or
//! truncated result.
//!
//! ```
//! use numcast::numeric_cast;
//!
//! let narrowed: u8 = numeric_cast(200i32).unwrap();
//! assert_eq!(narrowed, 200);
//!
//! let err = numeric_cast::<u8, _>(-1i32).unwrap_err();
//! assert_eq!(err.diagnostic().code, "CAST_001");
//! ```
//!
//! The [`numeric_cast!`] macro additionally captures the call site, so the
//! rendered failure names the file and line that attempted the conversion:
//!
//! ```
//! let err = numcast::numeric_cast!(i8, 1000i64).unwrap_err();
//! assert_eq!(err.diagnostic().code, "CAST_002");
//! ```
//!
//! Conversions between the one-byte character types (`i8`, `u8` and the
//! platform alias `std::ffi::c_char`) have a dedicated entry point,
//! [`char_cast`], which is defined as lossless bit reinterpretation and
//! never fails. This is a different contract from the range-checked
//! `i8` ↔ `u8` conversion of the general path.
//!
//! # The `unchecked` feature
//!
//! Enabling the `unchecked` cargo feature compiles validation out of the
//! general conversion family entirely: every cast becomes the raw `as`
//! narrowing and the failure path is unreachable. The contract changes
//! from "fails on invalid input" to "undefined numeric result on invalid
//! input, never fails". Only enable it for call sites that have already
//! established range safety by other means.

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{
	CastError, DefaultRenderer, Diagnostic, DiagnosticRenderer, Error,
	IntoDiagnostic, Result,
};
pub use fragment::{IntoFragment, OwnedFragment};
pub use value::{
	char::{CharCast, char_cast},
	is::{IsFloat, IsInt, IsNumber, IsUint},
	number::{CheckedCast, numeric_cast},
	r#type::{GetType, Type},
};
