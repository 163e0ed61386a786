// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	fragment::{IntoFragment, OwnedFragment},
	value::is::IsNumber,
};

/// Validated conversion into `To`.
///
/// The value is checked against the target type's representable range
/// before it is narrowed or widened; a value that is not representable
/// produces a classified [`Error`](crate::Error) instead of wrapping or
/// truncating. Integer comparisons happen in a widening integer domain
/// (`i128` / `u128`), float comparisons in `f64`, so the comparison
/// itself can never overflow or lose the significant bits it compares.
///
/// With the `unchecked` feature enabled every implementation degrades to
/// the raw `as` conversion: no failure path, undefined numeric result on
/// invalid input.
pub trait CheckedCast<To: IsNumber>: IsNumber {
	/// Validate `self` against `To`'s range and convert.
	///
	/// The fragment only enriches failure text; it never changes the
	/// outcome. Pass [`OwnedFragment::None`](crate::OwnedFragment) (or
	/// call [`numeric_cast`]) when no call-site metadata is wanted, or
	/// a closure for lazy construction.
	fn checked_cast(
		self,
		fragment: impl IntoFragment,
	) -> crate::Result<To>;
}

/// Validate and convert `value` into `To`, without call-site metadata.
pub fn numeric_cast<To, From>(value: From) -> crate::Result<To>
where
	To: IsNumber,
	From: CheckedCast<To>,
{
	value.checked_cast(OwnedFragment::None)
}

/// Macro version of [`numeric_cast`] that captures the call site, so a
/// failure names the file and line (and optionally the enclosing
/// function) that attempted the conversion.
///
/// ```
/// let narrowed = numcast::numeric_cast!(u8, 200i32).unwrap();
/// assert_eq!(narrowed, 200u8);
///
/// let err = numcast::numeric_cast!(u8, -1i32, "read_header").unwrap_err();
/// assert_eq!(err.diagnostic().code, "CAST_001");
/// ```
#[macro_export]
macro_rules! numeric_cast {
	($to:ty, $value:expr) => {
		$crate::CheckedCast::<$to>::checked_cast($value, || {
			$crate::OwnedFragment::call_site(file!(), line!())
		})
	};

	($to:ty, $value:expr, $function:expr) => {
		$crate::CheckedCast::<$to>::checked_cast($value, || {
			$crate::OwnedFragment::call_site_in(
				file!(),
				line!(),
				$function,
			)
		})
	};
}

macro_rules! impl_cast_signed_to_signed {
	($src:ty => $($dst:ty),*) => {
		$(
			impl CheckedCast<$dst> for $src {
				fn checked_cast(
					self,
					fragment: impl $crate::fragment::IntoFragment,
				) -> $crate::Result<$dst> {
					if cfg!(feature = "unchecked") {
						return Ok(self as $dst);
					}
					let wide = self as i128;
					if wide < <$dst>::MIN as i128 || wide > <$dst>::MAX as i128 {
						$crate::return_error!($crate::error::CastError::OutOfRange {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					Ok(self as $dst)
				}
			}
		)*
	};
}

macro_rules! impl_cast_signed_to_unsigned {
	($src:ty => $($dst:ty),*) => {
		$(
			impl CheckedCast<$dst> for $src {
				fn checked_cast(
					self,
					fragment: impl $crate::fragment::IntoFragment,
				) -> $crate::Result<$dst> {
					if cfg!(feature = "unchecked") {
						return Ok(self as $dst);
					}
					if self < 0 {
						$crate::return_error!($crate::error::CastError::NegativeToUnsigned {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					if self as u128 > <$dst>::MAX as u128 {
						$crate::return_error!($crate::error::CastError::OutOfRange {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					Ok(self as $dst)
				}
			}
		)*
	};
}

macro_rules! impl_cast_unsigned_to_int {
	($src:ty => $($dst:ty),*) => {
		$(
			impl CheckedCast<$dst> for $src {
				fn checked_cast(
					self,
					fragment: impl $crate::fragment::IntoFragment,
				) -> $crate::Result<$dst> {
					if cfg!(feature = "unchecked") {
						return Ok(self as $dst);
					}
					if self as u128 > <$dst>::MAX as u128 {
						$crate::return_error!($crate::error::CastError::OutOfRange {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					Ok(self as $dst)
				}
			}
		)*
	};
}

macro_rules! impl_cast_int_to_float {
	($src:ty => $($dst:ty),*) => {
		$(
			impl CheckedCast<$dst> for $src {
				fn checked_cast(
					self,
					fragment: impl $crate::fragment::IntoFragment,
				) -> $crate::Result<$dst> {
					if cfg!(feature = "unchecked") {
						return Ok(self as $dst);
					}
					// Only u128 values above f32::MAX can fail here;
					// precision loss is accepted, range is what counts.
					let wide = self as f64;
					if wide < <$dst>::MIN as f64 || wide > <$dst>::MAX as f64 {
						$crate::return_error!($crate::error::CastError::OutOfRange {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					Ok(self as $dst)
				}
			}
		)*
	};
}

macro_rules! impl_cast_float_to_int {
	($src:ty => $($dst:ty),*) => {
		$(
			impl CheckedCast<$dst> for $src {
				fn checked_cast(
					self,
					fragment: impl $crate::fragment::IntoFragment,
				) -> $crate::Result<$dst> {
					if cfg!(feature = "unchecked") {
						return Ok(self as $dst);
					}
					if self.is_nan() {
						$crate::return_error!($crate::error::CastError::NanToInteger {
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					if self.is_infinite() {
						$crate::return_error!($crate::error::CastError::InfinityToInteger {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					let truncated = (self as f64).trunc();
					// MAX as f64 rounds up for the 64 and 128 bit targets,
					// so the upper bound is exclusive.
					if truncated >= <$dst>::MIN as f64
						&& truncated < (<$dst>::MAX as f64) + 1.0
					{
						Ok(truncated as $dst)
					} else {
						$crate::return_error!($crate::error::CastError::OutOfRange {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
				}
			}
		)*
	};
}

macro_rules! impl_cast_float_to_float {
	($src:ty => $($dst:ty),*) => {
		$(
			impl CheckedCast<$dst> for $src {
				fn checked_cast(
					self,
					fragment: impl $crate::fragment::IntoFragment,
				) -> $crate::Result<$dst> {
					if cfg!(feature = "unchecked") {
						return Ok(self as $dst);
					}
					// NaN and ±inf are representable at every float width.
					if !self.is_finite() {
						return Ok(self as $dst);
					}
					let wide = self as f64;
					if wide < <$dst>::MIN as f64 || wide > <$dst>::MAX as f64 {
						$crate::return_error!($crate::error::CastError::OutOfRange {
							value: self.to_string(),
							source: <$src as $crate::value::r#type::GetType>::get_type(),
							target: <$dst as $crate::value::r#type::GetType>::get_type(),
							fragment: fragment.into_fragment(),
						});
					}
					Ok(self as $dst)
				}
			}
		)*
	};
}

mod f32;
mod f64;
mod i8;
mod i16;
mod i32;
mod i64;
mod i128;
mod u8;
mod u16;
mod u32;
mod u64;
mod u128;
