// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Call-site metadata attached to a diagnostic.
///
/// A fragment only enriches the rendered failure text; it never changes
/// the outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnedFragment {
	/// No location information available
	None,

	/// Captured call site, as produced by the cast macros
	CallSite {
		file: String,
		line: u32,
		function: Option<String>,
	},

	/// Caller supplied context with no source location
	Internal {
		text: String,
	},
}

impl OwnedFragment {
	/// Create a call-site fragment without an enclosing function name
	pub fn call_site(file: impl Into<String>, line: u32) -> Self {
		OwnedFragment::CallSite {
			file: file.into(),
			line,
			function: None,
		}
	}

	/// Create a call-site fragment with an enclosing function name
	pub fn call_site_in(
		file: impl Into<String>,
		line: u32,
		function: impl Into<String>,
	) -> Self {
		OwnedFragment::CallSite {
			file: file.into(),
			line,
			function: Some(function.into()),
		}
	}

	/// Create an Internal fragment
	pub fn internal(text: impl Into<String>) -> Self {
		OwnedFragment::Internal {
			text: text.into(),
		}
	}

	/// Render the location for inclusion in a diagnostic, if any
	pub fn location(&self) -> Option<String> {
		match self {
			OwnedFragment::None => None,
			OwnedFragment::CallSite {
				file,
				line,
				function: Some(function),
			} => Some(format!("{}:{} (in {})", file, line, function)),
			OwnedFragment::CallSite {
				file,
				line,
				function: None,
			} => Some(format!("{}:{}", file, line)),
			OwnedFragment::Internal {
				text,
			} => Some(text.clone()),
		}
	}
}

/// Trait to provide an [`OwnedFragment`] either directly or lazily (via
/// closure). The closure form keeps the success path allocation free.
pub trait IntoFragment {
	fn into_fragment(self) -> OwnedFragment;
}

impl IntoFragment for OwnedFragment {
	fn into_fragment(self) -> OwnedFragment {
		self
	}
}

impl IntoFragment for &OwnedFragment {
	fn into_fragment(self) -> OwnedFragment {
		self.clone()
	}
}

impl<F> IntoFragment for F
where
	F: FnOnce() -> OwnedFragment,
{
	fn into_fragment(self) -> OwnedFragment {
		self()
	}
}

/// Macro to create an [`OwnedFragment`] with automatic location capture
#[macro_export]
macro_rules! fragment {
	(call_site) => {
		$crate::OwnedFragment::call_site(file!(), line!())
	};

	(call_site in $function:expr) => {
		$crate::OwnedFragment::call_site_in(file!(), line!(), $function)
	};

	(internal: $text:expr) => {
		$crate::OwnedFragment::internal($text)
	};

	(none) => {
		$crate::OwnedFragment::None
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_call_site_location() {
		let fragment = OwnedFragment::call_site("src/main.rs", 42);
		assert_eq!(
			fragment.location().unwrap(),
			"src/main.rs:42".to_string()
		);
	}

	#[test]
	fn test_call_site_location_with_function() {
		let fragment = OwnedFragment::call_site_in(
			"src/main.rs",
			42,
			"parse_limit",
		);
		assert_eq!(
			fragment.location().unwrap(),
			"src/main.rs:42 (in parse_limit)".to_string()
		);
	}

	#[test]
	fn test_none_has_no_location() {
		assert_eq!(OwnedFragment::None.location(), None);
	}

	#[test]
	fn test_closure_is_lazy() {
		let fragment = (|| OwnedFragment::internal("deferred"))
			.into_fragment();
		assert_eq!(fragment, OwnedFragment::internal("deferred"));
	}

	#[test]
	fn test_fragment_macro_captures_file() {
		let fragment = fragment!(call_site);
		match fragment {
			OwnedFragment::CallSite {
				file,
				line,
				function,
			} => {
				assert!(file.ends_with("fragment.rs"));
				assert!(line > 0);
				assert_eq!(function, None);
			}
			other => panic!("expected call site, got {:?}", other),
		}
	}
}
