// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();

		let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

		if let Some(location) = d.fragment.location() {
			let _ = writeln!(&mut output, " --> {}", location);
		}

		if let Some(label) = &d.label {
			let _ = writeln!(&mut output, "  = {}", label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(&mut output, "\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = writeln!(&mut output, "\nnote: {}", note);
		}

		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Type, error::CastError, error::IntoDiagnostic,
		fragment::OwnedFragment,
	};

	#[test]
	fn test_render_with_location() {
		let diagnostic = CastError::OutOfRange {
			value: "200".to_string(),
			source: Type::Int4,
			target: Type::Int1,
			fragment: OwnedFragment::call_site_in(
				"src/main.rs",
				42,
				"parse_limit",
			),
		}
		.into_diagnostic();

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("error[CAST_002]: number out of range"));
		assert!(out.contains(" --> src/main.rs:42 (in parse_limit)"));
		assert!(out.contains("-128 to 127"));
		assert!(out.contains("help: "));
		assert!(out.contains("note: valid range: -128 to 127"));
	}

	#[test]
	fn test_render_without_location() {
		let diagnostic = CastError::NanToInteger {
			source: Type::Float8,
			target: Type::Int4,
			fragment: OwnedFragment::None,
		}
		.into_diagnostic();

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("error[CAST_003]: "));
		assert!(!out.contains(" --> "));
	}
}
