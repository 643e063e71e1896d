/*
 * ==========================================================================
 * BLPARSE - Behavior Language Parser
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the BLPARSE project.
 * 
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://opensource.org/licenses/MIT
 *    https://www.apache.org/licenses/LICENSE-2.0
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{BlError, ErrorCategory};

/// Renders compiler-style diagnostics for BL parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// Errors without a known position (line `0`) are rendered without the
/// source excerpt.
pub struct DiagnosticPrinter {
    /// Full source text of the program being parsed.
    source: String,

    /// Name of the source file, for display only.
    file_name: String,
}

/// Machine-readable form of a diagnostic.
#[derive(Debug, Serialize)]
struct JsonDiagnostic<'a> {
    code: &'a str,
    category: ErrorCategory,
    message: &'a str,
    file: &'a str,
    line: usize,
    column: usize,
    help: Option<&'a str>,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders `error` as a human-readable block.
    ///
    /// # Output Example
    /// ```text
    /// error[BL0007]: instruction name same as primitive: move
    ///   --> walker.bl:3:12
    ///    |
    ///  3 | INSTRUCTION move IS
    ///    |             ^
    /// help: primitive actions cannot be redefined; choose another instruction name
    /// ```
    pub fn render(&self, error: &BlError) -> String {
        let mut out = String::new();
        let span = error.span;

        let _ = writeln!(out, "error[{}]: {}", error.code, error.message);

        if span.is_known() {
            let src_line = self
                .source
                .lines()
                .nth(span.line - 1)
                .unwrap_or("");

            let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, span.line, span.column + 1);
            let _ = writeln!(out, "   |");
            let _ = writeln!(out, "{:>3} | {}", span.line, src_line);
            let _ = writeln!(out, "   | {}^", " ".repeat(span.column));
        } else {
            let _ = writeln!(out, "  --> {}", self.file_name);
        }

        if let Some(help) = &error.help {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Renders `error` as a single-line JSON object.
    pub fn render_json(&self, error: &BlError) -> serde_json::Result<String> {
        let diagnostic = JsonDiagnostic {
            code: error.code,
            category: error.category,
            message: &error.message,
            file: &self.file_name,
            line: error.span.line,
            column: error.span.column + 1,
            help: error.help.as_deref(),
        };
        serde_json::to_string(&diagnostic)
    }

    /// Prints the human-readable rendering to stderr.
    pub fn print(&self, error: &BlError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;
    use crate::parse_source;
    use crate::span::Span;

    const SOURCE: &str = "PROGRAM p IS\n  INSTRUCTION move IS\n    skip\n  END move\nBEGIN\nEND p\n";

    #[test]
    fn render_points_at_offending_token() {
        let err = parse_source(SOURCE).unwrap_err();
        assert_eq!(err.code, codes::PRIMITIVE_NAME);

        let rendered = DiagnosticPrinter::new("walker.bl", SOURCE).render(&err);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[BL0007]: instruction name same as primitive: move");
        assert_eq!(lines[1], "  --> walker.bl:2:15");
        assert_eq!(lines[3], "  2 |   INSTRUCTION move IS");
        assert_eq!(lines[4], format!("   | {}^", " ".repeat(14)));
        assert!(lines[5].starts_with("help: "));
    }

    #[test]
    fn unknown_span_has_no_excerpt() {
        let err = BlError::envelope(codes::EXTRA_TEXT, "extra text", Span::unknown());
        let rendered = DiagnosticPrinter::new("x.bl", "").render(&err);
        assert_eq!(rendered, "error[BL0005]: extra text\n  --> x.bl\n");
    }

    #[test]
    fn json_rendering() {
        let err = BlError::consistency(codes::PROGRAM_NAME_MISMATCH, "mismatch", Span::new(6, 4));
        let json = DiagnosticPrinter::new("p.bl", SOURCE).render_json(&err).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code"], "BL0008");
        assert_eq!(value["category"], "consistency");
        assert_eq!(value["line"], 6);
        assert_eq!(value["column"], 5);
        assert!(value["help"].is_null());
    }
}
