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

use serde::Serialize;
use thiserror::Error;

use crate::span::Span;

/// Stable error codes reported by the BL parser.
///
/// Codes never change meaning once published; new failure modes get new
/// codes.
pub mod codes {
    /// `PROGRAM` is not the first token.
    pub const PROGRAM_EXPECTED: &str = "BL0001";
    /// `IS` missing after a program or instruction name.
    pub const IS_EXPECTED: &str = "BL0002";
    /// `BEGIN` missing after the instruction declarations.
    pub const BEGIN_EXPECTED: &str = "BL0003";
    /// Program or instruction is not closed by `END`.
    pub const END_EXPECTED: &str = "BL0004";
    /// Tokens follow the program's closing name.
    pub const EXTRA_TEXT: &str = "BL0005";
    /// A program or instruction name is not a legal identifier.
    pub const INVALID_IDENTIFIER: &str = "BL0006";
    /// An instruction is named after a primitive.
    pub const PRIMITIVE_NAME: &str = "BL0007";
    pub const PROGRAM_NAME_MISMATCH: &str = "BL0008";
    pub const INSTRUCTION_NAME_MISMATCH: &str = "BL0009";
    pub const DUPLICATE_INSTRUCTION: &str = "BL0010";
    /// A token that cannot start or continue a statement.
    pub const UNEXPECTED_TOKEN: &str = "BL0011";
    pub const NESTED_INSTRUCTION: &str = "BL0012";
    pub const UNEXPECTED_END: &str = "BL0013";
    pub const UNKNOWN_CONDITION: &str = "BL0014";
    /// IF / WHILE bodies nested past the parser's depth limit.
    pub const NESTING_TOO_DEEP: &str = "BL0015";
}

/// Broad classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Missing or misplaced `PROGRAM`, `IS`, `BEGIN`, `END` or end-of-input.
    Envelope,
    /// Illegal or reserved program / instruction name.
    Naming,
    /// Opening and closing names disagree, or a name is declared twice.
    Consistency,
    /// Reported by the statement parser for a malformed block body.
    Block,
}

/// The single error type of the BL parser.
///
/// Every parsing operation returns the first failure it meets as a
/// `BlError`; no partially assembled program is ever handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error[{code}]: {message}")]
pub struct BlError {
    /// Stable error code (BL0001, BL0002, …)
    pub code: &'static str,

    pub category: ErrorCategory,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl BlError {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        category: ErrorCategory,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            code,
            category,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Envelope error (missing structural keyword or marker)
    pub fn envelope(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(code, ErrorCategory::Envelope, message, span)
    }

    /// Naming error (illegal or reserved name)
    pub fn naming(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(code, ErrorCategory::Naming, message, span)
    }

    /// Consistency error (mismatched or duplicated names)
    pub fn consistency(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(code, ErrorCategory::Consistency, message, span)
    }

    /// Block error (raised by the statement parser)
    pub fn block(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(code, ErrorCategory::Block, message, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

pub type Result<T> = std::result::Result<T, BlError>;
