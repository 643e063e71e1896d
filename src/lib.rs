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

//! Parser for BL (Behavior Language) robot-control programs.
//!
//! A BL program names itself, declares zero or more reusable instructions
//! and ends with a main body:
//!
//! ```text
//! PROGRAM walker IS
//!   INSTRUCTION step IS
//!     move
//!   END step
//! BEGIN
//!   WHILE true DO
//!     step
//!   END WHILE
//! END walker
//! ```
//!
//! [`parse_source`] turns such text into a [`Program`]; [`parse`] does the
//! same for an already tokenized [`TokenStream`]. Both return the first
//! [`BlError`] met and never a partial program.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{Condition, Context, Program, Statement};
pub use diagnostics::DiagnosticPrinter;
pub use error::{BlError, ErrorCategory, Result};
pub use lexer::{tokenize, Token, TokenKind, TokenStream, Vocabulary, END_OF_INPUT};
pub use parser::{parse, parse_source, BlStatementParser, BlockParser, ProgramParser};
pub use span::Span;
