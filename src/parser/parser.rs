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

use tracing::{debug, trace};

use crate::ast::{Context, Program, Statement};
use crate::error::{codes, BlError, Result};
use crate::lexer::{tokenize, Token, TokenStream, Vocabulary};
use crate::parser::helpers::{describe, span_of, unexpected_end};
use crate::parser::statements::{BlStatementParser, BlockParser};

/// The BL program parser.
///
/// Validates the `PROGRAM name IS ... BEGIN ... END name` envelope, scans
/// each `INSTRUCTION name IS ... END name` declaration into the instruction
/// table, and hands every block body to a [`BlockParser`].
///
/// The vocabulary and the block parser are fixed at construction so either
/// can be substituted.
///
/// # BL Pipeline
/// ```text
/// Source → Lexer → TokenStream → ProgramParser → Program
///                                    └─ BlockParser (per body)
/// ```
pub struct ProgramParser<B = BlStatementParser> {
    vocabulary: Vocabulary,
    block_parser: B,
}

impl ProgramParser<BlStatementParser> {
    /// Parser with the standard vocabulary and BL statement grammar.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::default())
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::with_block_parser(vocabulary, BlStatementParser)
    }
}

impl Default for ProgramParser<BlStatementParser> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a ready-made token stream with the default collaborators.
///
/// # Example
/// ```rust
/// use blparse::{parse, TokenStream, Vocabulary};
///
/// let words = ["PROGRAM", "p", "IS", "BEGIN", "move", "END", "p"];
/// let tokens = TokenStream::from_words(words, &Vocabulary::default());
/// let program = parse(tokens).unwrap();
/// assert_eq!(program.name(), "p");
/// ```
pub fn parse(tokens: TokenStream) -> Result<Program> {
    ProgramParser::new().parse(tokens)
}

/// Tokenizes BL source text and parses it with the default collaborators.
pub fn parse_source(source: &str) -> Result<Program> {
    ProgramParser::new().parse_source(source)
}

impl<B: BlockParser> ProgramParser<B> {
    pub fn with_block_parser(vocabulary: Vocabulary, block_parser: B) -> Self {
        Self {
            vocabulary,
            block_parser,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Tokenizes `source` with this parser's vocabulary, then parses it.
    pub fn parse_source(&self, source: &str) -> Result<Program> {
        self.parse(tokenize(source, &self.vocabulary))
    }

    /// Parses a complete program from `tokens`.
    ///
    /// The stream must end with the end-of-input marker. It is consumed
    /// entirely on success. On failure the first error found is returned
    /// and no program is produced.
    pub fn parse(&self, mut tokens: TokenStream) -> Result<Program> {
        self.expect_word(&mut tokens, "PROGRAM", codes::PROGRAM_EXPECTED, "at beginning")?;

        let name = self.expect_name(&mut tokens, "program")?.lexeme;

        self.expect_word(&mut tokens, "IS", codes::IS_EXPECTED, "after program name")?;

        let mut context = Context::new();
        while tokens.front_is("INSTRUCTION") {
            let declared_at = span_of(tokens.front());
            let (instruction, body) = self.parse_instruction(&mut tokens)?;

            if context.contains_key(&instruction) {
                return Err(BlError::consistency(
                    codes::DUPLICATE_INSTRUCTION,
                    format!("non-unique instruction name: {}", instruction),
                    declared_at,
                )
                .with_help(format!("instruction `{}` is already declared earlier in this program", instruction)));
            }

            debug!(program = %name, instruction = %instruction, "parsed instruction");
            context.insert(instruction, body);
        }

        self.expect_word(&mut tokens, "BEGIN", codes::BEGIN_EXPECTED, "before the program body")?;

        let end_of_input = self.strip_program_tail(&mut tokens, &name)?;

        tokens.push_back(end_of_input);
        let body = self.block_parser.parse_block(&mut tokens, &self.vocabulary)?;

        debug!(
            program = %name,
            instructions = context.len(),
            statements = body.statement_count(),
            "assembled program"
        );

        Ok(Program::new(name, context, body))
    }

    /// Parses one instruction declaration from the front of `tokens`,
    /// returning its name and its parsed body.
    ///
    /// Checks run in a fixed order: primitive collision, identifier
    /// validity, `IS`, closing `END`, closing name, then the body itself.
    ///
    /// # Panics
    /// If the front token is not `INSTRUCTION`. Callers must check first.
    pub fn parse_instruction(&self, tokens: &mut TokenStream) -> Result<(String, Statement)> {
        assert!(
            tokens.front_is("INSTRUCTION"),
            "Violation of: <\"INSTRUCTION\"> is proper prefix of tokens"
        );
        tokens.pop_front();

        self.check_not_primitive(tokens.front())?;
        let name = self.expect_name(tokens, "instruction")?;

        self.expect_word(tokens, "IS", codes::IS_EXPECTED, &format!("after instruction name {}", name))?;

        // The first later token equal to the name closes the declaration.
        // Declarations never nest, so no depth counting is needed.
        let mut body = TokenStream::new();
        while tokens
            .front()
            .is_some_and(|t| !self.ends_instruction_scan(t, &name.lexeme))
        {
            if let Some(token) = tokens.pop_front() {
                body.push_back(token);
            }
        }

        if !tokens.front_is(&name.lexeme) {
            return Err(self.unclosed_instruction(&name, &body, tokens.front()));
        }
        let closing = tokens.pop_front();
        trace!(instruction = %name, tokens = body.len(), "scanned instruction body");

        match body.pop_back() {
            Some(end) if end.is("END") => {}
            last => {
                return Err(BlError::envelope(
                    codes::END_EXPECTED,
                    format!("instruction {} is missing END before its closing name", name),
                    span_of(last.as_ref().or(closing.as_ref())),
                ))
            }
        }

        let closing_span = span_of(closing.as_ref());
        body.push_back(Token::end_of_input(closing_span));
        let statement = self.block_parser.parse_block(&mut body, &self.vocabulary)?;

        Ok((name.lexeme, statement))
    }

    /// Tokens that stop the scan for an instruction's closing name.
    ///
    /// Besides the name itself, the scan stops at tokens that can never
    /// appear inside a body, so a wrong closing name is caught at the
    /// declaration it belongs to.
    fn ends_instruction_scan(&self, token: &Token, name: &str) -> bool {
        token.is(name) || token.is_end_of_input() || token.is("BEGIN") || token.is("INSTRUCTION")
    }

    /// Diagnoses an instruction whose closing name was never found.
    fn unclosed_instruction(&self, name: &Token, body: &TokenStream, boundary: Option<&Token>) -> BlError {
        let mut tail = body.iter().rev();
        let last = tail.next();
        let before_last = tail.next();

        if let (Some(closing), Some(end)) = (last, before_last) {
            if end.is("END") && self.vocabulary.is_identifier(&closing.lexeme) {
                return BlError::consistency(
                    codes::INSTRUCTION_NAME_MISMATCH,
                    format!("instruction name does not match: {} closed by {}", name, closing),
                    closing.span,
                )
                .with_help(format!("close the instruction with `END {}`", name));
            }
        }

        match boundary {
            Some(t) if t.is("INSTRUCTION") => BlError::block(
                codes::NESTED_INSTRUCTION,
                format!("instruction declarations cannot be nested (inside {})", name),
                t.span,
            ),
            other => BlError::envelope(
                codes::END_EXPECTED,
                format!("instruction {} is never closed, found {}", name, describe(other)),
                span_of(other),
            )
            .with_help(format!("close the instruction with `END {}`", name)),
        }
    }

    /// Validates and removes `END name` and the end-of-input marker from
    /// the tail of the stream, returning the marker.
    ///
    /// What remains is exactly the main body.
    fn strip_program_tail(&self, tokens: &mut TokenStream, name: &str) -> Result<Token> {
        let end_of_input = match tokens.pop_back() {
            Some(t) if t.is_end_of_input() => t,
            other => {
                return Err(BlError::envelope(
                    codes::EXTRA_TEXT,
                    format!("extra text after program end: {}", describe(other.as_ref())),
                    span_of(other.as_ref()),
                ))
            }
        };

        match tokens.pop_back() {
            Some(t) if t.is(name) => {}
            Some(t) if t.is("END") => {
                return Err(BlError::consistency(
                    codes::PROGRAM_NAME_MISMATCH,
                    format!("program name does not match at beginning and end: {} has no closing name", name),
                    t.span,
                ))
            }
            Some(t) => {
                return Err(BlError::consistency(
                    codes::PROGRAM_NAME_MISMATCH,
                    format!("program name does not match at beginning and end: {} closed by {}", name, t),
                    t.span,
                )
                .with_help(format!("close the program with `END {}`", name)))
            }
            None => return Err(unexpected_end(&format!("the end of program {}", name), end_of_input.span)),
        }

        match tokens.pop_back() {
            Some(t) if t.is("END") => Ok(end_of_input),
            other => Err(BlError::envelope(
                codes::END_EXPECTED,
                format!("program {} does not have an \"END\" statement", name),
                span_of(other.as_ref()),
            )),
        }
    }
}
