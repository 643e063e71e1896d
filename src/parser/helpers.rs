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

use crate::error::{codes, BlError, Result};
use crate::lexer::{Token, TokenStream};
use crate::parser::parser::ProgramParser;
use crate::parser::statements::BlockParser;
use crate::span::Span;

impl<B: BlockParser> ProgramParser<B> {
    /// Consumes a required keyword from the front of the stream.
    ///
    /// `code` and `place` describe the envelope error reported when the
    /// keyword is missing, e.g. `"after program name"`.
    pub(crate) fn expect_word(
        &self,
        tokens: &mut TokenStream,
        word: &str,
        code: &'static str,
        place: &str,
    ) -> Result<Token> {
        if tokens.front_is(word) {
            if let Some(token) = tokens.pop_front() {
                return Ok(token);
            }
        }

        Err(BlError::envelope(
            code,
            format!("\"{}\" expected {}, found {}", word, place, describe(tokens.front())),
            span_of(tokens.front()),
        ))
    }

    /// Consumes the front token as a program or instruction name.
    ///
    /// `what` names the thing being declared (`"program"`, `"instruction"`).
    pub(crate) fn expect_name(&self, tokens: &mut TokenStream, what: &str) -> Result<Token> {
        self.check_identifier(tokens.front(), what)?;
        tokens
            .pop_front()
            .ok_or_else(|| unexpected_end(&format!("{} name", what), Span::unknown()))
    }

    /// Fails unless `token` is a legal identifier (not a keyword or
    /// condition).
    pub(crate) fn check_identifier(&self, token: Option<&Token>, what: &str) -> Result<()> {
        match token {
            Some(t) if self.vocabulary().is_identifier(&t.lexeme) => Ok(()),
            Some(t) if t.is_end_of_input() => Err(unexpected_end(&format!("{} name", what), t.span)),
            Some(t) => Err(BlError::naming(
                codes::INVALID_IDENTIFIER,
                format!("{} name is not a valid identifier: {}", what, t),
                t.span,
            )
            .with_help("names start with a letter, contain only letters, digits and '-', and are not keywords or conditions")),
            None => Err(unexpected_end(&format!("{} name", what), Span::unknown())),
        }
    }

    /// Fails if `token` is one of the primitive names.
    ///
    /// Each primitive is tested on its own, in vocabulary order, so the
    /// reported collision is always the same for the same input.
    pub(crate) fn check_not_primitive(&self, token: Option<&Token>) -> Result<()> {
        let Some(token) = token else {
            return Ok(());
        };

        for primitive in self.vocabulary().primitives() {
            if token.is(primitive) {
                return Err(BlError::naming(
                    codes::PRIMITIVE_NAME,
                    format!("instruction name same as primitive: {}", primitive),
                    token.span,
                )
                .with_help("primitive actions cannot be redefined; choose another instruction name"));
            }
        }

        Ok(())
    }
}

/// Describes an optional token for "found ..." messages.
pub(crate) fn describe(token: Option<&Token>) -> String {
    match token {
        Some(t) if t.is_end_of_input() => "end of input".to_string(),
        Some(t) => format!("`{}`", t),
        None => "end of input".to_string(),
    }
}

pub(crate) fn span_of(token: Option<&Token>) -> Span {
    token.map(|t| t.span).unwrap_or_else(Span::unknown)
}

pub(crate) fn unexpected_end(context: &str, span: Span) -> BlError {
    BlError::envelope(
        codes::UNEXPECTED_END,
        format!("input ended while reading {}", context),
        span,
    )
}
