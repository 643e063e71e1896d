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

use crate::ast::{Condition, Statement};
use crate::error::{codes, BlError, Result};
use crate::lexer::{Token, TokenStream, Vocabulary};
use crate::span::Span;

/// Parses the body of a single block into a statement tree.
///
/// The program parser hands every instruction body and the main body to a
/// `BlockParser`, each as a self-contained token sequence terminated by
/// the end-of-input marker. An implementation must consume the whole
/// sequence, marker included, and either return the block or the first
/// error it meets.
pub trait BlockParser {
    fn parse_block(&self, tokens: &mut TokenStream, vocabulary: &Vocabulary) -> Result<Statement>;
}

/// The BL statement grammar.
///
/// ```text
/// block     := statement*
/// statement := IF condition THEN block END IF
///            | IF condition THEN block ELSE block END IF
///            | WHILE condition DO block END WHILE
///            | identifier
/// ```
///
/// `INSTRUCTION` may never appear inside a block: instruction bodies are
/// delimited by their closing name, which is only unambiguous when
/// declarations do not nest.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlStatementParser;

/// Deepest IF / WHILE nesting accepted inside one block.
pub const MAX_NESTING_DEPTH: usize = 128;

impl BlockParser for BlStatementParser {
    fn parse_block(&self, tokens: &mut TokenStream, vocabulary: &Vocabulary) -> Result<Statement> {
        let block = self.block(tokens, vocabulary, 0)?;

        match tokens.pop_front() {
            Some(token) if token.is_end_of_input() => Ok(block),
            Some(token) => Err(BlError::block(
                codes::UNEXPECTED_TOKEN,
                format!("unexpected `{}` in block", token),
                token.span,
            )
            .with_help("a block may only contain IF, WHILE and instruction calls")),
            None => Err(unexpected_end("block", Span::unknown())),
        }
    }
}

impl BlStatementParser {
    /// Parses statements until the front token cannot start one.
    ///
    /// `depth` counts the IF / WHILE bodies enclosing this block.
    fn block(&self, tokens: &mut TokenStream, vocabulary: &Vocabulary, depth: usize) -> Result<Statement> {
        if depth > MAX_NESTING_DEPTH {
            return Err(BlError::block(
                codes::NESTING_TOO_DEEP,
                format!("statements nested more than {} levels deep", MAX_NESTING_DEPTH),
                tokens.front().map(|t| t.span).unwrap_or_else(Span::unknown),
            )
            .with_help("move inner statements into a separate INSTRUCTION"));
        }

        let mut statements = Vec::new();

        while let Some(front) = tokens.front() {
            if front.is("INSTRUCTION") {
                return Err(BlError::block(
                    codes::NESTED_INSTRUCTION,
                    "instruction declarations cannot be nested",
                    front.span,
                )
                .with_help("declare every INSTRUCTION before the program's BEGIN"));
            }

            if !self.starts_statement(front, vocabulary) {
                break;
            }

            statements.push(self.statement(tokens, vocabulary, depth)?);
        }

        Ok(Statement::Block(statements))
    }

    fn starts_statement(&self, token: &Token, vocabulary: &Vocabulary) -> bool {
        token.is("IF") || token.is("WHILE") || vocabulary.is_identifier(&token.lexeme)
    }

    fn statement(
        &self,
        tokens: &mut TokenStream,
        vocabulary: &Vocabulary,
        depth: usize,
    ) -> Result<Statement> {
        let Some(first) = tokens.pop_front() else {
            return Err(unexpected_end("statement", Span::unknown()));
        };

        if first.is("IF") {
            let condition = self.condition(tokens, vocabulary, &first)?;
            expect(tokens, "THEN", &first)?;
            let then_branch = self.block(tokens, vocabulary, depth + 1)?;

            if tokens.front_is("ELSE") {
                tokens.pop_front();
                let else_branch = self.block(tokens, vocabulary, depth + 1)?;
                expect(tokens, "END", &first)?;
                expect(tokens, "IF", &first)?;
                return Ok(Statement::IfElse {
                    condition,
                    then_branch: Box::new(then_branch),
                    else_branch: Box::new(else_branch),
                });
            }

            expect(tokens, "END", &first)?;
            expect(tokens, "IF", &first)?;
            return Ok(Statement::If {
                condition,
                body: Box::new(then_branch),
            });
        }

        if first.is("WHILE") {
            let condition = self.condition(tokens, vocabulary, &first)?;
            expect(tokens, "DO", &first)?;
            let body = self.block(tokens, vocabulary, depth + 1)?;
            expect(tokens, "END", &first)?;
            expect(tokens, "WHILE", &first)?;
            return Ok(Statement::While {
                condition,
                body: Box::new(body),
            });
        }

        // `block` only dispatches here for IF, WHILE and identifiers.
        Ok(Statement::Call(first.lexeme))
    }

    fn condition(
        &self,
        tokens: &mut TokenStream,
        vocabulary: &Vocabulary,
        opener: &Token,
    ) -> Result<Condition> {
        let token = match tokens.pop_front() {
            Some(token) if !token.is_end_of_input() => token,
            Some(token) => return Err(unexpected_end(&format!("{} condition", opener), token.span)),
            None => return Err(unexpected_end(&format!("{} condition", opener), opener.span)),
        };

        vocabulary
            .is_condition(&token.lexeme)
            .then(|| Condition::from_lexeme(&token.lexeme))
            .flatten()
            .ok_or_else(|| {
                BlError::block(
                    codes::UNKNOWN_CONDITION,
                    format!("`{}` is not a condition", token),
                    token.span,
                )
                .with_help("conditions are next-is-empty, next-is-wall, next-is-friend, next-is-enemy (and their next-is-not- forms), random and true")
            })
    }
}

/// Consumes `word` from the front of `tokens` or reports what was found
/// instead.
fn expect(tokens: &mut TokenStream, word: &str, opener: &Token) -> Result<()> {
    match tokens.pop_front() {
        Some(token) if token.is(word) => Ok(()),
        Some(token) if token.is_end_of_input() => Err(unexpected_end(
            &format!("{} statement (expected `{}`)", opener, word),
            token.span,
        )),
        Some(token) => Err(BlError::block(
            codes::UNEXPECTED_TOKEN,
            format!("expected `{}` in {} statement, found `{}`", word, opener, token),
            token.span,
        )),
        None => Err(unexpected_end(word, opener.span)),
    }
}

fn unexpected_end(context: &str, span: Span) -> BlError {
    BlError::block(
        codes::UNEXPECTED_END,
        format!("input ended inside {}", context),
        span,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    fn parse_words(words: &[&str]) -> Result<Statement> {
        let vocab = Vocabulary::default();
        let mut tokens = TokenStream::from_words(words.iter().copied(), &vocab);
        BlStatementParser.parse_block(&mut tokens, &vocab)
    }

    fn call(name: &str) -> Statement {
        Statement::Call(name.to_string())
    }

    #[test]
    fn empty_block() {
        assert_eq!(parse_words(&[]).unwrap(), Statement::empty_block());
    }

    #[test]
    fn sequence_of_calls() {
        let block = parse_words(&["move", "turnleft", "find-obstacle"]).unwrap();
        assert_eq!(
            block,
            Statement::Block(vec![call("move"), call("turnleft"), call("find-obstacle")])
        );
    }

    #[test]
    fn if_else_and_while() {
        let block = parse_words(&[
            "WHILE", "true", "DO",
            "IF", "next-is-enemy", "THEN", "infect",
            "ELSE", "move",
            "END", "IF",
            "END", "WHILE",
        ])
        .unwrap();

        let expected = Statement::Block(vec![Statement::While {
            condition: Condition::True,
            body: Box::new(Statement::Block(vec![Statement::IfElse {
                condition: Condition::NextIsEnemy,
                then_branch: Box::new(Statement::Block(vec![call("infect")])),
                else_branch: Box::new(Statement::Block(vec![call("move")])),
            }])),
        }]);
        assert_eq!(block, expected);
    }

    #[test]
    fn plain_if() {
        let block = parse_words(&["IF", "random", "THEN", "END", "IF"]).unwrap();
        assert_eq!(
            block,
            Statement::Block(vec![Statement::If {
                condition: Condition::Random,
                body: Box::new(Statement::empty_block()),
            }])
        );
    }

    #[test]
    fn whole_buffer_is_consumed() {
        let vocab = Vocabulary::default();
        let mut tokens = TokenStream::from_words(["skip"], &vocab);
        BlStatementParser.parse_block(&mut tokens, &vocab).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn leftover_token_is_rejected() {
        let err = parse_words(&["move", "END"]).unwrap_err();
        assert_eq!(err.code, codes::UNEXPECTED_TOKEN);
        assert_eq!(err.category, ErrorCategory::Block);
    }

    #[test]
    fn nested_instruction_is_rejected() {
        let err = parse_words(&["move", "INSTRUCTION", "foo", "IS"]).unwrap_err();
        assert_eq!(err.code, codes::NESTED_INSTRUCTION);
    }

    #[test]
    fn unknown_condition() {
        let err = parse_words(&["IF", "next-is-sky", "THEN", "END", "IF"]).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_CONDITION);
    }

    #[test]
    fn mismatched_closer() {
        let err = parse_words(&["WHILE", "true", "DO", "move", "END", "IF"]).unwrap_err();
        assert_eq!(err.code, codes::UNEXPECTED_TOKEN);
        assert!(err.message.contains("`WHILE`"));
    }

    fn nested_ifs(levels: usize) -> Vec<&'static str> {
        let mut words = Vec::new();
        for _ in 0..levels {
            words.extend(["IF", "true", "THEN"]);
        }
        words.push("skip");
        for _ in 0..levels {
            words.extend(["END", "IF"]);
        }
        words
    }

    #[test]
    fn nesting_at_limit_is_accepted() {
        let block = parse_words(&nested_ifs(MAX_NESTING_DEPTH)).unwrap();
        assert_eq!(block.statement_count(), MAX_NESTING_DEPTH + 1);
    }

    #[test]
    fn nesting_past_limit_is_an_error() {
        let err = parse_words(&nested_ifs(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert_eq!(err.code, codes::NESTING_TOO_DEEP);
        assert_eq!(err.category, ErrorCategory::Block);

        let err = parse_words(&nested_ifs(5_000)).unwrap_err();
        assert_eq!(err.code, codes::NESTING_TOO_DEEP);
    }

    #[test]
    fn truncated_statement() {
        let err = parse_words(&["IF", "true", "THEN", "move"]).unwrap_err();
        assert_eq!(err.code, codes::UNEXPECTED_END);
    }
}
