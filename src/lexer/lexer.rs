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

use tracing::trace;

use crate::lexer::keywords::Vocabulary;
use crate::lexer::token::{Token, TokenKind, TokenStream};
use crate::span::Span;

/// Splits BL source text into a [`TokenStream`].
///
/// The BL lexer is deliberately small: words are runs of letters, digits
/// and `-`; `#` starts a comment that runs to the end of the line; every
/// other run of non-blank characters becomes a single
/// [`TokenKind::Error`] token for the parser to reject. Tokenizing never
/// fails.
pub struct Lexer<'v> {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    vocabulary: &'v Vocabulary,
    pub tokens: Vec<Token>,
}

/// Tokenizes `source`, guaranteeing exactly one trailing end-of-input
/// marker.
pub fn tokenize(source: &str, vocabulary: &Vocabulary) -> TokenStream {
    let mut lexer = Lexer::new(source, vocabulary);
    lexer.scan_tokens();
    trace!(count = lexer.tokens.len(), "tokenized BL source");
    lexer.tokens.into()
}

impl<'v> Lexer<'v> {
    pub fn new(source: &str, vocabulary: &'v Vocabulary) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
            vocabulary,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole input, then appends the end-of-input marker.
    ///
    /// Must be called exactly once per lexer instance.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        let span = Span::new(self.line, self.column);
        self.tokens.push(Token::end_of_input(span));
    }

    fn scan_token(&mut self) {
        let start = Span::new(self.line, self.column);
        let ch = self.advance();

        match ch {
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
                self.column = 0;
            }

            '#' => {
                while !self.is_at_end() && self.peek() != '\n' {
                    self.advance();
                }
            }

            c if is_word_char(c) => {
                let mut word = c.to_string();
                while !self.is_at_end() && is_word_char(self.peek()) {
                    word.push(self.advance());
                }
                let kind = self.vocabulary.classify(&word);
                self.tokens.push(Token::new(kind, word, start));
            }

            c => {
                let mut text = c.to_string();
                while !self.is_at_end() {
                    let next = self.peek();
                    if next.is_whitespace() || is_word_char(next) || next == '#' {
                        break;
                    }
                    text.push(self.advance());
                }
                self.tokens.push(Token::new(TokenKind::Error, text, start));
            }
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        self.column += 1;
        ch
    }

    fn peek(&self) -> char {
        self.chars[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
