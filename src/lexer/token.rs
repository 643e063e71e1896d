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

use std::collections::vec_deque::{Iter, VecDeque};
use std::fmt;

use crate::lexer::keywords::Vocabulary;
use crate::span::Span;

/// Lexeme of the synthetic marker that terminates every token sequence
/// handed to a parser.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

/// Represents the **category of a lexical token** in BL.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Program
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A reserved word such as `PROGRAM`, `IF` or `END`.
    Keyword,

    /// A sensor condition such as `next-is-wall`.
    Condition,

    /// A user-defined or primitive name.
    Identifier,

    /// Text that is not a legal BL word.
    ///
    /// The lexer never fails; it hands these to the parser, which rejects
    /// them wherever they appear.
    Error,

    /// The synthetic end-of-input marker.
    EndOfInput,
}

/// A single lexical token.
///
/// # Example Tokens
/// ```text
/// PROGRAM  →  { kind: Keyword,    lexeme: "PROGRAM", span: 1:0 }
/// move     →  { kind: Identifier, lexeme: "move",    span: 3:4 }
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Builds the end-of-input marker.
    pub fn end_of_input(span: Span) -> Self {
        Self::new(TokenKind::EndOfInput, END_OF_INPUT, span)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns `true` if this token's text is exactly `text`.
    pub fn is(&self, text: &str) -> bool {
        self.lexeme == text
    }
}

/// Tokens compare by kind and text only; where they came from is irrelevant.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// An ordered, destructively consumed sequence of tokens.
///
/// Tokens leave from the front, are added at the back, and the tail can be
/// inspected and removed directly. The token count only shrinks through
/// `pop_front`/`pop_back` and only grows through `push_back`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stream from pre-split words, classifying each with
    /// `vocabulary` and appending the end-of-input marker.
    ///
    /// Spans are unknown. Intended for tools and tests that already have a
    /// word list.
    pub fn from_words<I, S>(words: I, vocabulary: &Vocabulary) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stream: TokenStream = words
            .into_iter()
            .map(|w| {
                let w = w.as_ref();
                Token::new(vocabulary.classify(w), w, Span::unknown())
            })
            .collect();
        stream.push_back(Token::end_of_input(Span::unknown()));
        stream
    }

    pub fn front(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn back(&self) -> Option<&Token> {
        self.tokens.back()
    }

    pub fn pop_front(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<Token> {
        self.tokens.pop_back()
    }

    pub fn push_back(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if the front token's text is exactly `text`.
    pub fn front_is(&self, text: &str) -> bool {
        self.front().is_some_and(|t| t.is(text))
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_appends_marker() {
        let vocab = Vocabulary::default();
        let stream = TokenStream::from_words(["PROGRAM", "p"], &vocab);
        assert_eq!(stream.len(), 3);
        assert!(stream.back().unwrap().is_end_of_input());
        assert_eq!(stream.front().unwrap().kind, TokenKind::Keyword);
    }

    #[test]
    fn front_and_back_access() {
        let vocab = Vocabulary::default();
        let mut stream = TokenStream::from_words(["a", "b", "c"], &vocab);
        assert!(stream.pop_back().unwrap().is_end_of_input());
        assert_eq!(stream.pop_back().unwrap().lexeme, "c");
        assert_eq!(stream.pop_front().unwrap().lexeme, "a");
        assert!(stream.front_is("b"));
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn token_equality_ignores_span() {
        let a = Token::new(TokenKind::Identifier, "move", Span::new(1, 2));
        let b = Token::new(TokenKind::Identifier, "move", Span::new(7, 0));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "move");
    }
}
