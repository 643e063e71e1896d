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

use regex::Regex;

use crate::lexer::token::TokenKind;

/// Reserved structural and control-flow keywords of BL.
pub const KEYWORDS: [&str; 10] = [
    "PROGRAM",
    "IS",
    "BEGIN",
    "END",
    "INSTRUCTION",
    "IF",
    "THEN",
    "ELSE",
    "WHILE",
    "DO",
];

/// Sensor conditions usable after `IF` and `WHILE`.
pub const CONDITIONS: [&str; 10] = [
    "next-is-empty",
    "next-is-not-empty",
    "next-is-wall",
    "next-is-not-wall",
    "next-is-friend",
    "next-is-not-friend",
    "next-is-enemy",
    "next-is-not-enemy",
    "random",
    "true",
];

/// The robot's built-in actions.
///
/// Primitives are legal identifiers (a program calls them like any
/// instruction) but may never be used to name a new instruction. The order
/// here is the order in which instruction names are checked against them.
pub const PRIMITIVES: [&str; 5] = ["move", "turnleft", "turnright", "infect", "skip"];

/// The fixed BL vocabulary and identifier rule.
///
/// The parser never consults global word lists directly; it is handed a
/// `Vocabulary` when it is built, so tests can substitute their own.
///
/// # BL Examples
/// ```text
/// PROGRAM        -> keyword
/// next-is-wall   -> condition
/// move           -> identifier (and primitive)
/// find-obstacle  -> identifier
/// 2fast          -> not an identifier
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: Vec<String>,
    conditions: Vec<String>,
    primitives: Vec<String>,
    identifier: Regex,
}

impl Vocabulary {
    /// Builds a vocabulary from explicit word lists.
    ///
    /// Words are matched case-sensitively.
    pub fn new<K, C, P>(keywords: K, conditions: C, primitives: P) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            conditions: conditions.into_iter().map(Into::into).collect(),
            primitives: primitives.into_iter().map(Into::into).collect(),
            identifier: Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$")
                .expect("identifier pattern is a valid regex"),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    pub fn is_condition(&self, word: &str) -> bool {
        self.conditions.iter().any(|c| c == word)
    }

    pub fn is_primitive(&self, word: &str) -> bool {
        self.primitives.iter().any(|p| p == word)
    }

    /// Primitive names in checking order.
    pub fn primitives(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().map(String::as_str)
    }

    /// Returns `true` if `word` is lexically an identifier and is neither a
    /// keyword nor a condition.
    ///
    /// Primitive names pass this check.
    pub fn is_identifier(&self, word: &str) -> bool {
        self.identifier.is_match(word) && !self.is_keyword(word) && !self.is_condition(word)
    }

    /// Classifies a single word for the tokenizer.
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.is_keyword(word) {
            TokenKind::Keyword
        } else if self.is_condition(word) {
            TokenKind::Condition
        } else if self.is_identifier(word) {
            TokenKind::Identifier
        } else {
            TokenKind::Error
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(KEYWORDS, CONDITIONS, PRIMITIVES)
    }
}
