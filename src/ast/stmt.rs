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

use std::fmt;

/// Sensor conditions tested by `IF` and `WHILE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,
}

impl Condition {
    /// Maps a condition token to its variant.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "next-is-empty" => Some(Self::NextIsEmpty),
            "next-is-not-empty" => Some(Self::NextIsNotEmpty),
            "next-is-wall" => Some(Self::NextIsWall),
            "next-is-not-wall" => Some(Self::NextIsNotWall),
            "next-is-friend" => Some(Self::NextIsFriend),
            "next-is-not-friend" => Some(Self::NextIsNotFriend),
            "next-is-enemy" => Some(Self::NextIsEnemy),
            "next-is-not-enemy" => Some(Self::NextIsNotEnemy),
            "random" => Some(Self::Random),
            "true" => Some(Self::True),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NextIsEmpty => "next-is-empty",
            Self::NextIsNotEmpty => "next-is-not-empty",
            Self::NextIsWall => "next-is-wall",
            Self::NextIsNotWall => "next-is-not-wall",
            Self::NextIsFriend => "next-is-friend",
            Self::NextIsNotFriend => "next-is-not-friend",
            Self::NextIsEnemy => "next-is-enemy",
            Self::NextIsNotEnemy => "next-is-not-enemy",
            Self::Random => "random",
            Self::True => "true",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed BL statement tree.
///
/// The body of every instruction and the main program body is a `Block`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /* ----------------------------- */
    /* SEQUENCING                    */
    /* ----------------------------- */

    Block(Vec<Statement>),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    If {
        condition: Condition,
        body: Box<Statement>,
    },

    IfElse {
        condition: Condition,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
    },

    While {
        condition: Condition,
        body: Box<Statement>,
    },

    /* ----------------------------- */
    /* CALLS                         */
    /* ----------------------------- */

    /// Call of a primitive or a user-defined instruction.
    Call(String),
}

impl Statement {
    pub fn empty_block() -> Self {
        Statement::Block(Vec::new())
    }

    /// Counts this statement and every statement nested inside it,
    /// excluding blocks themselves.
    pub fn statement_count(&self) -> usize {
        match self {
            Statement::Block(stmts) => stmts.iter().map(Statement::statement_count).sum(),
            Statement::If { body, .. } | Statement::While { body, .. } => 1 + body.statement_count(),
            Statement::IfElse {
                then_branch,
                else_branch,
                ..
            } => 1 + then_branch.statement_count() + else_branch.statement_count(),
            Statement::Call(_) => 1,
        }
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::empty_block()
    }
}
