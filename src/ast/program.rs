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

use indexmap::IndexMap;

use crate::ast::stmt::Statement;

/// Name → body table of user-defined instructions.
///
/// Equality is order-independent; iteration follows declaration order.
pub type Context = IndexMap<String, Statement>;

/// A fully parsed BL program: its name, its instruction table and its main
/// body.
///
/// Programs are only ever produced whole by the parser; a failed parse
/// yields an error and no program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    pub context: Context,
    pub body: Statement,
}

impl Program {
    pub fn new(name: impl Into<String>, context: Context, body: Statement) -> Self {
        Self {
            name: name.into(),
            context,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &Statement {
        &self.body
    }

    pub fn instruction(&self, name: &str) -> Option<&Statement> {
        self.context.get(name)
    }

    /// Instruction names in declaration order.
    pub fn instruction_names(&self) -> impl Iterator<Item = &str> {
        self.context.keys().map(String::as_str)
    }
}

impl Default for Program {
    /// The unnamed program with no instructions and an empty body.
    fn default() -> Self {
        Self::new("Unnamed", Context::new(), Statement::empty_block())
    }
}
