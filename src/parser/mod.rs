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

/// Program parsing:
/// - `ProgramParser` and the `parse(tokens)` / `parse_source(text)` entry points
/// - the program envelope and instruction declarations
pub mod parser;

/// The statement parser collaborator:
/// - the `BlockParser` seam
/// - the BL block grammar (IF / WHILE / calls)
pub mod statements;

/// Shared validation helpers:
/// - keyword expectation
/// - identifier and primitive-name checks
pub mod helpers;

pub use parser::{parse, parse_source, ProgramParser};
pub use statements::{BlStatementParser, BlockParser};
