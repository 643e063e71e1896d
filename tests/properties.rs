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

//! Property-based tests for the BL parser.
//!
//! Uses proptest to generate well-formed programs, render them to tokens,
//! and check the parser against the generated structure.

use std::collections::BTreeMap;

use blparse::error::codes;
use blparse::lexer::keywords::{CONDITIONS, PRIMITIVES};
use blparse::{parse, Condition, Context, Program, Statement, TokenStream, Vocabulary};
use proptest::prelude::*;

// ========================================================================
// Generators
// ========================================================================

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,8}".prop_filter("reserved word", |n| {
        let vocab = Vocabulary::default();
        vocab.is_identifier(n) && !vocab.is_primitive(n)
    })
}

fn condition() -> impl Strategy<Value = Condition> {
    prop::sample::select(CONDITIONS.to_vec()).prop_map(|c| Condition::from_lexeme(c).unwrap())
}

fn statement() -> impl Strategy<Value = Statement> {
    let leaf = prop::sample::select(PRIMITIVES.to_vec()).prop_map(|p| Statement::Call(p.to_string()));

    leaf.prop_recursive(3, 24, 4, |inner| {
        let block = prop::collection::vec(inner, 0..4).prop_map(Statement::Block);
        prop_oneof![
            (condition(), block.clone()).prop_map(|(condition, body)| Statement::If {
                condition,
                body: Box::new(body),
            }),
            (condition(), block.clone(), block.clone()).prop_map(|(condition, then_branch, else_branch)| {
                Statement::IfElse {
                    condition,
                    then_branch: Box::new(then_branch),
                    else_branch: Box::new(else_branch),
                }
            }),
            (condition(), block).prop_map(|(condition, body)| Statement::While {
                condition,
                body: Box::new(body),
            }),
        ]
    })
}

fn block() -> impl Strategy<Value = Statement> {
    prop::collection::vec(statement(), 0..5).prop_map(Statement::Block)
}

fn program() -> impl Strategy<Value = (String, BTreeMap<String, Statement>, Statement)> {
    (identifier(), prop::collection::btree_map(identifier(), block(), 0..4), block())
}

// ========================================================================
// Rendering
// ========================================================================

fn render_statement(statement: &Statement, out: &mut Vec<String>) {
    match statement {
        Statement::Block(statements) => {
            for s in statements {
                render_statement(s, out);
            }
        }
        Statement::If { condition, body } => {
            out.extend(["IF".into(), condition.to_string(), "THEN".into()]);
            render_statement(body, out);
            out.extend(["END".into(), "IF".into()]);
        }
        Statement::IfElse {
            condition,
            then_branch,
            else_branch,
        } => {
            out.extend(["IF".into(), condition.to_string(), "THEN".into()]);
            render_statement(then_branch, out);
            out.push("ELSE".into());
            render_statement(else_branch, out);
            out.extend(["END".into(), "IF".into()]);
        }
        Statement::While { condition, body } => {
            out.extend(["WHILE".into(), condition.to_string(), "DO".into()]);
            render_statement(body, out);
            out.extend(["END".into(), "WHILE".into()]);
        }
        Statement::Call(name) => out.push(name.clone()),
    }
}

fn render_instruction(name: &str, body: &Statement, out: &mut Vec<String>) {
    out.extend(["INSTRUCTION".into(), name.to_string(), "IS".into()]);
    render_statement(body, out);
    out.extend(["END".into(), name.to_string()]);
}

fn render_program(
    name: &str,
    instructions: &[(String, Statement)],
    body: &Statement,
    closing_name: &str,
) -> TokenStream {
    let mut out = vec!["PROGRAM".to_string(), name.to_string(), "IS".to_string()];
    for (instruction, instruction_body) in instructions {
        render_instruction(instruction, instruction_body, &mut out);
    }
    out.push("BEGIN".into());
    render_statement(body, &mut out);
    out.extend(["END".into(), closing_name.to_string()]);
    TokenStream::from_words(out, &Vocabulary::default())
}

// ========================================================================
// Properties
// ========================================================================

proptest! {
    /// A rendered program parses back to exactly the generated structure.
    #[test]
    fn prop_well_formed_programs_parse((name, instructions, body) in program()) {
        let declared: Vec<(String, Statement)> = instructions.clone().into_iter().collect();
        let parsed = parse(render_program(&name, &declared, &body, &name)).unwrap();

        let context: Context = instructions.into_iter().collect();
        prop_assert_eq!(parsed, Program::new(name, context, body));
    }

    /// Equal token streams give equal programs.
    #[test]
    fn prop_parsing_is_deterministic((name, instructions, body) in program()) {
        let declared: Vec<(String, Statement)> = instructions.into_iter().collect();
        let tokens = render_program(&name, &declared, &body, &name);
        prop_assert_eq!(parse(tokens.clone()).unwrap(), parse(tokens).unwrap());
    }

    /// Parsed instruction tables hold only unique, non-primitive identifiers.
    #[test]
    fn prop_instruction_names_are_legal((name, instructions, body) in program()) {
        let declared: Vec<(String, Statement)> = instructions.into_iter().collect();
        let parsed = parse(render_program(&name, &declared, &body, &name)).unwrap();

        let vocab = Vocabulary::default();
        prop_assert_eq!(parsed.context.len(), declared.len());
        for instruction in parsed.instruction_names() {
            prop_assert!(vocab.is_identifier(instruction));
            prop_assert!(!vocab.is_primitive(instruction));
        }
        prop_assert!(vocab.is_identifier(parsed.name()));
    }

    /// A different closing name is always rejected.
    #[test]
    fn prop_program_close_must_match(
        (name, instructions, body) in program(),
        other in identifier(),
    ) {
        prop_assume!(other != name);
        let declared: Vec<(String, Statement)> = instructions.into_iter().collect();
        let err = parse(render_program(&name, &declared, &body, &other)).unwrap_err();
        prop_assert_eq!(err.code, codes::PROGRAM_NAME_MISMATCH);
    }

    /// Declaring any instruction twice is rejected.
    #[test]
    fn prop_duplicates_are_rejected(
        (name, instructions, body) in program(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!instructions.is_empty());
        let mut declared: Vec<(String, Statement)> = instructions.into_iter().collect();
        let duplicate = declared[pick.index(declared.len())].clone();
        declared.push(duplicate);

        let err = parse(render_program(&name, &declared, &body, &name)).unwrap_err();
        prop_assert_eq!(err.code, codes::DUPLICATE_INSTRUCTION);
    }

    /// Any primitive used as an instruction name is rejected.
    #[test]
    fn prop_primitive_names_are_rejected(
        (name, _instructions, body) in program(),
        primitive in prop::sample::select(PRIMITIVES.to_vec()),
        instruction_body in block(),
    ) {
        let declared = vec![(primitive.to_string(), instruction_body)];
        let err = parse(render_program(&name, &declared, &body, &name)).unwrap_err();
        prop_assert_eq!(err.code, codes::PRIMITIVE_NAME);
    }
}
