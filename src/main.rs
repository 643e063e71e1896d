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

//! BLPARSE CLI
//!
//! Usage: blparse <input.bl|-> [--error-format human|json] [--summary] [-v]

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser as ClapParser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use blparse::{DiagnosticPrinter, Program, ProgramParser};

#[derive(ClapParser)]
#[command(name = "blparse")]
#[command(version)]
#[command(about = "Parse and check BL robot-control programs", long_about = None)]
struct Cli {
    /// Input BL source file (`-` for stdin)
    input: PathBuf,

    /// How parse errors are reported
    #[arg(long, value_enum, default_value = "human")]
    error_format: ErrorFormat,

    /// Print the program name and each instruction's statement count
    #[arg(long)]
    summary: bool,

    /// Enable debug logging (overridden by BLPARSE_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ErrorFormat {
    /// rustc-style diagnostics on stderr
    Human,
    /// One JSON object per error on stderr
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match read_input(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let file_name = cli.input.display().to_string();
    info!(file = %file_name, bytes = source.len(), "parsing");

    match ProgramParser::new().parse_source(&source) {
        Ok(program) => {
            debug!(program = %program.name(), "parse succeeded");
            if cli.summary {
                print!("{}", summary(&program));
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            let printer = DiagnosticPrinter::new(file_name, source);
            match cli.error_format {
                ErrorFormat::Human => printer.print(&error),
                ErrorFormat::Json => match printer.render_json(&error) {
                    Ok(json) => eprintln!("{}", json),
                    Err(e) => {
                        warn!(error = %e, "failed to render JSON diagnostic");
                        printer.print(&error)
                    }
                },
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("BLPARSE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read program from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn summary(program: &Program) -> String {
    let mut out = format!("program {}\n", program.name());
    for (name, body) in &program.context {
        out.push_str(&format!("  instruction {} ({} statements)\n", name, body.statement_count()));
    }
    out.push_str(&format!("  body ({} statements)\n", program.body().statement_count()));
    out
}
