//! selcraft CLI
//!
//! Builds a CSS selector from typed terms and prints it.
//!
//! ```text
//! selcraft element:a 'attr:href$=".png"' pseudo-class:focus
//! selcraft element:ul '>' element:li class:active --specificity
//! ```

mod terms;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use selcraft_common::warning::{report_error, warn_once};
use selcraft_css::{Render, to_json};

use crate::terms::build_selector;

/// selcraft - build CSS selectors from typed fragments
#[derive(Parser, Debug)]
#[command(name = "selcraft")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Selector terms: `kind:value` fragments (element, id, class, attr,
    /// pseudo-class, pseudo-element) or combinators (`>`, `+`, `~`, `desc`,
    /// `comb:<token>`)
    #[arg(required = true, allow_hyphen_values = true)]
    terms: Vec<String>,

    /// Also print the selector's specificity
    #[arg(long, short)]
    specificity: bool,

    /// Also print the selector structure as JSON
    #[arg(long, short)]
    json: bool,

    /// Suppress warnings
    #[arg(long, short, env = "SELCRAFT_QUIET")]
    quiet: bool,
}

/// What a run produces: stdout lines, and warnings not silenced by `--quiet`.
#[derive(Debug, Default)]
struct Output {
    lines: Vec<String>,
    warnings: Vec<String>,
}

fn run(cli: &Cli) -> Result<Output> {
    let built = build_selector(&cli.terms)?;
    let mut output = Output::default();

    if !cli.quiet {
        output.warnings = built.warnings;
    }

    output.lines.push(built.selector.render());

    if cli.specificity {
        output
            .lines
            .push(format!("specificity: {}", built.selector.specificity()));
    }

    if cli.json {
        output.lines.push(to_json(&built.selector)?);
    }

    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            for warning in &output.warnings {
                warn_once("CLI", warning);
            }
            for line in &output.lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error("CLI", &format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
