// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: decompose one target and print it.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use divide_chain::alphabet::{
    DEFAULT_MAX_OUTER_ADDITION, DEFAULT_MAX_OUTER_MULTIPLIER, DEFAULT_MAX_TARGET,
    DEFAULT_PRODUCT_CEILING,
};
use divide_chain::{render, DecomposeError, RuleSet, SearchConfig, SearchContext, Solution};

#[derive(Parser, Debug)]
#[command(name = "divide-chain", version, about)]
struct Args {
    /// Number of modifier copies to produce; prompted for when omitted.
    target: Option<u32>,
    #[arg(long, value_enum, default_value_t = Format::All)]
    format: Format,
    #[arg(long, value_enum, env = "DIVIDE_CHAIN_RULES", default_value_t = Rules::EarlyTermination)]
    rules: Rules,
    /// Largest single-group product kept.
    #[arg(long, env = "DIVIDE_CHAIN_CEILING", default_value_t = DEFAULT_PRODUCT_CEILING)]
    ceiling: u32,
    #[arg(long, env = "DIVIDE_CHAIN_MAX_MULTIPLIER", default_value_t = DEFAULT_MAX_OUTER_MULTIPLIER)]
    max_multiplier: u32,
    #[arg(long, env = "DIVIDE_CHAIN_MAX_ADDITION", default_value_t = DEFAULT_MAX_OUTER_ADDITION)]
    max_addition: u32,
    /// Largest target accepted.
    #[arg(long, env = "DIVIDE_CHAIN_MAX_TARGET", default_value_t = DEFAULT_MAX_TARGET)]
    max_target: u32,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Expression,
    Tokens,
    Json,
    All,
}

/// Command-line mirror of [`RuleSet`]; keep the variants in step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Rules {
    EarlyTermination,
    Overflow,
}

impl From<Rules> for RuleSet {
    fn from(rules: Rules) -> Self {
        match rules {
            Rules::EarlyTermination => RuleSet::EarlyTermination,
            Rules::Overflow => RuleSet::Overflow,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    expression: String,
    tokens: Vec<String>,
}

fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbose).into())
        .with_env_var("DIVIDE_CHAIN_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_target() -> Result<u32, String> {
    print!("Enter target number: ");
    io::stdout().flush().map_err(|err| err.to_string())?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| err.to_string())?;
    line.trim()
        .parse()
        .map_err(|_| format!("invalid target: {:?}", line.trim()))
}

fn print_solution(solution: &Solution, format: Format) -> Result<(), serde_json::Error> {
    let decomposition = &solution.decomposition;
    match format {
        Format::Expression => println!("{}", render::expression(decomposition)),
        Format::Tokens => println!("{}", render::token_list(decomposition)),
        Format::Json => {
            let report = Report {
                solution,
                expression: render::expression(decomposition),
                tokens: render::tokens(decomposition)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        Format::All => {
            println!("Target: {}", solution.target);
            println!("Expression: {}", render::expression(decomposition));
            println!("Tokens: {}", render::token_list(decomposition));
        }
    }
    println!("Total slots used: {}", solution.cost);
    println!("{}", render::breakdown(solution));
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let target = match args.target {
        Some(target) => target,
        None => match prompt_target() {
            Ok(target) => target,
            Err(message) => {
                eprintln!("{}", message);
                return ExitCode::from(2);
            }
        },
    };

    let config = SearchConfig::default()
        .with_product_ceiling(args.ceiling)
        .with_max_outer_multiplier(args.max_multiplier)
        .with_max_outer_addition(args.max_addition)
        .with_max_target(args.max_target)
        .with_rules(args.rules.into());

    let result = SearchContext::new(config).and_then(|mut ctx| ctx.decompose(target));
    match result {
        Ok(solution) => match print_solution(&solution, args.format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        },
        Err(DecomposeError::NotDecomposable { target }) => {
            eprintln!("no solution for {}", target);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(2)
        }
    }
}
