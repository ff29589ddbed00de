use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use xml_compare::config::resolve_options;
use xml_compare::report::{render_paths, render_summary, render_text};
use xml_compare_core::{
    compare, format_json, format_paths_json, parse_file, UniquePathOptions, UniquePaths,
};

mod cli;

use cli::{Cli, Command, DiffArgs, HeuristicArgs, OutputFormat, PathsArgs};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Diff(args) => run_diff(args),
        Command::Paths(args) => run_paths(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn resolve(args: &HeuristicArgs) -> Result<UniquePathOptions> {
    let opts = resolve_options(
        args.config.as_deref(),
        &args.attributes,
        args.max_text_len,
    )?;
    info!(
        "uniqueness attributes={:?} max_text_len={}",
        opts.attributes, opts.max_text_len
    );
    Ok(opts)
}

fn run_diff(args: DiffArgs) -> Result<ExitCode> {
    let opts = resolve(&args.heuristics)?;

    let left = parse_file(&args.file1)
        .with_context(|| format!("failed to parse {}", args.file1.display()))?;
    let right = parse_file(&args.file2)
        .with_context(|| format!("failed to parse {}", args.file2.display()))?;

    let left_paths = UniquePaths::build(&left, &opts);
    let right_paths = UniquePaths::build(&right, &opts);
    let report = compare(&left_paths, &right_paths);
    info!(
        "{} vs {}: {} differing paths",
        args.file1.display(),
        args.file2.display(),
        report.len()
    );

    if args.summary {
        println!("{}", render_summary(&report));
    } else {
        match args.format {
            OutputFormat::Text => {
                if !report.is_equivalent() {
                    println!("{}", render_text(&report));
                }
            }
            OutputFormat::Json => println!("{}", format_json(&report)),
        }
    }

    Ok(if report.is_equivalent() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run_paths(args: PathsArgs) -> Result<ExitCode> {
    let opts = resolve(&args.heuristics)?;

    let node = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let paths = UniquePaths::build(&node, &opts);
    info!(
        "{}: {} unique paths, {} non-unique",
        args.file.display(),
        paths.len(),
        paths.non_unique().count()
    );

    match args.format {
        OutputFormat::Text => {
            let rendered = render_paths(&paths, args.non_unique);
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
        OutputFormat::Json => println!("{}", format_paths_json(&paths)),
    }

    Ok(ExitCode::SUCCESS)
}
