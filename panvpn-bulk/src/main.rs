use anyhow::{Context, Result};
use clap::Parser;
use panvpn_bulk::build::GraphBuilder;
use panvpn_bulk::model::ObjectGraph;
use panvpn_bulk::reader::read_records;
use panvpn_bulk::report::{render_graph_summary, render_progress, render_warning};
use panvpn_bulk::row::COLUMN_NAMES;

mod cli;
mod push_cmd;

use cli::{Cli, Command, OutputFormat, PreviewArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Preview(args) => run_preview(args),
        Command::Push(args) => push_cmd::run_push(args),
        Command::Columns => run_columns(),
    }
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let progress = matches!(args.format, OutputFormat::Text) && !args.quiet;
    let graph = build_from_file(&args.file, progress)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_graph_summary(&graph)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
    }
    Ok(())
}

fn run_columns() -> Result<()> {
    for (index, name) in COLUMN_NAMES.iter().enumerate() {
        println!("{:>2}  {name}", index + 1);
    }
    Ok(())
}

/// Read the input file and fold every row into an object graph, printing
/// truncation warnings (and, optionally, per-row progress) as rows go by.
pub(crate) fn build_from_file(path: &std::path::Path, progress: bool) -> Result<ObjectGraph> {
    let records =
        read_records(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut builder = GraphBuilder::new();
    for (index, record) in records.iter().enumerate() {
        let outcome = builder.push_record(index + 1, record)?;
        for warning in &outcome.warnings {
            eprintln!("{}", render_warning(warning));
        }
        if progress {
            println!("{}", render_progress(index + 1, &outcome));
        }
    }
    Ok(builder.finish())
}
