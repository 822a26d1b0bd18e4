//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves where tables live
//! - runs the requested evaluation
//! - prints reports/plots and writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, LookupArgs, ProbeArgs, SweepArgs, TablesArgs};
use crate::data::{DirStore, TableStore};
use crate::domain::{Field, ProbeConfig, SweepConfig, TableName};
use crate::error::AppError;
use crate::eval::Evaluator;
use crate::lookup::FoldedLookup;
use crate::report::TableStatus;

pub mod pipeline;

/// Entry point for the `funcascade` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Lookup(args) => handle_lookup(args),
        Command::Tables(args) => handle_tables(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Probe(args) => handle_probe(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = pipeline::eval_config_from_args(&args.store);
    let evaluator = Evaluator::new(pipeline::build_store(&config));

    let (x, y, z) = match (args.x, args.y, args.z) {
        (Some(x), Some(y), Some(z)) => (x, y, z),
        (None, None, None) => {
            let stdin = std::io::stdin();
            crate::io::prompt_triple(stdin.lock(), std::io::stdout())?
        }
        _ => return Err(AppError::new(2, "Provide all of x, y, z or none of them.")),
    };

    let evaluation = evaluator.evaluate(x, y, z);

    if args.json {
        println!("{}", crate::io::evaluation_json(&evaluation)?);
    } else {
        print!("{}", crate::report::format_evaluation(&evaluation));
    }

    Ok(())
}

fn handle_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = pipeline::eval_config_from_args(&args.store);
    let lookup = FoldedLookup::new(pipeline::build_store(&config));

    let fields = match args.field {
        Some(field) => vec![field],
        None => vec![Field::T, Field::U],
    };
    let results: Vec<_> = fields
        .into_iter()
        .map(|field| (field, lookup.value(args.x, field)))
        .collect();

    print!("{}", crate::report::format_lookup(args.x, &results));

    // Exit status reflects the first failure's kind.
    match results.into_iter().find_map(|(_, r)| r.err()) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn handle_tables(args: TablesArgs) -> Result<(), AppError> {
    let config = pipeline::eval_config_from_dir(&args.dir);
    let store = DirStore::from_config(&config);

    let rows: Vec<TableStatus> = TableName::ALL
        .into_iter()
        .map(|name| TableStatus {
            name,
            path: store.path_for(name),
            table: store.load(name),
        })
        .collect();

    print!("{}", crate::report::format_tables(&rows));
    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = pipeline::eval_config_from_args(&args.store);
    let evaluator = Evaluator::new(pipeline::build_store(&config));
    let sweep = sweep_config_from_args(&args);

    let rows = pipeline::run_sweep(&evaluator, &sweep)?;

    println!("{}", crate::report::format_sweep_summary(&sweep, &rows));

    if args.plot {
        let plot = crate::plot::render_sweep_plot(&rows, sweep.axis, args.width, args.height);
        println!("{plot}");
    }

    if let Some(path) = &args.export {
        crate::io::write_sweep_csv(path, &rows)?;
    }
    if let Some(path) = &args.export_json {
        crate::io::write_sweep_json(path, sweep.axis, &rows)?;
    }

    Ok(())
}

fn handle_probe(args: ProbeArgs) -> Result<(), AppError> {
    let config = pipeline::eval_config_from_args(&args.store);
    let evaluator = Evaluator::new(pipeline::build_store(&config));
    let probe = ProbeConfig {
        count: args.count,
        seed: args.seed,
        scale: args.scale,
    };

    let rows = pipeline::run_probe(&evaluator, &probe)?;
    println!("{}", crate::report::format_probe_summary(&probe, &rows));
    Ok(())
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    SweepConfig {
        axis: args.axis,
        from: args.from,
        to: args.to,
        steps: args.steps,
        fixed: (args.x, args.y, args.z),
    }
}
