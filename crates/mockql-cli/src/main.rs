//! Developer CLI: builds the canonical demo model and prints or emits it.

mod demo;

use clap::{Parser, Subcommand};
use mockql::{
    core::{model::Model, types::SqlAction},
    emit::ModelWriter,
    prelude::*,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::error;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "mockql", version, about = "MockQL developer tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the Worker/Job demo model and print every table's SQL.
    Demo {
        /// Dump the annotated model as JSON instead of SQL text.
        #[arg(long)]
        json: bool,
    },

    /// Emit Rust model and service sources for the demo model.
    Emit {
        /// Output directory for the generated `mockql/` tree.
        #[arg(long, value_name = "DIR")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let service = MockQl::new(demo::graph());
    let model = service
        .build_model(["Worker"])
        .map_err(|e| e.to_string())?;

    match cli.command {
        Command::Demo { json } => {
            if json {
                let text = serde_json::to_string_pretty(&model).map_err(|e| e.to_string())?;
                println!("{text}");
            } else {
                print_model(&model);
            }
        }
        Command::Emit { out } => {
            ModelWriter::new()
                .write(&model, &out)
                .map_err(|e| e.to_string())?;
            println!("emitted {} tables to {}", model.len(), out.display());
        }
    }

    Ok(())
}

fn print_model(model: &Model) {
    println!("TOTAL TABLES: {}", model.len());

    for table in model.tables() {
        println!("========== {} ==========", table.name);

        for action in SqlAction::ALL {
            if let Some(sql) = table.action(action) {
                println!("{sql}");
                println!();
            }
        }
    }
}
