//! topoview CLI entry point.
//!
//! Lists the mocked app catalog and dumps laid-out topology graphs as JSON,
//! the same payload shape a render surface would consume.

use std::fs;
use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use topoview::model::FlowDirection;
use topoview::source::{GraphSource, MockSource};

/// Service topology graphs: fetch, auto-layout, print.
#[derive(Parser, Debug)]
#[command(name = "topoview", about = "Service topology graphs: fetch, auto-layout, print")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available apps
    Apps,
    /// Fetch an app's graph, lay it out, and print it as JSON
    Graph {
        /// App identifier (e.g. app-st-golang)
        app_id: String,

        /// Flow direction (LR or TB)
        #[arg(short = 'd', long = "direction", default_value = "LR")]
        direction: String,

        /// Print the raw fetched payload without running layout
        #[arg(long = "raw")]
        raw: bool,

        /// Write output to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let source = MockSource::new();

    let (rendered, output) = match cli.command {
        Command::Apps => {
            let apps = match source.fetch_apps() {
                Ok(apps) => apps,
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            };
            (to_json(&apps), None)
        }
        Command::Graph {
            app_id,
            direction,
            raw,
            output,
        } => {
            let graph = if raw {
                source.fetch_graph(&app_id).map_err(|e| e.to_string())
            } else {
                direction
                    .parse::<FlowDirection>()
                    .and_then(|d| {
                        topoview::load_app_graph(&source, &app_id, d).map_err(|e| e.to_string())
                    })
            };
            match graph {
                Ok(g) => (to_json(&g), output),
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    if let Some(ref path) = output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot serialize output: {}", e);
            process::exit(1);
        }
    }
}
