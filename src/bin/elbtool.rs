use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use elbonian::symbols::SYMBOLS;
use elbonian::ConvertedNumber;

#[derive(Parser)]
#[command(name = "elbtool", about = "Elbonian numeral conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a number given in either form and print both forms
    Convert {
        /// An Elbonian numeral or a base-10 integer
        input: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the symbol table in grammar order
    Table,
}

#[derive(Serialize)]
struct ConvertOutput<'a> {
    input: &'a str,
    arabic: i32,
    elbonian: &'a str,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { input, json } => {
            let number = match ConvertedNumber::new(&input) {
                Ok(n) => n,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            };
            if json {
                let out = ConvertOutput {
                    input: &input,
                    arabic: number.to_integer(),
                    elbonian: number.to_numeral(),
                };
                println!("{}", serde_json::to_string(&out).expect("serialize"));
            } else {
                println!("arabic:   {}", number.to_integer());
                println!("elbonian: {}", number.to_numeral());
            }
        }

        Command::Table => {
            for s in SYMBOLS {
                println!("{}  {:>4}  max x{}", s.ch, s.weight, s.max_repeat);
            }
        }
    }
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("elbonian=debug")),
        )
        .init();
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}
