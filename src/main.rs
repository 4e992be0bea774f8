use anyhow::{Context, Result};
use calder_neutree::dot::{DotParser, LinePolicy};
use calder_neutree::{convert_inputs, convert_outputs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calder-neutree")]
#[command(about = "Convert between CALDER files and Neutree records.", long_about = None)]
struct Cli {
    /// Log debug messages (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a simple somatic mutation file into a CALDER input file
    ConvertInputs {
        /// Simple somatic mutation file (.ssm)
        ssm_fn: PathBuf,
        /// Parameter file (.params.json)
        params_fn: PathBuf,
        /// Where to write the CALDER input file
        calder_input_fn: PathBuf,
    },
    /// Convert a CALDER solution and DOT tree into a Neutree record
    ConvertOutputs {
        /// Fail on DOT lines that are neither header, label, edge nor `}`
        #[arg(long)]
        strict_dot: bool,
        /// Parameter file (.params.json)
        params_fn: PathBuf,
        /// CALDER solution file
        calder_sol_fn: PathBuf,
        /// CALDER DOT tree file
        calder_dot_fn: PathBuf,
        /// Where to write the Neutree record
        neutree_fn: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(cli.command)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ConvertInputs {
            ssm_fn,
            params_fn,
            calder_input_fn,
        } => convert_inputs(&ssm_fn, &params_fn, &calder_input_fn).with_context(|| {
            format!(
                "converting {} to CALDER input {} failed",
                ssm_fn.display(),
                calder_input_fn.display()
            )
        }),
        Command::ConvertOutputs {
            strict_dot,
            params_fn,
            calder_sol_fn,
            calder_dot_fn,
            neutree_fn,
        } => {
            let line_policy = if strict_dot {
                LinePolicy::Strict
            } else {
                LinePolicy::Permissive
            };
            let dot_parser = DotParser::new().with_line_policy(line_policy);
            convert_outputs(&params_fn, &calder_sol_fn, &calder_dot_fn, &neutree_fn, &dot_parser)
                .map(|_| ())
                .with_context(|| format!("converting CALDER outputs to {} failed", neutree_fn.display()))
        }
    }
}
