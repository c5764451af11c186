#![deny(unsafe_code)]
//! CLI binary for the PDE image filter.
//!
//! Subcommands:
//! - `filter <operator>` — load an image, integrate the chosen PDE, write the result
//! - `list` — print available operators

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use pde_filter_core::{integrate, Recipe, SpatialOperator};
use pde_filter_operators::{snapshot, OperatorKind};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pde-filter", about = "Diffusion-PDE image filter CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Integrate a PDE over an image and write the filtered result.
    Filter {
        /// Operator name (e.g. "uniform-diffusion").
        operator: String,

        /// Input image path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output image path.
        #[arg(short, long, default_value = "filtered.png")]
        output: PathBuf,

        /// Integration start time.
        #[arg(long, default_value_t = 0.0)]
        t0: f64,

        /// RK4 step size (must be positive).
        #[arg(short, long, default_value_t = 0.01)]
        step: f64,

        /// Number of RK4 steps.
        #[arg(short = 'n', long, default_value_t = 100)]
        iters: usize,

        /// PRNG seed (stochastic-pattern operator only).
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Operator parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Fail with a divergence error if the result contains NaN/Inf.
        #[arg(long)]
        check_finite: bool,
    },
    /// List available operators.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let operators = OperatorKind::list_operators();
            if cli.json {
                let info = serde_json::json!({ "operators": operators });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Operators:");
                for name in operators {
                    println!("  {name}");
                }
            }
        }
        Command::Filter {
            operator,
            input,
            output,
            t0,
            step,
            iters,
            seed,
            params,
            check_finite,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let recipe = Recipe {
                operator: operator.clone(),
                t0,
                step,
                iterations: iters,
                seed,
                params: params.clone(),
            };
            recipe.validate()?;

            let u0 = snapshot::read_image(&input)?;
            let mut op = OperatorKind::from_name(&operator, seed, &params)?;
            let filtered = integrate(&mut op, &u0, t0, step, iters)?;

            if check_finite && !filtered.is_finite() {
                return Err(pde_filter_core::FilterError::NonFiniteField.into());
            }

            snapshot::write_image(&filtered, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "recipe": recipe,
                    "operator_params": op.params(),
                    "width": filtered.width(),
                    "height": filtered.height(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "filtered {} ({}x{}, {iters} steps of {step}, seed {seed}) -> {}",
                    operator,
                    filtered.width(),
                    filtered.height(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
