//! # Multicalc CLI
//!
//! The four calculators from the terminal.
//!
//! ## Usage
//! ```bash
//! # One-shot calculations
//! calc_cli balance 5000 3200
//! calc_cli convert 10 --category weight
//! calc_cli percent what-percent 50 200
//! calc_cli electricity 350 --tax 8
//!
//! # Result as JSON
//! calc_cli --json electricity 350
//!
//! # Interactive menu
//! calc_cli
//! ```
//!
//! Input errors print `Input Error: <guidance>` to stderr and exit with
//! status 2.

mod interactive;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::calculations::{
    evaluate, BalanceForm, CalculationForm, CalculationResult, ConversionCategory, ConversionForm,
    PercentageForm, PercentageOperation,
};
use calc_core::{CalcError, Settings, INPUT_ERROR_TITLE};

/// Exit status for rejected input
const EXIT_INPUT_ERROR: u8 = 2;

/// Multi-functional calculator
#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(version)]
#[command(about = "Balance, unit conversion, percentage and electricity bill calculators", long_about = None)]
struct Args {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Monthly balance and savings percentage
    Balance {
        #[arg(allow_hyphen_values = true)]
        income: String,
        #[arg(allow_hyphen_values = true)]
        expenses: String,
    },

    /// One-way unit conversion
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Conversion category: length, weight or temperature (defaults to the configured one)
        #[arg(long)]
        category: Option<ConversionCategory>,
    },

    /// Percentage toolkit
    Percent {
        #[arg(value_enum)]
        operation: OperationArg,

        /// Base value, or the part for what-percent
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Percent, or the whole for what-percent
        #[arg(allow_hyphen_values = true)]
        secondary: String,
    },

    /// Tiered electricity bill estimate
    Electricity {
        /// Units consumed (kWh)
        #[arg(allow_hyphen_values = true)]
        units: String,

        /// Fixed charges (defaults to the configured value)
        #[arg(long, allow_hyphen_values = true)]
        fixed_charge: Option<String>,

        /// Tax percent (defaults to the configured value)
        #[arg(long, allow_hyphen_values = true)]
        tax: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OperationArg {
    Increase,
    Decrease,
    PercentOf,
    WhatPercent,
}

impl From<OperationArg> for PercentageOperation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Increase => PercentageOperation::Increase,
            OperationArg::Decrease => PercentageOperation::Decrease,
            OperationArg::PercentOf => PercentageOperation::PercentOf,
            OperationArg::WhatPercent => PercentageOperation::WhatPercent,
        }
    }
}

impl Commands {
    /// Raw-text form for this subcommand, with settings filling omitted options
    fn to_form(&self, settings: &Settings) -> CalculationForm {
        match self {
            Commands::Balance { income, expenses } => {
                CalculationForm::Balance(BalanceForm::new(income.as_str(), expenses.as_str()))
            }
            Commands::Convert { value, category } => {
                let category = category.unwrap_or(settings.defaults.category);
                CalculationForm::UnitConversion(ConversionForm::new(category, value.as_str()))
            }
            Commands::Percent {
                operation,
                base,
                secondary,
            } => CalculationForm::Percentage(PercentageForm::new(
                (*operation).into(),
                base.as_str(),
                secondary.as_str(),
            )),
            Commands::Electricity {
                units,
                fixed_charge,
                tax,
            } => {
                let mut form = settings.defaults.electricity_form();
                form.units = units.clone();
                if let Some(fixed_charge) = fixed_charge {
                    form.fixed_charge = fixed_charge.clone();
                }
                if let Some(tax) = tax {
                    form.tax_percent = tax.clone();
                }
                CalculationForm::Electricity(form)
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::load_or_default(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(tiers = settings.tariff.tiers.len(), "settings loaded");

    match &args.command {
        Some(command) => {
            let form = command.to_form(&settings);
            match evaluate(&form, &settings.tariff) {
                Ok(result) => {
                    print_result(&result, args.json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    report_error(&e, args.json);
                    ExitCode::from(EXIT_INPUT_ERROR)
                }
            }
        }
        None => match interactive::run(&settings, args.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Print a result as its summary line (plus tier breakdown) or as JSON
pub(crate) fn print_result(result: &CalculationResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {}", CalcError::from(e)),
        }
        return;
    }

    println!("{}", result.summary());
    if let CalculationResult::Electricity(bill) = result {
        for (i, tier) in bill.tiers.iter().enumerate() {
            println!("  Tier {}: {}", i + 1, tier.describe());
        }
    }
}

/// Print an error to stderr, with its JSON form when requested
pub(crate) fn report_error(error: &CalcError, json: bool) {
    if error.is_input_error() {
        eprintln!("{}: {}", INPUT_ERROR_TITLE, error.user_message());
    } else {
        eprintln!("Error: {}", error);
    }
    if json {
        if let Ok(text) = serde_json::to_string_pretty(error) {
            eprintln!("{}", text);
        }
    }
}
