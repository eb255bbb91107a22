//! CLI tool for checkout card input validation.
//!
//! # Usage
//!
//! ```bash
//! # Format a card number as the checkout form would
//! cardcheck format 4111111111111111
//!
//! # Validate a card number
//! cardcheck validate "4111 1111 1111 1111" --output json
//!
//! # Validate expiry and CVV
//! cardcheck expiry 12/30
//! cardcheck cvv 123
//!
//! # Detect the card network
//! cardcheck detect 3782
//!
//! # Validate a whole checkout form
//! cardcheck checkout --card 4111111111111111 --expiry 1230 --cvv 123 --name "Jordan Lee"
//! ```

use std::process::ExitCode;

use card_input::cvv::check_cvv;
use card_input::expiry::check_expiry_date;
use card_input::format::{format_card_number_input, MAX_FORMATTED_CARD_LEN};
use card_input::mask::mask_card_number;
use card_input::{check_card_number, format_card_number, get_card_type, CheckoutForm, Field};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Checkout card input validation tool")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a card number in groups of four
    Format {
        /// Card number (spaces allowed)
        card_number: String,
    },

    /// Validate a card number (length and Luhn checksum)
    Validate {
        /// Card number to validate (spaces allowed)
        card_number: String,
    },

    /// Validate an MM/YY expiry date against today's date
    Expiry {
        /// Expiry date (MM/YY)
        date: String,
    },

    /// Validate a CVV/CVC
    Cvv {
        /// CVV to validate
        cvv: String,
    },

    /// Detect the card network from a (partial) number
    Detect {
        /// Card number or prefix
        card_number: String,
    },

    /// Mask a card number, keeping the last four digits
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// Validate all fields of a checkout form at once
    Checkout {
        /// Card number
        #[arg(long)]
        card: String,

        /// Expiry date (MM/YY or MMYY)
        #[arg(long)]
        expiry: String,

        /// CVV
        #[arg(long)]
        cvv: String,

        /// Name on card
        #[arg(long)]
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Result of a single-field check.
#[derive(Serialize)]
struct CheckReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckReport {
    fn from_result<T, E: ToString>(result: Result<T, E>) -> Self {
        Self {
            valid: result.is_ok(),
            network: None,
            masked: None,
            error: result.err().map(|e| e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct CheckoutReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<&'static str>,
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct FieldError {
    field: &'static str,
    message: &'static str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = cli.output;

    match cli.command {
        Commands::Format { card_number } => cmd_format(&card_number, output),
        Commands::Validate { card_number } => cmd_validate(&card_number, output),
        Commands::Expiry { date } => {
            let result = check_expiry_date(&date);
            emit(CheckReport::from_result(result), output)
        }
        Commands::Cvv { cvv } => emit(CheckReport::from_result(check_cvv(&cvv)), output),
        Commands::Detect { card_number } => cmd_detect(&card_number, output),
        Commands::Mask { card_number } => {
            println!("{}", mask_card_number(&card_number));
            ExitCode::SUCCESS
        }
        Commands::Checkout {
            card,
            expiry,
            cvv,
            name,
        } => cmd_checkout(&card, &expiry, &cvv, &name, output),
    }
}

fn cmd_format(card_number: &str, output: OutputFormat) -> ExitCode {
    let formatted = format_card_number(card_number);
    let fits = format_card_number_input(card_number).is_some();

    match output {
        OutputFormat::Text => {
            println!("{}", formatted);
            if !fits {
                eprintln!(
                    "Warning: longer than {} characters, the checkout form would reject it",
                    MAX_FORMATTED_CARD_LEN
                );
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "formatted": formatted,
            "accepted": fits,
        })),
    }
    ExitCode::SUCCESS
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> ExitCode {
    let mut report = CheckReport::from_result(check_card_number(card_number));
    if report.valid {
        report.network = get_card_type(card_number).map(|n| n.as_str());
        report.masked = Some(mask_card_number(card_number));
    }
    emit(report, output)
}

fn cmd_detect(card_number: &str, output: OutputFormat) -> ExitCode {
    let network = get_card_type(card_number);

    match output {
        OutputFormat::Text => match network {
            Some(n) => println!("Detected Network: {} ({})", n.name(), n.as_str()),
            None => println!("Detected Network: Unknown"),
        },
        OutputFormat::Json => print_json(&serde_json::json!({ "network": network })),
    }

    if network.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_checkout(card: &str, expiry: &str, cvv: &str, name: &str, output: OutputFormat) -> ExitCode {
    let mut form = CheckoutForm::new();
    let inputs = [
        (Field::CardNumber, card),
        (Field::ExpiryDate, expiry),
        (Field::Cvv, cvv),
        (Field::NameOnCard, name),
    ];

    for (field, value) in inputs {
        if !form.handle_input(field, value) {
            eprintln!("Error: {} input rejected (too long)", field);
            return ExitCode::FAILURE;
        }
    }

    let valid = form.validate();
    let report = CheckoutReport {
        valid,
        network: form.card_network().map(|n| n.as_str()),
        errors: form
            .errors()
            .iter()
            .map(|(field, &message)| FieldError {
                field: field.as_str(),
                message,
            })
            .collect(),
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if report.valid { "yes" } else { "no" });
            if let Some(network) = report.network {
                println!("Network: {}", network);
            }
            for error in &report.errors {
                println!("{}: {}", error.field, error.message);
            }
        }
        OutputFormat::Json => print_json(&report),
    }

    exit_code(valid)
}

fn emit(report: CheckReport, output: OutputFormat) -> ExitCode {
    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if report.valid { "yes" } else { "no" });
            if let Some(network) = report.network {
                println!("Network: {}", network);
            }
            if let Some(masked) = &report.masked {
                println!("Masked: {}", masked);
            }
            if let Some(error) = &report.error {
                println!("Error: {}", error);
            }
        }
        OutputFormat::Json => print_json(&report),
    }
    exit_code(report.valid)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to encode JSON: {}", e),
    }
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
