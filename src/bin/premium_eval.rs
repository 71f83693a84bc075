//! Command-line harness for the prediction pipeline.
//!
//! Stands in for the presentation boundary: loads an artifact, reads one raw
//! input (JSON object of field name → value), and prints the formatted
//! premium.
//!
//! Examples:
//! - Built-in sample input:
//!   `cargo run --bin premium_eval --features cli -- --artifact model.json`
//! - Input from a file:
//!   `cargo run --bin premium_eval --features cli -- --artifact model.json --input request.json`

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use premium_rs::format::format_premium;
use premium_rs::input::RawInput;
use premium_rs::schema::fields;
use premium_rs::service::PremiumService;

#[derive(Debug)]
struct Args {
    artifact: PathBuf,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut artifact = None;
    let mut input = None;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--artifact" => {
                let value = it.next().ok_or("--artifact requires a path")?;
                artifact = Some(PathBuf::from(value));
            }
            "--input" => {
                let value = it.next().ok_or("--input requires a path")?;
                input = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err("usage: premium_eval --artifact <model.json> [--input <request.json>]"
                    .to_string());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(Args {
        artifact: artifact.ok_or("--artifact is required")?,
        input,
    })
}

/// The worked example from the form's defaults.
fn sample_input() -> RawInput {
    RawInput::new()
        .with(fields::AGE, 25)
        .with(fields::DEPENDANTS, 0)
        .with(fields::INCOME, 10)
        .with(fields::GENETICAL_RISK, 2)
        .with(fields::INSURANCE_PLAN, "Bronze")
        .with(fields::EMPLOYMENT_STATUS, "Salaried")
        .with(fields::GENDER, "Male")
        .with(fields::MARITAL_STATUS, "Unmarried")
        .with(fields::BMI_CATEGORY, "Normal")
        .with(fields::SMOKING_STATUS, "No Smoking")
        .with(fields::REGION, "Northwest")
        .with(fields::MEDICAL_HISTORY, "No Disease")
}

fn run(args: &Args) -> Result<(), String> {
    let service = PremiumService::load(&args.artifact)
        .map_err(|e| format!("failed to load model artifact: {e}"))?;

    let raw = match &args.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            serde_json::from_str::<RawInput>(&json)
                .map_err(|e| format!("failed to parse {}: {e}", path.display()))?
        }
        None => sample_input(),
    };

    let premium = service
        .predict(&raw)
        .map_err(|e| format!("prediction failed: {e}"))?;

    println!("Predicted health insurance cost: {}", format_premium(premium));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
