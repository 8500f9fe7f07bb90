use clap::Parser;
use std::fs;
use std::io::{self, Read};
use tracing::{Level, debug};

use crate::catalog::{self, VARIABLES};
use crate::error::AppError;
use crate::loading::calculator::EvaluationSummary;
use crate::models::{Assumptions, Inputs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sorption isotherm calculator — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with inputs and optional assumptions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for inputs (overrides --input)"
    )]
    inputs_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for assumptions (optional, supplements --inputs-json)"
    )]
    assumptions_json: Option<String>,
    #[arg(long, help = "Reject concentrations outside the model domain")]
    strict: bool,
    #[arg(long, help = "List the available isotherm models and exit")]
    pub list: bool,
    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

/// Install the stderr log subscriber; stdout stays reserved for results.
pub fn init_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn parse_inline_inputs(
    inputs_json: &str,
    assumptions_json: Option<&String>,
) -> Result<(Inputs, Assumptions), AppError> {
    let inputs: Inputs =
        serde_json::from_str(inputs_json).map_err(|source| AppError::ParseInputsJson { source })?;

    let assumptions = match assumptions_json {
        Some(s) => serde_json::from_str::<Assumptions>(s)
            .map_err(|source| AppError::ParseAssumptionsJson { source })?,
        None => Assumptions::default(),
    };

    Ok((inputs, assumptions))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Inputs, Assumptions), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.inputs, parsed.assumptions.unwrap_or_default()))
}

pub fn parse_inputs(args: &Args) -> Result<(Inputs, Assumptions), AppError> {
    let (inputs, mut assumptions) = match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => {
            parse_inline_inputs(inputs_json, args.assumptions_json.as_ref())?
        }
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)?
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)?
        }
        (None, None) => return Err(AppError::MissingInputData),
    };

    if args.strict {
        assumptions.strict_domain = true;
    }
    debug!(?assumptions, "parsed request");
    Ok((inputs, assumptions))
}

#[derive(serde::Deserialize)]
struct CmdInput {
    inputs: Inputs,
    #[serde(default)]
    assumptions: Option<Assumptions>,
}

pub fn print_output(out: &EvaluationSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("{}", out.title);
        println!("{}", out.formula);
        let params: Vec<String> = out
            .parameters
            .iter()
            .map(|p| format!("{} = {}", p.name, p.value))
            .collect();
        println!("{}", params.join(", "));
        println!("{:>14} {:>14}", "C", "Q");
        for (c, q) in out.points() {
            println!("{:>14.6} {:>14.6}", c, q);
        }
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct CatalogOutput {
    general_form: &'static str,
    reference: &'static str,
    doi: &'static str,
    variables: &'static [catalog::ParameterInfo],
    models: &'static [catalog::ModelInfo],
}

pub fn print_catalog(args: &Args) -> Result<(), AppError> {
    if args.json {
        let doc = CatalogOutput {
            general_form: catalog::GENERAL_FORM,
            reference: catalog::REFERENCE,
            doi: catalog::REFERENCE_DOI,
            variables: VARIABLES,
            models: catalog::models(),
        };
        let s = serde_json::to_string_pretty(&doc)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    println!("Sorption isotherm: {}", catalog::GENERAL_FORM);
    for v in VARIABLES {
        println!("  {}: {} [{}]", v.symbol, v.description, v.units.unwrap_or("?"));
    }
    println!(
        "Source: {} (doi:{})",
        catalog::REFERENCE,
        catalog::REFERENCE_DOI
    );
    for info in catalog::models() {
        println!();
        println!("{} ({})", info.title, info.kind);
        println!("  {}", info.formula);
        for p in info.parameters {
            println!(
                "  {:<5} {} [{}]",
                p.symbol,
                p.description,
                p.units.unwrap_or("?")
            );
        }
    }

    Ok(())
}
