#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, init_tracing, parse_inputs, print_catalog, print_output};
    use crate::loading::calculator::compute_summary;

    let args = Args::parse();
    init_tracing(&args);

    if args.list {
        return print_catalog(&args);
    }

    let (inp, ass) = parse_inputs(&args)?;

    let out = compute_summary(&inp, &ass)?;

    print_output(&out, &args)?;

    Ok(())
}
