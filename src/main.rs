//! connector-sdk's main application entry point.
//! Parses the command line, sets up logging and dispatches subcommands.

use connector_sdk::{
    cli::{get_args, print_codegen_help, print_help, CodegenArgs, Command},
    codegen,
    constants::CODEGEN_CMD,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    let Some(command) = args.command else {
        if let Err(err) = print_help() {
            default_error_handler("", Error::IoError(err));
        }
        return;
    };

    let (command_ran, outcome) = match command {
        Command::Codegen(codegen_args) => {
            (format!("{} --package | -p", CODEGEN_CMD), run_codegen(&codegen_args))
        }
    };

    if let Err(err) = outcome {
        default_error_handler(&command_ran, err);
    }
}

/// Runs `codegen`, or prints its help when no package was given.
fn run_codegen(args: &CodegenArgs) -> Result<()> {
    log::debug!("{:?}", args);
    let Some(options) = args.to_options() else {
        return Ok(print_codegen_help()?);
    };
    let report = codegen::run(&options)?;
    println!(
        "Connector package '{}' generated in {}.",
        options.package_name,
        report.package_dir.display()
    );
    Ok(())
}
