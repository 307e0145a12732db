//! Command-line interface implementation for connector-sdk.
//! Provides argument parsing and help text formatting using clap.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::codegen::CodegenOptions;
use crate::connector::ConnectorType;
use crate::constants::{CODEGEN_CMD, DEFAULT_CONNECTOR};

/// Command-line arguments structure for connector-sdk.
#[derive(Parser, Debug)]
#[command(
    name = "connector-sdk",
    author,
    version,
    about = "SDK for developing CP4S Connectors",
    override_usage = "connector-sdk <subcommand> ...\n       connector-sdk -v <subcommand> ...\n       connector-sdk -h",
    after_help = "For support, please visit ibm.biz/soarcommunity"
)]
pub struct Args {
    /// Set the log level to DEBUG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate boilerplate code to start developing a connector
    #[command(
        name = "codegen",
        override_usage = "connector-sdk codegen -p <package_name>\n       connector-sdk codegen -p <package_name> -t CAR\n       connector-sdk codegen -p <package_name> --connectortype UDI"
    )]
    Codegen(CodegenArgs),
}

/// Arguments of the `codegen` subcommand.
#[derive(clap::Args, Debug)]
pub struct CodegenArgs {
    /// (required) Name of the new package
    #[arg(short, long)]
    pub package: Option<String>,

    /// (optional) What type of connector you want to generate (CAR, UDI); defaults to CAR
    #[arg(short = 't', long = "connectortype", default_value = DEFAULT_CONNECTOR)]
    pub connector_type: ConnectorType,

    /// (optional) Directory the package is created in; defaults to the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate into an existing package, adding only the files that are missing
    #[arg(long)]
    pub reload: bool,
}

impl CodegenArgs {
    /// Converts the arguments into run options.
    ///
    /// Returns `None` when no package name was given.
    pub fn to_options(&self) -> Option<CodegenOptions> {
        let package_name = self.package.clone()?;
        Some(CodegenOptions {
            package_name,
            connector_type: self.connector_type,
            output: self.output.clone(),
            reload: self.reload,
        })
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}

/// Prints the top-level help.
pub fn print_help() -> std::io::Result<()> {
    Args::command().print_help()
}

/// Prints the help of the `codegen` subcommand.
pub fn print_codegen_help() -> std::io::Result<()> {
    let mut command = Args::command();
    match command.find_subcommand_mut(CODEGEN_CMD) {
        Some(codegen) => codegen.print_help(),
        None => command.print_help(),
    }
}
