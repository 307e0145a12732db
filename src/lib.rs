//! connector-sdk scaffolds boilerplate packages for CP4S connectors.
//! A package is produced by rendering one of the built-in template sets
//! (CAR or UDI) through a fixed file mapping into a new directory.

/// Command-line interface module for the connector-sdk application
pub mod cli;

/// The `codegen` command: validation, output resolution and reporting
pub mod codegen;

/// Connector types and template set lookup
pub mod connector;

/// Common constants
pub mod constants;

/// Error types and handling for the connector-sdk application
pub mod error;

pub mod logger;

/// Output file trees and the templates that fill them
pub mod mapping;

/// Renders a file mapping to disk
pub mod processor;

/// Template rendering and custom filters
pub mod renderer;

/// Templates compiled into the binary
pub mod templates;
