//! The `codegen` command: generates a connector package on disk.

use std::path::{Path, PathBuf};

use log::{debug, info};
use regex::Regex;

use crate::connector::{locate, ConnectorType};
use crate::constants::{PACKAGE_NAME_PATTERN, PYTHON_KEYWORDS};
use crate::error::{Error, Result};
use crate::mapping::{build, reserved_names, TemplateContext};
use crate::processor::{render_and_write, RenderResult};
use crate::renderer::MiniJinjaRenderer;

/// Settings of one code generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Name of the package to generate; also the name of its directory.
    pub package_name: String,
    pub connector_type: ConnectorType,
    /// Base directory the package directory is created in; defaults to the
    /// current working directory.
    pub output: Option<PathBuf>,
    /// Generate into an existing package directory, adding only missing files.
    pub reload: bool,
}

impl CodegenOptions {
    pub fn new<S: Into<String>>(package_name: S, connector_type: ConnectorType) -> Self {
        Self { package_name: package_name.into(), connector_type, output: None, reload: false }
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct CodegenReport {
    /// Absolute path of the generated package.
    pub package_dir: PathBuf,
    pub result: RenderResult,
}

/// Checks that `name` can be used as a Python package name.
pub fn is_valid_package_name(name: &str) -> Result<bool> {
    let re = Regex::new(PACKAGE_NAME_PATTERN)?;
    Ok(re.is_match(name) && !PYTHON_KEYWORDS.contains(&name))
}

/// Checks that `name` does not clash with a fixed top-level entry of the
/// package layout, e.g. `server` or `Dockerfile`.
///
/// Comparison ignores ASCII case so the check also holds on case-insensitive
/// filesystems.
pub fn is_reserved_name(name: &str, connector_type: ConnectorType) -> bool {
    reserved_names(connector_type).iter().any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// Resolves the directory a package is generated into.
///
/// `output` (or the current directory when absent) is made absolute and the
/// package name appended.
pub fn resolve_package_dir(package_name: &str, output: Option<&Path>) -> Result<PathBuf> {
    let base = match output {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?,
    };
    Ok(base.join(package_name))
}

/// Generates a connector package.
///
/// # Errors
/// * `Error::InvalidPackageName` before anything touches the filesystem, also
///   when the name clashes with a fixed entry of the package layout
/// * `Error::PackageAlreadyExists` if the package directory exists and `reload` is not set
/// * Any template or filesystem error raised while writing
pub fn run(options: &CodegenOptions) -> Result<CodegenReport> {
    debug!("called: codegen::run({:?})", options);

    if !is_valid_package_name(&options.package_name)?
        || is_reserved_name(&options.package_name, options.connector_type)
    {
        return Err(Error::InvalidPackageName { name: options.package_name.clone() });
    }

    let package_dir = resolve_package_dir(&options.package_name, options.output.as_deref())?;
    if package_dir.exists() && !options.reload {
        return Err(Error::PackageAlreadyExists { path: package_dir });
    }

    info!("Generating a package of type {}", options.connector_type);

    let renderer = MiniJinjaRenderer::new(locate(options.connector_type.as_str()));
    let context = TemplateContext::new(options.package_name.as_str());
    let mapping = build(options.connector_type, &context);

    let result = render_and_write(&renderer, &mapping, &package_dir)?;

    if !result.created.is_empty() {
        debug!("Newly generated files:\n\t> {}", join_paths(&result.created));
    }
    if !result.skipped.is_empty() {
        debug!("Files Skipped:\n\t> {}", join_paths(&result.skipped));
    }
    info!(
        "Codegen run finished for {}: {} created, {} skipped",
        options.package_name,
        result.created.len(),
        result.skipped.len()
    );

    Ok(CodegenReport { package_dir, result })
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join("\n\t> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_package_name() {
        for name in ["acme_connector", "_private", "Connector2"] {
            assert!(is_valid_package_name(name).unwrap(), "{} should be valid", name);
        }
        for name in ["", "2fast", "acme/connector", "acme-connector", "acme connector", "import", "None"] {
            assert!(!is_valid_package_name(name).unwrap(), "{} should be invalid", name);
        }
    }

    #[test]
    fn test_is_reserved_name() {
        assert!(is_reserved_name("server", ConnectorType::Car));
        assert!(is_reserved_name("Dockerfile", ConnectorType::Car));
        assert!(is_reserved_name("dockerfile", ConnectorType::Car));
        assert!(is_reserved_name("configurations", ConnectorType::Car));
        assert!(!is_reserved_name("configuration", ConnectorType::Car));

        assert!(is_reserved_name("server", ConnectorType::Udi));
        assert!(is_reserved_name("configuration", ConnectorType::Udi));
        assert!(!is_reserved_name("configurations", ConnectorType::Udi));

        assert!(!is_reserved_name("acme_connector", ConnectorType::Car));
        assert!(!is_reserved_name("acme_connector", ConnectorType::Udi));
    }

    #[test]
    fn test_resolve_package_dir() {
        let dir = resolve_package_dir("acme", Some(Path::new("/tmp/out"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/out/acme"));

        let dir = resolve_package_dir("acme", None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap().join("acme"));

        let dir = resolve_package_dir("acme", Some(Path::new("out"))).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("out/acme"));
    }
}
