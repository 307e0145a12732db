//! Common constants used throughout connector-sdk.

/// Program name used in help output and error messages.
pub const PROGRAM_NAME: &str = "connector-sdk";

/// Name of the code generation subcommand.
pub const CODEGEN_CMD: &str = "codegen";

/// Connector type generated when none is given.
pub const DEFAULT_CONNECTOR: &str = "CAR";

/// Template root of the CAR (Connected Assets and Risk) connector set.
pub const CAR_TEMPLATE_ROOT: &str = "templates/codegen/car_connector";

/// Template root of the UDI (Universal Data Insights) connector set.
pub const UDI_TEMPLATE_ROOT: &str = "templates/codegen/udi_connector";

/// Package names must be Python identifiers.
pub const PACKAGE_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Python keywords; none of them can be used as a package name.
pub const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];
