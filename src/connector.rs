//! Connector types and the template set each of them is generated from.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CAR_TEMPLATE_ROOT, UDI_TEMPLATE_ROOT};
use crate::error::Error;

/// The connector archetypes a package can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectorType {
    /// Connected Assets and Risk: imports asset data into the platform.
    #[default]
    Car,
    /// Universal Data Insights: federated search over a data source.
    Udi,
}

impl ConnectorType {
    pub const ALL: [ConnectorType; 2] = [ConnectorType::Car, ConnectorType::Udi];

    /// Identifier used on the command line and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorType::Car => "CAR",
            ConnectorType::Udi => "UDI",
        }
    }

    /// Resolves an identifier, treating anything other than `UDI` as `CAR`.
    pub fn from_name_or_default(name: &str) -> Self {
        if name == ConnectorType::Udi.as_str() {
            ConnectorType::Udi
        } else {
            ConnectorType::Car
        }
    }

    /// Root of the embedded template set for this connector type.
    pub fn template_root(&self) -> &'static str {
        match self {
            ConnectorType::Car => CAR_TEMPLATE_ROOT,
            ConnectorType::Udi => UDI_TEMPLATE_ROOT,
        }
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectorType {
    type Err = Error;

    /// Strict parse: only the exact identifiers `CAR` and `UDI` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConnectorType::ALL
            .into_iter()
            .find(|connector_type| connector_type.as_str() == s)
            .ok_or_else(|| Error::UnknownConnectorType(s.to_string()))
    }
}

/// Returns the template root for a connector type identifier.
///
/// Never fails: unrecognized identifiers fall back to the CAR template set.
pub fn locate(connector_type: &str) -> &'static str {
    ConnectorType::from_name_or_default(connector_type).template_root()
}
