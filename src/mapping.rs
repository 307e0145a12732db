//! File mappings: which output files a connector package consists of and
//! which template renders each of them.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::connector::ConnectorType;

/// Variables available to every template of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub package_name: String,
}

impl TemplateContext {
    pub fn new<S: Into<String>>(package_name: S) -> Self {
        Self { package_name: package_name.into() }
    }
}

/// One node of the desired output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingNode<'a> {
    /// A single output file rendered from `template` with `context`.
    Leaf { template: &'static str, context: &'a TemplateContext },
    /// A directory; children are written in insertion order.
    Directory(IndexMap<String, MappingNode<'a>>),
}

impl<'a> MappingNode<'a> {
    pub fn leaf(template: &'static str, context: &'a TemplateContext) -> Self {
        MappingNode::Leaf { template, context }
    }

    /// A directory with the given children.
    pub fn directory<I, K>(children: I) -> Self
    where
        I: IntoIterator<Item = (K, MappingNode<'a>)>,
        K: Into<String>,
    {
        MappingNode::Directory(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A directory with no content yet.
    pub fn empty_directory() -> Self {
        MappingNode::Directory(IndexMap::new())
    }

    /// Relative output paths of every leaf below this node, in traversal order.
    pub fn leaf_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, PathBuf::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &MappingNode<'_>, prefix: PathBuf, paths: &mut Vec<PathBuf>) {
    match node {
        MappingNode::Leaf { .. } => paths.push(prefix),
        MappingNode::Directory(children) => {
            for (name, child) in children {
                collect_leaf_paths(child, prefix.join(name), paths);
            }
        }
    }
}

/// Builds the file mapping of a connector package of the given type.
pub fn build(connector_type: ConnectorType, context: &TemplateContext) -> MappingNode<'_> {
    match connector_type {
        ConnectorType::Car => car_mapping(context),
        ConnectorType::Udi => udi_mapping(context),
    }
}

/// Names of the fixed top-level entries of a package layout.
///
/// A package named like one of them would replace that entry in the mapping.
pub fn reserved_names(connector_type: ConnectorType) -> Vec<String> {
    let context = TemplateContext::new("");
    match build(connector_type, &context) {
        MappingNode::Directory(children) => {
            children.into_keys().filter(|name| !name.is_empty()).collect()
        }
        MappingNode::Leaf { .. } => Vec::new(),
    }
}

/// Mapping of a CAR connector package.
///
/// Template names are relative to the CAR template root.
pub fn car_mapping(context: &TemplateContext) -> MappingNode<'_> {
    let leaf = |template: &'static str| MappingNode::leaf(template, context);

    MappingNode::directory([
        ("app.py", leaf("app.py.jinja2")),
        ("README.md", leaf("README.md.jinja2")),
        ("setup.py", leaf("setup.py.jinja2")),
        ("Dockerfile", leaf("Dockerfile.jinja2")),
        (
            "configurations",
            MappingNode::directory([
                ("config.json", leaf("configurations/config.json.jinja2")),
                ("lang.json", leaf("configurations/lang.json.jinja2")),
            ]),
        ),
        (
            context.package_name.as_str(),
            MappingNode::directory([
                ("__init__.py", leaf("connector/__init__.py.jinja2")),
                ("full_import.py", leaf("connector/full_import.py.jinja2")),
                ("data_handler.py", leaf("connector/data_handler.py.jinja2")),
                ("inc_import.py", leaf("connector/inc_import.py.jinja2")),
                ("requirements.txt", leaf("connector/requirements.txt.jinja2")),
                ("server_access.py", leaf("connector/server_access.py.jinja2")),
            ]),
        ),
        ("server", MappingNode::empty_directory()),
    ])
}

/// Mapping of a UDI connector package.
///
/// Template names are relative to the UDI template root.
pub fn udi_mapping(context: &TemplateContext) -> MappingNode<'_> {
    let leaf = |template: &'static str| MappingNode::leaf(template, context);

    MappingNode::directory([
        ("README.md", leaf("README.md.jinja2")),
        ("setup.py", leaf("setup.py.jinja2")),
        ("Dockerfile", leaf("Dockerfile.jinja2")),
        ("requirements.txt", leaf("requirements.txt.jinja2")),
        (
            "configuration",
            MappingNode::directory([
                ("config.json", leaf("configuration/config.json.jinja2")),
                ("lang_en.json", leaf("configuration/lang_en.json.jinja2")),
            ]),
        ),
        (
            context.package_name.as_str(),
            MappingNode::directory([
                ("__init__.py", leaf("connector/__init__.py.jinja2")),
                ("entry_point.py", leaf("connector/entry_point.py.jinja2")),
                (
                    "stix_translation",
                    MappingNode::directory([
                        ("__init__.py", leaf("connector/stix_translation/__init__.py.jinja2")),
                        (
                            "query_translator.py",
                            leaf("connector/stix_translation/query_translator.py.jinja2"),
                        ),
                        (
                            "results_translator.py",
                            leaf("connector/stix_translation/results_translator.py.jinja2"),
                        ),
                        (
                            "json",
                            MappingNode::directory([
                                (
                                    "from_stix_map.json",
                                    leaf("connector/stix_translation/json/from_stix_map.json.jinja2"),
                                ),
                                (
                                    "to_stix_map.json",
                                    leaf("connector/stix_translation/json/to_stix_map.json.jinja2"),
                                ),
                            ]),
                        ),
                    ]),
                ),
                (
                    "stix_transmission",
                    MappingNode::directory([
                        ("__init__.py", leaf("connector/stix_transmission/__init__.py.jinja2")),
                        ("connector.py", leaf("connector/stix_transmission/connector.py.jinja2")),
                        ("api_client.py", leaf("connector/stix_transmission/api_client.py.jinja2")),
                        (
                            "error_mapper.py",
                            leaf("connector/stix_transmission/error_mapper.py.jinja2"),
                        ),
                    ]),
                ),
            ]),
        ),
        ("server", MappingNode::empty_directory()),
    ])
}
