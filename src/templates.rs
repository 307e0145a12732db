//! Built-in template sets.
//!
//! Every template under `templates/` is compiled into the binary with
//! [`include_str!`] and addressed by its path relative to the crate root,
//! e.g. `templates/codegen/car_connector/app.py.jinja2`. A new template file
//! has to be listed in [`embed_templates!`] below before a mapping can use it.

macro_rules! embed_templates {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)))),*]
    };
}

static TEMPLATES: &[(&str, &str)] = embed_templates![
    // CAR connector
    "templates/codegen/car_connector/app.py.jinja2",
    "templates/codegen/car_connector/README.md.jinja2",
    "templates/codegen/car_connector/setup.py.jinja2",
    "templates/codegen/car_connector/Dockerfile.jinja2",
    "templates/codegen/car_connector/_header.py.jinja2",
    "templates/codegen/car_connector/configurations/config.json.jinja2",
    "templates/codegen/car_connector/configurations/lang.json.jinja2",
    "templates/codegen/car_connector/connector/__init__.py.jinja2",
    "templates/codegen/car_connector/connector/full_import.py.jinja2",
    "templates/codegen/car_connector/connector/data_handler.py.jinja2",
    "templates/codegen/car_connector/connector/inc_import.py.jinja2",
    "templates/codegen/car_connector/connector/requirements.txt.jinja2",
    "templates/codegen/car_connector/connector/server_access.py.jinja2",
    // UDI connector
    "templates/codegen/udi_connector/README.md.jinja2",
    "templates/codegen/udi_connector/setup.py.jinja2",
    "templates/codegen/udi_connector/Dockerfile.jinja2",
    "templates/codegen/udi_connector/requirements.txt.jinja2",
    "templates/codegen/udi_connector/_header.py.jinja2",
    "templates/codegen/udi_connector/configuration/config.json.jinja2",
    "templates/codegen/udi_connector/configuration/lang_en.json.jinja2",
    "templates/codegen/udi_connector/connector/__init__.py.jinja2",
    "templates/codegen/udi_connector/connector/entry_point.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_translation/__init__.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_translation/query_translator.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_translation/results_translator.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_translation/json/from_stix_map.json.jinja2",
    "templates/codegen/udi_connector/connector/stix_translation/json/to_stix_map.json.jinja2",
    "templates/codegen/udi_connector/connector/stix_transmission/__init__.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_transmission/connector.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_transmission/api_client.py.jinja2",
    "templates/codegen/udi_connector/connector/stix_transmission/error_mapper.py.jinja2",
];

/// Returns the source of the embedded template at `path`.
pub fn get(path: &str) -> Option<&'static str> {
    TEMPLATES.iter().find(|(name, _)| *name == path).map(|(_, source)| *source)
}

/// Returns the source of template `name` within the template set at `root`.
pub fn get_in(root: &str, name: &str) -> Option<&'static str> {
    get(&format!("{}/{}", root.trim_end_matches('/'), name))
}

/// Paths of all embedded templates.
pub fn paths() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(name, _)| *name)
}
