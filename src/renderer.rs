//! Template renderer for connector-sdk.
//! Binds a MiniJinja environment to one embedded template set and registers
//! the custom filters available to every connector template.
use crate::error::Result;
use crate::templates;
use cruet::Inflector;
use log::debug;
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template `name` with the given context.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the renderer's template root
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based renderer over one embedded template root.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
    root: &'static str,
}

impl MiniJinjaRenderer {
    /// Creates a renderer resolving template names under `root`.
    ///
    /// Names are looked up in the embedded template store; includes and
    /// inheritance inside templates resolve against the same root.
    pub fn new(root: &'static str) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        // Outputs are source files, not markup; `.json` names must not be JSON-escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(move |name| Ok(templates::get_in(root, name).map(str::to_string)));
        add_filters(&mut env);
        Self { env, root }
    }

    pub fn root(&self) -> &'static str {
        self.root
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        debug!("Rendering template '{}/{}'", self.root, name);
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

/// Registers the connector filters on `env`.
pub fn add_filters(env: &mut Environment<'_>) {
    env.add_filter("camel", camel);
    env.add_filter("snake", snake);
    env.add_filter("kebab", kebab);
    env.add_filter("title_case", title_case);
    env.add_filter("upper_snake", upper_snake);
    env.add_filter("py_str", py_str);
}

/// `my_connector` -> `MyConnector`
pub fn camel(value: &str) -> String {
    value.to_pascal_case()
}

pub fn snake(value: &str) -> String {
    value.to_snake_case()
}

pub fn kebab(value: &str) -> String {
    value.to_kebab_case()
}

/// `my_connector` -> `My Connector`
pub fn title_case(value: &str) -> String {
    value.to_title_case()
}

/// `my_connector` -> `MY_CONNECTOR`
pub fn upper_snake(value: &str) -> String {
    value.to_screaming_snake_case()
}

/// Quotes `value` as a single-quoted Python string literal.
pub fn py_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
