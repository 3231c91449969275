//! Template rendering for generated sources.
//! Templates are MiniJinja sources with named placeholders; values are
//! inserted verbatim unless a template asks for one of the escaping filters.
use crate::error::{Error, Result};
use crate::naming::java_string_literal;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// The environment never auto-escapes (the outputs are Java, XML and YAML,
/// not HTML), fails on undefined placeholders, trims the newline after block
/// tags and keeps the trailing newline of each template. Escaping is explicit
/// through the built-in `escape` filter (XML values) and the `yaml` and
/// `java_string` filters.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with the escaping filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("yaml", yaml_scalar);
        env.add_filter("java_string", java_string);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not compile, references
    ///   an undefined value, or fails while rendering
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

/// Leaves plain YAML scalars alone and double-quotes any value that would not
/// read back as the same string: typed scalars (`null`, `true`, `1.10`),
/// indicators, `: `, surrounding spaces, control characters.
///
/// `plugin.yml` is read by a YAML 1.1 parser, so its extra booleans
/// (`yes`, `off`, ...) are quoted too.
pub fn yaml_scalar(value: String) -> String {
    const YAML_11_KEYWORDS: &[&str] =
        &["y", "n", "yes", "no", "on", "off", "true", "false", "null", "~"];

    let reads_back = matches!(
        serde_yaml::from_str::<serde_yaml::Value>(&value),
        Ok(serde_yaml::Value::String(ref parsed)) if *parsed == value
    );
    let needs_quotes = !reads_back
        || value.chars().any(char::is_control)
        || YAML_11_KEYWORDS.contains(&value.to_lowercase().as_str());

    if needs_quotes {
        serde_json::Value::String(value).to_string()
    } else {
        value
    }
}

fn java_string(value: String) -> String {
    java_string_literal(&value)
}
