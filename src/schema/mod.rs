//! YAML configuration to zLib `Configuration` class generator.
//!
//! ```text
//! loader       YAML file -> ordered Node tree
//! inference    Node -> Java kind + default
//! declaration  Node tree -> Declaration tree -> Java members
//! ```
use crate::constants::DEFAULT_CONFIG_CLASS;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::templates::CONFIG_CLASS_TEMPLATE;
use log::debug;
use std::path::Path;

pub mod declaration;
pub mod inference;
pub mod loader;

use declaration::{build_declarations, render_declarations, Scope};
use loader::{load_document, Mapping};

/// Options of the generated class.
#[derive(Debug, Clone)]
pub struct ClassOptions {
    /// Package declared at the top of the file, none when `None`
    pub package: Option<String>,
    /// Name of the generated class
    pub class_name: String,
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self { package: None, class_name: DEFAULT_CONFIG_CLASS.to_string() }
    }
}

/// Generates the full Java source of a configuration class for `mapping`.
pub fn generate_config_class(
    engine: &dyn TemplateRenderer,
    mapping: &Mapping,
    options: &ClassOptions,
) -> Result<String> {
    let declarations = build_declarations(mapping);
    debug!("Generated {} top-level declarations", declarations.len());

    let body = render_declarations(&declarations, Scope::TopLevel);
    let context = serde_json::json!({
        "package": options.package.as_deref().unwrap_or_default(),
        "class_name": options.class_name,
        "body": body.trim_end_matches('\n'),
    });

    engine.render(CONFIG_CLASS_TEMPLATE, &context)
}

/// Loads the YAML file at `path` and generates its configuration class.
///
/// # Errors
/// * `Error::InputNotFoundError` if the file does not exist
/// * any parsing or rendering error
pub fn generate_from_file<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    path: P,
    options: &ClassOptions,
) -> Result<String> {
    let mapping = load_document(path)?;
    generate_config_class(engine, &mapping, options)
}
