//! Builds zLib configuration declarations from a parsed document and renders
//! them as Java class members.
use crate::constants::SECTION_SUFFIX;
use crate::naming::{indent, java_string_literal, to_pascal_case, to_snake_upper};
use crate::schema::inference::{first_member_kind, infer, DefaultValue, Kind};
use crate::schema::loader::{Mapping, Node};
use log::trace;

/// One generated class member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `ConfigurationItem<kind>` with an inline default or a type marker
    Scalar { key: String, name: String, kind: Kind, default: DefaultValue },
    /// `ConfigurationList<element>`
    List { key: String, name: String, element: Kind },
    /// Nested `ConfigurationSection` subclass
    Section { key: String, name: String, type_name: String, children: Vec<Declaration> },
}

impl Declaration {
    /// Java constant name of the member.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Scalar { name, .. }
            | Declaration::List { name, .. }
            | Declaration::Section { name, .. } => name,
        }
    }
}

/// Where a member is declared. Top-level members are `static`, members of a
/// section class are instance fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    TopLevel,
    Nested,
}

impl Scope {
    fn qualifier(self) -> &'static str {
        match self {
            Scope::TopLevel => "static ",
            Scope::Nested => "",
        }
    }
}

/// Creates one declaration per key, in document order, recursing into nested mappings.
pub fn build_declarations(mapping: &Mapping) -> Vec<Declaration> {
    mapping.iter().map(|(key, node)| build_declaration(key, node)).collect()
}

fn build_declaration(key: &str, node: &Node) -> Declaration {
    let name = to_snake_upper(key);
    trace!("Declaring '{key}' as {name}");

    match node {
        Node::Mapping(children) => Declaration::Section {
            key: key.to_string(),
            name,
            type_name: format!("{}{SECTION_SUFFIX}", to_pascal_case(key)),
            children: build_declarations(children),
        },
        Node::Sequence(items) => Declaration::List {
            key: key.to_string(),
            name,
            element: first_member_kind(items).unwrap_or(Kind::Unknown),
        },
        // Sets are plain items: `Set<X>`, or `?` when empty.
        value => {
            let inferred = infer(value);
            Declaration::Scalar {
                key: key.to_string(),
                name,
                kind: inferred.kind,
                default: inferred.default,
            }
        }
    }
}

/// Renders declarations as Java members, indented one level.
///
/// Every member ends with a newline; sections are surrounded by a blank line.
pub fn render_declarations(declarations: &[Declaration], scope: Scope) -> String {
    let qualifier = scope.qualifier();
    let mut code = String::new();

    for declaration in declarations {
        match declaration {
            Declaration::Scalar { key, name, kind, default } => {
                code.push_str(&format!(
                    "{qualifier}public final ConfigurationItem<{kind}> {name} = item({path}, {value});",
                    path = java_string_literal(key),
                    value = default.to_java(kind),
                ));
            }
            Declaration::List { key, name, element } => {
                code.push_str(&format!(
                    "{qualifier}public final ConfigurationList<{element}> {name} = list({path}, {element}.class);",
                    path = java_string_literal(key),
                ));
            }
            Declaration::Section { key, name, type_name, children } => {
                let body = render_declarations(children, Scope::Nested);
                code.push('\n');
                code.push_str(&format!(
                    "{qualifier}public final {type_name} {name} = section({path}, {type_name}.class);\n\
                     static public class {type_name} extends ConfigurationSection\n\
                     {{\n{body}}}\n",
                    path = java_string_literal(key),
                ));
            }
        }
        code.push('\n');
    }

    indent(&code, 1)
}
