//! Loads a YAML configuration file into an insertion-ordered tree.
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use yaml_rust2::parser::{Event, EventReceiver, Parser, Tag};
use yaml_rust2::scanner::TScalarStyle;
use yaml_rust2::Yaml;

/// Ordered nested mapping: one level of the parsed document.
pub type Mapping = IndexMap<String, Node>;

/// A parsed YAML value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i128),
    Float(f64),
    String(String),
    Sequence(Vec<Node>),
    /// A `!!set` (or local `!set`) collection, members in document order
    Set(Vec<Node>),
    Mapping(Mapping),
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
/// * `Error::InputNotFoundError` if `path` is not an existing file
/// * `Error::YamlScanError` / `Error::SchemaError` if the content is not a usable mapping
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Mapping> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::InputNotFoundError { path: path.display().to_string() });
    }

    debug!("Loading configuration document from {}", path.display());
    let content = fs::read_to_string(path).map_err(Error::IoError)?;
    parse_document(&content)
}

/// Parses a YAML document whose root is a mapping.
///
/// Anchors and aliases are resolved and merge keys (`<<`) are applied. An
/// empty document is an empty mapping. Only the first document of a stream
/// is read.
pub fn parse_document(content: &str) -> Result<Mapping> {
    let mut builder = TreeBuilder::default();
    Parser::new_from_str(content).load(&mut builder, false)?;

    if let Some(err) = builder.error {
        return Err(err);
    }

    match builder.root {
        None | Some(Node::Null) => Ok(Mapping::new()),
        Some(Node::Mapping(mapping)) => Ok(mapping),
        Some(other) => Err(Error::SchemaError(format!(
            "the document root must be a mapping, found {}",
            other.describe()
        ))),
    }
}

impl Node {
    fn describe(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "a boolean",
            Node::Integer(_) => "an integer",
            Node::Float(_) => "a float",
            Node::String(_) => "a string",
            Node::Sequence(_) => "a sequence",
            Node::Set(_) => "a set",
            Node::Mapping(_) => "a mapping",
        }
    }
}

/// A mapping key as written, with its scalar text when it was a scalar.
struct Key {
    node: Node,
    text: Option<String>,
}

enum Frame {
    Sequence { anchor: usize, set: bool, items: Vec<Node> },
    Mapping { anchor: usize, set: bool, entries: Vec<(Key, Node)>, pending: Option<Key> },
}

/// Builds a [`Node`] tree from parser events.
///
/// Works on events rather than on a deserialized value so that core tags
/// such as `!!set` are still visible when a collection starts.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    root: Option<Node>,
    error: Option<Error>,
}

impl EventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event) {
        if self.error.is_some() {
            return;
        }

        match event {
            Event::Scalar(value, style, anchor, tag) => {
                let node = resolve_scalar(&value, style, tag.as_ref());
                let text = matches!(style, TScalarStyle::Plain).then_some(value);
                self.complete(node, anchor, text);
            }
            Event::Alias(id) => match self.anchors.get(&id).cloned() {
                Some(node) => self.complete(node, 0, None),
                None => self.error = Some(Error::SchemaError(format!("unknown alias #{id}"))),
            },
            Event::SequenceStart(anchor, tag) => self.stack.push(Frame::Sequence {
                anchor,
                set: is_set_tag(tag.as_ref()),
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, tag) => self.stack.push(Frame::Mapping {
                anchor,
                set: is_set_tag(tag.as_ref()),
                entries: Vec::new(),
                pending: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(frame) => match close_frame(frame) {
                    Ok((node, anchor)) => self.complete(node, anchor, None),
                    Err(err) => self.error = Some(err),
                },
                None => self.error = Some(Error::SchemaError("unbalanced collection".to_string())),
            },
            _ => {}
        }
    }
}

impl TreeBuilder {
    /// Attaches a finished node to the collection being built, or makes it the root.
    fn complete(&mut self, node: Node, anchor: usize, text: Option<String>) {
        if anchor != 0 {
            self.anchors.insert(anchor, node.clone());
        }

        match self.stack.last_mut() {
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { entries, pending, .. }) => match pending.take() {
                Some(key) => entries.push((key, node)),
                None => *pending = Some(Key { node, text }),
            },
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
        }
    }
}

fn close_frame(frame: Frame) -> Result<(Node, usize)> {
    match frame {
        Frame::Sequence { anchor, set, items } => {
            let node = if set { Node::Set(items) } else { Node::Sequence(items) };
            Ok((node, anchor))
        }
        // A set is a mapping whose keys are the members.
        Frame::Mapping { anchor, set: true, entries, .. } => {
            Ok((Node::Set(entries.into_iter().map(|(key, _)| key.node).collect()), anchor))
        }
        Frame::Mapping { anchor, set: false, entries, .. } => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                if key.text.as_deref() == Some("<<") {
                    merge_into(&mut mapping, value)?;
                } else {
                    mapping.insert(key_to_string(key)?, value);
                }
            }
            Ok((Node::Mapping(mapping), anchor))
        }
    }
}

// Merged entries never replace keys already present; later explicit keys
// replace merged ones.
fn merge_into(mapping: &mut Mapping, source: Node) -> Result<()> {
    match source {
        Node::Mapping(merged) => {
            for (key, value) in merged {
                mapping.entry(key).or_insert(value);
            }
            Ok(())
        }
        Node::Sequence(sources) => sources.into_iter().try_for_each(|s| merge_into(mapping, s)),
        other => Err(Error::SchemaError(format!(
            "a merge key expects a mapping, found {}",
            other.describe()
        ))),
    }
}

fn is_set_tag(tag: Option<&Tag>) -> bool {
    tag.is_some_and(|tag| tag.suffix == "set" || tag.suffix.ends_with(":set"))
}

fn resolve_scalar(value: &str, style: TScalarStyle, tag: Option<&Tag>) -> Node {
    if tag.is_some_and(|tag| tag.suffix == "str") || !matches!(style, TScalarStyle::Plain) {
        return Node::String(value.to_string());
    }

    match value {
        "" | "~" | "null" | "Null" | "NULL" if is_set_tag(tag) => {
            trace!("Empty set written as a scalar");
            Node::Set(Vec::new())
        }
        "" | "~" | "null" | "Null" | "NULL" => Node::Null,
        "true" | "True" | "TRUE" => Node::Bool(true),
        "false" | "False" | "FALSE" => Node::Bool(false),
        _ => match Yaml::from_str(value) {
            Yaml::Integer(i) => Node::Integer(i.into()),
            real @ Yaml::Real(_) => match real.as_f64() {
                Some(f) => Node::Float(f),
                None => Node::String(value.to_string()),
            },
            _ => Node::String(value.to_string()),
        },
    }
}

fn key_to_string(key: Key) -> Result<String> {
    if let Some(text) = key.text {
        return Ok(text);
    }

    match key.node {
        Node::String(s) => Ok(s),
        Node::Integer(i) => Ok(i.to_string()),
        Node::Float(f) => Ok(f.to_string()),
        Node::Bool(b) => Ok(b.to_string()),
        other => Err(Error::SchemaError(format!(
            "unsupported mapping key: {}",
            other.describe()
        ))),
    }
}
