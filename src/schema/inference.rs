//! Java type inference for configuration values.
use crate::naming::java_string_literal;
use crate::schema::loader::Node;
use std::fmt;

/// Java type of a configuration item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Double,
    Boolean,
    /// Nothing to infer from (empty collection, nested mapping in a list)
    Unknown,
    List(Box<Kind>),
    Set(Box<Kind>),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => write!(f, "String"),
            Kind::Integer => write!(f, "Integer"),
            Kind::Double => write!(f, "Double"),
            Kind::Boolean => write!(f, "Boolean"),
            Kind::Unknown => write!(f, "?"),
            Kind::List(element) => write!(f, "List<{element}>"),
            Kind::Set(element) => write!(f, "Set<{element}>"),
        }
    }
}

/// Default value of a configuration item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// A Java literal, already quoted or formatted
    Literal(String),
    /// No inline default; the declaration passes `Kind.class` instead
    NoValue,
}

impl DefaultValue {
    /// Java expression passed as the second argument of `item(...)`.
    pub fn to_java(&self, kind: &Kind) -> String {
        match self {
            DefaultValue::Literal(literal) => literal.clone(),
            DefaultValue::NoValue => format!("{kind}.class"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inferred {
    pub kind: Kind,
    pub default: DefaultValue,
}

impl Inferred {
    fn new(kind: Kind, default: DefaultValue) -> Self {
        Self { kind, default }
    }
}

/// Infers the Java type and default of a leaf value.
///
/// Collections take the type of their first member only; the remaining
/// members are not looked at, so `[1, "a"]` is a `List<Integer>`. Empty
/// collections infer [`Kind::Unknown`].
pub fn infer(node: &Node) -> Inferred {
    match node {
        Node::Null => Inferred::new(Kind::String, DefaultValue::NoValue),
        Node::String(s) => Inferred::new(Kind::String, DefaultValue::Literal(java_string_literal(s))),
        Node::Integer(i) => Inferred::new(Kind::Integer, DefaultValue::Literal(i.to_string())),
        Node::Float(f) => Inferred::new(Kind::Double, DefaultValue::Literal(double_literal(*f))),
        Node::Bool(b) => Inferred::new(Kind::Boolean, DefaultValue::Literal(b.to_string())),
        Node::Sequence(items) => match first_member_kind(items) {
            Some(element) => Inferred::new(Kind::List(Box::new(element)), DefaultValue::NoValue),
            None => Inferred::new(Kind::Unknown, DefaultValue::NoValue),
        },
        Node::Set(members) => match first_member_kind(members) {
            Some(element) => Inferred::new(Kind::Set(Box::new(element)), DefaultValue::NoValue),
            None => Inferred::new(Kind::Unknown, DefaultValue::NoValue),
        },
        Node::Mapping(_) => Inferred::new(Kind::Unknown, DefaultValue::NoValue),
    }
}

/// Kind of the first member of a collection, `None` when it is empty.
pub fn first_member_kind(members: &[Node]) -> Option<Kind> {
    members.first().map(|member| infer(member).kind)
}

fn double_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        }
    } else {
        // Debug keeps the fractional part: `2.0`, not `2`.
        format!("{value:?}")
    }
}
