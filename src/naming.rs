//! Identifier formatting shared by the schema generator and the scaffolder.
//! Every function here is pure; the only shared state is a pair of compiled,
//! read-only patterns.

use crate::constants::INDENT_WIDTH;
use regex::Regex;
use std::sync::LazyLock;

/// Capitalized word after any character: `HTTPServer` -> `HTTP_Server`.
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("invalid regex"));

/// Uppercase letter after a lowercase letter or digit: `maxPlayers` -> `max_Players`.
static LOWER_TO_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("invalid regex"));

/// Converts an arbitrary key into a Java constant name.
///
/// An underscore is inserted before an uppercase letter that either follows a
/// lowercase letter or digit, or starts a capitalized word (`HTTPServer` ->
/// `HTTP_SERVER`). Hyphens become underscores and the result is upper-cased.
///
/// # Examples
/// ```
/// use plugsmith::naming::to_snake_upper;
///
/// assert_eq!(to_snake_upper("maxPlayers"), "MAX_PLAYERS");
/// assert_eq!(to_snake_upper("world-border"), "WORLD_BORDER");
/// ```
pub fn to_snake_upper(identifier: &str) -> String {
    let words = CAPITALIZED_WORD.replace_all(identifier, "${1}_${2}");
    let snake = LOWER_TO_UPPER.replace_all(&words, "${1}_${2}");

    snake.to_uppercase().replace('-', "_")
}

/// Converts an arbitrary name into a Java class name.
///
/// Splits on hyphens, underscores and spaces and upper-cases the first
/// character of every segment. The rest of each segment is kept as is.
///
/// # Examples
/// ```
/// use plugsmith::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("foo-bar_baz"), "FooBarBaz");
/// assert_eq!(to_pascal_case("my cool plugin"), "MyCoolPlugin");
/// ```
pub fn to_pascal_case(identifier: &str) -> String {
    identifier
        .split(['-', '_', ' '])
        .filter(|segment| !segment.is_empty())
        .map(upper_first)
        .collect()
}

/// Upper-cases the first character and lower-cases the rest (`tELEport` -> `Teleport`).
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Indents every line of `text` by `level` steps.
///
/// Leading and trailing newlines are dropped first. Blank lines are kept
/// but not padded, and every line (the last included) ends with `\n`.
pub fn indent(text: &str, level: usize) -> String {
    let padding = " ".repeat(INDENT_WIDTH * level);
    let mut indented = String::with_capacity(text.len());

    for line in text.trim_matches('\n').split('\n') {
        if !line.is_empty() {
            indented.push_str(&padding);
            indented.push_str(line);
        }
        indented.push('\n');
    }

    indented
}

/// Default destination folder for a project name: lower-cased, spaces to underscores.
pub fn default_folder_name(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "_")
}

/// Quotes `value` as a Java string literal.
pub fn java_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
