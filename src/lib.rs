//! plugsmith generates boilerplate for Bukkit plugins.
//! It turns a YAML configuration file into a zLib configuration class and
//! scaffolds new plugin projects from a handful of questions.

/// Rendered project files
pub mod artifacts;

/// Command-line interface module for the plugsmith application
pub mod cli;

/// Interactive and stdin-based collection of scaffold settings
pub mod collector;

/// Common constants
pub mod constants;

/// Writing rendered files to disk
pub mod emitter;

/// Error types and handling for the plugsmith application
pub mod error;

/// Case conversion and indentation helpers
pub mod naming;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engine
pub mod renderer;

/// YAML configuration to Java configuration class generation
pub mod schema;

/// Settings of a scaffolded project
pub mod settings;

/// Templates of the generated files
pub mod templates;
