//! Common constants used throughout plugsmith.

/// Default plugin version offered by the scaffolder
pub const DEFAULT_VERSION: &str = "1.0";

/// Default Java language level written into the build descriptor
pub const DEFAULT_JAVA_VERSION: &str = "1.7";

/// Bukkit API version the generated build descriptor depends on
pub const BUKKIT_VERSION: &str = "1.9-R0.1-SNAPSHOT";

/// zLib version the generated build descriptor depends on
pub const ZLIB_VERSION: &str = "0.99-SNAPSHOT";

/// Name of the generated configuration class when none is given
pub const DEFAULT_CONFIG_CLASS: &str = "Config";

/// Suffix appended to nested configuration section class names
pub const SECTION_SUFFIX: &str = "Section";

/// Suffix appended to generated command class names
pub const COMMAND_SUFFIX: &str = "Command";

/// Spaces per indentation level in generated Java sources
pub const INDENT_WIDTH: usize = 4;

/// Layout of a generated Maven project
pub const JAVA_SOURCES_DIR: &str = "src/main/java";
pub const RESOURCES_DIR: &str = "src/main/resources";
pub const BUILD_DESCRIPTOR_FILE: &str = "pom.xml";
pub const MANIFEST_FILE: &str = "plugin.yml";
