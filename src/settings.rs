//! Scaffold settings: everything the scaffolder needs to render a project.
use crate::constants::{DEFAULT_JAVA_VERSION, DEFAULT_VERSION};
use crate::error::{Error, Result};
use crate::naming::{default_folder_name, to_pascal_case};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A command declared by the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCommand {
    /// Command name without the leading `/`
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// zLib sub-commands, in declaration order
    #[serde(default)]
    pub sub_commands: Vec<String>,
}

impl PluginCommand {
    pub fn new<S: Into<String>>(name: S, description: S, sub_commands: Vec<String>) -> Self {
        let name: String = name.into();
        Self {
            name: name.strip_prefix('/').map(str::to_string).unwrap_or(name),
            description: description.into(),
            sub_commands,
        }
    }
}

/// Answers collected by the scaffolder.
///
/// Also the schema of the answers document read by `plugsmith new --stdin`;
/// every field but `name` and `package` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldSettings {
    pub name: String,
    pub version: String,
    pub author: String,
    pub website: String,
    pub description: String,
    pub java_version: String,
    /// Root Java package
    pub package: String,
    /// Simple name of the plugin main class
    pub main_class: String,
    pub load_at_startup: bool,
    /// Build on zLib instead of the bare Bukkit API
    pub use_framework: bool,
    pub listeners: Vec<String>,
    pub commands: Vec<PluginCommand>,
    /// Directory the project is generated into; must not exist yet
    pub destination: PathBuf,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: DEFAULT_VERSION.to_string(),
            author: String::new(),
            website: String::new(),
            description: String::new(),
            java_version: DEFAULT_JAVA_VERSION.to_string(),
            package: String::new(),
            main_class: String::new(),
            load_at_startup: false,
            use_framework: true,
            listeners: Vec::new(),
            commands: Vec::new(),
            destination: PathBuf::new(),
        }
    }
}

impl ScaffoldSettings {
    /// Parses an answers document (JSON, or YAML when it is not JSON) and
    /// fills the derived defaults.
    ///
    /// # Errors
    /// * `Error::YamlError` if the document is neither JSON nor YAML
    /// * `Error::ValidationError` if `name` or `package` is missing
    /// * `Error::OutputDirectoryExistsError` if the destination already exists
    pub fn from_answers(content: &str, working_dir: &Path) -> Result<Self> {
        let settings: ScaffoldSettings = match serde_json::from_str(content) {
            Ok(settings) => settings,
            Err(e) => {
                debug!("Answers are not JSON ({e}), trying YAML");
                serde_yaml::from_str(content)?
            }
        };

        let settings = settings.with_defaults(working_dir)?;
        if settings.destination.exists() {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: settings.destination.display().to_string(),
            });
        }

        Ok(settings)
    }

    /// Validates required fields and derives the main class and destination
    /// when they were left empty.
    pub fn with_defaults(mut self, working_dir: &Path) -> Result<Self> {
        if self.name.trim().is_empty() {
            return Err(Error::ValidationError("the plugin name is required".to_string()));
        }
        if self.package.trim().is_empty() {
            return Err(Error::ValidationError("the package is required".to_string()));
        }

        if self.main_class.is_empty() {
            self.main_class = to_pascal_case(&self.name);
        }
        if self.destination.as_os_str().is_empty() {
            self.destination = PathBuf::from(default_folder_name(&self.name));
        }
        self.destination = working_dir.join(&self.destination);

        self.commands = self
            .commands
            .into_iter()
            .map(|command| PluginCommand::new(command.name, command.description, command.sub_commands))
            .collect();

        Ok(self)
    }

    /// Maven artifact id: the project name as a class name.
    pub fn artifact_id(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Maven group id: the package without the `.ArtifactId` part.
    pub fn group_id(&self) -> String {
        self.package.replace(&format!(".{}", self.artifact_id()), "")
    }

    /// Directory of the root package, relative to the Java sources root.
    pub fn package_dir(&self) -> PathBuf {
        self.package.split('.').collect()
    }
}
