//! Collects scaffold settings, either interactively or from an answers document.
use crate::constants::{DEFAULT_JAVA_VERSION, DEFAULT_VERSION};
use crate::error::{Error, Result};
use crate::naming::{default_folder_name, to_pascal_case};
use crate::prompt::Prompter;
use crate::settings::{PluginCommand, ScaffoldSettings};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Asks every scaffolding question in order and returns the answers.
///
/// The destination is asked last, relative to `working_dir`, and asked again
/// as long as the answer names an existing path.
pub fn collect_settings(prompt: &dyn Prompter, working_dir: &Path) -> Result<ScaffoldSettings> {
    prompt.title("The basics");

    let name = prompt.ask("What's your plugin name?", None)?;
    let version = prompt.ask("What's your plugin version?", Some(DEFAULT_VERSION))?;
    let author = prompt.ask("What's your name?", Some(""))?;
    let website = prompt.ask("Enter the plugin's website, if it exists.", Some(""))?;
    let description = prompt.ask("Enter a short description if you want.", Some(""))?;

    prompt.title("Technical basics");

    let java_version = prompt.ask(
        "Enter the Java version you want to use (1.7 or 1.8).",
        Some(DEFAULT_JAVA_VERSION),
    )?;
    let package = prompt.ask("What package do you want to use?", None)?;
    let main_class =
        prompt.ask("Enter the name of your main class.", Some(&to_pascal_case(&name)))?;
    let load_at_startup = prompt.confirm(
        "Do you want your plugin to be loaded at startup? \
         Required if you plan to alter the map generation.",
        false,
    )?;
    let use_framework = prompt.confirm("Do you plan to use zLib?", true)?;

    prompt.title("Listeners generation");

    let listeners = if prompt.confirm("Do you want us to add listeners for you?", true)? {
        collect_names(prompt, "Enter a listener name. An empty name ends.")?
    } else {
        Vec::new()
    };

    prompt.title("Commands");

    let commands = if prompt.confirm("Do you want us to add commands for you?", true)? {
        collect_commands(prompt, use_framework)?
    } else {
        Vec::new()
    };

    prompt.title("Files location");

    let destination = ask_destination(prompt, working_dir, &default_folder_name(&name))?;

    Ok(ScaffoldSettings {
        name,
        version,
        author,
        website,
        description,
        java_version,
        package,
        main_class,
        load_at_startup,
        use_framework,
        listeners,
        commands,
        destination,
    })
}

/// Asks for names until an empty answer.
pub fn collect_names(prompt: &dyn Prompter, question: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    loop {
        let name = prompt.ask(question, Some(""))?;
        if name.is_empty() {
            return Ok(names);
        }
        names.push(name);
    }
}

/// Asks for commands until an empty name. Sub-commands are only asked for
/// when the plugin uses zLib.
pub fn collect_commands(prompt: &dyn Prompter, use_framework: bool) -> Result<Vec<PluginCommand>> {
    let mut commands = Vec::new();
    loop {
        let name = prompt.ask("Enter the name of a command. An empty name ends.", Some(""))?;
        if name.is_empty() {
            return Ok(commands);
        }

        let description = prompt.ask("Enter a short description, if you want.", Some(""))?;
        let command = PluginCommand::new(name, description, Vec::new());

        let sub_commands = if use_framework {
            let question =
                format!("Enter the name of the /{} sub-commands, space-separated.", command.name);
            prompt.ask(&question, Some(""))?.split_whitespace().map(str::to_string).collect()
        } else {
            Vec::new()
        };

        debug!("Command /{} with sub-commands {:?}", command.name, sub_commands);
        commands.push(PluginCommand { sub_commands, ..command });
    }
}

/// Asks for the destination folder until it names a path that does not exist.
pub fn ask_destination(
    prompt: &dyn Prompter,
    working_dir: &Path,
    default_folder: &str,
) -> Result<PathBuf> {
    loop {
        let folder = prompt
            .ask("Type the folder where the plugin will be generated.", Some(default_folder))?;
        let destination = working_dir.join(folder);

        if !destination.exists() {
            return Ok(destination);
        }

        let err = Error::OutputDirectoryExistsError {
            output_dir: destination.display().to_string(),
        };
        prompt.warn(&err.to_string());
    }
}

/// Reads an answers document from `reader` instead of prompting.
pub fn read_answers<R: Read>(mut reader: R, working_dir: &Path) -> Result<ScaffoldSettings> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer).map_err(Error::IoError)?;
    ScaffoldSettings::from_answers(buffer.trim(), working_dir)
}
