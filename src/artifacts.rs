//! Renders the files of a scaffolded plugin from its settings.
use crate::constants::{
    BUILD_DESCRIPTOR_FILE, BUKKIT_VERSION, COMMAND_SUFFIX, JAVA_SOURCES_DIR, MANIFEST_FILE,
    RESOURCES_DIR, ZLIB_VERSION,
};
use crate::error::Result;
use crate::naming::{capitalize, indent, java_string_literal};
use crate::renderer::TemplateRenderer;
use crate::settings::{PluginCommand, ScaffoldSettings};
use crate::templates::{
    BUILD_DESCRIPTOR_TEMPLATE, FRAMEWORK_COMMAND_TEMPLATE, LISTENER_TEMPLATE, MAIN_CLASS_TEMPLATE,
    MANIFEST_TEMPLATE, PLAIN_COMMAND_TEMPLATE,
};
use log::debug;
use serde_json::json;
use std::path::PathBuf;

/// A rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Renders every file of the project, in writing order: build descriptor,
/// manifest, main class, listeners, commands.
pub fn plan_artifacts(
    engine: &dyn TemplateRenderer,
    settings: &ScaffoldSettings,
) -> Result<Vec<Artifact>> {
    let root_package = PathBuf::from(JAVA_SOURCES_DIR).join(settings.package_dir());
    let mut artifacts = vec![
        Artifact {
            path: PathBuf::from(BUILD_DESCRIPTOR_FILE),
            content: render_build_descriptor(engine, settings)?,
        },
        Artifact {
            path: PathBuf::from(RESOURCES_DIR).join(MANIFEST_FILE),
            content: render_manifest(engine, settings)?,
        },
        Artifact {
            path: root_package.join(format!("{}.java", settings.main_class)),
            content: render_main_class(engine, settings)?,
        },
    ];

    for listener in &settings.listeners {
        artifacts.push(Artifact {
            path: root_package.join("listeners").join(format!("{listener}.java")),
            content: render_listener(engine, settings, listener)?,
        });
    }

    let commands_dir = root_package.join("commands");
    for command in &settings.commands {
        if settings.use_framework {
            for sub_command in &command.sub_commands {
                artifacts.push(Artifact {
                    path: commands_dir
                        .join(command.name.to_lowercase())
                        .join(format!("{}.java", framework_command_class(&command.name, sub_command))),
                    content: render_framework_command(engine, settings, command, sub_command)?,
                });
            }
        } else {
            artifacts.push(Artifact {
                path: commands_dir.join(format!("{}.java", plain_command_class(&command.name))),
                content: render_plain_command(engine, settings, command)?,
            });
        }
    }

    debug!("Planned {} files", artifacts.len());
    Ok(artifacts)
}

/// `pom.xml`
pub fn render_build_descriptor(
    engine: &dyn TemplateRenderer,
    settings: &ScaffoldSettings,
) -> Result<String> {
    let context = json!({
        "group_id": settings.group_id(),
        "artifact_id": settings.artifact_id(),
        "version": settings.version,
        "java_version": settings.java_version,
        "package": settings.package,
        "use_framework": settings.use_framework,
        "bukkit_version": BUKKIT_VERSION,
        "zlib_version": ZLIB_VERSION,
    });
    engine.render(BUILD_DESCRIPTOR_TEMPLATE, &context)
}

/// `plugin.yml`
pub fn render_manifest(engine: &dyn TemplateRenderer, settings: &ScaffoldSettings) -> Result<String> {
    let context = json!({
        "name": settings.name,
        "version": settings.version,
        "package": settings.package,
        "main_class": settings.main_class,
        "description": settings.description,
        "author": settings.author,
        "website": settings.website,
        "load_at_startup": settings.load_at_startup,
        "commands": settings.commands,
    });
    engine.render(MANIFEST_TEMPLATE, &context)
}

/// Plugin main class, registering listeners and commands on enable.
pub fn render_main_class(
    engine: &dyn TemplateRenderer,
    settings: &ScaffoldSettings,
) -> Result<String> {
    let package = &settings.package;
    let mut imports = Vec::new();
    let mut lines = Vec::new();

    let base_class = if settings.use_framework {
        imports.push("fr.zcraft.zlib.core.ZPlugin".to_string());

        let mut components = Vec::new();
        if !settings.commands.is_empty() {
            components.push("Commands.class".to_string());
            imports.push("fr.zcraft.zlib.components.commands.Commands".to_string());
        }
        for listener in &settings.listeners {
            components.push(format!("{listener}.class"));
            imports.push(format!("{package}.listeners.{listener}"));
        }
        lines.push(format!("loadComponents({});", components.join(", ")));

        if !settings.commands.is_empty() {
            lines.push(String::new());
        }
        for command in &settings.commands {
            let mut arguments = vec![java_string_literal(&command.name)];
            for sub_command in &command.sub_commands {
                let class_name = framework_command_class(&command.name, sub_command);
                imports.push(format!(
                    "{package}.commands.{}.{class_name}",
                    command.name.to_lowercase()
                ));
                arguments.push(format!("{class_name}.class"));
            }
            lines.push(format!("Commands.register({});", arguments.join(", ")));
        }

        "ZPlugin"
    } else {
        imports.push("org.bukkit.plugin.java.JavaPlugin".to_string());

        for listener in &settings.listeners {
            imports.push(format!("{package}.listeners.{listener}"));
            lines.push(format!(
                "getServer().getPluginManager().registerEvents(new {listener}(), this);"
            ));
        }

        if !settings.commands.is_empty() {
            lines.push(String::new());
        }
        for command in &settings.commands {
            let class_name = plain_command_class(&command.name);
            imports.push(format!("{package}.commands.{class_name}"));
            lines.push(format!(
                "getCommand({}).setExecutor(new {class_name}());",
                java_string_literal(&command.name)
            ));
        }

        "JavaPlugin"
    };

    let body = lines.join("\n");
    let on_enable = if body.trim().is_empty() {
        String::new()
    } else {
        indent(&body, 2).trim_end_matches('\n').to_string()
    };

    let context = json!({
        "package": package,
        "imports": imports,
        "class_name": settings.main_class,
        "base_class": base_class,
        "on_enable": on_enable,
    });
    engine.render(MAIN_CLASS_TEMPLATE, &context)
}

/// One listener class.
pub fn render_listener(
    engine: &dyn TemplateRenderer,
    settings: &ScaffoldSettings,
    listener: &str,
) -> Result<String> {
    let context = json!({
        "package": format!("{}.listeners", settings.package),
        "class_name": listener,
        "use_framework": settings.use_framework,
    });
    engine.render(LISTENER_TEMPLATE, &context)
}

/// One zLib sub-command class.
pub fn render_framework_command(
    engine: &dyn TemplateRenderer,
    settings: &ScaffoldSettings,
    command: &PluginCommand,
    sub_command: &str,
) -> Result<String> {
    let context = json!({
        "package": format!("{}.commands.{}", settings.package, command.name.to_lowercase()),
        "class_name": framework_command_class(&command.name, sub_command),
        "command": command.name,
        "sub_command": sub_command,
    });
    engine.render(FRAMEWORK_COMMAND_TEMPLATE, &context)
}

/// One Bukkit command executor class.
pub fn render_plain_command(
    engine: &dyn TemplateRenderer,
    settings: &ScaffoldSettings,
    command: &PluginCommand,
) -> Result<String> {
    let context = json!({
        "package": format!("{}.commands", settings.package),
        "class_name": plain_command_class(&command.name),
        "command": command.name,
    });
    engine.render(PLAIN_COMMAND_TEMPLATE, &context)
}

/// `warp` + `set` -> `WarpSetCommand`
pub fn framework_command_class(command: &str, sub_command: &str) -> String {
    format!("{}{}{COMMAND_SUFFIX}", capitalize(command), capitalize(sub_command))
}

/// `warp` -> `WarpCommand`
pub fn plain_command_class(command: &str) -> String {
    format!("{}{COMMAND_SUFFIX}", capitalize(command))
}
