use plugsmith::artifacts::{
    framework_command_class, plain_command_class, plan_artifacts, render_build_descriptor,
    render_framework_command, render_listener, render_main_class, render_manifest,
    render_plain_command,
};
use plugsmith::renderer::MiniJinjaRenderer;
use plugsmith::settings::{PluginCommand, ScaffoldSettings};
use std::path::PathBuf;

fn framework_settings() -> ScaffoldSettings {
    ScaffoldSettings {
        name: "Super Warps".to_string(),
        author: "Amaury".to_string(),
        description: "Warps, fast.".to_string(),
        java_version: "1.8".to_string(),
        package: "eu.carrade.superwarps".to_string(),
        main_class: "SuperWarps".to_string(),
        listeners: vec!["PlayerListener".to_string()],
        commands: vec![
            PluginCommand::new(
                "warp",
                "Manages warps",
                vec!["set".to_string(), "delete".to_string()],
            ),
            PluginCommand::new("spawn", "", vec![]),
        ],
        destination: PathBuf::from("super_warps"),
        ..Default::default()
    }
}

fn plain_settings() -> ScaffoldSettings {
    ScaffoldSettings {
        name: "Demo".to_string(),
        package: "com.example.demo".to_string(),
        main_class: "Demo".to_string(),
        use_framework: false,
        load_at_startup: true,
        listeners: vec!["JoinListener".to_string()],
        commands: vec![PluginCommand::new("greet", "Says hello", vec![])],
        destination: PathBuf::from("demo"),
        ..Default::default()
    }
}

#[test]
fn test_command_class_names() {
    assert_eq!(framework_command_class("warp", "set"), "WarpSetCommand");
    assert_eq!(framework_command_class("WARP", "deLete"), "WarpDeleteCommand");
    assert_eq!(plain_command_class("greet"), "GreetCommand");
}

#[test]
fn test_manifest_with_framework() {
    let engine = MiniJinjaRenderer::new();
    let manifest = render_manifest(&engine, &framework_settings()).unwrap();

    assert_eq!(
        manifest,
        r#"name: Super Warps
version: "1.0"
main: eu.carrade.superwarps.SuperWarps

description: Warps, fast.
author: Amaury

commands:
    warp:
        description: Manages warps
    spawn:
        description: ""
"#
    );
}

#[test]
fn test_manifest_minimal_with_startup() {
    let engine = MiniJinjaRenderer::new();
    let settings = ScaffoldSettings { commands: vec![], ..plain_settings() };
    let manifest = render_manifest(&engine, &settings).unwrap();

    assert_eq!(
        manifest,
        "name: Demo\nversion: \"1.0\"\nmain: com.example.demo.Demo\n\nload: STARTUP\n"
    );
}

#[test]
fn test_manifest_keeps_typed_looking_values_as_strings() {
    let engine = MiniJinjaRenderer::new();
    let settings = ScaffoldSettings {
        version: "1.10".to_string(),
        description: "null".to_string(),
        commands: vec![],
        ..plain_settings()
    };
    let manifest = render_manifest(&engine, &settings).unwrap();

    assert!(manifest.contains("version: \"1.10\"\n"));
    assert!(manifest.contains("description: \"null\"\n"));

    let parsed: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();
    assert_eq!(parsed["version"], serde_yaml::Value::String("1.10".to_string()));
    assert_eq!(parsed["description"], serde_yaml::Value::String("null".to_string()));
}

#[test]
fn test_main_class_with_framework() {
    let engine = MiniJinjaRenderer::new();
    let main_class = render_main_class(&engine, &framework_settings()).unwrap();

    assert_eq!(
        main_class,
        r#"package eu.carrade.superwarps;

import fr.zcraft.zlib.core.ZPlugin;
import fr.zcraft.zlib.components.commands.Commands;
import eu.carrade.superwarps.listeners.PlayerListener;
import eu.carrade.superwarps.commands.warp.WarpSetCommand;
import eu.carrade.superwarps.commands.warp.WarpDeleteCommand;


public final class SuperWarps extends ZPlugin
{
    private static SuperWarps instance;

    @Override
    public void onEnable()
    {
        instance = this;

        loadComponents(Commands.class, PlayerListener.class);

        Commands.register("warp", WarpSetCommand.class, WarpDeleteCommand.class);
        Commands.register("spawn");
    }

    public static SuperWarps get()
    {
        return instance;
    }
}
"#
    );
}

#[test]
fn test_main_class_without_framework() {
    let engine = MiniJinjaRenderer::new();
    let main_class = render_main_class(&engine, &plain_settings()).unwrap();

    assert!(main_class.contains("import org.bukkit.plugin.java.JavaPlugin;\n"));
    assert!(main_class.contains("import com.example.demo.listeners.JoinListener;\n"));
    assert!(main_class.contains("import com.example.demo.commands.GreetCommand;\n"));
    assert!(main_class.contains("public final class Demo extends JavaPlugin\n"));
    assert!(main_class.contains(
        "        instance = this;\n\n\
         \x20       getServer().getPluginManager().registerEvents(new JoinListener(), this);\n\n\
         \x20       getCommand(\"greet\").setExecutor(new GreetCommand());\n    }\n"
    ));
}

#[test]
fn test_main_class_without_anything_to_register() {
    let engine = MiniJinjaRenderer::new();
    let settings = ScaffoldSettings { listeners: vec![], commands: vec![], ..plain_settings() };
    let main_class = render_main_class(&engine, &settings).unwrap();

    assert!(main_class.contains("        instance = this;\n    }\n"));
}

#[test]
fn test_listener() {
    let engine = MiniJinjaRenderer::new();

    let with_framework = render_listener(&engine, &framework_settings(), "PlayerListener").unwrap();
    assert_eq!(
        with_framework,
        r#"package eu.carrade.superwarps.listeners;

import org.bukkit.event.Listener;
import fr.zcraft.zlib.core.ZLibComponent;

public final class PlayerListener extends ZLibComponent implements Listener
{
    // TODO implement events listeners
}
"#
    );

    let plain = render_listener(&engine, &plain_settings(), "JoinListener").unwrap();
    assert!(plain.contains("import org.bukkit.event.Listener;\n\npublic final class JoinListener implements Listener\n"));
}

#[test]
fn test_commands() {
    let engine = MiniJinjaRenderer::new();
    let settings = framework_settings();

    let sub_command = render_framework_command(&engine, &settings, &settings.commands[0], "set").unwrap();
    assert!(sub_command.starts_with("package eu.carrade.superwarps.commands.warp;\n"));
    assert!(sub_command.contains("@CommandInfo (name = \"set\", usageParameters = \"\")\n"));
    assert!(sub_command.contains("public final class WarpSetCommand extends Command\n"));
    assert!(sub_command.contains("// TODO implement command /warp set\n"));

    let settings = plain_settings();
    let command = render_plain_command(&engine, &settings, &settings.commands[0]).unwrap();
    assert!(command.starts_with("package com.example.demo.commands;\n"));
    assert!(command.contains("public class GreetCommand implements CommandExecutor, TabCompleter\n"));
    assert!(command.contains("// TODO implement auto-completion for /greet\n"));
}

#[test]
fn test_build_descriptor() {
    let engine = MiniJinjaRenderer::new();

    let with_framework = render_build_descriptor(&engine, &framework_settings()).unwrap();
    assert!(with_framework.contains("<groupId>eu.carrade.superwarps</groupId>"));
    assert!(with_framework.contains("<artifactId>SuperWarps</artifactId>"));
    assert!(with_framework.contains("<maven.compiler.source>1.8</maven.compiler.source>"));
    assert!(with_framework.contains("<shadedPattern>eu.carrade.superwarps.zlib</shadedPattern>"));
    assert!(with_framework.contains("<version>1.9-R0.1-SNAPSHOT</version>"));
    assert!(with_framework.contains("<artifactId>zlib</artifactId>"));
    assert!(with_framework.contains("</properties>\n\n    <build>\n"));
    assert!(with_framework.contains("    </build>\n\n    <repositories>\n"));

    let plain = render_build_descriptor(&engine, &plain_settings()).unwrap();
    assert!(!plain.contains("zlib"));
    assert!(plain.contains("</properties>\n\n    <repositories>\n"));
    assert!(plain.contains("        </repository>\n    </repositories>\n"));
    assert!(plain.contains("        </dependency>\n    </dependencies>\n</project>\n"));
}

#[test]
fn test_build_descriptor_escapes_xml() {
    let engine = MiniJinjaRenderer::new();
    let settings = ScaffoldSettings { version: "1.0<beta>".to_string(), ..plain_settings() };

    let pom = render_build_descriptor(&engine, &settings).unwrap();
    assert!(pom.contains("<version>1.0&lt;beta&gt;</version>"));
}

#[test]
fn test_plan_artifacts_with_framework() {
    let engine = MiniJinjaRenderer::new();
    let artifacts = plan_artifacts(&engine, &framework_settings()).unwrap();

    let paths: Vec<PathBuf> = artifacts.into_iter().map(|artifact| artifact.path).collect();
    let root = PathBuf::from("src/main/java/eu/carrade/superwarps");
    assert_eq!(
        paths,
        vec![
            PathBuf::from("pom.xml"),
            PathBuf::from("src/main/resources/plugin.yml"),
            root.join("SuperWarps.java"),
            root.join("listeners/PlayerListener.java"),
            root.join("commands/warp/WarpSetCommand.java"),
            root.join("commands/warp/WarpDeleteCommand.java"),
        ]
    );
}

#[test]
fn test_plan_artifacts_without_framework() {
    let engine = MiniJinjaRenderer::new();
    let artifacts = plan_artifacts(&engine, &plain_settings()).unwrap();

    let paths: Vec<PathBuf> = artifacts.into_iter().map(|artifact| artifact.path).collect();
    let root = PathBuf::from("src/main/java/com/example/demo");
    assert_eq!(
        paths,
        vec![
            PathBuf::from("pom.xml"),
            PathBuf::from("src/main/resources/plugin.yml"),
            root.join("Demo.java"),
            root.join("listeners/JoinListener.java"),
            root.join("commands/GreetCommand.java"),
        ]
    );
}
