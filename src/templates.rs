//! MiniJinja templates of every generated file.
//!
//! Each template is rendered by [`crate::renderer::MiniJinjaRenderer`] with
//! strict undefined values, so every placeholder listed here must be present
//! in the context.

/// Configuration class. Context: `package` (may be empty), `class_name`,
/// `body` (rendered members, without the trailing newline).
pub const CONFIG_CLASS_TEMPLATE: &str = r#"{% if package %}
package {{ package }};

{% endif %}
import fr.zcraft.zlib.components.configuration.Configuration;
import fr.zcraft.zlib.components.configuration.ConfigurationItem;
import fr.zcraft.zlib.components.configuration.ConfigurationList;
import fr.zcraft.zlib.components.configuration.ConfigurationSection;

import static fr.zcraft.zlib.components.configuration.ConfigurationItem.item;
import static fr.zcraft.zlib.components.configuration.ConfigurationItem.list;
import static fr.zcraft.zlib.components.configuration.ConfigurationItem.section;


/**
 * Configuration.
 *
 * FIXME Auto-generated configuration class: check the guessed data types.
 *
 * Specific types (ItemStack, Locale, any Enum, Vector...) can be used directly in this
 * class, and new ones can be registered.
 * See: fr.zcraft.zlib.components.configuration.ConfigurationValueHandlers
 */
public class {{ class_name }} extends Configuration
{
{{ body }}
}
"#;

/// Maven build descriptor. Context: `group_id`, `artifact_id`, `version`,
/// `java_version`, `package`, `use_framework`, `bukkit_version`, `zlib_version`.
pub const BUILD_DESCRIPTOR_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <groupId>{{ group_id | escape }}</groupId>
    <artifactId>{{ artifact_id | escape }}</artifactId>
    <version>{{ version | escape }}</version>

    <packaging>jar</packaging>

    <properties>
        <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
        <maven.compiler.source>{{ java_version | escape }}</maven.compiler.source>
        <maven.compiler.target>{{ java_version | escape }}</maven.compiler.target>
    </properties>
{% if use_framework %}

    <build>
        <plugins>
            <plugin>
                <groupId>org.apache.maven.plugins</groupId>
                <artifactId>maven-shade-plugin</artifactId>
                <version>2.3</version>
                <configuration>
                    <minimizeJar>true</minimizeJar>
                    <artifactSet>
                        <includes>
                            <include>fr.zcraft:zlib</include>
                        </includes>
                    </artifactSet>
                    <relocations>
                        <relocation>
                            <pattern>fr.zcraft.zlib</pattern>
                            <shadedPattern>{{ package | escape }}.zlib</shadedPattern>
                        </relocation>
                    </relocations>
                </configuration>
                <executions>
                    <execution>
                        <phase>package</phase>
                        <goals>
                            <goal>shade</goal>
                        </goals>
                    </execution>
                </executions>
            </plugin>
        </plugins>
    </build>
{% endif %}

    <repositories>
        <repository>
            <id>spigot-repo</id>
            <url>https://hub.spigotmc.org/nexus/content/groups/public/</url>
        </repository>
{% if use_framework %}
        <repository>
            <id>zDevelopers</id>
            <url>http://maven.carrade.eu/artifactory/snapshots</url>
        </repository>
{% endif %}
    </repositories>

    <dependencies>
        <dependency>
            <groupId>org.bukkit</groupId>
            <artifactId>bukkit</artifactId>
            <version>{{ bukkit_version }}</version>
        </dependency>
{% if use_framework %}
        <dependency>
            <groupId>fr.zcraft</groupId>
            <artifactId>zlib</artifactId>
            <version>{{ zlib_version }}</version>
        </dependency>
{% endif %}
    </dependencies>
</project>
"#;

/// Plugin manifest. Context: `name`, `version`, `package`, `main_class`,
/// `description`, `author`, `website`, `load_at_startup`, `commands`
/// (list of `{name, description}`).
pub const MANIFEST_TEMPLATE: &str = r#"name: {{ name | yaml }}
version: {{ version | yaml }}
main: {{ package }}.{{ main_class }}
{% if description or author or website %}

{% if description %}
description: {{ description | yaml }}
{% endif %}
{% if author %}
author: {{ author | yaml }}
{% endif %}
{% if website %}
website: {{ website | yaml }}
{% endif %}
{% endif %}
{% if load_at_startup %}

load: STARTUP
{% endif %}
{% if commands %}

commands:
{% for command in commands %}
    {{ command.name | yaml }}:
        description: {{ command.description | yaml }}
{% endfor %}
{% endif %}
"#;

/// Plugin main class. Context: `package`, `imports` (fully qualified class
/// names), `class_name`, `base_class`, `on_enable` (indented body lines, may
/// be empty).
pub const MAIN_CLASS_TEMPLATE: &str = r#"package {{ package }};

{% for path in imports %}
import {{ path }};
{% endfor %}


public final class {{ class_name }} extends {{ base_class }}
{
    private static {{ class_name }} instance;

    @Override
    public void onEnable()
    {
        instance = this;
{% if on_enable %}

{{ on_enable }}
{% endif %}
    }

    public static {{ class_name }} get()
    {
        return instance;
    }
}
"#;

/// Event listener. Context: `package`, `class_name`, `use_framework`.
pub const LISTENER_TEMPLATE: &str = r#"package {{ package }};

import org.bukkit.event.Listener;
{% if use_framework %}
import fr.zcraft.zlib.core.ZLibComponent;
{% endif %}

public final class {{ class_name }} {% if use_framework %}extends ZLibComponent {% endif %}implements Listener
{
    // TODO implement events listeners
}
"#;

/// zLib sub-command. Context: `package`, `class_name`, `command`, `sub_command`.
pub const FRAMEWORK_COMMAND_TEMPLATE: &str = r#"package {{ package }};

import fr.zcraft.zlib.components.commands.Command;
import fr.zcraft.zlib.components.commands.CommandException;
import fr.zcraft.zlib.components.commands.CommandInfo;

import java.util.List;


@CommandInfo (name = {{ sub_command | java_string }}, usageParameters = "")
public final class {{ class_name }} extends Command
{
    @Override
    protected void run() throws CommandException
    {
        // TODO implement command /{{ command }} {{ sub_command }}
    }

    @Override
    protected List<String> complete() throws CommandException
    {
        // TODO implement auto-completion for /{{ command }} {{ sub_command }}
        return null;
    }
}
"#;

/// Bukkit command executor. Context: `package`, `class_name`, `command`.
pub const PLAIN_COMMAND_TEMPLATE: &str = r#"package {{ package }};

import org.bukkit.command.Command;
import org.bukkit.command.CommandExecutor;
import org.bukkit.command.CommandSender;
import org.bukkit.command.TabCompleter;

import java.util.List;


public class {{ class_name }} implements CommandExecutor, TabCompleter
{
    @Override
    public boolean onCommand(CommandSender sender, Command cmd, String label, String[] args)
    {
        // TODO implement command /{{ command }}
        return true;
    }

    @Override
    public List<String> onTabComplete(CommandSender sender, Command cmd, String label, String[] args)
    {
        // TODO implement auto-completion for /{{ command }}
        return null;
    }
}
"#;
