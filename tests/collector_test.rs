use plugsmith::collector::{ask_destination, collect_settings, read_answers};
use plugsmith::error::{Error, Result};
use plugsmith::prompt::Prompter;
use plugsmith::settings::PluginCommand;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Answers questions from a script, the way a user typing them would.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    questions: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            questions: RefCell::new(Vec::new()),
            warnings: RefCell::new(Vec::new()),
        }
    }

    fn next_answer(&self, question: &str) -> Result<String> {
        self.questions.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("no scripted answer for '{question}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn title(&self, _text: &str) {}

    fn ask(&self, question: &str, default: Option<&str>) -> Result<String> {
        loop {
            let answer = self.next_answer(question)?;
            match (answer.is_empty(), default) {
                (false, _) => return Ok(answer),
                (true, Some(default)) => return Ok(default.to_string()),
                (true, None) => continue,
            }
        }
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        let answer = self.next_answer(question)?;
        Ok(match answer.as_str() {
            "y" => true,
            "n" => false,
            _ => default,
        })
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

#[test]
fn test_collect_settings_with_framework() {
    let temp_dir = TempDir::new().unwrap();
    let prompt = ScriptedPrompter::new(&[
        "Super Warps",  // name
        "",             // version
        "Amaury",       // author
        "",             // website
        "Warps, fast.", // description
        "1.8",          // java version
        "eu.carrade.superwarps",
        "",   // main class
        "",   // load at startup
        "",   // zLib
        "y",  // listeners?
        "PlayerListener",
        "WorldListener",
        "",
        "y", // commands?
        "/warp",
        "Manages warps",
        "set   delete list",
        "spawn",
        "",
        "",
        "",   // end of commands
        "",   // destination
    ]);

    let settings = collect_settings(&prompt, temp_dir.path()).unwrap();

    assert_eq!(settings.name, "Super Warps");
    assert_eq!(settings.version, "1.0");
    assert_eq!(settings.author, "Amaury");
    assert_eq!(settings.website, "");
    assert_eq!(settings.description, "Warps, fast.");
    assert_eq!(settings.java_version, "1.8");
    assert_eq!(settings.package, "eu.carrade.superwarps");
    assert_eq!(settings.main_class, "SuperWarps");
    assert!(!settings.load_at_startup);
    assert!(settings.use_framework);
    assert_eq!(settings.listeners, ["PlayerListener", "WorldListener"]);
    assert_eq!(
        settings.commands,
        vec![
            PluginCommand::new(
                "warp",
                "Manages warps",
                vec!["set".to_string(), "delete".to_string(), "list".to_string()]
            ),
            PluginCommand::new("spawn", "", vec![]),
        ]
    );
    assert_eq!(settings.destination, temp_dir.path().join("super_warps"));
    assert!(prompt.answers.borrow().is_empty());
}

#[test]
fn test_collect_settings_without_framework_skips_sub_commands() {
    let temp_dir = TempDir::new().unwrap();
    let prompt = ScriptedPrompter::new(&[
        "Demo", "", "", "", "", "", "com.example.demo", "DemoPlugin", "y", "n", // basics
        "n",    // no listeners
        "y", "greet", "Says hello", "", // one command, no sub-command question
        "out",
    ]);

    let settings = collect_settings(&prompt, temp_dir.path()).unwrap();

    assert_eq!(settings.main_class, "DemoPlugin");
    assert!(settings.load_at_startup);
    assert!(!settings.use_framework);
    assert!(settings.listeners.is_empty());
    assert_eq!(settings.commands, vec![PluginCommand::new("greet", "Says hello", vec![])]);
    assert_eq!(settings.destination, temp_dir.path().join("out"));
    assert!(!prompt.questions.borrow().iter().any(|q| q.contains("sub-commands")));
}

#[test]
fn test_required_questions_are_repeated() {
    let temp_dir = TempDir::new().unwrap();
    let prompt = ScriptedPrompter::new(&[
        "", "", "Demo", // name asked until given
        "", "", "", "", "", "com.example", "", "", "", "n", "n", "",
    ]);

    let settings = collect_settings(&prompt, temp_dir.path()).unwrap();

    assert_eq!(settings.name, "Demo");
    let questions = prompt.questions.borrow();
    assert_eq!(questions.iter().filter(|q| q.contains("plugin name")).count(), 3);
}

#[test]
fn test_existing_destination_is_asked_again() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("taken")).unwrap();
    fs::write(temp_dir.path().join("file"), "").unwrap();

    let prompt = ScriptedPrompter::new(&["taken", "file", "", "free"]);
    let destination = ask_destination(&prompt, temp_dir.path(), "taken").unwrap();

    assert_eq!(destination, temp_dir.path().join("free"));
    assert_eq!(prompt.questions.borrow().len(), 4);

    let warnings = prompt.warnings.borrow();
    assert_eq!(warnings.len(), 3);
    assert!(warnings[0].contains("already exists"));
    assert!(warnings[0].contains("taken"));
}

#[test]
fn test_read_answers_json() {
    let temp_dir = TempDir::new().unwrap();
    let answers = r#"{
        "name": "Super Warps",
        "package": "eu.carrade.superwarps",
        "commands": [{"name": "/warp", "sub_commands": ["set"]}]
    }"#;

    let settings = read_answers(answers.as_bytes(), temp_dir.path()).unwrap();

    assert_eq!(settings.main_class, "SuperWarps");
    assert_eq!(settings.version, "1.0");
    assert!(settings.use_framework);
    assert_eq!(settings.commands[0].name, "warp");
    assert_eq!(settings.commands[0].description, "");
    assert_eq!(settings.destination, temp_dir.path().join("super_warps"));
}

#[test]
fn test_read_answers_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let answers = "name: Demo\npackage: com.example\nuse_framework: false\ndestination: generated\n";

    let settings = read_answers(answers.as_bytes(), temp_dir.path()).unwrap();

    assert!(!settings.use_framework);
    assert_eq!(settings.destination, temp_dir.path().join("generated"));
}

#[test]
fn test_read_answers_existing_destination() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("demo")).unwrap();

    let result = read_answers("name: Demo\npackage: com.example\n".as_bytes(), temp_dir.path());

    assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
}

#[test]
fn test_read_answers_requires_name() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_answers("package: com.example\n".as_bytes(), temp_dir.path());

    match result {
        Err(Error::ValidationError(message)) => assert!(message.contains("name")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_destination_is_relative_to_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    let prompt = ScriptedPrompter::new(&["nested/project"]);

    let destination = ask_destination(&prompt, temp_dir.path(), "default").unwrap();
    assert_eq!(destination, temp_dir.path().join(PathBuf::from("nested/project")));
}
