//! plugsmith's main application entry point and orchestration logic.
//! Parses the command line and runs either the configuration class generator
//! or the project scaffolder.

use std::io;
use std::path::Path;

use plugsmith::{
    artifacts::plan_artifacts,
    cli::{get_args, Action, Args},
    collector::{collect_settings, read_answers},
    emitter::emit_artifacts,
    error::{default_error_handler, Result},
    prompt::{DialoguerPrompter, Prompter},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    schema::{generate_from_file, ClassOptions},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    match args.action {
        Action::Schema { file, package, class_name } => {
            let options = ClassOptions { package, class_name };
            let class = generate_from_file(&engine, &file, &options)?;
            print!("{class}");
            Ok(())
        }
        Action::New { stdin } => {
            let working_dir = std::env::current_dir()?;
            scaffold(&engine, &working_dir, stdin)
        }
    }
}

/// Collects the settings, renders every file and writes the project.
fn scaffold(engine: &dyn TemplateRenderer, working_dir: &Path, from_stdin: bool) -> Result<()> {
    let prompt = DialoguerPrompter::new();

    let settings = if from_stdin {
        read_answers(io::stdin().lock(), working_dir)?
    } else {
        println!("Bukkit plugin bootstrap generator");
        collect_settings(&prompt, working_dir)?
    };

    prompt.title("Generating...");

    let artifacts = plan_artifacts(engine, &settings)?;
    let report = emit_artifacts(
        &settings.destination,
        &artifacts,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    log::debug!("{} files written, {} skipped", report.written.len(), report.skipped.len());
    println!("\nDone.");
    Ok(())
}
