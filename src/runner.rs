//! Orchestration of a full run: resolve inputs, copy the template,
//! substitute placeholders, merge env files, rename the backend package,
//! run the install hook, and print the next-steps summary.
//!
//! Only input validation and prompt failures unwind out of here; per-file
//! problems in the mutating stages are reported as warnings and the run
//! continues, so one unreadable file never blocks bootstrapping the rest.

use std::io;
use std::path::Path;

use crate::cli::Args;
use crate::constants::LEGACY_PROJECT_DIR;
use crate::copier::{self, CopyReport};
use crate::envfile;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::hooks;
use crate::parser::{self, Answers, RunConfig};
use crate::prompt::Prompter;
use crate::rename::{self, RenameOutcome};
use crate::substitute;
use log::{info, warn};

/// Entry point used by the binary: answers come from stdin when requested
/// and the template root is the current directory.
pub fn run(args: Args, prompt: &dyn Prompter) -> Result<()> {
    let answers =
        if args.stdin { parser::load_answers(io::stdin())? } else { Answers::default() };
    let source_root = std::env::current_dir()?;
    run_from(&source_root, &args, &answers, prompt)
}

/// The full flow against an explicit template root, split from [`run`] so
/// tests can drive it with a scripted prompter and a temp directory.
pub fn run_from(
    source_root: &Path,
    args: &Args,
    answers: &Answers,
    prompt: &dyn Prompter,
) -> Result<()> {
    println!("\n🎨 MyProject Template Setup\n");

    let config = parser::resolve_config(args, answers, source_root, prompt)?;
    let filter = PathFilter::new()?;
    print_plan(&config);

    if config.in_place {
        println!("\n[SETUP] Operating in place (no copy).");
    } else {
        if !(args.yes || prompt.confirm("Proceed with copy + rebrand + install?")?) {
            println!("Aborted.");
            return Ok(());
        }
        println!("\n[SETUP] Copying template files...");
        let report =
            copier::copy_tree(&config.source_root, &config.target_root, &filter)?;
        report_copy_failures(&report);
    }

    println!("[SETUP] Applying rebranding placeholders...");
    let table = config.name.replacement_table();
    let processed = substitute::process_tree(&config.target_root, &table, &filter);
    println!("Processed files: {}", processed);

    for spec in envfile::env_specs(&config.target_root, &config.ports) {
        if let Err(e) = envfile::merge_env(&spec) {
            warn!("Env update failed for {}: {}", spec.example.display(), e);
        }
    }

    match rename::rename_project_dir(&config.target_root, config.name.snake()) {
        Ok(RenameOutcome::Renamed { .. }) => {
            println!("Renamed backend: {} -> {}", LEGACY_PROJECT_DIR, config.name.snake());
        }
        Ok(RenameOutcome::LegacyMissing | RenameOutcome::TargetExists) => {
            info!("No backend rename needed or target exists.");
        }
        Err(e) => warn!("Rename failed: {}", e),
    }

    if !args.skip_install {
        println!("\n[SETUP] Installing dependencies via Makefile (make setup)...");
        let env = hooks::hook_env(&config.name, &config.ports);
        if let Err(e) = hooks::run_install_hook(&config.target_root, &env) {
            // The error display carries its own trailing period.
            warn!(
                "'make setup' failed: {} Please run it manually in {}.",
                e,
                config.target_root.display()
            );
        }
    }

    print_summary(&config);
    Ok(())
}

fn print_plan(config: &RunConfig) {
    println!("\nName variations:");
    println!("  my-project (kebab): {}", config.name.kebab());
    println!("  myproject (snake): {}", config.name.snake());
    println!("  MyProject (pascal): {}", config.name.pascal());
    println!("  MY_PROJECT (upper_snake): {}", config.name.upper_snake());
    println!("Ports:");
    println!("  Backend: {}", config.ports.backend);
    println!("  Frontend: {}", config.ports.frontend);
    println!("Destination: {}", config.target_root.display());
}

fn report_copy_failures(report: &CopyReport) {
    if report.failures.is_empty() {
        return;
    }
    let listed: Vec<String> = report
        .failures
        .iter()
        .map(|f| format!("{} ({})", f.path.display(), f.reason))
        .collect();
    warn!(
        "{} entries could not be copied: {}",
        report.failures.len(),
        listed.join("; ")
    );
}

/// Always printed once the mutating phase was reached, even after partial
/// failures, so the user can recover by rereading it.
fn print_summary(config: &RunConfig) {
    println!("\nNext steps:");
    println!("  • Environment files created with configured ports");
    println!("  • Use ./run.sh to refresh and start the app (kills old processes, resets DB, migrates, loads fixtures, restarts dev servers)");
    println!("  • Use ./run-e2e.sh --all or --file=tests/health.spec.ts to run E2E in a clean environment");
    println!("  • Backend: http://localhost:{}", config.ports.backend);
    println!("  • Frontend: http://localhost:{}", config.ports.frontend);
    println!("  • Health: http://localhost:{}/health", config.ports.frontend);
    println!("  • Project location: {}", config.target_root.display());
}
