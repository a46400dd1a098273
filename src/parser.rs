//! Input resolution: preloaded stdin answers, port validation, and the
//! flag → answer → interactive-prompt precedence producing a `RunConfig`.

use crate::cli::Args;
use crate::constants::{DEFAULT_BACKEND_PORT, DEFAULT_FRONTEND_PORT, PORT_MIN};
use crate::error::{Error, Result};
use crate::naming::ProjectName;
use crate::prompt::Prompter;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Answers accepted on stdin as a single JSON object, e.g.
/// `{"name": "My App", "backend_port": 9000, "frontend_port": 3000,
/// "dest": "../my-app"}`. Every key is optional; missing keys fall through
/// to the interactive prompt.
#[derive(Deserialize, Debug, Default)]
pub struct Answers {
    pub name: Option<String>,
    pub backend_port: Option<u32>,
    pub frontend_port: Option<u32>,
    pub dest: Option<PathBuf>,
}

/// Parses preloaded answers from a reader. Malformed input is an input
/// validation error, reported before anything is mutated.
pub fn load_answers<R: Read>(reader: R) -> Result<Answers> {
    serde_json::from_reader(reader).map_err(|e| Error::AnswersError(e.to_string()))
}

/// Validated backend/frontend port pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortConfig {
    pub backend: u16,
    pub frontend: u16,
}

/// Everything the orchestrator needs for one run, resolved up front so that
/// validation failures happen before any filesystem mutation.
#[derive(Debug)]
pub struct RunConfig {
    pub name: ProjectName,
    pub ports: PortConfig,
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub in_place: bool,
}

/// Parses a port given as free text. Empty input selects the default;
/// anything else must be all digits and inside [1024, 65535].
pub fn parse_port(input: &str, default: u16) -> Result<u16> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidPort(trimmed.to_string()));
    }
    // All-digit input that overflows u64 is out of range, not malformed.
    match trimmed.parse::<u64>() {
        Ok(port) if (u64::from(PORT_MIN)..=u64::from(u16::MAX)).contains(&port) => {
            Ok(port as u16)
        }
        _ => Err(Error::PortOutOfRange(trimmed.to_string())),
    }
}

/// Default copy destination: a sibling of the template root named after the
/// kebab-case variant, so the copy never lands inside the template itself.
pub fn default_destination(source_root: &Path, kebab: &str) -> PathBuf {
    source_root.parent().unwrap_or(source_root).join(kebab)
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn resolve_port(
    flag: &Option<String>,
    answer: Option<u32>,
    default: u16,
    prompt_text: &str,
    prompt: &dyn Prompter,
) -> Result<u16> {
    let input = match (flag, answer) {
        (Some(value), _) => value.clone(),
        (None, Some(value)) => value.to_string(),
        (None, None) => prompt.read_text(prompt_text)?,
    };
    parse_port(&input, default)
}

fn resolve_destination(
    flag: &Option<PathBuf>,
    answer: &Option<PathBuf>,
    source_root: &Path,
    kebab: &str,
    prompt: &dyn Prompter,
) -> Result<PathBuf> {
    let default_dst = default_destination(source_root, kebab);
    let chosen = match (flag, answer) {
        (Some(dest), _) => dest.clone(),
        (None, Some(dest)) => dest.clone(),
        (None, None) => {
            let input = prompt.read_text(&format!(
                "Destination directory (default: {})",
                default_dst.display()
            ))?;
            PathBuf::from(input.trim())
        }
    };
    if chosen.as_os_str().is_empty() {
        return Ok(default_dst);
    }
    Ok(absolutize(&chosen))
}

/// Resolves name, ports, and target root from flags, preloaded answers, and
/// the prompter, in that order of precedence. Fails fast on empty names and
/// bad ports with no filesystem side effects.
pub fn resolve_config(
    args: &Args,
    answers: &Answers,
    source_root: &Path,
    prompt: &dyn Prompter,
) -> Result<RunConfig> {
    let raw_name = match (&args.name, &answers.name) {
        (Some(name), _) => name.clone(),
        (None, Some(name)) => name.clone(),
        (None, None) => prompt.read_text("Project name (e.g., My Project)")?,
    };
    let name = ProjectName::new(&raw_name)?;

    let backend = resolve_port(
        &args.backend_port,
        answers.backend_port,
        DEFAULT_BACKEND_PORT,
        "Backend port (default: 8000)",
        prompt,
    )?;
    let frontend = resolve_port(
        &args.frontend_port,
        answers.frontend_port,
        DEFAULT_FRONTEND_PORT,
        "Frontend port (default: 5173)",
        prompt,
    )?;

    let (target_root, in_place) = if args.in_place {
        (source_root.to_path_buf(), true)
    } else {
        let dest = resolve_destination(
            &args.dest,
            &answers.dest,
            source_root,
            name.kebab(),
            prompt,
        )?;
        (dest, false)
    };

    Ok(RunConfig {
        name,
        ports: PortConfig { backend, frontend },
        source_root: source_root.to_path_buf(),
        target_root,
        in_place,
    })
}
