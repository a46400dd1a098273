//! Environment file bootstrapping.
//!
//! Each template component ships a `.env.example`; the generated `.env`
//! keeps its comments and untouched lines and overlays the computed values
//! for a fixed set of keys. Override keys the example does not define are
//! dropped rather than appended, so the merger never invents configuration
//! the template did not declare.

use crate::constants::{BACKEND_DIR, E2E_DIR, ENV_EXAMPLE_FILE, ENV_FILE, FRONTEND_DIR};
use crate::error::Result;
use crate::parser::PortConfig;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One example/output pair plus the key overrides to overlay.
#[derive(Debug)]
pub struct EnvSpec {
    pub example: PathBuf,
    pub output: PathBuf,
    pub overrides: IndexMap<String, String>,
}

fn localhost(port: u16) -> String {
    format!("http://localhost:{}", port)
}

/// The three fixed env pairs for a target root: backend, frontend, and the
/// end-to-end test suite wiring both together.
pub fn env_specs(target: &Path, ports: &PortConfig) -> Vec<EnvSpec> {
    vec![
        EnvSpec {
            example: target.join(BACKEND_DIR).join(ENV_EXAMPLE_FILE),
            output: target.join(BACKEND_DIR).join(ENV_FILE),
            overrides: IndexMap::from([
                ("BACKEND_PORT".to_string(), ports.backend.to_string()),
                ("CORS_ALLOWED_ORIGINS".to_string(), localhost(ports.frontend)),
            ]),
        },
        EnvSpec {
            example: target.join(FRONTEND_DIR).join(ENV_EXAMPLE_FILE),
            output: target.join(FRONTEND_DIR).join(ENV_FILE),
            overrides: IndexMap::from([
                ("VITE_PORT".to_string(), ports.frontend.to_string()),
                ("VITE_API_URL".to_string(), localhost(ports.backend)),
            ]),
        },
        EnvSpec {
            example: target.join(E2E_DIR).join(ENV_EXAMPLE_FILE),
            output: target.join(E2E_DIR).join(ENV_FILE),
            overrides: IndexMap::from([
                ("BACKEND_PORT".to_string(), ports.backend.to_string()),
                ("FRONTEND_PORT".to_string(), ports.frontend.to_string()),
                ("BACKEND_URL".to_string(), localhost(ports.backend)),
                ("FRONTEND_URL".to_string(), localhost(ports.frontend)),
            ]),
        },
    ]
}

/// Overlays `overrides` onto example content, line by line.
///
/// Blank lines, comment lines, and lines without `=` pass through verbatim.
/// A `KEY=VALUE` line is replaced when the text before the first `=` names an
/// override key. The result carries exactly one trailing newline.
pub fn merge_env_content(content: &str, overrides: &IndexMap<String, String>) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            lines.push(line.to_string());
            continue;
        }
        match line.split_once('=') {
            Some((key, _)) if overrides.contains_key(key) => {
                lines.push(format!("{}={}", key, overrides[key]));
            }
            _ => lines.push(line.to_string()),
        }
    }
    let mut merged = lines.join("\n");
    merged.push('\n');
    merged
}

/// Reads the example, overlays the overrides, writes the output file.
/// A missing example surfaces as an IO error for the caller to report.
pub fn merge_env(spec: &EnvSpec) -> Result<()> {
    let content = fs::read_to_string(&spec.example)?;
    fs::write(&spec.output, merge_env_content(&content, &spec.overrides))?;
    Ok(())
}
