use std::path::Path;
use std::process::{Command, Stdio};

use crate::constants::INSTALL_HOOK;
use crate::error::{Error, Result};
use crate::naming::ProjectName;
use crate::parser::PortConfig;

/// Context exposed to the install hook through `REBRAND_*` environment
/// variables, so template Makefiles can consume the resolved identity
/// without re-parsing any files.
pub fn hook_env(name: &ProjectName, ports: &PortConfig) -> Vec<(String, String)> {
    vec![
        ("REBRAND_NAME".to_string(), name.raw().to_string()),
        ("REBRAND_NAME_KEBAB".to_string(), name.kebab().to_string()),
        ("REBRAND_NAME_SNAKE".to_string(), name.snake().to_string()),
        ("REBRAND_NAME_PASCAL".to_string(), name.pascal().to_string()),
        (
            "REBRAND_NAME_UPPER_SNAKE".to_string(),
            name.upper_snake().to_string(),
        ),
        ("REBRAND_BACKEND_PORT".to_string(), ports.backend.to_string()),
        (
            "REBRAND_FRONTEND_PORT".to_string(),
            ports.frontend.to_string(),
        ),
    ]
}

/// Runs the dependency-installation hook (`make setup`) synchronously in
/// `target_dir`, inheriting stdout and stderr. Stdin is closed so a
/// misbehaving recipe cannot hang a scripted run.
pub fn run_install_hook(target_dir: &Path, env: &[(String, String)]) -> Result<()> {
    let status = Command::new(INSTALL_HOOK[0])
        .args(&INSTALL_HOOK[1..])
        .current_dir(target_dir)
        .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::HookError(status.to_string()));
    }

    Ok(())
}
