//! Common constants used throughout the rebrand application.

/// Directory names that are never copied and never rewritten.
pub const EXCLUDE_DIRS: [&str; 8] = [
    ".git",
    "node_modules",
    ".venv",
    "__pycache__",
    "dist",
    "build",
    "playwright-report",
    "test-results",
];

/// File names that are never copied and never rewritten (the tool's own
/// entry points inside the template).
pub const EXCLUDE_FILES: [&str; 2] = ["setup.py", "create-project.sh"];

/// File name suffixes eligible for placeholder substitution. Matched with
/// `ends_with` so multi-part suffixes like `.env.example` qualify.
pub const TEXT_EXTENSIONS: [&str; 15] = [
    ".py",
    ".json",
    ".md",
    ".txt",
    ".ts",
    ".tsx",
    ".js",
    ".jsx",
    ".yaml",
    ".yml",
    ".toml",
    ".cfg",
    ".ini",
    ".sh",
    ".env.example",
];

/// The five canonical placeholder tokens baked into the template, in the
/// order they are applied.
pub const TOKEN_SNAKE: &str = "myproject";
pub const TOKEN_KEBAB: &str = "my-project";
pub const TOKEN_PASCAL: &str = "MyProject";
pub const TOKEN_UPPER_SNAKE: &str = "MY_PROJECT";
pub const TOKEN_TITLE: &str = "My Project";

/// Documented port defaults applied when input is omitted.
pub const DEFAULT_BACKEND_PORT: u16 = 8000;
pub const DEFAULT_FRONTEND_PORT: u16 = 5173;

/// Lowest non-privileged port accepted for either service.
pub const PORT_MIN: u16 = 1024;

/// The template's backend project directory, renamed to the snake variant.
pub const BACKEND_DIR: &str = "backend";
pub const LEGACY_PROJECT_DIR: &str = "myproject";

/// Subdirectories holding an `.env.example` to merge into an `.env`.
pub const FRONTEND_DIR: &str = "frontend";
pub const E2E_DIR: &str = "e2e-tests";
pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";

/// Dependency-installation hook run in the target root after rebranding.
pub const INSTALL_HOOK: [&str; 2] = ["make", "setup"];
