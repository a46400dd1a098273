//! rebrand is a bootstrap tool for MyProject-style template checkouts.
//! It copies the template tree, rewrites the placeholder name in all of its
//! casing variants, wires up ports and env files, renames the backend
//! package directory, and runs the template's install hook.

/// Command-line interface module for the rebrand application
pub mod cli;

/// Exclusion policy, placeholder tokens, and documented defaults
pub mod constants;

/// Template tree copy with exclusions and preserved modification times
pub mod copier;

/// Env file bootstrapping from `.env.example` templates
pub mod envfile;

/// Error types and handling for the rebrand application
pub mod error;

/// Shared path exclusion filter for the copy and substitution walks
pub mod filter;

/// Dependency-installation hook execution in the target root
pub mod hooks;

/// Logging setup
pub mod logger;

/// Project name case variants and the placeholder replacement table
pub mod naming;

/// Input resolution from flags, preloaded answers, and prompts
pub mod parser;

/// User input and interaction handling
pub mod prompt;

/// Rename of the legacy backend package directory
pub mod rename;

/// Orchestration of the copy + rebrand + install flow
pub mod runner;

/// Placeholder substitution across the target tree
pub mod substitute;
