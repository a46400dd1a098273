//! Project name case conversion.
//! Derives the four canonical case variants (kebab, snake, pascal,
//! upper snake) that drive every placeholder substitution.

use crate::constants::{
    TOKEN_KEBAB, TOKEN_PASCAL, TOKEN_SNAKE, TOKEN_TITLE, TOKEN_UPPER_SNAKE,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Ordered mapping from placeholder token to its replacement value.
/// Passed into the substitution engine rather than inlined there, so the
/// vocabulary can grow without touching the walk logic.
pub type ReplacementTable = IndexMap<String, String>;

fn whitespace_or_underscore() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_]+").unwrap())
}

fn whitespace_or_hyphen() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s-]+").unwrap())
}

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_-]+").unwrap())
}

fn repeated_hyphens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

fn repeated_underscores() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_+").unwrap())
}

/// Converts a free-text name to kebab-case: whitespace and underscore runs
/// become single hyphens, repeated hyphens collapse, the result is trimmed
/// of leading/trailing hyphens and lowercased.
pub fn to_kebab_case(name: &str) -> String {
    let collapsed = whitespace_or_underscore().replace_all(name.trim(), "-");
    let collapsed = repeated_hyphens().replace_all(&collapsed, "-");
    collapsed.trim_matches('-').to_lowercase()
}

/// Converts a free-text name to snake_case: whitespace and hyphen runs
/// become single underscores, repeated underscores collapse, the result is
/// trimmed of leading/trailing underscores and lowercased.
pub fn to_snake_case(name: &str) -> String {
    let collapsed = whitespace_or_hyphen().replace_all(name.trim(), "_");
    let collapsed = repeated_underscores().replace_all(&collapsed, "_");
    collapsed.trim_matches('_').to_lowercase()
}

/// Converts a free-text name to PascalCase: fragments split on whitespace,
/// underscore and hyphen boundaries are capitalized and concatenated.
pub fn to_pascal_case(name: &str) -> String {
    separators()
        .split(name.trim())
        .filter(|fragment| !fragment.is_empty())
        .map(capitalize)
        .collect()
}

/// Converts a free-text name to UPPER_SNAKE_CASE.
pub fn to_upper_snake_case(name: &str) -> String {
    to_snake_case(name).to_uppercase()
}

/// Uppercases the first character and lowercases the rest of a fragment.
fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A validated project name and its derived case variants.
///
/// Constructed once per invocation; the variants are computed eagerly so
/// every later consumer sees the same strings.
#[derive(Debug, Clone)]
pub struct ProjectName {
    raw: String,
    kebab: String,
    snake: String,
    pascal: String,
    upper_snake: String,
}

impl ProjectName {
    /// Validates and converts a raw name.
    ///
    /// # Errors
    /// * `Error::EmptyProjectName` if the trimmed input is empty
    /// * `Error::InvalidProjectName` if the input contains only separator
    ///   characters and no variant can be derived from it
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyProjectName);
        }
        let kebab = to_kebab_case(trimmed);
        if kebab.is_empty() {
            return Err(Error::InvalidProjectName(trimmed.to_string()));
        }
        Ok(Self {
            raw: trimmed.to_string(),
            kebab,
            snake: to_snake_case(trimmed),
            pascal: to_pascal_case(trimmed),
            upper_snake: to_upper_snake_case(trimmed),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn upper_snake(&self) -> &str {
        &self.upper_snake
    }

    /// Builds the ordered placeholder table applied by the substitution
    /// engine: each canonical template token mapped to this name's variant
    /// (the display token maps to the raw name itself).
    pub fn replacement_table(&self) -> ReplacementTable {
        IndexMap::from([
            (TOKEN_SNAKE.to_string(), self.snake.clone()),
            (TOKEN_KEBAB.to_string(), self.kebab.clone()),
            (TOKEN_PASCAL.to_string(), self.pascal.clone()),
            (TOKEN_UPPER_SNAKE.to_string(), self.upper_snake.clone()),
            (TOKEN_TITLE.to_string(), self.raw.clone()),
        ])
    }
}
