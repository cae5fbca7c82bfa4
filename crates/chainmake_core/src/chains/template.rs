//! Typed tool command templates.
//!
//! A template is a shell command with exactly two `%s` slots: the absolute
//! input path first, the absolute output path second. `%%` is a literal `%`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Errors found while parsing a tool template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("tool template '{template}' has {found} '%s' placeholder(s), expected 2")]
    PlaceholderCount { template: String, found: usize },

    #[error("tool template '{template}' uses unsupported directive '%{directive}'")]
    UnsupportedDirective { template: String, directive: char },

    #[error("tool template '{template}' ends with a lone '%'")]
    TrailingPercent { template: String },
}

/// A command template with an input slot and an output slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolTemplate {
    raw: String,
    head: String,
    middle: String,
    tail: String,
}

impl ToolTemplate {
    /// Parse a template, rejecting anything but exactly two `%s` slots.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TemplateError> {
        let raw = raw.into();
        let mut pieces = Vec::with_capacity(3);
        let mut current = String::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                current.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => current.push('%'),
                Some('s') => pieces.push(std::mem::take(&mut current)),
                Some(directive) => {
                    return Err(TemplateError::UnsupportedDirective {
                        template: raw.clone(),
                        directive,
                    })
                }
                None => return Err(TemplateError::TrailingPercent { template: raw.clone() }),
            }
        }
        pieces.push(current);

        if pieces.len() != 3 {
            return Err(TemplateError::PlaceholderCount {
                found: pieces.len() - 1,
                template: raw,
            });
        }

        let mut pieces = pieces.into_iter();
        let head = pieces.next().unwrap_or_default();
        let middle = pieces.next().unwrap_or_default();
        let tail = pieces.next().unwrap_or_default();

        Ok(Self {
            raw,
            head,
            middle,
            tail,
        })
    }

    /// The template text as written in the makefile.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute the input and output paths.
    ///
    /// Paths are inserted verbatim; quoting is up to the template author.
    pub fn render(&self, input: &Path, output: &Path) -> String {
        format!(
            "{}{}{}{}{}",
            self.head,
            input.display(),
            self.middle,
            output.display(),
            self.tail
        )
    }
}

impl fmt::Display for ToolTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ToolTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
