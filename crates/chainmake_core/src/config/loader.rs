//! Makefile loading.
//!
//! The format follows the file extension: `.toml` files are TOML, anything
//! else is JSON. Both describe the same document (see [`MakefileSpec`]).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::chains::{ChainError, TemplateError};

use super::makefile::{Makefile, MakefileSpec};

/// Errors that can occur while loading a makefile.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Makefile not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read makefile: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse JSON makefile: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse TOML makefile: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid tool in chain {chain} step {step}: {source}")]
    InvalidTemplate {
        chain: usize,
        step: usize,
        #[source]
        source: TemplateError,
    },

    #[error("Empty extension in chain {chain} step {step}")]
    EmptyExtension { chain: usize, step: usize },

    #[error("Invalid chain table: {0}")]
    Chain(#[from] ChainError),

    #[error("Invalid task {task}: {message}")]
    InvalidTask { task: usize, message: String },
}

impl ConfigError {
    /// Create an invalid task error.
    pub fn invalid_task(task: usize, message: impl Into<String>) -> Self {
        Self::InvalidTask {
            task,
            message: message.into(),
        }
    }
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// On-disk makefile format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakefileFormat {
    Json,
    Toml,
}

impl MakefileFormat {
    /// Pick the format from a file name.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => MakefileFormat::Toml,
            _ => MakefileFormat::Json,
        }
    }

    /// Parse makefile content in this format.
    pub fn parse(&self, content: &str) -> ConfigResult<MakefileSpec> {
        let spec = match self {
            MakefileFormat::Json => serde_json::from_str(content)?,
            MakefileFormat::Toml => toml::from_str(content)?,
        };
        Ok(spec)
    }
}

/// Loads and validates a makefile.
pub struct MakefileLoader {
    /// Path to the makefile.
    makefile_path: PathBuf,
}

impl MakefileLoader {
    /// Create a loader for `makefile_path`.
    ///
    /// Does not read anything; call `load()` after.
    pub fn new(makefile_path: impl Into<PathBuf>) -> Self {
        Self {
            makefile_path: makefile_path.into(),
        }
    }

    /// Format the makefile will be parsed as.
    pub fn format(&self) -> MakefileFormat {
        MakefileFormat::from_path(&self.makefile_path)
    }

    /// Read, parse and validate the makefile.
    pub fn load(&self) -> ConfigResult<Makefile> {
        if !self.makefile_path.exists() {
            return Err(ConfigError::NotFound(self.makefile_path.clone()));
        }

        let content = fs::read_to_string(&self.makefile_path)?;
        let spec = self.format().parse(&content)?;
        let absolute = std::path::absolute(&self.makefile_path)?;

        tracing::debug!("makefile_path {}", absolute.display());

        let makefile = Makefile::from_spec(spec, absolute)?;
        tracing::debug!("base_dir {}", makefile.base_dir().display());
        tracing::debug!(
            "Loaded {} chain(s) and {} task(s)",
            makefile.chains().len(),
            makefile.tasks().len()
        );

        Ok(makefile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const JSON: &str = r#"{
        "path": "src",
        "chains": [[
            {"tool": "a2b %s %s", "extension": ".a"},
            {"extension": ".b"}
        ]],
        "tasks": [{"input": ["x.a"], "output": "out.b"}]
    }"#;

    const TOML: &str = r#"
path = "src"
chains = [[
    { tool = "a2b %s %s", extension = ".a" },
    { extension = ".b" },
]]

[[tasks]]
input = ["x.a"]
output = "out.b"
"#;

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(
            MakefileFormat::from_path(Path::new("build/makefile.toml")),
            MakefileFormat::Toml
        );
        assert_eq!(
            MakefileFormat::from_path(Path::new("makefile.json")),
            MakefileFormat::Json
        );
        assert_eq!(
            MakefileFormat::from_path(Path::new("Makefile")),
            MakefileFormat::Json
        );
    }

    #[test]
    fn loads_json_makefile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("makefile.json");
        fs::write(&path, JSON).unwrap();

        let makefile = MakefileLoader::new(&path).load().unwrap();

        assert_eq!(makefile.base_dir(), dir.path().join("src"));
        assert_eq!(makefile.tasks().len(), 1);
        assert_eq!(makefile.full_path("x.a"), dir.path().join("src").join("x.a"));
    }

    #[test]
    fn toml_and_json_agree() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("makefile.json");
        let toml_path = dir.path().join("makefile.toml");
        fs::write(&json_path, JSON).unwrap();
        fs::write(&toml_path, TOML).unwrap();

        let from_json = MakefileLoader::new(&json_path).load().unwrap();
        let from_toml = MakefileLoader::new(&toml_path).load().unwrap();

        assert_eq!(from_json.chains(), from_toml.chains());
        assert_eq!(from_json.tasks(), from_toml.tasks());
        assert_eq!(from_json.base_dir(), from_toml.base_dir());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = MakefileLoader::new(dir.path().join("nope.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("makefile.json");
        fs::write(&path, "{\"chains\": [").unwrap();

        let err = MakefileLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }
}
