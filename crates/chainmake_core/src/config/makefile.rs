//! Makefile data: the raw serde document and its validated form.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::chains::{Chain, ChainTable, Step, ToolTemplate};

use super::loader::{ConfigError, ConfigResult};

/// The makefile document as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct MakefileSpec {
    /// Base directory for every task path, relative to the makefile.
    #[serde(default = "default_base_path")]
    pub path: String,

    /// Conversion chains, in resolution order.
    #[serde(default)]
    pub chains: Vec<Vec<StepSpec>>,

    /// Tasks, in execution order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_base_path() -> String {
    ".".to_string()
}

/// One chain step as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StepSpec {
    /// Command template with two `%s` slots; absent on terminal steps.
    #[serde(default)]
    pub tool: Option<String>,

    pub extension: String,
}

/// Convert `input` files and concatenate the results into `output`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Input paths, relative to the base directory, in concatenation order.
    pub input: Vec<String>,

    /// Output path, relative to the base directory.
    pub output: String,
}

/// A validated makefile.
#[derive(Debug, Clone)]
pub struct Makefile {
    /// Directory all task paths are resolved against.
    base_dir: PathBuf,
    chains: ChainTable,
    tasks: Vec<Task>,
}

impl Makefile {
    /// Validate a parsed document.
    ///
    /// `makefile_path` should be absolute; the base directory is resolved
    /// against its parent.
    pub fn from_spec(spec: MakefileSpec, makefile_path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let makefile_path = makefile_path.into();
        let makefile_dir = makefile_path.parent().unwrap_or_else(|| Path::new("."));
        let base_dir = normalize_path(&makefile_dir.join(&spec.path));

        let chains = build_chains(spec.chains)?;
        validate_tasks(&spec.tasks)?;

        Ok(Self {
            base_dir,
            chains,
            tasks: spec.tasks,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn chains(&self) -> &ChainTable {
        &self.chains
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Resolve a task-relative path against the base directory.
    pub fn full_path(&self, file_path: &str) -> PathBuf {
        normalize_path(&self.base_dir.join(file_path))
    }
}

fn build_chains(specs: Vec<Vec<StepSpec>>) -> ConfigResult<ChainTable> {
    let mut chains = Vec::with_capacity(specs.len());

    for (chain_index, steps) in specs.into_iter().enumerate() {
        let mut built = Vec::with_capacity(steps.len());
        for (step_index, step) in steps.into_iter().enumerate() {
            if step.extension.is_empty() {
                return Err(ConfigError::EmptyExtension {
                    chain: chain_index,
                    step: step_index,
                });
            }
            let tool = step
                .tool
                .map(ToolTemplate::parse)
                .transpose()
                .map_err(|source| ConfigError::InvalidTemplate {
                    chain: chain_index,
                    step: step_index,
                    source,
                })?;
            built.push(Step {
                tool,
                extension: step.extension,
            });
        }
        chains.push(Chain::new(built));
    }

    Ok(ChainTable::new(chains)?)
}

fn validate_tasks(tasks: &[Task]) -> ConfigResult<()> {
    for (index, task) in tasks.iter().enumerate() {
        if task.input.is_empty() {
            return Err(ConfigError::invalid_task(index, "no input files"));
        }
        if task.output.is_empty() {
            return Err(ConfigError::invalid_task(index, "empty output path"));
        }
    }
    Ok(())
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
///
/// Does not touch the file system, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
