//! Chain table: ordered chains of (tool, extension) steps.

use thiserror::Error;

use super::template::{TemplateError, ToolTemplate};

/// Structural problems in a chain table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain {chain} has no steps")]
    EmptyChain { chain: usize },

    #[error("chain {chain} ends with '{extension}', which has a tool but nothing to convert to")]
    TerminalStepHasTool { chain: usize, extension: String },
}

/// One element of a chain.
///
/// `extension` is the suffix a file carries when it reaches this stage.
/// `tool` converts such a file into the next step's extension; the last
/// step of a chain has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub tool: Option<ToolTemplate>,
    pub extension: String,
}

impl Step {
    /// A step converted onwards by `tool`.
    pub fn convert(tool: &str, extension: impl Into<String>) -> Result<Self, TemplateError> {
        Ok(Self {
            tool: Some(ToolTemplate::parse(tool)?),
            extension: extension.into(),
        })
    }

    /// A step with no tool (end of a chain).
    pub fn terminal(extension: impl Into<String>) -> Self {
        Self {
            tool: None,
            extension: extension.into(),
        }
    }
}

/// An ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    steps: Vec<Step>,
}

impl Chain {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// All chains of a makefile, in configuration order.
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainTable {
    chains: Vec<Chain>,
}

impl ChainTable {
    /// Build a table, checking every chain is non-empty and ends without a tool.
    pub fn new(chains: Vec<Chain>) -> Result<Self, ChainError> {
        for (index, chain) in chains.iter().enumerate() {
            let last = chain
                .steps
                .last()
                .ok_or(ChainError::EmptyChain { chain: index })?;
            if last.tool.is_some() {
                return Err(ChainError::TerminalStepHasTool {
                    chain: index,
                    extension: last.extension.clone(),
                });
            }
        }
        Ok(Self { chains })
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
