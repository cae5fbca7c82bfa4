//! Resolution of a file's next conversion step.

use super::table::{ChainTable, Step};
use super::template::ToolTemplate;

/// What to do with a file, given its current extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Run `tool` to turn the `ext_in` file into an `ext_out` file.
    Convert {
        tool: &'a ToolTemplate,
        ext_in: &'a str,
        ext_out: &'a str,
    },
    /// Nothing left to do. `ext_in` is the matched step's extension, or
    /// `None` when no step in any chain matched.
    Terminal { ext_in: Option<&'a str> },
}

impl Resolution<'_> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Resolution::Terminal { .. })
    }
}

impl ChainTable {
    /// Find how to convert `file_path`.
    ///
    /// Chains are scanned in table order, and each chain's steps from last to
    /// first. The first step whose extension ends `file_path` wins, so a file
    /// matching an inner step moves toward the following step, while a file
    /// matching the last step of a chain is terminal.
    pub fn resolve(&self, file_path: &str) -> Resolution<'_> {
        for (chain_index, chain) in self.chains().iter().enumerate() {
            let mut next: Option<&Step> = None;

            for step in chain.steps().iter().rev() {
                if file_path.ends_with(step.extension.as_str()) {
                    tracing::trace!(
                        "{} matched '{}' in chain {}",
                        file_path,
                        step.extension,
                        chain_index
                    );
                    return match (step.tool.as_ref(), next) {
                        (Some(tool), Some(next)) => Resolution::Convert {
                            tool,
                            ext_in: &step.extension,
                            ext_out: &next.extension,
                        },
                        _ => Resolution::Terminal {
                            ext_in: Some(&step.extension),
                        },
                    };
                }
                next = Some(step);
            }
        }

        Resolution::Terminal { ext_in: None }
    }
}
