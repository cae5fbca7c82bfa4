//! Conversion plans: the full list of steps for one input file.

use super::resolver::Resolution;
use super::table::ChainTable;
use super::template::ToolTemplate;

/// A single conversion: run `tool` to turn `path_in` into `path_out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub path_in: String,
    pub path_out: String,
    pub tool: ToolTemplate,
}

/// Ordered conversions taking a file to its terminal extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    source: String,
    steps: Vec<PlanStep>,
}

impl ConversionPlan {
    /// The path the plan starts from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Path of the file the plan ends with; the source itself when empty.
    pub fn final_path(&self) -> &str {
        self.steps
            .last()
            .map(|step| step.path_out.as_str())
            .unwrap_or(&self.source)
    }

    /// Every file the plan produces, in production order.
    pub fn intermediates(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.path_out.as_str())
    }
}

/// Swap the trailing `current_ext` of `file_path` for `future_ext`.
///
/// `current_ext` must be a suffix of `file_path`.
pub fn replace_extension(file_path: &str, current_ext: &str, future_ext: &str) -> String {
    let stem = file_path.strip_suffix(current_ext).unwrap_or(file_path);
    format!("{}{}", stem, future_ext)
}

impl ChainTable {
    /// Resolve `path_in` repeatedly until no tool applies.
    ///
    /// Always terminates: each conversion lands on a later step of the same
    /// chain or on a chain earlier in the table, and the last step of every
    /// chain has no tool.
    pub fn build_plan(&self, path_in: &str) -> ConversionPlan {
        let mut steps = Vec::new();
        let mut current = path_in.to_string();

        while let Resolution::Convert {
            tool,
            ext_in,
            ext_out,
        } = self.resolve(&current)
        {
            let path_out = replace_extension(&current, ext_in, ext_out);
            steps.push(PlanStep {
                path_in: std::mem::replace(&mut current, path_out.clone()),
                path_out,
                tool: tool.clone(),
            });
        }

        ConversionPlan {
            source: path_in.to_string(),
            steps,
        }
    }
}
