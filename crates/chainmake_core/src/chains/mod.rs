//! Conversion chains and their resolution.
//!
//! A chain is an ordered list of steps, each pairing a file extension with the
//! tool that converts files of that extension into the next step's extension:
//!
//! ```text
//! [ ".md"  + "pandoc %s -o %s" ] -> [ ".html" + "wkhtmltopdf %s %s" ] -> [ ".pdf" ]
//! ```
//!
//! [`ChainTable::resolve`] answers "what is the next step for this file", and
//! [`ChainTable::build_plan`] repeats it until the file reaches a terminal
//! extension.
//!
//! # Example
//!
//! ```
//! use chainmake_core::chains::{Chain, ChainTable, Step};
//!
//! let table = ChainTable::new(vec![Chain::new(vec![
//!     Step::convert("a2b %s %s", ".a").unwrap(),
//!     Step::convert("b2c %s %s", ".b").unwrap(),
//!     Step::terminal(".c"),
//! ])])
//! .unwrap();
//!
//! let plan = table.build_plan("x.a");
//! assert_eq!(plan.final_path(), "x.c");
//! ```

mod plan;
mod resolver;
mod table;
mod template;

pub use plan::{replace_extension, ConversionPlan, PlanStep};
pub use resolver::Resolution;
pub use table::{Chain, ChainError, ChainTable, Step};
pub use template::{TemplateError, ToolTemplate};
