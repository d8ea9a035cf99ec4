//! Comparison report envelope, its JSON document form and downstream views.

pub mod assemble;
pub mod document;
pub mod facts;
pub mod html;
pub mod model;

pub use assemble::{assemble, assemble_at, tool_version};
pub use document::{
    EXPECTATION_TYPE, ExpectationKwargs, ExpectationMeta, ExpectationResult, ReportDocument,
};
pub use facts::{SchemaFacts, TableDifference};
pub use html::render_html;
pub use model::{ComparisonReport, ReportMeta};
