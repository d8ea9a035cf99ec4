pub mod diff;

pub use diff::{
    ColumnComparison, ColumnOutcome, TableComparison, TablePresence, compare, compare_text,
    diff_tables,
};
