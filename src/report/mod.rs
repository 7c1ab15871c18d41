//! Reporting engine: filtered summaries and tabular export.
//!
//! Both report views share the department/employee filters but apply
//! different date rules on purpose: the summary answers "approved totals
//! fully within the window" (containment, approved records only) while the
//! export answers "all activity overlapping the window" (overlap, every
//! status).

mod export;
mod filter;
mod summary;

pub use export::{export_csv, export_rows, ExportRow};
pub use filter::{FilterEcho, ReportFilter};
pub use summary::{summary, LeaveTotal, SummaryReport};
