pub mod actions;
pub mod columns;
pub mod errors;
pub mod selection;
pub mod state;

// re-exports
pub use actions::{ConsequenceSummary, JsonReport, ReportGenerator, Summary, SummaryGenerator};
pub use columns::{COLUMNS, Column, PLACEHOLDER};
pub use errors::DashboardError;
pub use selection::Selection;
pub use state::{Dashboard, DashboardEvent, PageState};
