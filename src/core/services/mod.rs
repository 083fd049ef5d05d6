pub mod export_service;
pub mod query_service;
pub mod record_service;

pub use export_service::ExportService;
pub use query_service::{
    DashboardSummary, EntidadeCount, QueryService, SortDirection, SortState, StatusCount,
};
pub use record_service::{FieldValue, RecordService};
