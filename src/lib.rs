#![doc(test(attr(deny(warnings))))]

//! Licit Core offers the record model, derived-metrics engine, query and
//! aggregation logic, snapshot persistence, and CSV export behind a
//! procurement bidding tracker.

pub mod core;
pub mod domain;
pub mod errors;
pub mod metrics;
pub mod storage;
pub mod store;
pub mod utils;

pub use crate::core::services::{
    DashboardSummary, EntidadeCount, ExportService, FieldValue, QueryService, RecordService,
    SortDirection, SortState, StatusCount,
};
pub use domain::{BiddingRecord, StatusDisputa};
pub use errors::LicitError;
pub use storage::{JsonStorage, StorageBackend};
pub use store::RecordStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Licit Core tracing initialized.");
    });
}
