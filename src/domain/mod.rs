//! Pure domain models for the bidding tracker. No I/O, no storage.

pub mod record;
pub mod status;

pub use record::{BiddingRecord, DEFAULT_META_DIAS, WIRE_FIELDS};
pub use status::StatusDisputa;
