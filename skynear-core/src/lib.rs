//! skynear-core: Pure geometry + lookup library for skynear.
//!
//! No async, no network — just algorithms and small file-backed stores.
//! This crate is the shared core used by `skynear-server`.

pub mod flights;
pub mod geo;
pub mod resolve;
pub mod select;
pub mod types;
pub mod unseen;

// Re-export commonly used items at crate root
pub use flights::{FlightRecord, FlightTable};
pub use geo::{haversine_km, GeoPoint};
pub use resolve::{resolve, ResolvedFlight};
pub use select::nearest;
pub use types::*;
pub use unseen::{FileUnseenLog, MemoryUnseenLog, UnseenLog};
