//! Use Cases Layer - Desk Operations
//!
//! Orchestrates domain rules with the storage, clock and ID ports.
//! All operations are methods on `Store`, grouped by area.
//!
//! Use cases:
//! - `session`: Demo login / logout
//! - `customers`: Customer registry
//! - `parcels`: Parcel creation, quoting and tracking
//! - `billing`: Invoice generation and payment

pub mod billing;
pub mod customers;
pub mod parcels;
pub mod session;
pub mod store;

pub use store::Store;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::Store;
    use crate::adapters::persistence::MemoryStorage;
    use crate::ports::clock::FixedClock;
    use crate::ports::ids::SequentialIdGenerator;

    /// 2026-05-01 09:30:00 local.
    pub fn test_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    /// In-memory store with a fixed clock and sequential IDs.
    pub fn test_store() -> Store<MemoryStorage> {
        Store::new(MemoryStorage::new())
            .with_clock(Arc::new(FixedClock::new(test_time())))
            .with_id_generator(Arc::new(SequentialIdGenerator::new()))
    }
}
