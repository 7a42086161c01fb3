//! ID Port - Identifier generation for customers, parcels and invoices.
//!
//! Identifiers are `PREFIX-SUFFIX`. The suffix source is injectable so
//! tests can use predictable IDs.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Prefix for customer IDs.
pub const CUSTOMER_PREFIX: &str = "C";

/// Prefix for parcel tracking numbers.
pub const PARCEL_PREFIX: &str = "TRK";

/// Prefix for invoice IDs.
pub const INVOICE_PREFIX: &str = "INV";

/// Produces fresh identifiers.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self, prefix: &str) -> String;
}

/// Random v4 UUID suffix, uppercase hex without dashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let suffix = Uuid::new_v4().simple().to_string().to_uppercase();
        format!("{prefix}-{suffix}")
    }
}

/// Monotonic counter suffix, zero padded to eight digits.
///
/// Counts are per generator instance, not per prefix.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{n:08}")
    }
}
