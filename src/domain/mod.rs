//! Domain layer - Desk entities and business rules.
//!
//! Pure types and functions: the persisted document, the tracking
//! vocabulary, the shipping tariff and the error taxonomy.
//! No I/O here (hexagonal architecture inner ring).

pub mod error;
pub mod model;
pub mod pricing;
pub mod tracking;

// Re-export core types for convenience
pub use error::{StoreError, StoreResult};
pub use model::{
    Customer, CustomerId, Document, Invoice, InvoiceId, InvoiceStatus, Parcel, Role, Session,
    TrackingEvent, TrackingNumber,
};
pub use pricing::{PricingRules, Quote};
pub use tracking::TrackingEventType;
