//! Parcel Desk — Library Root
//!
//! Customers, parcels, tracking events and invoices kept in one JSON
//! document over a pluggable key-value backend.
//!
//! Re-exports all modules for integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;

pub use domain::{StoreError, StoreResult};
pub use usecases::Store;
