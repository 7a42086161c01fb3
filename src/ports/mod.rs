//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) the store requires from the outside
//! world. Adapters implement these traits.
//!
//! Port categories:
//! - `KeyValueStorage`: Persistence of the document and session
//! - `Clock`: Local wall-clock time for timestamps
//! - `IdGenerator`: Fresh customer / parcel / invoice identifiers

pub mod clock;
pub mod ids;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use storage::KeyValueStorage;
