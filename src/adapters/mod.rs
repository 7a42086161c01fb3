//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure. Clock and ID adapters are small enough to live next
//! to their ports.
//!
//! Adapter categories:
//! - `persistence`: File and in-memory key-value storage

pub mod persistence;
