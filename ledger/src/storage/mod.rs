//! # Storage Module
//!
//! Handles all data persistence for the rent ledger.
//!
//! This module abstracts away the specific storage implementation details
//! and provides a consistent interface for persisting and retrieving the
//! room collection. The implementation can be swapped out (flat files,
//! database, etc.) without affecting the domain logic.
//!
//! ## Current Implementation
//!
//! A single JSON document on the local filesystem holding the entire room
//! collection, rewritten atomically after every mutation.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{Connection, RoomStorage};
