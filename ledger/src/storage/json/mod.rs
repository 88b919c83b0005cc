//! # JSON Storage Module
//!
//! This module provides a JSON-file storage implementation for the rent
//! ledger. The entire room collection (with nested records) is serialized
//! as one document under a fixed file name — the filesystem analog of a
//! key-value slot with a single key.
//!
//! ## File Format
//!
//! `rooms.json` holds an array of room objects; record dates are stored as
//! plain `YYYY-MM-DD` strings and re-parsed into date values on load:
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Room 1",
//!     "tenant": "John Doe",
//!     "monthly_rent": 5000.0,
//!     "records": [
//!       { "id": "record-1704445200000-af3c", "room_id": 1, "date": "2024-01-05", ... }
//!     ]
//!   }
//! ]
//! ```

pub mod connection;
pub mod room_repository;

pub use connection::JsonConnection;
pub use room_repository::RoomRepository;
