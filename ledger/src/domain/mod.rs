//! # Domain Module
//!
//! Contains all business logic for the rent ledger.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how rooms, rent payments, and electricity billing are
//! modeled and managed. It operates independently of any specific UI
//! framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **room_service**: Room collection lifecycle, seeding, and updates
//! - **rent_service**: Rent record creation, billing derivation, and
//!   record-based views
//! - **commands**: Internal command and result types used by the services
//! - **models**: Domain entities (Room, RentRecord)
//!
//! ## Business Rules
//!
//! - Rooms are seeded once and never created or deleted afterwards
//! - Rent records are append-only; they are never mutated or removed
//! - The electricity charge is the difference between two cumulative meter
//!   readings priced at a fixed rate per unit
//! - Every mutation persists the complete room collection before returning

pub mod commands;
pub mod models;
pub mod rent_service;
pub mod room_service;

pub use rent_service::*;
pub use room_service::*;
