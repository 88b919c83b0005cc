//! # Rent Ledger
//!
//! Core library for a small, local rent-tracking application: a landlord
//! manages a fixed set of rooms, records monthly rent payments together
//! with electricity-meter readings, and views computed totals.
//!
//! The library is layered:
//! - **Domain**: business rules for rooms, rent records, and billing
//! - **Storage**: JSON-file persistence of the complete room collection
//!
//! All operations are synchronous and run to completion before returning;
//! state is persisted wholesale after every mutation and rehydrated on
//! startup. The [`Ledger`] facade wires the domain services to storage and
//! exposes the operations a presentation layer calls, speaking the DTO
//! types of the `shared` crate.

pub mod domain;
pub mod mappers;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::domain::rent_service::RentService;
use crate::domain::room_service::RoomService;
use crate::mappers::{RecordMapper, RoomMapper};
use crate::storage::json::JsonConnection;

/// Main ledger struct that orchestrates the domain services
pub struct Ledger {
    pub room_service: RoomService<JsonConnection>,
    pub rent_service: RentService<JsonConnection>,
}

impl Ledger {
    /// Create a ledger backed by the given data directory, seeding the
    /// default rooms when no persisted state exists yet
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);
        Self::with_connection(connection)
    }

    /// Create a ledger in the default data directory
    pub fn new_default() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);
        Self::with_connection(connection)
    }

    fn with_connection(connection: Arc<JsonConnection>) -> Result<Self> {
        info!("Setting up domain services");

        let room_service = RoomService::new(connection.clone());
        room_service.ensure_seeded()?;
        let rent_service = RentService::new(connection, room_service.clone());

        Ok(Self {
            room_service,
            rent_service,
        })
    }

    /// Ordered room collection
    pub fn list_rooms(&self) -> Result<shared::RoomListResponse> {
        let rooms = self.room_service.list_rooms()?;
        Ok(shared::RoomListResponse {
            rooms: rooms.into_iter().map(RoomMapper::to_dto).collect(),
        })
    }

    /// Single room lookup; `None` when the id matches nothing
    pub fn get_room(&self, id: u32) -> Result<Option<shared::Room>> {
        Ok(self.room_service.get_room(id)?.map(RoomMapper::to_dto))
    }

    /// A room's records, most recent payment first
    pub fn get_records(&self, room_id: u32) -> Result<shared::RecordListResponse> {
        let result = self.rent_service.get_records(room_id)?;
        Ok(shared::RecordListResponse {
            records: result.records.into_iter().map(RecordMapper::to_dto).collect(),
        })
    }

    /// Record a rent payment. The response carries no record when the room
    /// does not exist (the collection is left untouched).
    pub fn add_rent_record(
        &self,
        request: shared::AddRentRecordRequest,
    ) -> Result<shared::AddRentRecordResponse> {
        let command = RecordMapper::to_add_command(request)?;
        let result = self.rent_service.add_rent_record(command)?;

        Ok(shared::AddRentRecordResponse {
            record: result.record.map(RecordMapper::to_dto),
            success_message: result.success_message,
        })
    }

    /// Update room details. The response carries no room when the id
    /// matches nothing (the collection is left untouched).
    pub fn update_room(
        &self,
        request: shared::UpdateRoomRequest,
    ) -> Result<shared::UpdateRoomResponse> {
        let command = RoomMapper::to_update_command(request);
        let result = self.room_service.update_room(command)?;

        Ok(shared::UpdateRoomResponse {
            room: result.room.map(RoomMapper::to_dto),
            success_message: result.success_message,
        })
    }

    /// Per-room aggregates for the summary view
    pub fn room_summaries(&self) -> Result<Vec<shared::RoomSummary>> {
        let summaries = self.rent_service.room_summaries()?;
        Ok(summaries.into_iter().map(RoomMapper::to_summary_dto).collect())
    }

    /// Default previous meter reading for a room's next record
    pub fn latest_meter_reading(&self, room_id: u32) -> Result<f64> {
        self.rent_service.latest_meter_reading(room_id)
    }
}
