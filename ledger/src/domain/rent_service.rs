//! Rent record service domain logic for the rent ledger.
use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::commands::records::{
    AddRentRecordCommand, AddRentRecordResult, RecordListResult,
};
use crate::domain::commands::rooms::RoomSummary;
use crate::domain::models::rent_record::{RecordValidationError, RentRecord, ELECTRICITY_RATE};
use crate::domain::room_service::RoomService;
use crate::storage::traits::{Connection, RoomStorage};

/// Service for recording rent payments and deriving record-based views
pub struct RentService<C: Connection> {
    room_repository: C::RoomRepository,
    room_service: RoomService<C>,
}

impl<C: Connection> RentService<C> {
    /// Create a new RentService
    pub fn new(connection: Arc<C>, room_service: RoomService<C>) -> Self {
        Self {
            room_repository: connection.create_room_repository(),
            room_service,
        }
    }

    /// Record a rent payment against a room.
    ///
    /// The electricity portion is derived from the two meter readings at a
    /// fixed rate per unit; the record is appended to the target room's
    /// history and the full collection is persisted. A `room_id` that
    /// matches nothing is a no-op: no room changes and nothing is
    /// persisted.
    pub fn add_rent_record(&self, command: AddRentRecordCommand) -> Result<AddRentRecordResult> {
        info!("Adding rent record for room {}", command.room_id);

        Self::validate_add_command(&command)?;

        let mut rooms = self.room_service.list_rooms()?;
        let Some(room) = rooms.iter_mut().find(|room| room.id == command.room_id) else {
            warn!(
                "Attempted to add a rent record to a non-existent room: {}",
                command.room_id
            );
            return Ok(AddRentRecordResult {
                record: None,
                success_message: None,
            });
        };

        let electricity_units = command.current_meter_reading - command.previous_meter_reading;
        let electricity_bill = electricity_units * ELECTRICITY_RATE;
        let total_amount = command.amount + electricity_bill;

        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
        let record = RentRecord {
            id: RentRecord::generate_id(now_millis),
            room_id: room.id,
            date: command.date,
            amount: command.amount,
            previous_meter_reading: command.previous_meter_reading,
            current_meter_reading: command.current_meter_reading,
            electricity_units,
            electricity_bill,
            total_amount,
        };

        room.records.push(record.clone());
        self.room_repository.save_rooms(&rooms)?;

        info!(
            "Added rent record {} to room {} (total {})",
            record.id, record.room_id, record.total_amount
        );

        Ok(AddRentRecordResult {
            record: Some(record),
            success_message: Some("Rent record added successfully".to_string()),
        })
    }

    /// A room's records sorted by payment date, most recent first.
    /// Empty when the room does not exist or has no records. The stored
    /// order is insertion order; this view is re-sorted on every call.
    pub fn get_records(&self, room_id: u32) -> Result<RecordListResult> {
        let room = self.room_service.get_room(room_id)?;
        let mut records = room.map(|room| room.records).unwrap_or_default();

        // Stable sort: records sharing a date keep their insertion order
        records.sort_by(|a, b| b.date.cmp(&a.date));

        debug!("Listed {} records for room {}", records.len(), room_id);
        Ok(RecordListResult { records })
    }

    /// Most recent record by payment date, `None` when the room is missing
    /// or has no records
    pub fn latest_record(&self, room_id: u32) -> Result<Option<RentRecord>> {
        let room = self.room_service.get_room(room_id)?;
        Ok(room.and_then(|room| room.latest_record().cloned()))
    }

    /// Meter reading carried forward from the most recent record, used as
    /// the default previous reading when adding the next record. Zero when
    /// the room has no records yet.
    pub fn latest_meter_reading(&self, room_id: u32) -> Result<f64> {
        Ok(self
            .latest_record(room_id)?
            .map(|record| record.current_meter_reading)
            .unwrap_or(0.0))
    }

    /// Sum of `total_amount` across a room's records
    pub fn total_collected(&self, room_id: u32) -> Result<f64> {
        let room = self.room_service.get_room(room_id)?;
        Ok(room.map(|room| room.total_collected()).unwrap_or(0.0))
    }

    /// Aggregate projection for the summary view, one entry per room in
    /// stored order
    pub fn room_summaries(&self) -> Result<Vec<RoomSummary>> {
        let rooms = self.room_service.list_rooms()?;

        Ok(rooms
            .into_iter()
            .map(|room| {
                let latest_record = room.latest_record().cloned();
                let total_collected = room.total_collected();
                RoomSummary {
                    room_id: room.id,
                    name: room.name,
                    tenant: room.tenant,
                    monthly_rent: room.monthly_rent,
                    total_collected,
                    latest_record,
                }
            })
            .collect())
    }

    /// Validate add rent record command
    fn validate_add_command(command: &AddRentRecordCommand) -> Result<(), RecordValidationError> {
        if !command.amount.is_finite()
            || !command.previous_meter_reading.is_finite()
            || !command.current_meter_reading.is_finite()
        {
            return Err(RecordValidationError::NonFiniteInput);
        }

        if command.amount < 0.0 {
            return Err(RecordValidationError::NegativeAmount);
        }

        if command.previous_meter_reading < 0.0 || command.current_meter_reading < 0.0 {
            return Err(RecordValidationError::NegativeMeterReading);
        }

        if command.current_meter_reading < command.previous_meter_reading {
            return Err(RecordValidationError::MeterReadingWentBackwards);
        }

        Ok(())
    }
}
