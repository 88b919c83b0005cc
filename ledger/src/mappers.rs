// ledger/src/mappers.rs

//! Mappers between the public DTOs in the `shared` crate and the internal
//! domain models. Dates cross the DTO boundary as `YYYY-MM-DD` strings and
//! are parsed into proper date values here.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::commands::records::AddRentRecordCommand;
use crate::domain::commands::rooms::{RoomSummary as DomainRoomSummary, UpdateRoomCommand};
use crate::domain::models::rent_record::RentRecord as DomainRentRecord;
use crate::domain::models::room::Room as DomainRoom;
use shared::{
    AddRentRecordRequest, RentRecord as SharedRentRecord, Room as SharedRoom, RoomSummary,
    UpdateRoomRequest,
};

/// Mapper to convert between shared Room DTOs and domain Room models.
pub struct RoomMapper;

impl RoomMapper {
    /// Converts a domain Room model to a shared Room DTO.
    pub fn to_dto(domain: DomainRoom) -> SharedRoom {
        SharedRoom {
            id: domain.id,
            name: domain.name,
            tenant: domain.tenant,
            monthly_rent: domain.monthly_rent,
            records: domain.records.into_iter().map(RecordMapper::to_dto).collect(),
        }
    }

    /// Converts an update request DTO to the domain command.
    pub fn to_update_command(dto: UpdateRoomRequest) -> UpdateRoomCommand {
        UpdateRoomCommand {
            room_id: dto.room_id,
            name: dto.name,
            tenant: dto.tenant,
            monthly_rent: dto.monthly_rent,
        }
    }

    /// Converts a domain room summary to its DTO.
    pub fn to_summary_dto(domain: DomainRoomSummary) -> RoomSummary {
        RoomSummary {
            room_id: domain.room_id,
            name: domain.name,
            tenant: domain.tenant,
            monthly_rent: domain.monthly_rent,
            total_collected: domain.total_collected,
            latest_record: domain.latest_record.map(RecordMapper::to_dto),
        }
    }
}

/// Mapper to convert between shared RentRecord DTOs and domain models.
pub struct RecordMapper;

impl RecordMapper {
    /// Converts a domain RentRecord model to a shared RentRecord DTO.
    pub fn to_dto(domain: DomainRentRecord) -> SharedRentRecord {
        SharedRentRecord {
            id: domain.id,
            room_id: domain.room_id,
            date: domain.date.format("%Y-%m-%d").to_string(),
            amount: domain.amount,
            previous_meter_reading: domain.previous_meter_reading,
            current_meter_reading: domain.current_meter_reading,
            electricity_units: domain.electricity_units,
            electricity_bill: domain.electricity_bill,
            total_amount: domain.total_amount,
        }
    }

    /// Converts an add-record request DTO to the domain command.
    pub fn to_add_command(dto: AddRentRecordRequest) -> Result<AddRentRecordCommand> {
        let date = NaiveDate::parse_from_str(&dto.date, "%Y-%m-%d")
            .context("Failed to parse payment date from shared DTO")?;

        Ok(AddRentRecordCommand {
            room_id: dto.room_id,
            date,
            amount: dto.amount,
            previous_meter_reading: dto.previous_meter_reading,
            current_meter_reading: dto.current_meter_reading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dto_date_formatting() {
        let domain = DomainRentRecord {
            id: "record-1704445200000-af3c".to_string(),
            room_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            amount: 5000.0,
            previous_meter_reading: 100.0,
            current_meter_reading: 150.0,
            electricity_units: 50.0,
            electricity_bill: 450.0,
            total_amount: 5450.0,
        };

        let dto = RecordMapper::to_dto(domain);
        assert_eq!(dto.date, "2024-01-05");
        assert_eq!(dto.total_amount, 5450.0);
    }

    #[test]
    fn test_add_command_parses_the_date() {
        let request = AddRentRecordRequest {
            room_id: 1,
            date: "2024-01-05".to_string(),
            amount: 5000.0,
            previous_meter_reading: 100.0,
            current_meter_reading: 150.0,
        };

        let command = RecordMapper::to_add_command(request).unwrap();
        assert_eq!(command.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_add_command_rejects_bad_dates() {
        let request = AddRentRecordRequest {
            room_id: 1,
            date: "05/01/2024".to_string(),
            amount: 5000.0,
            previous_meter_reading: 100.0,
            current_meter_reading: 150.0,
        };

        assert!(RecordMapper::to_add_command(request).is_err());
    }
}
