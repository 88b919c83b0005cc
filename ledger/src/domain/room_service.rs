use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::commands::rooms::{UpdateRoomCommand, UpdateRoomResult};
use crate::domain::models::room::Room;
use crate::storage::traits::{Connection, RoomStorage};

/// Initial room data, seeded on first run when no persisted state exists
fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            name: "Room 1".to_string(),
            tenant: "John Doe".to_string(),
            monthly_rent: 5000.0,
            records: Vec::new(),
        },
        Room {
            id: 2,
            name: "Room 2".to_string(),
            tenant: "Jane Smith".to_string(),
            monthly_rent: 4500.0,
            records: Vec::new(),
        },
        Room {
            id: 3,
            name: "Room 3".to_string(),
            tenant: "Mike Johnson".to_string(),
            monthly_rent: 5500.0,
            records: Vec::new(),
        },
    ]
}

/// Service for managing the room collection
#[derive(Clone)]
pub struct RoomService<C: Connection> {
    room_repository: C::RoomRepository,
}

impl<C: Connection> RoomService<C> {
    /// Create a new RoomService
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            room_repository: connection.create_room_repository(),
        }
    }

    /// Seed and persist the fixed default rooms when no state exists yet
    pub fn ensure_seeded(&self) -> Result<()> {
        if self.room_repository.load_rooms()?.is_none() {
            let rooms = seed_rooms();
            self.room_repository.save_rooms(&rooms)?;
            info!("Seeded {} default rooms", rooms.len());
        }
        Ok(())
    }

    /// Current room collection in stored order
    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        let rooms = self
            .room_repository
            .load_rooms()?
            .unwrap_or_else(seed_rooms);

        debug!("Listed {} rooms", rooms.len());
        Ok(rooms)
    }

    /// Get a room by ID. Pure lookup, no side effects.
    pub fn get_room(&self, id: u32) -> Result<Option<Room>> {
        let room = self.list_rooms()?.into_iter().find(|room| room.id == id);

        if room.is_none() {
            warn!("Room not found: {}", id);
        }

        Ok(room)
    }

    /// Merge the supplied fields into the matching room, leaving
    /// unspecified fields and the record list untouched. A `room_id` that
    /// matches nothing is a no-op: the collection is unchanged and nothing
    /// is persisted.
    pub fn update_room(&self, command: UpdateRoomCommand) -> Result<UpdateRoomResult> {
        info!("Updating room: {}", command.room_id);

        self.validate_update_command(&command)?;

        let mut rooms = self.list_rooms()?;
        let Some(room) = rooms.iter_mut().find(|room| room.id == command.room_id) else {
            warn!("Attempted to update a non-existent room: {}", command.room_id);
            return Ok(UpdateRoomResult {
                room: None,
                success_message: None,
            });
        };

        if let Some(name) = command.name {
            room.name = name.trim().to_string();
        }
        if let Some(tenant) = command.tenant {
            room.tenant = tenant.trim().to_string();
        }
        if let Some(monthly_rent) = command.monthly_rent {
            room.monthly_rent = monthly_rent;
        }

        let updated = room.clone();
        self.room_repository.save_rooms(&rooms)?;

        info!("Updated room: {} ({})", updated.name, updated.id);

        Ok(UpdateRoomResult {
            room: Some(updated),
            success_message: Some("Room details updated".to_string()),
        })
    }

    /// Validate update room command
    fn validate_update_command(&self, command: &UpdateRoomCommand) -> Result<()> {
        if let Some(ref name) = command.name {
            if name.trim().is_empty() {
                return Err(anyhow::anyhow!("Room name cannot be empty"));
            }
        }

        if let Some(ref tenant) = command.tenant {
            if tenant.trim().is_empty() {
                return Err(anyhow::anyhow!("Tenant name cannot be empty"));
            }
        }

        if let Some(monthly_rent) = command.monthly_rent {
            if !monthly_rent.is_finite() || monthly_rent < 0.0 {
                return Err(anyhow::anyhow!("Monthly rent must be a non-negative amount"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::JsonConnection;
    use tempfile::TempDir;

    fn setup_test_service() -> (RoomService<JsonConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let service = RoomService::new(connection);
        service.ensure_seeded().expect("Failed to seed rooms");
        (service, temp_dir)
    }

    #[test]
    fn test_seed_creates_three_empty_rooms() {
        let (service, _temp_dir) = setup_test_service();

        let rooms = service.list_rooms().expect("Failed to list rooms");
        assert_eq!(rooms.len(), 3);
        assert_eq!(
            rooms.iter().map(|room| room.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(rooms.iter().all(|room| room.records.is_empty()));
        assert_eq!(rooms[0].tenant, "John Doe");
        assert_eq!(rooms[1].monthly_rent, 4500.0);
    }

    #[test]
    fn test_seed_is_persisted_once() {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());

        let service = RoomService::new(connection.clone());
        service.ensure_seeded().unwrap();
        assert!(temp_dir.path().join("rooms.json").exists());

        // A second service over the same directory sees the same state,
        // not a fresh seed
        service
            .update_room(UpdateRoomCommand {
                room_id: 1,
                name: None,
                tenant: Some("Replacement Tenant".to_string()),
                monthly_rent: None,
            })
            .unwrap();

        let reloaded = RoomService::new(connection);
        reloaded.ensure_seeded().unwrap();
        let rooms = reloaded.list_rooms().unwrap();
        assert_eq!(rooms[0].tenant, "Replacement Tenant");
    }

    #[test]
    fn test_get_room_by_id() {
        let (service, _temp_dir) = setup_test_service();

        let room = service.get_room(2).expect("Failed to get room");
        assert_eq!(room.unwrap().name, "Room 2");
    }

    #[test]
    fn test_get_missing_room_returns_none() {
        let (service, _temp_dir) = setup_test_service();

        assert!(service.get_room(42).expect("Failed to get room").is_none());
    }

    #[test]
    fn test_lookups_do_not_mutate_state() {
        let (service, _temp_dir) = setup_test_service();

        let first = service.list_rooms().unwrap();
        let _ = service.get_room(1).unwrap();
        let _ = service.get_room(42).unwrap();
        let second = service.list_rooms().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_partial_update_touches_only_supplied_fields() {
        let (service, _temp_dir) = setup_test_service();

        let result = service
            .update_room(UpdateRoomCommand {
                room_id: 3,
                name: None,
                tenant: None,
                monthly_rent: Some(6000.0),
            })
            .expect("Failed to update room");

        let updated = result.room.expect("Expected an updated room");
        assert_eq!(updated.monthly_rent, 6000.0);
        assert_eq!(updated.name, "Room 3");
        assert_eq!(updated.tenant, "Mike Johnson");
        assert!(updated.records.is_empty());
        assert_eq!(result.success_message.as_deref(), Some("Room details updated"));

        // The change is visible through a fresh lookup
        let room = service.get_room(3).unwrap().unwrap();
        assert_eq!(room.monthly_rent, 6000.0);
    }

    #[test]
    fn test_update_missing_room_is_a_no_op() {
        let (service, _temp_dir) = setup_test_service();

        let before = service.list_rooms().unwrap();
        let result = service
            .update_room(UpdateRoomCommand {
                room_id: 999,
                name: Some("Phantom".to_string()),
                tenant: None,
                monthly_rent: None,
            })
            .expect("Update should not fail");

        assert!(result.room.is_none());
        assert!(result.success_message.is_none());
        assert_eq!(service.list_rooms().unwrap(), before);
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let (service, _temp_dir) = setup_test_service();

        let result = service.update_room(UpdateRoomCommand {
            room_id: 1,
            name: Some("   ".to_string()),
            tenant: None,
            monthly_rent: None,
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_update_rejects_negative_rent() {
        let (service, _temp_dir) = setup_test_service();

        let result = service.update_room(UpdateRoomCommand {
            room_id: 1,
            name: None,
            tenant: None,
            monthly_rent: Some(-100.0),
        });

        assert!(result.is_err());
    }
}
