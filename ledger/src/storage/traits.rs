//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::room::Room;

/// Trait defining the interface for room-collection storage operations
///
/// The collection is small and written wholesale: after every mutation the
/// complete current state is serialized and replaces the previous state.
/// There is exactly one in-process writer, so last-writer-wins is
/// sufficient and no locking or conflict resolution exists.
pub trait RoomStorage: Send + Sync {
    /// Load the persisted room collection.
    /// Returns `None` when no state has been persisted yet (first run).
    fn load_rooms(&self) -> Result<Option<Vec<Room>>>;

    /// Persist the complete room collection, replacing any previous state.
    fn save_rooms(&self, rooms: &[Room]) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type (JSON file,
/// database, etc.) and provides factory methods for creating repositories.
/// This allows the domain layer to work with any storage backend without
/// knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of RoomStorage this connection creates
    type RoomRepository: RoomStorage + Clone;

    /// Create a new room repository for this connection
    fn create_room_repository(&self) -> Self::RoomRepository;
}
