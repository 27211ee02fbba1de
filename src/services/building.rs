use std::sync::Arc;

use crate::api::Notifier;
use crate::error::{ClientError, ClientResult};
use crate::models::{Dormitory, DormitoryRequest, Room, RoomRequest, University};
use crate::repositories::{DormitoryRepository, RoomRepository, UniversityRepository};

/// Writes to universities, dormitories and rooms, with the checks that can be made
/// against data already loaded. A failed check sends nothing to the server.
#[derive(Clone)]
pub struct BuildingService {
    universities: UniversityRepository,
    dormitories: DormitoryRepository,
    rooms: RoomRepository,
    notifier: Arc<dyn Notifier>,
}

impl BuildingService {
    pub fn new(
        universities: UniversityRepository,
        dormitories: DormitoryRepository,
        rooms: RoomRepository,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            universities,
            dormitories,
            rooms,
            notifier,
        }
    }

    fn reject(&self, summary: &str, detail: &str) -> ClientError {
        tracing::warn!(summary, detail, "Rejected before sending");
        self.notifier.warn(summary, Some(detail));
        ClientError::Validation(detail.to_string())
    }

    /// `known` is the room list the caller is currently showing.
    pub async fn add_room(&self, req: &RoomRequest, known: &[Room]) -> ClientResult<()> {
        let duplicate = known
            .iter()
            .any(|r| r.dormitory_id == req.dormitory_id && r.number == req.number);
        if duplicate {
            return Err(self.reject(
                "Adding room failed",
                "Duplicate of room number in the same dormitory",
            ));
        }
        self.rooms.add(req).await
    }

    pub async fn delete_room(&self, room: &Room) -> ClientResult<()> {
        if room.is_occupied() {
            return Err(self.reject("Delete failed", "This room has residents"));
        }
        self.rooms.delete(room.id).await
    }

    /// An occupied dormitory keeps its address and every university it is linked to.
    /// Linking further universities is always allowed.
    pub async fn update_dormitory(
        &self,
        current: &Dormitory,
        req: &DormitoryRequest,
    ) -> ClientResult<()> {
        let address_changed = req.address != current.address;
        let university_removed = current
            .university_ids
            .iter()
            .any(|id| !req.university_ids.contains(id));
        if current.resident_number > 0 && (address_changed || university_removed) {
            return Err(self.reject(
                "Update failed",
                "You cannot remove university or change address if dormitory still has residents",
            ));
        }
        self.dormitories.update(current.id, req).await
    }

    pub async fn delete_dormitory(&self, dormitory: &Dormitory) -> ClientResult<()> {
        if dormitory.resident_number > 0 {
            return Err(self.reject("Delete failed", "This dormitory has residents"));
        }
        self.dormitories.delete(dormitory.id).await
    }

    pub async fn delete_university(&self, university: &University) -> ClientResult<()> {
        if !university.dormitory_ids.is_empty() {
            return Err(self.reject("Delete failed", "This university connects to dormitories"));
        }
        self.universities.delete(university.id).await
    }
}
