use serde::Serialize;
use uuid::Uuid;

use crate::models::trip::TripStatus;

/// A status change delivered to a trip participant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Notification {
    pub trip_id: Uuid,
    pub status: TripStatus,
}

/// Identity and history shared by riders and drivers.
#[derive(Debug, Clone)]
pub struct User {
    id: String,
    name: String,
    contact: String,
    trip_history: Vec<Uuid>,
    notifications: Vec<Notification>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            trip_history: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Ids of completed trips, oldest first.
    pub fn trip_history(&self) -> &[Uuid] {
        &self.trip_history
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub(crate) fn add_trip_to_history(&mut self, trip_id: Uuid) {
        self.trip_history.push(trip_id);
    }

    pub(crate) fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
