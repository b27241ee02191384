use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::Location;
use crate::models::observer::Observer;
use crate::models::trip::Trip;
use crate::models::user::{Notification, User};
use crate::models::vehicle::Vehicle;

pub type SharedDriver = Rc<RefCell<Driver>>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriverStatus {
    Online,
    InTrip,
    Offline,
}

#[derive(Debug, Clone)]
pub struct Driver {
    user: User,
    vehicle: Vehicle,
    location: Location,
    status: DriverStatus,
}

impl Driver {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        vehicle: Vehicle,
        location: Location,
    ) -> Self {
        Self {
            user: User::new(id, name, contact),
            vehicle,
            location,
            status: DriverStatus::Online,
        }
    }

    pub fn into_shared(self) -> SharedDriver {
        Rc::new(RefCell::new(self))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub(crate) fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn set_status(&mut self, status: DriverStatus) {
        self.status = status;
    }
}

impl Observer for Driver {
    fn on_update(&mut self, trip: &Trip) {
        debug!(
            driver_id = %self.user.id(),
            trip_id = %trip.id(),
            status = trip.status().as_str(),
            "driver notified of trip status change"
        );

        self.user.push_notification(Notification {
            trip_id: trip.id(),
            status: trip.status(),
        });
    }
}
