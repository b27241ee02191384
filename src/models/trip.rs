use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::Location;
use crate::models::driver::SharedDriver;
use crate::models::observer::TripObserver;
use crate::models::rider::SharedRider;
use crate::models::vehicle::RideType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripStatus {
    Requested,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Requested => "requested",
            TripStatus::Assigned => "assigned",
            TripStatus::InProgress => "in_progress",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }
}

/// Reporting view of a trip.
#[derive(Debug, Clone, Serialize)]
pub struct TripSummary {
    pub id: Uuid,
    pub rider_id: String,
    pub driver_id: Option<String>,
    pub ride_type: RideType,
    pub status: TripStatus,
    pub fare: f64,
}

/// A single ride, from request to completion or cancellation.
///
/// Transitions that do not start from their required state are ignored and
/// report `false`. Every transition that fires notifies all observers in
/// registration order.
#[derive(Debug)]
pub struct Trip {
    id: Uuid,
    rider: SharedRider,
    pickup: Location,
    dropoff: Location,
    ride_type: RideType,
    driver: Option<SharedDriver>,
    status: TripStatus,
    fare: f64,
    observers: Vec<TripObserver>,
}

impl Trip {
    pub fn new(
        id: Uuid,
        rider: SharedRider,
        pickup: Location,
        dropoff: Location,
        ride_type: RideType,
    ) -> Self {
        let mut trip = Self {
            id,
            rider: rider.clone(),
            pickup,
            dropoff,
            ride_type,
            driver: None,
            status: TripStatus::Requested,
            fare: 0.0,
            observers: Vec::new(),
        };
        trip.add_observer(TripObserver::Rider(rider));
        trip
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn rider(&self) -> &SharedRider {
        &self.rider
    }

    pub fn driver(&self) -> Option<&SharedDriver> {
        self.driver.as_ref()
    }

    pub fn pickup(&self) -> Location {
        self.pickup
    }

    pub fn dropoff(&self) -> Location {
        self.dropoff
    }

    pub fn ride_type(&self) -> RideType {
        self.ride_type
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    pub(crate) fn set_fare(&mut self, fare: f64) {
        self.fare = fare;
    }

    pub fn rider_id(&self) -> String {
        self.rider.borrow().user().id().to_string()
    }

    pub fn driver_id(&self) -> Option<String> {
        self.driver
            .as_ref()
            .map(|driver| driver.borrow().user().id().to_string())
    }

    pub fn involves(&self, user_id: &str) -> bool {
        if self.rider.borrow().user().id() == user_id {
            return true;
        }

        self.driver
            .as_ref()
            .is_some_and(|driver| driver.borrow().user().id() == user_id)
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary {
            id: self.id,
            rider_id: self.rider_id(),
            driver_id: self.driver_id(),
            ride_type: self.ride_type,
            status: self.status,
            fare: self.fare,
        }
    }

    pub fn observers(&self) -> &[TripObserver] {
        &self.observers
    }

    /// Registers an observer unless the same handle is already registered.
    pub fn add_observer(&mut self, observer: TripObserver) {
        if !self.observers.iter().any(|existing| existing.is_same(&observer)) {
            self.observers.push(observer);
        }
    }

    pub fn remove_observer(&mut self, observer: &TripObserver) {
        self.observers.retain(|existing| !existing.is_same(observer));
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.notify(self);
        }
    }

    /// Binds the driver. A trip is assigned at most once.
    pub fn assign_driver(&mut self, driver: SharedDriver) -> bool {
        if self.status != TripStatus::Requested || self.driver.is_some() {
            return false;
        }

        self.driver = Some(driver.clone());
        self.status = TripStatus::Assigned;
        self.add_observer(TripObserver::Driver(driver));
        self.notify_observers();
        true
    }

    pub fn start(&mut self) -> bool {
        if self.status != TripStatus::Assigned {
            return false;
        }

        self.status = TripStatus::InProgress;
        self.notify_observers();
        true
    }

    /// Completes the trip at `fare` and records it in the participants'
    /// histories.
    pub fn complete(&mut self, fare: f64) -> bool {
        if self.status != TripStatus::InProgress {
            return false;
        }

        self.status = TripStatus::Completed;
        self.fare = fare;
        self.notify_observers();

        self.rider.borrow_mut().user_mut().add_trip_to_history(self.id);
        if let Some(driver) = &self.driver {
            driver.borrow_mut().user_mut().add_trip_to_history(self.id);
        }
        true
    }

    pub fn cancel(&mut self) -> bool {
        if !matches!(self.status, TripStatus::Requested | TripStatus::Assigned) {
            return false;
        }

        self.status = TripStatus::Cancelled;
        self.notify_observers();
        true
    }
}
