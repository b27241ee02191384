use std::rc::Rc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{Config, PricingKind};
use crate::engine::matching::{MatchingPolicy, NearestDriverMatching};
use crate::engine::pricing::{FlatRatePricing, PricingPolicy, VehicleBasedPricing};
use crate::geo::Location;
use crate::models::driver::{DriverStatus, SharedDriver};
use crate::models::rider::SharedRider;
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::RideType;
use crate::observability::metrics::Metrics;

/// Owns the driver and trip registries and the active policies, and drives
/// every request through match, assignment and pricing.
///
/// One dispatcher is expected per process; it is passed explicitly to
/// whatever needs it.
pub struct Dispatcher {
    drivers: Vec<SharedDriver>,
    trips: Vec<Trip>,
    pricing: Box<dyn PricingPolicy>,
    matching: Box<dyn MatchingPolicy>,
    metrics: Metrics,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(
            Box::new(VehicleBasedPricing::default()),
            Box::new(NearestDriverMatching::default()),
        )
    }
}

impl Dispatcher {
    pub fn new(pricing: Box<dyn PricingPolicy>, matching: Box<dyn MatchingPolicy>) -> Self {
        Self {
            drivers: Vec::new(),
            trips: Vec::new(),
            pricing,
            matching,
            metrics: Metrics::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let pricing: Box<dyn PricingPolicy> = match config.pricing {
            PricingKind::VehicleBased => Box::new(VehicleBasedPricing::default()),
            PricingKind::FlatRate => Box::new(FlatRatePricing),
        };

        Self::new(
            pricing,
            Box::new(NearestDriverMatching::new(config.match_radius)),
        )
    }

    pub fn set_pricing_policy(&mut self, pricing: Box<dyn PricingPolicy>) {
        info!(
            from = self.pricing.name(),
            to = pricing.name(),
            "pricing policy replaced"
        );
        self.pricing = pricing;
    }

    pub fn set_matching_policy(&mut self, matching: Box<dyn MatchingPolicy>) {
        info!(
            from = self.matching.name(),
            to = matching.name(),
            "matching policy replaced"
        );
        self.matching = matching;
    }

    pub fn pricing_policy(&self) -> &dyn PricingPolicy {
        self.pricing.as_ref()
    }

    pub fn matching_policy(&self) -> &dyn MatchingPolicy {
        self.matching.as_ref()
    }

    /// Adds a driver. Registering the same handle twice has no effect.
    pub fn register_driver(&mut self, driver: SharedDriver) {
        if self.drivers.iter().any(|known| Rc::ptr_eq(known, &driver)) {
            return;
        }

        debug!(driver_id = %driver.borrow().user().id(), "driver registered");
        self.drivers.push(driver);
        self.metrics.registered_drivers.set(self.drivers.len() as i64);
    }

    pub fn drivers(&self) -> &[SharedDriver] {
        &self.drivers
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip(&self, trip_id: Uuid) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id() == trip_id)
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Matches, assigns and prices a new trip.
    ///
    /// Returns `None` when no driver qualifies. The unmatched trip is
    /// cancelled, which notifies the rider, and is not kept.
    pub fn request_trip(
        &mut self,
        rider: SharedRider,
        pickup: Location,
        dropoff: Location,
        ride_type: RideType,
    ) -> Option<&Trip> {
        let trip_id = Uuid::new_v4();
        let mut trip = Trip::new(trip_id, rider, pickup, dropoff, ride_type);

        let candidates = self
            .matching
            .find_drivers(&self.drivers, &pickup, ride_type);

        let Some(driver) = candidates.into_iter().next() else {
            warn!(
                trip_id = %trip_id,
                ride_type = ride_type.as_str(),
                "no drivers available for trip"
            );
            trip.cancel();
            self.metrics
                .trip_requests_total
                .with_label_values(&["unmatched"])
                .inc();
            return None;
        };

        driver.borrow_mut().set_status(DriverStatus::InTrip);
        trip.assign_driver(driver.clone());

        let fare = self.pricing.calculate_fare(&pickup, &dropoff, ride_type);
        trip.set_fare(fare);

        info!(
            trip_id = %trip_id,
            driver_id = %driver.borrow().user().id(),
            pricing = self.pricing.name(),
            fare,
            "trip created and assigned"
        );

        self.metrics
            .trip_requests_total
            .with_label_values(&["matched"])
            .inc();
        self.metrics.trip_fare.observe(fare);
        record_transition(&self.metrics, TripStatus::Assigned);

        self.trips.push(trip);
        self.trips.last()
    }

    /// Returns whether the trip exists, whether or not it could start.
    pub fn start_trip(&mut self, trip_id: Uuid) -> bool {
        let Some(trip) = find_trip_mut(&mut self.trips, trip_id) else {
            return false;
        };

        if trip.start() {
            info!(trip_id = %trip_id, "trip started");
            record_transition(&self.metrics, TripStatus::InProgress);
        } else {
            debug!(trip_id = %trip_id, status = trip.status().as_str(), "start ignored");
        }
        true
    }

    /// Completes the trip at its quoted fare. The driver goes back online
    /// even when the trip was not in progress.
    pub fn complete_trip(&mut self, trip_id: Uuid) -> bool {
        let Some(trip) = find_trip_mut(&mut self.trips, trip_id) else {
            return false;
        };

        let fare = trip.fare();
        if trip.complete(fare) {
            info!(trip_id = %trip_id, fare, "trip completed");
            record_transition(&self.metrics, TripStatus::Completed);
        } else {
            debug!(trip_id = %trip_id, status = trip.status().as_str(), "complete ignored");
        }

        release_driver(trip);
        true
    }

    pub fn cancel_trip(&mut self, trip_id: Uuid) -> bool {
        let Some(trip) = find_trip_mut(&mut self.trips, trip_id) else {
            return false;
        };

        if trip.cancel() {
            info!(trip_id = %trip_id, "trip cancelled");
            record_transition(&self.metrics, TripStatus::Cancelled);
        } else {
            debug!(trip_id = %trip_id, status = trip.status().as_str(), "cancel ignored");
        }

        release_driver(trip);
        true
    }

    /// Every registered trip where `user_id` is the rider or the driver.
    pub fn trip_history(&self, user_id: &str) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|trip| trip.involves(user_id))
            .collect()
    }
}

fn find_trip_mut(trips: &mut [Trip], trip_id: Uuid) -> Option<&mut Trip> {
    trips.iter_mut().find(|trip| trip.id() == trip_id)
}

fn release_driver(trip: &Trip) {
    if let Some(driver) = trip.driver() {
        driver.borrow_mut().set_status(DriverStatus::Online);
    }
}

fn record_transition(metrics: &Metrics, status: TripStatus) {
    metrics
        .trip_transitions_total
        .with_label_values(&[status.as_str()])
        .inc();
}
