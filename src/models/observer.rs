use std::rc::Rc;

use crate::models::driver::SharedDriver;
use crate::models::rider::SharedRider;
use crate::models::trip::Trip;

/// Reacts to a trip status change. Receives the trip by shared reference
/// and must not drive trip transitions itself.
pub trait Observer {
    fn on_update(&mut self, trip: &Trip);
}

/// A registered trip observer. Only riders and drivers observe trips.
#[derive(Debug, Clone)]
pub enum TripObserver {
    Rider(SharedRider),
    Driver(SharedDriver),
}

impl TripObserver {
    pub fn notify(&self, trip: &Trip) {
        match self {
            TripObserver::Rider(rider) => rider.borrow_mut().on_update(trip),
            TripObserver::Driver(driver) => driver.borrow_mut().on_update(trip),
        }
    }

    /// Identity comparison on the underlying handle.
    pub fn is_same(&self, other: &TripObserver) -> bool {
        match (self, other) {
            (TripObserver::Rider(a), TripObserver::Rider(b)) => Rc::ptr_eq(a, b),
            (TripObserver::Driver(a), TripObserver::Driver(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
