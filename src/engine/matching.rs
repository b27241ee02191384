use crate::geo::Location;
use crate::models::driver::{DriverStatus, SharedDriver};
use crate::models::vehicle::RideType;

/// Default pickup radius, in the units of [`Location::distance_to`].
pub const MAX_DISTANCE: f64 = 5.0;

/// Chooses eligible drivers for a request, best candidate first.
///
/// Implementations only read driver state and return an empty list when
/// nobody qualifies.
pub trait MatchingPolicy {
    fn name(&self) -> &'static str;

    fn find_drivers(
        &self,
        drivers: &[SharedDriver],
        pickup: &Location,
        ride_type: RideType,
    ) -> Vec<SharedDriver>;
}

#[derive(Debug, Clone)]
pub struct NearestDriverMatching {
    max_distance: f64,
}

impl NearestDriverMatching {
    pub fn new(max_distance: f64) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl Default for NearestDriverMatching {
    fn default() -> Self {
        Self::new(MAX_DISTANCE)
    }
}

impl MatchingPolicy for NearestDriverMatching {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn find_drivers(
        &self,
        drivers: &[SharedDriver],
        pickup: &Location,
        ride_type: RideType,
    ) -> Vec<SharedDriver> {
        let mut candidates: Vec<(SharedDriver, f64)> = drivers
            .iter()
            .filter_map(|handle| {
                let driver = handle.borrow();
                if driver.status() != DriverStatus::Online
                    || driver.vehicle().ride_type != ride_type
                {
                    return None;
                }

                let distance = driver.location().distance_to(pickup);
                (distance <= self.max_distance).then(|| (handle.clone(), distance))
            })
            .collect();

        // stable: equal distances keep registration order
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        candidates.into_iter().map(|(driver, _)| driver).collect()
    }
}
