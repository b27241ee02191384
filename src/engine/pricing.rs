use std::collections::HashMap;

use crate::geo::Location;
use crate::models::vehicle::RideType;

pub const BASE_FARE: f64 = 5.0;
pub const FLAT_RATE: f64 = 20.0;
pub const DEFAULT_RATE: f64 = 10.0;

const SUV_RATE: f64 = 15.0;
const SEDAN_RATE: f64 = 10.0;
const AUTO_RATE: f64 = 5.0;

/// Computes a fare from the request alone. Implementations are pure.
pub trait PricingPolicy {
    fn name(&self) -> &'static str;

    fn calculate_fare(&self, pickup: &Location, dropoff: &Location, ride_type: RideType) -> f64;
}

/// Same fare for every trip.
#[derive(Debug, Clone, Default)]
pub struct FlatRatePricing;

impl PricingPolicy for FlatRatePricing {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn calculate_fare(
        &self,
        _pickup: &Location,
        _dropoff: &Location,
        _ride_type: RideType,
    ) -> f64 {
        BASE_FARE + FLAT_RATE
    }
}

/// Base fare plus distance times a per-category rate.
#[derive(Debug, Clone)]
pub struct VehicleBasedPricing {
    rates: HashMap<RideType, f64>,
}

impl VehicleBasedPricing {
    /// Categories missing from `rates` are charged at [`DEFAULT_RATE`].
    pub fn with_rates(rates: HashMap<RideType, f64>) -> Self {
        Self { rates }
    }

    pub fn rate_for(&self, ride_type: RideType) -> f64 {
        self.rates.get(&ride_type).copied().unwrap_or(DEFAULT_RATE)
    }
}

impl Default for VehicleBasedPricing {
    fn default() -> Self {
        Self::with_rates(HashMap::from([
            (RideType::Suv, SUV_RATE),
            (RideType::Sedan, SEDAN_RATE),
            (RideType::Auto, AUTO_RATE),
        ]))
    }
}

impl PricingPolicy for VehicleBasedPricing {
    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn calculate_fare(&self, pickup: &Location, dropoff: &Location, ride_type: RideType) -> f64 {
        let distance = pickup.distance_to(dropoff);
        BASE_FARE + (distance * self.rate_for(ride_type))
    }
}
