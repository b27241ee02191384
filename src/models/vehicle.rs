use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RideType {
    Sedan,
    Suv,
    Auto,
}

impl RideType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideType::Sedan => "sedan",
            RideType::Suv => "suv",
            RideType::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub model: String,
    pub license_plate: String,
    pub ride_type: RideType,
}

impl Vehicle {
    pub fn new(
        model: impl Into<String>,
        license_plate: impl Into<String>,
        ride_type: RideType,
    ) -> Self {
        Self {
            model: model.into(),
            license_plate: license_plate.into(),
            ride_type,
        }
    }
}
