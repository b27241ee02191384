use std::env;
use std::str::FromStr;

use crate::engine::matching::MAX_DISTANCE;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Which pricing policy the dispatcher starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingKind {
    VehicleBased,
    FlatRate,
}

impl FromStr for PricingKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "vehicle" | "vehicle_based" => Ok(PricingKind::VehicleBased),
            "flat" | "flat_rate" => Ok(PricingKind::FlatRate),
            other => Err(format!("unknown pricing policy `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub pricing: PricingKind,
    pub match_radius: f64,
    pub print_metrics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            pricing: PricingKind::VehicleBased,
            match_radius: MAX_DISTANCE,
            print_metrics: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        let match_radius: f64 = parse_or_default("MATCH_RADIUS", defaults.match_radius)?;
        if !match_radius.is_finite() || match_radius < 0.0 {
            return Err(AppError::Config(format!(
                "MATCH_RADIUS must be a non-negative number, got {match_radius}"
            )));
        }

        Ok(Self {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: parse_or_default("LOG_FORMAT", defaults.log_format)?,
            pricing: parse_or_default("PRICING_POLICY", defaults.pricing)?,
            match_radius,
            print_metrics: parse_or_default("PRINT_METRICS", defaults.print_metrics)?,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Config(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
