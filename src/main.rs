use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ride_dispatch::config::{Config, LogFormat};
use ride_dispatch::engine::dispatch::Dispatcher;
use ride_dispatch::engine::pricing::FlatRatePricing;
use ride_dispatch::error::AppError;
use ride_dispatch::geo::Location;
use ride_dispatch::models::driver::Driver;
use ride_dispatch::models::rider::Rider;
use ride_dispatch::models::trip::TripSummary;
use ride_dispatch::models::user::User;
use ride_dispatch::models::vehicle::{RideType, Vehicle};

#[derive(Serialize)]
struct HistoryReport {
    user_id: String,
    name: String,
    trips: Vec<TripSummary>,
}

fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let mut dispatcher = Dispatcher::from_config(&config);

    let downtown = Location::new(37.7749, -122.4194);
    let mission = Location::new(37.7849, -122.4094);
    let embarcadero = Location::new(37.7949, -122.3994);
    let bay_bridge = Location::new(37.8049, -122.3894);

    let john = Driver::new(
        "D001",
        "John Doe",
        "+1-555-0101",
        Vehicle::new("Tesla Model 3", "ABC123", RideType::Sedan),
        downtown,
    )
    .into_shared();
    let jane = Driver::new(
        "D002",
        "Jane Smith",
        "+1-555-0102",
        Vehicle::new("Toyota Highlander", "XYZ789", RideType::Suv),
        mission,
    )
    .into_shared();
    let bob = Driver::new(
        "D003",
        "Bob Johnson",
        "+1-555-0103",
        Vehicle::new("Auto Rickshaw", "DEF456", RideType::Auto),
        embarcadero,
    )
    .into_shared();

    dispatcher.register_driver(john.clone());
    dispatcher.register_driver(jane);
    dispatcher.register_driver(bob);

    let alice = Rider::new("R001", "Alice Brown", "+1-555-0201").into_shared();
    let charlie = Rider::new("R002", "Charlie Davis", "+1-555-0202").into_shared();

    tracing::info!(scenario = 1, "sedan trip, completed");
    if let Some(trip_id) = dispatcher
        .request_trip(alice.clone(), downtown, bay_bridge, RideType::Sedan)
        .map(|trip| trip.id())
    {
        dispatcher.start_trip(trip_id);
        dispatcher.complete_trip(trip_id);
    }

    tracing::info!(scenario = 2, "suv trip, cancelled after start");
    if let Some(trip_id) = dispatcher
        .request_trip(charlie.clone(), mission, embarcadero, RideType::Suv)
        .map(|trip| trip.id())
    {
        dispatcher.start_trip(trip_id);
        dispatcher.cancel_trip(trip_id);
    }

    tracing::info!(scenario = 3, "auto trip, completed");
    if let Some(trip_id) = dispatcher
        .request_trip(alice.clone(), embarcadero, bay_bridge, RideType::Auto)
        .map(|trip| trip.id())
    {
        dispatcher.start_trip(trip_id);
        dispatcher.complete_trip(trip_id);
    }

    tracing::info!(scenario = 4, "flat rate sedan trip");
    dispatcher.set_pricing_policy(Box::new(FlatRatePricing));
    if let Some(trip_id) = dispatcher
        .request_trip(charlie.clone(), downtown, bay_bridge, RideType::Sedan)
        .map(|trip| trip.id())
    {
        dispatcher.start_trip(trip_id);
        dispatcher.complete_trip(trip_id);
    }

    let reports = vec![
        history_report(&dispatcher, alice.borrow().user()),
        history_report(&dispatcher, charlie.borrow().user()),
        history_report(&dispatcher, john.borrow().user()),
    ];

    println!("{}", serde_json::to_string_pretty(&reports)?);

    if config.print_metrics {
        println!("{}", dispatcher.metrics().encode()?);
    }

    Ok(())
}

fn history_report(dispatcher: &Dispatcher, user: &User) -> HistoryReport {
    HistoryReport {
        user_id: user.id().to_string(),
        name: user.name().to_string(),
        trips: user
            .trip_history()
            .iter()
            .filter_map(|id| dispatcher.trip(*id))
            .map(|trip| trip.summary())
            .collect(),
    }
}

fn init_tracing(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
