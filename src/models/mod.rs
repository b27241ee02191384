pub mod driver;
pub mod observer;
pub mod rider;
pub mod trip;
pub mod user;
pub mod vehicle;
