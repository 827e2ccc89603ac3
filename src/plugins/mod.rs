mod flight;

pub use flight::{DroneFlightPlugin, FlightSet};
