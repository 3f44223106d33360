pub mod bus;
pub mod coordinates;
pub mod distance;
pub mod fare;

pub use bus::{BusCategory, BusClass, BusClassInfo, CityClass, StateClass};
pub use coordinates::Coordinates;
pub use distance::DistanceKm;
pub use fare::{Fare, FareQuote, QuoteRequest};
